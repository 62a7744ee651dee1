use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Destination {
    pub chat_id: String,
}

impl Destination {
    pub fn new(chat_id: impl Into<String>) -> Self {
        Self {
            chat_id: chat_id.into(),
        }
    }

    pub fn parse_list(raw: &str) -> Vec<Destination> {
        raw.split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(Destination::new)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_separated_ids() {
        let destinations = Destination::parse_list("-1002859929632, 42");
        assert_eq!(
            destinations,
            vec![Destination::new("-1002859929632"), Destination::new("42")]
        );
    }

    #[test]
    fn skips_blank_entries() {
        let destinations = Destination::parse_list(" , -100123, ,");
        assert_eq!(destinations, vec![Destination::new("-100123")]);
    }

    #[test]
    fn empty_input_yields_no_destinations() {
        assert!(Destination::parse_list("").is_empty());
        assert!(Destination::parse_list("  ,  ").is_empty());
    }
}
