use chrono::{DateTime, Duration, LocalResult, NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::domain::errors::ConfigError;

#[derive(Debug, Clone, PartialEq)]
pub struct TargetMoment {
    instant: DateTime<Tz>,
}

impl TargetMoment {
    pub fn from_local(local: NaiveDateTime, zone: Tz) -> Result<Self, ConfigError> {
        match zone.from_local_datetime(&local) {
            LocalResult::Single(instant) => Ok(Self { instant }),
            LocalResult::None => Err(ConfigError::NonexistentLocalTime(
                local.to_string(),
                zone.to_string(),
            )),
            LocalResult::Ambiguous(_, _) => Err(ConfigError::AmbiguousLocalTime(
                local.to_string(),
                zone.to_string(),
            )),
        }
    }

    pub fn instant(&self) -> DateTime<Tz> {
        self.instant
    }

    pub fn zone(&self) -> Tz {
        self.instant.timezone()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Countdown {
    Started,
    Pending {
        days: i64,
        hours: i64,
        minutes: i64,
        seconds: i64,
    },
}

impl Countdown {
    pub fn at(target: &TargetMoment, now: DateTime<Tz>) -> Countdown {
        let delta = target.instant.signed_duration_since(now);
        // reaching the target exactly counts as started
        if delta <= Duration::zero() {
            return Countdown::Started;
        }

        let total = delta.num_seconds();
        Countdown::Pending {
            days: total / 86_400,
            hours: (total % 86_400) / 3_600,
            minutes: (total % 3_600) / 60,
            seconds: total % 60,
        }
    }

    pub fn started(&self) -> bool {
        matches!(self, Countdown::Started)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use chrono_tz::Europe::Dublin;

    fn dublin_target() -> TargetMoment {
        let local = NaiveDate::from_ymd_opt(2025, 8, 16)
            .unwrap()
            .and_hms_opt(19, 30, 0)
            .unwrap();
        TargetMoment::from_local(local, Dublin).unwrap()
    }

    #[test]
    fn one_day_before_target() {
        let target = dublin_target();
        let now = target.instant() - Duration::days(1);

        assert_eq!(
            Countdown::at(&target, now),
            Countdown::Pending {
                days: 1,
                hours: 0,
                minutes: 0,
                seconds: 0
            }
        );
    }

    #[test]
    fn exact_target_time_counts_as_started() {
        let target = dublin_target();
        let now = target.instant();

        assert_eq!(Countdown::at(&target, now), Countdown::Started);
    }

    #[test]
    fn past_target_counts_as_started() {
        let target = dublin_target();
        let now = target.instant() + Duration::hours(3);

        assert!(Countdown::at(&target, now).started());
    }

    #[test]
    fn decomposition_stays_in_unit_bounds() {
        let target = dublin_target();
        let now = target.instant()
            - Duration::days(2)
            - Duration::hours(23)
            - Duration::minutes(59)
            - Duration::seconds(59);

        assert_eq!(
            Countdown::at(&target, now),
            Countdown::Pending {
                days: 2,
                hours: 23,
                minutes: 59,
                seconds: 59
            }
        );
    }

    #[test]
    fn decomposition_reconstructs_total_seconds() {
        let target = dublin_target();
        let remaining = Duration::days(12)
            + Duration::hours(5)
            + Duration::minutes(40)
            + Duration::seconds(17);
        let now = target.instant() - remaining;

        match Countdown::at(&target, now) {
            Countdown::Pending {
                days,
                hours,
                minutes,
                seconds,
            } => {
                assert_eq!(
                    days * 86_400 + hours * 3_600 + minutes * 60 + seconds,
                    remaining.num_seconds()
                );
            }
            Countdown::Started => panic!("target is still in the future"),
        }
    }

    #[test]
    fn sub_second_remainder_floors_to_zero() {
        let target = dublin_target();
        let now = target.instant() - Duration::milliseconds(500);

        assert_eq!(
            Countdown::at(&target, now),
            Countdown::Pending {
                days: 0,
                hours: 0,
                minutes: 0,
                seconds: 0
            }
        );
    }

    #[test]
    fn target_in_dst_gap_is_rejected() {
        // Dublin skips 01:00-02:00 on 2025-03-30
        let local = NaiveDate::from_ymd_opt(2025, 3, 30)
            .unwrap()
            .and_hms_opt(1, 30, 0)
            .unwrap();

        assert!(matches!(
            TargetMoment::from_local(local, Dublin),
            Err(ConfigError::NonexistentLocalTime(_, _))
        ));
    }

    #[test]
    fn target_in_dst_fold_is_rejected() {
        // Dublin repeats 01:00-02:00 on 2025-10-26
        let local = NaiveDate::from_ymd_opt(2025, 10, 26)
            .unwrap()
            .and_hms_opt(1, 30, 0)
            .unwrap();

        assert!(matches!(
            TargetMoment::from_local(local, Dublin),
            Err(ConfigError::AmbiguousLocalTime(_, _))
        ));
    }
}
