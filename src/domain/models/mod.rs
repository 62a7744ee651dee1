pub mod countdown;
pub mod destination;
pub mod message;

pub use countdown::{Countdown, TargetMoment};
pub use destination::Destination;
pub use message::{MessageContent, MessageTemplate, ParseMode, UnitDisplay};
