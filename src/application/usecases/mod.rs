pub mod broadcast_countdown;
pub mod reply_countdown;
