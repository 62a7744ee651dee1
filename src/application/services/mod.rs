pub mod notifier;
pub mod updates;
