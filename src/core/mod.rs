pub mod error;
pub mod format;
pub mod icons;
pub mod notifier;
pub mod types;
