//! SMS channel implementations
//!
//! Two ways to get a credential message out of the device:
//! - [`ConsoleSmsChannel`]: logs the composed message, for development
//!   and demos
//! - [`ComposerSmsChannel`]: builds the platform `sms:` URL and hands it
//!   to the OS linking layer

pub mod composer;
pub mod console;

pub use composer::{ComposerSmsChannel, Platform, UrlOpener};
pub use console::ConsoleSmsChannel;
