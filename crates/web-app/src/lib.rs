#![warn(clippy::pedantic)]

pub mod config;
pub mod log;
pub mod scroll;

pub use config::{Contact, Partner, SiteConfig};
