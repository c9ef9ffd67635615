//!
//! Module with all dtos that are passed between the portal host and services
//!

pub mod input;
pub mod output;

mod category;
mod config;
mod notification;

pub use category::*;
pub use config::*;
pub use notification::*;
