mod config_service;
mod config_service_impl;

pub use config_service::*;
pub use config_service_impl::*;
