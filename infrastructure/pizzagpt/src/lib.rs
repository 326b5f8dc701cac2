pub mod client;
pub mod config;
pub mod error_mapper;
pub mod service;

pub use client::PizzaGptClient;
pub use config::{DEFAULT_TIMEOUT, PizzaGptConfig};
pub use service::{default_service, service_from_config};
