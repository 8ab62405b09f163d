//! Core business logic abstractions

pub mod config;
pub mod currency;
pub mod log;
pub mod rate;
pub mod validation;

// Re-export main types for cleaner imports
pub use currency::CurrencyCode;
pub use rate::{ExchangeRateProvider, RateQuery};
pub use validation::{DateRejection, parse_date, validate_date};
