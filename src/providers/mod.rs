pub mod nbu;

pub use nbu::NbuProvider;
