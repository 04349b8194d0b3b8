pub mod config;
pub mod constants;
pub mod error;
pub mod output;
pub mod signal_processing;

pub use config::FirConfig;
pub use error::{FirError, Result};
pub use signal_processing::{FirEngine, MprjFir};
