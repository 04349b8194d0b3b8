pub mod fir_core;
pub mod mprj;

pub use fir_core::FirEngine;
pub use mprj::MprjFir;
