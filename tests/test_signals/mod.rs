pub mod generate;

pub use generate::{closed_form_output, impulse, pseudo_random, ramp, step};
