//! Build-time filter parameters
//!
//! The filter length, coefficients and test signal are fixed at compile time.
//! Changing `N` means every array below (and every engine built from them)
//! has to be rebuilt.

/// Number of taps, input samples, state entries and output samples.
pub const N: usize = 11;

/// Default filter coefficients (symmetric low-pass impulse response).
pub const TAPS: [i32; N] = [0, -10, -9, 23, 56, 63, 56, 23, -9, -10, 0];

/// Default input signal: a ramp from 1 to N.
pub const INPUT_SIGNAL: [i32; N] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11];

/// Linker section the filter code runs from when the `mprjram` feature is on.
pub const MPRJ_SECTION: &str = ".mprjram";
