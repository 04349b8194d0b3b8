//! Filter entry points for the user project RAM region
//!
//! `MprjFir` binds an engine to the build-time coefficient table and input
//! signal so the filter can be run with no arguments. With the `mprjram`
//! feature enabled, `init_fir` and `fir` are emitted into the `.mprjram`
//! link section (see [`crate::constants::MPRJ_SECTION`]); the linker script
//! of the target must provide that section.

use crate::constants::{INPUT_SIGNAL, N, TAPS};
use crate::signal_processing::FirEngine;

/// Filter instance bound to a fixed coefficient table and input signal
pub struct MprjFir<'a> {
    engine: FirEngine<'a, N>,
    input: &'a [i32; N],
}

impl<'a> MprjFir<'a> {
    /// Bind an engine to the given coefficients and input signal
    pub fn new(taps: &'a [i32; N], input: &'a [i32; N]) -> Self {
        Self {
            engine: FirEngine::new(taps),
            input,
        }
    }

    /// Zero the input history and output buffers
    #[inline(never)]
    #[cfg_attr(feature = "mprjram", unsafe(link_section = ".mprjram"))]
    pub fn init_fir(&mut self) {
        self.engine.reset();
    }

    /// Run the filter over the bound input and return the output buffer
    #[inline(never)]
    #[cfg_attr(feature = "mprjram", unsafe(link_section = ".mprjram"))]
    pub fn fir(&mut self) -> &[i32; N] {
        self.engine.compute(self.input)
    }

    /// Output buffer from the last run
    pub fn output(&self) -> &[i32; N] {
        self.engine.output()
    }
}

impl Default for MprjFir<'static> {
    fn default() -> Self {
        Self::new(&TAPS, &INPUT_SIGNAL)
    }
}
