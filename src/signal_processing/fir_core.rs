/// Fixed-length FIR filter engine
///
/// Owns the input history (`state`) and the accumulated output. Tap
/// coefficients are borrowed, so any number of engines can share one
/// coefficient table read-only.
///
/// Filter length and signal length are the same const parameter `N`. A pass
/// consumes exactly `N` input samples and accumulates, for every step `i` and
/// every `j <= i`:
///
/// ```text
/// output[j] += state[j] * taps[i - j]
/// ```
///
/// so after a full pass `output[j] = input[j] * (taps[0] + ... + taps[N-1-j])`.
///
/// Arithmetic is 32-bit two's complement: products and sums wrap on overflow
/// in every build profile.
///
/// # Example
/// ```
/// use mprjfir::signal_processing::FirEngine;
///
/// let taps = [1, 2, 3, 4];
/// let mut engine = FirEngine::new(&taps);
/// assert_eq!(engine.compute(&[1, 1, 1, 1]), &[10, 6, 3, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct FirEngine<'a, const N: usize> {
    taps: &'a [i32; N],
    state: [i32; N],
    output: [i32; N],
    complete: bool,
}

impl<'a, const N: usize> FirEngine<'a, N> {
    /// Create an engine with zeroed buffers over the given tap coefficients
    pub fn new(taps: &'a [i32; N]) -> Self {
        Self {
            taps,
            state: [0; N],
            output: [0; N],
            complete: false,
        }
    }

    /// Zero the state and output buffers
    pub fn reset(&mut self) {
        self.state = [0; N];
        self.output = [0; N];
        self.complete = false;
    }

    /// Run one full filtering pass over `input` and return the output buffer
    ///
    /// Always starts from a reset, so repeated calls with the same input give
    /// the same result.
    pub fn compute(&mut self, input: &[i32; N]) -> &[i32; N] {
        self.reset();

        for i in 0..N {
            self.state[i] = input[i];
            for j in 0..=i {
                let product = self.state[j].wrapping_mul(self.taps[i - j]);
                self.output[j] = self.output[j].wrapping_add(product);
            }
        }

        self.complete = true;
        log::trace!("FIR pass complete: {} taps, output {:?}", N, self.output);
        &self.output
    }

    /// Output buffer from the last pass (all zero after a reset)
    pub fn output(&self) -> &[i32; N] {
        &self.output
    }

    /// Input history captured during the last pass
    pub fn state(&self) -> &[i32; N] {
        &self.state
    }

    /// Get access to the tap coefficients
    pub fn taps(&self) -> &'a [i32; N] {
        self.taps
    }

    /// Get the number of taps (filter length)
    pub fn num_taps(&self) -> usize {
        N
    }

    /// True once a pass has finished and until the next reset
    pub fn is_complete(&self) -> bool {
        self.complete
    }
}
