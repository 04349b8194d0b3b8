use rand::RngExt;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Unit impulse: 1 at index 0, zero elsewhere
#[allow(dead_code)]
pub fn impulse<const N: usize>() -> [i32; N] {
    let mut signal = [0; N];
    if N > 0 {
        signal[0] = 1;
    }
    signal
}

/// Constant signal
#[allow(dead_code)]
pub fn step<const N: usize>(value: i32) -> [i32; N] {
    [value; N]
}

/// Ramp `start, start + 1, ...`
#[allow(dead_code)]
pub fn ramp<const N: usize>(start: i32) -> [i32; N] {
    std::array::from_fn(|i| start + i as i32)
}

/// Seeded uniform samples in `[-range, range]`
#[allow(dead_code)]
pub fn pseudo_random<const N: usize>(seed: u64, range: i32) -> [i32; N] {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    std::array::from_fn(|_| rng.random_range(-range..=range))
}

/// Expected output after a full pass:
/// `output[j] = input[j] * (taps[0] + ... + taps[N-1-j])`, wrapping
pub fn closed_form_output<const N: usize>(taps: &[i32; N], input: &[i32; N]) -> [i32; N] {
    std::array::from_fn(|j| {
        let tap_sum = taps[..N - j]
            .iter()
            .fold(0i32, |acc, &t| acc.wrapping_add(t));
        input[j].wrapping_mul(tap_sum)
    })
}
