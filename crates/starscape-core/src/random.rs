use rand::Rng;

/// Uniform random value in `[min, max]` snapped to multiples of `increment`
/// counted from `min`. Every step, both endpoints included, is equally
/// likely. An `increment` of zero or less returns an unsnapped value.
pub fn random_snapped<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32, increment: f32) -> f32 {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    if increment <= 0.0 {
        return rng.gen_range(lo..=hi);
    }
    // small epsilon so 0.2 - 0.1 still counts as one full 0.1 step
    let steps = ((hi - lo) / increment + 1e-4).floor() as u32;
    let k = rng.gen_range(0..=steps);
    (lo + k as f32 * increment).clamp(lo, hi)
}
