// Exponential-decay weighted smoothing.
// Output i is a weighted average of every input, input j carrying weight
// smoothness^|i - j|. The weight sum is recomputed per index, so positions
// near the edges are not biased by their missing neighbours (no padding).
// O(N^2), which is fine for the N <= 50 arrays this runs on.
pub fn smooth(nums: &[f64], smoothness: f64) -> Vec<f64> {
    let n = nums.len();
    let mut res = Vec::with_capacity(n);
    for i in 0..n {
        let mut weighted = 0.0;
        let mut total = 0.0;
        for (j, &v) in nums.iter().enumerate() {
            let w = smoothness.powi((i as i32 - j as i32).abs());
            weighted += w * v;
            total += w;
        }
        res.push(weighted / total);
    }
    res
}

#[cfg(test)]
mod tests {
    use super::smooth;
    use approx::assert_relative_eq;

    #[test]
    fn smooth_length() {
        let out = smooth(&[0.1, 0.9, 0.4], 0.6);
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn smooth_zero_smoothness_is_identity() {
        // At smoothness 0 every weight except j == i vanishes (0^0 == 1)
        let input = [0.3, 0.8, 0.1, 0.5];
        assert_eq!(smooth(&input, 0.0), input.to_vec());
    }

    #[test]
    fn smooth_constant_input_unchanged() {
        let input = [0.7; 10];
        for &s in &[0.3, 0.6, 0.89] {
            for v in smooth(&input, s) {
                assert_relative_eq!(v, 0.7, max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn smooth_symmetric_influence() {
        // The kernel only depends on |i - j|, so reversing the input
        // reverses the output (up to summation order)
        let input = [0.1, 0.6, 0.9, 0.2, 0.5, 0.3];
        let mut reversed = input;
        reversed.reverse();
        let fwd = smooth(&input, 0.7);
        let rev = smooth(&reversed, 0.7);
        for i in 0..input.len() {
            assert_relative_eq!(fwd[i], rev[input.len() - 1 - i], max_relative = 1e-12);
        }
    }

    #[test]
    fn smooth_stays_within_input_range() {
        // Each output is a convex combination of the inputs
        let input = [0.05, 0.95, 0.2, 0.8, 0.5];
        for v in smooth(&input, 0.7) {
            assert!(v >= 0.05 && v <= 0.95);
        }
    }

    #[test]
    fn smooth_flattens_a_spike() {
        let input = [0.0, 0.0, 1.0, 0.0, 0.0];
        let light = smooth(&input, 0.3);
        let heavy = smooth(&input, 0.8);
        // Stronger smoothing pulls the peak further down
        assert!(heavy[2] < light[2]);
        assert!(light[2] < 1.0);
    }
}
