//! The `quant` module implements the lossless 16-bit <-> 10-bit
//! requantization map.
//!
//! `quant` recovers the 10-bit label the upstream sensor originally sampled,
//! by floored division. `dequant` reconstructs the exact 16-bit value the
//! upscaler produced from that label, using an affine fit of the upscaler
//! rather than a theoretical formula -- the constants are a table, not a
//! derivation, and must not be "simplified".

/// Affine reconstruction coefficients fitted to the upstream 10-bit to
/// 16-bit upscaler. Do not replace with a round-number approximation: the
/// round-trip in `dequant(quant(s)) == s` depends on these exact digits.
const SCALE: f64 = 64.061577;
const OFFSET: f64 = 31.034184;

/// Forward map: `floor(s / 64)`, using floored (not truncating) division,
/// so `quant(-1) == -1`.
pub fn quant(s: i16) -> i32 {
    (s as i32).div_euclid(64)
}

/// Inverse map: reconstructs the 16-bit sample an upstream upscaler would
/// have produced for quantized label `q`, rounding half away from zero.
pub fn dequant(q: i32) -> i16 {
    if q >= 0 {
        (q as f64 * SCALE + OFFSET).round() as i32 as i16
    } else {
        let mag = (-q - 1) as f64 * SCALE + OFFSET;
        (-(mag.round() as i32) - 1) as i16
    }
}
