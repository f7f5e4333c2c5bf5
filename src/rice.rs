//! The `rice` module implements stateless Rice/Golomb-Rice coding of a
//! single signed integer, plus the zig-zag fold used to map it to an
//! unsigned codomain.
//!
//! Mirrors the decoding claxon performs on FLAC's own (unsigned, per-sample)
//! Rice residuals in `subframe::rice_to_signed`, generalized to also encode,
//! and to report the codeword length the caller's adaptive-`k` controller
//! needs.

use crate::bitio::{BitReader, BitWriter};
use crate::error::Result;

/// Maps a signed integer to an unsigned one via zig-zag folding, so that
/// small-magnitude values of either sign map to small unsigned values:
/// `0, -1, 1, -2, 2, ... -> 0, 1, 2, 3, 4, ...`
#[inline]
pub fn fold(v: i64) -> u64 {
    ((v << 1) ^ (v >> 63)) as u64
}

/// The inverse of [`fold`].
#[inline]
pub fn unfold(u: u64) -> i64 {
    if u & 1 == 1 {
        -((u >> 1) as i64) - 1
    } else {
        (u >> 1) as i64
    }
}

/// Encodes `v` as a Rice codeword with parameter `k` (`k <= 32`), writing it
/// to `writer`. Returns the codeword length in bits: `msbs + 1 + k`.
pub fn encode(writer: &mut BitWriter, v: i64, k: u32) -> u32 {
    debug_assert!(k <= 32);

    let u = fold(v);
    let msbs = u >> k;
    debug_assert!(msbs <= u32::MAX as u64, "rice quotient overflowed u32");

    writer.write_unary(msbs as u32);
    let lsbs = if k == 0 { 0 } else { (u & ((1u64 << k) - 1)) as u32 };
    writer.write(lsbs, k);

    msbs as u32 + 1 + k
}

/// Decodes one Rice codeword with parameter `k` from `reader`. Returns the
/// decoded value and the codeword length in bits, matching [`encode`].
pub fn decode(reader: &mut BitReader, k: u32) -> Result<(i64, u32)> {
    debug_assert!(k <= 32);

    let msbs = reader.read_unary()?;
    let lsbs = reader.read(k)?;
    let u = ((msbs as u64) << k) | lsbs as u64;

    Ok((unfold(u), msbs + 1 + k))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_unfold_is_a_bijection() {
        assert_eq!(fold(0), 0);
        assert_eq!(fold(-1), 1);
        assert_eq!(fold(1), 2);
        assert_eq!(fold(-2), 3);
        assert_eq!(fold(2), 4);

        for v in [-1_000_000i64, -1, 0, 1, 1_000_000, i32::MIN as i64, i32::MAX as i64] {
            assert_eq!(unfold(fold(v)), v);
        }
    }

    #[test]
    fn rice_round_trip_matches_spec_sample() {
        // s=0 with k=3: u=0, msbs=0, emits "0001" (4 bits).
        let mut w = BitWriter::new();
        let len = encode(&mut w, 0, 3);
        assert_eq!(len, 4);
        let bytes = w.into_bytes();
        assert_eq!(bytes[0] >> 4, 0b0001);

        let mut r = BitReader::new(&bytes);
        let (v, len) = decode(&mut r, 3).unwrap();
        assert_eq!(v, 0);
        assert_eq!(len, 4);
    }

    #[test]
    fn rice_round_trip_sweep() {
        for k in 0..=16u32 {
            for v in (-1024i64..=1024).step_by(7) {
                let mut w = BitWriter::new();
                let written_len = encode(&mut w, v, k);
                let bytes = w.into_bytes();

                let mut r = BitReader::new(&bytes);
                let (decoded, read_len) = decode(&mut r, k).unwrap();
                assert_eq!(decoded, v, "k={k} v={v}");
                assert_eq!(written_len, read_len, "k={k} v={v}");
                assert_eq!(read_len as usize, r.pos(), "k={k} v={v}");
            }
        }
    }

    #[test]
    fn rice_round_trip_wide_range() {
        let probe = [
            -(1 << 20), -(1 << 19) - 1, -1000, -1, 0, 1, 1000, (1 << 19) + 1, (1 << 20),
        ];
        for k in 0..=16u32 {
            for &v in &probe {
                let mut w = BitWriter::new();
                encode(&mut w, v, k);
                let bytes = w.into_bytes();
                let mut r = BitReader::new(&bytes);
                let (decoded, _) = decode(&mut r, k).unwrap();
                assert_eq!(decoded, v, "k={k} v={v}");
            }
        }
    }
}
