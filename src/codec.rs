//! The `codec` module drives the encode/decode loop: header framing,
//! predictor state, the adaptive Rice parameter, and dispatch into
//! [`crate::rice`], [`crate::quant`] and [`crate::bitio`].
//!
//! This is the component claxon would call the frame/subframe layer: the
//! thing that owns per-stream state and walks the sample array end to end.
//! Unlike claxon's frames, a brainwire stream has no block structure -- one
//! header, then one residual per sample, with nothing in between.

use crate::bitio::{BitReader, BitWriter};
use crate::error::Result;
use crate::quant;
use crate::rice;

/// The fixed, non-adaptive parameter used only for the two header fields.
const HEADER_K: u32 = 16;

/// The adaptive-`k` starting value, restored at the start of every stream's
/// body (after the header has been written or read).
const K_INITIAL: f64 = 3.0;

/// Tracks the Rice parameter `k` as a continuous controller, updated from
/// the bit length of the previous codeword.
///
/// The update must run in IEEE-754 double precision with these exact
/// literal constants: encoder and decoder execute the identical arithmetic
/// so that `k` never needs to be transmitted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RiceController {
    k_float: f64,
}

impl RiceController {
    /// A controller at its initial value of `3.0`.
    pub fn new() -> RiceController {
        RiceController { k_float: K_INITIAL }
    }

    /// The current floating-point controller state.
    pub fn k_float(&self) -> f64 {
        self.k_float
    }

    /// The integer `k` to use for the next codeword: `k_float` clamped to
    /// `[0, 16]`, then truncated towards zero.
    pub fn k(&self) -> u32 {
        self.k_float.clamp(0.0, 16.0).floor() as u32
    }

    /// Folds in the bit length of the codeword just written or read.
    pub fn update(&mut self, codeword_len: u32) {
        // Deliberately not reassociated: the wire format is pinned to this
        // evaluation order.
        self.k_float = (self.k_float * 0.99) + ((codeword_len as f64 / 1.55) * 0.01);
    }
}

impl Default for RiceController {
    fn default() -> RiceController {
        RiceController::new()
    }
}

fn write_header(writer: &mut BitWriter, n_samples: u64, sample_rate: u32) {
    rice::encode(writer, n_samples as i64, HEADER_K);
    rice::encode(writer, sample_rate as i64, HEADER_K);
}

fn read_header(reader: &mut BitReader) -> Result<(u64, u32)> {
    let (n, _) = rice::decode(reader, HEADER_K)?;
    let (r, _) = rice::decode(reader, HEADER_K)?;
    Ok((n as u64, r as u32))
}

/// Encodes `samples` (mono, 16-bit) at `sample_rate` into a brainwire
/// bitstream, returning the packed, byte-padded bytes.
pub fn encode(samples: &[i16], sample_rate: u32) -> Vec<u8> {
    let (bytes, _trajectory) = encode_traced(samples, sample_rate);
    bytes
}

/// Like [`encode`], but also returns the `k_float` value observed *after*
/// each sample, for verifying encoder/decoder controller synchrony.
pub fn encode_traced(samples: &[i16], sample_rate: u32) -> (Vec<u8>, Vec<f64>) {
    let mut writer = BitWriter::with_capacity(samples.len() * 2 + 16);
    write_header(&mut writer, samples.len() as u64, sample_rate);

    let mut q_prev: i32 = 0;
    let mut controller = RiceController::new();
    let mut trajectory = Vec::with_capacity(samples.len());

    for &s in samples {
        let q = quant::quant(s);
        let r = (q - q_prev) as i64;
        q_prev = q;

        let len = rice::encode(&mut writer, r, controller.k());
        controller.update(len);
        trajectory.push(controller.k_float());
    }

    log::debug!(
        "encoded {} samples at {} Hz into {} bits, final k={:.4}",
        samples.len(),
        sample_rate,
        writer.bit_len(),
        controller.k_float(),
    );

    (writer.into_bytes(), trajectory)
}

/// Decodes a brainwire bitstream back into samples and the sample rate.
pub fn decode(data: &[u8]) -> Result<(Vec<i16>, u32)> {
    let (samples, rate, _trajectory) = decode_traced(data)?;
    Ok((samples, rate))
}

/// Like [`decode`], but also returns the `k_float` value observed *after*
/// each sample, for verifying encoder/decoder controller synchrony.
pub fn decode_traced(data: &[u8]) -> Result<(Vec<i16>, u32, Vec<f64>)> {
    let mut reader = BitReader::new(data);
    let (n_samples, sample_rate) = read_header(&mut reader)?;

    let mut samples = Vec::new();
    let mut q_prev: i32 = 0;
    let mut controller = RiceController::new();
    let mut trajectory = Vec::with_capacity(n_samples as usize);

    for _ in 0..n_samples {
        let (r, len) = rice::decode(&mut reader, controller.k())?;
        controller.update(len);
        trajectory.push(controller.k_float());

        let q = q_prev + r as i32;
        q_prev = q;
        samples.push(quant::dequant(q));
    }

    log::debug!(
        "decoded {} samples at {} Hz from {} bytes, final k={:.4}",
        samples.len(),
        sample_rate,
        data.len(),
        controller.k_float(),
    );

    Ok((samples, sample_rate, trajectory))
}
