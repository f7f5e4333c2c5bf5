//! `brainwire` is a lossless codec for single-channel 16-bit PCM neural
//! recordings.
//!
//! It converts between a standard PCM waveform and a compact bitstream that
//! targets neural samples which were originally 10-bit values upscaled to
//! 16 bits: a lossless 16-to-10-bit requantization (see [`quant`]), a
//! first-order integer predictor, and an adaptive Rice/Golomb-Rice entropy
//! coder (see [`rice`]) whose parameter tracks the residual distribution
//! without ever being transmitted (see [`codec`]).
//!
//! The shape follows claxon: a small bit-level core (`bitio`, `rice`,
//! `quant`, `codec`) plus a thin WAV collaborator (`pcm`) that the `brainwire`
//! binary (`src/bin/brainwire.rs`) glues together.

pub mod bitio;
pub mod codec;
pub mod error;
pub mod pcm;
pub mod quant;
pub mod rice;

pub use codec::{decode, decode_traced, encode, encode_traced, RiceController};
pub use error::{Error, Result};
pub use pcm::Pcm;

/// Reads a brainwire bitstream already loaded into memory, exposing its
/// header and decoded samples. Analogous to claxon's `FlacReader`, but over
/// a byte buffer rather than a `Read` stream, matching the codec's
/// in-memory contract (spec §5).
pub struct BrainwireReader {
    samples: Vec<i16>,
    sample_rate: u32,
}

impl BrainwireReader {
    /// Decodes `bytes` as a brainwire stream.
    pub fn new(bytes: &[u8]) -> Result<BrainwireReader> {
        let (samples, sample_rate) = codec::decode(bytes)?;
        Ok(BrainwireReader { samples, sample_rate })
    }

    /// Reads and decodes a brainwire stream from a `.bw` file.
    pub fn open<P: AsRef<std::path::Path>>(path: P) -> Result<BrainwireReader> {
        let bytes = std::fs::read(path)?;
        BrainwireReader::new(&bytes)
    }

    /// The sample rate recorded in the stream header.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// The number of samples in the stream.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the stream has no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The decoded samples, in order.
    pub fn samples(&self) -> &[i16] {
        &self.samples
    }
}

/// Encodes a mono 16-bit sample array into a brainwire bitstream and writes
/// it to a `.bw` file.
pub fn write_brainwire_file<P: AsRef<std::path::Path>>(
    path: P,
    samples: &[i16],
    sample_rate: u32,
) -> Result<()> {
    let bytes = codec::encode(samples, sample_rate);
    std::fs::write(path, bytes)?;
    Ok(())
}

/// Computes the compression ratio of `input_bytes` original bytes against
/// `output_bytes` compressed bytes, as printed by the CLI.
pub fn compression_ratio(input_bytes: u64, output_bytes: u64) -> f64 {
    if output_bytes == 0 {
        return 0.0;
    }
    input_bytes as f64 / output_bytes as f64
}
