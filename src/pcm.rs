//! The `pcm` module is the PCM (WAV) container collaborator: it reads and
//! writes the mono 16-bit sample arrays the brainwire codec itself operates
//! on, the way claxon's own `examples/decode_simple.rs` leans on `hound` to
//! bridge FLAC and WAV.
//!
//! Framing, endianness, and validating `channels == 1` and
//! `bits_per_sample == 16` are this module's job; the codec core never
//! touches a file.

use std::path::Path;

use crate::error::{Error, Result};

/// A decoded mono 16-bit PCM waveform: the samples plus their sample rate.
pub struct Pcm {
    /// Samples in playback order.
    pub samples: Vec<i16>,
    /// Sample rate in Hz.
    pub sample_rate: u32,
}

/// Reads a mono 16-bit WAV file from `path`.
///
/// Returns [`Error::InvalidInput`] if the file is not mono or not 16 bits
/// per sample.
pub fn read_wav<P: AsRef<Path>>(path: P) -> Result<Pcm> {
    let mut reader = hound::WavReader::open(path)?;
    let spec = reader.spec();

    if spec.channels != 1 {
        return Err(Error::InvalidInput(format!(
            "expected mono audio, found {} channels",
            spec.channels
        )));
    }
    if spec.bits_per_sample != 16 || spec.sample_format != hound::SampleFormat::Int {
        return Err(Error::InvalidInput(format!(
            "expected 16-bit signed PCM, found {} bits per sample ({:?})",
            spec.bits_per_sample, spec.sample_format
        )));
    }

    let samples = reader
        .samples::<i16>()
        .collect::<std::result::Result<Vec<i16>, hound::Error>>()?;

    Ok(Pcm { samples, sample_rate: spec.sample_rate })
}

/// Writes `samples` as a mono 16-bit WAV file at `sample_rate` to `path`.
pub fn write_wav<P: AsRef<Path>>(path: P, samples: &[i16], sample_rate: u32) -> Result<()> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = hound::WavWriter::create(path, spec)?;
    for &s in samples {
        writer.write_sample(s)?;
    }
    writer.finalize()?;
    Ok(())
}
