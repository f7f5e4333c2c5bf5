//! The `brainwire` CLI: a two-argument converter between mono 16-bit WAV
//! and the brainwire bitstream, dispatching direction on file extension the
//! way claxon's own `decode` example binary converts FLAC to WAV.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

use brainwire::error::{Error, Result};

/// Convert between mono 16-bit WAV and the brainwire format.
///
/// Direction is inferred from the file extensions: `.wav -> .bw` encodes,
/// `.bw -> .wav` decodes.
#[derive(Parser)]
#[command(name = "brainwire")]
struct Args {
    /// Input file (.wav or .bw).
    input: PathBuf,
    /// Output file (.bw or .wav).
    output: PathBuf,
}

/// The two file formats the CLI knows how to dispatch between.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum FileKind {
    Pcm,
    Brainwire,
}

fn kind_of(path: &Path) -> Result<FileKind> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("wav") => Ok(FileKind::Pcm),
        Some(ext) if ext.eq_ignore_ascii_case("bw") => Ok(FileKind::Brainwire),
        _ => Err(Error::InvalidInput(format!(
            "unrecognized file extension in {}: expected .wav or .bw",
            path.display()
        ))),
    }
}

fn run(input: &Path, output: &Path) -> Result<()> {
    let (in_kind, out_kind) = (kind_of(input)?, kind_of(output)?);

    match (in_kind, out_kind) {
        (FileKind::Pcm, FileKind::Brainwire) => {
            let pcm = brainwire::pcm::read_wav(input)?;
            let bytes = brainwire::encode(&pcm.samples, pcm.sample_rate);
            std::fs::write(output, &bytes)?;
        }
        (FileKind::Brainwire, FileKind::Pcm) => {
            let bytes = std::fs::read(input)?;
            let (samples, sample_rate) = brainwire::decode(&bytes)?;
            brainwire::pcm::write_wav(output, &samples, sample_rate)?;
        }
        (in_kind, out_kind) if in_kind == out_kind => {
            return Err(Error::InvalidInput(
                "input and output must be one .wav and one .bw file".to_string(),
            ));
        }
        _ => {
            return Err(Error::InvalidInput(
                "unsupported combination of input and output extensions".to_string(),
            ));
        }
    };

    let input_bytes = std::fs::metadata(input)?.len();
    let output_bytes = std::fs::metadata(output)?.len();
    let kb = output_bytes as f64 / 1024.0;
    let ratio = brainwire::compression_ratio(input_bytes, output_bytes);
    println!(
        "{}: size: {:.2} kb ({} bytes) = {:.2}x compression",
        output.display(),
        kb,
        output_bytes,
        ratio
    );

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args.input, &args.output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("brainwire: {err}");
            ExitCode::FAILURE
        }
    }
}
