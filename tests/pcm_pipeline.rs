//! Exercises the same WAV -> brainwire -> WAV pipeline the `brainwire`
//! binary drives, the way claxon's `examples/decode_simple.rs` exercises
//! FLAC -> WAV end to end.

use brainwire::{decode, encode, quant};

#[test]
fn wav_to_brainwire_to_wav_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let wav_in = dir.path().join("in.wav");
    let bw_path = dir.path().join("out.bw");
    let wav_out = dir.path().join("roundtrip.wav");

    // A sine quantized to the reachable 10-bit label range, then expanded
    // through dequant. A plain `as i16` cast of the float sine would almost
    // never land in dequant's image, so the WAV round trip below (which
    // goes through the codec, not just `hound`) would fail.
    let samples: Vec<i16> = (0..4000)
        .map(|i| {
            let t = i as f64 / 4000.0;
            let q = (500.0 * (2.0 * std::f64::consts::PI * 220.0 * t).sin()) as i32;
            quant::dequant(q)
        })
        .collect();
    brainwire::pcm::write_wav(&wav_in, &samples, 44_100).unwrap();

    let pcm = brainwire::pcm::read_wav(&wav_in).unwrap();
    assert_eq!(pcm.samples, samples);
    assert_eq!(pcm.sample_rate, 44_100);

    let bytes = encode(&pcm.samples, pcm.sample_rate);
    std::fs::write(&bw_path, &bytes).unwrap();

    let read_back = std::fs::read(&bw_path).unwrap();
    let (decoded_samples, rate) = decode(&read_back).unwrap();
    assert_eq!(decoded_samples, samples);
    assert_eq!(rate, 44_100);

    brainwire::pcm::write_wav(&wav_out, &decoded_samples, rate).unwrap();
    let final_pcm = brainwire::pcm::read_wav(&wav_out).unwrap();
    assert_eq!(final_pcm.samples, samples);
    assert_eq!(final_pcm.sample_rate, 44_100);
}

#[test]
fn rejects_non_mono_wav_with_invalid_input_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stereo.wav");

    let spec = hound::WavSpec {
        channels: 2,
        sample_rate: 48_000,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(&path, spec).unwrap();
    for _ in 0..10 {
        writer.write_sample(0i16).unwrap();
        writer.write_sample(0i16).unwrap();
    }
    writer.finalize().unwrap();

    let err = brainwire::pcm::read_wav(&path).unwrap_err();
    match err {
        brainwire::Error::InvalidInput(_) => {}
        other => panic!("expected InvalidInput, got {other:?}"),
    }
}
