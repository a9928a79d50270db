// Integration tests for recording persistence
//
// These tests verify overwrite semantics for the capture file and the
// WAV probe used for logging.

use anyhow::Result;
use tempfile::TempDir;
use voice_tutor::{persist_recording, AudioFile};

#[test]
fn test_persist_writes_capture_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("turn-1").join("capture.webm");

    persist_recording(&path, b"encoded audio bytes")?;

    let written = std::fs::read(&path)?;
    assert_eq!(written, b"encoded audio bytes");

    Ok(())
}

#[test]
fn test_persist_creates_turn_directory() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir
        .path()
        .join("turns")
        .join("turn-abc")
        .join("capture.webm");

    assert!(!path.parent().unwrap().exists());
    persist_recording(&path, b"bytes")?;
    assert!(path.exists());

    Ok(())
}

#[test]
fn test_persist_overwrites_never_appends() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("capture.webm");

    persist_recording(&path, b"first recording, rather long")?;
    persist_recording(&path, b"second")?;

    // Contents reflect only the latest recording
    let written = std::fs::read(&path)?;
    assert_eq!(written, b"second");

    Ok(())
}

#[test]
fn test_persist_rejects_empty_recording() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("capture.webm");

    let result = persist_recording(&path, &[]);

    assert!(result.is_err(), "Empty recording should be rejected");
    assert!(!path.exists(), "No file should be written for an empty recording");

    Ok(())
}

#[test]
fn test_audio_probe_reads_wav_shape() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("capture.wav");

    // Write a 1-second 16kHz mono fixture
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: 16000,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(&path, spec)?;
    for _ in 0..16000 {
        writer.write_sample(0i16)?;
    }
    writer.finalize()?;

    let probe = AudioFile::probe(&path)?;

    assert_eq!(probe.sample_rate, 16000);
    assert_eq!(probe.channels, 1);
    assert!((probe.duration_seconds - 1.0).abs() < 0.01);
    assert!(probe.path.contains("capture.wav"));

    Ok(())
}

#[test]
fn test_audio_probe_nonexistent_file() {
    let result = AudioFile::probe("/nonexistent/path/to/capture.wav");
    assert!(result.is_err(), "Probing a nonexistent file should fail");
}

#[test]
fn test_audio_probe_rejects_non_wav_bytes() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("capture.wav");
    std::fs::write(&path, b"this is not a wav file")?;

    let result = AudioFile::probe(&path);
    assert!(result.is_err(), "Probing non-WAV bytes should fail");

    Ok(())
}
