//! Integration Tests
//!
//! End-to-end tests for the glitchwave pipeline: container split, effect
//! application, WAV round-trip, and session lifecycle.

use glitchwave::audio::{wav, AudioClip};
use glitchwave::container::{RawContainer, DEFAULT_HEADER_SIZE};
use glitchwave::dsp::{apply_effect, slider_to_intensity, EffectKind};
use glitchwave::session::{Session, SessionState};
use test_case::test_case;

/// Build a container with a 0xFF header and the payload 10, 20, ..., 250.
fn test_image() -> Vec<u8> {
    let mut bytes = vec![0xFF; DEFAULT_HEADER_SIZE];
    bytes.extend((1..=25).map(|i| (i * 10) as u8));
    bytes
}

/// Build a larger container with a ramp payload for effects whose delays
/// need room to land.
fn large_test_image(payload_len: usize) -> Vec<u8> {
    let mut bytes = vec![0x42; DEFAULT_HEADER_SIZE];
    bytes.extend((0..payload_len).map(|i| (i % 256) as u8));
    bytes
}

// === Effect pipeline ===

#[test_case(EffectKind::Delay)]
#[test_case(EffectKind::Reverb)]
#[test_case(EffectKind::Distortion)]
#[test_case(EffectKind::Echo)]
#[test_case(EffectKind::PitchShift)]
#[test_case(EffectKind::LowPass)]
fn test_pipeline_preserves_container_geometry(kind: EffectKind) {
    let bytes = large_test_image(5000);
    let mut session = Session::new();
    session.load(&bytes).unwrap();

    session.apply_effect(kind, 1.0).unwrap();
    let glitched = session.save().unwrap();

    assert_eq!(glitched.len(), bytes.len(), "container size must not drift");
    assert_eq!(
        &glitched[..DEFAULT_HEADER_SIZE],
        &bytes[..DEFAULT_HEADER_SIZE],
        "header must be copied verbatim"
    );
}

#[test]
fn test_effects_stack_across_applications() {
    let mut session = Session::new();
    session.load(&large_test_image(3000)).unwrap();

    session.apply_effect(EffectKind::Distortion, 0.2).unwrap();
    let after_first = session.current_payload().to_vec();
    session.apply_effect(EffectKind::Delay, 0.5).unwrap();

    // Second effect ran on the first effect's output, not the original
    assert_ne!(session.current_payload(), after_first.as_slice());
    assert_eq!(session.state(), SessionState::Processed);
}

#[test]
fn test_distortion_identity_at_zero_intensity() {
    let payload: Vec<u8> = (0..=255).collect();
    let output = apply_effect(EffectKind::Distortion, &payload, 0.0).unwrap();
    assert_eq!(output, payload);
}

#[test]
fn test_reverb_clipping_rescales_to_exactly_full_scale() {
    let payload = vec![255u8; 4000];
    let output = apply_effect(EffectKind::Reverb, &payload, 2.0).unwrap();
    assert_eq!(*output.iter().max().unwrap(), 255);
}

#[test]
fn test_echo_zero_delay_scales_without_overflow() {
    let payload = vec![100u8; 64];
    let output = apply_effect(EffectKind::Echo, &payload, 0.0).unwrap();
    assert!(output.iter().all(|&s| s == 160));
}

#[test]
fn test_slider_scale_matches_intensity_domain() {
    for slider in 1..=100u8 {
        let intensity = slider_to_intensity(slider);
        assert!((0.0..=2.0).contains(&intensity));
    }
}

// === WAV round trip ===

#[test]
fn test_export_wav_import_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let wav_path = dir.path().join("payload.wav");

    let bytes = test_image();
    let mut session = Session::new();
    session.load(&bytes).unwrap();
    let original_payload = session.current_payload().to_vec();

    // Export to disk and read back with no external modification
    let clip = session.export_audio().unwrap();
    wav::write_wav(&clip, &wav_path).unwrap();
    let loaded = wav::read_wav(&wav_path).unwrap();

    let (_, warning) = session.import_audio(&loaded).unwrap();
    assert!(warning.is_none());
    assert_eq!(session.current_payload(), original_payload.as_slice());

    // The reassembled container equals the input byte-for-byte
    assert_eq!(session.save().unwrap(), bytes.as_slice());
}

#[test]
fn test_import_truncates_grown_external_audio() {
    let mut session = Session::new();
    session.load(&test_image()).unwrap();
    let target_len = session.current_payload().len();

    let mut clip = session.export_audio().unwrap();
    let original_frames = clip.frames.clone();
    clip.frames.extend_from_slice(&[0xAA; 7]);

    session.import_audio(&clip).unwrap();
    assert_eq!(session.current_payload(), original_frames.as_slice());
    assert_eq!(session.current_payload().len(), target_len);
}

#[test]
fn test_import_pads_shrunken_external_audio() {
    let mut session = Session::new();
    session.load(&test_image()).unwrap();
    let target_len = session.current_payload().len();

    let clip = AudioClip::from_payload(&[3u8; 5]);
    session.import_audio(&clip).unwrap();

    let payload = session.current_payload();
    assert_eq!(payload.len(), target_len);
    assert_eq!(&payload[..5], &[3u8; 5]);
    assert!(payload[5..].iter().all(|&b| b == 0));
}

// === Session lifecycle ===

#[test]
fn test_reset_after_arbitrary_history() {
    let bytes = large_test_image(2500);
    let mut session = Session::new();
    session.load(&bytes).unwrap();
    let original = session.current_payload().to_vec();

    session.apply_effect(EffectKind::Echo, 0.3).unwrap();
    session.apply_effect(EffectKind::LowPass, 1.2).unwrap();
    session.apply_effect(EffectKind::PitchShift, 1.8).unwrap();

    session.reset();
    assert_eq!(session.current_payload(), original.as_slice());
    assert_eq!(session.state(), SessionState::Loaded);
    assert!(session.save().is_err());
}

#[test]
fn test_load_replaces_previous_session() {
    let mut session = Session::new();
    session.load(&test_image()).unwrap();
    session.apply_effect(EffectKind::Distortion, 1.0).unwrap();

    let second = large_test_image(100);
    session.load(&second).unwrap();

    assert_eq!(session.state(), SessionState::Loaded);
    assert_eq!(session.current_payload().len(), 100);
    assert!(session.save().is_err(), "modified result must not survive a reload");
}

#[test]
fn test_full_glitch_workflow() {
    let dir = tempfile::tempdir().unwrap();
    let wav_path = dir.path().join("roundtrip.wav");

    let bytes = large_test_image(4000);
    let mut session = Session::new();
    session.load(&bytes).unwrap();

    // Glitch in-process, push through a WAV file, and come back
    session.apply_effect(EffectKind::Reverb, 1.5).unwrap();
    let clip = session.export_audio().unwrap();
    wav::write_wav(&clip, &wav_path).unwrap();

    let external = wav::read_wav(&wav_path).unwrap();
    session.import_audio(&external).unwrap();

    let glitched = session.save().unwrap();
    let result = RawContainer::split(glitched, DEFAULT_HEADER_SIZE).unwrap();
    assert_eq!(result.header, vec![0x42; DEFAULT_HEADER_SIZE]);
    assert_eq!(result.payload.len(), 4000);
    assert_ne!(result.payload, bytes[DEFAULT_HEADER_SIZE..].to_vec());
}
