//! Integration tests for end-to-end generation.

use std::io::Cursor;

use curvesound_backend_audio::wav::{compute_pcm_hash, WavHeader};
use curvesound_backend_audio::{
    generate, generate_and_play, AudioError, CurveRole, NullSink, RecordingSink,
};
use curvesound_spec::{
    BackendError, ErrorCode, Point2, Polyline, ProbeMissPolicy, SynthesisRequest, WarningCode,
};

fn mean_abs(samples: &[i16]) -> f64 {
    samples.iter().map(|&s| (s as f64).abs()).sum::<f64>() / samples.len() as f64
}

fn decode(wav: &[u8]) -> Vec<i16> {
    hound::WavReader::new(Cursor::new(wav))
        .unwrap()
        .into_samples::<i16>()
        .map(|s| s.unwrap())
        .collect()
}

fn half_ramp_request(policy: ProbeMissPolicy) -> SynthesisRequest {
    let reference = SynthesisRequest::reference();
    SynthesisRequest::builder(
        reference.waveform,
        Polyline::line(Point2::new(0.0, 0.0), Point2::new(0.5, 0.5)),
    )
    .on_probe_miss(policy)
    .build()
}

#[test]
fn test_reference_scenario() {
    let result = generate(&SynthesisRequest::reference()).unwrap();
    let samples = decode(&result.wav.wav_data);

    assert_eq!(samples.len(), 44_100);
    assert_eq!(result.wav.num_samples, 44_100);
    assert_eq!(result.samples_per_cycle, 100);
    assert_eq!(result.probe_misses, 0);
    assert!(result.warnings.is_empty());

    // The envelope starts at zero, so the first cycle is close to silence.
    assert_eq!(samples[0], 0);
    assert!(samples[..100].iter().all(|&s| s.abs() < 40));

    // The lower half of the circle comes first along the curve.
    assert!(samples.iter().all(|&s| s <= 0));

    let tenth = samples.len() / 10;
    let head = mean_abs(&samples[..tenth]);
    let tail = mean_abs(&samples[samples.len() - tenth..]);
    assert!(tail > 5.0 * head, "head {} tail {}", head, tail);
}

#[test]
fn test_duration_scales_buffer() {
    let request = SynthesisRequest::builder(
        SynthesisRequest::reference().waveform,
        SynthesisRequest::reference().envelope,
    )
    .duration_seconds(2)
    .build();

    let result = generate(&request).unwrap();
    assert_eq!(result.wav.num_samples, 88_200);
    assert_eq!(result.wav.wav_data.len(), 44 + 2 * 88_200);
}

#[test]
fn test_header_matches_payload() {
    let result = generate(&SynthesisRequest::reference()).unwrap();
    let header = WavHeader::parse(&result.wav.wav_data).unwrap();

    assert_eq!(header.sample_rate, 44_100);
    assert_eq!(header.channels, 1);
    assert_eq!(header.bits_per_sample, 16);
    assert_eq!(header.num_samples(), 44_100);
    assert!(header.is_consistent(result.wav.wav_data.len()));
    assert_eq!(
        compute_pcm_hash(&result.wav.wav_data).unwrap(),
        result.wav.pcm_hash
    );
}

#[test]
fn test_generation_is_deterministic() {
    let request = SynthesisRequest::reference();
    let a = generate(&request).unwrap();
    let b = generate(&request).unwrap();

    assert_eq!(a.wav.wav_data, b.wav.wav_data);
    assert_eq!(a.wav.pcm_hash, b.wav.pcm_hash);
}

#[test]
fn test_bad_frequencies_rejected_before_sampling() {
    for freq in [0.0, -440.0, f64::NAN, 88_200.0] {
        let mut request = SynthesisRequest::reference();
        request.frequency_hz = freq;

        let err = generate(&request).unwrap_err();
        assert_eq!(err.code(), "AUDIO_001");
        match err {
            AudioError::InvalidRequest(errors) => {
                assert!(errors.iter().any(|e| matches!(
                    e.code,
                    ErrorCode::InvalidFrequency | ErrorCode::DegenerateCycle
                )));
            }
            other => panic!("expected invalid request for {}, got {:?}", freq, other),
        }
    }
}

#[test]
fn test_curve_gap_aborts_by_default() {
    let err = generate(&half_ramp_request(ProbeMissPolicy::Error)).unwrap_err();
    assert_eq!(err.code(), "AUDIO_006");
    assert!(matches!(
        err,
        AudioError::ProbeMiss {
            curve: CurveRole::Envelope,
            ..
        }
    ));
}

#[test]
fn test_curve_gap_renders_silence_when_asked() {
    let result = generate(&half_ramp_request(ProbeMissPolicy::Silence)).unwrap();
    let samples = decode(&result.wav.wav_data);

    assert_eq!(samples.len(), 44_100);
    assert!(result.probe_misses > 20_000);
    assert!(samples[30_000..].iter().all(|&s| s == 0));
    assert!(result
        .warnings
        .iter()
        .any(|w| w.code == WarningCode::EnvelopeSpanShort));
}

#[test]
fn test_pitch_curve_is_ignored() {
    let plain = SynthesisRequest::reference();
    let mut with_pitch = plain.clone();
    with_pitch.pitch = Some(Polyline::line(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)));

    let a = generate(&plain).unwrap();
    let b = generate(&with_pitch).unwrap();

    assert_eq!(a.wav.wav_data, b.wav.wav_data);
    assert!(b
        .warnings
        .iter()
        .any(|w| w.code == WarningCode::PitchCurveIgnored));
}

#[test]
fn test_play_flag_reaches_sink() {
    let sink = RecordingSink::new();

    let quiet = SynthesisRequest::reference();
    generate_and_play(&quiet, &sink).unwrap();
    assert!(sink.played().is_empty());

    let mut loud = SynthesisRequest::reference();
    loud.play = true;
    let result = generate_and_play(&loud, &sink).unwrap();

    let played = sink.played();
    assert_eq!(played.len(), 1);
    assert_eq!(played[0], result.wav.wav_data);

    assert!(generate_and_play(&loud, &NullSink).is_ok());
}
