//! Playback sinks for finished WAV buffers.

use std::sync::Mutex;

use crate::error::AudioResult;

/// Something that can play a complete WAV buffer.
///
/// `play` starts playback and returns; it must not wait for the sound to
/// finish and the caller keeps no handle to stop it.
pub trait PlaybackSink {
    /// Starts playing `wav`.
    fn play(&self, wav: &[u8]) -> AudioResult<()>;
}

/// Discards everything it is given.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl PlaybackSink for NullSink {
    fn play(&self, _wav: &[u8]) -> AudioResult<()> {
        Ok(())
    }
}

/// Keeps a copy of every buffer it is asked to play.
#[derive(Debug, Default)]
pub struct RecordingSink {
    played: Mutex<Vec<Vec<u8>>>,
}

impl RecordingSink {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffers received so far, oldest first.
    pub fn played(&self) -> Vec<Vec<u8>> {
        self.played
            .lock()
            .map(|played| played.clone())
            .unwrap_or_default()
    }
}

impl PlaybackSink for RecordingSink {
    fn play(&self, wav: &[u8]) -> AudioResult<()> {
        if let Ok(mut played) = self.played.lock() {
            played.push(wav.to_vec());
        }
        Ok(())
    }
}
