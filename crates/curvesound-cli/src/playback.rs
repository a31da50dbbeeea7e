//! Playback through the system's default audio player.

use std::io::Write;
use std::path::PathBuf;

use curvesound_backend_audio::{AudioError, AudioResult, PlaybackSink};

/// Plays WAV buffers by handing a temporary `.wav` file to the OS.
///
/// The file is kept on disk after `play` returns so the player can still
/// read it. Playback is never waited on.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemPlayer;

impl SystemPlayer {
    /// Writes `wav` to a persisted temporary file and returns its path.
    pub fn persist(wav: &[u8]) -> AudioResult<PathBuf> {
        let mut file = tempfile::Builder::new()
            .prefix("curvesound-")
            .suffix(".wav")
            .tempfile()?;
        file.write_all(wav)?;
        file.flush()?;

        let (_, path) = file
            .keep()
            .map_err(|e| AudioError::playback(format!("failed to keep temp file: {}", e)))?;
        Ok(path)
    }
}

impl PlaybackSink for SystemPlayer {
    fn play(&self, wav: &[u8]) -> AudioResult<()> {
        let path = Self::persist(wav)?;
        open::that_detached(&path).map_err(|e| {
            AudioError::playback(format!("failed to launch player for {}: {}", path.display(), e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persist_writes_wav_file() {
        let path = SystemPlayer::persist(b"RIFF0000WAVE").unwrap();
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("wav"));
        assert_eq!(std::fs::read(&path).unwrap(), b"RIFF0000WAVE");
        std::fs::remove_file(&path).unwrap();
    }
}
