//! Lightweight inspection of uploaded audio before it is sent to a provider.

use std::io::Cursor;

/// Format details read from a WAV header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioInfo {
    pub sample_rate: u32,
    pub channels: u16,
    pub duration_ms: u64,
}

impl AudioInfo {
    /// Read the header of a WAV payload.
    ///
    /// Returns `None` for anything that is not a readable WAV stream; such
    /// audio is forwarded to the provider as-is.
    pub fn inspect_wav(audio: &[u8]) -> Option<Self> {
        let reader = hound::WavReader::new(Cursor::new(audio)).ok()?;
        let spec = reader.spec();
        if spec.sample_rate == 0 {
            return None;
        }
        // `duration` counts frames, independent of channel count.
        let frames = u64::from(reader.duration());
        Some(Self {
            sample_rate: spec.sample_rate,
            channels: spec.channels,
            duration_ms: frames * 1000 / u64::from(spec.sample_rate),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wav_bytes(sample_rate: u32, channels: u16, frames: u32) -> Vec<u8> {
        let spec = hound::WavSpec {
            channels,
            sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = hound::WavWriter::new(&mut cursor, spec).unwrap();
            for _ in 0..frames * u32::from(channels) {
                writer.write_sample(0i16).unwrap();
            }
            writer.finalize().unwrap();
        }
        cursor.into_inner()
    }

    #[test]
    fn test_inspect_mono_wav() {
        let info = AudioInfo::inspect_wav(&wav_bytes(16000, 1, 8000)).unwrap();
        assert_eq!(info.sample_rate, 16000);
        assert_eq!(info.channels, 1);
        assert_eq!(info.duration_ms, 500);
    }

    #[test]
    fn test_inspect_stereo_wav_counts_frames() {
        let info = AudioInfo::inspect_wav(&wav_bytes(8000, 2, 16000)).unwrap();
        assert_eq!(info.channels, 2);
        assert_eq!(info.duration_ms, 2000);
    }

    #[test]
    fn test_non_wav_audio_is_not_inspected() {
        assert!(AudioInfo::inspect_wav(b"ID3\x04\x00fake mp3 payload").is_none());
        assert!(AudioInfo::inspect_wav(&[]).is_none());
    }
}
