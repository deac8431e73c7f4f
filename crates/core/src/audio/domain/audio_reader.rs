use std::path::Path;

use super::audio_segment::AudioSegment;

/// Domain interface for decoding an audio file to mono PCM.
///
/// Implementations handle arbitrary supported containers/codecs and resample
/// to the requested rate. `Ok(None)` means the file carries no audio stream.
pub trait AudioReader: Send {
    fn read(
        &self,
        path: &Path,
        target_sample_rate: u32,
    ) -> Result<Option<AudioSegment>, Box<dyn std::error::Error>>;
}
