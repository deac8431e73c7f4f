use super::audio_segment::AudioSegment;

/// Domain interface for speech-to-text transcription.
///
/// Implementations run inference on audio and return best-effort plain text.
pub trait SpeechRecognizer: Send {
    fn transcribe(&self, audio: &AudioSegment) -> Result<String, Box<dyn std::error::Error>>;
}
