use std::path::Path;

use crate::audio::domain::audio_reader::AudioReader;
use crate::audio::domain::speech_recognizer::SpeechRecognizer;
use crate::shared::constants::WHISPER_SAMPLE_RATE;
use crate::summarization::domain::summarizer::{SummarizeError, Summarizer};

/// Result of processing one audio file.
pub struct Digest {
    /// Best-effort transcription; a recognizer fault is rendered into this
    /// slot instead of failing the run.
    pub transcript: String,
    /// Present when summarization was requested. Always text: a genuine
    /// summary, the unchanged transcript when there was nothing to cut, or
    /// the rendered error message.
    pub summary: Option<String>,
}

pub struct DigestUseCase {
    reader: Box<dyn AudioReader>,
    recognizer: Box<dyn SpeechRecognizer>,
    summarizer: Summarizer,
    summary_sentences: Option<usize>,
}

impl DigestUseCase {
    pub fn new(
        reader: Box<dyn AudioReader>,
        recognizer: Box<dyn SpeechRecognizer>,
        summarizer: Summarizer,
        summary_sentences: Option<usize>,
    ) -> Self {
        Self {
            reader,
            recognizer,
            summarizer,
            summary_sentences,
        }
    }

    pub fn run(&self, source: &Path) -> Result<Digest, Box<dyn std::error::Error>> {
        // 1. Decode to mono PCM at the recognizer's rate
        let audio = self
            .reader
            .read(source, WHISPER_SAMPLE_RATE)?
            .ok_or_else(|| format!("No audio stream in {}", source.display()))?;

        // 2. Transcribe; recognizer faults are flattened to text, since the
        //    digest always yields something to show and downstream stages
        //    accept arbitrary recognizer output as ordinary input
        log::info!(
            "Transcribing {} ({:.1}s of audio)",
            source.display(),
            audio.duration()
        );
        let transcript = match self.recognizer.transcribe(&audio) {
            Ok(text) => text,
            Err(e) => {
                log::warn!("Transcription failed: {e}");
                SummarizeError::Internal(e.to_string()).to_string()
            }
        };

        // 3. Summarize if requested; failures become text so the caller
        //    always gets something to show
        let summary = self.summary_sentences.map(|count| {
            match self.summarizer.summarize(&transcript, count) {
                Ok(summary) => summary,
                Err(e) => {
                    log::warn!("Summarization failed: {e}");
                    e.to_string()
                }
            }
        });

        Ok(Digest {
            transcript,
            summary,
        })
    }
}
