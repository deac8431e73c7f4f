pub const WHISPER_MODEL_FILENAME: &str = "ggml-tiny.bin";
pub const WHISPER_MODEL_URL: &str =
    "https://huggingface.co/ggerganov/whisper.cpp/resolve/main/ggml-tiny.bin";
pub const WHISPER_SAMPLE_RATE: u32 = 16000;

/// Language hint passed to the recognizer; the stop-word list below matches it.
pub const TRANSCRIPTION_LANGUAGE: &str = "fr";

pub const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "ogg", "m4a", "flac"];

/// Inputs with fewer trimmed characters than this are rejected as too short
/// to summarize.
pub const MIN_TEXT_CHARS: usize = 100;

/// A sentence needs strictly more qualifying words than this to be scored.
pub const MIN_CONTENT_WORDS: usize = 3;

pub const DEFAULT_SUMMARY_SENTENCES: usize = 3;

/// Abbreviations whose trailing period must not end a sentence.
pub const ABBREVIATIONS: &[&str] = &["M.", "Mme.", "Dr.", "etc."];

/// French stop words excluded from frequency scoring.
pub const STOP_WORDS: &[&str] = &[
    "le", "la", "les", "un", "une", "des", "et", "est", "sont", "de", "du", "en", "à", "au", "aux",
    "ce", "ces", "cette", "pour", "par", "sur", "dans", "avec", "qui", "que", "quoi", "dont", "où",
    "comment", "pourquoi", "quand", "quel", "quelle", "quels", "quelles", "mais", "ou", "donc",
    "or", "ni", "car", "si", "alors", "ainsi", "cependant", "néanmoins", "toutefois", "pourtant",
];
