use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use audiodigest_core::audio::infrastructure::ffmpeg_audio_reader::FfmpegAudioReader;
use audiodigest_core::audio::infrastructure::whisper_recognizer::WhisperRecognizer;
use audiodigest_core::pipeline::digest_use_case::DigestUseCase;
use audiodigest_core::shared::constants::{
    AUDIO_EXTENSIONS, DEFAULT_SUMMARY_SENTENCES, TRANSCRIPTION_LANGUAGE, WHISPER_MODEL_FILENAME,
    WHISPER_MODEL_URL,
};
use audiodigest_core::shared::model_resolver;
use audiodigest_core::summarization::domain::summarizer::Summarizer;

/// Audio transcription and extractive text summarization.
#[derive(Parser)]
#[command(name = "audiodigest")]
struct Cli {
    /// Audio file to transcribe (mp3, wav, ogg, m4a, flac) or text file to
    /// summarize.
    input: PathBuf,

    /// Number of sentences in the summary.
    #[arg(long, default_value_t = DEFAULT_SUMMARY_SENTENCES)]
    sentences: usize,

    /// Transcribe only, skip summarization (audio inputs).
    #[arg(long)]
    transcript_only: bool,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    if is_audio(&cli.input) {
        run_digest(&cli)
    } else {
        run_summarize(&cli)
    }
}

fn run_digest(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    log::info!("Resolving model: {WHISPER_MODEL_FILENAME}");
    let model_path = model_resolver::resolve(
        WHISPER_MODEL_FILENAME,
        WHISPER_MODEL_URL,
        Some(Box::new(download_progress)),
    )?;
    eprintln!();

    let recognizer = WhisperRecognizer::new(&model_path, TRANSCRIPTION_LANGUAGE)?;
    let summary_sentences = (!cli.transcript_only).then_some(cli.sentences);

    let use_case = DigestUseCase::new(
        Box::new(FfmpegAudioReader),
        Box::new(recognizer),
        Summarizer::new(),
        summary_sentences,
    );
    let digest = use_case.run(&cli.input)?;

    println!("{}", digest.transcript);
    if let Some(summary) = digest.summary {
        println!();
        println!("{summary}");
    }
    Ok(())
}

fn run_summarize(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let text = fs::read_to_string(&cli.input)?;
    match Summarizer::new().summarize(&text, cli.sentences) {
        Ok(summary) => println!("{summary}"),
        Err(e) => {
            log::warn!("Summarization failed: {e}");
            println!("{e}");
        }
    }
    Ok(())
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.input.exists() {
        return Err(format!("Input file not found: {}", cli.input.display()).into());
    }
    if cli.sentences == 0 {
        return Err("Sentence count must be at least 1".into());
    }
    Ok(())
}

fn is_audio(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| AUDIO_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

fn download_progress(downloaded: u64, total: u64) {
    if total > 0 {
        let pct = (downloaded as f64 / total as f64 * 100.0) as u32;
        eprint!("\rDownloading speech model... {pct}%");
    } else {
        eprint!("\rDownloading speech model... {downloaded} bytes");
    }
}
