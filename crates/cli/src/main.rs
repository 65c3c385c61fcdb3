use std::path::PathBuf;
use std::process;

use clap::Parser;

use gijiroku_core::shared::constants::{AUDIO_EXTENSIONS, DEFAULT_LANGUAGE, DEFAULT_SERVER_URL};
use gijiroku_core::transcription::domain::job::TranscriptionJob;
use gijiroku_core::transcription::domain::transcript::TranscriptionResponse;
use gijiroku_core::transcription::infrastructure::api_client::TranscriptionApiClient;

/// Upload a meeting recording for diarized transcription and summarization.
#[derive(Parser)]
#[command(name = "gijiroku")]
struct Cli {
    /// Audio file to transcribe (wav, mp3, m4a, mp4).
    input: PathBuf,

    /// Transcription server base URL.
    #[arg(long, default_value = DEFAULT_SERVER_URL)]
    server: String,

    /// Hint language for transcription.
    #[arg(long, default_value = DEFAULT_LANGUAGE)]
    language: String,

    /// Skip the meeting summary.
    #[arg(long)]
    no_summary: bool,

    /// Print the raw JSON response instead of formatted text.
    #[arg(long)]
    json: bool,
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

    let client = TranscriptionApiClient::new(cli.server)?;
    let job = TranscriptionJob {
        language: cli.language,
        summarize: !cli.no_summary,
    };

    let runtime = tokio::runtime::Runtime::new()?;
    let response = runtime.block_on(client.transcribe_path(&cli.input, job))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print_transcription(&response);
    }
    log::info!(
        "Transcribed {:.1}s of audio",
        response.metadata.duration
    );

    Ok(())
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.input.exists() {
        return Err(format!("Input file not found: {}", cli.input.display()).into());
    }
    let ext = cli
        .input
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();
    if !AUDIO_EXTENSIONS.contains(&ext.as_str()) {
        return Err(format!(
            "Unsupported audio format '{}' (expected one of: {})",
            ext,
            AUDIO_EXTENSIONS.join(", ")
        )
        .into());
    }
    Ok(())
}

fn print_transcription(response: &TranscriptionResponse) {
    println!("=== 要約 ===");
    match response.metadata.summary_text() {
        Some(summary) => println!("{summary}"),
        None => println!("要約は利用できません。"),
    }

    println!();
    println!("=== 話者別ログ ===");
    if response.segments.is_empty() {
        println!("セグメントが存在しません。");
        return;
    }
    for segment in &response.segments {
        println!("[{}] {}", segment.speaker, segment.time_range());
        println!("  {}", segment.text);
    }
}
