use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use narrate_core::audio::{default_output_path, save_audio};
use narrate_core::text::{read_text_file, TextEncoding};
use narrate_core::tts::{
    ElevenLabsClient, ModelId, SynthesisRequest, VoiceCatalog, VoiceSettings,
    RECOMMENDED_MAX_CHARS,
};
use narrate_core::TtsError;

const PREVIEW_CHARS: usize = 100;

#[derive(Parser, Debug)]
#[command(name = "narrate")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Convert text files to speech using the ElevenLabs API")]
#[command(after_help = "\
Examples:
  narrate input.txt
  narrate input.txt -v bella -o my_audio.mp3
  narrate input.txt -v josh --stability 0.7 --similarity 0.8
  narrate --test-connection")]
struct Args {
    /// Input text file
    input_file: Option<PathBuf>,

    /// Output audio file (default: auto-generated)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Voice to use (adam, bella, arnold, josh, dave, laura, charlie,
    /// george, or a raw ElevenLabs voice id)
    #[arg(short, long, default_value = "adam")]
    voice: String,

    /// AI model to use
    #[arg(short, long, default_value_t = ModelId::default(), value_parser = parse_model)]
    model: ModelId,

    /// Voice stability (0.0-1.0)
    #[arg(long, default_value_t = 0.5)]
    stability: f64,

    /// Similarity boost (0.0-1.0)
    #[arg(long, default_value_t = 0.75)]
    similarity: f64,

    /// Style setting (0.0-1.0)
    #[arg(long, default_value_t = 0.0)]
    style: f64,

    /// Test API connection and list voices
    #[arg(long)]
    test_connection: bool,
}

fn parse_model(s: &str) -> Result<ModelId, String> {
    s.parse().map_err(|_| {
        let valid: Vec<String> = ModelId::ALL.iter().map(ToString::to_string).collect();
        format!("unknown model '{s}' (valid: {})", valid.join(", "))
    })
}

fn main() -> ExitCode {
    setup_tracing();

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Failed to start runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(Args::parse())) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<()> {
    // Environment variables take precedence over .env entries.
    let _ = dotenvy::dotenv();

    let api_key = std::env::var("ELEVENLABS_API_KEY").map_err(|_| TtsError::MissingApiKey)?;

    let catalog = VoiceCatalog::builtin();
    let client = ElevenLabsClient::new(api_key);

    if args.test_connection {
        return run_probe(&client).await;
    }

    let Some(input_file) = args.input_file else {
        anyhow::bail!("Please provide an input text file (see --help)");
    };

    println!("Reading text from: {}", input_file.display());
    let content = read_text_file(&input_file)?;
    if content.encoding != TextEncoding::Utf8 {
        println!("File read with {} encoding", content.encoding);
    }
    if content.text.is_empty() {
        anyhow::bail!("Input file is empty: {}", input_file.display());
    }

    // The confirmation gate sits before the request is built; a declined
    // prompt means no network traffic of any kind.
    let text_chars = content.text.chars().count();
    if needs_confirmation(text_chars) && !confirm_long_text(text_chars)? {
        debug!("user declined long-text confirmation");
        anyhow::bail!("Aborted");
    }

    println!("Text preview: {}", preview(&content.text));
    println!("Generating speech with voice: {}", args.voice);
    println!("Text length: {text_chars} characters");

    let request = SynthesisRequest::build(
        &catalog,
        content.text,
        &args.voice,
        args.model,
        VoiceSettings {
            stability: args.stability,
            similarity_boost: args.similarity,
            style: args.style,
            use_speaker_boost: true,
        },
    );

    let audio = client.synthesize(&request).await?;
    println!("Speech generated successfully!");

    let output = args
        .output
        .unwrap_or_else(|| default_output_path(&input_file, &args.voice, Local::now()));

    let bytes = save_audio(&audio, &output)?;
    println!("Audio saved to: {}", output.display());
    println!("File size: {bytes} bytes");
    println!("\nSuccess! Audio file created: {}", output.display());

    Ok(())
}

async fn run_probe(client: &ElevenLabsClient) -> Result<()> {
    let probe = client.test_connection().await?;

    println!("API connection successful!");
    println!("Available voices: {}", probe.total_voices);
    println!("\nSample voices:");
    for (i, voice) in probe.samples.iter().enumerate() {
        println!("  {}. {} ({}...)", i + 1, voice.name, voice.id_prefix);
    }

    Ok(())
}

fn needs_confirmation(text_chars: usize) -> bool {
    text_chars > RECOMMENDED_MAX_CHARS
}

/// Anything but an explicit `y` declines; `yes`, `n`, and an empty line
/// all abort.
fn confirmation_accepted(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

/// Asks the user whether to proceed with text over the advisory limit.
fn confirm_long_text(chars: usize) -> Result<bool> {
    println!("Text is {chars} characters. Consider splitting for better results.");
    print!("Continue anyway? (y/N): ");
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    Ok(confirmation_accepted(&answer))
}

fn preview(text: &str) -> String {
    if text.chars().count() > PREVIEW_CHARS {
        let head: String = text.chars().take(PREVIEW_CHARS).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}

fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
