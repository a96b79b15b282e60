use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use soliloquy::{
    analyze_transcript, count_words, highlight, load_transcript, score_transcript, GeminiClient,
    GeminiConfig, HeuristicsConfig, HighlightConfig, ScoreReport,
};

#[derive(Parser)]
#[command(name = "soliloquy")]
#[command(author, version, about = "Self-introduction transcript scoring engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a transcript against the full rubric (requires GEMINI_API_KEY)
    Score {
        /// Transcript file (UTF-8 text); wins over --text when both are given
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Transcript passed inline
        #[arg(short, long)]
        text: Option<String>,

        /// Context label passed to the semantic scorer
        #[arg(short, long, default_value = "interview")]
        context: String,

        /// Output file for the JSON report (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output file for a human-readable report
        #[arg(long)]
        human_readable: Option<PathBuf>,

        /// Semantic scorer model override
        #[arg(long)]
        model: Option<String>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Run only the deterministic heuristics, without calling the semantic scorer
    Analyze {
        /// Transcript file (UTF-8 text); wins over --text when both are given
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Transcript passed inline
        #[arg(short, long)]
        text: Option<String>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Score {
            input,
            text,
            context,
            output,
            human_readable,
            model,
            verbose,
        } => {
            setup_logging(verbose);
            run_score(input, text, context, output, human_readable, model).await
        }
        Commands::Analyze {
            input,
            text,
            verbose,
        } => {
            setup_logging(verbose);
            run_analyze(input, text)
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

async fn run_score(
    input: Option<PathBuf>,
    text: Option<String>,
    context: String,
    output: Option<PathBuf>,
    human_readable: Option<PathBuf>,
    model: Option<String>,
) -> Result<()> {
    let transcript = load_transcript(input.as_deref(), text.as_deref())?;
    info!(
        "Loaded transcript: {} words, {} characters",
        transcript.split_whitespace().count(),
        transcript.chars().count()
    );

    let mut api_config = GeminiConfig::from_env()?;
    if let Some(model) = model {
        api_config.model = model;
    }
    let client = GeminiClient::new(api_config);

    let heuristics_config = HeuristicsConfig::default();
    info!("Scoring transcript (context: {})...", context);
    let result = score_transcript(&client, &transcript, &context, &heuristics_config).await?;

    info!("Overall score: {:.2}", result.overall);
    let flagged = result.score_flags.flagged();
    if !flagged.is_empty() {
        info!("Weak areas: {}", flagged.join(", "));
    }

    let highlighted = highlight(&transcript, &HighlightConfig::default());
    let report = ScoreReport::new(result, &transcript, highlighted, &context);

    if let Some(path) = &human_readable {
        report.write_human(path)?;
        info!("Human-readable report written to {:?}", path);
    }

    match &output {
        Some(path) => {
            report.write_json(path)?;
            info!("Report written to {:?}", path);
        }
        None => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

fn run_analyze(input: Option<PathBuf>, text: Option<String>) -> Result<()> {
    let transcript = load_transcript(input.as_deref(), text.as_deref())?;
    let config = HeuristicsConfig::default();
    let scores = analyze_transcript(&transcript, &config);

    println!("Transcript Analysis");
    println!("===================");
    println!("Characters: {}", transcript.chars().count());
    println!("Words: {}", count_words(&transcript));
    println!();
    println!("Salutation score:  {} / 5", scores.salutation);
    println!("Key info score:    {:.2} / 30", scores.key_info);
    println!("Flow score:        {:.2} / 5", scores.flow);
    println!("Speech rate score: {} / 10", scores.speech_rate);
    println!("Filler word rate:  {:.1}%", scores.filler_rate * 100.0);

    Ok(())
}
