mod api;
mod server;

use clap::{Args, Parser, Subcommand};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use content_lens::config::LensConfig;
use content_lens::generator::word_diff;
use content_lens::history::HistoryStore;
use content_lens::{format_float, require_content, AnalysisEngine, AnalysisResult};

#[derive(Parser)]
#[command(name = "content-lens", about = "Editorial intelligence for news copy")]
struct Cli {
    /// Path to a TOML config (defaults to LENS_CONFIG_PATH or config/lens.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    Analyze(AnalyzeArgs),
    Serve(ServeArgs),
    /// Print the effective configuration, or write it to a file
    Config(ConfigArgs),
}

#[derive(Args, Debug, Clone, Default)]
struct AnalyzeArgs {
    #[arg(long)]
    text: Option<String>,
    #[arg(long)]
    sensitivity: Option<f64>,
    #[arg(long)]
    json: bool,
    /// Skip the simulated processing delay
    #[arg(long)]
    no_delay: bool,
    /// Show a word diff between the input and the neutral rewrite
    #[arg(long)]
    diff: bool,
    /// Record the result in the history file
    #[arg(long)]
    save: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
    #[arg(long, default_value_t = 8787)]
    port: u16,
    #[arg(long, default_value = "web/dist")]
    web_root: String,
}

#[derive(Args, Debug, Clone)]
struct ConfigArgs {
    #[arg(long)]
    write: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    load_dotenv();
    init_tracing();
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let (config, _) = LensConfig::load(cli.config)?;
    let command = cli.command.unwrap_or(Command::Analyze(AnalyzeArgs::default()));

    match command {
        Command::Analyze(args) => run_analyze(args, config).await,
        Command::Serve(args) => server::serve(args, config).await,
        Command::Config(args) => run_config(args, &config),
    }
}

async fn run_analyze(args: AnalyzeArgs, config: LensConfig) -> Result<(), String> {
    let mut engine = AnalysisEngine::from_config(&config).map_err(|err| err.to_string())?;
    if args.no_delay {
        engine = engine.with_latency(Duration::ZERO);
    }

    let mut options = engine.default_options();
    if let Some(value) = args.sensitivity {
        options.sensitivity = validate_sensitivity(value)?;
    }

    let text = read_text(args.text)?;
    let result = engine.analyze(&text, &options).await;

    if args.save {
        let history = HistoryStore::load(config.history.path.clone(), config.history.limit).await?;
        history.record(&text, &result).await?;
    }

    if args.json {
        let payload = serde_json::to_string_pretty(&result)
            .map_err(|err| format!("failed to serialize result: {}", err))?;
        println!("{}", payload);
        return Ok(());
    }

    print_report(&result, options.sensitivity);
    if args.diff {
        print_diff(&text, &result.multi_tone_rewrites.neutral);
    }
    Ok(())
}

fn print_report(result: &AnalysisResult, sensitivity: f64) {
    let analysis = &result.content_analysis;
    let bias_types: Vec<&str> = analysis.bias_type.iter().map(|kind| kind.label()).collect();

    println!(
        "Bias level: {}{} (sensitivity {}x)",
        analysis.bias_level.label(),
        if bias_types.is_empty() {
            String::new()
        } else {
            format!(" [{}]", bias_types.join(", "))
        },
        format_float(sensitivity, 1)
    );
    println!("Emotional tone: {}", analysis.emotional_tone);
    println!(
        "Virality: {} | Readability: {} words/sentence",
        analysis.virality_score, analysis.readability_score
    );
    let radar = &analysis.bias_radar_data;
    println!(
        "Radar: partisanship {} | sensationalism {} | omission {} | framing {} | tone {}",
        radar.partisanship, radar.sensationalism, radar.omission, radar.framing, radar.tone
    );
    if !analysis.entities.is_empty() {
        println!("Entities: {}", analysis.entities.join(", "));
    }
    for fact in &result.fact_check.verified_facts {
        println!("Fact check: {}", fact);
    }

    println!("\nHeadlines:");
    println!("  viral: {}", result.headlines.viral);
    println!("  seo: {}", result.headlines.seo);
    println!("  neutral: {}", result.headlines.neutral);

    println!("\nRewrites:");
    println!("  neutral: {}", result.multi_tone_rewrites.neutral);
    println!("  professional: {}", result.multi_tone_rewrites.professional);
    println!("  gen z: {}", result.multi_tone_rewrites.gen_z);
    println!("  concise: {}", result.multi_tone_rewrites.concise);

    println!("\nReel script:\n{}", result.adapted_content.short_reel_script);
    println!("\nPodcast: {}", result.adapted_content.podcast_summary);
    for article in &result.adapted_content.regional_articles {
        println!("{}: {}", article.language, article.text);
    }

    if !result.editorial_suggestions.is_empty() {
        println!("\nSuggestions:");
        for suggestion in &result.editorial_suggestions {
            match &suggestion.fix {
                Some(fix) => println!(
                    "- {}: {} (try \"{}\")",
                    suggestion.issue, suggestion.recommendation, fix
                ),
                None => println!("- {}: {}", suggestion.issue, suggestion.recommendation),
            }
        }
    }

    if !result.seo_keywords.is_empty() {
        println!("\nKeywords: {}", result.seo_keywords.join(", "));
    }
}

fn print_diff(original: &str, modified: &str) {
    let diff = word_diff(original, modified);
    let removed: Vec<&str> = diff.removed().collect();
    let added: Vec<&str> = diff.added().collect();
    if removed.is_empty() && added.is_empty() {
        println!("\nDiff: no changes");
        return;
    }
    println!("\nDiff:");
    println!("  - {}", removed.join(" "));
    println!("  + {}", added.join(" "));
}

fn run_config(args: ConfigArgs, config: &LensConfig) -> Result<(), String> {
    if let Some(path) = args.write {
        config.write(&path)?;
        println!("Wrote {}", path.display());
        return Ok(());
    }
    let payload = toml::to_string_pretty(config)
        .map_err(|err| format!("failed to serialize config: {}", err))?;
    print!("{}", payload);
    Ok(())
}

fn read_text(arg: Option<String>) -> Result<String, String> {
    let text = match arg {
        Some(text) if !text.trim().is_empty() => text,
        _ => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|err| format!("failed reading stdin: {}", err))?;
            buffer
        }
    };
    require_content(text).map_err(|err| format!("{}: pass --text or pipe stdin", err))
}

fn validate_sensitivity(value: f64) -> Result<f64, String> {
    if !value.is_finite() {
        return Err(format!("invalid sensitivity: {}", value));
    }
    Ok(value)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn load_dotenv() {
    let _ = dotenvy::dotenv();
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let manifest_path = Path::new(manifest_dir).join(".env");
    let _ = dotenvy::from_path(manifest_path);
}
