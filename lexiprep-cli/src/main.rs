use anyhow::Result;
use clap::Parser;
use std::path::Path;
use tracing_subscriber::EnvFilter;

// Import from lexiprep-core
use lexiprep_core::{
    ConfigManager, Language, PipelineReport, PreprocessConfig, ReportFormat, Stage,
    StepProfiler, TextPreprocessor,
};

// Import CLI utilities
use lexiprep::{read_input, InputSource};

#[derive(Parser)]
#[command(name = "lexiprep")]
#[command(about = "Step-by-step text preprocessing: normalize, tokenize, filter, stem, lemmatize")]
struct Args {
    /// Text to process (takes precedence over --input)
    #[arg(short, long)]
    text: Option<String>,

    /// Path to a UTF-8 text file ("-" or nothing reads stdin)
    #[arg(short, long)]
    input: Option<String>,

    /// Path to custom config file (YAML format)
    #[arg(short, long)]
    config: Option<String>,

    /// Built-in preset to start from (see --show-configs)
    #[arg(long, conflicts_with = "config")]
    preset: Option<String>,

    /// Override the config language (code or name, e.g. "en", "german")
    #[arg(short, long)]
    language: Option<String>,

    /// Output format: text, table, or json
    #[arg(short = 'f', long, default_value = "text")]
    format: String,

    /// Write the rendered report to this file instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Show available config options and exit
    #[arg(long)]
    show_configs: bool,

    /// Enable timing of every pipeline stage
    #[arg(long)]
    profile: bool,

    /// Dump every stage snapshot to a directory as JSON
    #[arg(long)]
    dump_stages: bool,

    /// Directory for stage dump output
    #[arg(long, default_value = "test_outputs/stages")]
    stages_dir: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if args.show_configs {
        show_help();
        return Ok(());
    }

    let config = build_config(&args)?;

    let format = ReportFormat::parse(&args.format).unwrap_or_else(|| {
        eprintln!("⚠️  Unknown output format '{}', using text", args.format);
        ReportFormat::Text
    });

    // Resources load before any input is read, so a broken setup fails
    // even when there is nothing to process
    let processor = match TextPreprocessor::new(config) {
        Ok(processor) => processor,
        Err(e) => {
            eprintln!("❌ Failed to load resources: {e}");
            std::process::exit(1);
        }
    };

    let source = InputSource::from_args(args.text.as_deref(), args.input.as_deref());
    let raw_text = read_input(&source)?;
    if raw_text.trim().is_empty() {
        eprintln!("⚠️  Please type some text first (input from {} was empty)", source.describe());
        return Ok(());
    }

    let mut profiler = StepProfiler::new(processor.config().profile);
    let report = processor.process_with_profiler(&raw_text, &mut profiler);

    if args.dump_stages {
        save_stages(&report, &args.stages_dir)?;
        eprintln!("✅ All stages dumped to: {}", args.stages_dir);
    }

    match &args.output {
        Some(path) => {
            report.save_with_format(path, format)?;
            eprintln!("💾 Report saved to: {path}");
        }
        None => print!("{}", report.render(format)?),
    }

    profiler.print_summary();
    Ok(())
}

/// Config file or preset first, then CLI overrides on top
fn build_config(args: &Args) -> Result<PreprocessConfig> {
    let mut config = match &args.preset {
        Some(name) => {
            let manager = ConfigManager::new();
            let preset = manager.get_preset(name)?.clone();
            eprintln!("📋 Using preset: {name}");
            preset
        }
        None => match &args.config {
            Some(config_path) => {
                let config = PreprocessConfig::load_from_file(config_path)?;
                eprintln!("📋 Loaded config from: {config_path}");
                config
            }
            None => PreprocessConfig::default(),
        },
    };

    if let Some(name) = &args.language {
        config.language = Language::parse(name)
            .ok_or_else(|| anyhow::anyhow!("unsupported language '{name}'"))?;
    }
    if args.profile {
        config.profile = true;
    }

    Ok(config)
}

fn show_help() {
    println!("🦀 lexiprep text preprocessor");

    println!("\n📋 Available Configuration Options:");
    println!("  --text <text>           Text to process");
    println!("  --input <path>          Text file to process (default: stdin)");
    println!("  --config <path>         Load custom config file");
    println!("  --preset <name>         Start from a built-in preset");
    println!("  --language <lang>       Language for stopwords and stemming");
    println!("  --format <fmt>          Output format: text, table, or json");
    println!("  --output <path>         Write the report to a file");
    println!("  --profile               Print per-stage timings");
    println!("  --dump-stages           Write every stage snapshot as JSON");

    println!("\n📄 Output Formats:");
    println!("  text   - Every stage as a section plus the comparison table (default)");
    println!("  table  - Original word / stemmed / lemmatized table only");
    println!("  json   - Full report with snapshots, comparison and stats");

    println!("\n🧩 Built-in presets:");
    let manager = ConfigManager::new();
    for name in manager.preset_names() {
        println!("  {name}");
    }

    println!("\n🌍 Languages:");
    let names: Vec<&str> = Language::ALL.iter().map(|l| l.name()).collect();
    println!("  {}", names.join(", "));

    println!("\n📝 Usage Examples:");
    println!("  lexiprep --text \"Cats are RUNNING quickly!! See http://x.com 123\"");
    println!("  lexiprep -i notes.txt -f table");
    println!("  echo \"Die Katzen laufen\" | lexiprep --language german -f json");
    println!("  lexiprep -i notes.txt --preset keep-stopwords --dump-stages");
}

fn save_stages(report: &PipelineReport, output_dir: &str) -> Result<()> {
    use std::fs;
    fs::create_dir_all(output_dir)?;

    for (i, snapshot) in report.snapshots.iter().enumerate() {
        let path = Path::new(output_dir).join(format!("stage{}_{}.json", i + 1, snapshot.stage));
        fs::write(&path, serde_json::to_string_pretty(snapshot)?)?;
        eprintln!("  💾 {} ({} items)", path.display(), snapshot.content.len());
    }

    let comparison_path = Path::new(output_dir).join("comparison.json");
    fs::write(&comparison_path, serde_json::to_string_pretty(&report.comparison)?)?;
    eprintln!("  💾 {} ({} rows)", comparison_path.display(), report.comparison.len());

    // Summary file: quick reference for validation scripts
    let stage_counts: serde_json::Map<String, serde_json::Value> = Stage::ORDER
        .iter()
        .filter_map(|stage| {
            report
                .snapshot(*stage)
                .map(|s| (stage.to_string(), s.content.len().into()))
        })
        .collect();
    let summary = serde_json::json!({
        "schema_version": report.schema_version,
        "language": report.language,
        "captured_at": chrono::Utc::now().to_rfc3339(),
        "stage_counts": stage_counts,
        "stats": report.stats,
    });
    let summary_path = Path::new(output_dir).join("summary.json");
    fs::write(&summary_path, serde_json::to_string_pretty(&summary)?)?;
    eprintln!("  💾 {}", summary_path.display());

    Ok(())
}
