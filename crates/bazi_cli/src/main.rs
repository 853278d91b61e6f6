use std::path::{Path, PathBuf};

use bazi_config::{BaziConfig, CliOverrides, DEFAULT_LOG_FILTER, OutputFormat};
use bazi_rs::{
    ALL_BRANCHES, ALL_STEMS, BaziReport, CompatibilityReport, Element, FortuneSummary,
    analyze_labels, analyze_labels_batch, compatibility, relation_of,
};
use clap::{Parser, Subcommand};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bazi", about = "Four-pillars element analysis CLI")]
struct Cli {
    /// Path to a TOML config file (default: ./bazi.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log filter directive, e.g. "bazi_rs=debug"
    #[arg(long, global = true)]
    log: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze one chart
    Analyze {
        /// Year pillar, e.g. 甲子 or jia-zi
        year: String,
        /// Month pillar
        month: String,
        /// Day pillar
        day: String,
        /// Hour pillar
        hour: String,
        /// Output format: text or json
        #[arg(long, value_parser = parse_format)]
        format: Option<OutputFormat>,
        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Relation of element A to element B
    Relation {
        /// Element (金/metal, 木/wood, 水/water, 火/fire, 土/earth)
        a: Element,
        /// Element
        b: Element,
    },
    /// Print the stem and branch element table
    Table,
    /// Analyze a file of charts, one JSON array of four labels per line
    Batch {
        /// Input file
        file: PathBuf,
        /// Analyze on the calling thread only
        #[arg(long)]
        sequential: bool,
    },
    /// Score the pairing of two charts
    Compat {
        /// Four labels of the first chart
        #[arg(long, num_args = 4, required = true)]
        first: Vec<String>,
        /// Four labels of the second chart
        #[arg(long, num_args = 4, required = true)]
        second: Vec<String>,
        /// Output format: text or json
        #[arg(long, value_parser = parse_format)]
        format: Option<OutputFormat>,
        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Fortune seed range for a chart
    Fortune {
        year: String,
        month: String,
        day: String,
        hour: String,
        /// Output format: text or json
        #[arg(long, value_parser = parse_format)]
        format: Option<OutputFormat>,
        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse().map_err(|e: bazi_config::ConfigError| e.to_string())
}

/// Pick the log directive: `--log`, `BAZI_LOG` or the config file first
/// (already layered into `configured`), then `RUST_LOG`, then the default.
fn log_directive(configured: Option<&str>, rust_log: Option<&str>) -> String {
    configured
        .or(rust_log)
        .unwrap_or(DEFAULT_LOG_FILTER)
        .to_string()
}

fn init_tracing(directive: &str) {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|e| {
        eprintln!("Invalid log filter {directive:?}: {e}");
        EnvFilter::new(DEFAULT_LOG_FILTER)
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(path: Option<&Path>, overrides: &CliOverrides) -> BaziConfig {
    let root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    BaziConfig::load(&root, path, Some(overrides)).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}");
        std::process::exit(1);
    })
}

fn require_report(labels: [&str; 4]) -> BaziReport {
    analyze_labels(labels).unwrap_or_else(|e| {
        eprintln!("Invalid chart: {e}");
        std::process::exit(1);
    })
}

fn four_labels(labels: &[String]) -> [&str; 4] {
    match labels {
        [a, b, c, d] => [a.as_str(), b.as_str(), c.as_str(), d.as_str()],
        _ => {
            eprintln!("Expected 4 pillar labels, got {}", labels.len());
            std::process::exit(1);
        }
    }
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> String {
    let out = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    out.unwrap_or_else(|e| {
        eprintln!("Failed to serialize output: {e}");
        std::process::exit(1);
    })
}

fn element_list(elements: &[Element]) -> String {
    if elements.is_empty() {
        return "-".to_string();
    }
    elements
        .iter()
        .map(|e| format!("{} ({})", e.name(), e.hanzi()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_report_text(r: &BaziReport) {
    println!("Chart:        {}", r.bazi_string());
    println!(
        "Elements:     Metal {}  Wood {}  Water {}  Fire {}  Earth {}",
        r.elements.metal, r.elements.wood, r.elements.water, r.elements.fire, r.elements.earth
    );
    println!(
        "Day master:   {} ({} {})",
        r.day_master,
        r.day_master_element.name(),
        r.day_master_element.hanzi()
    );
    println!("Strength:     {}", r.strength.name());
    println!("Prominent:    {}", element_list(&r.prominent_elements));
    println!("Absent:       {}", element_list(&r.absent_elements));
    println!(
        "Favorable:    {} ({})",
        r.favorable_element.name(),
        r.favorable_element.hanzi()
    );
    println!("Score:        {}", r.score);
}

fn print_compat_text(c: &CompatibilityReport) {
    println!("Score:              {}", c.score);
    println!("Same day master:    {}", c.same_day_master_element);
    println!("Same favorable:     {}", c.same_favorable_element);
    println!("First -> second:    {}", c.day_master_relation.name());
    println!("Second -> first:    {}", c.reverse_relation.name());
}

/// Analyze batch file content. Returns one JSON line per non-blank input
/// line: the report, or `{"line": n, "error": ..}` with a 1-based line number.
fn batch_lines(content: &str, parallel: bool) -> Vec<String> {
    let mut lines: Vec<(usize, Result<[String; 4], String>)> = Vec::new();
    for (i, raw) in content.lines().enumerate() {
        let raw = raw.trim();
        if raw.is_empty() {
            continue;
        }
        let parsed = serde_json::from_str::<[String; 4]>(raw).map_err(|e| e.to_string());
        lines.push((i + 1, parsed));
    }

    let entries: Vec<[String; 4]> = lines
        .iter()
        .filter_map(|(_, p)| p.as_ref().ok().cloned())
        .collect();
    // One result per parsed entry, consumed in line order.
    let mut results = analyze_labels_batch(&entries, parallel).into_iter();

    let mut out = Vec::with_capacity(lines.len());
    let mut failed = 0usize;
    for (line, parsed) in &lines {
        let outcome = match parsed {
            Err(msg) => Err(msg.clone()),
            Ok(_) => match results.next() {
                Some(Ok(report)) => Ok(report),
                Some(Err(e)) => Err(e.to_string()),
                None => Err("missing result".to_string()),
            },
        };
        match outcome {
            Ok(report) => out.push(to_json(&report, false)),
            Err(error) => {
                failed += 1;
                warn!(line, %error, "batch entry rejected");
                out.push(serde_json::json!({ "line": line, "error": error }).to_string());
            }
        }
    }
    debug!(total = lines.len(), failed, "batch finished");
    out
}

fn run_batch(file: &Path, parallel: bool) {
    let content = std::fs::read_to_string(file).unwrap_or_else(|e| {
        eprintln!("Failed to read {}: {e}", file.display());
        std::process::exit(1);
    });
    for line in batch_lines(&content, parallel) {
        println!("{line}");
    }
}

fn print_fortune_text(f: &FortuneSummary) {
    println!("Score:    {}", f.score);
    println!("Range:    {}..={} (x10,000)", f.range.low, f.range.high);
    println!("Baseline: {}", f.baseline);
}

fn main() {
    let cli = Cli::parse();

    let (format, pretty) = match &cli.command {
        Commands::Analyze { format, pretty, .. }
        | Commands::Compat { format, pretty, .. }
        | Commands::Fortune { format, pretty, .. } => (*format, pretty.then_some(true)),
        _ => (None, None),
    };
    let sequential = matches!(cli.command, Commands::Batch { sequential: true, .. });
    let overrides = CliOverrides {
        format,
        pretty,
        log_filter: cli.log.clone(),
        parallel: sequential.then_some(false),
    };
    let config = load_config(cli.config.as_deref(), &overrides);
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    init_tracing(&log_directive(config.log.filter.as_deref(), rust_log.as_deref()));

    match cli.command {
        Commands::Analyze {
            year,
            month,
            day,
            hour,
            ..
        } => {
            let report =
                require_report([year.as_str(), month.as_str(), day.as_str(), hour.as_str()]);
            match config.output.effective_format() {
                OutputFormat::Json => {
                    println!("{}", to_json(&report, config.output.effective_pretty()))
                }
                OutputFormat::Text => print_report_text(&report),
            }
        }

        Commands::Relation { a, b } => {
            let rel = relation_of(a, b);
            println!("{} -> {}: {}", a.name(), b.name(), rel.name());
        }

        Commands::Table => {
            println!("Stems:");
            for s in ALL_STEMS.iter() {
                println!("  {} {:<5} {}", s.hanzi(), s.name(), s.element().name());
            }
            println!("Branches:");
            for b in ALL_BRANCHES.iter() {
                println!("  {} {:<5} {}", b.hanzi(), b.name(), b.element().name());
            }
        }

        Commands::Batch { file, .. } => {
            run_batch(&file, config.batch.effective_parallel());
        }

        Commands::Compat { first, second, .. } => {
            let a = require_report(four_labels(&first));
            let b = require_report(four_labels(&second));
            let c = compatibility(&a, &b);
            match config.output.effective_format() {
                OutputFormat::Json => {
                    println!("{}", to_json(&c, config.output.effective_pretty()))
                }
                OutputFormat::Text => print_compat_text(&c),
            }
        }

        Commands::Fortune {
            year,
            month,
            day,
            hour,
            ..
        } => {
            let report =
                require_report([year.as_str(), month.as_str(), day.as_str(), hour.as_str()]);
            let summary = FortuneSummary::from_score(report.score);
            match config.output.effective_format() {
                OutputFormat::Json => {
                    println!("{}", to_json(&summary, config.output.effective_pretty()))
                }
                OutputFormat::Text => print_fortune_text(&summary),
            }
        }
    }
}
