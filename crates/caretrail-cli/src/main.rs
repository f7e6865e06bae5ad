//! caretrail CLI: browse health timeline files in the terminal

use caretrail_engine::{
    parse_timeline, read_timeline_text, write_sample, Config, ParseOutcome, SampleError,
};
use caretrail_tui::{App, UiConfig};
use clap::{Parser, Subcommand};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the tracing filter.
const LOG_ENV: &str = "CARETRAIL_LOG";

/// Health timeline viewer with TUI
#[derive(Parser)]
#[command(name = "caretrail")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file
    #[arg(long, global = true, default_value = ".caretrail/config.json")]
    config: PathBuf,

    /// Timeline file to open in the TUI
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the TUI (default when no command specified)
    Tui {
        /// Timeline file to load on start
        file: Option<PathBuf>,
    },

    /// Parse a timeline file and print its entries
    Parse {
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write the bundled sample timeline
    Sample {
        /// File or directory to write to (default: configured sample dir)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Print the timeline screen for a file as plain text
    Render {
        file: PathBuf,

        #[arg(long, default_value = "120")]
        width: u16,

        #[arg(long, default_value = "40")]
        height: u16,

        /// Entry id (line number) to select
        #[arg(long)]
        select: Option<usize>,
    },

    /// Write a default config file
    Init,
}

/// Where log output goes.
enum LogTarget {
    /// Append to the configured log file; nothing when logging is off.
    File,
    /// Standard error, for headless commands.
    Stderr,
}

fn main() {
    let cli = Cli::parse();

    let config = match Config::load_or_default(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load {}: {e}", cli.config.display());
            std::process::exit(1);
        }
    };

    match cli.command {
        None => cmd_tui(config, cli.file),
        Some(Commands::Tui { file }) => cmd_tui(config, file.or(cli.file)),
        Some(Commands::Parse { file, json }) => {
            init_tracing(&config, &LogTarget::Stderr);
            cmd_parse(&file, json);
        }
        Some(Commands::Sample { output }) => {
            init_tracing(&config, &LogTarget::Stderr);
            cmd_sample(output.as_deref().unwrap_or(&config.sample_dir));
        }
        Some(Commands::Render {
            file,
            width,
            height,
            select,
        }) => {
            init_tracing(&config, &LogTarget::Stderr);
            cmd_render(config, file, width, height, select);
        }
        Some(Commands::Init) => cmd_init(&cli.config),
    }
}

fn init_tracing(config: &Config, target: &LogTarget) {
    let default_level = match target {
        LogTarget::File => "info",
        LogTarget::Stderr => "warn",
    };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    match target {
        LogTarget::Stderr => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
        LogTarget::File => {
            // The TUI owns the terminal, so logs only go to a file.
            let Some(path) = &config.log_file else {
                return;
            };
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && std::fs::create_dir_all(parent).is_err() {
                    return;
                }
            }
            let Ok(file) = OpenOptions::new().create(true).append(true).open(path) else {
                return;
            };
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .init();
        }
    }
}

fn runtime() -> tokio::runtime::Runtime {
    match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Failed to create tokio runtime: {e}");
            std::process::exit(1);
        }
    }
}

fn read_or_exit(rt: &tokio::runtime::Runtime, path: &Path) -> String {
    match rt.block_on(read_timeline_text(path)) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn cmd_tui(config: Config, file: Option<PathBuf>) {
    init_tracing(&config, &LogTarget::File);
    let rt = runtime();
    if let Err(e) = rt.block_on(caretrail_tui::run_tui(config, file)) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn cmd_parse(path: &Path, json: bool) {
    let text = read_or_exit(&runtime(), path);
    let outcome = parse_timeline(&text);
    debug!(
        path = %path.display(),
        entries = outcome.records.len(),
        skipped = outcome.skipped_lines.len(),
        "parsed timeline"
    );

    if json {
        match serde_json::to_string_pretty(&outcome) {
            Ok(out) => println!("{out}"),
            Err(e) => {
                eprintln!("Failed to serialize: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    println!("{}", format_outcome(&outcome));
}

/// Plain-text listing of parsed entries followed by a summary line.
fn format_outcome(outcome: &ParseOutcome) -> String {
    let mut lines = Vec::new();

    for record in &outcome.records {
        lines.push(format!("#{} {}", record.id, record.month));
        lines.push(format!("  Concern:  {}", record.member_concern));
        lines.push(format!("  Decision: {}", record.decision_by_elyx));
        if let Some(reason) = &record.reason_for_decision {
            lines.push(format!("  Reason:   {reason}"));
        }
        lines.push(String::new());
    }

    let mut summary = format!("{} entries", outcome.records.len());
    if !outcome.skipped_lines.is_empty() {
        let skipped: Vec<String> = outcome
            .skipped_lines
            .iter()
            .map(ToString::to_string)
            .collect();
        summary.push_str(", skipped lines: ");
        summary.push_str(&skipped.join(", "));
    }
    lines.push(summary);

    lines.join("\n")
}

fn cmd_sample(target: &Path) {
    match write_sample(target) {
        Ok(path) => println!("Wrote {}", path.display()),
        Err(SampleError::AlreadyExists(path)) => {
            eprintln!("{} already exists, not overwriting", path.display());
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Failed to write sample: {e}");
            std::process::exit(1);
        }
    }
}

fn cmd_render(config: Config, path: PathBuf, width: u16, height: u16, select: Option<usize>) {
    let text = read_or_exit(&runtime(), &path);

    let mut app = App::new(config, UiConfig::from_env());
    app.resize(width, height);
    app.load_text(path, text);
    // The load toast is noise in a static render.
    app.toast = None;

    if let Some(id) = select {
        if !app.select_id(id) {
            eprintln!("No entry with id {id}");
            std::process::exit(1);
        }
    }

    print!("{}", caretrail_tui::render_to_string(&app, width, height));
}

fn cmd_init(config_path: &Path) {
    if config_path.exists() {
        println!("Config already exists at {}", config_path.display());
        return;
    }

    match Config::default().save(config_path) {
        Ok(()) => println!("Created {}", config_path.display()),
        Err(e) => {
            eprintln!("Failed to write config: {e}");
            std::process::exit(1);
        }
    }
}
