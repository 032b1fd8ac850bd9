use clap::{Parser, Subcommand};

use kana_cli::commands::{config_ops, convert_ops, snapshot_ops};

#[derive(Parser)]
#[command(name = "kanatool", about = "Kana to romaji diagnostics")]
struct Cli {
    /// Custom romaji table TOML (replaces the built-in table)
    #[arg(long, global = true)]
    romaji: Option<String>,
    /// Custom settings TOML
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Write a JSON trace to this directory (needs the `trace` feature)
    #[arg(long, global = true)]
    trace_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print every romanization of a kana string
    Convert {
        /// Kana to convert
        kana: String,
        /// Fold katakana to hiragana first
        #[arg(long)]
        katakana: bool,
        /// Keep only the first N romanizations
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Replay keystrokes against a kana problem
    Accept {
        /// Kana problem
        kana: String,
        /// Keys to type
        keys: String,
        /// Fold katakana to hiragana first
        #[arg(long)]
        katakana: bool,
    },
    /// Show how a kana string is tokenized
    Explain {
        /// Kana to explain
        kana: String,
        /// Fold katakana to hiragana first
        #[arg(long)]
        katakana: bool,
        /// Number of romanizations to list
        #[arg(short, long, default_value = "10")]
        n: usize,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the built-in romaji table TOML
    RomajiExport,
    /// Validate a romaji table TOML file
    RomajiValidate {
        /// TOML file
        file: String,
    },
    /// Print the built-in settings TOML
    SettingsExport,
    /// Validate a settings TOML file
    SettingsValidate {
        /// TOML file
        file: String,
    },
    /// Record romanizations of each input line to JSONL
    Snapshot {
        /// Input file (one kana string per line)
        input_file: String,
        /// Output JSONL file
        output_file: String,
        /// Romanizations recorded per input
        #[arg(short, long, default_value = "64")]
        n: usize,
    },
    /// Compare current romanizations against a saved snapshot
    DiffSnapshot {
        /// Input file (one kana string per line)
        input_file: String,
        /// Baseline JSONL snapshot
        baseline_file: String,
        /// Romanizations compared per input
        #[arg(short, long, default_value = "64")]
        n: usize,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Some(dir) = cli.trace_dir.as_deref() {
        kana_engine::init_tracing(std::path::Path::new(dir));
    }
    config_ops::load_overrides(cli.romaji.as_deref(), cli.settings.as_deref());

    match cli.command {
        Command::Convert {
            kana,
            katakana,
            limit,
        } => convert_ops::convert_cmd(&kana, katakana, limit),
        Command::Accept {
            kana,
            keys,
            katakana,
        } => convert_ops::accept_cmd(&kana, &keys, katakana),
        Command::Explain {
            kana,
            katakana,
            n,
            json,
        } => convert_ops::explain_cmd(&kana, katakana, n, json),
        Command::RomajiExport => config_ops::romaji_export(),
        Command::RomajiValidate { file } => config_ops::romaji_validate(&file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
        Command::Snapshot {
            input_file,
            output_file,
            n,
        } => snapshot_ops::snapshot_cmd(&input_file, &output_file, n),
        Command::DiffSnapshot {
            input_file,
            baseline_file,
            n,
        } => snapshot_ops::diff_snapshot_cmd(&input_file, &baseline_file, n),
    }
}
