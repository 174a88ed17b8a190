use std::process;

use clap::{Parser, Subcommand};

use hanpin_cli::commands::convert_ops::{self, Operation};
use hanpin_cli::commands::{config_ops, dict_ops};
use hanpin_cli::trace_init::init_tracing;
use hanpin_core::settings::settings;
use hanpin_core::OutputMode;

#[derive(Parser)]
#[command(name = "pinyintool", about = "Chinese to pinyin conversion tool")]
struct Cli {
    /// Dictionary directory (words_N.txt segments and surnames.txt)
    #[arg(long, global = true)]
    data_dir: Option<String>,
    /// Custom settings TOML file
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Re-read dictionary files for every line instead of caching them
    #[arg(long, global = true)]
    reload: bool,
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert text to pinyin words
    Convert {
        /// Text to convert (reads stdin lines when omitted)
        text: Option<String>,
        /// Output mode: none, ascii or unicode
        #[arg(short, long)]
        mode: Option<OutputMode>,
    },
    /// Convert a personal name, reading the surname first
    Name {
        /// Name to convert (reads stdin lines when omitted)
        text: Option<String>,
        /// Output mode: none, ascii or unicode
        #[arg(short, long)]
        mode: Option<OutputMode>,
    },
    /// Join pinyin words with a delimiter
    Phrase {
        /// Text to convert (reads stdin lines when omitted)
        text: Option<String>,
        #[arg(short, long)]
        delimiter: Option<String>,
        /// Output mode: none, ascii or unicode
        #[arg(short, long)]
        mode: Option<OutputMode>,
    },
    /// Build a URL slug
    Permalink {
        /// Text to convert (reads stdin lines when omitted)
        text: Option<String>,
        /// One of "_", "-", "." or ""
        #[arg(short, long)]
        delimiter: Option<String>,
    },
    /// First letter of every word
    Abbr {
        /// Text to convert (reads stdin lines when omitted)
        text: Option<String>,
        #[arg(short, long)]
        delimiter: Option<String>,
    },
    /// Romanize a sentence, keeping punctuation
    Sentence {
        /// Sentence to convert (reads stdin lines when omitted)
        text: Option<String>,
        /// Keep tone marks
        #[arg(long)]
        tone: bool,
    },
    /// Show dictionary segment and entry counts
    DictInfo,
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    if let Some(file) = &cli.settings {
        config_ops::load_settings(file);
    }

    let (op, text) = match cli.command {
        Command::SettingsExport => return config_ops::settings_export(),
        Command::SettingsValidate { file } => return config_ops::settings_validate(&file),
        Command::DictInfo => return dict_ops::info(&require_data_dir(cli.data_dir.as_deref())),
        command => resolve(command),
    };

    let pinyin = convert_ops::open_pinyin(&require_data_dir(cli.data_dir.as_deref()), cli.reload);
    convert_ops::run_cmd(&pinyin, &op, text, cli.json);
}

fn require_data_dir(data_dir: Option<&str>) -> String {
    data_dir.map(str::to_string).unwrap_or_else(|| {
        eprintln!("Error: --data-dir is required");
        process::exit(1);
    })
}

/// Fill unset options from the settings' `[output]` section.
fn resolve(command: Command) -> (Operation, Option<String>) {
    let output = &settings().output;
    match command {
        Command::Convert { text, mode } => (
            Operation::Convert {
                mode: mode.unwrap_or(output.mode),
            },
            text,
        ),
        Command::Name { text, mode } => (
            Operation::Name {
                mode: mode.unwrap_or(output.mode),
            },
            text,
        ),
        Command::Phrase {
            text,
            delimiter,
            mode,
        } => (
            Operation::Phrase {
                delimiter: delimiter.unwrap_or_else(|| output.phrase_delimiter.clone()),
                mode: mode.unwrap_or(output.mode),
            },
            text,
        ),
        Command::Permalink { text, delimiter } => (
            Operation::Permalink {
                delimiter: delimiter.unwrap_or_else(|| output.permalink_delimiter.clone()),
            },
            text,
        ),
        Command::Abbr { text, delimiter } => (
            Operation::Abbr {
                delimiter: delimiter.unwrap_or_else(|| output.abbr_delimiter.clone()),
            },
            text,
        ),
        Command::Sentence { text, tone } => (Operation::Sentence { tone }, text),
        Command::DictInfo | Command::SettingsExport | Command::SettingsValidate { .. } => {
            unreachable!("handled before resolve")
        }
    }
}
