//! gardiner CLI: Gardiner sign codes, hieroglyphs, and transliteration order.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};

use gardiner_tools::collate;
use gardiner_tools::config::GardinerConfig;
use gardiner_tools::glyph::{self, WriteMode};

#[derive(Parser)]
#[command(name = "gardiner", version, about = "Gardiner Sign List tools")]
struct Cli {
    /// Config file (defaults to $GARDINER_CONFIG, then the XDG config dir).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert '-' separated Gardiner codes to hieroglyphs.
    Glyph {
        /// Codes such as "A1-D21-Aa1".
        codes: String,
    },

    /// Convert hieroglyphs back to comma-separated Gardiner codes.
    Code {
        /// One or more hieroglyph characters.
        glyphs: String,
    },

    /// Sort transliterated words in dictionary order.
    Sort {
        /// Words in Unicode transliteration. Uses the configured demo list if empty.
        words: Vec<String>,
    },

    /// Write every sign-list code to a label file, one per line.
    Labels {
        /// Output file.
        file: PathBuf,

        /// Overwrite the file instead of appending.
        #[arg(long)]
        truncate: bool,
    },
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .ok(); // Ignore error if hook already set (e.g., in tests)

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Glyph { codes } => {
            let glyphs = glyph::encode(&codes)?;
            println!("{glyphs}");
        }

        Commands::Code { glyphs } => {
            let codes = glyph::decode(&glyphs)?;
            println!("{codes}");
        }

        Commands::Sort { words } => {
            let words = if words.is_empty() {
                GardinerConfig::resolve(cli.config.as_deref())?.demo_words
            } else {
                words
            };
            for word in collate::sort(words)? {
                println!("{word}");
            }
        }

        Commands::Labels { file, truncate } => {
            let config = GardinerConfig::resolve(cli.config.as_deref())?;
            let list = config.labels.sign_list()?;
            let mode = if truncate {
                WriteMode::Truncate
            } else {
                config.labels.write_mode()
            };
            let written = list.write_labels(&file, mode)?;
            let abs = std::path::absolute(&file).into_diagnostic()?;
            println!("Wrote {written} labels to {}", abs.display());
        }
    }

    Ok(())
}
