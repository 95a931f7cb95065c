//! `forumflat` — flatten a forum-scrape JSON document into a CSV table.
//!
//! # Usage
//!
//! ```
//! forumflat forum_data.json
//! forumflat forum_data.json out.csv --config forumflat.toml
//! ```

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use forumflat_cli::{Settings, convert};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
  name = "forumflat",
  version,
  about = "Flatten forum-scrape JSON into a CSV table"
)]
struct Cli {
  /// JSON document: an array of threads.
  input: PathBuf,

  /// Destination CSV (default: `<input stem>_flattened.csv` next to the input).
  output: Option<PathBuf>,

  /// Path to a TOML config file (delimiter, suffix).
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
  // Logs go to stderr; stdout only carries the confirmation line.
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let settings = Settings::load(cli.config.as_deref())
    .context("failed to load configuration")?;

  let conversion = convert(&cli.input, cli.output.as_deref(), &settings)
    .with_context(|| format!("error processing {}", cli.input.display()))?;

  println!("Flattened CSV saved to {}", conversion.output.display());
  Ok(())
}
