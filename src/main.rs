use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use natality::{catalog, LoadConfig};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Load the fixed-width natality public-use file into DuckDB"
)]
struct Cli {
    /// YAML file with defaults; flags given on the command line win.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Recreate the database and load the input file into it.
    Load(RunArgs),
    /// Decode the first lines and print them as JSON, without touching the database.
    Preview(RunArgs),
    /// Print the column catalog as JSON.
    Fields,
}

#[derive(Args)]
struct RunArgs {
    #[arg(short, long)]
    input: Option<PathBuf>,
    #[arg(short, long)]
    database: Option<PathBuf>,
    #[arg(long)]
    table: Option<String>,
    /// Comma-separated subset of fields (names or column names).
    #[arg(long, value_delimiter = ',')]
    fields: Option<Vec<String>>,
    /// Stop after this many non-blank lines.
    #[arg(short, long)]
    limit: Option<usize>,
    /// Log and skip lines that fail to decode.
    #[arg(long)]
    skip_invalid: bool,
    /// Also write the decoded rows to this Parquet file.
    #[arg(long)]
    parquet: Option<PathBuf>,
    #[arg(long)]
    batch_size: Option<usize>,
}

impl RunArgs {
    fn apply(self, mut cfg: LoadConfig) -> LoadConfig {
        if let Some(v) = self.input {
            cfg.input = v;
        }
        if let Some(v) = self.database {
            cfg.database = v;
        }
        if let Some(v) = self.table {
            cfg.table = v;
        }
        if self.fields.is_some() {
            cfg.fields = self.fields;
        }
        if self.limit.is_some() {
            cfg.limit = self.limit;
        }
        if self.skip_invalid {
            cfg.skip_invalid = true;
        }
        if self.parquet.is_some() {
            cfg.parquet = self.parquet;
        }
        if let Some(v) = self.batch_size {
            cfg.batch_size = v;
        }
        cfg
    }
}

fn main() -> Result<()> {
    // logs go to stderr so `preview` output stays clean
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let base = match &cli.config {
        Some(path) => LoadConfig::from_yaml_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => LoadConfig::default(),
    };

    match cli.command {
        Command::Load(args) => {
            let cfg = args.apply(base);
            info!(input = %cfg.input.display(), database = %cfg.database.display(), "startup");
            let summary = natality::run(&cfg).with_context(|| {
                format!(
                    "loading {} into {}",
                    cfg.input.display(),
                    cfg.database.display()
                )
            })?;
            info!(
                rows = summary.rows_written,
                lines = summary.lines_read,
                skipped = summary.skipped,
                "all done"
            );
        }
        Command::Preview(args) => {
            let cfg = args.apply(base);
            let stdout = io::stdout();
            natality::preview(&cfg, stdout.lock())
                .with_context(|| format!("previewing {}", cfg.input.display()))?;
        }
        Command::Fields => {
            let mut out = io::stdout().lock();
            serde_json::to_writer_pretty(&mut out, catalog::FIELDS)
                .context("writing field catalog")?;
            writeln!(out)?;
        }
    }
    Ok(())
}
