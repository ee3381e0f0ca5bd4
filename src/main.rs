use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use autochart::{load_tables, AutochartConfig, ChartPipeline, PipelineReport, ReadOptions, TableSource};

/// Draw bar charts from the first chartable table of a web page or file
#[derive(Parser, Debug)]
#[command(name = "autochart")]
#[command(author, version, about)]
struct Cli {
    /// Page URL, HTML file or CSV file (prompted for when omitted)
    source: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory the charts are written to (overrides config)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Number of header rows in each table
    #[arg(long, default_value_t = 1)]
    header_rows: usize,

    /// Maximum bars per chart (overrides config)
    #[arg(long)]
    max_rows: Option<usize>,
}

fn main() -> ExitCode {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let source = match cli.source.clone() {
        Some(source) => source,
        None => match prompt_source() {
            Ok(source) => source,
            Err(e) => {
                eprintln!("Error reading input: {}", e);
                return ExitCode::FAILURE;
            }
        },
    };
    let source = TableSource::parse(&source);

    let options = ReadOptions {
        header_rows: cli.header_rows,
    };
    let tables = match load_tables(&source, &options) {
        Ok(tables) => tables,
        Err(e) => {
            println!("Error reading tables from {}: {}", source, e);
            return ExitCode::FAILURE;
        }
    };

    match ChartPipeline::new(&config).run(tables) {
        PipelineReport::NoSuitableColumns => {
            println!("No suitable columns found for plotting in the tables.");
        }
        PipelineReport::Rendered { charts, .. } => {
            for chart in charts {
                match chart.result {
                    Ok(path) => println!("Saved plot to {}", path.display()),
                    Err(e) => println!("Failed to plot {}: {}", chart.value_column, e),
                }
            }
        }
    }

    ExitCode::SUCCESS
}

fn load_config(cli: &Cli) -> autochart::Result<AutochartConfig> {
    let mut config = match &cli.config {
        Some(path) => AutochartConfig::from_toml_file(path)?,
        None => AutochartConfig::default(),
    };

    if let Some(dir) = &cli.output_dir {
        config.chart.output_dir = dir.clone();
    }
    if let Some(max_rows) = cli.max_rows {
        config.cleaner.max_rows = max_rows;
    }
    config.validate()?;
    Ok(config)
}

fn prompt_source() -> io::Result<String> {
    print!("Enter the Wikipedia page URL: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
