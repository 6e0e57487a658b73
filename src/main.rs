use std::path::PathBuf;

use clap::Parser;

use numscrape::filter::Bounds;
use numscrape::persist::format_value;
use numscrape::pipeline::{self, ScrapeOptions};
use numscrape::settings;

#[derive(Parser)]
#[command(name = "numscrape", about = "Extract numeric values from a web page")]
struct Cli {
    /// Page URL to scrape
    url: String,
    /// Drop values below this bound (inclusive)
    #[arg(long)]
    min: Option<f64>,
    /// Drop values above this bound (inclusive)
    #[arg(long)]
    max: Option<f64>,
    /// Write the filtered values to a file, one per line
    #[arg(short, long)]
    save: bool,
    /// Destination file (defaults to the configured output, numbers.txt)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    let settings = settings::load();

    let options = ScrapeOptions {
        bounds: Bounds::new(cli.min, cli.max),
        save_to: cli
            .save
            .then(|| cli.out.unwrap_or_else(|| settings.output.clone())),
    };

    let Some(values) = pipeline::scrape_numbers(&cli.url, &options, &settings) else {
        anyhow::bail!("no result for {}", cli.url);
    };

    println!("Filtered numbers ({}):", values.len());
    for value in &values {
        println!("{}", format_value(*value));
    }
    Ok(())
}
