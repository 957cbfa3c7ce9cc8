use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use cpi_rs::{Client, YearRange};
use cpi_rs::{classify, normalize, stats, viz};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "cpi",
    version,
    about = "Fetch & chart the CPI of a product over a range of years"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch the CPI series for one product and render it as a line chart.
    Product(ProductArgs),
}

#[derive(Args, Debug)]
struct ProductArgs {
    /// Series identifier at the data provider (e.g., CUUR0000SA0)
    product_id: String,
    /// First year of the range (inclusive)
    #[arg(short = 's', long, default_value_t = 2009)]
    startyear: i32,
    /// Last year of the range (inclusive)
    #[arg(short = 'e', long, default_value_t = 2019)]
    endyear: i32,
    /// Create the chart at the given path (.svg or .png).
    #[arg(long, default_value = "cpi.svg")]
    plot: PathBuf,
    /// Width of the plot (default 1000).
    #[arg(long, default_value_t = 1000)]
    width: u32,
    /// Height of the plot (default 600).
    #[arg(long, default_value_t = 600)]
    height: u32,
    /// Print summary statistics to stdout.
    #[arg(long, default_value_t = false)]
    stats: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Product(args) => cmd_product(args),
    }
}

/// Run the pipeline: validate range → fetch → classify → normalize → render.
///
/// Rejected ranges, non-accepted classifications and malformed payloads are
/// expected terminations: one message, no chart, normal exit. Only I/O or
/// render failures propagate as process errors.
fn cmd_product(args: ProductArgs) -> Result<()> {
    let range = match YearRange::new(args.startyear, args.endyear) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{}", e);
            return Ok(());
        }
    };

    let client = Client::default();
    let fetched = match client.fetch(&args.product_id, range) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("{}", e);
            return Ok(());
        }
    };

    let outcome = classify::classify(&fetched.payload, &args.product_id, fetched.status_code);
    if let Some(msg) = outcome.user_message() {
        eprintln!("{}", msg);
        return Ok(());
    }

    let series = match normalize::normalize(&fetched.payload.results.series) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{}", e);
            return Ok(());
        }
    };

    viz::plot_series(&series, &args.plot, args.width, args.height)?;
    eprintln!("Wrote plot to {}", args.plot.display());

    if args.stats {
        if let Some(s) = stats::summary(&series) {
            println!(
                "{}  count={} min={} max={} mean={:.2} median={:.2}",
                series.series_id.join(", "),
                s.count,
                s.min,
                s.max,
                s.mean,
                s.median
            );
        }
    }

    Ok(())
}
