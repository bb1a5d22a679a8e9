mod input;
mod logging;
mod model;
mod pipeline;
mod report;
mod stats;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::error;
use tracing::level_filters::LevelFilter;

use crate::input::load_ratings;
use crate::model::PlotStyle;
use crate::pipeline::{CategoryOptions, PipelineError, run_category};
use crate::report::text::render_summary_text;

const DEFAULT_INPUT: &str = "./results_reports.csv";
const DEFAULT_CATEGORIES: [&str; 2] = ["out_of_scope", "faq"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StyleArg {
    /// 30x10 in at 300 dpi, Response Selector labelled only for faq.
    Fixed,
    /// 18x6 in at 200 dpi, every system labelled.
    Standard,
}

/// Box plots with pairwise t-test brackets for QA system human ratings.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Ratings CSV (optionally .gz)
    #[arg(long, value_name = "FILE", default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Directory for the PNG (and JSON) outputs
    #[arg(long, value_name = "DIR", default_value = ".")]
    out: PathBuf,

    /// Intent category to plot; repeat for several [default: out_of_scope, faq]
    #[arg(long = "category", value_name = "NAME")]
    categories: Vec<String>,

    /// Figure preset
    #[arg(long, value_enum, default_value_t = StyleArg::Fixed)]
    style: StyleArg,

    /// Also write {category}_pvalues*.json next to each image
    #[arg(long)]
    summary_json: bool,

    /// Debug logging
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Warnings and errors only; no summary on stdout
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::DEBUG
        } else if self.quiet {
            LevelFilter::WARN
        } else {
            LevelFilter::INFO
        }
    }

    fn categories(&self) -> Vec<String> {
        if self.categories.is_empty() {
            DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
        } else {
            self.categories.clone()
        }
    }

    fn plot_style(&self) -> PlotStyle {
        match self.style {
            StyleArg::Fixed => PlotStyle::fixed_v1(),
            StyleArg::Standard => PlotStyle::standard_v1(),
        }
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.log_level());
    if let Err(err) = run(&cli) {
        error!("{err}");
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), PipelineError> {
    let table = load_ratings(&cli.input)?;
    let style = cli.plot_style();
    let options = CategoryOptions {
        summary_json: cli.summary_json,
    };

    for category in cli.categories() {
        let summary = run_category(&table, &category, &style, &cli.out, options)?;
        if !cli.quiet {
            println!("{}", render_summary_text(&summary));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
