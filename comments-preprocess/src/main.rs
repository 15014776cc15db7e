use {
    std::path::PathBuf,
    clap::Parser,
    tracing::info,
    comments_core::config::Config,
    crate::{
        preprocessing::run_preprocessing_step,
        utils::init_logging,
    },
};

mod preprocessing;
mod summary;
mod utils;

/// Cleans scraped social media comments into one dataset
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Config file (default: ./config.toml, then /config/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output csv, overrides preprocess.output from the config
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let args = Args::parse();

    info!("social comments text preprocessor");

    let config = match args.config {
        Some(path) => Config::load_from(&path)?,
        None => Config::load(),
    };

    run_preprocessing_step(&config, args.output)?;

    Ok(())
}
