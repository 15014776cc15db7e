use {
    std::{path::PathBuf, sync::Arc},
    anyhow::Context,
    tracing::{info, warn},
    indicatif::{ProgressBar, ProgressStyle},
    comments_core::{
        config::Config,
        data_loading::SourceLoader,
        models::CleanedComment,
        normalizer::TextNormalizer,
        output::save_cleaned_comments,
        stopwords::StopwordSet,
    },
    crate::summary::{Summary, log_samples},
};

pub fn run_preprocessing_step(config: &Config, output: Option<PathBuf>) -> anyhow::Result<()> {
    info!("running preprocessing step");

    let stopwords = Arc::new(StopwordSet::with_extra(config.preprocess().extra_stopwords()));
    info!("using {} stopwords", stopwords.len());
    let normalizer = TextNormalizer::new(stopwords);

    let loader = SourceLoader::new(&config.preprocess().candidate_columns());
    let loaded = loader.load_all(&config.sources());

    if loaded.is_empty() {
        warn!("no comments extracted from any source, nothing to write");
        return Ok(());
    }

    let total = loaded.comments.len();

    let pb = ProgressBar::new(total as u64);
    pb.set_style(ProgressStyle::with_template("preprocessing comments: {wide_bar} {pos}/{len} [{per_sec}]")?);

    let cleaned: Vec<CleanedComment> = loaded.comments.into_iter()
        .map(|comment| normalizer.normalize(comment))
        .inspect(|_| pb.inc(1))
        .filter(|comment| !comment.is_empty())
        .collect();

    pb.finish();

    info!("removed {} empty comments after cleaning", total - cleaned.len());
    info!("final dataset: {} cleaned comments", cleaned.len());

    let output = output.unwrap_or_else(|| config.preprocess().output());
    save_cleaned_comments(&output, &cleaned)
        .with_context(|| format!("failed to save preprocessed comments to {}", output.display()))?;

    if let Some(summary) = Summary::collect(&cleaned) {
        summary.log();
    }
    log_samples(&cleaned, config.preprocess().sample_size());

    Ok(())
}
