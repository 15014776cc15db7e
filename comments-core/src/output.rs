use {
    std::{fs::File, io::Write, path::Path},
    tracing::info,
    crate::{
        error::OutputError,
        models::CleanedComment,
    },
};

pub const OUTPUT_COLUMNS: [&str; 7] = [
    "original_id",
    "source",
    "comment",
    "cleaned_comment",
    "original_length",
    "cleaned_length",
    "word_count",
];

pub fn save_cleaned_comments(path: &Path, comments: &[CleanedComment]) -> Result<(), OutputError> {
    let file = File::create(path).map_err(|cause| OutputError::Io {
        path: path.to_owned(),
        cause,
    })?;

    write_cleaned_comments(file, comments)?;
    info!("preprocessed comments saved to: {}", path.display());

    Ok(())
}

/// Header is written even when there are no rows.
pub fn write_cleaned_comments<W: Write>(writer: W, comments: &[CleanedComment]) -> Result<(), OutputError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    writer.write_record(OUTPUT_COLUMNS)?;
    for comment in comments {
        writer.serialize(comment.row())?;
    }
    writer.flush().map_err(csv::Error::from)?;

    Ok(())
}
