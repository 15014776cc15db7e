use {
    tracing::info,
    comments_core::models::CleanedComment,
};

const SAMPLE_PREVIEW_CHARS: usize = 100;

#[derive(Debug, PartialEq)]
pub struct Summary {
    pub total: usize,
    pub by_source: Vec<(String, usize)>,
    pub average_words: f64,
    pub median_words: f64,
    pub max_words: usize,
    pub min_words: usize,
}

impl Summary {
    pub fn collect(comments: &[CleanedComment]) -> Option<Self> {
        if comments.is_empty() {
            return None;
        }

        let mut by_source: Vec<(String, usize)> = Vec::new();
        for comment in comments {
            match by_source.iter_mut().find(|(name, _)| name.as_str() == comment.source.name()) {
                Some((_, count)) => *count += 1,
                None => by_source.push((comment.source.name().to_owned(), 1)),
            }
        }
        // stable, so ties stay in load order
        by_source.sort_by(|a, b| b.1.cmp(&a.1));

        let mut word_counts: Vec<usize> = comments.iter().map(|comment| comment.word_count).collect();
        word_counts.sort_unstable();

        let total = comments.len();
        let middle = total / 2;
        let median_words = if total % 2 == 0 {
            (word_counts[middle - 1] + word_counts[middle]) as f64 / 2.0
        } else {
            word_counts[middle] as f64
        };

        Some(Self {
            total,
            by_source,
            average_words: word_counts.iter().sum::<usize>() as f64 / total as f64,
            median_words,
            max_words: word_counts[total - 1],
            min_words: word_counts[0],
        })
    }

    pub fn log(&self) {
        info!("total comments: {}", self.total);
        for (source, count) in &self.by_source {
            info!("comments from {}: {}", source, count);
        }
        info!("average word count: {:.2}", self.average_words);
        info!("median word count: {:.2}", self.median_words);
        info!("max word count: {}", self.max_words);
        info!("min word count: {}", self.min_words);
    }
}

pub fn log_samples(comments: &[CleanedComment], sample_size: usize) {
    for comment in comments.iter().take(sample_size) {
        info!(
            source = comment.source.name(),
            "original: {} | cleaned: {}",
            preview(&comment.text),
            preview(&comment.cleaned_text)
        );
    }
}

fn preview(text: &str) -> String {
    if text.chars().count() <= SAMPLE_PREVIEW_CHARS {
        return text.to_owned();
    }

    let mut preview: String = text.chars().take(SAMPLE_PREVIEW_CHARS).collect();
    preview.push_str("...");
    preview
}
