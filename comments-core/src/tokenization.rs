use {
    tracing::{debug, warn},
    tokenizers::{
        PreTokenizer,
        PreTokenizedString,
        OffsetReferential,
        OffsetType,
        SplitDelimiterBehavior,
        pre_tokenizers::split::{Split, SplitPattern},
    },
    crate::error::TokenizationError,
};

// a word may carry - ' . , between its characters (flood-control, 5,000,000, it's),
// any other non-space character stands alone
const WORD_PATTERN: &str = r#"[^\s.,!?;:'"()-]+(?:[-'.,][^\s.,!?;:'"()-]+)*|\S"#;

pub trait WordTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>, TokenizationError>;
}

/// Splits on whitespace and isolates punctuation, except inside a word.
#[derive(Debug)]
pub struct PatternWordTokenizer {
    splitter: Split,
}

#[derive(Default, Debug, Clone, Copy)]
pub struct WhitespaceTokenizer;

/// Primary tokenizer with a whitespace split behind it. Never fails.
pub struct TieredTokenizer {
    primary: Box<dyn WordTokenizer + Send + Sync>,
    fallback: WhitespaceTokenizer,
}

impl PatternWordTokenizer {
    pub fn new() -> Result<Self, TokenizationError> {
        let splitter = Split::new(
            SplitPattern::Regex(WORD_PATTERN.to_owned()),
            SplitDelimiterBehavior::Removed,
            true,
        ).map_err(|err| TokenizationError { message: err.to_string() })?;

        Ok(Self {
            splitter,
        })
    }
}

impl WordTokenizer for PatternWordTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>, TokenizationError> {
        let mut pretokenized = PreTokenizedString::from(text);
        self.splitter.pre_tokenize(&mut pretokenized)
            .map_err(|err| TokenizationError { message: err.to_string() })?;

        Ok(pretokenized.get_splits(OffsetReferential::Original, OffsetType::Char)
            .into_iter()
            .map(|(token, _, _)| token.to_owned())
            .collect())
    }
}

impl WhitespaceTokenizer {
    pub fn split(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(|token| token.to_owned()).collect()
    }
}

impl WordTokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>, TokenizationError> {
        Ok(self.split(text))
    }
}

impl TieredTokenizer {
    pub fn new(primary: Box<dyn WordTokenizer + Send + Sync>) -> Self {
        Self {
            primary,
            fallback: WhitespaceTokenizer,
        }
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        match self.primary.tokenize(text) {
            Ok(tokens) => tokens,
            Err(err) => {
                debug!("falling back to whitespace tokenization: {}", err);
                self.fallback.split(text)
            }
        }
    }
}

impl Default for TieredTokenizer {
    fn default() -> Self {
        match PatternWordTokenizer::new() {
            Ok(primary) => Self::new(Box::new(primary)),
            Err(err) => {
                warn!("word tokenizer unavailable, using whitespace only: {}", err);
                Self::new(Box::new(WhitespaceTokenizer))
            }
        }
    }
}
