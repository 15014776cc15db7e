use {
    std::fmt,
    serde::{Serialize, Deserialize},
};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Threads,
    Instagram,
    Reddit,
    X,
    TikTok,
    Facebook,
}

/// Where a comment came from. TikTok exports are split per publisher, so the
/// display name is carried separately from the platform.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Source {
    platform: Platform,
    name: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawComment {
    pub text: String,
    pub source: Source,
    pub original_id: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CleanedComment {
    pub text: String,
    pub source: Source,
    pub original_id: String,
    pub cleaned_text: String,
    pub original_length: usize,
    pub cleaned_length: usize,
    pub word_count: usize,
}

// one row of the output table, column order matters
#[derive(Serialize, Debug)]
pub struct CleanedCommentRow<'a> {
    pub original_id: &'a str,
    pub source: &'a str,
    pub comment: &'a str,
    pub cleaned_comment: &'a str,
    pub original_length: usize,
    pub cleaned_length: usize,
    pub word_count: usize,
}

impl Source {
    pub fn new(platform: Platform, name: impl Into<String>) -> Self {
        Self {
            platform,
            name: name.into(),
        }
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<Platform> for Source {
    fn from(platform: Platform) -> Self {
        let name = match platform {
            Platform::Threads => "Threads",
            Platform::Instagram => "Instagram",
            Platform::Reddit => "Reddit",
            Platform::X => "X",
            Platform::TikTok => "TikTok",
            Platform::Facebook => "Facebook",
        };

        Self::new(platform, name)
    }
}

impl RawComment {
    pub fn new(text: impl Into<String>, source: Source, original_id: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source,
            original_id: original_id.into(),
        }
    }

    /// `(source, original_id)` is the only identity that holds across platforms.
    pub fn key(&self) -> (&Source, &str) {
        (&self.source, &self.original_id)
    }

    pub fn cleaned(self, cleaned_text: String) -> CleanedComment {
        let original_length = self.text.chars().count();
        let cleaned_length = cleaned_text.chars().count();
        let word_count = cleaned_text.split(' ').filter(|token| !token.is_empty()).count();

        CleanedComment {
            text: self.text,
            source: self.source,
            original_id: self.original_id,
            cleaned_text,
            original_length,
            cleaned_length,
            word_count,
        }
    }
}

impl CleanedComment {
    pub fn key(&self) -> (&Source, &str) {
        (&self.source, &self.original_id)
    }

    pub fn is_empty(&self) -> bool {
        self.cleaned_text.is_empty()
    }

    pub fn row(&self) -> CleanedCommentRow<'_> {
        CleanedCommentRow {
            original_id: &self.original_id,
            source: self.source.name(),
            comment: &self.text,
            cleaned_comment: &self.cleaned_text,
            original_length: self.original_length,
            cleaned_length: self.cleaned_length,
            word_count: self.word_count,
        }
    }
}
