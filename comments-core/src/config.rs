use {
    std::{fs::read_to_string, path::{Path, PathBuf}},
    tracing::warn,
    serde::Deserialize,
    crate::{
        data_loading::{SourceSpec, ExtractionRule},
        models::{Platform, Source},
    },
};

#[derive(Deserialize, Debug)]
pub struct Config {
    #[serde(default)]
    pub preprocess: PreprocessConfig,
    pub sources: Option<Vec<SourceConfig>>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct PreprocessConfig {
    base_path: Option<PathBuf>,
    output: Option<PathBuf>,
    candidate_columns: Option<Vec<String>>,
    #[serde(default)]
    extra_stopwords: Vec<String>,
    sample_size: Option<usize>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct SourceConfig {
    pub name: String,
    pub platform: Platform,
    pub path: PathBuf,
    pub text_column: Option<String>,
    pub id_column: Option<String>,
    pub section_header: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            preprocess: PreprocessConfig::default(),
            sources: None,
        }
    }
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            base_path: None,
            output: None,
            candidate_columns: None,
            extra_stopwords: Vec::new(),
            sample_size: None,
        }
    }
}

impl Config {
    pub fn load() -> Self {
        read_to_string("./config.toml")
            .or_else(|_| read_to_string("/config/config.toml"))
            .map_err(|err| err.to_string())
            .and_then(|v| Self::parse(&v).map_err(|err| err.to_string()))
            .unwrap_or_else(|err| {
                warn!("failed to read config: {}", err);
                Config::default()
            })
    }

    /// An explicitly requested config file has to exist and parse.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = read_to_string(path)
            .map_err(|err| anyhow::anyhow!("failed to read config {}: {}", path.display(), err))?;
        Ok(Self::parse(&content)?)
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn preprocess(&self) -> &PreprocessConfig {
        &self.preprocess
    }

    /// Configured sources in file order, or the default registry.
    pub fn sources(&self) -> Vec<SourceSpec> {
        let base_path = self.preprocess.base_path();

        match self.sources.as_ref() {
            Some(sources) => sources.iter()
                .map(|source| source.to_spec(&base_path))
                .collect(),
            None => default_sources(&base_path),
        }
    }
}

impl PreprocessConfig {
    pub fn base_path(&self) -> PathBuf {
        self.base_path.as_ref().cloned().unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn output(&self) -> PathBuf {
        self.output.as_ref()
            .cloned()
            .unwrap_or_else(|| self.base_path().join("preprocessed_comments.csv"))
    }

    pub fn candidate_columns(&self) -> Vec<String> {
        self.candidate_columns.as_ref()
            .cloned()
            .unwrap_or_else(|| vec!["comment".to_owned(), "text".to_owned()])
    }

    pub fn extra_stopwords(&self) -> &[String] {
        &self.extra_stopwords
    }

    pub fn sample_size(&self) -> usize {
        self.sample_size.unwrap_or(5)
    }
}

impl SourceConfig {
    fn to_spec(&self, base_path: &Path) -> SourceSpec {
        SourceSpec {
            source: Source::new(self.platform, self.name.clone()),
            path: base_path.join(&self.path),
            rule: ExtractionRule {
                text_column: self.text_column.clone(),
                id_column: self.id_column.clone(),
                section_header: self.section_header.clone(),
            },
        }
    }
}

/// Priority order of the scraper exports.
pub fn default_sources(base_path: &Path) -> Vec<SourceSpec> {
    let mut sources = vec![
        SourceSpec::new(
            Platform::Threads.into(),
            base_path.join("threads_comments.csv"),
            ExtractionRule::column("Comments"),
        ),
        SourceSpec::new(
            Platform::Instagram.into(),
            base_path.join("instagram-scraper").join("cleaned_instagram_comments.csv"),
            ExtractionRule::column("text").with_id_column("comment_id"),
        ),
        SourceSpec::new(
            Platform::Reddit.into(),
            base_path.join("reddit-scraper").join("cleaned_reddit_comments.csv"),
            ExtractionRule::column("comment").with_id_column("id"),
        ),
        SourceSpec::new(
            Platform::X.into(),
            base_path.join("CleanedXComments.csv"),
            ExtractionRule::column("comments").with_id_column("postId"),
        ),
    ];

    for publisher in ["abscbn", "gma", "news5"] {
        sources.push(SourceSpec::new(
            Source::new(Platform::TikTok, format!("TikTok-{}", publisher.to_uppercase())),
            base_path.join("tiktok-scraper").join(format!("{}-tiktok_comments.csv", publisher)),
            ExtractionRule::column("Comment Text").with_section_header("Comment Text"),
        ));
    }

    sources.push(SourceSpec::new(
        Platform::Facebook.into(),
        base_path.join("facebook-scraper").join("facebook_comments.csv"),
        ExtractionRule::candidates_only(),
    ));

    sources
}
