use {
    std::{fs::File, io::Read, path::PathBuf},
    tracing::{info, warn},
    csv::StringRecord,
    crate::{
        error::LoadError,
        models::{RawComment, Source},
    },
};

/// How comments are found in one platform's export.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtractionRule {
    pub text_column: Option<String>,
    pub id_column: Option<String>,
    // exports with a metadata preamble repeat the real header further down
    pub section_header: Option<String>,
}

#[derive(Clone, Debug)]
pub struct SourceSpec {
    pub source: Source,
    pub path: PathBuf,
    pub rule: ExtractionRule,
}

pub struct SourceLoader {
    candidates: Vec<String>,
}

#[derive(Debug, Default)]
pub struct LoadedComments {
    pub comments: Vec<RawComment>,
    pub extracted: Vec<(Source, usize)>,
    pub failures: Vec<LoadError>,
}

impl ExtractionRule {
    pub fn column(name: &str) -> Self {
        Self {
            text_column: Some(name.to_owned()),
            ..Self::default()
        }
    }

    pub fn candidates_only() -> Self {
        Self::default()
    }

    pub fn with_id_column(mut self, name: &str) -> Self {
        self.id_column = Some(name.to_owned());
        self
    }

    pub fn with_section_header(mut self, cell: &str) -> Self {
        self.section_header = Some(cell.to_owned());
        self
    }
}

impl SourceSpec {
    pub fn new(source: Source, path: PathBuf, rule: ExtractionRule) -> Self {
        Self {
            source,
            path,
            rule,
        }
    }
}

impl SourceLoader {
    pub fn new(candidates: &[String]) -> Self {
        Self {
            candidates: candidates.iter().map(|candidate| candidate.to_lowercase()).collect(),
        }
    }

    /// Loads every source in order. A source that fails is skipped, never the batch.
    pub fn load_all(&self, sources: &[SourceSpec]) -> LoadedComments {
        let mut loaded = LoadedComments::default();

        for spec in sources {
            info!("loading {} from {}", spec.source, spec.path.display());

            let result = File::open(&spec.path)
                .map_err(|cause| LoadError::SourceUnavailable {
                    source_name: spec.source.name().to_owned(),
                    path: spec.path.clone(),
                    cause,
                })
                .and_then(|file| self.load(&spec.source, &spec.rule, file));

            loaded.record(&spec.source, result);
        }

        loaded.log_total();
        loaded
    }

    /// Same as `load_all`, for tables that are already open.
    pub fn load_tables<R: Read>(&self, tables: impl IntoIterator<Item = (Source, ExtractionRule, R)>) -> LoadedComments {
        let mut loaded = LoadedComments::default();

        for (source, rule, reader) in tables {
            let result = self.load(&source, &rule, reader);
            loaded.record(&source, result);
        }

        loaded.log_total();
        loaded
    }

    pub fn load<R: Read>(&self, source: &Source, rule: &ExtractionRule, reader: R) -> Result<Vec<RawComment>, LoadError> {
        let rows = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader)
            .into_records()
            .collect::<Result<Vec<StringRecord>, _>>()
            .map_err(|cause| LoadError::Malformed {
                source_name: source.name().to_owned(),
                cause,
            })?;

        if rows.is_empty() {
            info!("{} is empty, skipping", source);
            return Ok(Vec::new());
        }

        let header_index = rule.section_header.as_ref()
            .and_then(|sentinel| rows.iter().position(|row| row.iter().any(|cell| cell.trim() == sentinel)))
            .unwrap_or(0);
        let header = &rows[header_index];

        let text_index = self.resolve_text_column(header, rule)
            .ok_or_else(|| LoadError::SchemaMismatch {
                source_name: source.name().to_owned(),
                columns: header.iter().map(|column| column.to_owned()).collect(),
            })?;
        let id_index = rule.id_column.as_ref()
            .and_then(|name| header.iter().position(|column| column == name));

        let mut comments = Vec::new();

        for (row_index, row) in rows[header_index + 1..].iter().enumerate() {
            let text = match row.get(text_index) {
                Some(text) if !text.trim().is_empty() => text,
                _ => continue,
            };

            let original_id = id_index
                .and_then(|index| row.get(index))
                .map(|id| id.trim())
                .filter(|id| !id.is_empty())
                .map(|id| id.to_owned())
                .unwrap_or_else(|| format!("{}_{}", source.name(), row_index));

            comments.push(RawComment::new(text, source.clone(), original_id));
        }

        Ok(comments)
    }

    fn resolve_text_column(&self, header: &StringRecord, rule: &ExtractionRule) -> Option<usize> {
        rule.text_column.as_ref()
            .and_then(|name| header.iter().position(|column| column == name))
            .or_else(|| header.iter().position(|column| {
                let column = column.to_lowercase();
                self.candidates.iter().any(|candidate| column.contains(candidate.as_str()))
            }))
    }
}

impl LoadedComments {
    fn record(&mut self, source: &Source, result: Result<Vec<RawComment>, LoadError>) {
        match result {
            Ok(mut comments) => {
                info!("extracted {} comments from {}", comments.len(), source);
                self.extracted.push((source.clone(), comments.len()));
                self.comments.append(&mut comments);
            },
            Err(err) => {
                warn!(kind = err.kind(), "skipping {}: {}", source, err);
                self.extracted.push((source.clone(), 0));
                self.failures.push(err);
            }
        }
    }

    fn log_total(&self) {
        info!("total comments extracted: {}", self.comments.len());
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }
}
