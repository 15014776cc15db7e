use std::collections::HashSet;

// nltk english list
pub const ENGLISH_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're",
    "you've", "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he",
    "him", "his", "himself", "she", "she's", "her", "hers", "herself", "it", "it's",
    "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
    "who", "whom", "this", "that", "that'll", "these", "those", "am", "is", "are",
    "was", "were", "be", "been", "being", "have", "has", "had", "having", "do",
    "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or", "because",
    "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below",
    "to", "from", "up", "down", "in", "out", "on", "off", "over", "under", "again",
    "further", "then", "once", "here", "there", "when", "where", "why", "how",
    "all", "any", "both", "each", "few", "more", "most", "other", "some", "such",
    "no", "nor", "not", "only", "own", "same", "so", "than", "too", "very", "s",
    "t", "can", "will", "just", "don", "don't", "should", "should've", "now", "d",
    "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't",
    "didn", "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't",
    "haven", "haven't", "isn", "isn't", "ma", "mightn", "mightn't", "mustn",
    "mustn't", "needn", "needn't", "shan", "shan't", "shouldn", "shouldn't", "wasn",
    "wasn't", "weren", "weren't", "won", "won't", "wouldn", "wouldn't",
];

pub const FILIPINO_STOPWORDS: &[&str] = &[
    "ang", "ng", "sa", "na", "at", "ay", "si", "ni", "mga", "para", "kung", "nang",
    "yan", "ito", "din", "daw", "raw", "rin", "lang", "lamang", "man", "po", "opo",
    "kasi", "pero", "dahil", "kaya", "habang", "kapag", "saan", "ano", "sino", "bakit",
    "paano", "kelan", "nasaan", "alin", "ilan", "gaano", "sobra", "masyado", "talaga",
    "naman", "pala", "nga", "yung", "yun", "dun", "dito", "diyan", "doon", "nung",
    "noong", "may", "meron", "wala", "walang", "hindi", "di", "huwag", "wag",
    "ba", "eh", "ah", "oh", "uy", "hay", "sus", "tsk",
];

/// Read-only union of the stopword lists. Built once and shared by reference.
#[derive(Debug, Clone)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    pub fn new() -> Self {
        Self::with_extra(std::iter::empty::<&str>())
    }

    /// Extra words are lowercased, since they are matched against lowercased tokens.
    pub fn with_extra<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = ENGLISH_STOPWORDS.iter()
            .chain(FILIPINO_STOPWORDS.iter())
            .map(|word| word.to_string())
            .chain(extra.into_iter().map(|word| word.as_ref().trim().to_lowercase()))
            .filter(|word| !word.is_empty())
            .collect();

        Self {
            words,
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopwordSet {
    fn default() -> Self {
        Self::new()
    }
}
