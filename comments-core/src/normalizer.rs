use {
    std::sync::Arc,
    once_cell::sync::Lazy,
    regex::Regex,
    crate::{
        models::{RawComment, CleanedComment},
        stopwords::StopwordSet,
        tokenization::TieredTokenizer,
    },
};

static URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i:https?://)[a-zA-Z0-9!$-_]*|(?i:www\.)[a-zA-Z0-9!$-_]+").expect("url regex")
});
static HTML_ENTITY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"&(?:[a-zA-Z]+|#[0-9]+|#[xX][0-9a-fA-F]+);").expect("html entity regex")
});
static HTML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").expect("html tag regex"));
static HASHTAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"#(\w+)").expect("hashtag regex"));
static MENTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"@\w+").expect("mention regex"));
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace regex"));
static ELLIPSIS_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.{3,}").expect("ellipsis regex"));
static EXCLAMATION_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"!{3,}").expect("exclamation regex"));
static QUESTION_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\?{3,}").expect("question regex"));
static NOT_WHITELISTED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[^\w\s.,!?;:'"()-]"#).expect("whitelist regex")
});
static EDGE_NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\W+|\W+$").expect("edge regex"));

/// Turns raw comment text into a lowercase, stopword free string of words.
///
/// Stages run in a fixed order and each one assumes the previous ones ran:
/// urls, html, hashtags, mentions, whitespace, punctuation runs, the character
/// whitelist, lowercasing, then tokenization and token filtering. The result
/// depends only on the input text and the stopword set.
pub struct TextNormalizer {
    stopwords: Arc<StopwordSet>,
    tokenizer: TieredTokenizer,
}

impl TextNormalizer {
    pub fn new(stopwords: Arc<StopwordSet>) -> Self {
        Self::with_tokenizer(stopwords, TieredTokenizer::default())
    }

    pub fn with_tokenizer(stopwords: Arc<StopwordSet>, tokenizer: TieredTokenizer) -> Self {
        Self {
            stopwords,
            tokenizer,
        }
    }

    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    pub fn clean(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let prepared = prepare(text);

        let tokens: Vec<String> = self.tokenizer.tokenize(&prepared)
            .into_iter()
            .filter(|token| self.is_signal(token))
            .map(|token| EDGE_NON_WORD.replace_all(&token, "").into_owned())
            .filter(|token| self.is_signal(token))
            .collect();

        WHITESPACE.replace_all(&tokens.join(" "), " ").trim().to_owned()
    }

    pub fn normalize(&self, comment: RawComment) -> CleanedComment {
        let cleaned_text = self.clean(&comment.text);
        comment.cleaned(cleaned_text)
    }

    /// Keeps input order and drops comments with nothing left after cleaning.
    pub fn normalize_all(&self, comments: Vec<RawComment>) -> Vec<CleanedComment> {
        comments.into_iter()
            .map(|comment| self.normalize(comment))
            .filter(|comment| !comment.is_empty())
            .collect()
    }

    fn is_signal(&self, token: &str) -> bool {
        !self.stopwords.contains(token)
            && token.chars().count() > 1
            && !token.chars().all(char::is_numeric)
            && !token.chars().all(|c| c.is_ascii_punctuation())
    }
}

/// Everything before tokenization.
pub fn prepare(text: &str) -> String {
    let text = URL.replace_all(text, "");
    let text = HTML_ENTITY.replace_all(&text, " ");
    let text = HTML_TAG.replace_all(&text, " ");
    let text = HASHTAG.replace_all(&text, "${1}");
    let text = MENTION.replace_all(&text, "");
    // unwrapped hashtags can join a url back together
    let text = URL.replace_all(&text, "");
    let text = WHITESPACE.replace_all(&text, " ");
    let text = ELLIPSIS_RUN.replace_all(&text, "...");
    let text = EXCLAMATION_RUN.replace_all(&text, "!!!");
    let text = QUESTION_RUN.replace_all(&text, "???");
    let text = NOT_WHITELISTED.replace_all(&text, " ");

    text.to_lowercase()
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{
            error::TokenizationError,
            models::Platform,
            tokenization::WordTokenizer,
        },
    };

    fn normalizer() -> TextNormalizer {
        TextNormalizer::new(Arc::new(StopwordSet::new()))
    }

    const SAMPLES: &[&str] = &[
        "Check this out!!! http://x.co #FloodPH @juan",
        "Nasaan na ang pondo?????? https://www.rappler.com/nation/flood-control?id=42 grabe",
        "Visit www.gov.ph/flood&amp;control for the <b>REAL</b> numbers: 5,000,000,000",
        "Sana all may FLOOD CONTROL... 😡😡😡 #BahaPaMore #NasaanAngPondo",
        "@dpwh_ph ANO NA???? wala pa rin &#128545; &nbsp; kahit 2025 na",
        "It's   the\n\nsame\tstory    every (year) - \"corruption\"",
        "\u{4E2D}\u{6587} mixed with English words",
    ];

    #[test]
    fn empty_input_is_empty_output() {
        assert_eq!(normalizer().clean(""), "");
    }

    #[test]
    fn example_with_url_hashtag_and_mention() {
        let cleaned = normalizer().clean("Check this out!!! http://x.co #FloodPH @juan");

        assert_eq!(cleaned, "check floodph");
    }

    #[test]
    fn five_exclamations_become_three_before_tokenization() {
        assert_eq!(prepare("grabe!!!!! talaga"), "grabe!!! talaga");
        assert_eq!(prepare("what?????"), "what???");
        assert_eq!(prepare("hmm......."), "hmm...");
        assert_eq!(prepare("ok!!"), "ok!!");
    }

    #[test]
    fn html_is_stripped() {
        assert_eq!(prepare("a&amp;b <i>c</i> &#8220;d&#x201D;"), "a b c d ");
    }

    #[test]
    fn hashtags_keep_their_word_and_mentions_vanish() {
        assert_eq!(prepare("#Baha sa @mmda"), "baha sa ");
    }

    #[test]
    fn emoji_and_symbols_are_replaced_outside_the_whitelist() {
        assert_eq!(prepare("wow 😡 ~ok~ (yes) - \"no\""), "wow    ok  (yes) - \"no\"");
    }

    #[test]
    fn urls_never_survive() {
        let normalizer = normalizer();

        for sample in SAMPLES {
            let cleaned = normalizer.clean(sample);
            assert!(!cleaned.contains("http"), "{} -> {}", sample, cleaned);
            assert!(!cleaned.contains("www."), "{} -> {}", sample, cleaned);
        }

        assert_eq!(normalizer.clean("HTTPS://EXAMPLE.COM/Flood dams"), "dams");
        assert_eq!(normalizer.clean("see www.example.org please"), "see please");
        assert_eq!(normalizer.clean("htt#p://x.co yes"), "yes");
    }

    #[test]
    fn output_has_no_stopwords_and_is_lowercase() {
        let normalizer = normalizer();

        for sample in SAMPLES {
            let cleaned = normalizer.clean(sample);
            assert_eq!(cleaned, cleaned.to_lowercase());
            for token in cleaned.split(' ') {
                assert!(!normalizer.stopwords().contains(token), "{} leaked from {}", token, sample);
            }
        }
    }

    #[test]
    fn stopwords_hidden_behind_punctuation_are_dropped() {
        assert_eq!(normalizer().clean("(the) 'naman' budget"), "budget");
    }

    #[test]
    fn short_numeric_and_punctuation_tokens_are_dropped() {
        assert_eq!(normalizer().clean("x 2025 ... !!! ;; budget 5b"), "budget 5b");
    }

    #[test]
    fn cleaning_cleaned_text_is_a_fixed_point() {
        let normalizer = normalizer();

        for sample in SAMPLES {
            let once = normalizer.clean(sample);
            if once.is_empty() {
                continue;
            }
            assert_eq!(normalizer.clean(&once), once, "not stable for {}", sample);
        }
    }

    #[test]
    fn comment_made_only_of_noise_cleans_to_empty() {
        assert_eq!(normalizer().clean("@juan http://x.co 😡😡 !!! the"), "");
    }

    #[test]
    fn cleaned_text_can_be_longer_than_original() {
        // lowercase dotted capital I expands to two chars
        let comment = normalizer().normalize(RawComment::new("\u{130}stanbul floods", Platform::X.into(), "1"));

        assert_eq!(comment.cleaned_text, "i\u{307}stanbul floods");
        assert_eq!(comment.original_length, 15);
        assert_eq!(comment.cleaned_length, 16);
    }

    #[test]
    fn normalize_all_drops_empty_and_keeps_order() {
        let comments = vec![
            RawComment::new("Flood control funds", Platform::Reddit.into(), "r1"),
            RawComment::new("the", Platform::Reddit.into(), "r2"),
            RawComment::new("Ghost projects everywhere", Platform::X.into(), "x1"),
        ];

        let cleaned = normalizer().normalize_all(comments);

        let ids: Vec<&str> = cleaned.iter().map(|comment| comment.original_id.as_str()).collect();
        assert_eq!(ids, vec!["r1", "x1"]);
        assert_eq!(cleaned[0].cleaned_text, "flood control funds");
        assert_eq!(cleaned[0].word_count, 3);
    }

    #[test]
    fn tokenizer_failure_is_not_an_error() {
        struct Broken;

        impl WordTokenizer for Broken {
            fn tokenize(&self, _text: &str) -> Result<Vec<String>, TokenizationError> {
                Err(TokenizationError { message: "broken".to_owned() })
            }
        }

        let normalizer = TextNormalizer::with_tokenizer(
            Arc::new(StopwordSet::new()),
            TieredTokenizer::new(Box::new(Broken)),
        );

        assert_eq!(normalizer.clean("Baha ang (pondo)?"), "baha pondo");
    }

    #[test]
    fn compound_words_and_amounts_survive_cleaning() {
        let cleaned = normalizer().clean("Flood-control projects worth 5,000,000,000 pesos, P5.5B via e-mail");

        assert_eq!(cleaned, "flood-control projects worth 5,000,000,000 pesos p5.5b via e-mail");
        assert_eq!(normalizer().clean(&cleaned), cleaned);
    }
}
