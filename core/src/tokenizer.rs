use lazy_static::lazy_static;
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashSet;
use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

lazy_static! {
    // ASCII punctuation (the classic `string.punctuation` set) plus Unicode punctuation.
    static ref PUNCT: Regex = Regex::new(r"[[:punct:]\p{P}]").expect("valid regex");
    static ref STEMMER: Stemmer = Stemmer::create(Algorithm::English);
    static ref STOPWORDS: HashSet<&'static str> = {
        let words: &[&str] = &[
            "i","me","my","myself","we","our","ours","ourselves",
            "you","you're","you've","you'll","you'd","your","yours","yourself","yourselves",
            "he","him","his","himself","she","she's","her","hers","herself",
            "it","it's","its","itself","they","them","their","theirs","themselves",
            "what","which","who","whom","this","that","that'll","these","those",
            "am","is","are","was","were","be","been","being","have","has","had","having",
            "do","does","did","doing","a","an","the","and","but","if","or","because","as",
            "until","while","of","at","by","for","with","about","against","between","into",
            "through","during","before","after","above","below","to","from","up","down",
            "in","out","on","off","over","under","again","further","then","once",
            "here","there","when","where","why","how","all","any","both","each","few",
            "more","most","other","some","such","no","nor","not","only","own","same","so",
            "than","too","very","s","t","can","will","just","don","don't","should","should've",
            "now","d","ll","m","o","re","ve","y","ain","aren","aren't","couldn","couldn't",
            "didn","didn't","doesn","doesn't","hadn","hadn't","hasn","hasn't","haven","haven't",
            "isn","isn't","ma","mightn","mightn't","mustn","mustn't","needn","needn't",
            "shan","shan't","shouldn","shouldn't","wasn","wasn't","weren","weren't",
            "won","won't","wouldn","wouldn't"
        ];
        words.iter().copied().collect()
    };
}

pub fn is_stopword(token: &str) -> bool { STOPWORDS.contains(token) }

// Trailing clitics split off the way Treebank-style word tokenizers do.
const CLITICS: &[&str] = &["'s", "n't"];

/// Return the word without a trailing `'s` or `n't`, if one is present.
fn strip_clitic(word: &str) -> Option<&str> {
    CLITICS
        .iter()
        .find_map(|c| word.strip_suffix(c))
        .filter(|base| !base.is_empty())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenizerConfig {
    /// Reduce every surviving word to its English Snowball stem.
    pub stem: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer {
    config: TokenizerConfig,
}

impl Tokenizer {
    pub fn new(config: TokenizerConfig) -> Self { Self { config } }

    /// Split text on Unicode word boundaries, lowercase, drop stopwords, then strip punctuation.
    ///
    /// Curly apostrophes are folded to `'` first. Stopwords are matched before punctuation is
    /// removed, so `"don't"` is dropped while `"dont"` survives. A trailing `'s` or `n't` is split
    /// off and discarded, so `"Rust's"` yields `"rust"`. Tokens left empty by punctuation
    /// stripping are discarded.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let normalized = text.nfkc().collect::<String>();
        let mut tokens = Vec::new();
        for segment in normalized.split_word_bounds() {
            if segment.chars().all(char::is_whitespace) { continue; }
            let lowered = segment.to_lowercase().replace('\u{2019}', "'");
            if is_stopword(&lowered) { continue; }
            let base = strip_clitic(&lowered).unwrap_or(lowered.as_str());
            if is_stopword(base) { continue; }
            let word = PUNCT.replace_all(base, "");
            if word.is_empty() { continue; }
            let word = if self.config.stem {
                STEMMER.stem(&word).into_owned()
            } else {
                word.into_owned()
            };
            tokens.push(word);
        }
        tokens
    }
}

/// Tokenize with the default configuration (no stemming).
pub fn tokenize(text: &str) -> Vec<String> {
    Tokenizer::default().tokenize(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_punctuation_and_stopwords() {
        assert_eq!(tokenize("The Quick, Fox!"), vec!["quick", "fox"]);
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  \n\t ").is_empty());
        assert!(tokenize("?! ... ,").is_empty());
    }

    #[test]
    fn contractions_are_checked_before_stripping() {
        assert_eq!(tokenize("Don't panic"), vec!["panic"]);
    }

    #[test]
    fn possessives_and_contractions_split_off() {
        assert_eq!(tokenize("Rust's"), vec!["rust"]);
        assert_eq!(
            tokenize("Rust's borrow checker. Python\u{2019}s GIL. Don\u{2019}t panic. can't"),
            vec!["rust", "borrow", "checker", "python", "gil", "panic", "ca"]
        );
    }

    #[test]
    fn stemming_is_opt_in() {
        let stemming = Tokenizer::new(TokenizerConfig { stem: true });
        assert_eq!(stemming.tokenize("Running runners"), vec!["run", "runner"]);
        assert_eq!(tokenize("Running runners"), vec!["running", "runners"]);
    }
}
