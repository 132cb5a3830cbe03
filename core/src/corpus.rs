use anyhow::{Context, Result};
use lazy_static::lazy_static;
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;
use unicode_segmentation::UnicodeSegmentation;
use walkdir::WalkDir;

/// File name to raw file contents.
pub type Corpus = BTreeMap<String, String>;

lazy_static! {
    // Compared lowercased, without the final period.
    static ref ABBREVIATIONS: HashSet<&'static str> = {
        let words: &[&str] = &[
            "mr","mrs","ms","dr","prof","sr","jr","st","mt","vs","gen","col","lt","sgt","capt",
            "rev","hon","gov","sen","rep","inc","ltd","co","corp","dept","approx","fig",
            "e.g","i.e","cf","u.s","u.k","a.m","p.m"
        ];
        words.iter().copied().collect()
    };
}

/// Read every `.txt` file directly inside `dir`. Any unreadable entry fails the whole load.
pub fn load_files<P: AsRef<Path>>(dir: P) -> Result<Corpus> {
    let dir = dir.as_ref();
    let mut corpus = Corpus::new();
    let walker = WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name();
    for entry in walker {
        let entry = entry.with_context(|| format!("reading corpus directory {}", dir.display()))?;
        let p = entry.path();
        if !entry.file_type().is_file() { continue; }
        if p.extension().and_then(|s| s.to_str()) != Some("txt") { continue; }
        let text = fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))?;
        corpus.insert(entry.file_name().to_string_lossy().into_owned(), text);
    }
    if corpus.is_empty() {
        // WalkDir yields nothing for a plain file with min_depth(1).
        if !dir.is_dir() {
            anyhow::bail!("{} is not a directory", dir.display());
        }
        tracing::warn!(dir = %dir.display(), "corpus directory has no .txt files");
    }
    tracing::info!(num_files = corpus.len(), dir = %dir.display(), "loaded corpus");
    Ok(corpus)
}

/// True when the last word is a known abbreviation or a single-letter initial, e.g. `Dr.` or `J.`
fn ends_with_abbreviation(sentence: &str) -> bool {
    let Some(last) = sentence.split_whitespace().next_back() else { return false };
    let Some(word) = last.strip_suffix('.') else { return false };
    let word = word.to_lowercase();
    let mut chars = word.chars();
    let initial = matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic());
    initial || ABBREVIATIONS.contains(word.as_str())
}

/// Unicode sentence bounds, with a bound after an abbreviation merged into the next one.
struct Sentences<'a, I> {
    text: &'a str,
    bounds: I,
}

impl<'a, I: Iterator<Item = (usize, &'a str)>> Iterator for Sentences<'a, I> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let text = self.text;
        let mut start: Option<usize> = None;
        for (idx, bound) in self.bounds.by_ref() {
            let from = *start.get_or_insert(idx);
            let candidate = text[from..idx + bound.len()].trim();
            if candidate.is_empty() {
                start = None;
                continue;
            }
            if ends_with_abbreviation(candidate) { continue; }
            return Some(candidate);
        }
        start.map(|from| text[from..].trim()).filter(|s| !s.is_empty())
    }
}

/// Lazily split text into trimmed, non-empty sentences on Unicode sentence boundaries.
///
/// A boundary right after a common abbreviation (`Mr.`, `Dr.`, `e.g.`) or an initial does not
/// end the sentence.
pub fn split_sentences(text: &str) -> impl Iterator<Item = &str> {
    Sentences { text, bounds: text.split_sentence_bound_indices() }
}

/// Split on newlines first, then into sentences, so a line break always ends a sentence.
pub fn passage_sentences(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n').flat_map(split_sentences)
}
