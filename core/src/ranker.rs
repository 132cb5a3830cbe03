use crate::index::{DocumentSet, IdfTable, Query};
use serde::Serialize;
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileMatch {
    pub name: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentenceMatch {
    pub sentence: String,
    pub score: f64,
    /// Fraction of the sentence's tokens that are query words.
    pub density: f64,
}

// Words the index never saw contribute nothing.
fn idf_of(idfs: &IdfTable, word: &str) -> f64 {
    idfs.get(word).copied().unwrap_or(0.0)
}

fn by_score_desc(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

/// Sum of `tf(word, file) * idf(word)` over the query words.
pub fn tf_idf_score(query: &Query, words: &[String], idfs: &IdfTable) -> f64 {
    query.iter().fold(0.0, |score, q| {
        let tf = words.iter().filter(|w| *w == q).count();
        score + tf as f64 * idf_of(idfs, q)
    })
}

/// Sum of `idf(word)` over the query words present in the sentence at least once.
pub fn matching_idf(query: &Query, words: &[String], idfs: &IdfTable) -> f64 {
    query
        .iter()
        .filter(|q| words.contains(q))
        .fold(0.0, |score, q| score + idf_of(idfs, q))
}

pub fn query_term_density(query: &Query, words: &[String]) -> f64 {
    if words.is_empty() { return 0.0; }
    let hits = words.iter().filter(|w| query.contains(*w)).count();
    hits as f64 / words.len() as f64
}

/// Rank files by TF-IDF, highest first. Equal scores fall back to the file name, ascending.
pub fn rank_files(query: &Query, files: &DocumentSet, idfs: &IdfTable, n: usize) -> Vec<FileMatch> {
    let mut scored: Vec<FileMatch> = files
        .iter()
        .map(|(name, words)| FileMatch {
            name: name.clone(),
            score: tf_idf_score(query, words, idfs),
        })
        .collect();
    scored.sort_by(|a, b| by_score_desc(a.score, b.score).then_with(|| a.name.cmp(&b.name)));
    scored.truncate(n);
    scored
}

/// Rank sentences by matching IDF, then query term density, then sentence text ascending.
pub fn rank_sentences(
    query: &Query,
    sentences: &DocumentSet,
    idfs: &IdfTable,
    n: usize,
) -> Vec<SentenceMatch> {
    let mut scored: Vec<SentenceMatch> = sentences
        .iter()
        .map(|(sentence, words)| SentenceMatch {
            sentence: sentence.clone(),
            score: matching_idf(query, words, idfs),
            density: query_term_density(query, words),
        })
        .collect();
    scored.sort_by(|a, b| {
        by_score_desc(a.score, b.score)
            .then_with(|| by_score_desc(a.density, b.density))
            .then_with(|| a.sentence.cmp(&b.sentence))
    });
    scored.truncate(n);
    scored
}

pub fn top_files(query: &Query, files: &DocumentSet, idfs: &IdfTable, n: usize) -> Vec<String> {
    rank_files(query, files, idfs, n).into_iter().map(|m| m.name).collect()
}

pub fn top_sentences(
    query: &Query,
    sentences: &DocumentSet,
    idfs: &IdfTable,
    n: usize,
) -> Vec<String> {
    rank_sentences(query, sentences, idfs, n).into_iter().map(|m| m.sentence).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::compute_idfs;

    fn words(text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }

    fn query(text: &str) -> Query {
        text.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn term_frequency_multiplies_idf() {
        let mut idfs = IdfTable::new();
        idfs.insert("cat".into(), 0.5);
        let score = tf_idf_score(&query("cat"), &words("cat dog cat"), &idfs);
        assert!((score - 1.0).abs() < 1e-12);
    }

    #[test]
    fn unseen_query_word_scores_zero() {
        let idfs = IdfTable::new();
        assert_eq!(tf_idf_score(&query("zebra"), &words("zebra"), &idfs), 0.0);
        assert_eq!(matching_idf(&query("zebra"), &words("zebra"), &idfs), 0.0);
    }

    #[test]
    fn file_ties_break_on_name() {
        let mut files = DocumentSet::new();
        files.insert("b.txt".into(), words("cat"));
        files.insert("a.txt".into(), words("cat"));
        files.insert("c.txt".into(), words("dog"));
        let idfs = compute_idfs(&files);
        assert_eq!(top_files(&query("cat"), &files, &idfs, 3), vec!["a.txt", "b.txt", "c.txt"]);
    }

    #[test]
    fn n_is_capped_and_zero_is_empty() {
        let mut files = DocumentSet::new();
        files.insert("only.txt".into(), words("cat"));
        let idfs = compute_idfs(&files);
        assert_eq!(top_files(&query("cat"), &files, &idfs, 5), vec!["only.txt"]);
        assert!(top_files(&query("cat"), &files, &idfs, 0).is_empty());
    }

    #[test]
    fn density_breaks_idf_ties() {
        let mut sentences = DocumentSet::new();
        sentences.insert("cat dog dog dog".into(), words("cat dog dog dog"));
        sentences.insert("cat cat dog".into(), words("cat cat dog"));
        sentences.insert("bird".into(), words("bird"));
        let idfs = compute_idfs(&sentences);
        let ranked = rank_sentences(&query("cat"), &sentences, &idfs, 2);
        assert_eq!(ranked[0].sentence, "cat cat dog");
        assert!((ranked[0].density - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(ranked[1].sentence, "cat dog dog dog");
        assert!((ranked[1].density - 0.25).abs() < 1e-12);
    }
}
