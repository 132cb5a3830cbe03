use crate::tokenizer::Tokenizer;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Document identifier: a file name or the literal text of a sentence.
pub type DocId = String;

/// Document identifier to its ordered word tokens. Shared by the file level and the sentence level.
pub type DocumentSet = BTreeMap<DocId, Vec<String>>;

/// Word to `ln(N / df)`, only for words present in the set it was computed from.
pub type IdfTable = HashMap<String, f64>;

/// Distinct normalized query words. Ordered so score sums are reproducible.
pub type Query = BTreeSet<String>;

pub fn query_from_text(tokenizer: &Tokenizer, text: &str) -> Query {
    tokenizer.tokenize(text).into_iter().collect()
}

/// Word to the set of documents containing it at least once.
#[derive(Debug)]
pub struct InvertedIndex {
    pub postings: HashMap<String, BTreeSet<DocId>>,
    pub num_docs: usize,
}

impl InvertedIndex {
    pub fn build(docs: &DocumentSet) -> Self {
        let mut postings: HashMap<String, BTreeSet<DocId>> = HashMap::new();
        for (doc_id, words) in docs {
            for word in words {
                postings.entry(word.clone()).or_default().insert(doc_id.clone());
            }
        }
        Self { postings, num_docs: docs.len() }
    }

    pub fn doc_frequency(&self, word: &str) -> usize {
        self.postings.get(word).map_or(0, BTreeSet::len)
    }

    pub fn num_terms(&self) -> usize { self.postings.len() }

    pub fn idfs(&self) -> IdfTable {
        let n = self.num_docs as f64;
        self.postings
            .iter()
            .map(|(word, holders)| (word.clone(), (n / holders.len() as f64).ln()))
            .collect()
    }
}

pub fn document_frequencies(docs: &DocumentSet) -> HashMap<String, usize> {
    InvertedIndex::build(docs)
        .postings
        .into_iter()
        .map(|(word, holders)| (word, holders.len()))
        .collect()
}

pub fn compute_idfs(docs: &DocumentSet) -> IdfTable {
    let index = InvertedIndex::build(docs);
    tracing::debug!(num_docs = index.num_docs, num_terms = index.num_terms(), "computed idfs");
    index.idfs()
}
