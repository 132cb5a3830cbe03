use crate::corpus::{passage_sentences, Corpus};
use crate::index::{compute_idfs, query_from_text, DocumentSet, IdfTable};
use crate::ranker::{rank_files, rank_sentences, FileMatch, SentenceMatch};
use crate::tokenizer::{Tokenizer, TokenizerConfig};
use serde::Serialize;

pub const FILE_MATCHES: usize = 1;
pub const SENTENCE_MATCHES: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineConfig {
    /// How many top files feed the sentence stage.
    pub file_matches: usize,
    /// How many sentences to return.
    pub sentence_matches: usize,
    pub tokenizer: TokenizerConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            file_matches: FILE_MATCHES,
            sentence_matches: SENTENCE_MATCHES,
            tokenizer: TokenizerConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Answer {
    /// Normalized query words, sorted.
    pub query: Vec<String>,
    pub files: Vec<FileMatch>,
    pub sentences: Vec<SentenceMatch>,
}

impl Answer {
    pub fn is_empty(&self) -> bool { self.sentences.is_empty() }
}

pub struct Pipeline {
    config: PipelineConfig,
    tokenizer: Tokenizer,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config, tokenizer: Tokenizer::new(config.tokenizer) }
    }

    /// Tokenize every file and compute the file-level IDF table.
    pub fn index<'a>(&'a self, corpus: &'a Corpus) -> IndexedCorpus<'a> {
        let file_words: DocumentSet = corpus
            .iter()
            .map(|(name, text)| (name.clone(), self.tokenizer.tokenize(text)))
            .collect();
        let file_idfs = compute_idfs(&file_words);
        tracing::info!(num_files = file_words.len(), num_terms = file_idfs.len(), "indexed corpus");
        IndexedCorpus { pipeline: self, corpus, file_words, file_idfs }
    }
}

/// A corpus with its file-level words and IDFs, ready to answer a query.
pub struct IndexedCorpus<'a> {
    pipeline: &'a Pipeline,
    corpus: &'a Corpus,
    file_words: DocumentSet,
    file_idfs: IdfTable,
}

impl<'a> IndexedCorpus<'a> {
    pub fn answer(&self, raw_query: &str) -> Answer {
        let config = &self.pipeline.config;
        let tokenizer = &self.pipeline.tokenizer;
        let query = query_from_text(tokenizer, raw_query);
        if query.is_empty() {
            tracing::warn!("query has no content words after normalization");
        }

        let files = rank_files(&query, &self.file_words, &self.file_idfs, config.file_matches);
        let top_files: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
        tracing::debug!(?top_files, "ranked files");

        // Identical sentence text in a later file replaces the earlier entry.
        let mut sentences = DocumentSet::new();
        for file in &files {
            let Some(text) = self.corpus.get(&file.name) else { continue };
            for sentence in passage_sentences(text) {
                let tokens = tokenizer.tokenize(sentence);
                if !tokens.is_empty() {
                    sentences.insert(sentence.to_string(), tokens);
                }
            }
        }
        let sentence_idfs = compute_idfs(&sentences);
        let ranked = rank_sentences(&query, &sentences, &sentence_idfs, config.sentence_matches);
        tracing::info!(num_sentences = sentences.len(), matches = ranked.len(), "ranked sentences");

        Answer { query: query.into_iter().collect(), files, sentences: ranked }
    }
}
