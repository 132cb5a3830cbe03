pub mod corpus;
pub mod index;
pub mod pipeline;
pub mod ranker;
pub mod tokenizer;

pub use corpus::{load_files, passage_sentences, split_sentences, Corpus};
pub use index::{
    compute_idfs, document_frequencies, query_from_text, DocId, DocumentSet, IdfTable,
    InvertedIndex, Query,
};
pub use pipeline::{
    Answer, IndexedCorpus, Pipeline, PipelineConfig, FILE_MATCHES, SENTENCE_MATCHES,
};
pub use ranker::{rank_files, rank_sentences, top_files, top_sentences, FileMatch, SentenceMatch};
pub use tokenizer::{tokenize, Tokenizer, TokenizerConfig};
