use anyhow::{bail, Result};
use clap::Parser;
use qa_core::{
    load_files, Answer, Pipeline, PipelineConfig, TokenizerConfig, FILE_MATCHES, SENTENCE_MATCHES,
};
use serde::Serialize;
use std::io::{BufRead, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "questions")]
#[command(about = "Answer a question from a directory of text files using TF-IDF")]
pub struct Args {
    /// Corpus directory containing .txt files
    pub corpus: PathBuf,
    /// Number of top files to extract sentences from
    #[arg(long, default_value_t = FILE_MATCHES)]
    pub file_matches: usize,
    /// Number of sentences to print
    #[arg(long, default_value_t = SENTENCE_MATCHES)]
    pub sentence_matches: usize,
    /// Stem words before indexing and matching
    #[arg(long, default_value_t = false)]
    pub stem: bool,
    /// Print the ranked files and sentences as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
    /// Use this query instead of prompting for one
    #[arg(long, short)]
    pub query: Option<String>,
}

impl Args {
    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            file_matches: self.file_matches,
            sentence_matches: self.sentence_matches,
            tokenizer: TokenizerConfig { stem: self.stem },
        }
    }
}

#[derive(Serialize)]
struct JsonAnswer<'a> {
    corpus: String,
    #[serde(flatten)]
    answer: &'a Answer,
}

/// Write the prompt, then read exactly one line.
pub fn prompt_query<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<String> {
    write!(out, "Query: ")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("no query given on standard input");
    }
    Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
}

/// Load the corpus, take one query, and write the ranked answer.
pub fn run<R: BufRead, W: Write>(args: &Args, input: &mut R, out: &mut W) -> Result<Answer> {
    let corpus = load_files(&args.corpus)?;
    let pipeline = Pipeline::new(args.pipeline_config());
    let indexed = pipeline.index(&corpus);

    let query = match &args.query {
        Some(q) => q.clone(),
        None => prompt_query(input, out)?,
    };
    let answer = indexed.answer(&query);

    if args.json {
        let payload = JsonAnswer { corpus: args.corpus.display().to_string(), answer: &answer };
        writeln!(out, "{}", serde_json::to_string_pretty(&payload)?)?;
    } else if answer.is_empty() {
        writeln!(out, "No answer found.")?;
    } else {
        for m in &answer.sentences {
            writeln!(out, "{}", m.sentence)?;
        }
    }
    Ok(answer)
}
