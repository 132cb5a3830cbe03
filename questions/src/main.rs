use anyhow::Result;
use clap::Parser;
use questions::{run, Args};
use std::io;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let args = Args::parse();
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();
    let answer = run(&args, &mut input, &mut out)?;
    tracing::info!(sentences = answer.sentences.len(), "done");
    Ok(())
}
