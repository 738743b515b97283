use anyhow::{anyhow, bail, Context, Result};
use qlm_core::{DocIndex, RankerConfig, ScoredDocument};
use serde::Serialize;
use std::io::BufRead;
use std::path::Path;

/// Environment variable consulted for lambda when no `--lambda` flag is given.
pub const LAMBDA_ENV: &str = "QLM_LAMBDA";

/// One ranking request: the documents in input order and the query line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    pub documents: Vec<String>,
    pub query: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// `[0, 2, 1]`
    #[default]
    Plain,
    /// Ranking plus per-document scores as a JSON object
    Json,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    lambda: f64,
    ranking: Vec<DocIndex>,
    scores: &'a [ScoredDocument],
}

/// Read a count line, that many document lines, then a query line.
///
/// Every line is trimmed. Anything after the query line is ignored.
pub fn read_batch<R: BufRead>(reader: R) -> Result<Batch> {
    let mut lines = reader.lines();
    let count_line = lines.next().ok_or_else(|| anyhow!("missing document count line"))??;
    let count: usize = count_line
        .trim()
        .parse()
        .with_context(|| format!("invalid document count {:?}", count_line.trim()))?;

    // The declared count is untrusted until the lines are actually read.
    let mut documents = Vec::with_capacity(count.min(1024));
    for i in 0..count {
        match lines.next() {
            Some(line) => documents.push(line.with_context(|| format!("reading document {i}"))?.trim().to_owned()),
            None => bail!("expected {count} documents, found {i}"),
        }
    }
    let query = match lines.next() {
        Some(line) => line.context("reading query")?.trim().to_owned(),
        None => bail!("missing query line after {count} documents"),
    };
    Ok(Batch { documents, query })
}

/// Pick lambda from the flag, then the environment, then the config file, then the default.
pub fn resolve_config(lambda_flag: Option<f64>, lambda_env: Option<&str>, config_path: Option<&Path>) -> Result<RankerConfig> {
    let mut cfg = match config_path {
        Some(path) => RankerConfig::from_json_file(path)?,
        None => RankerConfig::default(),
    };
    if let Some(raw) = lambda_env {
        cfg.lambda = raw
            .trim()
            .parse()
            .with_context(|| format!("invalid {LAMBDA_ENV} value {raw:?}"))?;
    }
    if let Some(lambda) = lambda_flag {
        cfg.lambda = lambda;
    }
    cfg.validate()?;
    Ok(cfg)
}

pub fn format_plain(ranking: &[DocIndex]) -> String {
    let items: Vec<String> = ranking.iter().map(|i| i.to_string()).collect();
    format!("[{}]", items.join(", "))
}

pub fn render(scored: &[ScoredDocument], lambda: f64, format: OutputFormat) -> Result<String> {
    let ranking: Vec<DocIndex> = scored.iter().map(|s| s.index).collect();
    match format {
        OutputFormat::Plain => Ok(format_plain(&ranking)),
        OutputFormat::Json => {
            let report = JsonReport { lambda, ranking, scores: scored };
            Ok(serde_json::to_string(&report)?)
        }
    }
}

/// Parse a batch from `reader`, rank it and render the result.
pub fn run<R: BufRead>(reader: R, config: &RankerConfig, format: OutputFormat) -> Result<String> {
    let batch = read_batch(reader)?;
    let scored = config.model().process_scored(&batch.documents, &batch.query);
    tracing::info!(num_docs = batch.documents.len(), lambda = config.lambda, "ranked documents");
    render(&scored, config.lambda, format)
}
