//! Query likelihood scoring with Jelinek-Mercer smoothing.
//!
//! Each query token contributes `ln(max(λ·P(t|d) + (1-λ)·P(t|C), 1e-10))`, where
//! `P(t|d)` is the token's share of the document and `P(t|C)` its share of the
//! whole collection. Documents are ranked by descending total, ties by ascending index.

use crate::model::{build_documents, Collection, DocIndex, Document};
use crate::tokenizer::tokenize;
use serde::Serialize;
use std::cmp::Ordering;

/// Lower bound applied to every smoothed probability before taking the log.
pub const PROBABILITY_FLOOR: f64 = 1e-10;

/// Default interpolation weight between document and collection models.
pub const DEFAULT_LAMBDA: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredDocument {
    pub index: DocIndex,
    pub score: f64,
}

/// Log-likelihood of `query_tokens` under the smoothed model of `document`.
///
/// `lambda` is expected in `[0, 1]`; it is not checked here. An empty query scores `0.0`.
pub fn score<S: AsRef<str>>(query_tokens: &[S], document: &Document, collection: &Collection, lambda: f64) -> f64 {
    let doc_tf = document.term_frequencies();
    let coll_tf = collection.term_frequencies();
    let mut log_probability = 0.0;
    for token in query_tokens {
        let token = token.as_ref();
        let p_doc = relative_frequency(doc_tf.get(token), document.length());
        let p_coll = relative_frequency(coll_tf.get(token), collection.length());
        let p = (lambda * p_doc + (1.0 - lambda) * p_coll).max(PROBABILITY_FLOOR);
        log_probability += p.ln();
    }
    log_probability
}

fn relative_frequency(count: u32, length: usize) -> f64 {
    if length > 0 { count as f64 / length as f64 } else { 0.0 }
}

/// Descending score, then ascending index.
fn by_relevance(a: &ScoredDocument, b: &ScoredDocument) -> Ordering {
    b.score.total_cmp(&a.score).then_with(|| a.index.cmp(&b.index))
}

/// Score every document and return them in ranked order.
pub fn rank_scored<S: AsRef<str>>(documents: &[Document], query_tokens: &[S], collection: &Collection, lambda: f64) -> Vec<ScoredDocument> {
    let mut scored: Vec<ScoredDocument> = documents
        .iter()
        .map(|doc| ScoredDocument { index: doc.index(), score: score(query_tokens, doc, collection, lambda) })
        .collect();
    scored.sort_by(by_relevance);
    scored
}

/// Document indices ordered by relevance to the query.
pub fn rank<S: AsRef<str>>(documents: &[Document], query_tokens: &[S], collection: &Collection, lambda: f64) -> Vec<DocIndex> {
    rank_scored(documents, query_tokens, collection, lambda)
        .into_iter()
        .map(|s| s.index)
        .collect()
}

/// Batch ranker over raw texts. Holds only the interpolation weight; all corpus
/// state lives for the duration of a single `process` call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueryLikelihoodModel {
    lambda: f64,
}

impl Default for QueryLikelihoodModel {
    fn default() -> Self { Self { lambda: DEFAULT_LAMBDA } }
}

impl QueryLikelihoodModel {
    pub fn new(lambda: f64) -> Self { Self { lambda } }

    pub fn lambda(&self) -> f64 { self.lambda }

    /// Rank `texts` against `query`, returning indices into `texts`.
    pub fn process<S: AsRef<str>>(&self, texts: &[S], query: &str) -> Vec<DocIndex> {
        self.process_scored(texts, query).into_iter().map(|s| s.index).collect()
    }

    pub fn process_scored<S: AsRef<str>>(&self, texts: &[S], query: &str) -> Vec<ScoredDocument> {
        let documents = build_documents(texts);
        let collection = Collection::from_documents(&documents);
        let query_tokens = tokenize(query);
        tracing::debug!(
            num_docs = documents.len(),
            collection_length = collection.length(),
            vocabulary = collection.vocabulary_size(),
            query_tokens = query_tokens.len(),
            lambda = self.lambda,
            "scoring corpus"
        );
        tracing::trace!(
            collection = %serde_json::to_string(collection.term_frequencies()).unwrap_or_default(),
            "collection term frequencies"
        );
        rank_scored(&documents, &query_tokens, &collection, self.lambda)
    }
}
