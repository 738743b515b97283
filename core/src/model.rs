use crate::tokenizer::tokenize;
use serde::Serialize;
use std::collections::HashMap;

pub type DocIndex = usize;

/// Token counts for a document or for the whole collection.
///
/// Absent tokens count as zero; a stored count is never zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TermFrequencies {
    counts: HashMap<String, u32>,
}

impl TermFrequencies {
    pub fn new() -> Self { Self::default() }

    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tf = Self::new();
        for token in tokens {
            tf.increment(token.as_ref());
        }
        tf
    }

    /// Count for `token`, zero when absent.
    pub fn get(&self, token: &str) -> u32 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    pub fn increment(&mut self, token: &str) {
        self.add(token, 1);
    }

    fn add(&mut self, token: &str, count: u32) {
        if count == 0 { return; }
        match self.counts.get_mut(token) {
            Some(c) => *c += count,
            None => { self.counts.insert(token.to_owned(), count); }
        }
    }

    /// Add every count of `other` into this table.
    pub fn merge(&mut self, other: &TermFrequencies) {
        for (token, &count) in &other.counts {
            self.add(token, count);
        }
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.values().map(|&c| c as usize).sum()
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize { self.counts.len() }

    pub fn is_empty(&self) -> bool { self.counts.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.counts.iter().map(|(t, &c)| (t.as_str(), c))
    }
}

/// A tokenized document with its term counts. Immutable once built.
#[derive(Debug, Clone)]
pub struct Document {
    index: DocIndex,
    raw_text: String,
    tokens: Vec<String>,
    term_frequencies: TermFrequencies,
    length: usize,
}

impl Document {
    pub fn new(index: DocIndex, text: impl Into<String>) -> Self {
        let raw_text = text.into();
        let tokens = tokenize(&raw_text);
        let term_frequencies = TermFrequencies::from_tokens(&tokens);
        let length = tokens.len();
        Self { index, raw_text, tokens, term_frequencies, length }
    }

    pub fn index(&self) -> DocIndex { self.index }
    pub fn raw_text(&self) -> &str { &self.raw_text }
    pub fn tokens(&self) -> &[String] { &self.tokens }
    pub fn term_frequencies(&self) -> &TermFrequencies { &self.term_frequencies }
    /// Number of tokens, equal to the sum of the term frequencies.
    pub fn length(&self) -> usize { self.length }
}

/// Build one document per text, indexed in input order.
pub fn build_documents<S: AsRef<str>>(texts: &[S]) -> Vec<Document> {
    texts
        .iter()
        .enumerate()
        .map(|(i, text)| Document::new(i, text.as_ref()))
        .collect()
}

/// Background statistics aggregated over every document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    term_frequencies: TermFrequencies,
    length: usize,
}

impl Collection {
    pub fn from_documents(documents: &[Document]) -> Self {
        let mut term_frequencies = TermFrequencies::new();
        for doc in documents {
            term_frequencies.merge(doc.term_frequencies());
        }
        let length = term_frequencies.total();
        Self { term_frequencies, length }
    }

    pub fn term_frequencies(&self) -> &TermFrequencies { &self.term_frequencies }
    pub fn length(&self) -> usize { self.length }
    pub fn vocabulary_size(&self) -> usize { self.term_frequencies.len() }
}
