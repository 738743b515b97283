pub mod config;
pub mod model;
pub mod ranker;
pub mod tokenizer;

pub use config::RankerConfig;
pub use model::{build_documents, Collection, DocIndex, Document, TermFrequencies};
pub use ranker::{rank, rank_scored, score, QueryLikelihoodModel, ScoredDocument, DEFAULT_LAMBDA, PROBABILITY_FLOOR};
