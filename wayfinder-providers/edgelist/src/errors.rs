use thiserror::Error;
use wayfinder_core::GraphError;

/// Failure while reading an edge list or turning it into a graph.
///
/// Line numbers are one-based and count every physical line, including
/// comments and blanks.
#[derive(Debug, Error)]
pub enum EdgeListError {
    #[error("line {line}: expected `node`, `tail head` or `tail head weight` but found {tokens} tokens")]
    MalformedLine { line: usize, tokens: usize },
    #[error("line {line}: weight `{token}` is not a 64-bit signed integer")]
    InvalidWeight { line: usize, token: String },
    #[error("line {line}: edge has no weight but a weighted graph was requested")]
    MissingWeight { line: usize },
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Graph(#[from] GraphError),
}
