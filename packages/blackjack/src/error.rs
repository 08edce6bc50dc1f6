use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid rank: {0}")]
    InvalidRank(String),
    #[error("Invalid suit: {0}")]
    InvalidSuit(String),
    #[error("Invalid card: {0}")]
    InvalidCard(String),
    #[error("Invalid card index: {0}")]
    InvalidCardIndex(usize),
}
