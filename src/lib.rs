pub mod betting;
pub mod clock;
pub mod config;
pub mod error;
pub mod schema;
pub mod side_bets;
pub mod split_hands;
pub mod store;

pub use blackjack::{Card, Paytable, Rank, Suit};

pub use crate::betting::{BettingState, BettingStore};
pub use crate::clock::{Clock, FixedClock, SystemClock};
pub use crate::config::TableConfig;
pub use crate::error::Error;
pub use crate::side_bets::{
    BetResult, SideBet, SideBetHistory, SideBetKind, SideBetState, SideBetStore, SideBets,
};
pub use crate::split_hands::{SplitHand, SplitHandsState, SplitHandsStore};
pub use crate::store::{Store, SubscriptionId};

/// Parses a whitespace- or comma-separated list of cards such as `"QH, 10♠"`.
pub fn parse_cards(input: &str) -> Result<Vec<Card>, Error> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| token.parse::<Card>().map_err(Error::from))
        .collect()
}
