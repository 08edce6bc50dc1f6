mod card;
mod error;
mod hand;
mod rules;
pub mod side_bet;
#[cfg(feature = "edge")]
mod edge;

pub use card::{Card, Color, Rank, Suit};
pub use error::Error;
pub use hand::{calculate_hand_value, can_split_cards, is_blackjack, is_busted};
pub use rules::{LuckyLadiesPaytable, Paytable, PerfectPairsPaytable, PokerPaytable};
pub use side_bet::{
    classify_lucky_ladies, classify_perfect_pair, classify_poker_hand, dealer_has_blackjack,
    validate_lucky_ladies, validate_perfect_pairs, validate_poker_hand, LuckyLadies, PerfectPair,
    PokerHand,
};
#[cfg(feature = "edge")]
pub use edge::{EdgeResult, SideBetEdgeCalculator, SideBetEdges};
