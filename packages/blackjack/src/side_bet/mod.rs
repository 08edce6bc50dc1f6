//! Side-bet hand classification.
//!
//! Each `classify_*` function names the winning combination, if any. The
//! matching `validate_*` function maps it onto the default `Paytable`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{calculate_hand_value, is_blackjack, Card, Paytable, Rank, Suit};

/// Perfect Pairs combinations on the player's first two cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum PerfectPair {
    /// Same rank, different colors
    Mixed,
    /// Same rank and color, different suits
    Colored,
    /// Same rank and suit
    Perfect,
}

/// 21+3 combinations, checked in priority order (first match wins)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum PokerHand {
    SuitedThreeOfAKind,
    StraightFlush,
    ThreeOfAKind,
    Straight,
    Flush,
}

/// Lucky Ladies combinations on the player's first two cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum LuckyLadies {
    QueenOfHeartsPairWithDealerBlackjack,
    QueenOfHeartsPair,
    /// Same rank and suit
    MatchedTwenty,
    SuitedTwenty,
    AnyTwenty,
}

const QUEEN_OF_HEARTS: Card = Card::new(Rank::Queen, Suit::Hearts);

pub fn classify_perfect_pair(cards: &[Card]) -> Option<PerfectPair> {
    let [first, second] = cards else {
        return None;
    };
    if first.rank != second.rank {
        return None;
    }

    if first.suit == second.suit {
        Some(PerfectPair::Perfect)
    } else if first.color() == second.color() {
        Some(PerfectPair::Colored)
    } else {
        Some(PerfectPair::Mixed)
    }
}

/// Classify the two player cards plus the dealer up-card.
///
/// A straight is any three cards whose sorted values span exactly two, so a
/// pair with a kicker two above or below counts (5-5-7). Aces rank high only,
/// so A-2-3 is not a straight.
pub fn classify_poker_hand(player_cards: &[Card], dealer_up_card: &Card) -> Option<PokerHand> {
    let [first, second] = player_cards else {
        return None;
    };
    let cards = [*first, *second, *dealer_up_card];

    let is_flush = cards.iter().all(|c| c.suit == cards[0].suit);
    let is_trips = cards.iter().all(|c| c.rank == cards[0].rank);

    let mut order = cards.map(|c| c.rank.order());
    order.sort_unstable();
    let is_straight = order[2] - order[0] == 2;

    if is_flush && is_trips {
        Some(PokerHand::SuitedThreeOfAKind)
    } else if is_flush && is_straight {
        Some(PokerHand::StraightFlush)
    } else if is_trips {
        Some(PokerHand::ThreeOfAKind)
    } else if is_straight {
        Some(PokerHand::Straight)
    } else if is_flush {
        Some(PokerHand::Flush)
    } else {
        None
    }
}

pub fn classify_lucky_ladies(
    player_cards: &[Card],
    dealer_has_blackjack: bool,
) -> Option<LuckyLadies> {
    let [first, second] = player_cards else {
        return None;
    };

    if *first == QUEEN_OF_HEARTS && *second == QUEEN_OF_HEARTS {
        return Some(if dealer_has_blackjack {
            LuckyLadies::QueenOfHeartsPairWithDealerBlackjack
        } else {
            LuckyLadies::QueenOfHeartsPair
        });
    }

    if calculate_hand_value(player_cards) != 20 {
        return None;
    }

    if first == second {
        Some(LuckyLadies::MatchedTwenty)
    } else if first.suit == second.suit {
        Some(LuckyLadies::SuitedTwenty)
    } else {
        Some(LuckyLadies::AnyTwenty)
    }
}

/// Dealer blackjack as insurance and Lucky Ladies see it: two cards totalling 21.
pub fn dealer_has_blackjack(dealer_cards: &[Card]) -> bool {
    is_blackjack(dealer_cards)
}

pub fn validate_perfect_pairs(cards: &[Card]) -> u32 {
    Paytable::default()
        .perfect_pairs
        .multiplier(classify_perfect_pair(cards))
}

pub fn validate_poker_hand(player_cards: &[Card], dealer_up_card: &Card) -> u32 {
    Paytable::default()
        .poker
        .multiplier(classify_poker_hand(player_cards, dealer_up_card))
}

pub fn validate_lucky_ladies(player_cards: &[Card], dealer_has_blackjack: bool) -> u32 {
    Paytable::default()
        .lucky_ladies
        .multiplier(classify_lucky_ladies(player_cards, dealer_has_blackjack))
}
