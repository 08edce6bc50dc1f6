use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::side_bet::{LuckyLadies, PerfectPair, PokerHand};

/// Perfect Pairs multipliers (paid "to 1")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct PerfectPairsPaytable {
    /// Same rank, different colors
    pub mixed: u32,
    /// Same rank, same color, different suits
    pub colored: u32,
    /// Same rank and suit
    pub perfect: u32,
}

impl Default for PerfectPairsPaytable {
    fn default() -> Self {
        Self {
            mixed: 5,
            colored: 12,
            perfect: 25,
        }
    }
}

impl PerfectPairsPaytable {
    pub fn multiplier(&self, pair: Option<PerfectPair>) -> u32 {
        match pair {
            Some(PerfectPair::Perfect) => self.perfect,
            Some(PerfectPair::Colored) => self.colored,
            Some(PerfectPair::Mixed) => self.mixed,
            None => 0,
        }
    }

    pub fn payout_info(&self) -> Vec<String> {
        vec![
            format!("Mixed Pair (different colors) - {}:1", self.mixed),
            format!("Colored Pair (same color) - {}:1", self.colored),
            format!("Perfect Pair (identical) - {}:1", self.perfect),
        ]
    }
}

/// 21+3 multipliers, player's first two cards plus the dealer up-card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct PokerPaytable {
    pub flush: u32,
    pub straight: u32,
    pub three_of_a_kind: u32,
    pub straight_flush: u32,
    pub suited_three_of_a_kind: u32,
}

impl Default for PokerPaytable {
    fn default() -> Self {
        Self {
            flush: 5,
            straight: 10,
            three_of_a_kind: 30,
            straight_flush: 40,
            suited_three_of_a_kind: 100,
        }
    }
}

impl PokerPaytable {
    pub fn multiplier(&self, hand: Option<PokerHand>) -> u32 {
        match hand {
            Some(PokerHand::SuitedThreeOfAKind) => self.suited_three_of_a_kind,
            Some(PokerHand::StraightFlush) => self.straight_flush,
            Some(PokerHand::ThreeOfAKind) => self.three_of_a_kind,
            Some(PokerHand::Straight) => self.straight,
            Some(PokerHand::Flush) => self.flush,
            None => 0,
        }
    }

    pub fn payout_info(&self) -> Vec<String> {
        vec![
            format!("Flush - {}:1", self.flush),
            format!("Straight - {}:1", self.straight),
            format!("Three of a Kind - {}:1", self.three_of_a_kind),
            format!("Straight Flush - {}:1", self.straight_flush),
            format!("Suited Three of a Kind - {}:1", self.suited_three_of_a_kind),
        ]
    }
}

/// Lucky Ladies multipliers, paid on a two-card 20
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct LuckyLadiesPaytable {
    pub any_twenty: u32,
    pub suited_twenty: u32,
    pub matched_twenty: u32,
    pub queen_of_hearts_pair: u32,
    pub queen_of_hearts_pair_dealer_blackjack: u32,
}

impl Default for LuckyLadiesPaytable {
    fn default() -> Self {
        Self {
            any_twenty: 4,
            suited_twenty: 10,
            matched_twenty: 25,
            queen_of_hearts_pair: 200,
            queen_of_hearts_pair_dealer_blackjack: 1000,
        }
    }
}

impl LuckyLadiesPaytable {
    pub fn multiplier(&self, outcome: Option<LuckyLadies>) -> u32 {
        match outcome {
            Some(LuckyLadies::QueenOfHeartsPairWithDealerBlackjack) => {
                self.queen_of_hearts_pair_dealer_blackjack
            }
            Some(LuckyLadies::QueenOfHeartsPair) => self.queen_of_hearts_pair,
            Some(LuckyLadies::MatchedTwenty) => self.matched_twenty,
            Some(LuckyLadies::SuitedTwenty) => self.suited_twenty,
            Some(LuckyLadies::AnyTwenty) => self.any_twenty,
            None => 0,
        }
    }

    pub fn payout_info(&self) -> Vec<String> {
        vec![
            format!("Any 20 - {}:1", self.any_twenty),
            format!("Suited 20 - {}:1", self.suited_twenty),
            format!("Matched 20 - {}:1", self.matched_twenty),
            format!("Queen of Hearts Pair - {}:1", self.queen_of_hearts_pair),
            format!(
                "Queen of Hearts Pair + Dealer BJ - {}:1",
                self.queen_of_hearts_pair_dealer_blackjack
            ),
        ]
    }
}

/// Full side-bet payout table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct Paytable {
    /// Insurance multiplier when the dealer has blackjack
    pub insurance: u32,
    pub perfect_pairs: PerfectPairsPaytable,
    pub poker: PokerPaytable,
    pub lucky_ladies: LuckyLadiesPaytable,
}

impl Default for Paytable {
    fn default() -> Self {
        Self {
            insurance: 2,
            perfect_pairs: PerfectPairsPaytable::default(),
            poker: PokerPaytable::default(),
            lucky_ladies: LuckyLadiesPaytable::default(),
        }
    }
}

impl Paytable {
    pub fn insurance_payout_info(&self) -> Vec<String> {
        vec![format!("Pays {}:1 if dealer has blackjack", self.insurance)]
    }
}
