use crate::side_bet::{classify_lucky_ladies, classify_perfect_pair, classify_poker_hand, LuckyLadies};
use crate::{Card, Paytable};

/// Remaining copies of each card, indexed by `Card::index`.
type Shoe = [u16; 52];

/// Result of a side-bet edge calculation.
#[derive(Debug, Clone, Copy)]
pub struct EdgeResult {
    /// Probability the bet pays anything.
    pub hit_frequency: f64,
    /// Expected return per unit bet for the player.
    pub expected_return: f64,
    /// House edge as a fraction (e.g., 0.05 = 5%).
    /// Positive means house advantage.
    pub house_edge: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct SideBetEdges {
    pub insurance: EdgeResult,
    pub perfect_pairs: EdgeResult,
    pub poker: EdgeResult,
    pub lucky_ladies: EdgeResult,
}

/// Probability mass accumulated while enumerating deals.
#[derive(Debug, Clone, Copy, Default)]
struct Tally {
    total: f64,
    hit: f64,
    paid: f64,
}

impl Tally {
    fn add(&mut self, p: f64, multiplier: u32) {
        self.total += p;
        if multiplier > 0 {
            self.hit += p;
            self.paid += p * multiplier as f64;
        }
    }

    /// Side bets pay "to 1": a win returns `multiplier` units, a loss costs one.
    fn result(&self) -> EdgeResult {
        let expected_return = self.paid - (self.total - self.hit);
        EdgeResult {
            hit_frequency: self.hit,
            expected_return,
            house_edge: -expected_return,
        }
    }
}

/// Combinatorial side-bet edge calculator.
///
/// Enumerates every ordered deal of the cards a side bet looks at, drawn
/// without replacement from a fresh N-deck shoe.
pub struct SideBetEdgeCalculator {
    paytable: Paytable,
    deck: Vec<Card>,
    shoe: Shoe,
}

impl SideBetEdgeCalculator {
    pub fn new(num_decks: u8, paytable: Paytable) -> Self {
        Self {
            paytable,
            deck: (0..52).filter_map(|i| Card::from_index(i).ok()).collect(),
            shoe: Self::initial_shoe(num_decks),
        }
    }

    pub fn calculate(&self) -> SideBetEdges {
        SideBetEdges {
            insurance: self.insurance().result(),
            perfect_pairs: self.perfect_pairs().result(),
            poker: self.poker().result(),
            lucky_ladies: self.lucky_ladies().result(),
        }
    }

    // ── Shoe helpers ──

    fn initial_shoe(num_decks: u8) -> Shoe {
        [u16::from(num_decks); 52]
    }

    fn shoe_total(shoe: &Shoe) -> u16 {
        shoe.iter().sum()
    }

    fn remove_card(shoe: &Shoe, idx: usize) -> Shoe {
        let mut s = *shoe;
        debug_assert!(s[idx] > 0);
        s[idx] -= 1;
        s
    }

    /// Every card that can come next, with its probability and the shoe left behind.
    fn draws(shoe: &Shoe) -> Vec<(usize, f64, Shoe)> {
        let total = Self::shoe_total(shoe);
        if total == 0 {
            return Vec::new();
        }
        (0..52)
            .filter(|&i| shoe[i] > 0)
            .map(|i| (i, shoe[i] as f64 / total as f64, Self::remove_card(shoe, i)))
            .collect()
    }

    fn count_matching(&self, shoe: &Shoe, pred: impl Fn(&Card) -> bool) -> u16 {
        self.deck
            .iter()
            .zip(shoe.iter())
            .filter(|(card, _)| pred(card))
            .map(|(_, &n)| n)
            .sum()
    }

    /// Two-card dealer blackjack from what is left in the shoe.
    fn blackjack_probability(&self, shoe: &Shoe) -> f64 {
        let total = Self::shoe_total(shoe) as f64;
        if total < 2.0 {
            return 0.0;
        }
        let aces = self.count_matching(shoe, Card::is_ace) as f64;
        let tens = self.count_matching(shoe, |c| c.value() == 10) as f64;
        2.0 * (aces / total) * (tens / (total - 1.0))
    }

    // ── Per-bet enumeration ──

    /// Insurance offered on a dealer ace, with no other cards seen.
    fn insurance(&self) -> Tally {
        let mut tally = Tally::default();
        let Some(ace_idx) = self.deck.iter().position(Card::is_ace) else {
            return tally;
        };
        if self.shoe[ace_idx] == 0 {
            return tally;
        }
        let shoe = Self::remove_card(&self.shoe, ace_idx);
        for (hole, p, _) in Self::draws(&shoe) {
            let multiplier = if self.deck[hole].value() == 10 {
                self.paytable.insurance
            } else {
                0
            };
            tally.add(p, multiplier);
        }
        tally
    }

    fn perfect_pairs(&self) -> Tally {
        let mut tally = Tally::default();
        for (first, p1, shoe) in Self::draws(&self.shoe) {
            for (second, p2, _) in Self::draws(&shoe) {
                let cards = [self.deck[first], self.deck[second]];
                let multiplier = self
                    .paytable
                    .perfect_pairs
                    .multiplier(classify_perfect_pair(&cards));
                tally.add(p1 * p2, multiplier);
            }
        }
        tally
    }

    fn poker(&self) -> Tally {
        let mut tally = Tally::default();
        for (first, p1, shoe) in Self::draws(&self.shoe) {
            for (second, p2, shoe) in Self::draws(&shoe) {
                let player = [self.deck[first], self.deck[second]];
                for (up, p3, _) in Self::draws(&shoe) {
                    let multiplier = self
                        .paytable
                        .poker
                        .multiplier(classify_poker_hand(&player, &self.deck[up]));
                    tally.add(p1 * p2 * p3, multiplier);
                }
            }
        }
        tally
    }

    fn lucky_ladies(&self) -> Tally {
        let table = &self.paytable.lucky_ladies;
        let mut tally = Tally::default();
        for (first, p1, shoe) in Self::draws(&self.shoe) {
            for (second, p2, shoe) in Self::draws(&shoe) {
                let p = p1 * p2;
                let player = [self.deck[first], self.deck[second]];
                match classify_lucky_ladies(&player, false) {
                    Some(LuckyLadies::QueenOfHeartsPair) => {
                        let bj = self.blackjack_probability(&shoe);
                        tally.add(
                            p * bj,
                            table.multiplier(Some(LuckyLadies::QueenOfHeartsPairWithDealerBlackjack)),
                        );
                        tally.add(p * (1.0 - bj), table.multiplier(Some(LuckyLadies::QueenOfHeartsPair)));
                    }
                    outcome => tally.add(p, table.multiplier(outcome)),
                }
            }
        }
        tally
    }
}
