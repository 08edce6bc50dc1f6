//! Side-bet wagers, evaluation and history.
//!
//! Four fixed side bets ride alongside the main hand. `evaluate_bets` settles
//! every active one against the dealt cards in a single store update, records
//! the outcomes newest-first and zeroes every wager.

use blackjack::{
    classify_lucky_ladies, classify_perfect_pair, classify_poker_hand, dealer_has_blackjack, Card,
    Paytable,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{Clock, Store, SubscriptionId, SystemClock, TableConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum SideBetKind {
    Insurance,
    PerfectPairs,
    /// 21+3
    Poker,
    LuckyLadies,
}

impl SideBetKind {
    /// Evaluation order.
    pub const ALL: [SideBetKind; 4] = [
        SideBetKind::Insurance,
        SideBetKind::PerfectPairs,
        SideBetKind::Poker,
        SideBetKind::LuckyLadies,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SideBetKind::Insurance => "Insurance",
            SideBetKind::PerfectPairs => "Perfect Pairs",
            SideBetKind::Poker => "21+3",
            SideBetKind::LuckyLadies => "Lucky Ladies",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SideBetKind::Insurance => "Bet half your original bet when dealer shows Ace",
            SideBetKind::PerfectPairs => "Bet on getting a pair in your first two cards",
            SideBetKind::Poker => "Make poker hands with your cards and dealer's up card",
            SideBetKind::LuckyLadies => "Bet on your hand totaling 20",
        }
    }

    /// Inverse of [`SideBetKind::name`].
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    fn payout_info(&self, paytable: &Paytable) -> Vec<String> {
        match self {
            SideBetKind::Insurance => paytable.insurance_payout_info(),
            SideBetKind::PerfectPairs => paytable.perfect_pairs.payout_info(),
            SideBetKind::Poker => paytable.poker.payout_info(),
            SideBetKind::LuckyLadies => paytable.lucky_ladies.payout_info(),
        }
    }

    /// Payout multiplier for this bet, or `None` when the cards needed to
    /// settle it are missing.
    fn multiplier(&self, player_cards: &[Card], dealer_cards: &[Card], paytable: &Paytable) -> Option<u32> {
        let multiplier = match self {
            SideBetKind::Insurance => {
                if dealer_has_blackjack(dealer_cards) {
                    paytable.insurance
                } else {
                    0
                }
            }
            SideBetKind::PerfectPairs => paytable
                .perfect_pairs
                .multiplier(classify_perfect_pair(player_cards)),
            SideBetKind::Poker => {
                let up_card = dealer_cards.first()?;
                paytable
                    .poker
                    .multiplier(classify_poker_hand(player_cards, up_card))
            }
            SideBetKind::LuckyLadies => paytable.lucky_ladies.multiplier(classify_lucky_ladies(
                player_cards,
                dealer_has_blackjack(dealer_cards),
            )),
        };
        Some(multiplier)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SideBet {
    pub id: SideBetKind,
    pub name: String,
    pub description: String,
    pub amount: i64,
    pub is_available: bool,
    pub max_bet: i64,
    pub payout_info: Vec<String>,
}

impl SideBet {
    pub fn new(kind: SideBetKind, config: &TableConfig) -> Self {
        // Insurance is offered by the UI only when the dealer shows an ace.
        let (is_available, max_bet) = match kind {
            SideBetKind::Insurance => (false, 0),
            _ => (true, config.side_bet_max_bet),
        };
        Self {
            id: kind,
            name: kind.name().to_string(),
            description: kind.description().to_string(),
            amount: 0,
            is_available,
            max_bet,
            payout_info: kind.payout_info(&config.paytable),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SideBets {
    pub insurance: SideBet,
    pub perfect_pairs: SideBet,
    pub poker: SideBet,
    pub lucky_ladies: SideBet,
}

impl SideBets {
    pub fn new(config: &TableConfig) -> Self {
        Self {
            insurance: SideBet::new(SideBetKind::Insurance, config),
            perfect_pairs: SideBet::new(SideBetKind::PerfectPairs, config),
            poker: SideBet::new(SideBetKind::Poker, config),
            lucky_ladies: SideBet::new(SideBetKind::LuckyLadies, config),
        }
    }

    pub fn get(&self, kind: SideBetKind) -> &SideBet {
        match kind {
            SideBetKind::Insurance => &self.insurance,
            SideBetKind::PerfectPairs => &self.perfect_pairs,
            SideBetKind::Poker => &self.poker,
            SideBetKind::LuckyLadies => &self.lucky_ladies,
        }
    }

    pub fn get_mut(&mut self, kind: SideBetKind) -> &mut SideBet {
        match kind {
            SideBetKind::Insurance => &mut self.insurance,
            SideBetKind::PerfectPairs => &mut self.perfect_pairs,
            SideBetKind::Poker => &mut self.poker,
            SideBetKind::LuckyLadies => &mut self.lucky_ladies,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &SideBet> {
        SideBetKind::ALL.into_iter().map(|kind| self.get(kind))
    }

    pub fn total_wagered(&self) -> i64 {
        self.iter().fold(0, |total: i64, bet| total.saturating_add(bet.amount))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum BetResult {
    Won,
    Lost,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SideBetHistory {
    /// Travels as the display name (`"21+3"`), which the history panel shows.
    #[serde(with = "display_name")]
    #[schemars(with = "String")]
    pub bet_type: SideBetKind,
    pub amount: i64,
    pub result: BetResult,
    pub payout: i64,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
}

mod display_name {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::SideBetKind;

    pub fn serialize<S: Serializer>(kind: &SideBetKind, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(kind.name())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<SideBetKind, D::Error> {
        let name = String::deserialize(deserializer)?;
        SideBetKind::from_name(&name).ok_or_else(|| D::Error::custom(format!("unknown side bet: {name}")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SideBetState {
    pub bets: SideBets,
    /// Newest first
    pub history: Vec<SideBetHistory>,
    pub show_side_bets: bool,
}

impl Default for SideBetState {
    fn default() -> Self {
        Self::new(&TableConfig::default())
    }
}

impl SideBetState {
    pub fn new(config: &TableConfig) -> Self {
        Self {
            bets: SideBets::new(config),
            history: Vec::new(),
            show_side_bets: false,
        }
    }

    pub fn place_bet(mut self, kind: SideBetKind, amount: i64) -> Self {
        let bet = self.bets.get_mut(kind);
        bet.amount = bet.amount.saturating_add(amount);
        self
    }

    pub fn clear_bet(mut self, kind: SideBetKind) -> Self {
        self.bets.get_mut(kind).amount = 0;
        self
    }

    pub fn set_availability(mut self, kind: SideBetKind, is_available: bool) -> Self {
        self.bets.get_mut(kind).is_available = is_available;
        self
    }

    pub fn toggle_side_bets(self) -> Self {
        Self {
            show_side_bets: !self.show_side_bets,
            ..self
        }
    }

    /// Settles every side bet with a positive amount.
    ///
    /// A bet whose cards are missing (21+3 without a dealer card) is skipped
    /// and leaves no history entry. Every amount is zeroed afterwards, active
    /// or not. Returns the next state and this round's entries in evaluation
    /// order.
    pub fn evaluate(
        mut self,
        player_cards: &[Card],
        dealer_cards: &[Card],
        paytable: &Paytable,
        history_limit: usize,
        timestamp: i64,
    ) -> (Self, Vec<SideBetHistory>) {
        let mut round = Vec::new();

        for kind in SideBetKind::ALL {
            let amount = self.bets.get(kind).amount;
            if amount <= 0 {
                continue;
            }
            let Some(multiplier) = kind.multiplier(player_cards, dealer_cards, paytable) else {
                log::warn!("{} skipped: no dealer up-card", kind.name());
                continue;
            };

            let result = if multiplier > 0 {
                BetResult::Won
            } else {
                BetResult::Lost
            };
            round.push(SideBetHistory {
                bet_type: kind,
                amount,
                result,
                payout: amount.saturating_mul(i64::from(multiplier)),
                timestamp,
            });
        }

        for kind in SideBetKind::ALL {
            self.bets.get_mut(kind).amount = 0;
        }

        let mut history = round.clone();
        history.extend(self.history);
        history.truncate(history_limit);
        self.history = history;

        (self, round)
    }
}

/// Observable side-bet state.
pub struct SideBetStore {
    store: Store<SideBetState>,
    initial: SideBetState,
    paytable: Paytable,
    history_limit: usize,
    clock: Box<dyn Clock>,
}

impl Default for SideBetStore {
    fn default() -> Self {
        Self::new(&TableConfig::default())
    }
}

impl SideBetStore {
    pub fn new(config: &TableConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }

    pub fn with_clock(config: &TableConfig, clock: impl Clock + 'static) -> Self {
        let initial = SideBetState::new(config);
        Self {
            store: Store::new(initial.clone()),
            initial,
            paytable: config.paytable,
            history_limit: config.history_limit,
            clock: Box::new(clock),
        }
    }

    pub fn state(&self) -> &SideBetState {
        self.store.get()
    }

    pub fn store(&self) -> &Store<SideBetState> {
        &self.store
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&SideBetState) + 'static) -> SubscriptionId {
        self.store.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    pub fn set(&mut self, state: SideBetState) {
        self.store.set(state);
    }

    pub fn update(&mut self, f: impl FnOnce(SideBetState) -> SideBetState) {
        self.store.update(f);
    }

    pub fn reset(&mut self) {
        self.store.set(self.initial.clone());
    }

    pub fn toggle_side_bets(&mut self) {
        self.store.update(SideBetState::toggle_side_bets);
    }

    /// Adds to a side bet. Availability and the table maximum are advisory
    /// here; the UI enforces them.
    pub fn place_bet(&mut self, kind: SideBetKind, amount: i64) {
        let bet = self.state().bets.get(kind);
        if !bet.is_available {
            log::warn!("{} is not available, placing {amount} anyway", bet.name);
        } else if bet.amount.saturating_add(amount) > bet.max_bet {
            log::warn!(
                "{} of {} exceeds the {} maximum",
                bet.name,
                bet.amount.saturating_add(amount),
                bet.max_bet
            );
        }
        log::debug!("side bet {} +{amount}", kind.name());
        self.store.update(|s| s.place_bet(kind, amount));
    }

    pub fn clear_bet(&mut self, kind: SideBetKind) {
        log::debug!("clear side bet {}", kind.name());
        self.store.update(|s| s.clear_bet(kind));
    }

    pub fn set_availability(&mut self, kind: SideBetKind, is_available: bool) {
        log::debug!("{} available={is_available}", kind.name());
        self.store.update(|s| s.set_availability(kind, is_available));
    }

    /// Settles all active side bets against the dealt cards in one update.
    ///
    /// `_main_bet` is accepted for payout rules keyed on the main wager; no
    /// current side bet uses it.
    pub fn evaluate_bets(
        &mut self,
        player_cards: &[Card],
        dealer_cards: &[Card],
        _main_bet: i64,
    ) -> Vec<SideBetHistory> {
        let paytable = self.paytable;
        let history_limit = self.history_limit;
        let timestamp = self.clock.now_millis();

        let mut round = Vec::new();
        self.store.update(|state| {
            let (next, entries) =
                state.evaluate(player_cards, dealer_cards, &paytable, history_limit, timestamp);
            round = entries;
            next
        });

        for entry in &round {
            log::info!(
                "{} {:?}: wagered {}, paid {}",
                entry.bet_type.name(),
                entry.result,
                entry.amount,
                entry.payout
            );
        }
        round
    }
}
