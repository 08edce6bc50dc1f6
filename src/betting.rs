//! Main-bet bookkeeping.
//!
//! Chips leave the balance when a bet is placed, so `lose` only clears the
//! bet. Amounts are never validated: a negative bet or balance is stored as-is.
//! Arithmetic saturates at the `i64` bounds.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{Store, SubscriptionId, TableConfig};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BettingState {
    pub balance: i64,
    pub current_bet: i64,
    pub can_bet: bool,
    #[serde(rename = "showBettingUI")]
    pub show_betting_ui: bool,
    pub needs_bet: bool,
}

impl Default for BettingState {
    fn default() -> Self {
        Self::with_balance(TableConfig::default().initial_balance)
    }
}

impl BettingState {
    pub fn with_balance(balance: i64) -> Self {
        Self {
            balance,
            current_bet: 0,
            can_bet: true,
            show_betting_ui: false,
            needs_bet: true,
        }
    }

    pub fn place_bet(self, amount: i64) -> Self {
        Self {
            current_bet: self.current_bet.saturating_add(amount),
            balance: self.balance.saturating_sub(amount),
            needs_bet: false,
            ..self
        }
    }

    /// Refunds the current bet.
    pub fn clear_bet(self) -> Self {
        Self {
            balance: self.balance.saturating_add(self.current_bet),
            current_bet: 0,
            needs_bet: true,
            ..self
        }
    }

    pub fn toggle_betting_ui(self) -> Self {
        Self {
            show_betting_ui: !self.show_betting_ui,
            ..self
        }
    }

    pub fn set_bet_state(self, can_bet: bool) -> Self {
        Self {
            can_bet,
            show_betting_ui: false,
            needs_bet: can_bet,
            ..self
        }
    }

    /// Pays even money: the stake comes back plus the same again.
    pub fn win(self) -> Self {
        let credit = self.current_bet.saturating_mul(2);
        self.settle(credit)
    }

    pub fn lose(self) -> Self {
        self.settle(0)
    }

    /// Tie: the stake comes back.
    pub fn push(self) -> Self {
        let credit = self.current_bet;
        self.settle(credit)
    }

    fn settle(self, credit: i64) -> Self {
        Self {
            balance: self.balance.saturating_add(credit),
            current_bet: 0,
            can_bet: true,
            needs_bet: true,
            ..self
        }
    }
}

/// Observable betting state.
#[derive(Debug)]
pub struct BettingStore {
    store: Store<BettingState>,
    initial: BettingState,
}

impl Default for BettingStore {
    fn default() -> Self {
        Self::new(&TableConfig::default())
    }
}

impl BettingStore {
    pub fn new(config: &TableConfig) -> Self {
        let initial = BettingState::with_balance(config.initial_balance);
        Self {
            store: Store::new(initial.clone()),
            initial,
        }
    }

    pub fn state(&self) -> &BettingState {
        self.store.get()
    }

    pub fn store(&self) -> &Store<BettingState> {
        &self.store
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&BettingState) + 'static) -> SubscriptionId {
        self.store.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    pub fn set(&mut self, state: BettingState) {
        self.store.set(state);
    }

    pub fn update(&mut self, f: impl FnOnce(BettingState) -> BettingState) {
        self.store.update(f);
    }

    pub fn place_bet(&mut self, amount: i64) {
        log::debug!("place bet {amount}");
        self.store.update(|s| s.place_bet(amount));
    }

    pub fn clear_bet(&mut self) {
        log::debug!("clear bet");
        self.store.update(BettingState::clear_bet);
    }

    pub fn toggle_betting_ui(&mut self) {
        self.store.update(BettingState::toggle_betting_ui);
    }

    pub fn set_bet_state(&mut self, can_bet: bool) {
        log::debug!("set bet state can_bet={can_bet}");
        self.store.update(|s| s.set_bet_state(can_bet));
    }

    pub fn win(&mut self) {
        log::debug!("main bet won: {}", self.state().current_bet);
        self.store.update(BettingState::win);
    }

    pub fn lose(&mut self) {
        log::debug!("main bet lost: {}", self.state().current_bet);
        self.store.update(BettingState::lose);
    }

    pub fn push(&mut self) {
        log::debug!("main bet pushed: {}", self.state().current_bet);
        self.store.update(BettingState::push);
    }

    pub fn reset(&mut self) {
        self.store.set(self.initial.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = BettingState::default();
        assert_eq!(state.balance, 1000);
        assert_eq!(state.current_bet, 0);
        assert!(state.can_bet);
        assert!(!state.show_betting_ui);
        assert!(state.needs_bet);
    }

    #[test]
    fn test_place_bet_moves_chips() {
        let state = BettingState::default().place_bet(50).place_bet(25);
        assert_eq!(state.balance, 925);
        assert_eq!(state.current_bet, 75);
        assert!(!state.needs_bet);
    }

    #[test]
    fn test_place_bet_can_overdraw() {
        let state = BettingState::with_balance(10).place_bet(50);
        assert_eq!(state.balance, -40);
        assert_eq!(state.current_bet, 50);
    }

    #[test]
    fn test_negative_amount_accepted() {
        let state = BettingState::default().place_bet(-20);
        assert_eq!(state.balance, 1020);
        assert_eq!(state.current_bet, -20);
    }

    #[test]
    fn test_extreme_amounts_saturate() {
        let state = BettingState::default().place_bet(i64::MIN);
        assert_eq!(state.balance, i64::MAX);
        assert_eq!(state.current_bet, i64::MIN);

        let state = BettingState::with_balance(i64::MAX - 10).place_bet(i64::MAX);
        assert_eq!(state.balance, -10);
        assert_eq!(state.current_bet, i64::MAX);
        assert_eq!(state.clone().place_bet(1).current_bet, i64::MAX);
        // 2 × MAX saturates, then the credit lands on -10
        assert_eq!(state.clone().win().balance, i64::MAX - 10);
        assert_eq!(BettingState::with_balance(i64::MIN).place_bet(1).balance, i64::MIN);
    }

    #[test]
    fn test_clear_bet_refunds() {
        let state = BettingState::default().place_bet(50).clear_bet();
        assert_eq!(state.balance, 1000);
        assert_eq!(state.current_bet, 0);
        assert!(state.needs_bet);
    }

    #[test]
    fn test_win_pays_double() {
        let state = BettingState::default().place_bet(50).win();
        assert_eq!(state.balance, 1050);
        assert_eq!(state.current_bet, 0);
        assert!(state.can_bet);
        assert!(state.needs_bet);
    }

    #[test]
    fn test_lose_forfeits() {
        let state = BettingState::default().place_bet(50).lose();
        assert_eq!(state.balance, 950);
        assert_eq!(state.current_bet, 0);
    }

    #[test]
    fn test_push_refunds() {
        let state = BettingState::default().place_bet(50).push();
        assert_eq!(state.balance, 1000);
        assert_eq!(state.current_bet, 0);
    }

    #[test]
    fn test_settlement_reenables_betting() {
        let closed = BettingState::default().place_bet(10).set_bet_state(false);
        assert!(!closed.can_bet);
        for settled in [closed.clone().win(), closed.clone().lose(), closed.push()] {
            assert!(settled.can_bet);
            assert!(settled.needs_bet);
            assert_eq!(settled.current_bet, 0);
        }
    }

    #[test]
    fn test_set_bet_state_hides_ui() {
        let state = BettingState::default().toggle_betting_ui();
        assert!(state.show_betting_ui);

        let state = state.set_bet_state(false);
        assert!(!state.can_bet);
        assert!(!state.show_betting_ui);
        assert!(!state.needs_bet);

        let state = state.set_bet_state(true);
        assert!(state.can_bet);
        assert!(state.needs_bet);
    }

    #[test]
    fn test_store_place_then_win() {
        let mut store = BettingStore::default();
        store.place_bet(50);
        assert_eq!(store.state().balance, 950);
        store.win();
        assert_eq!(store.state().balance, 1050);
        assert_eq!(store.state().current_bet, 0);
    }

    #[test]
    fn test_store_reset_uses_config_balance() {
        let config = TableConfig {
            initial_balance: 250,
            ..TableConfig::default()
        };
        let mut store = BettingStore::new(&config);
        store.place_bet(100);
        store.toggle_betting_ui();
        store.reset();
        assert_eq!(*store.state(), BettingState::with_balance(250));
    }

    #[test]
    fn test_store_json_uses_ui_names() {
        let store = BettingStore::default();
        assert_eq!(
            store.store().to_json().unwrap(),
            r#"{"balance":1000,"currentBet":0,"canBet":true,"showBettingUI":false,"needsBet":true}"#
        );
    }
}
