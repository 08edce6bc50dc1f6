//! Split-hand tracking.
//!
//! A split turns the player's opening pair into two one-card hands that are
//! played in order. Scores are written back by the UI after it totals a hand.

use blackjack::{calculate_hand_value, can_split_cards, is_busted, Card};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{Store, SubscriptionId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SplitHand {
    pub cards: Vec<Card>,
    pub score: u8,
    pub done: bool,
    pub bet: i64,
}

impl SplitHand {
    pub fn new(card: Card, bet: i64) -> Self {
        Self {
            cards: vec![card],
            score: 0,
            done: false,
            bet,
        }
    }

    /// Blackjack total of the cards held, independent of `score`.
    pub fn value(&self) -> u8 {
        calculate_hand_value(&self.cards)
    }

    pub fn is_busted(&self) -> bool {
        is_busted(&self.cards)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SplitHandsState {
    pub hands: Vec<SplitHand>,
    pub current_hand_index: usize,
    pub can_split: bool,
    pub is_split: bool,
}

impl SplitHandsState {
    pub fn current_hand(&self) -> Option<&SplitHand> {
        self.hands.get(self.current_hand_index)
    }

    pub fn check_can_split(self, cards: &[Card]) -> Self {
        let can_split = match cards {
            [first, second] => can_split_cards(first, second) && !self.is_split,
            _ => false,
        };
        Self { can_split, ..self }
    }

    pub fn initialize_split(self, first: Card, second: Card, bet: i64) -> Self {
        Self {
            hands: vec![SplitHand::new(first, bet), SplitHand::new(second, bet)],
            current_hand_index: 0,
            can_split: false,
            is_split: true,
        }
    }

    pub fn add_card_to_current_hand(mut self, card: Card) -> Self {
        match self.hands.get_mut(self.current_hand_index) {
            Some(hand) => hand.cards.push(card),
            None => log::warn!("no split hand to receive {card}"),
        }
        self
    }

    pub fn update_score(mut self, index: usize, score: u8) -> Self {
        match self.hands.get_mut(index) {
            Some(hand) => hand.score = score,
            None => log::warn!("split hand {index} does not exist"),
        }
        self
    }

    /// Marks the current hand done and moves to the next unfinished hand
    /// after it, if any.
    pub fn finish_current_hand(mut self) -> Self {
        let Some(hand) = self.hands.get_mut(self.current_hand_index) else {
            log::warn!("no split hand to finish");
            return self;
        };
        hand.done = true;

        if let Some(offset) = self.hands[self.current_hand_index + 1..]
            .iter()
            .position(|hand| !hand.done)
        {
            self.current_hand_index += offset + 1;
        }
        self
    }

    pub fn all_done(&self) -> bool {
        self.hands.iter().all(|hand| hand.done)
    }

    /// Clears the split once every hand is finished.
    pub fn all_hands_done(self) -> (Self, bool) {
        if self.all_done() {
            (Self::default(), true)
        } else {
            (self, false)
        }
    }
}

/// Observable split-hand state.
#[derive(Debug, Default)]
pub struct SplitHandsStore {
    store: Store<SplitHandsState>,
}

impl SplitHandsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SplitHandsState {
        self.store.get()
    }

    pub fn store(&self) -> &Store<SplitHandsState> {
        &self.store
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&SplitHandsState) + 'static) -> SubscriptionId {
        self.store.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    pub fn set(&mut self, state: SplitHandsState) {
        self.store.set(state);
    }

    pub fn update(&mut self, f: impl FnOnce(SplitHandsState) -> SplitHandsState) {
        self.store.update(f);
    }

    pub fn reset(&mut self) {
        self.store.set(SplitHandsState::default());
    }

    pub fn check_can_split(&mut self, cards: &[Card]) -> bool {
        self.store.update(|s| s.check_can_split(cards));
        self.state().can_split
    }

    pub fn initialize_split(&mut self, first: Card, second: Card, bet: i64) {
        log::debug!("split {first} {second} at {bet} each");
        self.store
            .update(|s| s.initialize_split(first, second, bet));
    }

    pub fn add_card_to_current_hand(&mut self, card: Card) {
        log::debug!("hand {} draws {card}", self.state().current_hand_index);
        self.store.update(|s| s.add_card_to_current_hand(card));
    }

    pub fn update_score(&mut self, index: usize, score: u8) {
        self.store.update(|s| s.update_score(index, score));
    }

    pub fn finish_current_hand(&mut self) {
        log::debug!("finish hand {}", self.state().current_hand_index);
        self.store.update(SplitHandsState::finish_current_hand);
    }

    /// Resets the split when every hand is done. Returns whether it did.
    pub fn all_hands_done(&mut self) -> bool {
        let mut done = false;
        self.store.update(|s| {
            let (next, all_done) = s.all_hands_done();
            done = all_done;
            next
        });
        if done {
            log::debug!("all split hands done");
        }
        done
    }
}
