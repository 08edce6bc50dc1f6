use crate::Card;

/// Calculate the value of a blackjack hand
///
/// Totals past `u8::MAX` saturate there. Only a hand of two dozen or more
/// cards can get that far, and it is busted either way.
pub fn calculate_hand_value(cards: &[Card]) -> u8 {
    let mut total: u16 = 0;
    let mut aces = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        total = total.saturating_add(u16::from(card.value()));
    }

    // Adjust for aces
    while total > 21 && aces > 0 {
        total -= 10; // Count ace as 1 instead of 11
        aces -= 1;
    }

    u8::try_from(total).unwrap_or(u8::MAX)
}

/// Check if a hand is busted
pub fn is_busted(cards: &[Card]) -> bool {
    calculate_hand_value(cards) > 21
}

/// Check if a hand is blackjack (21 with 2 cards)
pub fn is_blackjack(cards: &[Card]) -> bool {
    cards.len() == 2 && calculate_hand_value(cards) == 21
}

/// Check if two cards can be split (same rank)
pub fn can_split_cards(card1: &Card, card2: &Card) -> bool {
    card1.rank == card2.rank
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Rank, Suit};

    fn card(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    #[test]
    fn test_calculate_hand_value_empty() {
        assert_eq!(calculate_hand_value(&[]), 0);
    }

    #[test]
    fn test_calculate_hand_value_simple() {
        let cards = vec![card(Rank::Two, Suit::Hearts), card(Rank::Three, Suit::Spades)];
        assert_eq!(calculate_hand_value(&cards), 5);
    }

    #[test]
    fn test_calculate_hand_value_with_face_cards() {
        let cards = vec![card(Rank::King, Suit::Hearts), card(Rank::Queen, Suit::Spades)];
        assert_eq!(calculate_hand_value(&cards), 20);
    }

    #[test]
    fn test_calculate_hand_value_blackjack() {
        let cards = vec![card(Rank::Ace, Suit::Hearts), card(Rank::King, Suit::Spades)];
        assert_eq!(calculate_hand_value(&cards), 21);
    }

    #[test]
    fn test_calculate_hand_value_pair_of_aces() {
        let cards = vec![card(Rank::Ace, Suit::Hearts), card(Rank::Ace, Suit::Spades)];
        assert_eq!(calculate_hand_value(&cards), 12); // One ace demoted
    }

    #[test]
    fn test_calculate_hand_value_five_five_king() {
        let cards = vec![
            card(Rank::Five, Suit::Hearts),
            card(Rank::Five, Suit::Clubs),
            card(Rank::King, Suit::Spades),
        ];
        assert_eq!(calculate_hand_value(&cards), 20);
    }

    #[test]
    fn test_calculate_hand_value_hard_ace() {
        let cards = vec![
            card(Rank::Ace, Suit::Hearts),
            card(Rank::Six, Suit::Spades),
            card(Rank::Nine, Suit::Clubs),
        ];
        assert_eq!(calculate_hand_value(&cards), 16); // Ace as 1
    }

    #[test]
    fn test_calculate_hand_value_multiple_aces() {
        let cards = vec![
            card(Rank::Ace, Suit::Hearts),
            card(Rank::Ace, Suit::Spades),
            card(Rank::Nine, Suit::Clubs),
        ];
        assert_eq!(calculate_hand_value(&cards), 21); // One ace as 11, one as 1
    }

    #[test]
    fn test_calculate_hand_value_bust_stays_over() {
        let cards = vec![
            card(Rank::King, Suit::Hearts),
            card(Rank::Queen, Suit::Spades),
            card(Rank::Five, Suit::Clubs),
        ];
        assert_eq!(calculate_hand_value(&cards), 25);
        assert!(is_busted(&cards));
    }

    #[test]
    fn test_calculate_hand_value_saturates() {
        let cards = vec![card(Rank::King, Suit::Clubs); 30];
        assert_eq!(calculate_hand_value(&cards), u8::MAX);
        assert!(is_busted(&cards));
    }

    #[test]
    fn test_not_busted() {
        let cards = vec![card(Rank::King, Suit::Hearts), card(Rank::Queen, Suit::Spades)];
        assert!(!is_busted(&cards));
    }

    #[test]
    fn test_is_blackjack() {
        let cards = vec![card(Rank::Ace, Suit::Hearts), card(Rank::Jack, Suit::Spades)];
        assert!(is_blackjack(&cards));
    }

    #[test]
    fn test_not_blackjack_three_cards() {
        let cards = vec![
            card(Rank::Seven, Suit::Hearts),
            card(Rank::Seven, Suit::Spades),
            card(Rank::Seven, Suit::Clubs),
        ];
        assert!(!is_blackjack(&cards));
    }

    #[test]
    fn test_can_split_cards_same_rank() {
        assert!(can_split_cards(
            &card(Rank::Eight, Suit::Hearts),
            &card(Rank::Eight, Suit::Spades)
        ));
    }

    #[test]
    fn test_can_split_cards_face_cards() {
        // Equal points but different ranks
        assert!(!can_split_cards(
            &card(Rank::King, Suit::Hearts),
            &card(Rank::Queen, Suit::Spades)
        ));
    }
}
