use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Black,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    pub fn color(&self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Clubs | Suit::Spades => Color::Black,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
        }
    }
}

impl FromStr for Suit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "h" | "heart" | "hearts" | "♥" | "♡" => Ok(Suit::Hearts),
            "d" | "diamond" | "diamonds" | "♦" | "♢" => Ok(Suit::Diamonds),
            "c" | "club" | "clubs" | "♣" | "♧" => Ok(Suit::Clubs),
            "s" | "spade" | "spades" | "♠" | "♤" => Ok(Suit::Spades),
            _ => Err(Error::InvalidSuit(s.to_string())),
        }
    }
}

/// Card rank. Serialized the way the table UI spells card values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
pub enum Rank {
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "8")]
    Eight,
    #[serde(rename = "9")]
    Nine,
    #[serde(rename = "10")]
    Ten,
    #[serde(rename = "J")]
    Jack,
    #[serde(rename = "Q")]
    Queen,
    #[serde(rename = "K")]
    King,
    #[serde(rename = "A")]
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Blackjack points, with the ace counted high.
    pub fn value(&self) -> u8 {
        match self {
            Rank::Ace => 11,
            Rank::Jack | Rank::Queen | Rank::King => 10,
            other => other.order(),
        }
    }

    /// Poker ordering used for straights. Aces only rank high.
    pub fn order(&self) -> u8 {
        match self {
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten => 10,
            Rank::Jack => 11,
            Rank::Queen => 12,
            Rank::King => 13,
            Rank::Ace => 14,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

impl FromStr for Rank {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "2" => Ok(Rank::Two),
            "3" => Ok(Rank::Three),
            "4" => Ok(Rank::Four),
            "5" => Ok(Rank::Five),
            "6" => Ok(Rank::Six),
            "7" => Ok(Rank::Seven),
            "8" => Ok(Rank::Eight),
            "9" => Ok(Rank::Nine),
            "10" | "T" => Ok(Rank::Ten),
            "J" | "JACK" => Ok(Rank::Jack),
            "Q" | "QUEEN" => Ok(Rank::Queen),
            "K" | "KING" => Ok(Rank::King),
            "A" | "ACE" => Ok(Rank::Ace),
            _ => Err(Error::InvalidRank(s.to_string())),
        }
    }
}

/// A dealt card. The rank travels as `value` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Card {
    #[serde(rename = "value")]
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub fn value(&self) -> u8 {
        self.rank.value()
    }

    pub fn color(&self) -> Color {
        self.suit.color()
    }

    pub fn is_ace(&self) -> bool {
        self.rank == Rank::Ace
    }

    /// Canonical deck order: suits in `Suit::ALL` order, ace first within a suit.
    pub fn from_index(index: usize) -> Result<Self, Error> {
        if index >= 52 {
            return Err(Error::InvalidCardIndex(index));
        }
        Ok(Self::new(Rank::ALL[index % 13], Suit::ALL[index / 13]))
    }

    pub fn index(&self) -> usize {
        let suit = Suit::ALL.iter().position(|s| *s == self.suit).unwrap_or_default();
        let rank = Rank::ALL.iter().position(|r| *r == self.rank).unwrap_or_default();
        suit * 13 + rank
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.as_str(), self.suit.symbol())
    }
}

/// Parses short card spellings such as `QH`, `10♠`, `a d` or `K of clubs`.
impl FromStr for Card {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::InvalidCard(s.to_string()));
        }

        let split = if s.starts_with("10") {
            2
        } else {
            s.chars().next().map(char::len_utf8).unwrap_or_default()
        };
        let (rank, rest) = s.split_at(split);
        let rest = rest.trim();
        let suit = rest.strip_prefix("of ").unwrap_or(rest);
        if suit.is_empty() {
            return Err(Error::InvalidCard(s.to_string()));
        }

        Ok(Self::new(rank.parse()?, suit.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_values() {
        assert_eq!(Rank::Ace.value(), 11);
        assert_eq!(Rank::King.value(), 10);
        assert_eq!(Rank::Ten.value(), 10);
        assert_eq!(Rank::Seven.value(), 7);
    }

    #[test]
    fn test_rank_order_ace_high() {
        assert_eq!(Rank::Ace.order(), 14);
        assert_eq!(Rank::King.order(), 13);
        assert_eq!(Rank::Jack.order(), 11);
        assert_eq!(Rank::Two.order(), 2);
    }

    #[test]
    fn test_suit_colors() {
        assert_eq!(Suit::Hearts.color(), Color::Red);
        assert_eq!(Suit::Diamonds.color(), Color::Red);
        assert_eq!(Suit::Clubs.color(), Color::Black);
        assert_eq!(Suit::Spades.color(), Color::Black);
    }

    #[test]
    fn test_from_index_covers_deck() {
        let mut seen = std::collections::HashSet::new();
        for i in 0..52 {
            let card = Card::from_index(i).unwrap();
            assert_eq!(card.index(), i);
            assert!(seen.insert(card));
        }
        assert_eq!(Card::from_index(0).unwrap(), Card::new(Rank::Ace, Suit::Hearts));
        assert_eq!(Card::from_index(51).unwrap(), Card::new(Rank::King, Suit::Spades));
    }

    #[test]
    fn test_from_index_out_of_range() {
        assert_eq!(Card::from_index(52), Err(Error::InvalidCardIndex(52)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Card::new(Rank::Queen, Suit::Hearts).to_string(), "Q♥");
        assert_eq!(Card::new(Rank::Ten, Suit::Spades).to_string(), "10♠");
    }

    #[test]
    fn test_parse_short_forms() {
        let qh = Card::new(Rank::Queen, Suit::Hearts);
        assert_eq!("QH".parse::<Card>().unwrap(), qh);
        assert_eq!("qh".parse::<Card>().unwrap(), qh);
        assert_eq!("Q♥".parse::<Card>().unwrap(), qh);
        assert_eq!("Q of hearts".parse::<Card>().unwrap(), qh);
        assert_eq!("10♠".parse::<Card>().unwrap(), Card::new(Rank::Ten, Suit::Spades));
        assert_eq!("a d".parse::<Card>().unwrap(), Card::new(Rank::Ace, Suit::Diamonds));
    }

    #[test]
    fn test_parse_rejects_junk() {
        assert_eq!("".parse::<Card>(), Err(Error::InvalidCard(String::new())));
        assert_eq!("Q".parse::<Card>(), Err(Error::InvalidCard("Q".to_string())));
        assert!(matches!("1H".parse::<Card>(), Err(Error::InvalidRank(_))));
        assert!(matches!("QX".parse::<Card>(), Err(Error::InvalidSuit(_))));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for i in 0..52 {
            let card = Card::from_index(i).unwrap();
            assert_eq!(card.to_string().parse::<Card>().unwrap(), card);
        }
    }
}
