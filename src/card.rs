/// The attribute model: a card is described by 4 independent categorical
/// attributes (color, shape, shading, count). Cards are immutable once
/// decoded and are compared attribute by attribute, never on the raw
/// presentation strings they were captured from.

use serde::{Deserialize, Serialize};

/// Canonical card colors. The last three only appear in the colorblind
/// friendly mode of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Green,
    Purple,
    Red,
    Turquoise,
    Orange,
    Yellow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shading {
    Solid,
    Empty,
    Striped,
}

/// One card of the board. The shape is kept as the symbol identifier found
/// on the card (its domain is open, unlike color and shading), the count is
/// the number of symbols drawn on the card (1 to 3).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub color: Color,
    pub shape: String,
    pub shading: Shading,
    pub count: u8,
}

impl Card {
    pub fn new(color: Color, shape: &str, shading: Shading, count: u8) -> Self {
        Self {
            color,
            shape: shape.to_string(),
            shading,
            count,
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Color: {:?}, Shading: {:?}, Quantity: {}, Shape: {}",
            self.color, self.shading, self.count, self.shape
        )
    }
}

/// The ordered sequence of cards on the table for one solve session.
/// Card indexes (0..len) are stable for the lifetime of the session.
#[derive(Debug, Clone)]
pub struct CardPool {
    cards: Vec<Card>,
}

impl CardPool {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, index: usize) -> &Card {
        &self.cards[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}
