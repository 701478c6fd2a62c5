//! Side identity.
//!
//! Every player in a game has a unique `Colour`. `Black` is reserved for
//! Mr. X, the evading side whose position is periodically concealed. All
//! other colours are detectives.

use serde::{Deserialize, Serialize};

/// Player identity. Exactly one `Black` player (Mr. X) per game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Colour {
    Black,
    Blue,
    Green,
    Red,
    White,
    Yellow,
}

impl Colour {
    /// All colours, Mr. X first.
    pub const ALL: [Colour; 6] = [
        Colour::Black,
        Colour::Blue,
        Colour::Green,
        Colour::Red,
        Colour::White,
        Colour::Yellow,
    ];

    /// The colour Mr. X must play as.
    pub const MR_X: Colour = Colour::Black;

    /// Check if this colour is Mr. X.
    #[must_use]
    pub const fn is_mr_x(self) -> bool {
        matches!(self, Colour::Black)
    }

    /// Check if this colour is a detective.
    #[must_use]
    pub const fn is_detective(self) -> bool {
        !self.is_mr_x()
    }
}

impl std::fmt::Display for Colour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Colour::Black => "Black",
            Colour::Blue => "Blue",
            Colour::Green => "Green",
            Colour::Red => "Red",
            Colour::White => "White",
            Colour::Yellow => "Yellow",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_black_is_mr_x() {
        for colour in Colour::ALL {
            assert_eq!(colour.is_mr_x(), colour == Colour::Black);
            assert_eq!(colour.is_detective(), colour != Colour::Black);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Colour::Black.to_string(), "Black");
        assert_eq!(Colour::Yellow.to_string(), "Yellow");
    }
}
