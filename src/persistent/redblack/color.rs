//! The four-valued color algebra of the red-black tree.
//!
//! Besides the classic `Red` and `Black`, deletion needs two transient
//! colors:
//!
//! - `DoubleBlack`: a subtree that is one black node short
//! - `NegativeBlack`: an overshoot produced while a double-black is absorbed
//!
//! Neither transient color is ever visible on a tree returned from a public
//! operation.

use std::fmt;

/// The color of a red-black tree node.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Color {
    /// A red node.
    Red,
    /// A black node.
    Black,
    /// A black node carrying an extra unit of blackness (deletion only).
    DoubleBlack,
    /// A node one unit redder than red (deletion only).
    NegativeBlack,
}

impl Color {
    /// Adds one unit of blackness.
    ///
    /// # Panics
    ///
    /// Panics on `DoubleBlack`: there is no color blacker than double-black,
    /// and reaching it means the rebalancing logic is broken.
    #[must_use]
    pub fn blacker(self) -> Self {
        match self {
            Self::NegativeBlack => Self::Red,
            Self::Red => Self::Black,
            Self::Black => Self::DoubleBlack,
            Self::DoubleBlack => {
                tracing::error!(color = %self, "blacker applied to a double-black color");
                panic!("cannot make DoubleBlack blacker")
            }
        }
    }

    /// Removes one unit of blackness.
    ///
    /// # Panics
    ///
    /// Panics on `NegativeBlack`: there is no color redder than
    /// negative-black, and reaching it means the rebalancing logic is broken.
    #[must_use]
    pub fn redder(self) -> Self {
        match self {
            Self::DoubleBlack => Self::Black,
            Self::Black => Self::Red,
            Self::Red => Self::NegativeBlack,
            Self::NegativeBlack => {
                tracing::error!(color = %self, "redder applied to a negative-black color");
                panic!("cannot make NegativeBlack redder")
            }
        }
    }

    /// Returns `true` for the colors that may appear in a finished tree.
    #[inline]
    #[must_use]
    pub const fn is_stable(self) -> bool {
        matches!(self, Self::Red | Self::Black)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Self::Red => "R",
            Self::Black => "B",
            Self::DoubleBlack => "BB",
            Self::NegativeBlack => "NB",
        };
        formatter.write_str(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Color::NegativeBlack, Color::Red)]
    #[case(Color::Red, Color::Black)]
    #[case(Color::Black, Color::DoubleBlack)]
    fn test_blacker(#[case] color: Color, #[case] expected: Color) {
        assert_eq!(color.blacker(), expected);
    }

    #[rstest]
    #[case(Color::DoubleBlack, Color::Black)]
    #[case(Color::Black, Color::Red)]
    #[case(Color::Red, Color::NegativeBlack)]
    fn test_redder(#[case] color: Color, #[case] expected: Color) {
        assert_eq!(color.redder(), expected);
    }

    #[rstest]
    #[case(Color::Red)]
    #[case(Color::Black)]
    fn test_redder_undoes_blacker(#[case] color: Color) {
        assert_eq!(color.blacker().redder(), color);
    }

    #[rstest]
    #[should_panic(expected = "cannot make DoubleBlack blacker")]
    fn test_blacker_double_black_is_fatal() {
        let _ = Color::DoubleBlack.blacker();
    }

    #[rstest]
    #[should_panic(expected = "cannot make NegativeBlack redder")]
    fn test_redder_negative_black_is_fatal() {
        let _ = Color::NegativeBlack.redder();
    }

    #[rstest]
    fn test_display_tags() {
        let tags: Vec<String> = [
            Color::Red,
            Color::Black,
            Color::DoubleBlack,
            Color::NegativeBlack,
        ]
        .iter()
        .map(ToString::to_string)
        .collect();
        assert_eq!(tags, vec!["R", "B", "BB", "NB"]);
    }

    #[rstest]
    fn test_is_stable() {
        assert!(Color::Red.is_stable());
        assert!(Color::Black.is_stable());
        assert!(!Color::DoubleBlack.is_stable());
        assert!(!Color::NegativeBlack.is_stable());
    }
}
