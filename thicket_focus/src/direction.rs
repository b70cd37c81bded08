// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation intents: directions and the tab/arrow distinction.

/// Direction of focus navigation.
///
/// Up and Left look backward in traversal order; Down and Right look forward.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Move up, or to the previous element in sequential order.
    Up,
    /// Move down, or to the next element in sequential order.
    Down,
    /// Move left relative to the current focus.
    Left,
    /// Move right relative to the current focus.
    Right,
}

impl Direction {
    /// Returns `true` for [`Direction::Up`] and [`Direction::Down`].
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }

    /// Returns `true` for [`Direction::Left`] and [`Direction::Right`].
    pub const fn is_horizontal(self) -> bool {
        !self.is_vertical()
    }

    /// Returns `true` when the direction walks children in increasing index order.
    pub const fn is_forward(self) -> bool {
        matches!(self, Self::Down | Self::Right)
    }

    /// The opposite direction.
    pub const fn reversed(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// A navigation request.
///
/// `tab` distinguishes sequential cycling (Tab / Shift+Tab) from spatial arrow
/// movement. Containers with a horizontal layout only special-case arrow moves.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Navigation {
    /// Requested direction.
    pub direction: Direction,
    /// Whether this is sequential (Tab) navigation.
    pub tab: bool,
}

impl Navigation {
    /// Sequential navigation: `forward` is Tab, otherwise Shift+Tab.
    pub const fn tab(forward: bool) -> Self {
        Self {
            direction: if forward {
                Direction::Down
            } else {
                Direction::Up
            },
            tab: true,
        }
    }

    /// Spatial navigation with an arrow key.
    pub const fn arrow(direction: Direction) -> Self {
        Self {
            direction,
            tab: false,
        }
    }

    /// Shorthand for `self.direction.is_forward()`.
    pub const fn is_forward(self) -> bool {
        self.direction.is_forward()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification() {
        assert!(Direction::Up.is_vertical());
        assert!(Direction::Left.is_horizontal());
        assert!(Direction::Down.is_forward());
        assert!(Direction::Right.is_forward());
        assert!(!Direction::Up.is_forward());
        assert!(!Direction::Left.is_forward());
        assert_eq!(Direction::Left.reversed(), Direction::Right);
    }

    #[test]
    fn tab_maps_to_vertical_sequence() {
        assert_eq!(Navigation::tab(true).direction, Direction::Down);
        assert_eq!(Navigation::tab(false).direction, Direction::Up);
        assert!(Navigation::tab(true).tab);
        assert!(!Navigation::arrow(Direction::Left).tab);
    }
}
