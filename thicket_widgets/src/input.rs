// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keys, modifiers, and the key-to-navigation mapping.

use thicket_focus::{Direction, Navigation};

/// Keys the widgets react to. Hosts translate their own key codes into these.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Arrow up.
    Up,
    /// Arrow down.
    Down,
    /// Arrow left.
    Left,
    /// Arrow right.
    Right,
    /// Tab.
    Tab,
    /// Enter / Return (including keypad Enter).
    Enter,
    /// Space bar.
    Space,
    /// Backspace.
    Backspace,
    /// Forward delete.
    Delete,
    /// Home.
    Home,
    /// End.
    End,
    /// Escape.
    Escape,
    /// Any other key, by host key code.
    Other(u32),
}

bitflags::bitflags! {
    /// Modifier keys held during a key press.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Either shift key.
        const SHIFT   = 0b0001;
        /// Either control key.
        const CONTROL = 0b0010;
        /// Either alt key.
        const ALT     = 0b0100;
    }
}

/// Pointer buttons.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (usually left) button.
    Primary,
    /// Secondary (usually right) button.
    Secondary,
    /// Middle button.
    Middle,
}

/// Map a key press to a navigation request.
///
/// Arrows navigate spatially. Tab navigates sequentially forward, Shift+Tab backward.
pub fn key_navigation(key: Key, modifiers: Modifiers) -> Option<Navigation> {
    let nav = match key {
        Key::Up => Navigation::arrow(Direction::Up),
        Key::Down => Navigation::arrow(Direction::Down),
        Key::Left => Navigation::arrow(Direction::Left),
        Key::Right => Navigation::arrow(Direction::Right),
        Key::Tab => Navigation::tab(!modifiers.contains(Modifiers::SHIFT)),
        _ => return None,
    };
    Some(nav)
}
