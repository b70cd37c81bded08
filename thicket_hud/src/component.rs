// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! HUD components.

use alloc::string::String;
use core::fmt;

use kurbo::{Point, Size};

use crate::HudId;

/// Minimal text drawing capability needed by [`TextHudComponent`].
pub trait TextPainter {
    /// Draw a single line of text with its top-left corner at `origin`.
    fn draw_text(&mut self, text: &str, origin: Point, argb: u32, shadow: bool);
}

/// One element of a [`Hud`](crate::Hud), drawn to a painter of type `S`.
pub trait HudComponent<S: ?Sized> {
    /// The component's identifier, unique within its HUD.
    fn id(&self) -> &HudId;

    /// Disabled components are neither rendered nor ticked.
    fn is_enabled(&self) -> bool;

    /// Enable or disable the component.
    fn set_enabled(&mut self, enabled: bool);

    /// Draw the component.
    fn render(&self, painter: &mut S, tick_delta: f32);

    /// Recompute placement for a new screen size.
    fn layout(&mut self, screen: Size) {
        let _ = screen;
    }

    /// Advance per-tick state. Only called when [`has_ticks`](Self::has_ticks) is `true`.
    fn tick(&mut self) {}

    /// Whether the component wants [`tick`](Self::tick) calls.
    fn has_ticks(&self) -> bool {
        false
    }

    /// Key used to look up the component's display name.
    fn translation_key(&self) -> String {
        self.id().translation_key()
    }
}

impl<S: ?Sized> fmt::Debug for dyn HudComponent<S> + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HudComponent")
            .field("id", self.id())
            .field("enabled", &self.is_enabled())
            .finish_non_exhaustive()
    }
}

/// A line of text at a fixed position.
#[derive(Clone, Debug, PartialEq)]
pub struct TextHudComponent {
    id: HudId,
    enabled: bool,
    position: Point,
    text: String,
    argb: u32,
}

impl TextHudComponent {
    /// Create an enabled, opaque white text component.
    pub fn new(id: HudId, position: Point, text: impl Into<String>) -> Self {
        Self {
            id,
            enabled: true,
            position,
            text: text.into(),
            argb: 0xFFFF_FFFF,
        }
    }

    /// Set the colour as `0xAARRGGBB`.
    #[must_use]
    pub fn with_color(mut self, argb: u32) -> Self {
        self.argb = argb;
        self
    }

    /// Current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Current colour as `0xAARRGGBB`.
    pub fn color(&self) -> u32 {
        self.argb
    }

    /// Replace the colour.
    pub fn set_color(&mut self, argb: u32) {
        self.argb = argb;
    }

    /// Top-left corner of the text.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Move the text.
    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }
}

impl<S: TextPainter + ?Sized> HudComponent<S> for TextHudComponent {
    fn id(&self) -> &HudId {
        &self.id
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn render(&self, painter: &mut S, _tick_delta: f32) {
        painter.draw_text(&self.text, self.position, self.argb, true);
    }
}
