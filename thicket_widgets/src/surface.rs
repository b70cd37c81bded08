// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host drawing surface and the small paint types built on it.

use kurbo::{Point, Rect};
use thicket_clip::ScissorSink;
use thicket_hud::TextPainter;

/// An ARGB colour packed as `0xAARRGGBB`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    /// Opaque white.
    pub const WHITE: Self = Self(0xFFFF_FFFF);
    /// Opaque black.
    pub const BLACK: Self = Self(0xFF00_0000);
    /// Default text colour.
    pub const TEXT: Self = Self(0xFFE0_E0E0);
    /// Text colour of inactive controls.
    pub const DISABLED_TEXT: Self = Self(0xFFA0_A0A0);
    /// Text colour of read-only text fields.
    pub const UNEDITABLE: Self = Self(0xFF70_7070);
    /// Neutral border grey.
    pub const BORDER: Self = Self(0xFFA0_A0A0);

    /// Pack from components.
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Unpack to `[a, r, g, b]`.
    pub const fn to_argb(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    /// The packed value.
    pub const fn argb(self) -> u32 {
        self.0
    }

    /// Replace the alpha channel with `alpha` in `0.0..=1.0`, rounding up.
    #[must_use]
    pub fn with_alpha(self, alpha: f32) -> Self {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "clamped to 0..=255 before the cast"
        )]
        let a = (alpha.clamp(0.0, 1.0) * 255.0).ceil() as u8;
        Self((self.0 & 0x00FF_FFFF) | (u32::from(a) << 24))
    }
}

/// Drawing primitives supplied by the host engine.
///
/// Coordinates are logical screen units. Clipping arrives through
/// [`ScissorSink::set_scissor`]; text through [`TextPainter::draw_text`].
pub trait Surface: ScissorSink + TextPainter {
    /// Fill `rect` with a solid colour.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Advance width of `text` in the host font.
    fn text_width(&self, text: &str) -> f64;

    /// Line height of the host font.
    fn line_height(&self) -> f64 {
        9.0
    }
}

/// Draw `text` horizontally centred on `center_x`.
pub(crate) fn draw_centered_text(
    surface: &mut dyn Surface,
    text: &str,
    center_x: f64,
    y: f64,
    color: Color,
) {
    let x = (center_x - surface.text_width(text) / 2.0).floor();
    surface.draw_text(text, Point::new(x, y), color.argb(), true);
}

/// A solid rectangular frame drawn inside a widget's bounds.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Border {
    /// Frame thickness.
    pub thickness: f64,
    /// Colour when unfocused.
    pub color: Color,
    /// Colour while the widget holds focus.
    pub focused_color: Color,
}

impl Default for Border {
    fn default() -> Self {
        Self::new(1.0, Color::from_argb(255, 192, 192, 192))
    }
}

impl Border {
    /// A border with the same colour in both states.
    pub const fn new(thickness: f64, color: Color) -> Self {
        Self {
            thickness,
            color,
            focused_color: color,
        }
    }

    /// Use a different colour while focused.
    #[must_use]
    pub const fn with_focused_color(mut self, color: Color) -> Self {
        self.focused_color = color;
        self
    }

    /// Draw the four edges of `rect`.
    pub fn render(&self, surface: &mut dyn Surface, rect: Rect, focused: bool) {
        let color = if focused {
            self.focused_color
        } else {
            self.color
        };
        let t = self.thickness;
        surface.fill_rect(Rect::new(rect.x0, rect.y0, rect.x1, rect.y0 + t), color);
        surface.fill_rect(Rect::new(rect.x1 - t, rect.y0, rect.x1, rect.y1), color);
        surface.fill_rect(Rect::new(rect.x0, rect.y1 - t, rect.x1, rect.y1), color);
        surface.fill_rect(Rect::new(rect.x0, rect.y0, rect.x0 + t, rect.y1), color);
    }
}

/// A solid fill behind a widget.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Background {
    /// Fill colour.
    pub color: Color,
}

impl Background {
    /// A background of `color`.
    pub const fn new(color: Color) -> Self {
        Self { color }
    }

    /// Fill `rect`.
    pub fn render(&self, surface: &mut dyn Surface, rect: Rect) {
        surface.fill_rect(rect, self.color);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use thicket_clip::ScissorBox;

    use super::*;

    /// A surface that records every call, with 6 units per character.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingSurface {
        pub(crate) fills: Vec<(Rect, Color)>,
        pub(crate) texts: Vec<(String, Point, u32)>,
        pub(crate) scissors: Vec<Option<ScissorBox>>,
    }

    impl RecordingSurface {
        pub(crate) fn text_at(&self, text: &str) -> Option<Point> {
            self.texts.iter().find(|t| t.0 == text).map(|t| t.1)
        }
    }

    impl ScissorSink for RecordingSurface {
        fn set_scissor(&mut self, scissor: Option<ScissorBox>) {
            self.scissors.push(scissor);
        }
    }

    impl TextPainter for RecordingSurface {
        fn draw_text(&mut self, text: &str, origin: Point, argb: u32, _shadow: bool) {
            self.texts.push((text.to_owned(), origin, argb));
        }
    }

    impl Surface for RecordingSurface {
        fn fill_rect(&mut self, rect: Rect, color: Color) {
            self.fills.push((rect, color));
        }

        fn text_width(&self, text: &str) -> f64 {
            6.0 * text.chars().count() as f64
        }
    }
}
