// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawing for screen-level overlays: tooltips and list scrollbars.

use kurbo::{Point, Rect, Size};
use thicket_tooltip::Tooltip;

use crate::surface::{Border, Color, Surface};

const TOOLTIP_BACKGROUND: Color = Color(0xF010_0010);
const TOOLTIP_BORDER: Color = Color(0x5050_00FF);
const TOOLTIP_LINE_HEIGHT: f64 = 10.0;
const TOOLTIP_PADDING: f64 = 3.0;
/// Tooltips sit up and to the right of their anchor, like a cursor label.
const TOOLTIP_OFFSET: (f64, f64) = (12.0, -12.0);
const SCROLLBAR_WIDTH: f64 = 6.0;

/// Greedy word wrap. Words longer than `width` get a line of their own.
pub(crate) fn wrap_text(surface: &dyn Surface, text: &str, width: f64) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            if line.is_empty() {
                line.push_str(word);
                continue;
            }
            let candidate = format!("{line} {word}");
            if surface.text_width(&candidate) <= width {
                line = candidate;
            } else {
                lines.push(core::mem::replace(&mut line, word.to_owned()));
            }
        }
        lines.push(line);
    }
    lines
}

/// Draw `tooltip`, kept inside a screen of `screen` size.
pub(crate) fn draw_tooltip(surface: &mut dyn Surface, tooltip: &Tooltip, screen: Size) {
    let lines = wrap_text(surface, &tooltip.text, tooltip.wrap_width);
    let width = lines
        .iter()
        .map(|line| surface.text_width(line))
        .fold(0.0, f64::max);
    let height = (lines.len() as f64 * TOOLTIP_LINE_HEIGHT - 2.0).max(8.0);

    let mut x = tooltip.position.x + TOOLTIP_OFFSET.0;
    let mut y = tooltip.position.y + TOOLTIP_OFFSET.1;
    if x + width + TOOLTIP_PADDING > screen.width {
        x = (tooltip.position.x - TOOLTIP_OFFSET.0 * 2.0 - width).max(TOOLTIP_PADDING + 1.0);
    }
    y = y.clamp(
        TOOLTIP_PADDING + 1.0,
        (screen.height - height - TOOLTIP_PADDING - 1.0).max(TOOLTIP_PADDING + 1.0),
    );

    let frame = Rect::new(x, y, x + width, y + height).inflate(TOOLTIP_PADDING, TOOLTIP_PADDING);
    surface.fill_rect(frame, TOOLTIP_BACKGROUND);
    Border::new(1.0, TOOLTIP_BORDER).render(surface, frame, false);
    for (i, line) in lines.iter().enumerate() {
        let origin = Point::new(x, y + i as f64 * TOOLTIP_LINE_HEIGHT);
        surface.draw_text(line, origin, Color::WHITE.argb(), true);
    }
}

/// Draw a scrollbar along the right edge of `viewport` when content overflows.
pub(crate) fn draw_scrollbar(surface: &mut dyn Surface, viewport: Rect, offset: f64, max_scroll: f64) {
    if max_scroll <= 0.0 {
        return;
    }
    let track = Rect::new(viewport.x1 - SCROLLBAR_WIDTH, viewport.y0, viewport.x1, viewport.y1);
    let visible = viewport.height();
    let thumb_height = (visible * visible / (visible + max_scroll)).clamp(32.0, visible);
    let thumb_top = track.y0 + (visible - thumb_height) * (offset / max_scroll);
    surface.fill_rect(track, Color::BLACK);
    surface.fill_rect(
        Rect::new(track.x0, thumb_top, track.x1, thumb_top + thumb_height),
        Color(0xFF80_8080),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::testing::RecordingSurface;

    #[test]
    fn wraps_on_word_boundaries() {
        let surface = RecordingSurface::default();
        // 6 units per char: 60 fits 10 chars.
        let lines = wrap_text(&surface, "the quick brown fox\nsupercalifragilistic", 60.0);
        assert_eq!(lines, ["the quick", "brown fox", "supercalifragilistic"]);
    }

    #[test]
    fn tooltip_is_kept_on_screen() {
        let mut surface = RecordingSurface::default();
        let tooltip = Tooltip::new(Point::new(390.0, 2.0), "edge", 200.0);
        draw_tooltip(&mut surface, &tooltip, Size::new(400.0, 300.0));
        let origin = surface.text_at("edge").unwrap();
        assert!(origin.x + 24.0 <= 400.0, "tooltip overflows right edge: {origin:?}");
        assert!(origin.y >= 4.0, "tooltip overflows top edge: {origin:?}");
    }

    #[test]
    fn scrollbar_only_when_overflowing() {
        let mut surface = RecordingSurface::default();
        let viewport = Rect::new(0.0, 0.0, 100.0, 100.0);
        draw_scrollbar(&mut surface, viewport, 0.0, 0.0);
        assert!(surface.fills.is_empty());
        draw_scrollbar(&mut surface, viewport, 100.0, 100.0);
        let thumb = surface.fills[1].0;
        assert_eq!(thumb, Rect::new(94.0, 50.0, 100.0, 100.0));
    }
}
