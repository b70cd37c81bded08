// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};
use thicket_focus::FocusFlags;

use crate::surface::Color;
use crate::widget::{RenderCx, Widget, WidgetState};

/// Height of a separator line's bounding box.
pub const SEPARATOR_HEIGHT: f64 = 9.0;

/// A horizontal rule, optionally with a centred title.
///
/// Separators are decoration: keyboard navigation skips them unless they carry
/// a tooltip worth reading.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Separator {
    title: Option<String>,
    tooltip: Option<String>,
}

impl Separator {
    /// A plain rule.
    pub fn new() -> Self {
        Self::default()
    }

    /// A rule interrupted by `title`.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            tooltip: None,
        }
    }

    /// Attach a tooltip, which also makes the separator focusable.
    #[must_use]
    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    /// The title, if any.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Replace or clear the title.
    pub fn set_title(&mut self, title: Option<String>) {
        self.title = title;
    }
}

impl Widget for Separator {
    fn render(&mut self, cx: &mut RenderCx<'_>, state: &WidgetState) {
        let rect = state.rect;
        let line = |x0: f64, x1: f64| Rect::new(x0, rect.y0 + 4.0, x1, rect.y0 + 6.0);
        match &self.title {
            Some(title) => {
                let title_width = cx.surface.text_width(title);
                let title_x = (rect.center().x - title_width / 2.0).floor();
                if rect.width() > title_width {
                    cx.surface.fill_rect(line(rect.x0, title_x - 5.0), Color::TEXT);
                    cx.surface
                        .fill_rect(line(title_x + title_width + 5.0, rect.x1), Color::TEXT);
                }
                cx.surface
                    .draw_text(title, Point::new(title_x, rect.y0), Color::WHITE.argb(), true);
            }
            None => cx.surface.fill_rect(line(rect.x0, rect.x1), Color::TEXT),
        }
    }

    fn focus_flags(&self) -> FocusFlags {
        if self.tooltip.is_some() {
            FocusFlags::default()
        } else {
            FocusFlags::default() | FocusFlags::POINTER_ONLY
        }
    }

    fn tooltip(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use thicket_clip::ClipStack;
    use thicket_focus::{FocusNode, FocusTree};

    use super::*;
    use crate::surface::testing::RecordingSurface;

    #[test]
    fn focusable_only_with_tooltip() {
        assert!(Separator::new().focus_flags().requires_pointer());
        assert!(!Separator::titled("Video").with_tooltip("Display settings").focus_flags().requires_pointer());
    }

    #[test]
    fn titled_rule_leaves_gap_for_title() {
        let mut tree = FocusTree::new();
        let state = WidgetState {
            id: tree.insert(None, FocusNode::leaf(Rect::ZERO)),
            rect: Rect::new(0.0, 0.0, 200.0, SEPARATOR_HEIGHT),
            focused: false,
            hovered: false,
        };
        let mut surface = RecordingSurface::default();
        let mut clip = ClipStack::new();
        let mut cx = RenderCx::new(&mut surface, &mut clip, 100, Point::ZERO, 0.0);
        Separator::titled("Audio").render(&mut cx, &state);
        // "Audio" is 30 wide, centred on 100.
        assert_eq!(surface.text_at("Audio"), Some(Point::new(85.0, 0.0)));
        assert_eq!(surface.fills[0].0, Rect::new(0.0, 4.0, 80.0, 6.0));
        assert_eq!(surface.fills[1].0, Rect::new(120.0, 4.0, 200.0, 6.0));
    }
}
