// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The widget capability and the per-frame context widgets render with.

use core::any::Any;
use core::fmt;

use kurbo::{Point, Rect};
use thicket_clip::ClipStack;
use thicket_focus::{FocusFlags, Navigation, NodeId};

use crate::input::{Key, Modifiers, MouseButton};
use crate::surface::Surface;

/// Per-frame facts about a widget, computed by the [`Screen`](crate::Screen).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WidgetState {
    /// The widget's focus-tree node.
    pub id: NodeId,
    /// On-screen bounds, after list scrolling.
    pub rect: Rect,
    /// Whether the widget holds keyboard focus.
    pub focused: bool,
    /// Whether the pointer is over the visible part of the widget.
    pub hovered: bool,
}

impl WidgetState {
    /// Focused or hovered: the state in which controls highlight.
    pub fn is_highlighted(&self) -> bool {
        self.focused || self.hovered
    }
}

/// Rendering context for one frame.
pub struct RenderCx<'a> {
    /// The host surface.
    pub surface: &'a mut dyn Surface,
    clip: &'a mut ClipStack,
    framebuffer_height: u32,
    /// Pointer position in logical coordinates.
    pub pointer: Point,
    /// Partial tick since the last game tick, as reported by the host.
    pub delta: f32,
}

impl fmt::Debug for RenderCx<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderCx")
            .field("clip", &self.clip)
            .field("framebuffer_height", &self.framebuffer_height)
            .field("pointer", &self.pointer)
            .field("delta", &self.delta)
            .finish_non_exhaustive()
    }
}

impl<'a> RenderCx<'a> {
    /// Create a context over `surface` and `clip`.
    pub fn new(
        surface: &'a mut dyn Surface,
        clip: &'a mut ClipStack,
        framebuffer_height: u32,
        pointer: Point,
        delta: f32,
    ) -> Self {
        Self {
            surface,
            clip,
            framebuffer_height,
            pointer,
            delta,
        }
    }

    /// The clip stack, for visibility queries.
    pub fn clip(&self) -> &ClipStack {
        self.clip
    }

    /// Whether `point` lies inside the active clip region.
    pub fn is_visible_point(&self, point: Point) -> bool {
        self.clip.current().is_none_or(|region| region.contains(point))
    }

    /// Run `f` with drawing restricted to `rect`.
    ///
    /// The region is applied to the surface on entry and the enclosing region is
    /// restored on exit.
    pub fn with_clip<R>(&mut self, rect: Rect, f: impl FnOnce(&mut RenderCx<'_>) -> R) -> R {
        let height = self.framebuffer_height;
        let out = {
            let mut guard = self.clip.clip(rect);
            guard.apply(&mut *self.surface, height);
            let mut inner = RenderCx {
                surface: &mut *self.surface,
                clip: &mut *guard,
                framebuffer_height: height,
                pointer: self.pointer,
                delta: self.delta,
            };
            f(&mut inner)
        };
        self.clip.apply(&mut *self.surface, height);
        out
    }
}

/// A drawable, focusable control hosted by a [`Screen`](crate::Screen).
///
/// Geometry and focus live in the screen's focus tree; the widget only owns its
/// content and behavior. Widgets are `'static` so a screen can hand them back by
/// concrete type.
pub trait Widget: Any {
    /// Draw the widget.
    fn render(&mut self, cx: &mut RenderCx<'_>, state: &WidgetState);

    /// Navigation flags for the widget's node, refreshed before every navigation.
    fn focus_flags(&self) -> FocusFlags {
        FocusFlags::default()
    }

    /// Handle a click inside the widget. Return `true` if consumed.
    fn mouse_clicked(&mut self, pointer: Point, button: MouseButton, state: &WidgetState) -> bool {
        let _ = (pointer, button, state);
        false
    }

    /// Handle a non-navigation key while focused. Return `true` if consumed.
    fn key_pressed(&mut self, key: Key, modifiers: Modifiers) -> bool {
        let _ = (key, modifiers);
        false
    }

    /// Handle a typed character while focused. Return `true` if consumed.
    fn char_typed(&mut self, ch: char) -> bool {
        let _ = ch;
        false
    }

    /// Move internal focus (for example a text cursor) instead of leaving the widget.
    fn navigate_within(&mut self, nav: Navigation) -> bool {
        let _ = nav;
        false
    }

    /// Tooltip text shown after hovering or focusing the widget for a while.
    fn tooltip(&self) -> Option<&str> {
        None
    }
}

impl fmt::Debug for dyn Widget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Widget")
            .field("focus_flags", &self.focus_flags())
            .field("tooltip", &self.tooltip())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use thicket_clip::ScissorBox;

    use super::*;
    use crate::surface::testing::RecordingSurface;

    #[test]
    fn with_clip_applies_and_restores() {
        let mut surface = RecordingSurface::default();
        let mut clip = ClipStack::new();
        let mut cx = RenderCx::new(&mut surface, &mut clip, 100, Point::new(5.0, 5.0), 0.0);
        let inside = cx.with_clip(Rect::new(0.0, 0.0, 10.0, 10.0), |cx| {
            cx.with_clip(Rect::new(5.0, 5.0, 50.0, 50.0), |cx| {
                cx.is_visible_point(Point::new(7.0, 7.0)) && !cx.is_visible_point(Point::new(20.0, 7.0))
            })
        });
        assert!(inside);
        assert_eq!(cx.clip().depth(), 0);
        assert_eq!(
            surface.scissors,
            [
                Some(ScissorBox::new(0, 90, 10, 10)),
                Some(ScissorBox::new(5, 90, 5, 5)),
                Some(ScissorBox::new(0, 90, 10, 10)),
                None,
            ]
        );
    }
}
