// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The clip-region and scale-factor stacks.

use alloc::vec::Vec;
use kurbo::{Rect, Size, TranslateScale};

use crate::guard::{ClipGuard, ScaleGuard};
use crate::scissor::{ScissorBox, ScissorSink};

/// Stack of nested clip regions plus the render scale factors active for them.
///
/// Regions are in logical (unscaled) screen coordinates with a top-left origin.
/// Each region keeps the scale factor that was active when it was pushed and is
/// converted to physical pixels with that factor. Pushes and pops must be
/// strictly nested; prefer [`ClipStack::clip`] and
/// [`ClipStack::scaled`], which pop automatically.
#[derive(Clone, Debug, Default)]
pub struct ClipStack {
    regions: Vec<(Rect, f64)>,
    scales: Vec<f64>,
}

impl ClipStack {
    /// Create an empty stack: no clipping, scale factor `1.0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the scale factor for the current render pass.
    pub fn push_scale_factor(&mut self, factor: f64) {
        debug_assert!(
            factor.is_finite() && factor > 0.0,
            "scale factor must be positive and finite"
        );
        self.scales.push(factor);
    }

    /// Restore the previous scale factor. Returns the popped factor.
    pub fn pop_scale_factor(&mut self) -> Option<f64> {
        let popped = self.scales.pop();
        debug_assert!(popped.is_some(), "pop_scale_factor on an empty stack");
        if popped.is_none() {
            tracing::warn!("pop_scale_factor called with no scale factor pushed");
        }
        popped
    }

    /// The active scale factor, or `1.0` when none is pushed.
    pub fn scale_factor(&self) -> f64 {
        self.scales.last().copied().unwrap_or(1.0)
    }

    /// Push `rect` intersected with the current region and return the effective region.
    ///
    /// With an empty stack `rect` is pushed unchanged. A child that lies outside its
    /// parent collapses to an empty region anchored at the parent's origin, so the
    /// pushed region is always contained in its parent. The current scale factor
    /// is recorded with the region.
    pub fn push_region(&mut self, rect: Rect) -> Rect {
        let rect = rect.abs();
        let effective = match self.current() {
            Some(parent) => clip_to(parent, rect),
            None => rect,
        };
        self.regions.push((effective, self.scale_factor()));
        effective
    }

    /// Remove the top region, restoring its parent as the active region.
    pub fn pop_region(&mut self) -> Option<Rect> {
        let popped = self.regions.pop().map(|(rect, _)| rect);
        debug_assert!(popped.is_some(), "pop_region on an empty clip stack");
        if popped.is_none() {
            tracing::warn!("pop_region called with no clip region pushed");
        }
        popped
    }

    /// The active region, if any.
    pub fn current(&self) -> Option<Rect> {
        self.regions.last().map(|&(rect, _)| rect)
    }

    /// The scale factor the active region was pushed under.
    pub fn current_scale(&self) -> Option<f64> {
        self.regions.last().map(|&(_, scale)| scale)
    }

    /// Number of pushed regions.
    pub fn depth(&self) -> usize {
        self.regions.len()
    }

    /// Number of pushed scale factors.
    pub fn scale_depth(&self) -> usize {
        self.scales.len()
    }

    /// Returns `true` when nothing of `rect` would be visible in the active region.
    ///
    /// Widgets use this to skip drawing fully hidden children; the skip does not
    /// change the stack.
    pub fn is_clipped_out(&self, rect: Rect) -> bool {
        match self.current() {
            Some(region) => region.intersect(rect.abs()).is_zero_area(),
            None => false,
        }
    }

    /// Push `rect` and return a guard that pops it when dropped.
    pub fn clip(&mut self, rect: Rect) -> ClipGuard<'_> {
        self.push_region(rect);
        ClipGuard::new(self)
    }

    /// Push a scale factor and return a guard that pops it when dropped.
    pub fn scaled(&mut self, factor: f64) -> ScaleGuard<'_> {
        self.push_scale_factor(factor);
        ScaleGuard::new(self)
    }

    /// Run `f` with `rect` pushed; the region is popped however `f` exits.
    pub fn with_region<R>(&mut self, rect: Rect, f: impl FnOnce(&mut Self) -> R) -> R {
        let mut guard = self.clip(rect);
        f(&mut *guard)
    }

    /// Convert a logical rect to a physical scissor box at the current scale factor.
    ///
    /// Physical boxes use integer framebuffer pixels with a bottom-left origin, as
    /// scissor tests on most GPU APIs expect. Edges are rounded outward.
    pub fn to_physical(&self, rect: Rect, framebuffer_height: u32) -> ScissorBox {
        physical(rect, self.scale_factor(), framebuffer_height)
    }

    /// The active region as a physical scissor box, scaled by the factor it was
    /// pushed under. `None` when nothing is clipped.
    pub fn scissor(&self, framebuffer_height: u32) -> Option<ScissorBox> {
        self.regions
            .last()
            .map(|&(rect, scale)| physical(rect, scale, framebuffer_height))
    }

    /// Hand the active region (or "unclipped") to `sink`.
    pub fn apply<S>(&self, sink: &mut S, framebuffer_height: u32)
    where
        S: ScissorSink + ?Sized,
    {
        sink.set_scissor(self.scissor(framebuffer_height));
    }
}

fn physical(rect: Rect, scale: f64, framebuffer_height: u32) -> ScissorBox {
    let scaled = (TranslateScale::scale(scale) * rect.abs()).expand();
    let height = f64::from(framebuffer_height);
    ScissorBox::from_edges(
        scaled.x0,
        height - scaled.y1,
        scaled.width(),
        scaled.height(),
    )
}

fn clip_to(parent: Rect, child: Rect) -> Rect {
    let clipped = parent.intersect(child);
    if clipped.is_zero_area() && !contains(parent, clipped) {
        Rect::from_origin_size(parent.origin(), Size::ZERO)
    } else {
        clipped
    }
}

fn contains(outer: Rect, inner: Rect) -> bool {
    inner.x0 >= outer.x0 && inner.y0 >= outer.y0 && inner.x1 <= outer.x1 && inner.y1 <= outer.y1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_stack_pushes_unmodified() {
        let mut stack = ClipStack::new();
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(stack.push_region(r), r);
        assert_eq!(stack.current(), Some(r));
        assert_eq!(stack.pop_region(), Some(r));
        assert_eq!(stack.current(), None);
    }

    #[test]
    fn nested_regions_intersect() {
        let mut stack = ClipStack::new();
        let parent = Rect::new(0.0, 0.0, 100.0, 100.0);
        stack.push_region(parent);
        let child = stack.push_region(Rect::new(50.0, -20.0, 150.0, 60.0));
        assert_eq!(child, Rect::new(50.0, 0.0, 100.0, 60.0));
        assert!(contains(parent, child));
        stack.pop_region();
        assert_eq!(stack.current(), Some(parent));
    }

    #[test]
    fn disjoint_child_collapses_inside_parent() {
        let mut stack = ClipStack::new();
        let parent = Rect::new(0.0, 0.0, 100.0, 100.0);
        stack.push_region(parent);
        let child = stack.push_region(Rect::new(200.0, 200.0, 300.0, 300.0));
        assert!(child.is_zero_area());
        assert!(contains(parent, child));
        assert!(stack.is_clipped_out(Rect::new(0.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn shrink_is_monotonic_through_depth() {
        let mut stack = ClipStack::new();
        let mut previous: Option<Rect> = None;
        for i in 0..16 {
            let offset = f64::from(i) * 7.0;
            let region = stack.push_region(Rect::new(offset, offset * 0.5, 240.0 - offset, 200.0));
            if let Some(parent) = previous {
                assert!(contains(parent, region), "{region:?} escapes {parent:?}");
            }
            previous = Some(region);
        }
        for _ in 0..16 {
            stack.pop_region();
        }
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn scale_factor_defaults_and_restores() {
        let mut stack = ClipStack::new();
        assert_eq!(stack.scale_factor(), 1.0);
        stack.push_scale_factor(2.0);
        stack.push_scale_factor(3.0);
        assert_eq!(stack.scale_factor(), 3.0);
        assert_eq!(stack.pop_scale_factor(), Some(3.0));
        assert_eq!(stack.scale_factor(), 2.0);
        stack.pop_scale_factor();
        assert_eq!(stack.scale_factor(), 1.0);
    }

    #[test]
    fn physical_conversion_flips_and_rounds_outward() {
        let mut stack = ClipStack::new();
        stack.push_scale_factor(1.5);
        let scissor = stack.to_physical(Rect::new(1.0, 1.0, 11.0, 11.0), 100);
        // 1.5..16.5 expands to 1..17 on both axes.
        assert_eq!(scissor, ScissorBox::new(1, 100 - 17, 16, 16));
    }

    #[test]
    fn region_keeps_the_scale_it_was_pushed_under() {
        let mut stack = ClipStack::new();
        stack.push_scale_factor(2.0);
        stack.push_region(Rect::new(0.0, 0.0, 10.0, 10.0));
        let before = stack.scissor(100);
        assert_eq!(before, Some(ScissorBox::new(0, 80, 20, 20)));

        stack.push_scale_factor(3.0);
        assert_eq!(stack.current_scale(), Some(2.0));
        assert_eq!(stack.scissor(100), before);

        // A region pushed under the new factor uses it.
        stack.push_region(Rect::new(0.0, 0.0, 5.0, 5.0));
        assert_eq!(stack.scissor(100), Some(ScissorBox::new(0, 85, 15, 15)));
        stack.pop_region();
        stack.pop_scale_factor();
        assert_eq!(stack.scissor(100), before);
    }

    #[test]
    fn clipped_out_is_false_without_regions() {
        let stack = ClipStack::new();
        assert!(!stack.is_clipped_out(Rect::new(-10.0, -10.0, 0.0, 0.0)));
    }
}
