// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Physical scissor boxes and the renderer hook that receives them.

/// A scissor rectangle in physical framebuffer pixels, bottom-left origin.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ScissorBox {
    /// Left edge.
    pub x: i32,
    /// Bottom edge, measured up from the bottom of the framebuffer.
    pub y: i32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl ScissorBox {
    /// Create a scissor box from integer pixel values.
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build from already-rounded float edges. Negative extents clamp to zero.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "inputs are integral pixel values produced by Rect::expand"
    )]
    pub(crate) fn from_edges(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x: x as i32,
            y: y as i32,
            width: width.max(0.0) as u32,
            height: height.max(0.0) as u32,
        }
    }

    /// Returns `true` if the box covers no pixels.
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Receiver for scissor updates, implemented by the rendering backend.
pub trait ScissorSink {
    /// Restrict drawing to `scissor`, or disable scissoring when `None`.
    fn set_scissor(&mut self, scissor: Option<ScissorBox>);
}
