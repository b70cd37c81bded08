// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

/// Timing and placement parameters for [`TooltipTimer`](crate::TooltipTimer).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TooltipConfig {
    /// Ticks of continuous hover or focus before a tooltip appears.
    pub dwell_ticks: u32,
    /// Wall-clock milliseconds per tick.
    pub tick_interval_ms: u64,
    /// Lower bound for the wrap width handed to the text layout.
    pub min_wrap_width: f64,
    /// Offset from the element's bottom-left corner for focus-triggered tooltips.
    pub focus_offset: Vec2,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            dwell_ticks: 45,
            tick_interval_ms: 20,
            min_wrap_width: 200.0,
            focus_offset: Vec2::new(-12.0, 16.0),
        }
    }
}

impl TooltipConfig {
    /// Override the dwell delay, in ticks.
    #[must_use]
    pub fn with_dwell_ticks(mut self, ticks: u32) -> Self {
        self.dwell_ticks = ticks;
        self
    }

    /// Override the tick length, in milliseconds.
    #[must_use]
    pub fn with_tick_interval_ms(mut self, ms: u64) -> Self {
        self.tick_interval_ms = ms;
        self
    }

    /// Override the minimum wrap width.
    #[must_use]
    pub fn with_min_wrap_width(mut self, width: f64) -> Self {
        self.min_wrap_width = width;
        self
    }

    /// Override the focus-triggered placement offset.
    #[must_use]
    pub fn with_focus_offset(mut self, offset: Vec2) -> Self {
        self.focus_offset = offset;
        self
    }

    /// Wrap width for an element of the given width: two thirds of it, but never
    /// less than [`min_wrap_width`](Self::min_wrap_width).
    pub fn wrap_width(&self, element_width: f64) -> f64 {
        (element_width * 2.0 / 3.0).floor().max(self.min_wrap_width)
    }
}
