// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-widget dwell timer.

use kurbo::{Point, Rect};

use crate::config::TooltipConfig;
use crate::queue::{Tooltip, TooltipSender};

/// What the timer needs to know about its widget on a given frame.
#[derive(Copy, Clone, Debug)]
pub struct DwellTarget<'a> {
    /// The widget's bounds in screen coordinates.
    pub rect: Rect,
    /// Hidden widgets neither count ticks nor show tooltips.
    pub visible: bool,
    /// Whether the pointer is over the widget.
    pub hovered: bool,
    /// Whether the widget holds keyboard focus.
    pub focused: bool,
    /// The tooltip text, if the widget has one.
    pub text: Option<&'a str>,
}

/// Counts how long a widget has been hovered or focused and enqueues its
/// tooltip once the dwell delay has elapsed.
///
/// Ticks advance by at most one per [`update`](Self::update) call, when at least
/// [`tick_interval_ms`](TooltipConfig::tick_interval_ms) has passed since the
/// previous tick. While the dwell condition holds, one tooltip is enqueued per
/// update.
#[derive(Clone, Debug)]
pub struct TooltipTimer {
    config: TooltipConfig,
    ticks: u32,
    last_tick_ms: Option<u64>,
}

impl Default for TooltipTimer {
    fn default() -> Self {
        Self::new(TooltipConfig::default())
    }
}

impl TooltipTimer {
    /// Create a timer with the given configuration.
    pub fn new(config: TooltipConfig) -> Self {
        Self {
            config,
            ticks: 0,
            last_tick_ms: None,
        }
    }

    /// The timer's configuration.
    pub fn config(&self) -> &TooltipConfig {
        &self.config
    }

    /// Ticks of continuous dwell counted so far.
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Forget accumulated dwell.
    pub fn reset(&mut self) {
        self.ticks = 0;
    }

    /// Advance the clock to `now_ms` and enqueue the tooltip if it is due.
    ///
    /// Hovered widgets place the tooltip at `pointer`; focused ones place it below
    /// the widget, shifted by [`focus_offset`](TooltipConfig::focus_offset).
    /// Returns `true` if a tooltip was enqueued.
    pub fn update(
        &mut self,
        now_ms: u64,
        target: &DwellTarget<'_>,
        pointer: Point,
        sender: &TooltipSender,
    ) -> bool {
        if !target.visible {
            return false;
        }
        let Some(text) = target.text else {
            return false;
        };

        match self.last_tick_ms {
            Some(last) if now_ms.saturating_sub(last) >= self.config.tick_interval_ms => {
                self.ticks = self.ticks.saturating_add(1);
                self.last_tick_ms = Some(now_ms);
            }
            Some(_) => {}
            None => self.last_tick_ms = Some(now_ms),
        }

        if !target.hovered && !target.focused {
            self.ticks = 0;
        }

        if text.is_empty() || self.ticks < self.config.dwell_ticks {
            return false;
        }

        let position = if target.hovered {
            pointer
        } else {
            let rect = target.rect.abs();
            Point::new(rect.x0, rect.y1) + self.config.focus_offset
        };
        let wrap_width = self.config.wrap_width(target.rect.width().abs());
        sender.queue(Tooltip::new(position, text, wrap_width))
    }
}
