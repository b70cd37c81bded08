// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tooltip render queue.

use crossbeam_channel::{Receiver, Sender};
use kurbo::Point;

/// A tooltip waiting to be drawn.
///
/// Text is kept unwrapped; the renderer wraps it at [`wrap_width`](Self::wrap_width).
#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    /// Anchor point in logical screen coordinates.
    pub position: Point,
    /// Tooltip text.
    pub text: String,
    /// Maximum line width for wrapping.
    pub wrap_width: f64,
}

impl Tooltip {
    /// Create a tooltip.
    pub fn new(position: Point, text: impl Into<String>, wrap_width: f64) -> Self {
        Self {
            position,
            text: text.into(),
            wrap_width,
        }
    }

    /// Returns `true` if there is anything to draw.
    pub fn should_render(&self) -> bool {
        !self.text.is_empty()
    }
}

/// Producer handle for a [`TooltipQueue`].
#[derive(Clone, Debug)]
pub struct TooltipSender {
    tx: Sender<Tooltip>,
}

impl TooltipSender {
    /// Enqueue `tooltip` for the next drain.
    ///
    /// Returns `false` if the queue has been dropped; the tooltip is discarded.
    pub fn queue(&self, tooltip: Tooltip) -> bool {
        match self.tx.send(tooltip) {
            Ok(()) => true,
            Err(err) => {
                tracing::debug!(tooltip = ?err.0, "tooltip queue closed; dropping tooltip");
                false
            }
        }
    }
}

/// Multi-producer, single-consumer FIFO of pending tooltips.
///
/// One queue belongs to one screen. Enqueueing never blocks.
#[derive(Debug)]
pub struct TooltipQueue {
    tx: Sender<Tooltip>,
    rx: Receiver<Tooltip>,
    delayed: bool,
}

impl Default for TooltipQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl TooltipQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        let (tx, rx) = crossbeam_channel::unbounded();
        Self {
            tx,
            rx,
            delayed: false,
        }
    }

    /// A new producer handle.
    pub fn sender(&self) -> TooltipSender {
        TooltipSender {
            tx: self.tx.clone(),
        }
    }

    /// Enqueue directly, without a separate sender.
    pub fn queue(&self, tooltip: Tooltip) {
        // The queue holds its own receiver, so the channel cannot be disconnected here.
        let _ = self.tx.send(tooltip);
    }

    /// While delayed, [`render_all`](Self::render_all) leaves entries queued.
    ///
    /// Hosts that draw a second layer over the screen (for example an inventory
    /// overlay) delay the screen's drain and render the tooltips after the overlay.
    pub fn set_delayed(&mut self, delayed: bool) {
        self.delayed = delayed;
    }

    /// Whether draining is currently delayed.
    pub fn is_delayed(&self) -> bool {
        self.delayed
    }

    /// Number of pending tooltips.
    pub fn len(&self) -> usize {
        self.rx.len()
    }

    /// Returns `true` if nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }

    /// Drain pending tooltips in FIFO order, handing each one to `render`.
    ///
    /// Does nothing while delayed. Tooltips with empty text are dropped without
    /// being rendered. Returns the number of tooltips rendered.
    pub fn render_all(&mut self, mut render: impl FnMut(Tooltip)) -> usize {
        if self.delayed {
            return 0;
        }
        let mut rendered = 0;
        for tooltip in self.rx.try_iter() {
            if tooltip.should_render() {
                render(tooltip);
                rendered += 1;
            }
        }
        rendered
    }

    /// Discard every pending tooltip.
    pub fn clear(&mut self) {
        let dropped = self.rx.try_iter().count();
        if dropped > 0 {
            tracing::trace!(dropped, "cleared pending tooltips");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    fn tip(n: u32) -> Tooltip {
        Tooltip::new(Point::new(f64::from(n), 0.0), format!("tip {n}"), 200.0)
    }

    #[test]
    fn drains_in_fifo_order() {
        let mut queue = TooltipQueue::new();
        let sender = queue.sender();
        for n in 0..4 {
            assert!(sender.queue(tip(n)));
        }
        let mut order = Vec::new();
        assert_eq!(queue.render_all(|t| order.push(t.text)), 4);
        assert_eq!(order, ["tip 0", "tip 1", "tip 2", "tip 3"]);
        assert!(queue.is_empty());
    }

    #[test]
    fn delayed_queue_keeps_entries() {
        let mut queue = TooltipQueue::new();
        queue.queue(tip(1));
        queue.set_delayed(true);
        assert_eq!(queue.render_all(|_| panic!("must not render while delayed")), 0);
        assert_eq!(queue.len(), 1);
        queue.set_delayed(false);
        assert_eq!(queue.render_all(|_| {}), 1);
    }

    #[test]
    fn empty_text_is_skipped() {
        let mut queue = TooltipQueue::new();
        queue.queue(Tooltip::new(Point::ZERO, "", 200.0));
        queue.queue(tip(2));
        let mut seen = Vec::new();
        queue.render_all(|t| seen.push(t));
        assert_eq!(seen, [tip(2)]);
    }

    #[test]
    fn senders_on_other_threads() {
        let mut queue = TooltipQueue::new();
        let handles: Vec<_> = (0..4)
            .map(|n| {
                let sender = queue.sender();
                thread::spawn(move || sender.queue(tip(n)))
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap());
        }
        assert_eq!(queue.render_all(|_| {}), 4);
    }

    #[test]
    fn sender_outliving_queue_reports_closed() {
        let queue = TooltipQueue::new();
        let sender = queue.sender();
        drop(queue);
        assert!(!sender.queue(tip(0)));
    }

    #[test]
    fn clear_discards_pending() {
        let mut queue = TooltipQueue::new();
        queue.queue(tip(0));
        queue.queue(tip(1));
        queue.clear();
        assert!(queue.is_empty());
    }
}
