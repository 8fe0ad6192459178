//! One-shot reveal trackers.
//!
//! A reveal latches the first time its element crosses the visibility
//! threshold and never reverts on scroll-back. Dropping a tracker releases
//! everything it holds; there are no registered callbacks to leak.

use std::time::{Duration, Instant};

/// Fraction of an element that is currently inside the viewport.
///
/// `top` is the element's offset in document rows, `scroll` is the first
/// visible document row. Returns 0.0 when the element is fully outside.
pub fn intersection_ratio(top: usize, height: usize, scroll: usize, viewport_height: usize) -> f32 {
    if height == 0 || viewport_height == 0 {
        return 0.0;
    }
    let view_top = scroll;
    let view_bottom = scroll + viewport_height;
    let bottom = top + height;

    let visible_top = top.max(view_top);
    let visible_bottom = bottom.min(view_bottom);
    if visible_bottom <= visible_top {
        return 0.0;
    }
    (visible_bottom - visible_top) as f32 / height as f32
}

/// Single-element visibility tracker. Latches true once the intersection
/// ratio crosses the threshold and stays true forever after.
#[derive(Debug, Clone)]
pub struct Reveal {
    threshold: f32,
    visible: bool,
}

impl Reveal {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            visible: false,
        }
    }

    /// Feed the current intersection ratio. Returns the latched flag.
    pub fn observe(&mut self, ratio: f32) -> bool {
        if !self.visible && ratio >= self.threshold {
            self.visible = true;
        }
        self.visible
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// Reveals N items together; the visual stagger is a per-item render delay,
/// not separate state. `item_shown` answers whether an item's delay has
/// elapsed since the group revealed.
#[derive(Debug, Clone)]
pub struct StaggeredReveal {
    reveal: Reveal,
    count: usize,
    item_delay: Duration,
    revealed_at: Option<Instant>,
}

impl StaggeredReveal {
    pub fn new(count: usize, threshold: f32, item_delay: Duration) -> Self {
        Self {
            reveal: Reveal::new(threshold),
            count,
            item_delay,
            revealed_at: None,
        }
    }

    pub fn observe(&mut self, ratio: f32, now: Instant) {
        if self.reveal.observe(ratio) && self.revealed_at.is_none() {
            self.revealed_at = Some(now);
        }
    }

    pub fn is_visible(&self) -> bool {
        self.reveal.is_visible()
    }

    /// All flags flip together the moment the container reveals.
    pub fn flags(&self) -> Vec<bool> {
        vec![self.reveal.is_visible(); self.count]
    }

    /// Whether item `index` has finished its render delay.
    pub fn item_shown(&self, index: usize, now: Instant) -> bool {
        match self.revealed_at {
            Some(at) => now.duration_since(at) >= self.item_delay * index as u32,
            None => false,
        }
    }
}

/// Reveals N items one at a time: once the container becomes visible, one
/// additional item reveals per fixed interval, in index order, until all
/// are shown. The cursor never decreases.
#[derive(Debug, Clone)]
pub struct SequentialReveal {
    reveal: Reveal,
    total: usize,
    interval: Duration,
    revealed: usize,
    last_advance: Option<Instant>,
}

impl SequentialReveal {
    pub fn new(total: usize, threshold: f32, interval: Duration) -> Self {
        Self {
            reveal: Reveal::new(threshold),
            total,
            interval,
            revealed: 0,
            last_advance: None,
        }
    }

    pub fn observe(&mut self, ratio: f32) {
        self.reveal.observe(ratio);
    }

    /// Advance at most one step per call, gated by the interval.
    /// Does nothing until the container has been observed visible, and
    /// stops permanently once all items are revealed.
    pub fn tick(&mut self, now: Instant) {
        if !self.reveal.is_visible() || self.revealed >= self.total {
            return;
        }
        let due = match self.last_advance {
            Some(last) => now.duration_since(last) >= self.interval,
            None => true,
        };
        if due {
            self.revealed += 1;
            self.last_advance = Some(now);
        }
    }

    pub fn revealed(&self) -> usize {
        self.revealed
    }

    pub fn is_done(&self) -> bool {
        self.revealed >= self.total
    }

    pub fn flags(&self) -> Vec<bool> {
        (0..self.total).map(|i| i < self.revealed).collect()
    }
}
