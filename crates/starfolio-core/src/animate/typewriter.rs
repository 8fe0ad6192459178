//! Typewriter headline: types a title forward, holds, deletes it, then
//! moves to the next title and wraps around.

use std::time::{Duration, Instant};

const TYPE_INTERVAL: Duration = Duration::from_millis(100);
const DELETE_INTERVAL: Duration = Duration::from_millis(40);
const HOLD_DURATION: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Holding,
    Deleting,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    titles: &'static [&'static str],
    title_index: usize,
    /// Number of characters currently displayed.
    shown: usize,
    phase: Phase,
    last_step: Instant,
}

impl Typewriter {
    pub fn new(titles: &'static [&'static str]) -> Self {
        Self {
            titles,
            title_index: 0,
            shown: 0,
            phase: Phase::Typing,
            last_step: Instant::now(),
        }
    }

    fn current_title(&self) -> &'static str {
        self.titles[self.title_index]
    }

    /// The currently displayed prefix of the active title.
    pub fn text(&self) -> &'static str {
        let title = self.current_title();
        match title.char_indices().nth(self.shown) {
            Some((byte, _)) => &title[..byte],
            None => title,
        }
    }

    /// Advance the effect. Call once per animation tick; the per-phase
    /// intervals gate how fast characters appear and disappear.
    pub fn tick(&mut self, now: Instant) {
        if self.titles.is_empty() {
            return;
        }
        let elapsed = now.duration_since(self.last_step);
        match self.phase {
            Phase::Typing => {
                if elapsed < TYPE_INTERVAL {
                    return;
                }
                let len = self.current_title().chars().count();
                if self.shown < len {
                    self.shown += 1;
                } else {
                    self.phase = Phase::Holding;
                }
                self.last_step = now;
            }
            Phase::Holding => {
                if elapsed >= HOLD_DURATION {
                    self.phase = Phase::Deleting;
                    self.last_step = now;
                }
            }
            Phase::Deleting => {
                if elapsed < DELETE_INTERVAL {
                    return;
                }
                if self.shown > 0 {
                    self.shown -= 1;
                } else {
                    self.title_index = (self.title_index + 1) % self.titles.len();
                    self.phase = Phase::Typing;
                }
                self.last_step = now;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TITLES: [&str; 2] = ["ab", "xyz"];

    fn run_ticks(tw: &mut Typewriter, start: Instant, step: Duration, count: usize) -> Instant {
        let mut now = start;
        for _ in 0..count {
            now += step;
            tw.tick(now);
        }
        now
    }

    #[test]
    fn test_types_full_title() {
        let mut tw = Typewriter::new(&TITLES);
        let start = Instant::now();
        run_ticks(&mut tw, start, TYPE_INTERVAL, 2);
        assert_eq!(tw.text(), "ab");
    }

    #[test]
    fn test_deletes_then_advances_to_next_title() {
        let mut tw = Typewriter::new(&TITLES);
        let start = Instant::now();
        // Type both characters, then one more tick to enter the hold phase
        let now = run_ticks(&mut tw, start, TYPE_INTERVAL, 3);
        // Wait out the hold
        let now = run_ticks(&mut tw, now, HOLD_DURATION, 1);
        // Delete both characters, then one more tick to switch titles
        let now = run_ticks(&mut tw, now, DELETE_INTERVAL, 3);
        assert_eq!(tw.text(), "");
        // Now typing the second title
        run_ticks(&mut tw, now, TYPE_INTERVAL, 1);
        assert_eq!(tw.text(), "x");
    }

    #[test]
    fn test_interval_gates_typing() {
        let mut tw = Typewriter::new(&TITLES);
        let start = Instant::now();
        // Ticks faster than the type interval add at most the gated chars
        run_ticks(&mut tw, start, Duration::from_millis(10), 5);
        assert!(tw.text().chars().count() <= 1);
    }
}
