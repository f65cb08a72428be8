//! Timed reveal sequencer.
//!
//! Replaces a UI-side timeout chain with an explicit state machine plus an
//! injectable [`Clock`], so playback is deterministic under test. All state
//! lives in [`Playback`] and changes only through its methods on one thread;
//! a speed or length change is therefore always observed whole at the next
//! tick (no torn cursor/length reads).

use std::time::Duration;

/// Default delay between reveals, matching the log viewer's stock speed.
pub const DEFAULT_SPEED: Duration = Duration::from_millis(1300);

/// Sleep provider for [`run`]. Tests drive playback with a manual clock
/// instead of real timers.
pub trait Clock {
    fn sleep(&mut self, duration: Duration);
}

/// Real-time clock backed by `std::thread::sleep`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Animated reveal state over a filtered entry list.
///
/// The cursor starts at 0 on [`start`](Playback::start) and advances by
/// exactly 1 per tick until it reaches `total`, at which point playback
/// stops on its own. Positions below the cursor are "revealed"; while idle,
/// everything is revealed (matching the viewer, which only hides entries
/// during an active animation).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playback {
    cursor: usize,
    total: usize,
    speed: Duration,
    playing: bool,
}

impl Default for Playback {
    fn default() -> Self {
        Playback::new(0, DEFAULT_SPEED)
    }
}

impl Playback {
    /// Creates an idle playback over `total` filtered entries.
    pub fn new(total: usize, speed: Duration) -> Self {
        Playback {
            cursor: 0,
            total,
            speed,
            playing: false,
        }
    }

    /// Current reveal cursor (0..=total).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// True while an animation is running.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Resets the cursor to 0 and begins playing.
    ///
    /// Starting over an empty list stops immediately.
    pub fn start(&mut self) {
        self.cursor = 0;
        self.playing = self.total > 0;
    }

    /// Stops playback immediately; no further advances happen.
    ///
    /// The cursor keeps its position, but an idle playback reveals
    /// everything, so pausing shows the full list.
    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Jumps the cursor to the end without animating and stops.
    pub fn reveal_all(&mut self) {
        self.playing = false;
        self.cursor = self.total;
    }

    /// True when the entry at `position` (within the filtered list) should
    /// be shown. Everything is visible while idle.
    pub fn is_revealed(&self, position: usize) -> bool {
        if !self.playing {
            return true;
        }
        position < self.cursor
    }

    /// Delay to wait before the next tick, or `None` when nothing further
    /// is scheduled (paused or finished).
    pub fn next_delay(&self) -> Option<Duration> {
        (self.playing && self.cursor < self.total).then_some(self.speed)
    }

    /// Advances the cursor by one. Auto-stops once the cursor reaches
    /// `total`. Returns `true` while playback keeps running.
    pub fn tick(&mut self) -> bool {
        if !self.playing {
            return false;
        }
        if self.cursor < self.total {
            self.cursor += 1;
        }
        if self.cursor >= self.total {
            self.playing = false;
        }
        self.playing
    }

    /// Updates the delay between reveals; takes effect on the next tick.
    pub fn set_speed(&mut self, speed: Duration) {
        self.speed = speed;
    }

    /// Re-binds the playback to a re-filtered list of `total` entries,
    /// clamping the cursor so no out-of-range position stays revealed.
    pub fn set_total(&mut self, total: usize) {
        self.total = total;
        if self.cursor > total {
            self.cursor = total;
        }
        if self.playing && self.cursor >= total {
            self.playing = false;
        }
    }
}

/// Drives `playback` to completion against `clock`.
///
/// Each iteration sleeps the current inter-reveal delay, then advances the
/// cursor once; the loop exits as soon as playback pauses or finishes, so a
/// completed run has slept exactly once per revealed entry.
pub fn run(playback: &mut Playback, clock: &mut impl Clock) {
    while let Some(delay) = playback.next_delay() {
        clock.sleep(delay);
        playback.tick();
    }
}
