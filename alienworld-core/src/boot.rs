//! The boot sequence: BIOS text dump, XP splash, "Welcome".
//!
//! `Bios → XpBoot → Complete`, strictly forward. Each stage variant owns the
//! timers it acquired, so replacing the stage (or dropping the whole
//! sequence) releases them. There is no other cleanup path.

use crate::animation::{blink_opacity, lerp, Fade, Sweep};
use crate::config::Timings;
use crate::timers::{Timer, TimerHost};

use std::time::Duration;

// ────────────────────────────────────────────────────────────────
// Content
// ────────────────────────────────────────────────────────────────

const BANNER: &str = r"     ___      _ _ _
    / _ \    | (_) |
   / /_\ \ __| |_| |_ _   _  __ _
   |  _  |/ _` | | __| | | |/ _` |
   | | | | (_| | | |_| |_| | (_| |
   \_| |_/\__,_|_|\__|\__, |\__,_|
                       __/ |
                      |___/";

/// Revealed one entry per tick. Empty entries are spacing rows.
pub static BIOS_LINES: [&str; 17] = [
    "Phoenix BIOS 4.0 Release 6.0",
    "Copyright 1985-2001 Phoenix Technologies Ltd.",
    "All Rights Reserved",
    "",
    "",
    BANNER,
    "",
    "Initializing...",
    "",
    "Processor: Intel(R) Pentium(R) 4 CPU 2.80GHz",
    "Memory Test: 512MB OK",
    "Primary Master: 80GB IDE Hard Drive",
    "Primary Slave: CD-ROM Drive",
    "",
    "Press DEL to enter SETUP",
    "",
    "Loading alienworld XP...",
];

/// The first entries are the vendor header and render brighter.
pub const HEADER_LINES: usize = 3;

pub const COPYRIGHT: &str = "Copyright © Microsoft Corporation";
pub const WELCOME: &str = "Welcome";

// Progress bar geometry, in logical pixels.
pub const BAR_WIDTH: f32 = 155.0;
pub const BAR_HEIGHT: f32 = 12.0;
pub const SEGMENT_WIDTH: f32 = 15.0;
pub const SEGMENT_HEIGHT: f32 = 10.0;
pub const SEGMENT_TOP: f32 = 1.0;
pub const SEGMENT_FROM: f32 = -20.0;
pub const SEGMENT_TO: f32 = 160.0;

const LOGO_FADE: Fade = Fade::new(500, 1000);
const BAR_FADE: Fade = Fade::new(1000, 500);
const FOOTER_FADE: Fade = Fade::new(1500, 500);
const WELCOME_ZOOM: Fade = Fade::new(0, 800);

// ────────────────────────────────────────────────────────────────
// State
// ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootPhase {
    Bios,
    XpBoot,
    Complete,
}

/// Tags for the timers the boot sequence acquires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootTimer {
    BiosTick,
    BiosHold,
    XpBootElapsed,
    WelcomeElapsed,
}

#[derive(Debug)]
enum Stage {
    Bios {
        /// Armed while lines are still being revealed.
        ticker: Option<Timer>,
        /// Armed after the reveal finished.
        hold: Option<Timer>,
        cursor_since: Option<Duration>,
    },
    XpBoot {
        entered_at: Duration,
        _elapsed: Timer,
    },
    Complete {
        entered_at: Duration,
        welcome: Option<Timer>,
    },
}

/// Simulated power-on. `M` is the message handed back, once, when the
/// sequence has finished.
#[derive(Debug)]
pub struct BootSequence<M> {
    host: TimerHost<BootTimer>,
    timings: Timings,
    index: usize,
    stage: Stage,
    on_complete: Option<M>,
}

impl<M> BootSequence<M> {
    /// Start the BIOS stage on `host`.
    pub fn mount(host: TimerHost<BootTimer>, timings: Timings, on_complete: M) -> Self {
        let ticker = host.every(timings.bios_tick(), BootTimer::BiosTick);
        let cursor_since = cursor_due(0, timings.cursor_window).then(|| host.now());
        tracing::debug!(at = ?host.now(), "boot sequence mounted");

        Self {
            host,
            timings,
            index: 0,
            stage: Stage::Bios {
                ticker: Some(ticker),
                hold: None,
                cursor_since,
            },
            on_complete: Some(on_complete),
        }
    }

    pub fn phase(&self) -> BootPhase {
        match self.stage {
            Stage::Bios { .. } => BootPhase::Bios,
            Stage::XpBoot { .. } => BootPhase::XpBoot,
            Stage::Complete { .. } => BootPhase::Complete,
        }
    }

    pub fn timings(&self) -> &Timings {
        &self.timings
    }

    pub fn host(&self) -> &TimerHost<BootTimer> {
        &self.host
    }

    pub fn bios_index(&self) -> usize {
        self.index
    }

    pub fn last_index(&self) -> usize {
        BIOS_LINES.len() - 1
    }

    /// True while the repeating reveal timer is armed.
    pub fn revealing(&self) -> bool {
        matches!(&self.stage, Stage::Bios { ticker: Some(t), .. } if t.is_armed())
    }

    /// Lines `0..=index`, in order.
    pub fn visible_bios_lines(&self) -> &'static [&'static str] {
        &BIOS_LINES[..=self.index]
    }

    pub fn cursor_visible(&self) -> bool {
        matches!(self.stage, Stage::Bios { cursor_since: Some(_), .. })
    }

    /// True once the completion message has been handed out.
    pub fn completed(&self) -> bool {
        self.on_complete.is_none()
    }

    /// Drive the clock forward by `by`, handling every timer that comes
    /// due on the way. Returns the completion message if it fired.
    pub fn advance(&mut self, by: Duration) -> Vec<M> {
        let until = self.host.now() + by;
        let mut emitted = Vec::new();

        while let Some(timer) = self.host.pop_due(until) {
            if let Some(msg) = self.on_timer(timer) {
                emitted.push(msg);
            }
        }
        self.host.settle(until);

        emitted
    }

    /// Handle one fired timer. Timers that do not belong to the current
    /// stage are ignored.
    pub fn on_timer(&mut self, timer: BootTimer) -> Option<M> {
        match timer {
            BootTimer::BiosTick => {
                self.bios_tick();
                None
            }
            BootTimer::BiosHold => {
                if matches!(self.stage, Stage::Bios { hold: Some(_), .. }) {
                    self.enter_xp_boot();
                } else {
                    tracing::debug!(?timer, phase = ?self.phase(), "stale boot timer ignored");
                }
                None
            }
            BootTimer::XpBootElapsed => {
                if matches!(self.stage, Stage::XpBoot { .. }) {
                    self.enter_complete();
                } else {
                    tracing::debug!(?timer, phase = ?self.phase(), "stale boot timer ignored");
                }
                None
            }
            BootTimer::WelcomeElapsed => self.finish(),
        }
    }

    fn bios_tick(&mut self) {
        let now = self.host.now();
        let last = self.last_index();
        let window = self.timings.cursor_window;

        let Stage::Bios {
            ticker,
            hold,
            cursor_since,
        } = &mut self.stage
        else {
            tracing::debug!("stale BIOS tick ignored");
            return;
        };
        if ticker.is_none() {
            return;
        }

        if self.index < last {
            self.index += 1;
            tracing::trace!(index = self.index, "BIOS line revealed");
            if cursor_since.is_none() && cursor_due(self.index, window) {
                *cursor_since = Some(now);
            }
            return;
        }

        // The tick after the last line ends the reveal.
        *ticker = None;
        *hold = Some(self.host.once(self.timings.bios_hold(), BootTimer::BiosHold));
        tracing::debug!(at = ?now, "BIOS reveal finished");
    }

    fn enter_xp_boot(&mut self) {
        let now = self.host.now();
        let elapsed = self.host.once(self.timings.xp_boot(), BootTimer::XpBootElapsed);
        self.stage = Stage::XpBoot {
            entered_at: now,
            _elapsed: elapsed,
        };
        tracing::debug!(at = ?now, "boot stage -> XpBoot");
    }

    fn enter_complete(&mut self) {
        let now = self.host.now();
        let welcome = self.host.once(self.timings.welcome(), BootTimer::WelcomeElapsed);
        self.stage = Stage::Complete {
            entered_at: now,
            welcome: Some(welcome),
        };
        tracing::debug!(at = ?now, "boot stage -> Complete");
    }

    fn finish(&mut self) -> Option<M> {
        let Stage::Complete { welcome, .. } = &mut self.stage else {
            tracing::debug!("stale welcome timer ignored");
            return None;
        };
        welcome.take()?;

        let msg = self.on_complete.take();
        if msg.is_some() {
            tracing::debug!(at = ?self.host.now(), "boot sequence complete");
        }
        msg
    }

    // ────────────────────────────────────────────────────────────
    // Scene
    // ────────────────────────────────────────────────────────────

    /// What the sequence looks like at the host's current time.
    pub fn scene(&self) -> BootScene {
        let now = self.host.now();
        match &self.stage {
            Stage::Bios { cursor_since, .. } => BootScene::Bios(BiosScene {
                lines: self
                    .visible_bios_lines()
                    .iter()
                    .enumerate()
                    .map(|(i, &text)| BiosLine {
                        text,
                        tone: if i < HEADER_LINES {
                            LineTone::Header
                        } else {
                            LineTone::Body
                        },
                    })
                    .collect(),
                cursor_opacity: cursor_since
                    .map(|since| blink_opacity(now - since, self.timings.cursor_blink())),
            }),
            Stage::XpBoot { entered_at, .. } => {
                BootScene::XpBoot(XpBootScene::at(now - *entered_at, &self.timings))
            }
            Stage::Complete { entered_at, .. } => {
                let p = WELCOME_ZOOM.progress(now - *entered_at);
                BootScene::Complete(WelcomeScene {
                    caption: WELCOME,
                    scale: lerp(0.8, 1.0, p),
                    opacity: p,
                })
            }
        }
    }
}

/// The cursor shows once `index` is within `window` entries of the end of
/// the table.
fn cursor_due(index: usize, window: usize) -> bool {
    index >= BIOS_LINES.len().saturating_sub(window)
}

// ────────────────────────────────────────────────────────────────
// Scene models
// ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum BootScene {
    Bios(BiosScene),
    XpBoot(XpBootScene),
    Complete(WelcomeScene),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineTone {
    Header,
    Body,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BiosLine {
    pub text: &'static str,
    pub tone: LineTone,
}

impl BiosLine {
    /// Empty lines still take up a row.
    pub fn display(&self) -> &'static str {
        if self.text.is_empty() {
            "\u{00A0}"
        } else {
            self.text
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BiosScene {
    pub lines: Vec<BiosLine>,
    /// `Some(opacity)` once the blinking cursor is on screen.
    pub cursor_opacity: Option<f32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct XpBootScene {
    pub logo_opacity: f32,
    pub bar_opacity: f32,
    pub segments: Vec<Segment>,
    pub caption: &'static str,
    pub caption_opacity: f32,
    pub secondary_logo_opacity: f32,
}

impl XpBootScene {
    /// The splash `elapsed` after the stage was entered.
    pub fn at(elapsed: Duration, timings: &Timings) -> Self {
        let sweep = Sweep {
            from: SEGMENT_FROM,
            to: SEGMENT_TO,
            cycle: timings.segment_cycle(),
            stagger: timings.segment_stagger(),
        };
        let footer = FOOTER_FADE.progress(elapsed);

        Self {
            logo_opacity: LOGO_FADE.progress(elapsed),
            bar_opacity: BAR_FADE.progress(elapsed),
            segments: (0..timings.segment_count)
                .map(|i| Segment {
                    x: sweep.position(i, elapsed),
                })
                .collect(),
            caption: COPYRIGHT,
            caption_opacity: footer,
            secondary_logo_opacity: footer,
        }
    }
}

/// One moving block of the progress bar. `x` is relative to the bar's left
/// edge and may lie outside it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub x: f32,
}

impl Segment {
    /// The part of the segment inside the bar, as `(x, width)`.
    pub fn clipped(&self) -> Option<(f32, f32)> {
        let left = self.x.max(0.0);
        let right = (self.x + SEGMENT_WIDTH).min(BAR_WIDTH);
        (right > left).then_some((left, right - left))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WelcomeScene {
    pub caption: &'static str,
    pub scale: f32,
    pub opacity: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_spans_several_rows() {
        assert_eq!(BIOS_LINES[5].lines().count(), 8);
    }

    #[test]
    fn segment_outside_bar_is_hidden() {
        assert_eq!(Segment { x: -20.0 }.clipped(), None);
        assert_eq!(Segment { x: 160.0 }.clipped(), None);
        assert_eq!(Segment { x: -5.0 }.clipped(), Some((0.0, 10.0)));
        assert_eq!(Segment { x: 150.0 }.clipped(), Some((150.0, 5.0)));
    }
}
