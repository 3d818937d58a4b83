//! Typewriter text animation.
//!
//! A [`Typewriter`] reveals its source one character per reveal tick and
//! blinks a caret on an independent ticker. The optional ellipsis mode starts
//! a third ticker once the text is fully revealed and cycles a dotted suffix
//! forever. Changing the source cancels every ticker and starts over.

use crate::timer::Ticker;
use std::time::{Duration, Instant};

/// Timings for a typewriter instance.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterTimings {
    pub reveal: Duration,
    pub caret: Duration,
    /// Period of the ellipsis cycle, or none to stop after the text.
    pub ellipsis: Option<Duration>,
}

impl TypewriterTimings {
    /// Timings of the hero code window.
    pub const CODE: TypewriterTimings = TypewriterTimings {
        reveal: Duration::from_millis(30),
        caret: Duration::from_millis(500),
        ellipsis: None,
    };

    /// Timings of the CV export status line.
    pub const STATUS_LINE: TypewriterTimings = TypewriterTimings {
        reveal: Duration::from_millis(45),
        caret: Duration::from_millis(500),
        ellipsis: Some(Duration::from_millis(450)),
    };
}

/// Suffix cycle shown after a status line has been typed.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Ellipsis {
    #[default]
    None,
    One,
    Two,
    Three,
}

impl Ellipsis {
    pub fn next(self) -> Ellipsis {
        match self {
            Ellipsis::None => Ellipsis::One,
            Ellipsis::One => Ellipsis::Two,
            Ellipsis::Two => Ellipsis::Three,
            Ellipsis::Three => Ellipsis::None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Ellipsis::None => "",
            Ellipsis::One => ".",
            Ellipsis::Two => "..",
            Ellipsis::Three => "...",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    source: String,
    /// Byte offset of every character boundary after the first.
    boundaries: Vec<usize>,
    revealed: usize,
    caret_visible: bool,
    ellipsis: Ellipsis,
    timings: TypewriterTimings,
    reveal_ticker: Ticker,
    caret_ticker: Ticker,
    ellipsis_ticker: Option<Ticker>,
}

impl Typewriter {
    pub fn new(source: impl Into<String>, timings: TypewriterTimings, now: Instant) -> Self {
        let mut typewriter = Typewriter {
            source: String::new(),
            boundaries: Vec::new(),
            revealed: 0,
            caret_visible: true,
            ellipsis: Ellipsis::None,
            timings,
            reveal_ticker: Ticker::idle(timings.reveal, now),
            caret_ticker: Ticker::idle(timings.caret, now),
            ellipsis_ticker: None,
        };
        typewriter.restart(source, now);
        typewriter
    }

    /// Cancel all timers and start revealing `source` from the beginning.
    ///
    pub fn restart(&mut self, source: impl Into<String>, now: Instant) {
        self.cancel();
        self.ellipsis_ticker = None;
        self.source = source.into();
        self.boundaries = self
            .source
            .char_indices()
            .map(|(i, c)| i + c.len_utf8())
            .collect();
        self.revealed = 0;
        self.caret_visible = true;
        self.ellipsis = Ellipsis::None;
        self.reveal_ticker = Ticker::start(self.timings.reveal, now);
        self.caret_ticker = Ticker::start(self.timings.caret, now);
        if self.is_complete() {
            self.reveal_ticker.cancel();
            self.start_ellipsis(now);
        }
    }

    /// Advance every ticker to `now`.
    ///
    pub fn tick(&mut self, now: Instant) {
        let steps = self.reveal_ticker.poll(now) as usize;
        if steps > 0 {
            self.revealed = (self.revealed + steps).min(self.len());
            if self.is_complete() {
                self.reveal_ticker.cancel();
                self.start_ellipsis(now);
            }
        }

        if self.caret_ticker.poll(now) % 2 == 1 {
            self.caret_visible = !self.caret_visible;
        }

        if let Some(ticker) = self.ellipsis_ticker.as_mut() {
            for _ in 0..ticker.poll(now) % 4 {
                self.ellipsis = self.ellipsis.next();
            }
        }
    }

    fn start_ellipsis(&mut self, now: Instant) {
        if let Some(period) = self.timings.ellipsis {
            self.ellipsis_ticker = Some(Ticker::start(period, now));
        }
    }

    /// Cancel every ticker. The revealed text stays as it is.
    ///
    pub fn cancel(&mut self) {
        self.reveal_ticker.cancel();
        self.caret_ticker.cancel();
        if let Some(ticker) = self.ellipsis_ticker.as_mut() {
            ticker.cancel();
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Return the length of the source in characters.
    ///
    pub fn len(&self) -> usize {
        self.boundaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boundaries.is_empty()
    }

    pub fn revealed_length(&self) -> usize {
        self.revealed
    }

    pub fn revealed_text(&self) -> &str {
        match self.revealed {
            0 => "",
            n => &self.source[..self.boundaries[n - 1]],
        }
    }

    pub fn is_complete(&self) -> bool {
        self.revealed == self.len()
    }

    pub fn caret_visible(&self) -> bool {
        self.caret_visible
    }

    pub fn ellipsis(&self) -> &'static str {
        self.ellipsis.as_str()
    }

    /// Return true if any ticker is still scheduled.
    ///
    pub fn is_running(&self) -> bool {
        self.reveal_ticker.is_active()
            || self.caret_ticker.is_active()
            || self.ellipsis_ticker.as_ref().is_some_and(|t| t.is_active())
    }
}
