use std::time::{Duration, Instant};

/// Character-by-character reveal of an already-complete string. Purely
/// cosmetic; constructing a new one restarts the reveal from scratch.
#[derive(Debug)]
pub struct Typewriter {
    text: String,
    byte_pos: usize,
    delay: Duration,
    last_tick: Instant,
}

impl Typewriter {
    pub fn new(text: impl Into<String>, delay: Duration) -> Self {
        Typewriter {
            text: text.into(),
            byte_pos: 0,
            delay,
            last_tick: Instant::now(),
        }
    }

    /// Advances the reveal by however many whole delays have elapsed since
    /// the previous tick, so a slow frame still catches up to wall-clock.
    pub fn tick(&mut self) {
        if self.is_done() {
            return;
        }
        if self.delay.is_zero() {
            self.byte_pos = self.text.len();
            return;
        }

        let delay_ms = self.delay.as_millis().max(1);
        let steps = (self.last_tick.elapsed().as_millis() / delay_ms) as usize;
        if steps > 0 {
            self.advance(steps);
            self.last_tick += self.delay * steps as u32;
        }
    }

    /// Reveals up to `chars` more characters, clamped at the end of the text.
    pub fn advance(&mut self, chars: usize) {
        let remaining = &self.text[self.byte_pos..];
        let consumed = remaining
            .char_indices()
            .nth(chars)
            .map(|(i, _)| i)
            .unwrap_or(remaining.len());
        self.byte_pos += consumed;
    }

    pub fn visible(&self) -> &str {
        &self.text[..self.byte_pos]
    }

    pub fn is_done(&self) -> bool {
        self.byte_pos >= self.text.len()
    }

    pub fn skip_to_end(&mut self) {
        self.byte_pos = self.text.len();
    }
}
