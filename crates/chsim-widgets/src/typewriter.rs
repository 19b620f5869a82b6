//! Terminal-style character-by-character reveal.

use chsim_core::types::Cadence;

/// Reveals `text` one character per `ms_per_char`.
#[derive(Debug, Clone)]
pub struct Typewriter {
    text: String,
    revealed: usize,
    cadence: Cadence,
}

impl Typewriter {
    pub fn new(text: impl Into<String>, ms_per_char: u64) -> Self {
        Self {
            text: text.into(),
            revealed: 0,
            cadence: Cadence::new(ms_per_char),
        }
    }

    /// Start over with a new text.
    pub fn restart(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.revealed = 0;
        self.cadence.reset();
    }

    pub fn advance(&mut self, dt_ms: u64) {
        if !self.is_typing() {
            return;
        }
        let steps = self.cadence.advance(dt_ms) as usize;
        self.revealed = (self.revealed + steps).min(self.char_count());
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The revealed prefix, always cut on a character boundary.
    pub fn visible(&self) -> &str {
        match self.text.char_indices().nth(self.revealed) {
            Some((byte, _)) => &self.text[..byte],
            None => &self.text,
        }
    }

    pub fn is_typing(&self) -> bool {
        self.revealed < self.char_count()
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}
