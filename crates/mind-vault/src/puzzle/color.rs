use serde::Serialize;

use super::Accepted;
use crate::core::rng::Rng;

/// Number of dials (and target colors) on a color panel.
pub const DIALS: usize = 3;

/// Turn the dials until their colors match the target sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorPattern {
    pub target: [u8; DIALS],
    pub current: [u8; DIALS],
    pub palette_len: u8,
    pub solved: bool,
    pub attempts: u32,
}

impl ColorPattern {
    /// Draw three target indices from the palette (with replacement). Dials start at 0.
    pub fn new(palette_len: u8, rng: &mut Rng) -> Self {
        let palette_len = palette_len.max(1);
        let mut target = [0; DIALS];
        for t in &mut target {
            *t = rng.next_int(palette_len as u32) as u8;
        }
        Self::with_target(target, palette_len)
    }

    pub fn with_target(target: [u8; DIALS], palette_len: u8) -> Self {
        let palette_len = palette_len.max(1);
        Self {
            target: target.map(|t| t % palette_len),
            current: [0; DIALS],
            palette_len,
            solved: false,
            attempts: 0,
        }
    }

    /// Step one dial to the next palette color. Returns the color it now shows.
    pub fn advance_dial(&mut self, dial: usize) -> Option<Accepted<u8>> {
        if self.solved || dial >= DIALS {
            return None;
        }
        self.current[dial] = (self.current[dial] + 1) % self.palette_len;
        self.attempts += 1;
        Some(Accepted {
            value: self.current[dial],
            just_solved: self.refresh(),
        })
    }

    pub fn is_match(&self) -> bool {
        self.current == self.target
    }

    fn refresh(&mut self) -> bool {
        if !self.solved && self.is_match() {
            self.solved = true;
            return true;
        }
        false
    }

    pub fn reset(&mut self) {
        self.current = [0; DIALS];
        self.solved = false;
        self.attempts = 0;
    }
}
