//! Presentation-side helpers
//!
//! Nothing here mutates the simulation. The HUD marks classify sequence slots
//! for outlining, and [`RevealAnimation`] stages the end-of-round explanation
//! one line at a time.

use serde::{Deserialize, Serialize};

use crate::sim::SequenceModel;

/// Outline for a slot in the target row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetMark {
    /// Already collected past
    Passed,
    /// Next expected symbol (highlighted)
    Current,
    Pending,
}

/// Outline for a slot in the collected row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollectedMark {
    /// Same symbol as the target slot, no outline
    Exact,
    /// Different symbol, same group (yellow)
    SameGroup,
    /// Different group (red)
    Mismatch,
    /// Beyond the end of the target
    Overflow,
}

pub fn target_marks(sequence: &SequenceModel) -> Vec<TargetMark> {
    let cursor = sequence.cursor();
    (0..sequence.target().len())
        .map(|i| match i.cmp(&cursor) {
            std::cmp::Ordering::Less => TargetMark::Passed,
            std::cmp::Ordering::Equal => TargetMark::Current,
            std::cmp::Ordering::Greater => TargetMark::Pending,
        })
        .collect()
}

pub fn collected_marks(sequence: &SequenceModel) -> Vec<CollectedMark> {
    let target = sequence.target();
    sequence
        .collected()
        .iter()
        .enumerate()
        .map(|(i, &aa)| match target.get(i) {
            None => CollectedMark::Overflow,
            Some(&t) if t == aa => CollectedMark::Exact,
            Some(&t) if t.same_group(aa) => CollectedMark::SameGroup,
            Some(_) => CollectedMark::Mismatch,
        })
        .collect()
}

/// Seconds per fade step
pub const REVEAL_STEP_SECS: f32 = 0.010;
/// Alpha added per fade step
pub const REVEAL_ALPHA_STEP: u16 = 8;

/// Fades explanation lines in one after another.
///
/// Time-driven: call [`advance`](Self::advance) with the frame delta and read
/// [`line_alpha`](Self::line_alpha) when drawing. Earlier lines stay fully
/// visible while the current one fades in.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealAnimation {
    line_count: usize,
    /// Line currently fading in
    current: usize,
    alpha: u16,
    accumulator: f32,
}

impl RevealAnimation {
    pub fn new(line_count: usize) -> Self {
        Self {
            line_count,
            current: 0,
            alpha: 0,
            accumulator: 0.0,
        }
    }

    pub fn advance(&mut self, dt: f32) {
        if self.is_finished() {
            return;
        }
        self.accumulator += dt.max(0.0);
        while self.accumulator >= REVEAL_STEP_SECS && !self.is_finished() {
            self.accumulator -= REVEAL_STEP_SECS;
            self.alpha += REVEAL_ALPHA_STEP;
            if self.alpha >= 255 {
                self.current += 1;
                self.alpha = 0;
            }
        }
    }

    /// Show everything immediately
    pub fn skip(&mut self) {
        self.current = self.line_count;
        self.alpha = 0;
        self.accumulator = 0.0;
    }

    pub fn is_finished(&self) -> bool {
        self.current >= self.line_count
    }

    /// Lines that are fully visible
    pub fn revealed(&self) -> usize {
        self.current.min(self.line_count)
    }

    pub fn line_alpha(&self, index: usize) -> u8 {
        if index < self.current {
            255
        } else if index == self.current {
            self.alpha.min(255) as u8
        } else {
            0
        }
    }
}
