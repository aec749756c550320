//! Alignment scoring
//!
//! Compares the collected sequence against the target position by position.
//! Each target position earns credit by the first rule that applies:
//!
//! | Rule           | Condition                                   | Points |
//! |----------------|---------------------------------------------|--------|
//! | Not collected  | collected sequence too short                | 0      |
//! | Exact match    | `collected[i] == target[i]`                 | 10     |
//! | Adjacent match | `collected[i-1]` or `collected[i+1]` equals `target[i]` | 5 |
//! | Group match    | same side-chain group                       | 2      |
//! | No match       | otherwise                                   | 0      |
//!
//! Neighbor lookups use the collected indices as recorded, never a shifted view.

use serde::{Deserialize, Serialize};

use super::amino::AminoAcid;

pub const EXACT_MATCH_POINTS: u32 = 10;
pub const ADJACENT_MATCH_POINTS: u32 = 5;
pub const GROUP_MATCH_POINTS: u32 = 2;

/// Why a target position earned its points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchReason {
    #[serde(rename = "Exact match")]
    Exact,
    #[serde(rename = "Adjacent match")]
    Adjacent,
    #[serde(rename = "Group match")]
    Group,
    #[serde(rename = "No match")]
    NoMatch,
    #[serde(rename = "Not collected")]
    NotCollected,
}

impl MatchReason {
    pub fn points(self) -> u32 {
        match self {
            MatchReason::Exact => EXACT_MATCH_POINTS,
            MatchReason::Adjacent => ADJACENT_MATCH_POINTS,
            MatchReason::Group => GROUP_MATCH_POINTS,
            MatchReason::NoMatch | MatchReason::NotCollected => 0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MatchReason::Exact => "Exact match",
            MatchReason::Adjacent => "Adjacent match",
            MatchReason::Group => "Group match",
            MatchReason::NoMatch => "No match",
            MatchReason::NotCollected => "Not collected",
        }
    }
}

/// Score breakdown for one target position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionResult {
    pub target: AminoAcid,
    /// `None` when the player never collected this far
    pub collected: Option<AminoAcid>,
    pub score: u32,
    pub reason: MatchReason,
}

/// Win/lose framing of a finished round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    Win,
    Lose,
}

/// Final score plus per-position explanation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignmentReport {
    pub total: u32,
    pub positions: Vec<PositionResult>,
}

impl AlignmentReport {
    /// Best achievable total for this target length
    pub fn max_score(&self) -> u32 {
        self.positions.len() as u32 * EXACT_MATCH_POINTS
    }

    /// Total as a percentage of the maximum (0 for an empty target)
    pub fn percentage(&self) -> f32 {
        let max = self.max_score();
        if max == 0 {
            return 0.0;
        }
        self.total as f32 / max as f32 * 100.0
    }

    pub fn outcome(&self, win_threshold_percent: f32) -> RoundOutcome {
        if self.max_score() > 0 && self.percentage() >= win_threshold_percent {
            RoundOutcome::Win
        } else {
            RoundOutcome::Lose
        }
    }

    /// Title line for the end-of-round screen
    pub fn headline(&self, win_threshold_percent: f32) -> String {
        match self.outcome(win_threshold_percent) {
            RoundOutcome::Win => format!("You Win! Score: {}/{}", self.total, self.max_score()),
            RoundOutcome::Lose => format!("Game Over. Score: {}/{}", self.total, self.max_score()),
        }
    }

    /// One display line per target position (1-based)
    pub fn explanation_lines(&self) -> Vec<String> {
        self.positions
            .iter()
            .enumerate()
            .map(|(idx, p)| {
                let collected = p
                    .collected
                    .map(|aa| aa.code().to_string())
                    .unwrap_or_else(|| "None".to_string());
                format!(
                    "Pos {}: Target: {} | Collected: {} | Score: {} | {}",
                    idx + 1,
                    p.target,
                    collected,
                    p.score,
                    p.reason.as_str()
                )
            })
            .collect()
    }
}

/// Score `collected` against `target`.
///
/// Iterates the full target length; collected entries past the end of the
/// target are ignored.
pub fn score(target: &[AminoAcid], collected: &[AminoAcid]) -> AlignmentReport {
    let positions: Vec<PositionResult> = target
        .iter()
        .enumerate()
        .map(|(i, &target_aa)| {
            let reason = classify(i, target, collected);
            PositionResult {
                target: target_aa,
                collected: collected.get(i).copied(),
                score: reason.points(),
                reason,
            }
        })
        .collect();

    let total = positions.iter().map(|p| p.score).sum();
    AlignmentReport { total, positions }
}

fn classify(i: usize, target: &[AminoAcid], collected: &[AminoAcid]) -> MatchReason {
    let target_aa = target[i];
    let Some(&collected_aa) = collected.get(i) else {
        return MatchReason::NotCollected;
    };

    if collected_aa == target_aa {
        return MatchReason::Exact;
    }

    let before = i.checked_sub(1).and_then(|j| collected.get(j));
    // The following neighbor only counts while it still lines up with a target slot
    let after = if i + 1 < target.len() {
        collected.get(i + 1)
    } else {
        None
    };
    if before == Some(&target_aa) || after == Some(&target_aa) {
        return MatchReason::Adjacent;
    }

    if collected_aa.same_group(target_aa) {
        MatchReason::Group
    } else {
        MatchReason::NoMatch
    }
}
