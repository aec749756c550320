//! Target and collected sequences for a round

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use super::amino::AminoAcid;
use super::scoring::{self, AlignmentReport};

/// The protein being assembled: a fixed target, the order the player
/// actually collected in, and a cursor marking the next expected symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceModel {
    target: Vec<AminoAcid>,
    collected: Vec<AminoAcid>,
    cursor: usize,
}

impl SequenceModel {
    /// Draw `length` independent uniform samples from `alphabet`.
    /// An empty alphabet yields an empty target.
    pub fn generate<R: Rng + ?Sized>(length: usize, alphabet: &[AminoAcid], rng: &mut R) -> Self {
        let target = (0..length)
            .filter_map(|_| alphabet.choose(&mut *rng).copied())
            .collect();
        Self::from_target(target)
    }

    pub fn from_target(target: Vec<AminoAcid>) -> Self {
        Self {
            target,
            collected: Vec::new(),
            cursor: 0,
        }
    }

    pub fn target(&self) -> &[AminoAcid] {
        &self.target
    }

    pub fn collected(&self) -> &[AminoAcid] {
        &self.collected
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Next expected symbol, `None` once the target is exhausted
    pub fn current(&self) -> Option<AminoAcid> {
        self.target.get(self.cursor).copied()
    }

    /// Move the cursor forward; no-op at the end
    pub fn advance(&mut self) {
        if !self.is_exhausted() {
            self.cursor += 1;
        }
    }

    pub fn append(&mut self, symbol: AminoAcid) {
        self.collected.push(symbol);
    }

    /// Append and advance in one step, as a pickup does
    pub fn record_pickup(&mut self, symbol: AminoAcid) {
        self.append(symbol);
        self.advance();
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor == self.target.len()
    }

    pub fn score(&self) -> AlignmentReport {
        scoring::score(&self.target, &self.collected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::amino::parse_sequence;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_generate_length_and_alphabet() {
        let mut rng = Pcg32::seed_from_u64(42);
        let alphabet = [AminoAcid::Alanine, AminoAcid::Lysine];
        let model = SequenceModel::generate(10, &alphabet, &mut rng);
        assert_eq!(model.target().len(), 10);
        assert!(model.target().iter().all(|aa| alphabet.contains(aa)));
        assert!(model.collected().is_empty());
        assert_eq!(model.cursor(), 0);
    }

    #[test]
    fn test_generate_is_deterministic_per_seed() {
        let a = SequenceModel::generate(10, &AminoAcid::ALL, &mut Pcg32::seed_from_u64(5));
        let b = SequenceModel::generate(10, &AminoAcid::ALL, &mut Pcg32::seed_from_u64(5));
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_empty_alphabet() {
        let mut rng = Pcg32::seed_from_u64(1);
        let model = SequenceModel::generate(10, &[], &mut rng);
        assert!(model.target().is_empty());
        assert!(model.is_exhausted());
    }

    #[test]
    fn test_exhaustion() {
        let mut model = SequenceModel::from_target(parse_sequence("AVL").unwrap());
        assert_eq!(model.current(), Some(AminoAcid::Alanine));
        model.record_pickup(AminoAcid::Valine);
        model.record_pickup(AminoAcid::Alanine);
        assert!(!model.is_exhausted());
        model.record_pickup(AminoAcid::Leucine);
        assert!(model.is_exhausted());
        assert_eq!(model.current(), None);

        // Advancing past the end is a no-op
        model.advance();
        assert_eq!(model.cursor(), 3);
        assert!(model.is_exhausted());

        // Append is unconditional
        model.append(AminoAcid::Lysine);
        assert_eq!(model.collected().len(), 4);
        assert_eq!(model.cursor(), 3);
    }

    #[test]
    fn test_score_uses_collected_order() {
        let mut model = SequenceModel::from_target(parse_sequence("AV").unwrap());
        model.record_pickup(AminoAcid::Valine);
        model.record_pickup(AminoAcid::Alanine);
        assert_eq!(model.score().total, 10);
    }
}
