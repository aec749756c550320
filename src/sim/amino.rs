//! Amino acid alphabet and biochemical groups
//!
//! The 20 standard amino acids, each belonging to exactly one of four
//! side-chain property groups. The group table is static and drives the
//! partial-credit branch of the scorer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Side-chain property group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AminoGroup {
    Nonpolar,
    Uncharged,
    Positive,
    Negative,
}

impl AminoGroup {
    pub const ALL: [AminoGroup; 4] = [
        AminoGroup::Nonpolar,
        AminoGroup::Uncharged,
        AminoGroup::Positive,
        AminoGroup::Negative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AminoGroup::Nonpolar => "Nonpolar",
            AminoGroup::Uncharged => "Uncharged",
            AminoGroup::Positive => "Positive",
            AminoGroup::Negative => "Negative",
        }
    }

    /// Amino acids in this group, in alphabet order
    pub fn members(self) -> impl Iterator<Item = AminoAcid> {
        AminoAcid::ALL.into_iter().filter(move |aa| aa.group() == self)
    }
}

/// One of the 20 standard amino acids (serialized as its one-letter code)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AminoAcid {
    #[serde(rename = "A")]
    Alanine,
    #[serde(rename = "V")]
    Valine,
    #[serde(rename = "L")]
    Leucine,
    #[serde(rename = "I")]
    Isoleucine,
    #[serde(rename = "M")]
    Methionine,
    #[serde(rename = "F")]
    Phenylalanine,
    #[serde(rename = "W")]
    Tryptophan,
    #[serde(rename = "P")]
    Proline,
    #[serde(rename = "G")]
    Glycine,
    #[serde(rename = "S")]
    Serine,
    #[serde(rename = "T")]
    Threonine,
    #[serde(rename = "C")]
    Cysteine,
    #[serde(rename = "Y")]
    Tyrosine,
    #[serde(rename = "N")]
    Asparagine,
    #[serde(rename = "Q")]
    Glutamine,
    #[serde(rename = "K")]
    Lysine,
    #[serde(rename = "R")]
    Arginine,
    #[serde(rename = "H")]
    Histidine,
    #[serde(rename = "D")]
    AsparticAcid,
    #[serde(rename = "E")]
    GlutamicAcid,
}

impl AminoAcid {
    /// Full alphabet, grouped (nonpolar, uncharged, positive, negative)
    pub const ALL: [AminoAcid; 20] = [
        AminoAcid::Alanine,
        AminoAcid::Valine,
        AminoAcid::Leucine,
        AminoAcid::Isoleucine,
        AminoAcid::Methionine,
        AminoAcid::Phenylalanine,
        AminoAcid::Tryptophan,
        AminoAcid::Proline,
        AminoAcid::Glycine,
        AminoAcid::Serine,
        AminoAcid::Threonine,
        AminoAcid::Cysteine,
        AminoAcid::Tyrosine,
        AminoAcid::Asparagine,
        AminoAcid::Glutamine,
        AminoAcid::Lysine,
        AminoAcid::Arginine,
        AminoAcid::Histidine,
        AminoAcid::AsparticAcid,
        AminoAcid::GlutamicAcid,
    ];

    pub fn group(self) -> AminoGroup {
        use AminoAcid::*;
        match self {
            Alanine | Valine | Leucine | Isoleucine | Methionine | Phenylalanine | Tryptophan
            | Proline => AminoGroup::Nonpolar,
            Glycine | Serine | Threonine | Cysteine | Tyrosine | Asparagine | Glutamine => {
                AminoGroup::Uncharged
            }
            Lysine | Arginine | Histidine => AminoGroup::Positive,
            AsparticAcid | GlutamicAcid => AminoGroup::Negative,
        }
    }

    /// One-letter code
    pub fn code(self) -> char {
        use AminoAcid::*;
        match self {
            Alanine => 'A',
            Valine => 'V',
            Leucine => 'L',
            Isoleucine => 'I',
            Methionine => 'M',
            Phenylalanine => 'F',
            Tryptophan => 'W',
            Proline => 'P',
            Glycine => 'G',
            Serine => 'S',
            Threonine => 'T',
            Cysteine => 'C',
            Tyrosine => 'Y',
            Asparagine => 'N',
            Glutamine => 'Q',
            Lysine => 'K',
            Arginine => 'R',
            Histidine => 'H',
            AsparticAcid => 'D',
            GlutamicAcid => 'E',
        }
    }

    /// Parse a one-letter code (case-insensitive)
    pub fn from_code(code: char) -> Option<Self> {
        let code = code.to_ascii_uppercase();
        Self::ALL.into_iter().find(|aa| aa.code() == code)
    }

    pub fn same_group(self, other: AminoAcid) -> bool {
        self.group() == other.group()
    }
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Parse a sequence of one-letter codes, ignoring whitespace and commas.
/// Returns `None` on any unknown code.
pub fn parse_sequence(text: &str) -> Option<Vec<AminoAcid>> {
    text.chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(AminoAcid::from_code)
        .collect()
}

/// Render a sequence as a compact one-letter string
pub fn format_sequence(seq: &[AminoAcid]) -> String {
    seq.iter().map(|aa| aa.code()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_sizes() {
        let counts: Vec<usize> = AminoGroup::ALL.iter().map(|g| g.members().count()).collect();
        assert_eq!(counts, vec![8, 7, 3, 2]);
        assert_eq!(counts.iter().sum::<usize>(), AminoAcid::ALL.len());
    }

    #[test]
    fn test_codes_are_unique() {
        let mut codes: Vec<char> = AminoAcid::ALL.iter().map(|aa| aa.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), 20);
    }

    #[test]
    fn test_known_groups() {
        assert_eq!(AminoAcid::AsparticAcid.group(), AminoGroup::Negative);
        assert_eq!(AminoAcid::Histidine.group(), AminoGroup::Positive);
        assert_eq!(AminoAcid::Cysteine.group(), AminoGroup::Uncharged);
        assert_eq!(AminoAcid::Proline.group(), AminoGroup::Nonpolar);
        assert!(AminoAcid::AsparticAcid.same_group(AminoAcid::GlutamicAcid));
        assert!(!AminoAcid::AsparticAcid.same_group(AminoAcid::Alanine));
        assert_eq!(AminoAcid::Serine.group().as_str(), "Uncharged");
    }

    #[test]
    fn test_parse_sequence() {
        let seq = parse_sequence("a, V l").unwrap();
        assert_eq!(
            seq,
            vec![AminoAcid::Alanine, AminoAcid::Valine, AminoAcid::Leucine]
        );
        assert_eq!(format_sequence(&seq), "AVL");
        assert!(parse_sequence("AXV").is_none());
        assert_eq!(parse_sequence(""), Some(Vec::new()));
    }

    #[test]
    fn test_serializes_as_code() {
        let json = serde_json::to_string(&vec![AminoAcid::Tryptophan, AminoAcid::GlutamicAcid]).unwrap();
        assert_eq!(json, r#"["W","E"]"#);
    }
}
