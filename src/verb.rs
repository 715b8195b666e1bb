//! Encoded verb and object numbers
//!
//! Syntax slots in the verb table carry an 8-bit id in the low byte and up to
//! eight flags in the high byte.

use bitvec::prelude::*;
use log::trace;
use std::fmt;

/// Absolute position of the lowest flag bit
pub const FLAG_BASE: u8 = 8;

/// The flag bits and id byte of one encoded number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitReport {
    pub low_bits: u8,
    /// Absolute positions (8..=15) of the set high bits, ascending
    pub set_bits: Vec<u8>,
}

/// Split an encoded number into its low byte and set high bits.
///
/// Only bits 0..=15 are examined. Negative numbers are read as two's
/// complement, so `-1` has every bit set.
pub fn parse_number(num: i64) -> BitReport {
    let low_bits = (num & 0xFF) as u8;
    let high_bits = ((num >> 8) & 0xFF) as u8;
    trace!("{} -> low {:#04x}, high {:#04x}", num, low_bits, high_bits);

    let set_bits = high_bits
        .view_bits::<Lsb0>()
        .iter_ones()
        .map(|bit| bit as u8 + FLAG_BASE)
        .collect();

    BitReport { low_bits, set_bits }
}

impl BitReport {
    pub fn is_set(&self, bit: u8) -> bool {
        self.set_bits.contains(&bit)
    }

    /// Render the report with the flag names of a known slot kind
    pub fn annotated(&self, kind: SlotKind) -> Annotated<'_> {
        Annotated { report: self, kind }
    }
}

impl fmt::Display for BitReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "low bits: {}", self.low_bits)?;
        for bit in &self.set_bits {
            writeln!(f, "Bit {} is true.", bit)?;
        }
        write!(f, "All other bits are false.")
    }
}

/// The kinds of encoded numbers found in the verb table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    /// Second syntax slot of a verb: flags plus the verb id
    VerbSyntax,
    /// Object description: search flags plus a preposition id
    ObjectDescription,
}

impl SlotKind {
    /// What the low byte holds
    pub fn id_name(self) -> &'static str {
        match self {
            SlotKind::VerbSyntax => "verb id",
            SlotKind::ObjectDescription => "preposition id",
        }
    }

    pub fn flag_name(self, bit: u8) -> Option<&'static str> {
        match (self, bit) {
            (SlotKind::VerbSyntax, 14) => Some("direct object"),
            (SlotKind::VerbSyntax, 13) => Some("indirect object"),
            (SlotKind::VerbSyntax, 12) => Some("direct object is implicit"),
            (SlotKind::VerbSyntax, 11) => Some("indirect object comes first"),
            (SlotKind::VerbSyntax, 10) => Some("default syntax for orphans"),
            (SlotKind::ObjectDescription, 14) => Some("search adventurer"),
            (SlotKind::ObjectDescription, 13) => Some("search room"),
            (SlotKind::ObjectDescription, 12) => Some("try to take"),
            (SlotKind::ObjectDescription, 11) => Some("must have"),
            (SlotKind::ObjectDescription, 10) => Some("qualifying bits"),
            (SlotKind::ObjectDescription, 9) => Some("must be reachable"),
            _ => None,
        }
    }
}

pub struct Annotated<'a> {
    report: &'a BitReport,
    kind: SlotKind,
}

impl fmt::Display for Annotated<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "low bits: {} ({})",
            self.report.low_bits,
            self.kind.id_name()
        )?;
        for &bit in &self.report.set_bits {
            match self.kind.flag_name(bit) {
                Some(name) => writeln!(f, "Bit {} is true. ({})", bit, name)?,
                None => writeln!(f, "Bit {} is true.", bit)?,
            }
        }
        write!(f, "All other bits are false.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_single_high_bit() {
        let report = parse_number(0x0105);
        assert_eq!(report.low_bits, 5);
        assert_eq!(report.set_bits, vec![8]);
        assert_eq!(
            report.to_string(),
            "low bits: 5\nBit 8 is true.\nAll other bits are false."
        );
    }

    #[test]
    fn test_all_high_bits() {
        let report = parse_number(0xFF00);
        assert_eq!(report.low_bits, 0);
        assert_eq!(report.set_bits, (8..=15).collect::<Vec<u8>>());
    }

    #[test]
    fn test_no_high_bits() {
        let report = parse_number(200);
        assert_eq!(report.low_bits, 200);
        assert!(report.set_bits.is_empty());
        assert_eq!(report.to_string(), "low bits: 200\nAll other bits are false.");
    }

    #[test]
    fn test_bits_ascending() {
        let report = parse_number(0x8100 | 0x2000);
        assert_eq!(report.set_bits, vec![8, 13, 15]);
        assert!(report.is_set(13));
        assert!(!report.is_set(14));
    }

    #[test]
    fn test_out_of_range_inputs() {
        // -1 marks an unused slot in the verb table
        let report = parse_number(-1);
        assert_eq!(report.low_bits, 255);
        assert_eq!(report.set_bits, (8..=15).collect::<Vec<u8>>());

        // bits above 15 are ignored
        assert_eq!(parse_number(0x1_0105), parse_number(0x0105));
    }

    #[test]
    fn test_verb_syntax_annotation() {
        // direct object, verb 56
        let report = parse_number(0x4000 | 56);
        assert_eq!(
            report.annotated(SlotKind::VerbSyntax).to_string(),
            "low bits: 56 (verb id)\nBit 14 is true. (direct object)\nAll other bits are false."
        );
    }

    #[test]
    fn test_object_annotation_leaves_unnamed_bits_plain() {
        let report = parse_number(0x8200);
        assert_eq!(
            report.annotated(SlotKind::ObjectDescription).to_string(),
            "low bits: 0 (preposition id)\nBit 9 is true. (must be reachable)\nBit 15 is true.\nAll other bits are false."
        );
    }
}
