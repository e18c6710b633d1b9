//! Integrity checker (§4.6): scans the inverse map in key order and verifies
//! that ranges abut with no gaps or overlaps.

use crate::inverse_map::InverseMap;
use crate::range::SatoshiRange;
use tracing::{error, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hole {
    pub prev_hi: u64,
    pub next_lo: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overlap {
    pub prev_hi: u64,
    pub next_lo: u64,
}

#[derive(Debug, Clone, Default)]
pub struct IntegrityReport {
    pub holes: Vec<Hole>,
    pub overlaps: Vec<Overlap>,
    /// The final `hi` seen; must equal the total satoshis minted so far (P1).
    pub final_hi: u64,
}

impl IntegrityReport {
    pub fn is_clean(&self) -> bool {
        self.holes.is_empty() && self.overlaps.is_empty()
    }
}

/// Walks `inverse` in key order, logging any hole (`prev.hi < next.lo`) as a
/// warning and any overlap (`prev.hi > next.lo`) as an error — overlaps
/// should be structurally impossible unless an invariant broke elsewhere.
pub fn integrity_check(inverse: &InverseMap) -> IntegrityReport {
    let mut report = IntegrityReport::default();
    let mut prev: Option<SatoshiRange> = None;

    for (range, outpt) in inverse.iter() {
        if let Some(p) = prev {
            match p.hi.cmp(&range.lo) {
                std::cmp::Ordering::Less => {
                    let hole = Hole { prev_hi: p.hi, next_lo: range.lo };
                    warn!(
                        "integrity: hole [{}, {}) before {}",
                        hole.prev_hi, hole.next_lo, outpt
                    );
                    report.holes.push(hole);
                }
                std::cmp::Ordering::Greater => {
                    let overlap = Overlap { prev_hi: p.hi, next_lo: range.lo };
                    error!(
                        "integrity: overlap, previous range ends at {} but {} starts at {}",
                        overlap.prev_hi, outpt, overlap.next_lo
                    );
                    report.overlaps.push(overlap);
                }
                std::cmp::Ordering::Equal => {}
            }
        }
        report.final_hi = range.hi;
        prev = Some(*range);
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outpoint::Outpoint;

    fn range(lo: u64, hi: u64) -> SatoshiRange {
        SatoshiRange::new(lo, hi).unwrap()
    }

    #[test]
    fn clean_map_reports_no_holes_or_overlaps() {
        let mut inv = InverseMap::new();
        inv.insert(range(0, 50), Outpoint::new([1u8; 32], 0));
        inv.insert(range(50, 100), Outpoint::new([2u8; 32], 0));

        let report = integrity_check(&inv);
        assert!(report.is_clean());
        assert_eq!(report.final_hi, 100);
    }

    #[test]
    fn detects_a_hole() {
        let mut inv = InverseMap::new();
        inv.insert(range(0, 10), Outpoint::new([1u8; 32], 0));
        inv.insert(range(20, 30), Outpoint::new([2u8; 32], 0));

        let report = integrity_check(&inv);
        assert_eq!(report.holes, vec![Hole { prev_hi: 10, next_lo: 20 }]);
        assert!(report.overlaps.is_empty());
        assert!(!report.is_clean());
    }

    #[test]
    fn detects_an_overlap() {
        // Only reachable via a broken invariant elsewhere; constructed here
        // directly against the inverse map to exercise the checker in isolation.
        let mut inv = InverseMap::new();
        inv.insert(range(0, 20), Outpoint::new([1u8; 32], 0));
        inv.insert(range(10, 30), Outpoint::new([2u8; 32], 0));

        let report = integrity_check(&inv);
        assert_eq!(report.overlaps, vec![Overlap { prev_hi: 20, next_lo: 10 }]);
        assert!(!report.is_clean());
    }
}
