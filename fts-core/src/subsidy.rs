//! Pluggable block-subsidy schedule (§4.8, §9 "Halving omission").

/// Maps a block height to the total number of satoshis minted *before* that
/// height, i.e. the identity of the first satoshi minted in block `height`.
///
/// `Tracker` only ever calls `subsidy_before`, never a per-block reward
/// function directly, since the inverse map is keyed by cumulative identity,
/// not by per-block amount.
pub trait SubsidySchedule: Send + Sync {
    fn subsidy_before(&self, height: u64) -> u64;
}

/// Flat 50 BTC/block subsidy with no halving. This is the tracker's default:
/// it preserves numeric parity with the source tool, which never modeled
/// halvings (see SPEC_FULL.md §9).
#[derive(Clone, Copy, Debug)]
pub struct FlatSubsidy {
    pub subsidy_sats: u64,
}

impl FlatSubsidy {
    pub const BTC_SUBSIDY_SATS: u64 = 5_000_000_000;

    pub fn new(subsidy_sats: u64) -> Self {
        Self { subsidy_sats }
    }
}

impl Default for FlatSubsidy {
    fn default() -> Self {
        Self::new(Self::BTC_SUBSIDY_SATS)
    }
}

impl SubsidySchedule for FlatSubsidy {
    fn subsidy_before(&self, height: u64) -> u64 {
        (height - 1) * self.subsidy_sats
    }
}

/// Real-Bitcoin-style halving schedule, provided as a documented alternative
/// to [`FlatSubsidy`]. Not used by `Tracker`'s default configuration.
#[derive(Clone, Copy, Debug)]
pub struct HalvingSubsidy {
    pub initial_reward_sats: u64,
    pub halving_interval: u64,
}

impl HalvingSubsidy {
    pub fn new(initial_reward_sats: u64, halving_interval: u64) -> Self {
        Self {
            initial_reward_sats,
            halving_interval,
        }
    }

    fn reward_at(&self, height: u64) -> u64 {
        let halvings = (height.saturating_sub(1)) / self.halving_interval;
        if halvings >= 64 {
            return 0;
        }
        self.initial_reward_sats >> halvings
    }
}

impl SubsidySchedule for HalvingSubsidy {
    fn subsidy_before(&self, height: u64) -> u64 {
        let mut total = 0u64;
        let mut h = 1u64;
        while h < height {
            // Sum a whole halving era at once instead of block-by-block, so
            // `subsidy_before` stays cheap even at mainnet-scale heights.
            let era_start = h;
            let halvings = (era_start.saturating_sub(1)) / self.halving_interval;
            let era_end = (halvings + 1) * self.halving_interval + 1;
            let next = era_end.min(height);
            let blocks_in_era = next - era_start;
            total += blocks_in_era * self.reward_at(era_start);
            h = next;
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_subsidy_matches_source_formula() {
        let s = FlatSubsidy::default();
        assert_eq!(s.subsidy_before(1), 0);
        assert_eq!(s.subsidy_before(2), 5_000_000_000);
        assert_eq!(s.subsidy_before(3), 10_000_000_000);
    }

    #[test]
    fn halving_subsidy_matches_flat_before_first_halving() {
        let flat = FlatSubsidy::default();
        let halving = HalvingSubsidy::new(5_000_000_000, 210_000);
        for h in 1..=100 {
            assert_eq!(flat.subsidy_before(h), halving.subsidy_before(h));
        }
    }

    #[test]
    fn halving_subsidy_diverges_after_interval() {
        let halving = HalvingSubsidy::new(50, 10);
        // blocks 1..=10 mint 50 each, so everything minted before block 11 is 10 * 50
        assert_eq!(halving.subsidy_before(11), 10 * 50);
        // blocks 11..=20 mint 25 each (first halving)
        assert_eq!(halving.subsidy_before(21), 10 * 50 + 10 * 25);
    }
}
