//! Pure pricing and duration rules for matching a job to a node.
//!
//! Both formulas share the project's size factor:
//!
//! - `duration = size_factor * (100 / bandwidth)` ticks
//! - `cost = size_factor * rate(tier)` currency units
//!
//! Values are exact in `f64` / `u32`; nothing is rounded.

use crate::attrs::{PricingTier, ProjectSize};

/// Bandwidth that completes a size-1 job in exactly one tick.
pub const REFERENCE_BANDWIDTH: f64 = 100.0;

/// Duration and cost quoted for a single job on a single node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quote {
    /// Completion time in ticks.
    pub duration: f64,
    /// Price in currency units.
    pub cost: u32,
}

/// The matching rule. Stateless; every method is a pure function.
#[derive(Clone, Copy, Debug, Default)]
pub struct AllocationPolicy;

impl AllocationPolicy {
    /// Multiplier derived from project size: small 1, medium 2, large 3.
    pub fn size_factor(size: ProjectSize) -> u32 {
        match size {
            ProjectSize::Small => 1,
            ProjectSize::Medium => 2,
            ProjectSize::Large => 3,
        }
    }

    /// Per-size-unit price: low 10, medium 20, high 30.
    pub fn price_rate(tier: PricingTier) -> u32 {
        match tier {
            PricingTier::Low => 10,
            PricingTier::Medium => 20,
            PricingTier::High => 30,
        }
    }

    /// Completion time in ticks for `size_factor` on a node with
    /// `bandwidth`.
    ///
    /// `bandwidth` must be positive; populations reject zero bandwidth
    /// at construction.
    pub fn duration(size_factor: u32, bandwidth: u32) -> f64 {
        f64::from(size_factor) * (REFERENCE_BANDWIDTH / f64::from(bandwidth))
    }

    /// Price for `size_factor` on a node in `tier`.
    ///
    /// `size_factor` must come from [`size_factor`](Self::size_factor),
    /// i.e. lie in `1..=3`, which keeps the product far below `u32::MAX`.
    pub fn cost(size_factor: u32, tier: PricingTier) -> u32 {
        debug_assert!(
            (1..=3).contains(&size_factor),
            "size factor {size_factor} outside 1..=3"
        );
        size_factor * Self::price_rate(tier)
    }

    /// Quote a project of `size` on a node with `tier` and `bandwidth`.
    pub fn quote(size: ProjectSize, tier: PricingTier, bandwidth: u32) -> Quote {
        let factor = Self::size_factor(size);
        Quote {
            duration: Self::duration(factor, bandwidth),
            cost: Self::cost(factor, tier),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn size_factors() {
        assert_eq!(AllocationPolicy::size_factor(ProjectSize::Small), 1);
        assert_eq!(AllocationPolicy::size_factor(ProjectSize::Medium), 2);
        assert_eq!(AllocationPolicy::size_factor(ProjectSize::Large), 3);
    }

    #[test]
    fn price_rates() {
        assert_eq!(AllocationPolicy::price_rate(PricingTier::Low), 10);
        assert_eq!(AllocationPolicy::price_rate(PricingTier::Medium), 20);
        assert_eq!(AllocationPolicy::price_rate(PricingTier::High), 30);
    }

    #[test]
    fn small_job_on_reference_bandwidth_takes_one_tick() {
        let q = AllocationPolicy::quote(ProjectSize::Small, PricingTier::Low, 100);
        assert_eq!(q.duration, 1.0);
        assert_eq!(q.cost, 10);
    }

    #[test]
    fn large_job_on_high_tier_costs_ninety() {
        let q = AllocationPolicy::quote(ProjectSize::Large, PricingTier::High, 37);
        assert_eq!(q.cost, 90);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "size factor 0 outside 1..=3")]
    fn cost_rejects_factor_outside_domain() {
        AllocationPolicy::cost(0, PricingTier::Low);
    }

    #[test]
    fn duration_is_not_rounded() {
        assert_eq!(AllocationPolicy::duration(2, 40), 5.0);
        assert_eq!(AllocationPolicy::duration(1, 30), 100.0 / 30.0);
        assert_eq!(AllocationPolicy::duration(3, 99), 3.0 * (100.0 / 99.0));
    }

    fn arb_size() -> impl Strategy<Value = ProjectSize> {
        prop::sample::select(ProjectSize::ALL.to_vec())
    }

    fn arb_tier() -> impl Strategy<Value = PricingTier> {
        prop::sample::select(PricingTier::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn quote_matches_component_formulas(
            size in arb_size(),
            tier in arb_tier(),
            bandwidth in 1u32..1000,
        ) {
            let q = AllocationPolicy::quote(size, tier, bandwidth);
            let factor = AllocationPolicy::size_factor(size);
            prop_assert_eq!(q.duration, AllocationPolicy::duration(factor, bandwidth));
            prop_assert_eq!(q.cost, factor * AllocationPolicy::price_rate(tier));
            prop_assert!(q.duration > 0.0);
        }

        #[test]
        fn more_bandwidth_never_slows_a_job(
            size in arb_size(),
            bandwidth in 1u32..999,
        ) {
            let factor = AllocationPolicy::size_factor(size);
            prop_assert!(
                AllocationPolicy::duration(factor, bandwidth + 1)
                    <= AllocationPolicy::duration(factor, bandwidth)
            );
        }
    }
}
