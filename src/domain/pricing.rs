//! Markup, suggested price, and how the channel's candidate price is chosen.
//!
//! Channel fees depend on the selling price, and the selling price depends on
//! the fees. A [`PricingStrategy`] decides which candidate price the channel
//! is evaluated at. [`SinglePassSeed`] is the default: it evaluates once at
//! twice the production cost (or at the last finalized price) and does not
//! iterate. [`FixedPointSolver`] iterates until the price reproduces itself.

use serde::{Deserialize, Serialize};

use super::channel::ChannelBreakdown;

/// Costs known before the channel is priced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CostBasis {
    /// Materials plus labor.
    pub production_cost: f64,
    /// Production plus fixed costs per unit.
    pub base_cost: f64,
    pub markup_pct: f64,
    /// Price the user accepted on a previous pass, if any.
    pub finalized_price: Option<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    pub price: f64,
    pub iterations: u32,
    pub converged: bool,
}

pub trait PricingStrategy {
    fn name(&self) -> &'static str;

    /// Picks the candidate price at which channel costs are evaluated.
    /// `channel_cost` maps a candidate price to the channel total.
    fn resolve(&self, basis: &CostBasis, channel_cost: &dyn Fn(f64) -> f64) -> Resolution;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SinglePassSeed;

impl SinglePassSeed {
    pub const SEED_FACTOR: f64 = 2.0;
}

impl PricingStrategy for SinglePassSeed {
    fn name(&self) -> &'static str {
        "single-pass"
    }

    fn resolve(&self, basis: &CostBasis, _channel_cost: &dyn Fn(f64) -> f64) -> Resolution {
        let price = basis
            .finalized_price
            .filter(|price| price.is_finite() && *price > 0.0)
            .unwrap_or(basis.production_cost * Self::SEED_FACTOR);
        Resolution {
            price,
            iterations: 0,
            converged: false,
        }
    }
}

/// Iterates `p = (base + channel(p)) * (1 + markup)` to a fixed point.
///
/// Steep percentage stacks combined with a large markup can make the map
/// expand instead of contract; the iteration cap bounds that case and the
/// resolution reports `converged: false`. Flat surcharges below a price
/// threshold can leave no fixed point at all, and the iteration settles into
/// a 2-cycle around the threshold. An unconverged run resolves to whichever
/// of its last two prices carries the higher channel cost, so the resulting
/// price still covers the fees it would pay.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FixedPointSolver {
    pub max_iterations: u32,
    pub tolerance: f64,
}

impl Default for FixedPointSolver {
    fn default() -> Self {
        Self {
            max_iterations: 64,
            tolerance: 0.01,
        }
    }
}

impl PricingStrategy for FixedPointSolver {
    fn name(&self) -> &'static str {
        "fixed-point"
    }

    fn resolve(&self, basis: &CostBasis, channel_cost: &dyn Fn(f64) -> f64) -> Resolution {
        let factor = 1.0 + basis.markup_pct.max(0.0) / 100.0;
        let mut price = basis.base_cost * factor;
        let mut previous = price;

        for iteration in 1..=self.max_iterations {
            let next = (basis.base_cost + channel_cost(price)) * factor;
            if !next.is_finite() {
                break;
            }
            let delta = (next - price).abs();
            previous = price;
            price = next;
            if delta < self.tolerance {
                return Resolution {
                    price,
                    iterations: iteration,
                    converged: true,
                };
            }
        }

        let covering = if channel_cost(previous) > channel_cost(price) {
            previous
        } else {
            price
        };
        Resolution {
            price: covering,
            iterations: self.max_iterations,
            converged: false,
        }
    }
}

/// The strategies a session can be configured with.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum StrategyChoice {
    SinglePass(SinglePassSeed),
    FixedPoint(FixedPointSolver),
}

impl Default for StrategyChoice {
    fn default() -> Self {
        StrategyChoice::SinglePass(SinglePassSeed)
    }
}

impl PricingStrategy for StrategyChoice {
    fn name(&self) -> &'static str {
        match self {
            StrategyChoice::SinglePass(inner) => inner.name(),
            StrategyChoice::FixedPoint(inner) => inner.name(),
        }
    }

    fn resolve(&self, basis: &CostBasis, channel_cost: &dyn Fn(f64) -> f64) -> Resolution {
        match self {
            StrategyChoice::SinglePass(inner) => inner.resolve(basis, channel_cost),
            StrategyChoice::FixedPoint(inner) => inner.resolve(basis, channel_cost),
        }
    }
}

/// Everything the UI reads back after a recomputation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub materials_total: f64,
    pub labor_cost_per_unit: f64,
    pub fixed_cost_per_unit: f64,
    pub channel_cost: f64,
    pub channel: ChannelBreakdown,
    /// Price the channel was evaluated at.
    pub candidate_price: f64,
    pub strategy: String,
    /// False when an iterating strategy gave up before settling; the
    /// candidate price is then an upper-fee estimate, not an exact price.
    pub converged: bool,
    pub iterations: u32,
    pub markup_pct: f64,
    pub total_cost: f64,
    pub profit: f64,
    pub suggested_price: f64,
}

impl PriceQuote {
    pub fn production_cost(&self) -> f64 {
        self.materials_total + self.labor_cost_per_unit
    }
}

/// Sums the per-unit costs and applies markup. Negative markup counts as zero.
pub fn aggregate(
    materials_total: f64,
    labor_cost_per_unit: f64,
    fixed_cost_per_unit: f64,
    channel_cost: f64,
    markup_pct: f64,
) -> (f64, f64, f64) {
    let total_cost = materials_total + labor_cost_per_unit + fixed_cost_per_unit + channel_cost;
    let profit = total_cost * markup_pct.max(0.0) / 100.0;
    (total_cost, profit, total_cost + profit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn basis(production: f64, base: f64, markup: f64) -> CostBasis {
        CostBasis {
            production_cost: production,
            base_cost: base,
            markup_pct: markup,
            finalized_price: None,
        }
    }

    #[test]
    fn seed_is_twice_production_cost() {
        let resolution = SinglePassSeed.resolve(&basis(5_000.0, 5_400.0, 30.0), &|_| 0.0);
        assert_eq!(resolution.price, 10_000.0);
        assert_eq!(resolution.iterations, 0);
    }

    #[test]
    fn seed_prefers_finalized_price() {
        let mut b = basis(5_000.0, 5_400.0, 30.0);
        b.finalized_price = Some(8_200.0);
        assert_eq!(SinglePassSeed.resolve(&b, &|_| 0.0).price, 8_200.0);

        b.finalized_price = Some(0.0);
        assert_eq!(SinglePassSeed.resolve(&b, &|_| 0.0).price, 10_000.0);
    }

    #[test]
    fn solver_reaches_linear_fixed_point() {
        // p = 1000 + 0.1 p  =>  p = 1111.11
        let resolution = FixedPointSolver::default()
            .resolve(&basis(1_000.0, 1_000.0, 0.0), &|price| price * 0.1);
        assert!(resolution.converged);
        assert!((resolution.price - 1_111.111).abs() < 0.05);
    }

    #[test]
    fn solver_reports_divergence() {
        let solver = FixedPointSolver {
            max_iterations: 10,
            tolerance: 0.01,
        };
        let resolution = solver.resolve(&basis(1_000.0, 1_000.0, 200.0), &|price| price * 0.5);
        assert!(!resolution.converged);
        assert_eq!(resolution.iterations, 10);
    }

    #[test]
    fn solver_covers_fees_when_surcharge_leaves_no_fixed_point() {
        // Flat 300 fee below 1000: 800 -> 1100 -> 800 -> ...
        let surcharge = |price: f64| if price < 1_000.0 { 300.0 } else { 0.0 };
        let resolution = FixedPointSolver::default().resolve(&basis(800.0, 800.0, 0.0), &surcharge);
        assert!(!resolution.converged);
        assert_eq!(resolution.iterations, 64);
        assert_eq!(resolution.price, 800.0);
    }

    #[test]
    fn zero_markup_means_price_equals_cost() {
        let (total, profit, price) = aggregate(1_000.0, 500.0, 400.0, 100.0, 0.0);
        assert_eq!(total, 2_000.0);
        assert_eq!(profit, 0.0);
        assert_eq!(price, total);
    }

    #[test]
    fn markup_applies_to_total_cost() {
        let (total, profit, price) = aggregate(1_000.0, 500.0, 400.0, 100.0, 30.0);
        assert_eq!(total, 2_000.0);
        assert_eq!(profit, 600.0);
        assert_eq!(price, 2_600.0);

        let (_, profit, price) = aggregate(1_000.0, 0.0, 0.0, 0.0, -20.0);
        assert_eq!(profit, 0.0);
        assert_eq!(price, 1_000.0);
    }

    #[test]
    fn choice_delegates() {
        let choice = StrategyChoice::FixedPoint(FixedPointSolver::default());
        assert_eq!(choice.name(), "fixed-point");
        assert_eq!(StrategyChoice::default().name(), "single-pass");
    }
}
