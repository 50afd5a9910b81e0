use serde::{Deserialize, Serialize};

use super::channel::ChannelCostEvaluator;
use super::entities::{ChannelConfig, LaborConfig, SoloLabor, TeamLabor};
use super::fixed_costs::FixedCostAllocator;
use super::labor::LaborEstimator;
use super::materials::MaterialsLedger;
use super::pricing::{aggregate, CostBasis, PriceQuote, PricingStrategy, StrategyChoice};
use super::rates::RateTables;

pub const DEFAULT_MARKUP_PCT: f64 = 30.0;
/// Ceiling of the markup slider. The formula itself does not enforce it.
pub const MARKUP_SLIDER_MAX: f64 = 200.0;

/// Which labor calculator the user works with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BusinessType {
    #[default]
    Solo,
    Team,
}

/// Accumulated inputs of one wizard run, plus the evaluators built from the
/// active rate tables. Every read recomputes from scratch.
#[derive(Clone, Debug, PartialEq)]
pub struct PricingSession {
    pub product_name: String,
    pub materials: MaterialsLedger,
    pub labor: LaborConfig,
    pub fixed: FixedCostAllocator,
    pub channel: ChannelConfig,
    pub markup_pct: f64,
    pub strategy: StrategyChoice,
    finalized_price: Option<f64>,
    tables: RateTables,
    labor_estimator: LaborEstimator,
    channel_evaluator: ChannelCostEvaluator,
}

impl Default for PricingSession {
    fn default() -> Self {
        Self::new(RateTables::default())
    }
}

impl PricingSession {
    pub fn new(tables: RateTables) -> Self {
        Self {
            product_name: String::new(),
            materials: MaterialsLedger::with_example(),
            labor: LaborConfig::default(),
            fixed: FixedCostAllocator::default(),
            channel: ChannelConfig::default(),
            markup_pct: DEFAULT_MARKUP_PCT,
            strategy: StrategyChoice::default(),
            finalized_price: None,
            labor_estimator: LaborEstimator::new(tables.labor.clone()),
            channel_evaluator: ChannelCostEvaluator::new(tables.clone()),
            tables,
        }
    }

    /// A session with no example rows and no default expenses.
    pub fn blank(tables: RateTables) -> Self {
        Self {
            materials: MaterialsLedger::new(),
            fixed: FixedCostAllocator::empty(100),
            ..Self::new(tables)
        }
    }

    pub fn tables(&self) -> &RateTables {
        &self.tables
    }

    pub fn labor_estimator(&self) -> &LaborEstimator {
        &self.labor_estimator
    }

    pub fn channel_evaluator(&self) -> &ChannelCostEvaluator {
        &self.channel_evaluator
    }

    /// Swaps in updated tables; inputs are kept.
    pub fn set_tables(&mut self, tables: RateTables) {
        self.labor_estimator = LaborEstimator::new(tables.labor.clone());
        self.channel_evaluator = ChannelCostEvaluator::new(tables.clone());
        self.tables = tables;
    }

    /// Switches labor mode, keeping the other mode's defaults out of the way.
    pub fn set_business_type(&mut self, business: BusinessType) {
        match (business, &self.labor) {
            (BusinessType::Solo, LaborConfig::Solo(_)) | (BusinessType::Team, LaborConfig::Team(_)) => {}
            (BusinessType::Solo, _) => self.labor = LaborConfig::Solo(SoloLabor::default()),
            (BusinessType::Team, _) => self.labor = LaborConfig::Team(TeamLabor::default()),
        }
    }

    pub fn set_markup(&mut self, markup_pct: f64) {
        self.markup_pct = if markup_pct.is_finite() {
            markup_pct.max(0.0)
        } else {
            0.0
        };
    }

    pub fn finalized_price(&self) -> Option<f64> {
        self.finalized_price
    }

    /// Feeds the current suggested price back as the channel's candidate
    /// price for the next pass.
    pub fn finalize(&mut self) -> PriceQuote {
        let quote = self.quote();
        self.finalized_price = Some(quote.suggested_price);
        quote
    }

    pub fn clear_finalized(&mut self) {
        self.finalized_price = None;
    }

    pub fn materials_total(&self) -> f64 {
        self.materials.total()
    }

    pub fn labor_cost_per_unit(&self) -> f64 {
        self.labor_estimator.cost_per_unit(&self.labor)
    }

    pub fn fixed_cost_per_unit(&self) -> f64 {
        self.fixed.cost_per_unit()
    }

    pub fn production_cost(&self) -> f64 {
        self.materials_total() + self.labor_cost_per_unit()
    }

    pub fn quote(&self) -> PriceQuote {
        let materials_total = self.materials_total();
        let labor_cost_per_unit = self.labor_cost_per_unit();
        let fixed_cost_per_unit = self.fixed_cost_per_unit();
        let production_cost = materials_total + labor_cost_per_unit;

        let basis = CostBasis {
            production_cost,
            base_cost: production_cost + fixed_cost_per_unit,
            markup_pct: self.markup_pct,
            finalized_price: self.finalized_price,
        };
        let evaluate = |price: f64| self.channel_evaluator.evaluate(&self.channel, price).total();
        let resolution = self.strategy.resolve(&basis, &evaluate);

        let channel = self
            .channel_evaluator
            .evaluate(&self.channel, resolution.price);
        let channel_cost = channel.total();
        let (total_cost, profit, suggested_price) = aggregate(
            materials_total,
            labor_cost_per_unit,
            fixed_cost_per_unit,
            channel_cost,
            self.markup_pct,
        );

        PriceQuote {
            materials_total,
            labor_cost_per_unit,
            fixed_cost_per_unit,
            channel_cost,
            channel,
            candidate_price: resolution.price,
            strategy: self.strategy.name().to_string(),
            converged: resolution.converged,
            iterations: resolution.iterations,
            markup_pct: self.markup_pct.max(0.0),
            total_cost,
            profit,
            suggested_price,
        }
    }
}
