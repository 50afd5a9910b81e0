//! Pricing engine: cost calculators, channel fees and the wizard they feed.

pub mod app_state;
pub mod channel;
pub mod entities;
pub mod error;
pub mod fixed_costs;
pub mod labor;
pub mod materials;
pub mod pricing;
pub mod rates;
pub mod report;
pub mod salary;
pub mod session;
pub mod wizard;

pub use app_state::{AppState, Profile, RatesSource};
pub use channel::{ChannelBreakdown, ChannelCostEvaluator};
pub use entities::{
    ChannelConfig, ChannelKind, Employee, EmploymentType, FixedExpense, Gateway, ItemId,
    LaborConfig, LineItem, ListingTier, ManualCommission, PayFrequency, Shift, SoloLabor,
    TaxProfile, TeamLabor,
};
pub use error::{PricingError, PricingResult};
pub use fixed_costs::FixedCostAllocator;
pub use labor::{hire_from_agreement, LaborEstimator};
pub use materials::MaterialsLedger;
pub use pricing::{
    aggregate, CostBasis, FixedPointSolver, PriceQuote, PricingStrategy, Resolution,
    SinglePassSeed, StrategyChoice,
};
pub use rates::{RateEntry, RateTables};
pub use report::{ReportRow, ReportSnapshot};
pub use salary::{check_salary, SalaryCheck, SalaryCheckInput, SalaryVerdict};
pub use session::{BusinessType, PricingSession, DEFAULT_MARKUP_PCT, MARKUP_SLIDER_MAX};
pub use wizard::{CalcStep, Industry, ViewState, Wizard};
