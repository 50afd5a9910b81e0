pub mod channel_step;
pub mod cost_table;
pub mod fixed_costs_step;
pub mod kpi_card;
pub mod labor_step;
pub mod materials_step;
pub mod number_field;
pub mod price_step;
pub mod toast;

pub use channel_step::ChannelStep;
pub use fixed_costs_step::FixedCostsStep;
pub use labor_step::LaborStep;
pub use materials_step::MaterialsStep;
pub use price_step::PriceStep;
