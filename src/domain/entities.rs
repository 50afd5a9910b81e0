use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::{non_negative, PricingResult};

pub type ItemId = Uuid;

/// One direct material or packaging cost per unit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: ItemId,
    pub name: String,
    pub unit_cost: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FixedExpense {
    pub id: ItemId,
    pub name: String,
    pub monthly_amount: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmploymentType {
    /// On payroll; employer pays social charges on top of gross pay.
    Formal,
    /// Invoices directly; no charges.
    Contractor,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PayFrequency {
    Fixed,
    Hourly,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shift {
    #[default]
    FullTime,
    PartTime,
}

impl Shift {
    pub fn label(&self) -> &'static str {
        match self {
            Shift::FullTime => "Full-Time",
            Shift::PartTime => "Part-Time",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: ItemId,
    pub role: String,
    pub employment_type: EmploymentType,
    /// Gross monthly pay for formal staff; monthly fee or hourly rate for contractors.
    pub base_value: f64,
    pub pay_frequency: PayFrequency,
    pub estimated_monthly_hours: Option<f64>,
}

impl Employee {
    pub fn formal(role: impl Into<String>, gross_monthly: f64) -> PricingResult<Self> {
        Ok(Self {
            id: Uuid::new_v4(),
            role: role.into(),
            employment_type: EmploymentType::Formal,
            base_value: non_negative("base_value", gross_monthly)?,
            pay_frequency: PayFrequency::Fixed,
            estimated_monthly_hours: None,
        })
    }

    /// A contractor paid a fixed monthly fee.
    pub fn contractor(role: impl Into<String>, monthly_fee: f64) -> PricingResult<Self> {
        Ok(Self {
            id: Uuid::new_v4(),
            role: contractor_role(role.into()),
            employment_type: EmploymentType::Contractor,
            base_value: non_negative("base_value", monthly_fee)?,
            pay_frequency: PayFrequency::Fixed,
            estimated_monthly_hours: None,
        })
    }

    pub fn hourly_contractor(
        role: impl Into<String>,
        hourly_rate: f64,
        monthly_hours: f64,
    ) -> PricingResult<Self> {
        Ok(Self {
            id: Uuid::new_v4(),
            role: contractor_role(role.into()),
            employment_type: EmploymentType::Contractor,
            base_value: non_negative("base_value", hourly_rate)?,
            pay_frequency: PayFrequency::Hourly,
            estimated_monthly_hours: Some(non_negative("estimated_monthly_hours", monthly_hours)?),
        })
    }
}

fn contractor_role(role: String) -> String {
    if role.trim().is_empty() {
        "Servicio Externo".to_string()
    } else {
        role
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SoloLabor {
    pub monthly_salary: f64,
    pub hours_per_day: f64,
    pub days_per_week: f64,
    pub minutes_per_unit: f64,
    /// Off for pure resale, where nobody spends time on the product.
    pub active: bool,
}

impl SoloLabor {
    pub fn new(
        monthly_salary: f64,
        hours_per_day: f64,
        days_per_week: f64,
        minutes_per_unit: f64,
    ) -> PricingResult<Self> {
        Ok(Self {
            monthly_salary: non_negative("monthly_salary", monthly_salary)?,
            hours_per_day: non_negative("hours_per_day", hours_per_day)?,
            days_per_week: non_negative("days_per_week", days_per_week)?,
            minutes_per_unit: non_negative("minutes_per_unit", minutes_per_unit)?,
            active: true,
        })
    }
}

impl Default for SoloLabor {
    fn default() -> Self {
        Self {
            monthly_salary: 500_000.0,
            hours_per_day: 6.0,
            days_per_week: 5.0,
            minutes_per_unit: 30.0,
            active: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeamLabor {
    pub roster: Vec<Employee>,
    pub minutes_per_unit: f64,
}

impl Default for TeamLabor {
    fn default() -> Self {
        Self {
            roster: Vec::new(),
            minutes_per_unit: 30.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum LaborConfig {
    Solo(SoloLabor),
    Team(TeamLabor),
}

impl Default for LaborConfig {
    fn default() -> Self {
        LaborConfig::Solo(SoloLabor::default())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListingTier {
    #[default]
    Standard,
    Premium,
}

impl ListingTier {
    pub fn label(&self) -> &'static str {
        match self {
            ListingTier::Standard => "Clásica",
            ListingTier::Premium => "Premium",
        }
    }
}

/// Province withholding setup shared by marketplace and own-store sales.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TaxProfile {
    pub province: String,
    /// Simplified-regime registrants are exempt from per-sale withholding.
    pub simplified_regime: bool,
}

impl Default for TaxProfile {
    fn default() -> Self {
        Self {
            province: "ba".to_string(),
            simplified_regime: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Gateway {
    Listed(String),
    /// Percentage typed in by the user.
    Custom(f64),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ManualCommission {
    pub id: ItemId,
    pub name: String,
    pub percentage: f64,
}

impl ManualCommission {
    pub fn new(name: impl Into<String>, percentage: f64) -> PricingResult<Self> {
        Ok(Self {
            id: Uuid::new_v4(),
            name: name.into(),
            percentage: non_negative("percentage", percentage)?,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ChannelConfig {
    Marketplace {
        tier: ListingTier,
        free_shipping: bool,
        tax: TaxProfile,
    },
    OwnStore {
        platform: String,
        gateway: Gateway,
        tax: TaxProfile,
    },
    Manual(Vec<ManualCommission>),
}

impl ChannelConfig {
    pub fn default_marketplace() -> Self {
        ChannelConfig::Marketplace {
            tier: ListingTier::Standard,
            free_shipping: false,
            tax: TaxProfile::default(),
        }
    }

    pub fn default_own_store() -> Self {
        ChannelConfig::OwnStore {
            platform: "tiendanube".to_string(),
            // Must be a listed key: unlisted gateways resolve to 0%.
            gateway: Gateway::Listed("mp_credit".to_string()),
            tax: TaxProfile::default(),
        }
    }

    pub fn default_manual() -> Self {
        ChannelConfig::Manual(vec![
            ManualCommission {
                id: Uuid::new_v4(),
                name: "Comisión Venta".to_string(),
                percentage: 10.0,
            },
            ManualCommission {
                id: Uuid::new_v4(),
                name: "Impuestos (IIBB)".to_string(),
                percentage: 3.5,
            },
        ])
    }

    pub fn kind(&self) -> ChannelKind {
        match self {
            ChannelConfig::Marketplace { .. } => ChannelKind::Marketplace,
            ChannelConfig::OwnStore { .. } => ChannelKind::OwnStore,
            ChannelConfig::Manual(_) => ChannelKind::Manual,
        }
    }
}

impl Default for ChannelConfig {
    fn default() -> Self {
        ChannelConfig::default_marketplace()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChannelKind {
    Marketplace,
    OwnStore,
    Manual,
}

impl ChannelKind {
    pub fn label(&self) -> &'static str {
        match self {
            ChannelKind::Marketplace => "Mercado Libre",
            ChannelKind::OwnStore => "Tienda / Local",
            ChannelKind::Manual => "Manual",
        }
    }
}
