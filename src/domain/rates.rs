//! Lookup tables the evaluators are built with.
//!
//! Every rate the engine applies lives here rather than inside the
//! calculators, so an updated schedule can be dropped in as a `rates.json`
//! without touching any formula. Percentages are stored as percent values
//! (`3.5` means 3.5%).

use serde::{Deserialize, Serialize};

use super::error::{PricingError, PricingResult};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RateEntry {
    pub key: String,
    pub label: String,
    pub pct: f64,
}

impl RateEntry {
    fn new(key: &str, label: &str, pct: f64) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            pct,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketplaceRates {
    pub standard_pct: f64,
    pub premium_pct: f64,
    /// Prices strictly between zero and this value pay the low-ticket fee.
    pub low_ticket_threshold: f64,
    pub low_ticket_surcharge: f64,
    /// From this price on shipping is mandatory.
    pub free_shipping_threshold: f64,
    pub shipping_cost: f64,
}

impl Default for MarketplaceRates {
    fn default() -> Self {
        Self {
            standard_pct: 14.0,
            premium_pct: 31.0,
            low_ticket_threshold: 15_000.0,
            low_ticket_surcharge: 1_500.0,
            free_shipping_threshold: 30_000.0,
            shipping_cost: 6_500.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaborRates {
    /// Employer cost multiplier over gross pay for formal employees.
    pub social_charge_multiplier: f64,
    /// Hours a team is assumed to operate per month.
    pub operational_monthly_hours: f64,
    pub weeks_per_month: f64,
}

impl Default for LaborRates {
    fn default() -> Self {
        Self {
            social_charge_multiplier: 1.35,
            operational_monthly_hours: 160.0,
            weeks_per_month: 4.2,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WageCategory {
    pub key: String,
    pub label: String,
    pub base: f64,
}

/// A collective agreement ("convenio") and the gross base pay of each category.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UnionAgreement {
    pub key: String,
    pub label: String,
    pub categories: Vec<WageCategory>,
}

impl UnionAgreement {
    pub fn category(&self, key: &str) -> Option<&WageCategory> {
        self.categories.iter().find(|category| category.key == key)
    }
}

/// Reference take-home salary used by the salary checker.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SalaryReference {
    pub key: String,
    pub label: String,
    pub amount: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateTables {
    pub marketplace: MarketplaceRates,
    pub provinces: Vec<RateEntry>,
    /// Withholding applied when a province is not in `provinces`.
    pub general_withholding_pct: f64,
    pub platforms: Vec<RateEntry>,
    pub gateways: Vec<RateEntry>,
    pub labor: LaborRates,
    pub agreements: Vec<UnionAgreement>,
    pub salary_references: Vec<SalaryReference>,
}

impl Default for RateTables {
    fn default() -> Self {
        Self {
            marketplace: MarketplaceRates::default(),
            provinces: vec![
                RateEntry::new("ba", "Buenos Aires", 3.5),
                RateEntry::new("caba", "CABA", 3.0),
                RateEntry::new("cba", "Córdoba", 4.75),
                RateEntry::new("sf", "Santa Fe", 4.5),
                RateEntry::new("tuc", "Tucumán", 5.0),
                RateEntry::new("mza", "Mendoza", 3.0),
            ],
            general_withholding_pct: 3.5,
            platforms: vec![
                RateEntry::new("tiendanube", "Tienda Nube", 2.0),
                RateEntry::new("empretienda", "Empretienda", 0.0),
                RateEntry::new("wix", "Wix eCommerce", 0.0),
                RateEntry::new("shopify", "Shopify", 2.0),
                RateEntry::new("personal", "Venta Directa / WhatsApp", 0.0),
            ],
            gateways: vec![
                RateEntry::new("mp_credit", "Mercado Pago (Crédito Inmediato)", 7.73),
                RateEntry::new("mp_qr", "Mercado Pago (QR Saldo)", 0.97),
                RateEntry::new("mp_point", "Mercado Pago Point (Débito)", 3.99),
                RateEntry::new("uala", "Ualá Bis", 5.93),
                RateEntry::new("payway_deb", "Payway (Débito)", 1.21),
                RateEntry::new("payway_cred", "Payway (Crédito Inmediato)", 6.65),
                RateEntry::new("getnet", "Getnet", 7.49),
                RateEntry::new("modo", "MODO / Transferencia", 0.0),
            ],
            labor: LaborRates::default(),
            agreements: default_agreements(),
            salary_references: vec![
                salary_reference("comercio_admin_a", "Comercio - Administrativo A", 950_000.0),
                salary_reference("comercio_vendedor_b", "Comercio - Vendedor B", 980_000.0),
                salary_reference("uocra_oficial", "Construcción - Oficial", 1_100_000.0),
                salary_reference("gastronomico_mozo", "Gastronómico - Mozo", 850_000.0),
                salary_reference("sanidad_enfermero", "Sanidad - Enfermero", 1_050_000.0),
            ],
        }
    }
}

fn salary_reference(key: &str, label: &str, amount: f64) -> SalaryReference {
    SalaryReference {
        key: key.to_string(),
        label: label.to_string(),
        amount,
    }
}

fn wage(key: &str, label: &str, base: f64) -> WageCategory {
    WageCategory {
        key: key.to_string(),
        label: label.to_string(),
        base,
    }
}

fn default_agreements() -> Vec<UnionAgreement> {
    vec![
        UnionAgreement {
            key: "comercio".to_string(),
            label: "Comercio (Ventas/Admin)".to_string(),
            categories: vec![
                wage("vendedor", "Vendedor", 950_000.0),
                wage("admin", "Administrativo", 980_000.0),
                wage("maestranza", "Maestranza", 890_000.0),
            ],
        },
        UnionAgreement {
            key: "gastro".to_string(),
            label: "Gastronomía (UTHGRA)".to_string(),
            categories: vec![
                wage("mozo", "Mozo / Camarera", 850_000.0),
                wage("cocinero", "Cocinero", 920_000.0),
                wage("ayudante", "Ayudante de Cocina", 800_000.0),
            ],
        },
        UnionAgreement {
            key: "otro".to_string(),
            label: "Otro Convenio / General".to_string(),
            categories: vec![wage("general", "Sueldo Base", 900_000.0)],
        },
    ]
}

impl RateTables {
    /// Parses a JSON override. Missing sections keep their built-in values.
    pub fn from_json(raw: &str) -> PricingResult<Self> {
        let tables: RateTables = serde_json::from_str(raw)
            .map_err(|err| PricingError::InvalidRateTable(err.to_string()))?;
        tables.validate()?;
        Ok(tables)
    }

    pub fn validate(&self) -> PricingResult<()> {
        let m = &self.marketplace;
        let scalars = [
            ("marketplace.standard_pct", m.standard_pct),
            ("marketplace.premium_pct", m.premium_pct),
            ("marketplace.low_ticket_threshold", m.low_ticket_threshold),
            ("marketplace.low_ticket_surcharge", m.low_ticket_surcharge),
            ("marketplace.free_shipping_threshold", m.free_shipping_threshold),
            ("marketplace.shipping_cost", m.shipping_cost),
            ("general_withholding_pct", self.general_withholding_pct),
            ("labor.social_charge_multiplier", self.labor.social_charge_multiplier),
            ("labor.operational_monthly_hours", self.labor.operational_monthly_hours),
            ("labor.weeks_per_month", self.labor.weeks_per_month),
        ];
        for (name, value) in scalars {
            if !value.is_finite() || value < 0.0 {
                return Err(PricingError::InvalidRateTable(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }

        let entries = self
            .provinces
            .iter()
            .chain(self.platforms.iter())
            .chain(self.gateways.iter());
        for entry in entries {
            if !entry.pct.is_finite() || entry.pct < 0.0 {
                return Err(PricingError::InvalidRateTable(format!(
                    "rate for {} must be a non-negative percentage, got {}",
                    entry.key, entry.pct
                )));
            }
        }

        for agreement in &self.agreements {
            if let Some(bad) = agreement
                .categories
                .iter()
                .find(|category| !category.base.is_finite() || category.base < 0.0)
            {
                return Err(PricingError::InvalidRateTable(format!(
                    "base pay for {}/{} must be non-negative",
                    agreement.key, bad.key
                )));
            }
        }

        if let Some(bad) = self
            .salary_references
            .iter()
            .find(|reference| !reference.amount.is_finite() || reference.amount <= 0.0)
        {
            return Err(PricingError::InvalidRateTable(format!(
                "reference salary for {} must be positive",
                bad.key
            )));
        }

        Ok(())
    }

    /// Withholding percentage for a province, falling back to the general rate.
    pub fn withholding_pct(&self, province: &str) -> f64 {
        lookup(&self.provinces, province).unwrap_or(self.general_withholding_pct)
    }

    /// Platform fee percentage; unknown platforms charge nothing.
    pub fn platform_pct(&self, platform: &str) -> f64 {
        lookup(&self.platforms, platform).unwrap_or(0.0)
    }

    /// Gateway fee percentage; unknown gateways charge nothing.
    pub fn gateway_pct(&self, gateway: &str) -> f64 {
        lookup(&self.gateways, gateway).unwrap_or(0.0)
    }

    pub fn agreement(&self, key: &str) -> Option<&UnionAgreement> {
        self.agreements.iter().find(|agreement| agreement.key == key)
    }

    pub fn salary_reference(&self, key: &str) -> Option<&SalaryReference> {
        self.salary_references
            .iter()
            .find(|reference| reference.key == key)
    }
}

fn lookup(entries: &[RateEntry], key: &str) -> Option<f64> {
    entries
        .iter()
        .find(|entry| entry.key == key)
        .map(|entry| entry.pct)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(RateTables::default().validate(), Ok(()));
    }

    #[test]
    fn unknown_province_uses_general_rate() {
        let tables = RateTables::default();
        assert_eq!(tables.withholding_pct("cba"), 4.75);
        assert_eq!(tables.withholding_pct("tuc"), 5.0);
        assert_eq!(tables.withholding_pct("jujuy"), 3.5);
        assert_eq!(tables.withholding_pct(""), 3.5);
    }

    #[test]
    fn unknown_platform_and_gateway_are_free() {
        let tables = RateTables::default();
        assert_eq!(tables.platform_pct("tiendanube"), 2.0);
        assert_eq!(tables.platform_pct("etsy"), 0.0);
        assert_eq!(tables.gateway_pct("mp_credit"), 7.73);
        assert_eq!(tables.gateway_pct("custom"), 0.0);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let tables =
            RateTables::from_json(r#"{ "marketplace": { "standard_pct": 15.5 } }"#).unwrap();
        assert_eq!(tables.marketplace.standard_pct, 15.5);
        assert_eq!(tables.marketplace.premium_pct, 31.0);
        assert_eq!(tables.provinces.len(), 6);
        assert_eq!(tables.labor.operational_monthly_hours, 160.0);
    }

    #[test]
    fn rejects_negative_rates() {
        let err = RateTables::from_json(
            r#"{ "gateways": [ { "key": "x", "label": "X", "pct": -2.0 } ] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, PricingError::InvalidRateTable(_)));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            RateTables::from_json("{ not json"),
            Err(PricingError::InvalidRateTable(_))
        ));
    }

    #[test]
    fn agreement_category_lookup() {
        let tables = RateTables::default();
        let gastro = tables.agreement("gastro").unwrap();
        assert_eq!(gastro.category("cocinero").unwrap().base, 920_000.0);
        assert!(gastro.category("vendedor").is_none());
        assert!(tables.agreement("uocra").is_none());
    }
}
