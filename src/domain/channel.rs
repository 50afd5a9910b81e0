//! Selling costs of a sales channel at a given candidate price.
//!
//! Commissions, fees and withholding are percentages of the price while the
//! surcharges are flat, so the result has to be recomputed whenever the
//! candidate price moves. How that price is chosen lives in
//! [`super::pricing`].

use serde::{Deserialize, Serialize};

use super::entities::{ChannelConfig, Gateway, ListingTier, TaxProfile};
use super::rates::RateTables;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelBreakdown {
    pub commission: f64,
    pub low_ticket_surcharge: f64,
    pub shipping: f64,
    pub platform_fee: f64,
    pub gateway_fee: f64,
    pub tax_withholding: f64,
    pub manual_commissions: f64,
}

impl ChannelBreakdown {
    pub fn total(&self) -> f64 {
        self.commission
            + self.low_ticket_surcharge
            + self.shipping
            + self.platform_fee
            + self.gateway_fee
            + self.tax_withholding
            + self.manual_commissions
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChannelCostEvaluator {
    tables: RateTables,
}

impl ChannelCostEvaluator {
    pub fn new(tables: RateTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &RateTables {
        &self.tables
    }

    pub fn evaluate(&self, config: &ChannelConfig, price: f64) -> ChannelBreakdown {
        let price = if price.is_finite() && price > 0.0 {
            price
        } else {
            0.0
        };

        match config {
            ChannelConfig::Marketplace {
                tier,
                free_shipping,
                tax,
            } => self.marketplace(price, *tier, *free_shipping, tax),
            ChannelConfig::OwnStore {
                platform,
                gateway,
                tax,
            } => self.own_store(price, platform, gateway, tax),
            ChannelConfig::Manual(commissions) => {
                let pct: f64 = commissions.iter().map(|c| c.percentage.max(0.0)).sum();
                ChannelBreakdown {
                    manual_commissions: price * pct / 100.0,
                    ..ChannelBreakdown::default()
                }
            }
        }
    }

    /// Whether shipping is charged regardless of what the seller chose.
    pub fn shipping_mandatory(&self, price: f64) -> bool {
        price >= self.tables.marketplace.free_shipping_threshold
    }

    fn marketplace(
        &self,
        price: f64,
        tier: ListingTier,
        free_shipping: bool,
        tax: &TaxProfile,
    ) -> ChannelBreakdown {
        let rates = &self.tables.marketplace;
        let commission_pct = match tier {
            ListingTier::Standard => rates.standard_pct,
            ListingTier::Premium => rates.premium_pct,
        };

        let low_ticket_surcharge = if price > 0.0 && price < rates.low_ticket_threshold {
            rates.low_ticket_surcharge
        } else {
            0.0
        };

        let shipping = if free_shipping || self.shipping_mandatory(price) {
            rates.shipping_cost
        } else {
            0.0
        };

        ChannelBreakdown {
            commission: price * commission_pct / 100.0,
            low_ticket_surcharge,
            shipping,
            tax_withholding: self.withholding(price, tax),
            ..ChannelBreakdown::default()
        }
    }

    fn own_store(
        &self,
        price: f64,
        platform: &str,
        gateway: &Gateway,
        tax: &TaxProfile,
    ) -> ChannelBreakdown {
        let gateway_pct = match gateway {
            Gateway::Listed(key) => self.tables.gateway_pct(key),
            Gateway::Custom(pct) if pct.is_finite() => pct.max(0.0),
            Gateway::Custom(_) => 0.0,
        };

        ChannelBreakdown {
            platform_fee: price * self.tables.platform_pct(platform) / 100.0,
            gateway_fee: price * gateway_pct / 100.0,
            tax_withholding: self.withholding(price, tax),
            ..ChannelBreakdown::default()
        }
    }

    fn withholding(&self, price: f64, tax: &TaxProfile) -> f64 {
        if tax.simplified_regime {
            return 0.0;
        }
        price * self.tables.withholding_pct(&tax.province) / 100.0
    }
}
