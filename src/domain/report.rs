use serde::{Deserialize, Serialize};
use time::{macros::format_description, Date, OffsetDateTime};

use super::entities::LineItem;
use super::pricing::PriceQuote;
use super::session::PricingSession;

/// Data handed to report rendering. Layout is not part of the contract.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReportSnapshot {
    pub product_name: Option<String>,
    pub line_items: Vec<LineItem>,
    pub labor_cost_per_unit: f64,
    pub fixed_cost_per_unit: f64,
    pub total_cost: f64,
    pub profit: f64,
    pub suggested_price: f64,
    /// `dd/mm/yyyy`
    pub generated_on: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ReportRow {
    Item { concept: String, amount: f64 },
    Spacer,
    Total { concept: String, amount: f64 },
}

impl ReportSnapshot {
    pub fn capture(session: &PricingSession, quote: &PriceQuote) -> Self {
        Self::capture_on(session, quote, OffsetDateTime::now_utc().date())
    }

    pub fn capture_on(session: &PricingSession, quote: &PriceQuote, date: Date) -> Self {
        let product_name = Some(session.product_name.trim().to_string()).filter(|n| !n.is_empty());
        Self {
            product_name,
            line_items: session.materials.items().to_vec(),
            labor_cost_per_unit: quote.labor_cost_per_unit,
            fixed_cost_per_unit: quote.fixed_cost_per_unit,
            total_cost: quote.total_cost,
            profit: quote.profit,
            suggested_price: quote.suggested_price,
            generated_on: format_date(date),
        }
    }

    /// Cost table: materials as entered, then rounded labor, fixed and total.
    pub fn rows(&self) -> Vec<ReportRow> {
        let mut rows: Vec<ReportRow> = self
            .line_items
            .iter()
            .map(|item| ReportRow::Item {
                concept: item.name.clone(),
                amount: item.unit_cost,
            })
            .collect();

        rows.push(ReportRow::Spacer);
        rows.push(ReportRow::Item {
            concept: "Mano de Obra (Tiempo)".to_string(),
            amount: self.labor_cost_per_unit.round(),
        });
        rows.push(ReportRow::Item {
            concept: "Costos Fijos Unitarios".to_string(),
            amount: self.fixed_cost_per_unit.round(),
        });
        rows.push(ReportRow::Total {
            concept: "COSTO TOTAL REAL".to_string(),
            amount: self.total_cost.round(),
        });
        rows
    }
}

fn format_date(date: Date) -> String {
    date.format(format_description!("[day]/[month]/[year]"))
        .unwrap_or_else(|_| date.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::rates::RateTables;
    use time::macros::date;

    #[test]
    fn rows_follow_cost_table_layout() {
        let mut session = PricingSession::blank(RateTables::default());
        session.product_name = "  Budín  ".to_string();
        session.materials.add("Harina", 1_200.0).unwrap();
        session.materials.add("Huevos", 800.5).unwrap();
        let quote = session.quote();

        let snapshot = ReportSnapshot::capture_on(&session, &quote, date!(2025 - 03 - 07));
        assert_eq!(snapshot.product_name.as_deref(), Some("Budín"));
        assert_eq!(snapshot.generated_on, "07/03/2025");

        let rows = snapshot.rows();
        assert_eq!(rows.len(), 6);
        assert_eq!(
            rows[1],
            ReportRow::Item {
                concept: "Huevos".to_string(),
                amount: 800.5
            }
        );
        assert_eq!(rows[2], ReportRow::Spacer);
        assert!(matches!(
            &rows[5],
            ReportRow::Total { amount, .. } if *amount == quote.total_cost.round()
        ));
    }

    #[test]
    fn empty_product_name_is_omitted() {
        let session = PricingSession::blank(RateTables::default());
        let snapshot = ReportSnapshot::capture(&session, &session.quote());
        assert_eq!(snapshot.product_name, None);
        assert_eq!(snapshot.rows().len(), 4);
    }
}
