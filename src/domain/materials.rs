use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::entities::{ItemId, LineItem};
use super::error::{non_negative, PricingResult};

/// Direct per-unit costs (ingredients, labels, boxes, bags...).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterialsLedger {
    items: Vec<LineItem>,
}

impl MaterialsLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// The ledger a new session opens with.
    pub fn with_example() -> Self {
        let mut ledger = Self::new();
        ledger.items.push(LineItem {
            id: Uuid::new_v4(),
            name: "Ej: Harina 000".to_string(),
            unit_cost: 1_200.0,
        });
        ledger
    }

    pub fn add(&mut self, name: impl Into<String>, unit_cost: f64) -> PricingResult<ItemId> {
        let unit_cost = non_negative("unit_cost", unit_cost)?;
        let id = Uuid::new_v4();
        self.items.push(LineItem {
            id,
            name: name.into(),
            unit_cost,
        });
        Ok(id)
    }

    /// Returns whether something was removed.
    pub fn remove(&mut self, id: ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(|item| item.unit_cost).sum()
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::PricingError;

    #[test]
    fn total_is_exact_sum() {
        let mut ledger = MaterialsLedger::new();
        ledger.add("Harina", 1_200.0).unwrap();
        ledger.add("Caja", 350.5).unwrap();
        ledger.add("Etiqueta", 0.0).unwrap();
        assert_eq!(ledger.total(), 1_550.5);
    }

    #[test]
    fn keeps_insertion_order() {
        let mut ledger = MaterialsLedger::new();
        ledger.add("b", 2.0).unwrap();
        ledger.add("a", 1.0).unwrap();
        let names: Vec<_> = ledger.items().iter().map(|item| item.name.as_str()).collect();
        assert_eq!(names, ["b", "a"]);
    }

    #[test]
    fn removing_unknown_id_is_noop() {
        let mut ledger = MaterialsLedger::with_example();
        assert!(!ledger.remove(Uuid::new_v4()));
        assert_eq!(ledger.items().len(), 1);
        assert_eq!(ledger.total(), 1_200.0);
    }

    #[test]
    fn remove_by_id() {
        let mut ledger = MaterialsLedger::new();
        let keep = ledger.add("Harina", 100.0).unwrap();
        let drop = ledger.add("Azúcar", 50.0).unwrap();
        assert!(ledger.remove(drop));
        assert_eq!(ledger.items().len(), 1);
        assert_eq!(ledger.items()[0].id, keep);
        assert_eq!(ledger.total(), 100.0);
    }

    #[test]
    fn rejects_negative_cost() {
        let mut ledger = MaterialsLedger::new();
        let err = ledger.add("Descuento", -10.0).unwrap_err();
        assert_eq!(
            err,
            PricingError::InvalidInput {
                field: "unit_cost",
                value: -10.0
            }
        );
        assert!(ledger.is_empty());
    }
}
