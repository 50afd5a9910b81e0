use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::entities::{FixedExpense, ItemId};
use super::error::{non_negative, PricingResult};

/// Monthly overhead spread across the units expected to sell in a month.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FixedCostAllocator {
    expenses: Vec<FixedExpense>,
    expected_monthly_units: u32,
}

impl Default for FixedCostAllocator {
    fn default() -> Self {
        let expenses = [
            "Alquiler / Espacio",
            "Luz / Gas / Internet",
            "Monotributo / IIBB",
            "Marketing / Ads",
        ]
        .into_iter()
        .map(|name| FixedExpense {
            id: Uuid::new_v4(),
            name: name.to_string(),
            monthly_amount: 0.0,
        })
        .collect();

        Self {
            expenses,
            expected_monthly_units: 100,
        }
    }
}

impl FixedCostAllocator {
    pub fn empty(expected_monthly_units: u32) -> Self {
        Self {
            expenses: Vec::new(),
            expected_monthly_units,
        }
    }

    pub fn add(&mut self, name: impl Into<String>, monthly_amount: f64) -> PricingResult<ItemId> {
        let monthly_amount = non_negative("monthly_amount", monthly_amount)?;
        let id = Uuid::new_v4();
        self.expenses.push(FixedExpense {
            id,
            name: name.into(),
            monthly_amount,
        });
        Ok(id)
    }

    pub fn remove(&mut self, id: ItemId) -> bool {
        let before = self.expenses.len();
        self.expenses.retain(|expense| expense.id != id);
        self.expenses.len() != before
    }

    /// Updates an existing row. Unknown ids are ignored.
    pub fn set_amount(&mut self, id: ItemId, monthly_amount: f64) -> PricingResult<()> {
        let monthly_amount = non_negative("monthly_amount", monthly_amount)?;
        if let Some(expense) = self.expenses.iter_mut().find(|expense| expense.id == id) {
            expense.monthly_amount = monthly_amount;
        }
        Ok(())
    }

    pub fn set_expected_units(&mut self, units: u32) {
        self.expected_monthly_units = units;
    }

    pub fn expected_units(&self) -> u32 {
        self.expected_monthly_units
    }

    pub fn expenses(&self) -> &[FixedExpense] {
        &self.expenses
    }

    pub fn monthly_total(&self) -> f64 {
        self.expenses.iter().map(|expense| expense.monthly_amount).sum()
    }

    /// Zero expected units yields zero rather than dividing by zero.
    pub fn cost_per_unit(&self) -> f64 {
        if self.expected_monthly_units == 0 {
            return 0.0;
        }
        self.monthly_total() / self.expected_monthly_units as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spreads_overhead_over_units() {
        let mut fixed = FixedCostAllocator::empty(100);
        fixed.add("Alquiler", 30_000.0).unwrap();
        fixed.add("Luz", 10_000.0).unwrap();
        assert_eq!(fixed.monthly_total(), 40_000.0);
        assert_eq!(fixed.cost_per_unit(), 400.0);
    }

    #[test]
    fn zero_units_is_zero_cost() {
        let mut fixed = FixedCostAllocator::empty(0);
        fixed.add("Alquiler", 40_000.0).unwrap();
        assert_eq!(fixed.cost_per_unit(), 0.0);
    }

    #[test]
    fn defaults_are_four_empty_rows() {
        let fixed = FixedCostAllocator::default();
        assert_eq!(fixed.expenses().len(), 4);
        assert_eq!(fixed.expected_units(), 100);
        assert_eq!(fixed.cost_per_unit(), 0.0);
    }

    #[test]
    fn edits_apply_immediately() {
        let mut fixed = FixedCostAllocator::default();
        let rent = fixed.expenses()[0].id;
        fixed.set_amount(rent, 25_000.0).unwrap();
        assert_eq!(fixed.cost_per_unit(), 250.0);

        fixed.set_expected_units(50);
        assert_eq!(fixed.cost_per_unit(), 500.0);

        assert!(fixed.remove(rent));
        assert_eq!(fixed.cost_per_unit(), 0.0);
        assert!(fixed.set_amount(rent, -1.0).is_err());
    }
}
