//! API spend ceiling registration

/// Receives the agent's total spend ceiling (`0.0` = unlimited)
pub trait BudgetTracker {
    fn set_total_budget(&mut self, amount: f64);
}

/// Holds the ceiling for the rest of the process
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ApiBudget {
    total_budget: f64,
}

impl ApiBudget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_budget(&self) -> f64 {
        self.total_budget
    }

    pub fn is_unlimited(&self) -> bool {
        self.total_budget <= 0.0
    }
}

impl BudgetTracker for ApiBudget {
    fn set_total_budget(&mut self, amount: f64) {
        log::info!("Total API budget set to {}", amount);
        self.total_budget = amount;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unlimited() {
        assert!(ApiBudget::new().is_unlimited());
    }

    #[test]
    fn test_set_total_budget() {
        let mut budget = ApiBudget::new();
        budget.set_total_budget(12.5);
        assert_eq!(budget.total_budget(), 12.5);
        assert!(!budget.is_unlimited());
    }
}
