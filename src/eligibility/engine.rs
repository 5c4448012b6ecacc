//! Engine
//!
//! Uniform evaluation of the rule table. Every syntactically valid record
//! produces a (possibly empty) recommendation list; there is no error path.

use super::rules::RULES;
use super::types::BeneficiaryRecord;

/// Stateless rule evaluator.
#[derive(Debug, Clone, Copy, Default)]
pub struct EligibilityEngine;

impl EligibilityEngine {
    pub fn new() -> Self {
        Self
    }

    /// Evaluate one record. Recommendations come back in rule order,
    /// one per satisfied rule; rules are independent, so a record can
    /// trigger anywhere from zero to all of them. An empty result is a
    /// valid outcome ("no specific schemes").
    pub fn evaluate(&self, record: &BeneficiaryRecord) -> Vec<&'static str> {
        RULES
            .iter()
            .filter(|rule| (rule.applies)(record))
            .map(|rule| rule.scheme)
            .collect()
    }

    /// Evaluate a batch. Output has the same order and length as the input.
    pub fn evaluate_all(&self, records: &[BeneficiaryRecord]) -> Vec<Vec<&'static str>> {
        records.iter().map(|record| self.evaluate(record)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, land_size: f64, water_index: f64, income: f64) -> BeneficiaryRecord {
        BeneficiaryRecord {
            name: name.to_string(),
            land_size,
            water_index,
            income,
        }
    }

    #[test]
    fn small_holding_triggers_pm_kisan() {
        let engine = EligibilityEngine::new();
        let schemes = engine.evaluate(&record("r", 0.9999999, 0.5, 25000.0));
        assert_eq!(schemes, vec!["PM-KISAN (income support)"]);
    }

    #[test]
    fn land_size_boundary_does_not_trigger() {
        let engine = EligibilityEngine::new();
        assert!(engine.evaluate(&record("r", 1.0, 0.5, 25000.0)).is_empty());
    }

    #[test]
    fn all_boundaries_are_strict() {
        let engine = EligibilityEngine::new();
        // Exactly on every threshold: no rule fires.
        assert!(engine.evaluate(&record("r", 1.0, 0.4, 20000.0)).is_empty());
        // land_size exactly 2.0 does not trigger the infrastructure rule.
        assert!(engine.evaluate(&record("r", 2.0, 0.4, 20000.0)).is_empty());
    }

    #[test]
    fn mid_range_record_gets_no_schemes() {
        let engine = EligibilityEngine::new();
        assert!(engine.evaluate(&record("r", 1.5, 0.5, 25000.0)).is_empty());
    }

    #[test]
    fn meena_scenario() {
        let engine = EligibilityEngine::new();
        let schemes = engine.evaluate(&record("Meena", 0.8, 0.7, 15000.0));
        assert_eq!(
            schemes,
            vec![
                "PM-KISAN (income support)",
                "MGNREGA (employment support)",
            ]
        );
    }

    #[test]
    fn sita_scenario() {
        let engine = EligibilityEngine::new();
        let schemes = engine.evaluate(&record("Sita", 2.2, 0.2, 50000.0));
        assert_eq!(
            schemes,
            vec![
                "Jal Jeevan Mission (water conservation)",
                "PM Gati Shakti (infrastructure support)",
            ]
        );
    }

    #[test]
    fn ravi_scenario() {
        let engine = EligibilityEngine::new();
        let schemes = engine.evaluate(&record("Ravi", 1.5, 0.3, 30000.0));
        assert_eq!(schemes, vec!["Jal Jeevan Mission (water conservation)"]);
    }

    #[test]
    fn evaluation_is_idempotent() {
        let engine = EligibilityEngine::new();
        let meena = record("Meena", 0.8, 0.7, 15000.0);
        assert_eq!(engine.evaluate(&meena), engine.evaluate(&meena));
    }

    #[test]
    fn batch_matches_per_record_evaluation_in_order() {
        let engine = EligibilityEngine::new();
        let records = vec![
            record("Ravi", 1.5, 0.3, 30000.0),
            record("Meena", 0.8, 0.7, 15000.0),
            record("Sita", 2.2, 0.2, 50000.0),
        ];

        let batch = engine.evaluate_all(&records);

        assert_eq!(batch.len(), records.len());
        for (result, input) in batch.iter().zip(&records) {
            assert_eq!(result, &engine.evaluate(input));
        }
    }

    #[test]
    fn a_record_can_trigger_every_rule_except_conflicting_land_rules() {
        let engine = EligibilityEngine::new();
        // The two land rules are mutually exclusive by their thresholds;
        // everything else can stack.
        let schemes = engine.evaluate(&record("r", 0.5, 0.1, 1000.0));
        assert_eq!(
            schemes,
            vec![
                "PM-KISAN (income support)",
                "Jal Jeevan Mission (water conservation)",
                "MGNREGA (employment support)",
            ]
        );
    }
}
