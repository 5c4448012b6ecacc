//! Rule table
//!
//! The rule set is data, not control flow: an ordered list of
//! (predicate, scheme) pairs evaluated uniformly by the engine. Order
//! matters because the recommendation list mirrors it. All thresholds are
//! strict inequalities; boundary values do not trigger a rule.

use super::types::BeneficiaryRecord;

pub(crate) struct EligibilityRule {
    pub scheme: &'static str,
    pub applies: fn(&BeneficiaryRecord) -> bool,
}

pub(crate) const RULES: &[EligibilityRule] = &[
    EligibilityRule {
        scheme: "PM-KISAN (income support)",
        applies: |r| r.land_size < 1.0,
    },
    EligibilityRule {
        scheme: "Jal Jeevan Mission (water conservation)",
        applies: |r| r.water_index < 0.4,
    },
    EligibilityRule {
        scheme: "MGNREGA (employment support)",
        applies: |r| r.income < 20000.0,
    },
    EligibilityRule {
        scheme: "PM Gati Shakti (infrastructure support)",
        applies: |r| r.land_size > 2.0,
    },
];
