//! Beneficiary record as supplied by callers (batch lists or API requests).

use serde::{Deserialize, Serialize};

/// Structured attributes of one patta holder. Read-only input to the
/// engine; the caller is responsible for units (hectares for `land_size`,
/// a [0, 1] index for `water_index`, annual rupees for `income`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeneficiaryRecord {
    pub name: String,
    pub land_size: f64,
    pub water_index: f64,
    pub income: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_from_sample_shape() {
        let record: BeneficiaryRecord = serde_json::from_str(
            r#"{"name": "Ravi", "land_size": 1.5, "water_index": 0.3, "income": 30000}"#,
        )
        .unwrap();
        assert_eq!(record.name, "Ravi");
        assert_eq!(record.land_size, 1.5);
        assert_eq!(record.water_index, 0.3);
        assert_eq!(record.income, 30000.0);
    }
}
