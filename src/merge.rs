use crate::record::StoreCode;

/// A directive to fold one store's transaction identity into another for
/// reporting, used when a physical store's code changed or two entities
/// report as one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MergeRule {
    /// The store code that disappears.
    pub from: StoreCode,
    /// The store code that receives its records.
    pub into: StoreCode,
}

pub(crate) mod function {
    use crate::merge::MergeRule;
    use crate::record::{Numeric, SalesRecord, StoreCode};

    /// Apply `rules` in order, each against the output of the previous one.
    ///
    /// For a rule the `from` code must not survive: every `from` record is
    /// re-tagged to `into`, then any remaining `from` record is dropped. If
    /// `into` is entirely absent from the working set a zero-amount
    /// placeholder is inserted first, so the merge target always has a key
    /// downstream.
    pub fn apply_merges(records: Vec<SalesRecord>, rules: &[MergeRule]) -> Vec<SalesRecord> {
        let mut merged = records;
        for rule in rules {
            if !merged.iter().any(|record| record.store_code == rule.into) {
                merged.push(placeholder(rule.into));
            }
            for record in &mut merged {
                if record.store_code == rule.from {
                    record.store_code = rule.into;
                }
            }
            merged.retain(|record| record.store_code != rule.from);
        }
        merged
    }

    /// A stand-in row under the default sale-counter series.
    fn placeholder(store_code: StoreCode) -> SalesRecord {
        SalesRecord {
            store_code,
            store_name: None,
            bill_series: "SC".into(),
            amount: Numeric::Number(0.0),
            quantity: Numeric::Absent,
            total_bills: Numeric::Absent,
            date: None,
            total_sales: Numeric::Absent,
        }
    }
}
