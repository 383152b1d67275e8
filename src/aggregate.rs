/// Which magnitude a net fold sums, and with it whether return-series rows
/// are subtracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    /// Legacy alias of [`Metric::Revenue`], kept because older feeds and
    /// report columns still call this figure "amount".
    Amount,
    Revenue,
    Quantity,
    BillCuts,
}

impl Metric {
    pub(crate) fn magnitude(&self, record: &crate::record::SalesRecord) -> f64 {
        use crate::record::safe_number;
        match self {
            Metric::Amount | Metric::Revenue => safe_number(&record.amount),
            Metric::Quantity => safe_number(&record.quantity),
            Metric::BillCuts => safe_number(&record.total_bills),
        }
    }

    /// Whether the return bucket is subtracted from the sale bucket.
    ///
    /// Returns reduce revenue but not the reported unit and bill counts.
    /// TODO: confirm with the reporting owners whether the count metrics
    /// should subtract returns as well; until then the dashboards' historical
    /// numbers are preserved.
    pub(crate) fn subtracts_returns(&self) -> bool {
        matches!(self, Metric::Amount | Metric::Revenue)
    }
}

pub(crate) mod function {
    use crate::aggregate::Metric;
    use crate::config::Topology;
    use crate::merge::function::apply_merges;
    use crate::normalize::function::normalize_sales;
    use crate::record::{Channel, SalesRecord, StoreCode};
    use std::collections::BTreeMap;

    /// Fold `records` into per-store net totals for `metric`.
    ///
    /// Store identities are normalized and merged against `topology` before
    /// the fold runs; callers cannot feed it un-reconciled codes. Every
    /// record's store gets a key, even when its bill series belongs to no
    /// known channel. Malformed numeric fields count as zero, so the fold is
    /// total and never yields NaN.
    pub fn net_totals(
        records: &[SalesRecord],
        topology: &Topology,
        metric: Metric,
    ) -> BTreeMap<StoreCode, f64> {
        let records = apply_merges(
            normalize_sales(records.to_vec(), &topology.directory),
            &topology.merge_rules,
        );

        let mut buckets = BTreeMap::<StoreCode, Buckets>::new();
        for record in &records {
            let entry = buckets.entry(record.store_code).or_default();
            match record.channel() {
                Some(Channel::Sale) => entry.sale += metric.magnitude(record),
                Some(Channel::Return) => entry.returns += metric.magnitude(record).abs(),
                None => {}
            }
        }

        buckets
            .into_iter()
            .map(|(code, Buckets { sale, returns })| {
                let net = if metric.subtracts_returns() {
                    sale - returns
                } else {
                    sale
                };
                (code, net)
            })
            .collect()
    }

    /// Scalar form of [`net_totals`]: one store's net total, or 0 when the
    /// store does not appear at all.
    pub fn net_total_for(
        records: &[SalesRecord],
        topology: &Topology,
        metric: Metric,
        store_code: StoreCode,
    ) -> f64 {
        net_totals(records, topology, metric)
            .get(&store_code)
            .copied()
            .unwrap_or(0.0)
    }

    #[derive(Default)]
    struct Buckets {
        sale: f64,
        returns: f64,
    }
}
