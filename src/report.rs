#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub(crate) mod function {
    use crate::period::MonthlySales;
    use crate::record::{safe_number, SalesRecord, StoreCode};
    use crate::report::Error;
    use std::collections::BTreeMap;

    /// Write per-store totals as `StoreCode,Total` rows, ascending by code.
    pub fn write_totals(
        totals: &BTreeMap<StoreCode, f64>,
        out: impl std::io::Write,
    ) -> Result<(), Error> {
        let mut out = csv::WriterBuilder::new().delimiter(b',').from_writer(out);
        out.write_record(["StoreCode", "Total"])?;
        for (code, total) in totals {
            out.write_record([code.to_string(), total.to_string()])?;
        }
        Ok(())
    }

    /// Write a cleaned record stream, numeric fields already coerced.
    pub fn write_records(records: &[SalesRecord], out: impl std::io::Write) -> Result<(), Error> {
        let mut out = csv::WriterBuilder::new().delimiter(b',').from_writer(out);
        out.write_record([
            "StoreCode",
            "StoreName",
            "BillSeries",
            "Amount",
            "Quantity",
            "TotalBills",
            "Date",
        ])?;
        for record in records {
            out.write_record([
                record.store_code.to_string(),
                record.store_name.clone().unwrap_or_default(),
                record.bill_series.clone(),
                safe_number(&record.amount).to_string(),
                safe_number(&record.quantity).to_string(),
                safe_number(&record.total_bills).to_string(),
                record.date.clone().unwrap_or_default(),
            ])?;
        }
        Ok(())
    }

    /// Write a `Month,TotalSales` series in the given window order.
    pub fn write_monthly(series: &[MonthlySales], out: impl std::io::Write) -> Result<(), Error> {
        let mut out = csv::WriterBuilder::new().delimiter(b',').from_writer(out);
        out.write_record(["Month", "TotalSales"])?;
        for month in series {
            out.write_record([month.label.clone(), month.total_sales.to_string()])?;
        }
        Ok(())
    }
}
