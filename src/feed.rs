#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Feed input was not a JSON array of sales records")]
    Decode(#[from] serde_json::Error),
}

pub(crate) mod function {
    use crate::feed::Error;
    use crate::record::SalesRecord;

    /// Decode one JSON array of sales records per reader and concatenate
    /// them in input order. Fields outside the record shape are ignored.
    pub fn read_records(
        feeds: impl IntoIterator<Item = impl std::io::Read>,
    ) -> Result<Vec<SalesRecord>, Error> {
        let mut records = Vec::new();
        for feed in feeds {
            let mut batch: Vec<SalesRecord> = serde_json::from_reader(feed)?;
            records.append(&mut batch);
        }
        Ok(records)
    }
}
