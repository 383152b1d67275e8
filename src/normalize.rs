use crate::record::StoreCode;
use std::collections::BTreeMap;

/// Corrections for known data-entry inconsistencies in the feed's store
/// identities: alternate trading names and legacy entity names.
///
/// Lookups are exact-match on the name as it appears in the feed.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StoreDirectory {
    /// Alternate trading name -> canonical store code. The name is kept.
    pub code_aliases: BTreeMap<String, StoreCode>,
    /// Legacy entity name -> (canonical name, canonical code). Both are
    /// rewritten.
    pub renames: BTreeMap<String, (String, StoreCode)>,
}

impl Default for StoreDirectory {
    fn default() -> Self {
        StoreDirectory {
            code_aliases: [
                ("NASTABAZAR WAREHOUSE", 42),
                ("NASTA BAZAR SHELA", 44),
                ("NASTA BAZAR BODAKDEV", 45),
                ("NASTA BAZAR JODHPUR", 53),
                ("NASTA BAZAR RAJKOT", 58),
                ("NASTA BAZAR SOBO", 61),
            ]
            .into_iter()
            .map(|(name, code)| (name.to_string(), code))
            .collect(),
            renames: [
                (
                    "FOOD BOOK ASSOCIATE LLP VIJAY CHAR RASTA",
                    "MAGSON VIJAY CHAR RASTA",
                    51,
                ),
                ("FARMAGS ASSOCIATES LLP", "MAGSON SOUTH BOPAL", 50),
                ("SADAA", "MAGSON SHANTIGRAM", 55),
                ("FOOD BOOK ASSOCIATE LLP HEBATPUR", "MAGSON HEBATPUR", 52),
                ("KRISHIV FOODS", "MAGSON INFOCITY", 54),
                ("MAGSON - MCW", "MCW BODAKDEV", 31),
            ]
            .into_iter()
            .map(|(name, canonical, code)| (name.to_string(), (canonical.to_string(), code)))
            .collect(),
        }
    }
}

pub(crate) mod function {
    use crate::normalize::StoreDirectory;
    use crate::record::SalesRecord;

    /// Rewrite each record's store identity according to `directory`.
    ///
    /// Length preserving and total: records without a directory entry pass
    /// through untouched, including records with no store name at all.
    /// Running it twice is a no-op as long as canonical names have no
    /// directory entries of their own.
    pub fn normalize_sales(
        records: Vec<SalesRecord>,
        directory: &StoreDirectory,
    ) -> Vec<SalesRecord> {
        records
            .into_iter()
            .map(|mut record| {
                if let Some(name) = record.store_name.as_deref() {
                    if let Some(&code) = directory.code_aliases.get(name) {
                        record.store_code = code;
                    } else if let Some((canonical, code)) = directory.renames.get(name) {
                        record.store_name = Some(canonical.clone());
                        record.store_code = *code;
                    }
                }
                record
            })
            .collect()
    }
}
