use crate::merge::MergeRule;
use crate::normalize::StoreDirectory;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to open topology file for reading")]
    Open(#[from] std::io::Error),
    #[error("Could not decode the store topology")]
    Decode(#[from] ron::de::SpannedError),
}

/// The store topology a deployment reconciles feeds against: identity
/// corrections plus the merge rules in effect for reporting.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Topology {
    pub directory: StoreDirectory,
    pub merge_rules: Vec<MergeRule>,
}

impl Default for Topology {
    fn default() -> Self {
        Topology {
            directory: StoreDirectory::default(),
            // The historical 62 -> 30 rule is disabled in production; enable
            // it through a topology file if that estate comes back.
            merge_rules: vec![MergeRule { from: 35, into: 8 }],
        }
    }
}

impl Topology {
    /// Load a topology from a RON file, as deployed per store estate.
    pub fn from_path(path: &Path) -> Result<Topology, Error> {
        Ok(ron::de::from_reader(std::fs::File::open(path)?)?)
    }
}
