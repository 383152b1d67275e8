pub type StoreCode = u32;

/// One row of the backend's transaction feed: a store, bill-series and period
/// combination. Fields not listed here are tolerated in the feed and dropped.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SalesRecord {
    pub store_code: StoreCode,
    /// Display name as entered upstream; consulted before `store_code` is
    /// considered reliable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_name: Option<String>,
    pub bill_series: String,
    #[serde(default)]
    pub amount: Numeric,
    #[serde(default)]
    pub quantity: Numeric,
    #[serde(default)]
    pub total_bills: Numeric,
    /// ISO calendar day, used only by the monthly series.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default)]
    pub total_sales: Numeric,
}

impl SalesRecord {
    pub fn channel(&self) -> Option<Channel> {
        Channel::classify(&self.bill_series)
    }
}

/// A numeric feed field as it actually arrives: a JSON number, a string that
/// may carry thousands separators, or nothing at all.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Numeric {
    Number(f64),
    Text(String),
    #[default]
    Absent,
}

/// Coerce a feed field to a number, treating anything non-numeric as zero so
/// that NaN never enters a total.
pub fn safe_number(value: &Numeric) -> f64 {
    match value {
        Numeric::Number(n) if n.is_finite() => *n,
        Numeric::Text(s) => s.trim().replace(',', "").parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Commercial channel of a bill series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// Sale-counter, business-to-business, warehouse-bulk and in-store sales.
    Sale,
    /// The LSR return/short-credit series.
    Return,
}

impl Channel {
    /// Classify a bill-series code, ignoring case and surrounding whitespace.
    /// Codes outside the known set have no channel and are left out of totals.
    pub fn classify(series: &str) -> Option<Channel> {
        match series.trim().to_ascii_uppercase().as_str() {
            "SC" | "B2B" | "WB" | "IS" => Some(Channel::Sale),
            "LSR" => Some(Channel::Return),
            _ => None,
        }
    }
}
