#![deny(rust_2018_idioms)]

pub mod record;
pub use record::{safe_number, Channel, Numeric, SalesRecord, StoreCode};

pub mod normalize;
pub use normalize::function::normalize_sales;
pub use normalize::StoreDirectory;

pub mod merge;
pub use merge::function::apply_merges;
pub use merge::MergeRule;

pub mod aggregate;
pub use aggregate::function::{net_total_for, net_totals};
pub use aggregate::Metric;

pub mod config;
pub use config::Topology;

pub mod period;
pub use period::function::{month_windows, monthly_sales};
pub use period::{MonthWindow, MonthlySales};

pub mod feed;
pub use feed::function::read_records;

pub mod report;
pub use report::function::{write_monthly, write_records, write_totals};
