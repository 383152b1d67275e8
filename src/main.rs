use crate::options::Args;
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

mod options {
    use std::path::PathBuf;

    #[derive(Debug, clap::Parser)]
    #[clap(name = "tally", about = "A tool to tally store sales feeds")]
    pub enum Args {
        /// Fold sales feeds into per-store net totals for one metric.
        Totals {
            /// The magnitude to total up.
            #[clap(long, short = 'm', value_enum, default_value = "revenue")]
            metric: Metric,
            /// Only print the net total of this store code.
            #[clap(long, short = 's')]
            store: Option<u32>,
            /// A RON file overriding the built-in store topology.
            #[clap(long, short = 't')]
            topology: Option<PathBuf>,
            /// One or more JSON files, each an array of sales records.
            feed: Vec<PathBuf>,
        },
        /// Normalize store identities and apply merge rules, then re-emit the
        /// record stream for topology inspection.
        Clean {
            /// A RON file overriding the built-in store topology.
            #[clap(long, short = 't')]
            topology: Option<PathBuf>,
            /// One or more JSON files, each an array of sales records.
            feed: Vec<PathBuf>,
        },
        /// Sum TotalSales per trailing calendar month.
        Monthly {
            /// How many trailing months to report, including the current one.
            #[clap(long, default_value = "13")]
            months: u32,
            /// One or more JSON files, each an array of sales records.
            feed: Vec<PathBuf>,
        },
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
    pub enum Metric {
        Amount,
        Revenue,
        Quantity,
        BillCuts,
    }

    impl From<Metric> for tally::Metric {
        fn from(metric: Metric) -> Self {
            match metric {
                Metric::Amount => tally::Metric::Amount,
                Metric::Revenue => tally::Metric::Revenue,
                Metric::Quantity => tally::Metric::Quantity,
                Metric::BillCuts => tally::Metric::BillCuts,
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = options::Args::parse();
    let out = std::io::BufWriter::new(std::io::stdout());
    match args {
        Args::Totals {
            metric,
            store,
            topology,
            feed,
        } => {
            let topology = load_topology(topology)?;
            let records = tally::read_records(into_read(feed)?)?;
            match store {
                Some(code) => {
                    let total = tally::net_total_for(&records, &topology, metric.into(), code);
                    println!("{total}");
                }
                None => {
                    let totals = tally::net_totals(&records, &topology, metric.into());
                    tally::write_totals(&totals, out)?;
                }
            }
        }
        Args::Clean { topology, feed } => {
            let topology = load_topology(topology)?;
            let records = tally::read_records(into_read(feed)?)?;
            let cleaned = tally::apply_merges(
                tally::normalize_sales(records, &topology.directory),
                &topology.merge_rules,
            );
            tally::write_records(&cleaned, out)?;
        }
        Args::Monthly { months, feed } => {
            let records = tally::read_records(into_read(feed)?)?;
            let windows = tally::month_windows(time::OffsetDateTime::now_utc().date(), months);
            tally::write_monthly(&tally::monthly_sales(&records, &windows), out)?;
        }
    };
    Ok(())
}

fn load_topology(path: Option<PathBuf>) -> anyhow::Result<tally::Topology> {
    path.map(|p| {
        tally::Topology::from_path(&p)
            .with_context(|| format!("Could not load store topology at '{}'", p.display()))
    })
    .transpose()
    .map(|topology| topology.unwrap_or_default())
}

fn into_read(file_paths: Vec<PathBuf>) -> anyhow::Result<impl Iterator<Item = impl std::io::Read>> {
    Ok(file_paths
        .iter()
        .map(|p| {
            std::fs::read(p)
                .with_context(|| format!("Could not read from feed file at '{}'", p.display()))
        })
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .map(std::io::Cursor::new))
}
