use time::Date;

/// One calendar month, first to last day inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthWindow {
    /// Short display label, e.g. "Aug 2026".
    pub label: String,
    pub start: Date,
    pub end: Date,
}

/// Summed `TotalSales` of one month window.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySales {
    pub label: String,
    pub total_sales: f64,
}

pub(crate) mod function {
    use crate::period::{MonthWindow, MonthlySales};
    use crate::record::{safe_number, SalesRecord};
    use time::{Date, Month};

    static LABEL: &[time::format_description::FormatItem<'static>] =
        time::macros::format_description!("[month repr:short] [year]");
    static DAY: &[time::format_description::FormatItem<'static>] =
        time::macros::format_description!("[year]-[month]-[day]");

    /// The trailing `count` calendar months ending with `today`'s month,
    /// oldest first.
    pub fn month_windows(today: Date, count: u32) -> Vec<MonthWindow> {
        let (mut year, mut month) = (today.year(), today.month());
        for _ in 1..count {
            (year, month) = previous_month(year, month);
        }

        let mut windows = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let start =
                Date::from_calendar_date(year, month, 1).expect("first of month always exists");
            let end = start
                .replace_day(month.length(year))
                .expect("month length is a valid day");
            windows.push(MonthWindow {
                label: start.format(LABEL).expect("static format"),
                start,
                end,
            });
            (year, month) = next_month(year, month);
        }
        windows
    }

    /// Sum `TotalSales` per window. Records with no date, or a date that is
    /// not an ISO calendar day, are skipped.
    pub fn monthly_sales(records: &[SalesRecord], windows: &[MonthWindow]) -> Vec<MonthlySales> {
        let dated: Vec<(Date, f64)> = records
            .iter()
            .filter_map(|record| {
                let date = Date::parse(record.date.as_deref()?, DAY).ok()?;
                Some((date, safe_number(&record.total_sales)))
            })
            .collect();

        windows
            .iter()
            .map(|window| MonthlySales {
                label: window.label.clone(),
                total_sales: dated
                    .iter()
                    .filter(|(date, _)| *date >= window.start && *date <= window.end)
                    .map(|(_, value)| value)
                    .sum(),
            })
            .collect()
    }

    fn previous_month(year: i32, month: Month) -> (i32, Month) {
        match month {
            Month::January => (year - 1, Month::December),
            _ => (year, month.previous()),
        }
    }

    fn next_month(year: i32, month: Month) -> (i32, Month) {
        match month {
            Month::December => (year + 1, Month::January),
            _ => (year, month.next()),
        }
    }
}
