//! Monthly summary display formatting

use crate::reports::MonthlyStats;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Format the monthly summary figures for terminal display
pub fn format_monthly_summary(stats: &MonthlyStats, month: u32) -> String {
    let name = MONTH_NAMES
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("Unknown");

    let mut output = String::new();
    output.push_str(&format!("Monthly summary ({})\n", name));
    output.push_str(&format!("  Total income:   {}\n", stats.total_income));
    output.push_str(&format!("  Total expenses: {}\n", stats.total_expenses));
    output.push_str(&format!("  Average:        {:.2}\n", stats.average));
    output
}
