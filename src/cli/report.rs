//! Chart and summary CLI commands
//!
//! Renders the store's aggregates as text charts.

use clap::Subcommand;

use crate::display::charts;
use crate::error::TrackerResult;
use crate::storage::ExpenseStore;

/// Chart subcommands
#[derive(Subcommand)]
pub enum ChartCommands {
    /// Bar chart of totals by category
    Category,

    /// Monthly expense trend
    Monthly,

    /// Weekly expense trend
    Weekly,

    /// Percentage distribution by category
    Pie,

    /// This month compared to last month
    Compare,
}

/// Handle a chart command
pub fn handle_chart_command(store: &ExpenseStore, cmd: ChartCommands) -> TrackerResult<()> {
    let chart = match cmd {
        ChartCommands::Category => charts::category_chart(&store.total_by_category()),
        ChartCommands::Monthly => charts::monthly_chart(&store.total_by_month()),
        ChartCommands::Weekly => charts::weekly_chart(&store.total_by_week()),
        ChartCommands::Pie => charts::pie_chart(&store.total_by_category()),
        ChartCommands::Compare => {
            charts::comparison_chart(store.current_month_total(), store.last_month_total())
        }
    };

    println!("{}", chart);
    Ok(())
}

/// Print the summary statistics box
pub fn handle_summary_command(store: &ExpenseStore) -> TrackerResult<()> {
    println!("{}", charts::summary_box(&store.statistics()));
    Ok(())
}
