//! Plain-text rendering of the dashboard panels.

use campaign_core::FilterSpec;
use campaign_reporting::{Dashboard, KpiFormatter, Ratio};
use std::fmt::Write;

const RULE: &str = "────────────────────────────────────────────────────────";

pub fn render_text(
    dashboard: &Dashboard,
    spec: &FilterSpec,
    fmt: &KpiFormatter,
) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    write_panels(&mut out, dashboard, spec, fmt)?;
    Ok(out)
}

fn join(values: &std::collections::BTreeSet<String>) -> String {
    if values.is_empty() {
        "(none)".to_string()
    } else {
        values.iter().cloned().collect::<Vec<_>>().join(", ")
    }
}

fn write_panels(
    out: &mut String,
    dashboard: &Dashboard,
    spec: &FilterSpec,
    fmt: &KpiFormatter,
) -> std::fmt::Result {
    writeln!(out, "Marketing Funnel & Campaign ROI Analytics")?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "Channels:  {}", join(&spec.channels))?;
    writeln!(out, "Campaigns: {}", join(&spec.campaigns))?;
    writeln!(out, "Matched rows: {}", fmt.count(dashboard.matched_rows as u64))?;
    writeln!(out)?;

    for card in fmt.kpi_cards(&dashboard.kpis) {
        writeln!(out, "{:<16} {:>18}", card.label, card.value)?;
    }
    writeln!(out)?;

    writeln!(out, "Marketing Funnel")?;
    writeln!(out, "{RULE}")?;
    for point in dashboard.funnel.iter() {
        writeln!(out, "{:<16} {:>18}", point.stage.name(), fmt.count(point.count))?;
    }
    writeln!(out)?;

    writeln!(out, "ROI by Channel")?;
    writeln!(out, "{RULE}")?;
    if dashboard.channel_roi.is_empty() {
        writeln!(out, "(no data)")?;
    }
    for row in &dashboard.channel_roi.rows {
        writeln!(
            out,
            "{:<16} {:>14} {:>14} {:>10}",
            row.channel,
            fmt.currency(row.revenue, 0),
            fmt.currency(row.cost, 0),
            fmt.percent(row.roi)
        )?;
    }
    writeln!(out)?;

    writeln!(out, "Attribution Model Comparison")?;
    writeln!(out, "{RULE}")?;
    if dashboard.attribution.is_empty() {
        writeln!(out, "(no data)")?;
    }
    let total = dashboard.attribution.total_conversions() as f64;
    for row in &dashboard.attribution.rows {
        writeln!(
            out,
            "{:<16} {:>14} {:>10}",
            row.attribution_model,
            fmt.count(row.conversions),
            fmt.percent(Ratio::of(row.conversions as f64, total))
        )?;
    }
    Ok(())
}
