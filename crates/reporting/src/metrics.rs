//! KPI aggregation — totals and derived ratios over a filtered view.

use crate::filter::FilteredView;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A derived ratio. `Undefined` when the denominator is zero; renderers show
/// it as a placeholder instead of formatting a number.
///
/// Serializes as a plain number, or `null` when undefined.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Option<f64>", into = "Option<f64>")]
pub enum Ratio {
    Defined(f64),
    #[default]
    Undefined,
}

impl Ratio {
    pub fn of(numerator: f64, denominator: f64) -> Self {
        if denominator == 0.0 {
            return Ratio::Undefined;
        }
        let value = numerator / denominator;
        if value.is_finite() {
            Ratio::Defined(value)
        } else {
            Ratio::Undefined
        }
    }

    pub fn value(self) -> Option<f64> {
        match self {
            Ratio::Defined(v) => Some(v),
            Ratio::Undefined => None,
        }
    }

    pub fn is_defined(self) -> bool {
        matches!(self, Ratio::Defined(_))
    }
}

impl From<Option<f64>> for Ratio {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Ratio::Undefined, Ratio::Defined)
    }
}

impl From<Ratio> for Option<f64> {
    fn from(ratio: Ratio) -> Self {
        ratio.value()
    }
}

/// `(revenue - cost) / cost`, undefined at zero cost.
pub fn roi(revenue: f64, cost: f64) -> Ratio {
    Ratio::of(revenue - cost, cost)
}

/// Headline totals and ratios for the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct KpiBundle {
    pub impressions: u64,
    pub clicks: u64,
    pub leads: u64,
    pub conversions: u64,
    pub revenue: f64,
    pub cost: f64,
    /// conversions / clicks
    pub conversion_rate: Ratio,
    /// cost / conversions
    pub cpa: Ratio,
    /// (revenue - cost) / cost
    pub roi: Ratio,
}

/// Sum the six base metrics in one pass and derive the three ratios.
///
/// An empty view gives zero totals and undefined ratios. Count totals
/// saturate at `u64::MAX`.
pub fn summarize(view: &FilteredView<'_>) -> KpiBundle {
    let mut kpis = view.iter().fold(KpiBundle::default(), |mut acc, r| {
        acc.impressions = acc.impressions.saturating_add(r.impressions);
        acc.clicks = acc.clicks.saturating_add(r.clicks);
        acc.leads = acc.leads.saturating_add(r.leads);
        acc.conversions = acc.conversions.saturating_add(r.conversions);
        acc.revenue += r.revenue;
        acc.cost += r.cost;
        acc
    });

    kpis.conversion_rate = Ratio::of(kpis.conversions as f64, kpis.clicks as f64);
    kpis.cpa = Ratio::of(kpis.cost, kpis.conversions as f64);
    kpis.roi = roi(kpis.revenue, kpis.cost);

    debug!(
        rows = view.len(),
        conversions = kpis.conversions,
        revenue = kpis.revenue,
        cost = kpis.cost,
        "KPIs summarized"
    );
    kpis
}
