//! Campaign dashboard — one recomputation of every panel for a filter
//! selection.

use crate::attribution::{group_by_attribution, AttributionTable};
use crate::filter::apply;
use crate::funnel::{funnel, FunnelSeries};
use crate::metrics::{summarize, KpiBundle};
use crate::roi::{group_by_channel, ChannelRoiTable};
use campaign_core::{Dataset, FilterSpec};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub matched_rows: usize,
    pub kpis: KpiBundle,
    pub funnel: FunnelSeries,
    pub channel_roi: ChannelRoiTable,
    pub attribution: AttributionTable,
}

impl Dashboard {
    /// Filter the dataset and derive every panel from the resulting view.
    /// Call again on each selection change; nothing is cached.
    pub fn build(dataset: &Dataset, spec: &FilterSpec) -> Self {
        let view = apply(dataset, spec);
        let kpis = summarize(&view);
        let dashboard = Self {
            matched_rows: view.len(),
            funnel: funnel(&kpis),
            kpis,
            channel_roi: group_by_channel(&view),
            attribution: group_by_attribution(&view),
        };
        debug!(
            matched = dashboard.matched_rows,
            channels = dashboard.channel_roi.rows.len(),
            models = dashboard.attribution.rows.len(),
            "Dashboard rebuilt"
        );
        dashboard
    }
}
