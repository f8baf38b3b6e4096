//! Per-channel return on investment.

use crate::filter::FilteredView;
use crate::metrics::{roi, Ratio};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelRoiRow {
    pub channel: String,
    pub revenue: f64,
    pub cost: f64,
    pub roi: Ratio,
}

/// Channel rows in ascending channel order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelRoiTable {
    pub rows: Vec<ChannelRoiRow>,
}

impl ChannelRoiTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, channel: &str) -> Option<&ChannelRoiRow> {
        self.rows.iter().find(|r| r.channel == channel)
    }
}

/// Sum revenue and cost per channel and compute each channel's ROI. A channel
/// with zero cost gets an undefined ROI.
pub fn group_by_channel(view: &FilteredView<'_>) -> ChannelRoiTable {
    let mut groups: BTreeMap<&str, (f64, f64)> = BTreeMap::new();
    for record in view.iter() {
        let entry = groups.entry(record.channel.as_str()).or_default();
        entry.0 += record.revenue;
        entry.1 += record.cost;
    }

    let rows = groups
        .into_iter()
        .map(|(channel, (revenue, cost))| ChannelRoiRow {
            channel: channel.to_string(),
            revenue,
            cost,
            roi: roi(revenue, cost),
        })
        .collect();

    ChannelRoiTable { rows }
}
