//! Attribution model comparison — conversions credited under each model.

use crate::filter::FilteredView;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributionRow {
    pub attribution_model: String,
    pub conversions: u64,
}

/// One row per attribution model, ascending by model name. Empty when the
/// view is empty; renderers must cope with zero slices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributionTable {
    pub rows: Vec<AttributionRow>,
}

impl AttributionTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn total_conversions(&self) -> u64 {
        self.rows
            .iter()
            .fold(0u64, |acc, r| acc.saturating_add(r.conversions))
    }

    pub fn get(&self, model: &str) -> Option<&AttributionRow> {
        self.rows.iter().find(|r| r.attribution_model == model)
    }
}

/// Sum conversions per attribution model. Totals saturate at `u64::MAX`.
pub fn group_by_attribution(view: &FilteredView<'_>) -> AttributionTable {
    let mut groups: BTreeMap<&str, u64> = BTreeMap::new();
    for record in view.iter() {
        let total = groups.entry(record.attribution_model.as_str()).or_insert(0);
        *total = total.saturating_add(record.conversions);
    }

    AttributionTable {
        rows: groups
            .into_iter()
            .map(|(model, conversions)| AttributionRow {
                attribution_model: model.to_string(),
                conversions,
            })
            .collect(),
    }
}
