//! Filter engine — narrows the session dataset to the selected channels and
//! campaigns.

use campaign_core::{CampaignRecord, Dataset, FilterSpec};
use serde::Serialize;
use tracing::debug;

/// Rows of a [`Dataset`] that passed a [`FilterSpec`], in their original
/// order. Borrows from the dataset and owns no records.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FilteredView<'a> {
    rows: Vec<&'a CampaignRecord>,
}

impl<'a> FilteredView<'a> {
    pub fn rows(&self) -> &[&'a CampaignRecord] {
        &self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a CampaignRecord> + '_ {
        self.rows.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<'a> FromIterator<&'a CampaignRecord> for FilteredView<'a> {
    fn from_iter<I: IntoIterator<Item = &'a CampaignRecord>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

/// Keep the rows whose channel and campaign are both selected.
///
/// Selections that name values absent from the dataset are not an error, they
/// simply match nothing. An empty selection on either dimension yields an
/// empty view.
pub fn apply<'a>(dataset: &'a Dataset, spec: &FilterSpec) -> FilteredView<'a> {
    let view: FilteredView<'a> = dataset
        .records()
        .iter()
        .filter(|r| spec.matches(r))
        .collect();
    debug!(
        total = dataset.len(),
        matched = view.len(),
        channels = spec.channels.len(),
        campaigns = spec.campaigns.len(),
        "Filter applied"
    );
    view
}
