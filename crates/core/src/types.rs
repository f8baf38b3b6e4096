use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

/// Columns every campaign dataset must carry, in canonical order.
pub const REQUIRED_COLUMNS: [&str; 9] = [
    "channel",
    "campaign",
    "attribution_model",
    "impressions",
    "clicks",
    "leads",
    "conversions",
    "revenue",
    "cost",
];

/// One aggregated row of campaign activity for a channel/campaign/attribution
/// model combination.
///
/// Funnel ordering (`clicks <= impressions`, `conversions <= leads <= clicks`)
/// is expected of well-formed data but never checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignRecord {
    pub channel: String,
    pub campaign: String,
    pub attribution_model: String,
    pub impressions: u64,
    pub clicks: u64,
    pub leads: u64,
    pub conversions: u64,
    pub revenue: f64,
    pub cost: f64,
}

/// The immutable record set for one dashboard session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    records: Vec<CampaignRecord>,
}

impl Dataset {
    pub fn new(records: Vec<CampaignRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[CampaignRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct channels in first-seen order.
    pub fn channels(&self) -> Vec<String> {
        distinct(self.records.iter().map(|r| r.channel.as_str()))
    }

    /// Distinct campaigns in first-seen order.
    pub fn campaigns(&self) -> Vec<String> {
        distinct(self.records.iter().map(|r| r.campaign.as_str()))
    }
}

impl FromIterator<CampaignRecord> for Dataset {
    fn from_iter<I: IntoIterator<Item = CampaignRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}

/// Selected channel and campaign values. An empty set selects nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    pub channels: BTreeSet<String>,
    pub campaigns: BTreeSet<String>,
}

impl FilterSpec {
    pub fn new<C, P>(channels: C, campaigns: P) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        Self {
            channels: channels.into_iter().map(Into::into).collect(),
            campaigns: campaigns.into_iter().map(Into::into).collect(),
        }
    }

    /// Every channel and campaign present in the dataset; the dashboard's
    /// initial selection.
    pub fn select_all(dataset: &Dataset) -> Self {
        Self::new(dataset.channels(), dataset.campaigns())
    }

    pub fn matches(&self, record: &CampaignRecord) -> bool {
        self.channels.contains(&record.channel) && self.campaigns.contains(&record.campaign)
    }
}
