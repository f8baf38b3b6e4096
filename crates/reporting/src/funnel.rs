//! Funnel series — the four engagement stages from impression to conversion.

use crate::metrics::KpiBundle;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FunnelStage {
    Impressions,
    Clicks,
    Leads,
    Conversions,
}

impl FunnelStage {
    pub const ALL: [FunnelStage; 4] = [
        FunnelStage::Impressions,
        FunnelStage::Clicks,
        FunnelStage::Leads,
        FunnelStage::Conversions,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FunnelStage::Impressions => "Impressions",
            FunnelStage::Clicks => "Clicks",
            FunnelStage::Leads => "Leads",
            FunnelStage::Conversions => "Conversions",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunnelPoint {
    pub stage: FunnelStage,
    pub count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FunnelSeries {
    pub points: [FunnelPoint; 4],
}

impl FunnelSeries {
    pub fn iter(&self) -> impl Iterator<Item = &FunnelPoint> {
        self.points.iter()
    }
}

/// Stage counts straight from the KPI totals, widest stage first. Counts are
/// not required to narrow from one stage to the next.
pub fn funnel(kpis: &KpiBundle) -> FunnelSeries {
    let count = |stage: FunnelStage| match stage {
        FunnelStage::Impressions => kpis.impressions,
        FunnelStage::Clicks => kpis.clicks,
        FunnelStage::Leads => kpis.leads,
        FunnelStage::Conversions => kpis.conversions,
    };
    FunnelSeries {
        points: FunnelStage::ALL.map(|stage| FunnelPoint {
            stage,
            count: count(stage),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_order_and_counts() {
        let kpis = KpiBundle {
            impressions: 1000,
            clicks: 100,
            leads: 20,
            conversions: 5,
            ..Default::default()
        };
        let series = funnel(&kpis);
        let pairs: Vec<(&str, u64)> = series.iter().map(|p| (p.stage.name(), p.count)).collect();
        assert_eq!(
            pairs,
            vec![
                ("Impressions", 1000),
                ("Clicks", 100),
                ("Leads", 20),
                ("Conversions", 5)
            ]
        );
    }

    #[test]
    fn test_non_monotonic_counts_unchanged() {
        let kpis = KpiBundle {
            impressions: 10,
            clicks: 50,
            leads: 2,
            conversions: 9,
            ..Default::default()
        };
        let counts: Vec<u64> = funnel(&kpis).iter().map(|p| p.count).collect();
        assert_eq!(counts, vec![10, 50, 2, 9]);
    }

    #[test]
    fn test_serializes_as_ordered_array() {
        let json = serde_json::to_value(funnel(&KpiBundle::default())).unwrap();
        assert_eq!(json[0]["stage"], "Impressions");
        assert_eq!(json[3]["stage"], "Conversions");
        assert_eq!(json[3]["count"], 0);
    }
}
