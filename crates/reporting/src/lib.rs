//! Campaign funnel and ROI reporting — selection filtering, KPI aggregation,
//! per-channel ROI, and attribution model comparison.

pub mod attribution;
pub mod dashboard;
pub mod display;
pub mod filter;
pub mod funnel;
pub mod metrics;
pub mod roi;

pub use attribution::{group_by_attribution, AttributionRow, AttributionTable};
pub use dashboard::Dashboard;
pub use display::{KpiCard, KpiFormatter};
pub use filter::{apply, FilteredView};
pub use funnel::{funnel, FunnelPoint, FunnelSeries, FunnelStage};
pub use metrics::{summarize, KpiBundle, Ratio};
pub use roi::{group_by_channel, ChannelRoiRow, ChannelRoiTable};
