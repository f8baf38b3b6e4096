pub mod config;
pub mod error;
pub mod loader;
pub mod types;

pub use config::AppConfig;
pub use error::{CampaignError, CampaignResult};
pub use types::{CampaignRecord, Dataset, FilterSpec, REQUIRED_COLUMNS};
