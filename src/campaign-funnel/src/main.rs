//! Campaign Funnel — marketing funnel and campaign ROI dashboard.
//!
//! Loads a campaign export, applies the channel/campaign selection, and
//! renders the KPI cards, funnel, channel ROI, and attribution panels.

mod render;

use anyhow::Context;
use campaign_core::config::AppConfig;
use campaign_core::loader::load_csv_path;
use campaign_core::FilterSpec;
use campaign_reporting::{Dashboard, KpiFormatter};
use chrono::Utc;
use clap::{Parser, ValueEnum};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "campaign-funnel")]
#[command(about = "Marketing funnel and campaign ROI analytics")]
#[command(version)]
struct Cli {
    /// Campaign export to load (overrides config)
    #[arg(long, env = "CAMPAIGN_FUNNEL__DATA__PATH")]
    data: Option<String>,

    /// Field delimiter of the export (overrides config)
    #[arg(long)]
    delimiter: Option<char>,

    /// Channel to include; repeat for several. Defaults to every channel.
    #[arg(long = "channel", value_name = "NAME")]
    channels: Vec<String>,

    /// Campaign to include; repeat for several. Defaults to every campaign.
    #[arg(long = "campaign", value_name = "NAME")]
    campaigns: Vec<String>,

    /// Select no channels at all
    #[arg(long, conflicts_with = "channels")]
    no_channels: bool,

    /// Select no campaigns at all
    #[arg(long, conflicts_with = "campaigns")]
    no_campaigns: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Emit logs as JSON
    #[arg(long, default_value_t = false)]
    log_json: bool,
}

impl Cli {
    /// Resolve the selection. An omitted dimension means "everything in the
    /// dataset"; an explicit `--no-*` flag means the empty set.
    fn filter_spec(&self, dataset: &campaign_core::Dataset) -> FilterSpec {
        let all = FilterSpec::select_all(dataset);
        let channels = if self.no_channels {
            Default::default()
        } else if self.channels.is_empty() {
            all.channels
        } else {
            self.channels.iter().cloned().collect()
        };
        let campaigns = if self.no_campaigns {
            Default::default()
        } else if self.campaigns.is_empty() {
            all.campaigns
        } else {
            self.campaigns.iter().cloned().collect()
        };
        FilterSpec {
            channels,
            campaigns,
        }
    }
}

#[derive(serde::Serialize)]
struct JsonReport<'a> {
    generated_at: chrono::DateTime<Utc>,
    source: &'a str,
    filters: &'a FilterSpec,
    dashboard: &'a Dashboard,
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        "campaign_funnel=info,campaign_reporting=info,campaign_core=info".into()
    });
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let mut config = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        AppConfig::default()
    });

    // Apply CLI overrides
    if let Some(path) = &cli.data {
        config.data.path = path.clone();
    }
    if let Some(delimiter) = cli.delimiter {
        config.data.delimiter = delimiter;
    }

    info!(path = %config.data.path, "Configuration loaded");

    let delimiter = config.data.delimiter_byte()?;
    let dataset = load_csv_path(&config.data.path, delimiter)
        .with_context(|| format!("failed to load campaign data from {}", config.data.path))?;

    let spec = cli.filter_spec(&dataset);
    let dashboard = Dashboard::build(&dataset, &spec);
    info!(
        rows = dataset.len(),
        matched = dashboard.matched_rows,
        "Dashboard computed"
    );

    match cli.format {
        OutputFormat::Json => {
            let report = JsonReport {
                generated_at: Utc::now(),
                source: &config.data.path,
                filters: &spec,
                dashboard: &dashboard,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            let formatter = KpiFormatter::new(&config.display);
            print!("{}", render::render_text(&dashboard, &spec, &formatter)?);
        }
    }

    Ok(())
}
