//! Display formatting for KPI cards and tables.
//!
//! Undefined ratios are rendered with a placeholder label rather than being
//! formatted as numbers.

use crate::metrics::{KpiBundle, Ratio};
use campaign_core::config::DisplayConfig;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KpiCard {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone)]
pub struct KpiFormatter {
    currency_symbol: String,
    undefined_label: String,
}

impl KpiFormatter {
    pub fn new(config: &DisplayConfig) -> Self {
        Self {
            currency_symbol: config.currency_symbol.clone(),
            undefined_label: config.undefined_label.clone(),
        }
    }

    /// `0.05` → `5.00%`.
    pub fn percent(&self, ratio: Ratio) -> String {
        match ratio {
            Ratio::Defined(v) => format!("{:.2}%", v * 100.0),
            Ratio::Undefined => self.undefined_label.clone(),
        }
    }

    /// `1234567.5` with two decimals → `$1,234,567.50`.
    pub fn currency(&self, amount: f64, decimals: usize) -> String {
        let sign = if amount < 0.0 { "-" } else { "" };
        format!(
            "{sign}{}{}",
            self.currency_symbol,
            group_thousands(&format!("{:.*}", decimals, amount.abs()))
        )
    }

    pub fn currency_ratio(&self, ratio: Ratio, decimals: usize) -> String {
        match ratio {
            Ratio::Defined(v) => self.currency(v, decimals),
            Ratio::Undefined => self.undefined_label.clone(),
        }
    }

    pub fn count(&self, value: u64) -> String {
        group_thousands(&value.to_string())
    }

    /// The four headline cards: conversion rate, CPA, ROI, revenue.
    pub fn kpi_cards(&self, kpis: &KpiBundle) -> Vec<KpiCard> {
        vec![
            KpiCard {
                label: "Conversion Rate",
                value: self.percent(kpis.conversion_rate),
            },
            KpiCard {
                label: "CPA",
                value: self.currency_ratio(kpis.cpa, 2),
            },
            KpiCard {
                label: "ROI",
                value: self.percent(kpis.roi),
            },
            KpiCard {
                label: "Revenue",
                value: self.currency(kpis.revenue, 0),
            },
        ]
    }
}

impl Default for KpiFormatter {
    fn default() -> Self {
        Self::new(&DisplayConfig::default())
    }
}

/// Insert `,` separators into the integer part of an unsigned decimal string.
fn group_thousands(digits: &str) -> String {
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 4);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}
