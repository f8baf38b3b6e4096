//! Dataset loading — reads delimited campaign exports and checks them against
//! the required column schema before any row reaches the aggregator.

use crate::error::{CampaignError, CampaignResult};
use crate::types::{CampaignRecord, Dataset, REQUIRED_COLUMNS};
use csv::ReaderBuilder;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

/// Position of each required column in the source header, indexed like
/// [`REQUIRED_COLUMNS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnIndex([usize; REQUIRED_COLUMNS.len()]);

impl ColumnIndex {
    /// Resolve required columns against a header row. Fails with every
    /// missing column named, not just the first.
    fn resolve<S: AsRef<str>>(headers: &[S]) -> CampaignResult<Self> {
        let mut positions = [0usize; REQUIRED_COLUMNS.len()];
        let mut missing = Vec::new();

        for (slot, name) in REQUIRED_COLUMNS.iter().enumerate() {
            match headers.iter().position(|h| h.as_ref().trim() == *name) {
                Some(pos) => positions[slot] = pos,
                None => missing.push(name.to_string()),
            }
        }

        if missing.is_empty() {
            Ok(Self(positions))
        } else {
            Err(CampaignError::Schema { missing })
        }
    }

    fn parse_row<'r>(
        &self,
        line: u64,
        cell: impl Fn(usize) -> Option<&'r str>,
    ) -> CampaignResult<CampaignRecord> {
        let field = |slot: usize| cell(self.0[slot]).unwrap_or("").trim();

        Ok(CampaignRecord {
            channel: field(0).to_string(),
            campaign: field(1).to_string(),
            attribution_model: field(2).to_string(),
            impressions: parse_count(line, REQUIRED_COLUMNS[3], field(3))?,
            clicks: parse_count(line, REQUIRED_COLUMNS[4], field(4))?,
            leads: parse_count(line, REQUIRED_COLUMNS[5], field(5))?,
            conversions: parse_count(line, REQUIRED_COLUMNS[6], field(6))?,
            revenue: parse_amount(line, REQUIRED_COLUMNS[7], field(7))?,
            cost: parse_amount(line, REQUIRED_COLUMNS[8], field(8))?,
        })
    }
}

fn invalid(line: u64, column: &str, value: &str) -> CampaignError {
    CampaignError::InvalidRecord {
        line,
        column: column.to_string(),
        value: value.to_string(),
    }
}

fn parse_count(line: u64, column: &str, value: &str) -> CampaignResult<u64> {
    u64::from_str(value).map_err(|_| invalid(line, column, value))
}

fn parse_amount(line: u64, column: &str, value: &str) -> CampaignResult<f64> {
    match f64::from_str(value) {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err(invalid(line, column, value)),
    }
}

/// Load a dataset from a delimited file on disk.
pub fn load_csv_path(path: impl AsRef<Path>, delimiter: u8) -> CampaignResult<Dataset> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)?;
    let dataset = load_csv_reader(file, delimiter)?;
    info!(
        path = %path.display(),
        rows = dataset.len(),
        "Campaign dataset loaded"
    );
    Ok(dataset)
}

/// Load a dataset from any reader producing delimited text with a header row.
pub fn load_csv_reader<R: Read>(reader: R, delimiter: u8) -> CampaignResult<Dataset> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    let index = ColumnIndex::resolve(&headers)?;
    debug!(columns = headers.len(), "Header schema validated");

    let mut records = Vec::new();
    for result in rdr.records() {
        let row = result?;
        let line = row.position().map_or(0, |p| p.line());
        records.push(index.parse_row(line, |i| row.get(i))?);
    }

    Ok(Dataset::new(records))
}

impl Dataset {
    /// Build a dataset from already-tabular data: a header row plus string
    /// cells. Runs the same schema check as the CSV loader. Line numbers in
    /// errors count the header as line 1.
    pub fn from_columns<H, R, C>(headers: &[H], rows: R) -> CampaignResult<Self>
    where
        H: AsRef<str>,
        R: IntoIterator,
        R::Item: AsRef<[C]>,
        C: AsRef<str>,
    {
        let index = ColumnIndex::resolve(headers)?;
        rows.into_iter()
            .enumerate()
            .map(|(i, row)| {
                let cells = row.as_ref();
                index.parse_row(i as u64 + 2, |col| cells.get(col).map(|c| c.as_ref()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "channel,campaign,attribution_model,impressions,clicks,leads,conversions,revenue,cost";

    fn load(text: &str) -> CampaignResult<Dataset> {
        load_csv_reader(text.as_bytes(), b',')
    }

    #[test]
    fn test_load_well_formed_csv() {
        let text = format!(
            "{HEADER}\nads,A,last,1000,100,20,5,500,100\nemail,B,first,200,40,10,2,80.5,12.25\n"
        );
        let dataset = load(&text).unwrap();
        assert_eq!(dataset.len(), 2);
        let first = &dataset.records()[0];
        assert_eq!(first.channel, "ads");
        assert_eq!(first.impressions, 1000);
        assert!((first.revenue - 500.0).abs() < f64::EPSILON);
        let second = &dataset.records()[1];
        assert_eq!(second.attribution_model, "first");
        assert!((second.cost - 12.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_column_order_is_free_and_extras_ignored() {
        let text = "cost, revenue ,region,conversions,leads,clicks,impressions,attribution_model,campaign,channel\n\
                    100,500,emea,5,20,100,1000,last,A,ads\n";
        let dataset = load(text).unwrap();
        let row = &dataset.records()[0];
        assert_eq!(row.channel, "ads");
        assert_eq!(row.campaign, "A");
        assert_eq!(row.clicks, 100);
        assert!((row.cost - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_columns_raise_schema_error() {
        let text = "channel,campaign,impressions,clicks,conversions,revenue\nads,A,1,1,1,1\n";
        match load(text) {
            Err(CampaignError::Schema { missing }) => {
                assert_eq!(missing, vec!["attribution_model", "leads", "cost"]);
            }
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn test_header_only_yields_empty_dataset() {
        let dataset = load(&format!("{HEADER}\n")).unwrap();
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_unparseable_count_reports_line_and_column() {
        let text = format!("{HEADER}\nads,A,last,1000,100,20,5,500,100\nads,A,last,1000,lots,20,5,500,100\n");
        match load(&text) {
            Err(CampaignError::InvalidRecord {
                line,
                column,
                value,
            }) => {
                assert_eq!(line, 3);
                assert_eq!(column, "clicks");
                assert_eq!(value, "lots");
            }
            other => panic!("expected invalid record, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_amount_rejected() {
        let text = format!("{HEADER}\nads,A,last,1000,100,20,5,500,-1\n");
        assert!(matches!(
            load(&text),
            Err(CampaignError::InvalidRecord { ref column, .. }) if column == "cost"
        ));
    }

    #[test]
    fn test_non_finite_amounts_rejected() {
        for value in ["NaN", "inf", "-inf", "infinity"] {
            let text = format!("{HEADER}\nads,A,last,1000,100,20,5,{value},100\n");
            match load(&text) {
                Err(CampaignError::InvalidRecord { column, value: got, .. }) => {
                    assert_eq!(column, "revenue");
                    assert_eq!(got, value);
                }
                other => panic!("expected invalid record for {value}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_alternate_delimiter() {
        let text = HEADER.replace(',', ";") + "\nads;A;last;10;5;2;1;9.5;3\n";
        let dataset = load_csv_reader(text.as_bytes(), b';').unwrap();
        assert_eq!(dataset.records()[0].leads, 2);
    }

    #[test]
    fn test_from_columns_validates_schema() {
        let headers = ["channel", "campaign", "impressions"];
        let rows: Vec<Vec<String>> = Vec::new();
        assert!(matches!(
            Dataset::from_columns(&headers, rows),
            Err(CampaignError::Schema { .. })
        ));
    }

    #[test]
    fn test_from_columns_builds_records() {
        let headers: Vec<&str> = HEADER.split(',').collect();
        let rows = vec![
            vec!["ads", "A", "last", "1000", "100", "20", "5", "500", "100"],
            vec!["email", "B", "first", "10", "1", "1", "0", "0", "0"],
        ];
        let dataset = Dataset::from_columns(&headers, rows).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.records()[1].channel, "email");
        assert_eq!(dataset.records()[1].conversions, 0);
    }
}
