use thiserror::Error;

pub type CampaignResult<T> = Result<T, CampaignError>;

#[derive(Error, Debug)]
pub enum CampaignError {
    #[error("Schema error: missing required column(s): {}", missing.join(", "))]
    Schema { missing: Vec<String> },

    #[error("Invalid record at line {line}: column `{column}` has unparseable value {value:?}")]
    InvalidRecord {
        line: u64,
        column: String,
        value: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_error_lists_every_missing_column() {
        let err = CampaignError::Schema {
            missing: vec!["leads".to_string(), "cost".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Schema error: missing required column(s): leads, cost"
        );
    }

    #[test]
    fn test_invalid_record_message() {
        let err = CampaignError::InvalidRecord {
            line: 3,
            column: "clicks".to_string(),
            value: "many".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("line 3"));
        assert!(msg.contains("`clicks`"));
        assert!(msg.contains("\"many\""));
    }
}
