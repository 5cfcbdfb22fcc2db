//! Table Configuration
//!
//! Where the todo table lives. Passed to the client at construction.

/// Hosted table service endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.altan.ai/galaxia/hook/BC3v7z";

/// Identifier of the todo table
pub const DEFAULT_TABLE_ID: &str = "e2bb58ff-5ba7-4dca-a9c5-b4c288ea94a7";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub base_url: String,
    pub table_id: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            table_id: DEFAULT_TABLE_ID.to_string(),
        }
    }
}

impl TableConfig {
    pub fn new(base_url: impl Into<String>, table_id: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            table_id: table_id.into(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_table_id(mut self, table_id: impl Into<String>) -> Self {
        self.table_id = table_id.into();
        self
    }

    /// `/table/{id}/record`
    pub fn records_path(&self) -> String {
        format!("/table/{}/record", self.table_id)
    }

    /// `/table/{id}/record/query`
    pub fn query_path(&self) -> String {
        format!("{}/query", self.records_path())
    }

    /// `/table/{id}/record/{record_id}`
    pub fn record_path(&self, record_id: i64) -> String {
        format!("{}/{}", self.records_path(), record_id)
    }

    /// Absolute URL for a path produced above
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        let config = TableConfig::new("https://example.test/hook/", "tbl");
        assert_eq!(config.query_path(), "/table/tbl/record/query");
        assert_eq!(config.records_path(), "/table/tbl/record");
        assert_eq!(config.record_path(42), "/table/tbl/record/42");
        assert_eq!(
            config.url(&config.record_path(42)),
            "https://example.test/hook/table/tbl/record/42"
        );
    }

    #[test]
    fn test_default_points_at_hosted_table() {
        let config = TableConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.table_id, DEFAULT_TABLE_ID);

        let other = config.with_table_id("other");
        assert_eq!(other.records_path(), "/table/other/record");
    }
}
