use crate::match_record::MatchRecord;

#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("reading match record: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed match record: {0}")]
    Schema(#[from] serde_json::Error),
}

/// Stateless schema validator for raw match documents.
///
/// Either produces a fully structurally-valid [`MatchRecord`] (optional
/// sections may still be absent) or fails before any record value exists.
/// Constructed explicitly so tests can hand it fixture documents directly.
#[derive(Debug, Default, Clone, Copy)]
pub struct SchemaValidator {}

impl SchemaValidator {
    pub fn new() -> Self {
        Self {}
    }

    pub fn validate_bytes(&self, raw: &[u8]) -> Result<MatchRecord, ValidationError> {
        let record: MatchRecord = serde_json::from_slice(raw)?;
        self.log_validated(&record);
        Ok(record)
    }

    pub fn validate_value(&self, raw: serde_json::Value) -> Result<MatchRecord, ValidationError> {
        let record: MatchRecord = serde_json::from_value(raw)?;
        self.log_validated(&record);
        Ok(record)
    }

    pub fn validate_file(
        &self,
        path: impl AsRef<std::path::Path>,
    ) -> Result<MatchRecord, ValidationError> {
        let raw = std::fs::read(path)?;
        self.validate_bytes(&raw)
    }

    fn log_validated(&self, record: &MatchRecord) {
        tracing::debug!(
            map = %record.map_name,
            rounds = record.game_rounds.as_ref().map(|r| r.len()).unwrap_or(0),
            "validated match record"
        );
    }
}
