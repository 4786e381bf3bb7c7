use chrono::DateTime;
use chrono::Utc;

/// One hand history exactly as it was fetched.
///
/// The text is opaque until parsed. `source` identifies where it came from
/// (table and hand number, or a file name) and travels with every result
/// and failure so a batch can report per-hand outcomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawHand {
    source: String,
    fetched: DateTime<Utc>,
    text: String,
}

impl RawHand {
    pub fn new(source: impl Into<String>, fetched: DateTime<Utc>, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            fetched,
            text: text.into(),
        }
    }
    /// A hand fetched just now.
    pub fn now(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(source, Utc::now(), text)
    }
    pub fn source(&self) -> &str {
        &self.source
    }
    pub fn fetched(&self) -> DateTime<Utc> {
        self.fetched
    }
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl std::fmt::Display for RawHand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} ({} bytes, fetched {})", self.source, self.text.len(), self.fetched)
    }
}
