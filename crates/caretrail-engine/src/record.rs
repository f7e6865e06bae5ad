//! Timeline record model.

use serde::{Deserialize, Serialize};

/// One accepted row of an uploaded timeline file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineRecord {
    /// 1-based line number of the row in the raw input.
    ///
    /// Not a stable identity: inserting or removing lines shifts every id
    /// below the edit.
    pub id: usize,

    /// Month label, unvalidated (may be empty or repeated).
    pub month: String,

    /// What the member raised.
    pub member_concern: String,

    /// What was decided in response.
    pub decision_by_elyx: String,

    /// Why; `None` when the row carried fewer than five fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason_for_decision: Option<String>,
}

impl TimelineRecord {
    /// Reason text, or an empty string when the row had none.
    pub fn reason(&self) -> &str {
        self.reason_for_decision.as_deref().unwrap_or_default()
    }
}
