use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single course entitlement as returned by the entitlement service.
///
/// The store treats the record as opaque and replaces the whole collection
/// on every successful fetch. The fields below are the ones the service is
/// known to populate; anything else the service sends is kept verbatim in
/// `extra` so no payload shape is ever rejected.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Entitlement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    /// Seat mode the entitlement was purchased for ("verified", "audit", ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_number: Option<String>,
    /// Course run the entitlement is currently redeemed against, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enrollment_course_run: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expired_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<String>,
    /// Unrecognized payload fields, preserved as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Entitlement {
    /// An entitlement with `expired_at` set can no longer be redeemed.
    pub fn is_expired(&self) -> bool {
        self.expired_at.is_some()
    }

    /// Whether the entitlement is currently redeemed against a course run.
    pub fn is_enrolled(&self) -> bool {
        self.enrollment_course_run.is_some()
    }

    /// Short label for table rows: course UUID, or the entitlement's own
    /// UUID, or a dash.
    pub fn course_label(&self) -> &str {
        self.course_uuid
            .as_deref()
            .or(self.uuid.as_deref())
            .unwrap_or("-")
    }
}
