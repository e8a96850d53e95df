//! Visitor counter model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use utoipa::ToSchema;

/// Identifier used when the client address cannot be determined
pub const UNKNOWN_CLIENT: &str = "unknown";

/// One (client, day) pair to be counted
#[derive(Debug, Clone)]
pub struct VisitRecord {
    pub id: Uuid,
    /// Client identifier (normally the remote IP address)
    pub ip_address: String,
    pub visit_date: NaiveDate,
}

impl VisitRecord {
    pub fn new(ip_address: impl Into<String>, visit_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            ip_address: ip_address.into(),
            visit_date,
        }
    }
}

/// Result of trying to record a visit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitOutcome {
    /// First visit for this client today; the counter was incremented
    Counted,
    /// The client was already counted today; nothing changed
    AlreadyCounted,
}

/// Visitor count response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VisitorCountResponse {
    /// Total number of counted visits
    pub count: i64,
}
