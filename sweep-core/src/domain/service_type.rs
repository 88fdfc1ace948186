//! Service type catalog entries

use serde::{Deserialize, Serialize};

/// A kind of cleaning service offered (e.g. "Deep Clean", "Move-out")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceType {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}
