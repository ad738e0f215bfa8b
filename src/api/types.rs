//! Wire models for the dealership backend.
//!
//! The backend is loose about identifier types: the same id can arrive as a
//! JSON string in one collection and a number in another. `EntityId` absorbs
//! both representations and all matching goes through string normalization.

use serde::{Deserialize, Serialize};

/// Identifier as it arrives from the backend: JSON string or number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Text(String),
    Number(i64),
}

impl EntityId {
    /// Canonical string form used for all identity comparisons.
    pub fn normalized(&self) -> String {
        match self {
            EntityId::Text(s) => s.trim().to_string(),
            EntityId::Number(n) => n.to_string(),
        }
    }

    /// Identity comparison tolerant of string/number representation mismatch.
    pub fn matches(&self, other: &EntityId) -> bool {
        self.normalized() == other.normalized()
    }

    pub fn matches_str(&self, other: &str) -> bool {
        self.normalized() == other.trim()
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.normalized())
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        EntityId::Text(value.to_string())
    }
}

impl From<i64> for EntityId {
    fn from(value: i64) -> Self {
        EntityId::Number(value)
    }
}

/// A recorded purchase transaction linking a motorcycle to a counterparty.
///
/// Read-only from this crate's perspective; created by the sales workflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    pub id: EntityId,
    #[serde(default)]
    pub contract_number: Option<String>,
    #[serde(rename = "type", default)]
    pub contract_type: Option<String>,
    #[serde(default)]
    pub motorcycle_id: Option<EntityId>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

impl Contract {
    /// Only purchase contracts enter the inspection workflow. Case-insensitive
    /// because the backend stores the type in mixed case.
    pub fn is_purchase(&self) -> bool {
        self.contract_type
            .as_deref()
            .map(|t| t.trim().eq_ignore_ascii_case("purchase"))
            .unwrap_or(false)
    }
}

/// Inspection record attached to a contract. Zero-or-one per contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inspection {
    pub id: EntityId,
    pub contract_id: EntityId,
    #[serde(default)]
    pub workflow_status: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Body of `PUT /inspections/{id}` when advancing the workflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectionUpdate {
    pub workflow_status: String,
    pub status: String,
}
