use serde::{Deserialize, Serialize};

/// A piece of equipment associated with a tree node by id key only.
///
/// There is no back-reference to the node; the association survives deletion
/// of the node itself (the owning store does not cascade).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentRecord {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Free-form date string; no calendar validation is performed.
    #[serde(rename = "installationDate")]
    pub installation_date: String,
}

/// Payload for creating an equipment record; the store assigns the id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEquipment {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "installationDate")]
    pub installation_date: String,
}

/// Partial patch applied to an existing equipment record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(
        rename = "installationDate",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub installation_date: Option<String>,
}
