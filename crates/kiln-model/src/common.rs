//! Shapes shared across API areas.

use kiln_core::wire_enum;
use serde::{Deserialize, Serialize};

wire_enum! {
    /// Compression applied to a data channel or transform input.
    pub enum CompressionType {
        None => "None",
        Gzip => "Gzip",
    }
}

/// A key/value label attached to a control-plane resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    /// The tag key.
    pub key: String,
    /// The tag value. May be empty.
    pub value: String,
}

impl Tag {
    /// Create a tag from a key and value.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// VPC placement for jobs and hosted resources.
///
/// Both lists are required by the service when a VPC config is supplied;
/// the service rejects empty lists server-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VpcConfig {
    /// Security group identifiers for the job's network interfaces.
    pub security_group_ids: Vec<String>,
    /// Subnets the job's resources are created in.
    pub subnets: Vec<String>,
}
