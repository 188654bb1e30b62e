use serde::{Deserialize, Deserializer};

use crate::error::Result;

/// Top-level shape of the OGN device database download.
#[derive(Debug, Deserialize)]
struct OGNDeviceDatabase {
    devices: Vec<OGNDevice>,
}

/// One record of the OGN device database.
///
/// All fields are kept as the raw strings the DDB publishes. Missing or
/// `null` fields end up as empty strings.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OGNDevice {
    #[serde(deserialize_with = "null_as_empty")]
    pub device_type: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub device_id: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub aircraft_model: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub registration: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub cn: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub tracked: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub identified: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decodes a DDB JSON payload into its device records, in input order.
pub fn parse(json: &[u8]) -> Result<Vec<OGNDevice>> {
    let database: OGNDeviceDatabase = serde_json::from_slice(json)?;
    debug!("Parsed {} OGN device records", database.devices.len());
    Ok(database.devices)
}
