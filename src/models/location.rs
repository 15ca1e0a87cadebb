use serde::{Deserialize, Serialize};

/// Full location tuple carried by a punch, mirroring the vendor's
/// `time_card` block. The `original_*` fields keep the uncorrected
/// reading when the user edits the location before confirming.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PunchLocation {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub accuracy: f64,
    #[serde(default)]
    pub original_latitude: f64,
    #[serde(default)]
    pub original_longitude: f64,
    #[serde(default)]
    pub original_address: String,
    #[serde(default)]
    pub location_edited: bool,
    #[serde(default)]
    pub accuracy_method: Option<String>,
    #[serde(default)]
    pub reference_id: Option<i64>,
}

impl PunchLocation {
    /// A location given directly by the user (no GPS reading behind it).
    pub fn manual(latitude: f64, longitude: f64, address: &str) -> Self {
        Self {
            latitude,
            longitude,
            address: address.to_string(),
            accuracy: 0.0,
            original_latitude: latitude,
            original_longitude: longitude,
            original_address: address.to_string(),
            location_edited: false,
            accuracy_method: None,
            reference_id: None,
        }
    }
}

/// Employee favorite location from the session payload, offered as a
/// punch location option.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationReference {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl LocationReference {
    pub fn to_punch_location(&self) -> Option<PunchLocation> {
        let lat = self.latitude?;
        let lng = self.longitude?;
        let address = self.address.clone().unwrap_or_default();
        Some(PunchLocation {
            latitude: lat,
            longitude: lng,
            address: address.clone(),
            accuracy: 0.0,
            original_latitude: lat,
            original_longitude: lng,
            original_address: address,
            location_edited: false,
            accuracy_method: None,
            reference_id: self.id,
        })
    }
}
