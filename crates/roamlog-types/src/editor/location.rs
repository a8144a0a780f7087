use serde::{Deserialize, Serialize};

/// OSM element type used when the real provenance of a location is unknown
pub const PLACEHOLDER_OSM_TYPE: &str = "N";

/// Unresolved geographic point attached to a draft block
///
/// Identifies a place by its external (OSM) identity before the backend
/// resolves it to a permanent place record. Equality is structural.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorLocation {
    /// OSM element type (`"N"`, `"W"`, `"R"`)
    pub osm_type: String,
    pub osm_id: i64,
    pub name: String,
    pub display_name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl EditorLocation {
    pub fn new(
        osm_type: impl Into<String>,
        osm_id: i64,
        name: impl Into<String>,
        display_name: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            osm_type: osm_type.into(),
            osm_id,
            name: name.into(),
            display_name: display_name.into(),
            latitude,
            longitude,
        }
    }

    /// Location with zeroed OSM identity.
    ///
    /// Built from an already-resolved place whose OSM origin is no longer known.
    pub fn placeholder(
        name: impl Into<String>,
        display_name: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self::new(
            PLACEHOLDER_OSM_TYPE,
            0,
            name,
            display_name,
            latitude,
            longitude,
        )
    }

    /// Whether the OSM identity refers to a real element
    pub fn has_provenance(&self) -> bool {
        self.osm_id != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_wire_field_names() {
        let location = EditorLocation::new("W", 42, "Cafe", "Cafe, Lisbon", 38.7, -9.1);
        let json = serde_json::to_value(&location).unwrap();

        assert_eq!(json["osmType"], "W");
        assert_eq!(json["osmId"], 42);
        assert_eq!(json["displayName"], "Cafe, Lisbon");
        assert_eq!(json["latitude"], 38.7);
    }

    #[test]
    fn test_placeholder_has_no_provenance() {
        let location = EditorLocation::placeholder("Cafe", "Cafe", 1.0, 2.0);
        assert_eq!(location.osm_type, "N");
        assert_eq!(location.osm_id, 0);
        assert!(!location.has_provenance());

        let real = EditorLocation::new("N", 7, "Cafe", "Cafe", 1.0, 2.0);
        assert!(real.has_provenance());
        assert_ne!(location, real);
    }
}
