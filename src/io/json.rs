use crate::api::location::LocationRecord;
use crate::api::search::result_extent;
use crate::util::error::PlzError;
use crate::util::postcode::PostalCode;
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, JsonValue, Value};
use serde::Serialize;

/// Flat, serializable view of one search result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchRow {
    pub code: PostalCode,
    pub latitude: f64,
    pub longitude: f64,
    pub distance_km: Option<f64>,
}

impl From<&LocationRecord> for MatchRow {
    fn from(rec: &LocationRecord) -> Self {
        Self {
            code: rec.code().clone(),
            latitude: rec.latitude().value(),
            longitude: rec.longitude().value(),
            distance_km: rec.distance_km(),
        }
    }
}

/// Pretty-printed JSON array of [`MatchRow`]s.
pub fn matches_to_json(matches: &[LocationRecord]) -> Result<String, PlzError> {
    let rows: Vec<MatchRow> = matches.iter().map(MatchRow::from).collect();
    serde_json::to_string_pretty(&rows).map_err(|e| PlzError::ExportError(e.to_string()))
}

/// GeoJSON FeatureCollection with one Point feature per match.
///
/// Each feature carries `code` and `distance_km` properties; the collection's
/// bbox is the extent of the result set.
pub fn matches_to_feature_collection(matches: &[LocationRecord]) -> FeatureCollection {
    let features = matches
        .iter()
        .map(|rec| {
            let mut properties = JsonObject::new();
            properties.insert("code".to_string(), JsonValue::from(rec.code().as_str()));
            properties.insert(
                "distance_km".to_string(),
                rec.distance_km().map(JsonValue::from).unwrap_or(JsonValue::Null),
            );
            Feature {
                bbox: None,
                geometry: Some(Geometry::new(Value::from(&rec.point()))),
                id: None,
                properties: Some(properties),
                foreign_members: None,
            }
        })
        .collect();

    let bbox = result_extent(matches)
        .map(|rect| vec![rect.min().x, rect.min().y, rect.max().x, rect.max().y]);

    FeatureCollection {
        bbox,
        features,
        foreign_members: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<LocationRecord> {
        vec![
            LocationRecord::new("10115", 52.5323, 13.3846).with_distance(0.0),
            LocationRecord::new("10117", 52.517, 13.3872).with_distance(1.7),
        ]
    }

    #[test]
    fn test_matches_to_json() -> Result<(), PlzError> {
        let json = matches_to_json(&sample())?;
        let parsed: serde_json::Value =
            serde_json::from_str(&json).map_err(|e| PlzError::ExportError(e.to_string()))?;

        assert_eq!(parsed[0]["code"], "10115");
        assert_eq!(parsed[1]["distance_km"], 1.7);
        assert_eq!(parsed[1]["latitude"], 52.517);
        Ok(())
    }

    #[test]
    fn test_json_keeps_leading_zero() -> Result<(), PlzError> {
        let json = matches_to_json(&[LocationRecord::new("01067", 51.05, 13.73)])?;
        assert!(json.contains("\"01067\""));
        assert!(json.contains("\"distance_km\": null"));
        Ok(())
    }

    #[test]
    fn test_feature_collection() {
        let fc = matches_to_feature_collection(&sample());

        assert_eq!(fc.features.len(), 2);
        assert_eq!(fc.bbox, Some(vec![13.3846, 52.517, 13.3872, 52.5323]));

        let first = &fc.features[0];
        assert_eq!(
            first.properties.as_ref().and_then(|p| p.get("code")),
            Some(&JsonValue::from("10115"))
        );
        assert!(fc.to_string().contains("FeatureCollection"));
    }

    #[test]
    fn test_empty_feature_collection() {
        let fc = matches_to_feature_collection(&[]);
        assert!(fc.features.is_empty());
        assert!(fc.bbox.is_none());
    }
}
