use crate::api::location::LocationRecord;
use crate::util::error::PlzError;
use arrow_array::{Float64Array, RecordBatch, StringArray};
use arrow_schema::{DataType, Field, Schema, SchemaRef};
use std::sync::Arc;

/// Arrow schema of exported locations.
pub fn locations_schema() -> SchemaRef {
    Arc::new(Schema::new(vec![
        Field::new("code", DataType::Utf8, false),
        Field::new("latitude", DataType::Float64, false),
        Field::new("longitude", DataType::Float64, false),
        Field::new("distance_km", DataType::Float64, true),
    ]))
}

/// Trait for converting collections of [`LocationRecord`]s to Arrow.
///
/// Implemented for `[LocationRecord]` and `Vec<LocationRecord>`.
pub trait LocationsToArrow {
    /// RecordBatch with code, latitude, longitude and (nullable) distance_km.
    fn to_record_batch(&self) -> Result<RecordBatch, PlzError>;
}

impl LocationsToArrow for [LocationRecord] {
    fn to_record_batch(&self) -> Result<RecordBatch, PlzError> {
        let codes: StringArray = self.iter().map(|r| Some(r.code().as_str())).collect();
        let latitudes: Float64Array = self.iter().map(|r| Some(r.latitude().value())).collect();
        let longitudes: Float64Array = self.iter().map(|r| Some(r.longitude().value())).collect();
        let distances: Float64Array = self.iter().map(|r| r.distance_km()).collect();

        RecordBatch::try_new(
            locations_schema(),
            vec![
                Arc::new(codes),
                Arc::new(latitudes),
                Arc::new(longitudes),
                Arc::new(distances),
            ],
        )
        .map_err(|e| PlzError::ExportError(e.to_string()))
    }
}

impl LocationsToArrow for Vec<LocationRecord> {
    fn to_record_batch(&self) -> Result<RecordBatch, PlzError> {
        self.as_slice().to_record_batch()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow_array::Array;

    #[test]
    fn test_to_record_batch() -> Result<(), PlzError> {
        let records = vec![
            LocationRecord::new("01067", 51.0575, 13.7201).with_distance(0.0),
            LocationRecord::new("01069", 51.0391, 13.7385),
        ];
        let batch = records.to_record_batch()?;

        assert_eq!(batch.num_rows(), 2);
        assert_eq!(batch.num_columns(), 4);
        assert_eq!(batch.schema().field(0).name(), "code");

        let codes = batch
            .column(0)
            .as_any()
            .downcast_ref::<StringArray>()
            .ok_or_else(|| PlzError::ExportError("code column type".into()))?;
        assert_eq!(codes.value(0), "01067");

        let distances = batch
            .column(3)
            .as_any()
            .downcast_ref::<Float64Array>()
            .ok_or_else(|| PlzError::ExportError("distance column type".into()))?;
        assert_eq!(distances.value(0), 0.0);
        assert!(distances.is_null(1));
        Ok(())
    }

    #[test]
    fn test_empty_record_batch() -> Result<(), PlzError> {
        let batch = Vec::<LocationRecord>::new().to_record_batch()?;
        assert_eq!(batch.num_rows(), 0);
        Ok(())
    }
}
