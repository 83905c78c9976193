use crate::api::location::LocationRecord;
use crate::io::arrow::LocationsToArrow;
use crate::util::error::PlzError;
use arrow_array::RecordBatch;
use parquet::arrow::ArrowWriter;
use std::fs::File;
use std::path::Path;

pub fn write_parquet(batch: &RecordBatch, path: impl AsRef<Path>) -> Result<(), PlzError> {
    let file = File::create(path).map_err(|e| PlzError::IoError(e.to_string()))?;
    let mut writer = ArrowWriter::try_new(file, batch.schema(), None)
        .map_err(|e| PlzError::ExportError(e.to_string()))?;

    writer
        .write(batch)
        .map_err(|e| PlzError::ExportError(e.to_string()))?;
    writer
        .close()
        .map_err(|e| PlzError::ExportError(e.to_string()))?;

    Ok(())
}

pub trait LocationsToParquet: LocationsToArrow {
    fn to_parquet(&self, path: impl AsRef<Path>) -> Result<(), PlzError>;
}

impl LocationsToParquet for [LocationRecord] {
    fn to_parquet(&self, path: impl AsRef<Path>) -> Result<(), PlzError> {
        let batch = self.to_record_batch()?;
        write_parquet(&batch, path)
    }
}

impl LocationsToParquet for Vec<LocationRecord> {
    fn to_parquet(&self, path: impl AsRef<Path>) -> Result<(), PlzError> {
        self.as_slice().to_parquet(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parquet::file::reader::{FileReader, SerializedFileReader};
    use tempfile::tempdir;

    #[test]
    fn test_locations_to_parquet() -> Result<(), PlzError> {
        let records = vec![
            LocationRecord::new("10115", 52.5323, 13.3846).with_distance(0.0),
            LocationRecord::new("10117", 52.517, 13.3872).with_distance(1.7),
        ];

        let dir = tempdir().map_err(|e| PlzError::IoError(e.to_string()))?;
        let path = dir.path().join("matches.parquet");

        records.to_parquet(&path)?;

        let file = File::open(&path).map_err(|e| PlzError::IoError(e.to_string()))?;
        let reader =
            SerializedFileReader::new(file).map_err(|e| PlzError::ExportError(e.to_string()))?;
        assert_eq!(reader.metadata().file_metadata().num_rows(), 2);
        Ok(())
    }
}
