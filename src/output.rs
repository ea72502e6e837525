//! Output formatting and persistence for the aggregated wave document.
//!
//! Supports pretty-printing and JSON serialization to disk with the
//! document's key order preserved.

use anyhow::Result;
use tracing::{debug, info};

use crate::model::WaveDocument;
use std::fs;
use std::path::Path;

/// Logs the document using Rust's debug pretty-print format.
pub fn print_pretty(document: &WaveDocument) {
    debug!("{:#?}", document);
}

/// Logs the document as pretty-printed JSON.
pub fn print_json(document: &WaveDocument) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(document)?);
    Ok(())
}

/// Writes the document as indented JSON to `path`, preserving key order.
pub fn write_json(path: &Path, document: &WaveDocument) -> Result<()> {
    let json = serde_json::to_string_pretty(document)?;
    fs::write(path, json)?;
    debug!(path = %path.display(), stations = document.len(), "JSON document written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{StationMetadata, StationRecord};
    use std::env;
    use std::path::PathBuf;

    fn sample_document() -> WaveDocument {
        let mut doc = WaveDocument::new();
        doc.insert(
            "ABC".to_string(),
            StationRecord {
                metadata: StationMetadata::for_station("ABC"),
                data: vec![],
            },
        );
        doc
    }

    fn temp_path(name: &str) -> PathBuf {
        env::temp_dir().join(name)
    }

    #[test]
    fn test_print_pretty_does_not_panic() {
        print_pretty(&sample_document());
    }

    #[test]
    fn test_print_json_does_not_panic() {
        print_json(&sample_document()).unwrap();
    }

    #[test]
    fn test_write_json_creates_file() {
        let path = temp_path("wave_aggregator_test_write.json");
        let _ = fs::remove_file(&path); // clean up any prior run

        write_json(&path, &sample_document()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"ABC\""));
        assert!(content.contains("\"metadata\""));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_write_json_round_trips() {
        let path = temp_path("wave_aggregator_test_roundtrip.json");
        let _ = fs::remove_file(&path);

        let doc = sample_document();
        write_json(&path, &doc).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let parsed: WaveDocument = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, doc);

        fs::remove_file(&path).unwrap();
    }
}
