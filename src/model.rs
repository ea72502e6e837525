//! Core data types for the finite-fault wave document.
//!
//! This module defines the shared domain model imported by all other
//! modules: the four wave phases, per-station metadata, and the nested
//! station document that gets serialized to JSON. Key order in the JSON
//! output is part of the contract, so the station map is an
//! insertion-order-preserving [`IndexMap`] and struct fields are declared
//! in their serialization order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Unit label for all time columns.
pub const TIME_UNITS: &str = "seconds";

/// Unit label for all displacement columns.
pub const DISPLACEMENT_UNITS: &str = "micrometers";

/// Metadata comment describing the applied rounding.
pub const ROUNDING_COMMENT: &str = "Rounded to 6 decimal places.";

/// One of the four seismic wave phases present in a finite-fault
/// directory, identified in filenames by its component letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    S,
    P,
    Z,
    T,
}

impl Phase {
    /// Phases in the fixed order they are scanned during aggregation.
    /// Station key order in the output document follows this order.
    pub const SCAN_ORDER: [Phase; 4] = [Phase::S, Phase::P, Phase::Z, Phase::T];

    /// Upper-case component letter as it appears in filenames and in the
    /// `component` field of the output.
    pub fn letter(self) -> &'static str {
        match self {
            Phase::S => "S",
            Phase::P => "P",
            Phase::Z => "Z",
            Phase::T => "T",
        }
    }

    /// Filename suffix of observed data files for this phase.
    pub fn data_suffix(self) -> &'static str {
        match self {
            Phase::S => ".S.dat",
            Phase::P => ".P.dat",
            Phase::Z => ".Z.swave.dat",
            Phase::T => ".T.swave.dat",
        }
    }

    /// Filename suffix of synthetic waveform files for this phase.
    pub fn synthetic_suffix(self) -> &'static str {
        match self {
            Phase::S => ".S.syn",
            Phase::P => ".P.syn",
            Phase::Z => ".Z.swave.syn",
            Phase::T => ".T.swave.syn",
        }
    }

    /// Human-readable waveform classification for this phase.
    pub fn waveform_type(self) -> &'static str {
        match self {
            Phase::S | Phase::P => "teleseismic broadband body wave",
            Phase::Z | Phase::T => "long period surface wave",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.letter())
    }
}

/// Station-level metadata emitted once per station.
///
/// Only the fields actually populated by the pipeline are modeled here;
/// network/channel/location identifiers are not part of the produced
/// document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct StationMetadata {
    pub station: String,
    pub time_units: String,
    pub displacement_units: String,
    pub comments: String,
}

impl StationMetadata {
    pub fn for_station(station: &str) -> Self {
        StationMetadata {
            station: station.to_string(),
            time_units: TIME_UNITS.to_string(),
            displacement_units: DISPLACEMENT_UNITS.to_string(),
            comments: ROUNDING_COMMENT.to_string(),
        }
    }
}

/// One wave-phase recording for a station: the observed time/displacement
/// series plus the synthetic counterpart when one was found on disk.
///
/// Field declaration order is the JSON key order consumers rely on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PhaseEntry {
    pub id: String,
    pub component: String,
    pub waveform_type: String,
    pub time: Vec<f64>,
    pub displacement: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synthetic_time: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synthetic_displacement: Option<Vec<f64>>,
}

/// All output for a single station: metadata first, then the phase
/// entries in the order they were encountered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationRecord {
    pub metadata: StationMetadata,
    pub data: Vec<PhaseEntry>,
}

/// The aggregated document, keyed by station identifier in
/// first-encounter order.
pub type WaveDocument = IndexMap<String, StationRecord>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_order_is_s_p_z_t() {
        let letters: Vec<_> = Phase::SCAN_ORDER.iter().map(|p| p.letter()).collect();
        assert_eq!(letters, vec!["S", "P", "Z", "T"]);
    }

    #[test]
    fn test_body_wave_phases() {
        assert_eq!(Phase::S.waveform_type(), "teleseismic broadband body wave");
        assert_eq!(Phase::P.waveform_type(), "teleseismic broadband body wave");
    }

    #[test]
    fn test_surface_wave_phases() {
        assert_eq!(Phase::Z.waveform_type(), "long period surface wave");
        assert_eq!(Phase::T.waveform_type(), "long period surface wave");
    }

    #[test]
    fn test_suffixes_pair_data_with_syn() {
        for phase in Phase::SCAN_ORDER {
            let data = phase.data_suffix();
            let syn = phase.synthetic_suffix();
            assert!(data.ends_with(".dat"));
            assert!(syn.ends_with(".syn"));
            assert_eq!(data.trim_end_matches(".dat"), syn.trim_end_matches(".syn"));
        }
    }

    #[test]
    fn test_metadata_fields() {
        let meta = StationMetadata::for_station("ABC");
        assert_eq!(meta.station, "ABC");
        assert_eq!(meta.time_units, "seconds");
        assert_eq!(meta.displacement_units, "micrometers");
        assert_eq!(meta.comments, "Rounded to 6 decimal places.");
    }

    #[test]
    fn test_metadata_serializes_with_kebab_case_keys() {
        let meta = StationMetadata::for_station("ABC");
        let json = serde_json::to_string(&meta).unwrap();
        assert!(json.contains("\"time-units\":\"seconds\""));
        assert!(json.contains("\"displacement-units\":\"micrometers\""));
    }

    #[test]
    fn test_phase_entry_key_order_and_optional_fields() {
        let entry = PhaseEntry {
            id: "ABC_S".to_string(),
            component: "S".to_string(),
            waveform_type: Phase::S.waveform_type().to_string(),
            time: vec![0.0, 1.0],
            displacement: vec![1.5, 2.5],
            synthetic_time: None,
            synthetic_displacement: None,
        };
        let json = serde_json::to_string(&entry).unwrap();

        // Absent synthetic series must not appear at all
        assert!(!json.contains("synthetic"));

        let id_pos = json.find("\"id\"").unwrap();
        let component_pos = json.find("\"component\"").unwrap();
        let type_pos = json.find("\"waveform-type\"").unwrap();
        let time_pos = json.find("\"time\"").unwrap();
        let disp_pos = json.find("\"displacement\"").unwrap();
        assert!(id_pos < component_pos);
        assert!(component_pos < type_pos);
        assert!(type_pos < time_pos);
        assert!(time_pos < disp_pos);
    }

    #[test]
    fn test_document_preserves_station_insertion_order() {
        let mut doc = WaveDocument::new();
        for station in ["ZZZ", "AAA", "MMM"] {
            doc.insert(
                station.to_string(),
                StationRecord {
                    metadata: StationMetadata::for_station(station),
                    data: vec![],
                },
            );
        }
        let keys: Vec<_> = doc.keys().cloned().collect();
        assert_eq!(keys, vec!["ZZZ", "AAA", "MMM"]);

        let json = serde_json::to_string(&doc).unwrap();
        let zzz = json.find("\"ZZZ\"").unwrap();
        let aaa = json.find("\"AAA\"").unwrap();
        let mmm = json.find("\"MMM\"").unwrap();
        assert!(zzz < aaa && aaa < mmm);
    }
}
