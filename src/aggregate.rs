//! Core aggregation: folds the discovered file lists into a single
//! station-keyed [`WaveDocument`].
//!
//! Phases are processed in the fixed order S, P, Z, T, and within a phase
//! data files are processed in discovery order. A station is inserted into
//! the document the first time any of its files is seen, so output key
//! order is first-encounter order under that scan.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::discover::{WaveFileSet, discover};
use crate::error::WaveError;
use crate::model::{Phase, PhaseEntry, StationMetadata, StationRecord, WaveDocument};
use crate::reader::read_waveform;

/// Discovers and aggregates a finite-fault directory in one call.
///
/// # Errors
///
/// Propagates [`WaveError::DirectoryNotFound`] for a missing directory
/// and [`WaveError::Parse`]/[`WaveError::Io`] from the first file that
/// fails to parse; no partial document is returned.
pub fn aggregate_directory(input_dir: &Path) -> Result<WaveDocument, WaveError> {
    let files = discover(input_dir)?;
    aggregate(&files)
}

/// Builds the station document from already-discovered file lists.
pub fn aggregate(files: &WaveFileSet) -> Result<WaveDocument, WaveError> {
    let mut document = WaveDocument::new();

    for phase in Phase::SCAN_ORDER {
        let lists = files.phase(phase);
        for data_path in &lists.data {
            add_entry(&mut document, phase, data_path, &lists.synthetic)?;
        }
        debug!(phase = %phase, files = lists.data.len(), "Phase aggregated");
    }

    Ok(document)
}

/// Parses one data file, pairs it with its synthetic counterpart if one
/// was discovered, and appends the resulting entry to its station.
fn add_entry(
    document: &mut WaveDocument,
    phase: Phase,
    data_path: &Path,
    synthetic_paths: &[PathBuf],
) -> Result<(), WaveError> {
    let wave = read_waveform(data_path)?;

    let mut entry = PhaseEntry {
        id: format!("{}_{}", wave.station, phase.letter()),
        component: phase.letter().to_string(),
        waveform_type: phase.waveform_type().to_string(),
        time: wave.time,
        displacement: round_series(&wave.displacement),
        synthetic_time: None,
        synthetic_displacement: None,
    };

    if let Some(syn_path) = synthetic_counterpart(data_path, synthetic_paths) {
        let synthetic = read_waveform(syn_path)?;
        let rounded = round_series(&synthetic.displacement);
        // Both synthetic series carry the displacement column.
        entry.synthetic_time = Some(rounded.clone());
        entry.synthetic_displacement = Some(rounded);
    }

    let record = document
        .entry(wave.station.clone())
        .or_insert_with(|| StationRecord {
            metadata: StationMetadata::for_station(&wave.station),
            data: Vec::new(),
        });
    record.data.push(entry);

    Ok(())
}

/// Returns the synthetic path paired with `data_path`, if present.
///
/// The candidate is the data path with its `.dat` suffix replaced by
/// `.syn`; it must match an entry in `synthetic_paths` exactly. No fuzzy
/// matching.
fn synthetic_counterpart<'a>(
    data_path: &Path,
    synthetic_paths: &'a [PathBuf],
) -> Option<&'a PathBuf> {
    let data_str = data_path.to_str()?;
    let candidate = format!("{}.syn", data_str.strip_suffix(".dat")?);
    synthetic_paths
        .iter()
        .find(|p| p.to_str() == Some(candidate.as_str()))
}

/// Rounds every value to 6 decimal places.
fn round_series(values: &[f64]) -> Vec<f64> {
    values.iter().map(|v| round6(*v)).collect()
}

fn round6(value: f64) -> f64 {
    (value * 1e6).round() / 1e6
}
