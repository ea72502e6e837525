//! Parser for individual finite-fault time-series files.
//!
//! Each file is a whitespace-delimited text table. The first column is
//! time in seconds, the second is displacement; any further columns are
//! ignored. Blank lines and `#` comment lines are skipped. The station
//! identifier is the filename segment before the first `.`.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::WaveError;

/// One parsed time-series file: the station it belongs to plus parallel
/// time/displacement columns of equal length.
#[derive(Debug, Clone, PartialEq)]
pub struct Waveform {
    pub station: String,
    pub time: Vec<f64>,
    pub displacement: Vec<f64>,
}

/// Reads a two-column waveform file.
///
/// # Errors
///
/// Returns [`WaveError::Io`] if the file cannot be opened or read, and
/// [`WaveError::Parse`] if the station identifier cannot be derived from
/// the filename or a non-skippable line does not hold two numeric
/// columns.
pub fn read_waveform(path: &Path) -> Result<Waveform, WaveError> {
    let station = station_from_path(path)?;

    let file = File::open(path).map_err(|source| WaveError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    let mut time = Vec::new();
    let mut displacement = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| WaveError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let mut columns = trimmed.split_whitespace();
        let (Some(t), Some(d)) = (columns.next(), columns.next()) else {
            return Err(parse_error(path, idx, "expected two columns"));
        };
        time.push(parse_value(t, path, idx)?);
        displacement.push(parse_value(d, path, idx)?);
    }

    debug!(station = %station, samples = time.len(), path = %path.display(), "Waveform parsed");

    Ok(Waveform {
        station,
        time,
        displacement,
    })
}

/// Extracts the station identifier from a path: the filename segment
/// before the first `.`.
pub fn station_from_path(path: &Path) -> Result<String, WaveError> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| parse_error(path, 0, "path has no filename"))?;
    let station = name.split('.').next().unwrap_or("");
    if station.is_empty() {
        return Err(parse_error(path, 0, "filename has no station segment"));
    }
    Ok(station.to_string())
}

fn parse_value(token: &str, path: &Path, idx: usize) -> Result<f64, WaveError> {
    token
        .parse::<f64>()
        .map_err(|_| parse_error(path, idx, &format!("invalid numeric value '{}'", token)))
}

fn parse_error(path: &Path, idx: usize, reason: &str) -> WaveError {
    WaveError::Parse {
        path: path.to_path_buf(),
        line: idx + 1,
        reason: reason.to_string(),
    }
}
