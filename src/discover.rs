//! File discovery for a finite-fault directory.
//!
//! Produces eight path lists — one per (phase, data|synthetic)
//! combination — by matching fixed filename suffixes. Matching never
//! recurses into subdirectories, and an empty list is not an error.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::WaveError;
use crate::model::Phase;

/// Observed-data and synthetic file paths discovered for one phase.
#[derive(Debug, Default, Clone)]
pub struct PhaseFiles {
    pub data: Vec<PathBuf>,
    pub synthetic: Vec<PathBuf>,
}

/// The full discovery result: one [`PhaseFiles`] per phase.
#[derive(Debug, Default, Clone)]
pub struct WaveFileSet {
    s: PhaseFiles,
    p: PhaseFiles,
    z: PhaseFiles,
    t: PhaseFiles,
}

impl WaveFileSet {
    pub fn phase(&self, phase: Phase) -> &PhaseFiles {
        match phase {
            Phase::S => &self.s,
            Phase::P => &self.p,
            Phase::Z => &self.z,
            Phase::T => &self.t,
        }
    }

    fn phase_mut(&mut self, phase: Phase) -> &mut PhaseFiles {
        match phase {
            Phase::S => &mut self.s,
            Phase::P => &mut self.p,
            Phase::Z => &mut self.z,
            Phase::T => &mut self.t,
        }
    }

    /// Total number of observed data files across all phases.
    pub fn data_file_count(&self) -> usize {
        Phase::SCAN_ORDER
            .iter()
            .map(|&phase| self.phase(phase).data.len())
            .sum()
    }
}

/// Scans `input_dir` for finite-fault time-series files.
///
/// Directory entries are matched purely by filename suffix against the
/// per-phase patterns of [`Phase::data_suffix`] and
/// [`Phase::synthetic_suffix`]. Each list is sorted by path so discovery
/// order is deterministic regardless of the platform's readdir order.
///
/// # Errors
///
/// Returns [`WaveError::DirectoryNotFound`] if `input_dir` does not exist,
/// or [`WaveError::Io`] if the directory cannot be listed.
pub fn discover(input_dir: &Path) -> Result<WaveFileSet, WaveError> {
    if !input_dir.exists() {
        return Err(WaveError::DirectoryNotFound(input_dir.to_path_buf()));
    }

    let entries = fs::read_dir(input_dir).map_err(|source| WaveError::Io {
        path: input_dir.to_path_buf(),
        source,
    })?;

    let mut files = WaveFileSet::default();

    for entry in entries {
        let entry = entry.map_err(|source| WaveError::Io {
            path: input_dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_dir() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };

        for phase in Phase::SCAN_ORDER {
            if name.ends_with(phase.data_suffix()) {
                files.phase_mut(phase).data.push(path.clone());
            } else if name.ends_with(phase.synthetic_suffix()) {
                files.phase_mut(phase).synthetic.push(path.clone());
            }
        }
    }

    for phase in Phase::SCAN_ORDER {
        let lists = files.phase_mut(phase);
        lists.data.sort();
        lists.synthetic.sort();
        debug!(
            phase = %phase,
            data_files = lists.data.len(),
            synthetic_files = lists.synthetic.len(),
            "Phase discovery complete"
        );
    }

    Ok(files)
}
