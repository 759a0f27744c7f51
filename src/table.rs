//! Precomputed aspect table: the fixed variant catalog and its loader.
//!
//! The dataset is a delimiter-separated grid generated outside this crate:
//! one row per arc-minute position, one column per aspect variant, cells
//! holding `<symbol> <deg>°<min>′` target positions or blanks. The table is
//! loaded once into an immutable value and shared by reference from then on.

use log::{debug, info};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::{codec, AspectError, Position, CIRCLE_MINUTES};

// ---------------------------
// ## Aspect Catalog
// ---------------------------

/// One lookup column of the table.
///
/// Aspects that can form in two angular directions have a `1` and a `2`
/// column; both resolve to the same canonical name in results.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AspectVariant {
    pub column: &'static str,
    pub canonical: &'static str,
    pub orb_minutes: u32,
}

const fn variant(column: &'static str, canonical: &'static str, orb_minutes: u32) -> AspectVariant {
    AspectVariant {
        column,
        canonical,
        orb_minutes,
    }
}

pub const CONJUNCTION: &str = "Conjunction";
pub const CONJUNCTION_ORB_MINUTES: u32 = 480;

/// Every lookup column, in matching order. The matcher iterates this catalog
/// front to back, so this order decides which variant is reported when both
/// directions of an aspect fall within orb.
pub const ASPECT_VARIANTS: [AspectVariant; 43] = [
    variant("Opposition", "Opposition", 480),
    variant("Trine1", "Trine", 360),
    variant("Trine2", "Trine", 360),
    variant("Square1", "Square", 360),
    variant("Square2", "Square", 360),
    variant("Quintile1", "Quintile", 120),
    variant("Quintile2", "Quintile", 120),
    variant("Bi-quintile1", "Bi-quintile", 120),
    variant("Bi-quintile2", "Bi-quintile", 120),
    variant("Sextile1", "Sextile", 240),
    variant("Sextile2", "Sextile", 240),
    variant("Septile1", "Septile", 60),
    variant("Septile2", "Septile", 60),
    variant("Bi-septile1", "Bi-septile", 60),
    variant("Bi-septile2", "Bi-septile", 60),
    variant("Tri-septile1", "Tri-septile", 60),
    variant("Tri-septile2", "Tri-septile", 60),
    variant("Octile1", "Octile", 180),
    variant("Octile2", "Octile", 180),
    variant("Sesquiquadrate1", "Sesquiquadrate", 180),
    variant("Sesquiquadrate2", "Sesquiquadrate", 180),
    variant("Novile1", "Novile", 60),
    variant("Novile2", "Novile", 60),
    variant("Bi-novile1", "Bi-novile", 60),
    variant("Bi-novile2", "Bi-novile", 60),
    variant("Decile1", "Decile", 90),
    variant("Decile2", "Decile", 90),
    variant("Tri-decile1", "Tri-decile", 90),
    variant("Tri-decile2", "Tri-decile", 90),
    variant("Undecile1", "Undecile", 30),
    variant("Undecile2", "Undecile", 30),
    variant("Bi-undecile1", "Bi-undecile", 30),
    variant("Bi-undecile2", "Bi-undecile", 30),
    variant("Tri-undecile1", "Tri-undecile", 30),
    variant("Tri-undecile2", "Tri-undecile", 30),
    variant("Quad-undecile1", "Quad-undecile", 30),
    variant("Quad-undecile2", "Quad-undecile", 30),
    variant("Quin-undecile1", "Quin-undecile", 30),
    variant("Quin-undecile2", "Quin-undecile", 30),
    variant("Semi-sextile1", "Semi-sextile", 120),
    variant("Semi-sextile2", "Semi-sextile", 120),
    variant("Quincunx1", "Quincunx", 180),
    variant("Quincunx2", "Quincunx", 180),
];

// ---------------------------
// ## AspectTable
// ---------------------------

/// The loaded table: for each catalog variant, the target position (if any)
/// at every arc-minute index. A variant whose column is missing from the
/// dataset behaves as absent everywhere.
pub struct AspectTable {
    columns: Vec<Option<Vec<Option<Position>>>>,
}

impl AspectTable {
    /// Loads the dataset from disk. Any structural problem is fatal: the
    /// system has no meaningful degraded mode without this table.
    pub fn load(path: &Path) -> Result<Self, AspectError> {
        let file = File::open(path).map_err(|e| {
            AspectError::DatasetLoadFailure(format!("cannot open {}: {}", path.display(), e))
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parses the dataset from any buffered reader.
    ///
    /// The header must contain exactly one `position` column keying each
    /// row; header columns the catalog does not know are ignored. Cells
    /// that fail to parse are kept as "no target", not rejected.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, AspectError> {
        let mut lines = reader.lines();
        let header = match lines.next() {
            Some(line) => {
                line.map_err(|e| AspectError::DatasetLoadFailure(format!("read error: {}", e)))?
            }
            None => {
                return Err(AspectError::DatasetLoadFailure(
                    "dataset is empty".to_string(),
                ))
            }
        };

        let names: Vec<&str> = header.split(',').map(str::trim).collect();
        let position_columns: Vec<usize> = names
            .iter()
            .enumerate()
            .filter(|(_, name)| name.eq_ignore_ascii_case("position"))
            .map(|(i, _)| i)
            .collect();
        let key_column = match position_columns.as_slice() {
            [index] => *index,
            [] => {
                return Err(AspectError::DatasetLoadFailure(
                    "header has no position column".to_string(),
                ))
            }
            _ => {
                return Err(AspectError::DatasetLoadFailure(
                    "header has more than one position column".to_string(),
                ))
            }
        };

        let cell_indices: Vec<Option<usize>> = ASPECT_VARIANTS
            .iter()
            .map(|v| names.iter().position(|name| *name == v.column))
            .collect();
        let mut columns: Vec<Option<Vec<Option<Position>>>> = cell_indices
            .iter()
            .map(|index| index.map(|_| vec![None; CIRCLE_MINUTES as usize]))
            .collect();

        let mut seen = vec![false; CIRCLE_MINUTES as usize];
        let mut row_count: usize = 0;
        for line in lines {
            let line =
                line.map_err(|e| AspectError::DatasetLoadFailure(format!("read error: {}", e)))?;
            if line.trim().is_empty() {
                continue;
            }
            let cells: Vec<&str> = line.split(',').collect();
            let key_cell = cells.get(key_column).map(|c| c.trim()).unwrap_or("");
            let key: u32 = key_cell.parse().map_err(|_| {
                AspectError::DatasetLoadFailure(format!("unparseable position key {:?}", key_cell))
            })?;
            if key >= CIRCLE_MINUTES {
                return Err(AspectError::DatasetLoadFailure(format!(
                    "position key {} out of range 0..{}",
                    key, CIRCLE_MINUTES
                )));
            }
            if seen[key as usize] {
                return Err(AspectError::DatasetLoadFailure(format!(
                    "duplicate position key {}",
                    key
                )));
            }
            seen[key as usize] = true;
            for (targets, cell_index) in columns.iter_mut().zip(&cell_indices) {
                if let (Some(targets), Some(cell_index)) = (targets, cell_index) {
                    let cell = cells.get(*cell_index).copied().unwrap_or("");
                    targets[key as usize] = codec::parse_position(cell);
                }
            }
            row_count += 1;
        }

        let present = columns.iter().filter(|c| c.is_some()).count();
        debug!(
            "aspect table: {} of {} catalog columns present in dataset",
            present,
            ASPECT_VARIANTS.len()
        );
        info!("aspect table loaded: {} rows", row_count);
        Ok(AspectTable { columns })
    }

    /// Looks up the target position forming `column` from `position`.
    /// Absent cells, unknown columns and unpopulated rows all return `None`.
    pub fn lookup(&self, position: Position, column: &str) -> Option<Position> {
        let index = ASPECT_VARIANTS.iter().position(|v| v.column == column)?;
        self.target(position, index)
    }

    pub(crate) fn target(&self, position: Position, variant_index: usize) -> Option<Position> {
        self.columns
            .get(variant_index)?
            .as_ref()?
            .get(position as usize)
            .copied()
            .flatten()
    }
}
