//! Markdown exoplanet table → records.
//!
//! Input looks like:
//!
//! ```text
//! | Name | RA | Dec | Distance | gMagnitude |
//! |------|----|-----|----------|------------|
//! | Kepler-22b | 284.6 | 47.9 | 620 | 11.7 |
//! ```
//!
//! The first line is always treated as the header. Rows that do not split into
//! exactly five non-empty cells are dropped; numbers that fail to parse become
//! NaN and are caught later by [`Exoplanet::validate`].

use log::trace;
use serde::Serialize;
use thiserror::Error;

/// Cells in a well-formed row: name + four numbers.
const ROW_CELLS: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Exoplanet {
    pub name: String,
    pub right_ascension: f64,
    pub declination: f64,
    pub distance_light_years: f64,
    pub g_magnitude: f64,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("{name}: {field} is not a finite number")]
    NonFinite { name: String, field: &'static str },
}

impl Exoplanet {
    /// First non-finite numeric field, if any.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let fields = [
            ("right_ascension", self.right_ascension),
            ("declination", self.declination),
            ("distance_light_years", self.distance_light_years),
            ("g_magnitude", self.g_magnitude),
        ];
        match fields.iter().find(|(_, value)| !value.is_finite()) {
            Some(&(field, _)) => Err(CatalogError::NonFinite { name: self.name.clone(), field }),
            None => Ok(()),
        }
    }
}

/// Lazily parse table rows. Single pass; the header line is skipped.
pub fn parse_table(text: &str) -> impl Iterator<Item = Exoplanet> + '_ {
    text.lines().skip(1).filter_map(parse_row)
}

/// Collect every parsed row, in file order.
pub fn parse_catalog(text: &str) -> Vec<Exoplanet> {
    parse_table(text).collect()
}

fn parse_row(line: &str) -> Option<Exoplanet> {
    let line = line.trim();
    if !line.starts_with('|') {
        return None;
    }

    let cells: Vec<&str> = line.split('|').map(str::trim).filter(|c| !c.is_empty()).collect();
    let &[name, ra, dec, distance, g_mag] = cells.as_slice() else {
        trace!("dropping row with {} cells (want {}): {}", cells.len(), ROW_CELLS, line);
        return None;
    };

    Some(Exoplanet {
        name: name.to_string(),
        right_ascension: number(ra),
        declination: number(dec),
        distance_light_years: number(distance),
        g_magnitude: number(g_mag),
    })
}

fn number(cell: &str) -> f64 {
    cell.parse().unwrap_or(f64::NAN)
}
