use std::collections::HashSet;
use std::path::Path;

use crate::directory::Directory;
use crate::errors::DataError;
use crate::types::{Cottage, MiscMarker};

/// Reads the cottage list from a CSV seed file.
///
/// Expected header: `number,name,lat,lng,icon`. Cottage numbers must be
/// unique; the directory is the authoritative keyed collection afterwards.
pub fn load_cottages(path: &Path) -> Result<Directory, DataError> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut cottages: Vec<Cottage> = Vec::new();
    let mut seen: HashSet<u32> = HashSet::new();

    for record in reader.deserialize() {
        let cottage: Cottage = record?;
        if !seen.insert(cottage.number) {
            return Err(DataError::DuplicateNumber(cottage.number));
        }
        cottages.push(cottage);
    }

    Ok(Directory::new(cottages))
}

/// Reads the static points of interest from a CSV seed file.
///
/// Expected header: `name,lat,lng,icon`.
pub fn load_misc_markers(path: &Path) -> Result<Vec<MiscMarker>, DataError> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut markers: Vec<MiscMarker> = Vec::new();

    for record in reader.deserialize() {
        markers.push(record?);
    }

    Ok(markers)
}
