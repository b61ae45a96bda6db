use crate::{
    error::Atl06Error,
    extent::Extent,
    record::{Beam, Measurement},
};
use log::debug;
use serde::{Deserialize, Serialize};

/// A table of ATL06 measurements sharing a common column set.
///
/// Nothing here mutates a set in place; filters hand back a new one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackSet {
    pub records: Vec<Measurement>,
}

impl TrackSet {
    pub fn new(records: Vec<Measurement>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Measurement> {
        self.records.iter()
    }

    /// Keeps only points whose quality summary marks them high quality.
    pub fn high_quality(&self) -> Self {
        let records: Vec<Measurement> = self
            .records
            .iter()
            .filter(|m| m.is_high_quality())
            .cloned()
            .collect();
        debug!(
            "quality filter kept {} of {} points",
            records.len(),
            self.records.len()
        );
        Self { records }
    }

    /// Distinct reference ground tracks, in the order they first appear.
    pub fn rgts(&self) -> Vec<u16> {
        let mut rgts: Vec<u16> = Vec::new();
        for m in &self.records {
            if !rgts.contains(&m.rgt) {
                rgts.push(m.rgt);
            }
        }
        rgts
    }

    /// Points belonging to track `rgt`.
    pub fn track(&self, rgt: u16) -> impl Iterator<Item = &Measurement> {
        self.records.iter().filter(move |m| m.rgt == rgt)
    }

    /// Points belonging to one beam of track `rgt`.
    pub fn beam(&self, rgt: u16, beam: Beam) -> impl Iterator<Item = &Measurement> {
        self.records
            .iter()
            .filter(move |m| m.rgt == rgt && m.beam == beam)
    }

    /// Lon/lat envelope of the whole set.
    pub fn extent(&self) -> Option<Extent> {
        Extent::of(&self.records)
    }

    /// Points strictly inside the `lons`/`lats` box.
    ///
    /// Points sitting exactly on a box edge are left out, and an
    /// inverted range selects nothing.
    pub fn select(&self, lons: [f64; 2], lats: [f64; 2]) -> Self {
        let bbox = Extent {
            lon: lons,
            lat: lats,
        };
        let records: Vec<Measurement> = self
            .records
            .iter()
            .filter(|m| bbox.contains_strict(m.coord()))
            .cloned()
            .collect();
        debug!(
            "selected {} of {} points in lons {lons:?} lats {lats:?}",
            records.len(),
            self.records.len()
        );
        Self { records }
    }

    /// Extracts the named column for every point.
    pub fn attribute_values(&self, name: &str) -> Result<Vec<f64>, Atl06Error> {
        self.records
            .iter()
            .map(|m| {
                m.attribute(name)
                    .ok_or_else(|| Atl06Error::MissingAttribute(name.to_string()))
            })
            .collect()
    }
}

impl FromIterator<Measurement> for TrackSet {
    fn from_iter<I: IntoIterator<Item = Measurement>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
