use crate::record::Measurement;
use geo::geometry::Coord;
use serde::{Deserialize, Serialize};

/// Lon/lat envelope of a set of measurements, `[min, max]` per axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub lon: [f64; 2],
    pub lat: [f64; 2],
}

impl Extent {
    /// Returns the envelope of `records`, or `None` when there are none.
    pub fn of<'a, I>(records: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Measurement>,
    {
        let mut records = records.into_iter();
        let first = records.next()?;
        let mut extent = Self {
            lon: [first.longitude; 2],
            lat: [first.latitude; 2],
        };
        for m in records {
            extent.lon[0] = extent.lon[0].min(m.longitude);
            extent.lon[1] = extent.lon[1].max(m.longitude);
            extent.lat[0] = extent.lat[0].min(m.latitude);
            extent.lat[1] = extent.lat[1].max(m.latitude);
        }
        Some(extent)
    }

    /// True when `coord` lies strictly inside the envelope. Points on
    /// an edge never count, and an inverted envelope contains nothing.
    pub fn contains_strict(&self, coord: Coord<f64>) -> bool {
        self.lon[0] < coord.x
            && coord.x < self.lon[1]
            && self.lat[0] < coord.y
            && coord.y < self.lat[1]
    }
}

#[cfg(test)]
mod tests {
    use super::{Coord, Extent};
    use crate::record::{Beam, Measurement};
    use assert_approx_eq::assert_approx_eq;
    use chrono::{TimeZone, Utc};
    use std::collections::BTreeMap;

    fn point(lon: f64, lat: f64) -> Measurement {
        Measurement {
            longitude: lon,
            latitude: lat,
            h_li: 0.0,
            rgt: 1,
            beam: Beam::Gt1l,
            date: Utc.with_ymd_and_hms(2019, 3, 1, 0, 0, 0).unwrap(),
            quality_summary: 0,
            extra: BTreeMap::new(),
        }
    }

    #[test]
    fn test_envelope() {
        let records = [point(10.0, 52.0), point(12.0, 50.0), point(11.0, 51.0)];
        let extent = Extent::of(&records).unwrap();
        assert_approx_eq!(extent.lon[0], 10.0);
        assert_approx_eq!(extent.lon[1], 12.0);
        assert_approx_eq!(extent.lat[0], 50.0);
        assert_approx_eq!(extent.lat[1], 52.0);

        assert_eq!(Extent::of(&[]), None);
    }

    #[test]
    fn test_strict_containment() {
        let extent = Extent {
            lon: [10.0, 12.0],
            lat: [50.0, 52.0],
        };
        assert!(extent.contains_strict(Coord { x: 11.0, y: 51.0 }));
        // Edges are out.
        assert!(!extent.contains_strict(Coord { x: 10.0, y: 51.0 }));
        assert!(!extent.contains_strict(Coord { x: 11.0, y: 52.0 }));
        // So is everything else.
        assert!(!extent.contains_strict(Coord { x: 9.0, y: 51.0 }));
    }

    #[test]
    fn test_inverted_envelope_is_empty() {
        let extent = Extent {
            lon: [12.0, 10.0],
            lat: [50.0, 52.0],
        };
        assert!(!extent.contains_strict(Coord { x: 11.0, y: 51.0 }));
    }
}
