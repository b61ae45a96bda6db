use chrono::{DateTime, Utc};
use geo::geometry::Coord;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt};

/// One ATL06 land-ice height measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Longitude, degrees east.
    pub longitude: f64,

    /// Latitude, degrees north.
    pub latitude: f64,

    /// Land-ice elevation estimate, meters.
    pub h_li: f64,

    /// Reference ground track number.
    #[serde(rename = "RGT")]
    pub rgt: u16,

    /// Laser beam which produced this point.
    #[serde(rename = "p_b")]
    pub beam: Beam,

    /// Acquisition time.
    pub date: DateTime<Utc>,

    /// 0 marks high-quality data; anything else is suspect.
    #[serde(rename = "atl06_quality_summary")]
    pub quality_summary: u8,

    /// Any additional numeric columns carried by the source table.
    #[serde(flatten)]
    pub extra: BTreeMap<String, f64>,
}

impl Measurement {
    /// Position as a lon/lat coordinate.
    pub fn coord(&self) -> Coord<f64> {
        Coord {
            x: self.longitude,
            y: self.latitude,
        }
    }

    pub fn is_high_quality(&self) -> bool {
        self.quality_summary == 0
    }

    /// Looks up a column by name: the typed columns first, then the
    /// `extra` map.
    pub fn attribute(&self, name: &str) -> Option<f64> {
        match name {
            "longitude" => Some(self.longitude),
            "latitude" => Some(self.latitude),
            "h_li" => Some(self.h_li),
            "atl06_quality_summary" => Some(f64::from(self.quality_summary)),
            _ => self.extra.get(name).copied(),
        }
    }
}

/// One of the six ATL06 laser beams (3 pairs, 2 beams per pair),
/// tagged with the pair/beam codes the `p_b` column carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Beam {
    #[serde(rename = "1.0_0.0")]
    Gt1l,

    #[serde(rename = "1.0_1.0")]
    Gt1r,

    #[serde(rename = "2.0_0.0")]
    Gt2l,

    #[serde(rename = "2.0_1.0")]
    Gt2r,

    #[serde(rename = "3.0_0.0")]
    Gt3l,

    #[serde(rename = "3.0_1.0")]
    Gt3r,
}

impl Beam {
    /// Every beam, in pair/beam order.
    pub const ALL: [Beam; 6] = [
        Beam::Gt1l,
        Beam::Gt1r,
        Beam::Gt2l,
        Beam::Gt2r,
        Beam::Gt3l,
        Beam::Gt3r,
    ];

    /// Ground-track name, e.g. `gt1l`.
    pub fn name(self) -> &'static str {
        match self {
            Beam::Gt1l => "gt1l",
            Beam::Gt1r => "gt1r",
            Beam::Gt2l => "gt2l",
            Beam::Gt2r => "gt2r",
            Beam::Gt3l => "gt3l",
            Beam::Gt3r => "gt3r",
        }
    }
}

impl fmt::Display for Beam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
