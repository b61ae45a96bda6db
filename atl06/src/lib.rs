//! ICESat-2 ATL06 track visualization: lon/lat scatters, bounding-box
//! selection, 3-D crossover views, and per-track summaries.
//!
//! # References
//!
//! 1. [ATL06 land-ice height product](https://nsidc.org/data/atl06)
//! 1. [ICESat-2 mission](https://icesat-2.gsfc.nasa.gov)

mod error;
mod extent;
mod plot;
mod record;
mod summary;
mod track;

pub use crate::{
    error::Atl06Error,
    extent::Extent,
    plot::{plot_crossovers, plot_tracks, select_region},
    record::{Beam, Measurement},
    summary::{summarize, summarize_tracks, TrackSummary},
    track::TrackSet,
};
