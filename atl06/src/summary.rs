use crate::{error::Atl06Error, extent::Extent, track::TrackSet};
use chrono::{DateTime, Utc};
use log::debug;
use serde::Serialize;

/// One summary row: a track present in the set, when it was measured,
/// and how many points it contributed.
///
/// `extent` is the envelope of the whole summarized set, repeated on
/// every row. It is not a per-track envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackSummary {
    pub rgt: u16,
    pub date: DateTime<Utc>,
    pub points: usize,
    pub extent: Extent,
}

/// Summarizes every track in the set, in first-appearance order.
pub fn summarize(data: &TrackSet) -> Result<Vec<TrackSummary>, Atl06Error> {
    summarize_tracks(data, &data.rgts())
}

/// Summarizes the listed tracks. A listed track with no points in
/// `data` is an error.
pub fn summarize_tracks(data: &TrackSet, rgts: &[u16]) -> Result<Vec<TrackSummary>, Atl06Error> {
    let extent = data.extent().ok_or(Atl06Error::Empty)?;

    let mut rows = Vec::with_capacity(rgts.len());
    for &rgt in rgts {
        let mut track = data.track(rgt).peekable();
        let date = track.peek().ok_or(Atl06Error::EmptyTrack(rgt))?.date;
        let points = track.count();
        rows.push(TrackSummary {
            rgt,
            date,
            points,
            extent,
        });
    }
    debug!("summarized {} points over {} tracks", data.len(), rows.len());
    Ok(rows)
}
