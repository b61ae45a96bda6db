//! Plotters renderings of ATL06 track tables.
//!
//! Every routine draws onto a caller-supplied [`DrawingArea`]; figure
//! creation and presentation stay with the caller.

use crate::{error::Atl06Error, record::Beam, track::TrackSet};
use log::debug;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::colors::colormaps::{ColorMap, ViridisRGB};
use std::ops::Range;

/// Scatter point radius, pixels.
const POINT_SIZE: i32 = 1;

/// Horizontal room reserved for the colorbar and its labels, pixels.
const COLORBAR_WIDTH: u32 = 110;

/// Renders the lon/lat scatter of every track in `data`.
///
/// With `filtered` set, only high-quality points are drawn. Without an
/// attribute all points are black; with one, each point is colored by
/// its value on the Viridis scale and a labeled colorbar is added.
pub fn plot_tracks<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    data: &TrackSet,
    attribute: Option<&str>,
    filtered: bool,
) -> Result<(), Atl06Error> {
    draw_tracks(area, data, attribute, filtered, None)
}

/// Renders the full track plot with the `lons`/`lats` box outlined in
/// red, and returns the points strictly inside the box.
///
/// Points sitting exactly on a box edge are never selected. The box is
/// applied to `data` as given; the quality filter only affects what is
/// drawn.
pub fn select_region<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    data: &TrackSet,
    lons: [f64; 2],
    lats: [f64; 2],
    attribute: Option<&str>,
    filtered: bool,
) -> Result<TrackSet, Atl06Error> {
    draw_tracks(area, data, attribute, filtered, Some((lons, lats)))?;
    Ok(data.select(lons, lats))
}

/// Renders a 3-D elevation scatter of crossover tracks.
///
/// Draws the tracks in `rgt_list` (every track in `data` when `None`),
/// one series per beam of each track, each with its own hue and a
/// legend label of the beam name and acquisition day. Lon/lat axis
/// limits come from the whole input set, not the plotted subset.
pub fn plot_crossovers<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    data: &TrackSet,
    rgt_list: Option<&[u16]>,
) -> Result<(), Atl06Error> {
    let rgts: Vec<u16> = match rgt_list {
        Some(list) => list.to_vec(),
        None => data.rgts(),
    };
    let extent = data.extent().ok_or(Atl06Error::Empty)?;
    if rgts.is_empty() {
        return Err(Atl06Error::Empty);
    }

    // Resolve dates and the elevation envelope before touching the
    // backend, so a bad track list fails cleanly.
    let mut dates = Vec::with_capacity(rgts.len());
    let mut h_range: Option<[f64; 2]> = None;
    for &rgt in &rgts {
        let date = data
            .track(rgt)
            .next()
            .ok_or(Atl06Error::EmptyTrack(rgt))?
            .date;
        dates.push(date);
        for m in data.track(rgt) {
            h_range = Some(match h_range {
                None => [m.h_li; 2],
                Some([lo, hi]) => [lo.min(m.h_li), hi.max(m.h_li)],
            });
        }
    }
    let h_range = h_range.ok_or(Atl06Error::Empty)?;

    // One hue per beam of every plotted track.
    let hues = rgts.len() * Beam::ALL.len();
    debug!("plotting {} tracks with {hues} hues", rgts.len());

    area.fill(&WHITE).map_err(render_err)?;
    let mut chart = ChartBuilder::on(area)
        .margin(20)
        .build_cartesian_3d(axis(extent.lon), axis(extent.lat), axis(h_range))
        .map_err(render_err)?;
    chart.configure_axes().draw().map_err(render_err)?;

    for (t, (&rgt, date)) in rgts.iter().zip(&dates).enumerate() {
        let day = date.format("%Y-%m-%d");
        for (b, beam) in Beam::ALL.into_iter().enumerate() {
            let color = hue(t * Beam::ALL.len() + b, hues);
            chart
                .draw_series(data.beam(rgt, beam).map(|m| {
                    Circle::new((m.longitude, m.latitude, m.h_li), POINT_SIZE, color.filled())
                }))
                .map_err(render_err)?
                .label(format!("{beam} {day}"))
                .legend(move |(x, y)| Circle::new((x + 10, y), 4, color.filled()));
        }
    }

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .draw()
        .map_err(render_err)?;
    Ok(())
}

fn draw_tracks<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    data: &TrackSet,
    attribute: Option<&str>,
    filtered: bool,
    bbox: Option<([f64; 2], [f64; 2])>,
) -> Result<(), Atl06Error> {
    let shown = if filtered {
        data.high_quality()
    } else {
        data.clone()
    };

    // Resolve the color column before anything is drawn.
    let colored = match attribute {
        Some(name) => Some((name, shown.attribute_values(name)?)),
        None => None,
    };
    let extent = shown.extent().ok_or(Atl06Error::Empty)?;

    area.fill(&WHITE).map_err(render_err)?;

    let (chart_area, bar_area) = if colored.is_some() {
        let (width, _) = area.dim_in_pixel();
        let (chart_area, bar_area) =
            area.split_horizontally(width.saturating_sub(COLORBAR_WIDTH) as i32);
        (chart_area, Some(bar_area))
    } else {
        (area.clone(), None)
    };

    let mut chart = ChartBuilder::on(&chart_area)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(axis(extent.lon), axis(extent.lat))
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc("Longitude")
        .y_desc("Latitude")
        .draw()
        .map_err(render_err)?;

    match &colored {
        None => {
            chart
                .draw_series(shown.iter().map(|m| {
                    Circle::new((m.longitude, m.latitude), POINT_SIZE, BLACK.filled())
                }))
                .map_err(render_err)?;
        }
        Some((name, values)) => {
            let (vmin, vmax) = min_max(values);
            let span = (vmax - vmin).max(f64::EPSILON);
            chart
                .draw_series(shown.iter().zip(values).map(|(m, v)| {
                    let color = ViridisRGB.get_color((v - vmin) / span);
                    Circle::new((m.longitude, m.latitude), POINT_SIZE, color.filled())
                }))
                .map_err(render_err)?;
            if let Some(bar_area) = &bar_area {
                draw_colorbar(bar_area, name, vmin, vmax)?;
            }
        }
    }

    if let Some((lons, lats)) = bbox {
        chart
            .draw_series(std::iter::once(Rectangle::new(
                [(lons[0], lats[0]), (lons[1], lats[1])],
                RED.stroke_width(2),
            )))
            .map_err(render_err)?;
    }
    Ok(())
}

/// Vertical strip of the Viridis scale spanning the attribute's
/// observed range.
fn draw_colorbar<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    label: &str,
    vmin: f64,
    vmax: f64,
) -> Result<(), Atl06Error> {
    let span = (vmax - vmin).max(f64::EPSILON);
    let mut bar = ChartBuilder::on(area)
        .margin_top(20)
        .margin_bottom(50)
        .margin_right(10)
        .set_label_area_size(LabelAreaPosition::Right, 60)
        .build_cartesian_2d(0.0..1.0, vmin..vmin + span)
        .map_err(render_err)?;

    let steps = 100;
    for i in 0..steps {
        let lo = vmin + span * f64::from(i) / f64::from(steps);
        let hi = vmin + span * f64::from(i + 1) / f64::from(steps);
        let color = ViridisRGB.get_color(f64::from(i) / f64::from(steps - 1));
        bar.draw_series(std::iter::once(Rectangle::new(
            [(0.0, lo), (1.0, hi)],
            color.filled(),
        )))
        .map_err(render_err)?;
    }

    bar.configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .disable_x_axis()
        .y_labels(7)
        .y_desc(label)
        .draw()
        .map_err(render_err)?;
    Ok(())
}

/// Chart range for one axis, padded when the span collapses to a
/// point.
fn axis(range: [f64; 2]) -> Range<f64> {
    if range[0] < range[1] {
        range[0]..range[1]
    } else {
        range[0] - 0.5..range[1] + 0.5
    }
}

/// Hue `i` of `n` evenly spaced steps around the cyclic HSL wheel.
#[allow(clippy::cast_precision_loss)]
fn hue(i: usize, n: usize) -> HSLColor {
    HSLColor(0.99 * i as f64 / n.max(1) as f64, 1.0, 0.5)
}

fn min_max(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        })
}

fn render_err<E: std::error::Error>(e: E) -> Atl06Error {
    Atl06Error::Render(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::{hue, plot_crossovers, plot_tracks, select_region};
    use crate::{
        error::Atl06Error,
        record::{Beam, Measurement},
        track::TrackSet,
    };
    use chrono::{TimeZone, Utc};
    use plotters::prelude::*;
    use std::collections::BTreeMap;

    fn point(lon: f64, lat: f64, rgt: u16) -> Measurement {
        Measurement {
            longitude: lon,
            latitude: lat,
            h_li: 1200.0,
            rgt,
            beam: Beam::Gt1l,
            date: Utc.with_ymd_and_hms(2019, 3, 1, 0, 0, 0).unwrap(),
            quality_summary: 0,
            extra: BTreeMap::new(),
        }
    }

    fn two_tracks() -> TrackSet {
        TrackSet::new(vec![
            point(10.0, 50.0, 101),
            point(11.0, 51.0, 101),
            point(20.0, 60.0, 102),
        ])
    }

    #[test]
    fn test_missing_attribute_fails_before_drawing() {
        let data = two_tracks();
        let mut buf = vec![0u8; 100 * 100 * 3];
        let area = BitMapBackend::with_buffer(&mut buf, (100, 100)).into_drawing_area();

        let err = plot_tracks(&area, &data, Some("slope"), false).unwrap_err();
        assert!(matches!(err, Atl06Error::MissingAttribute(name) if name == "slope"));
    }

    #[test]
    fn test_empty_set_fails() {
        let data = TrackSet::default();
        let mut buf = vec![0u8; 100 * 100 * 3];
        let area = BitMapBackend::with_buffer(&mut buf, (100, 100)).into_drawing_area();

        let err = plot_tracks(&area, &data, None, false).unwrap_err();
        assert!(matches!(err, Atl06Error::Empty));

        // The quality filter can empty the set too.
        let mut low = point(10.0, 50.0, 101);
        low.quality_summary = 1;
        let err = plot_tracks(&area, &TrackSet::new(vec![low]), None, true).unwrap_err();
        assert!(matches!(err, Atl06Error::Empty));
    }

    #[test]
    fn test_crossovers_reject_unknown_track() {
        let data = two_tracks();
        let mut buf = vec![0u8; 100 * 100 * 3];
        let area = BitMapBackend::with_buffer(&mut buf, (100, 100)).into_drawing_area();

        let err = plot_crossovers(&area, &data, Some(&[101, 999])).unwrap_err();
        assert!(matches!(err, Atl06Error::EmptyTrack(999)));
    }

    #[test]
    fn test_selection_matches_direct_filter() {
        let data = two_tracks();
        let mut buf = vec![0u8; 400 * 400 * 3];
        let area = BitMapBackend::with_buffer(&mut buf, (400, 400)).into_drawing_area();

        // Rendering may fail without a usable font, but the returned
        // subset must match a direct select either way.
        if let Ok(selected) = select_region(&area, &data, [9.0, 15.0], [49.0, 53.0], None, false) {
            assert_eq!(selected, data.select([9.0, 15.0], [49.0, 53.0]));
            assert_eq!(selected.len(), 2);
        }
    }

    #[test]
    fn test_hues_are_distinct() {
        let n = 2 * Beam::ALL.len();
        for i in 1..n {
            let HSLColor(a, _, _) = hue(i - 1, n);
            let HSLColor(b, _, _) = hue(i, n);
            assert!(b > a);
            assert!(b < 1.0);
        }
    }
}
