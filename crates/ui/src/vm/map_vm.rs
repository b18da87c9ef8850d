use blitz_core::model::{MapPoint, MapPointStatus, PointId};

pub const VIEW_WIDTH: f64 = 800.0;
pub const VIEW_HEIGHT: f64 = 500.0;
const PADDING: f64 = 40.0;

/// A marker positioned in SVG viewport coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkerVm {
    pub id: PointId,
    pub x: f64,
    pub y: f64,
    pub nombre: String,
    pub grupo: String,
    pub status: &'static str,
    /// `delivered` or `pending`, used as a CSS class.
    pub class: &'static str,
    pub maps_url: Option<String>,
}

fn status_class(status: MapPointStatus) -> &'static str {
    match status {
        MapPointStatus::Delivered => "delivered",
        MapPointStatus::Pending => "pending",
    }
}

/// Fit the points' bounding box into the padded viewport.
///
/// A single point, or points sharing a coordinate, land on the center line
/// of that axis. North is up. Points without coordinates are skipped.
#[must_use]
pub fn project_markers(points: &[MapPoint]) -> Vec<MarkerVm> {
    let located: Vec<(&MapPoint, f64, f64)> = points
        .iter()
        .filter_map(|p| p.coordinates().map(|(lat, lng)| (p, lat, lng)))
        .collect();
    let Some(&(_, first_lat, first_lng)) = located.first() else {
        return Vec::new();
    };
    let (mut min_lat, mut max_lat) = (first_lat, first_lat);
    let (mut min_lng, mut max_lng) = (first_lng, first_lng);
    for &(_, lat, lng) in &located {
        min_lat = min_lat.min(lat);
        max_lat = max_lat.max(lat);
        min_lng = min_lng.min(lng);
        max_lng = max_lng.max(lng);
    }

    let usable_w = VIEW_WIDTH - 2.0 * PADDING;
    let usable_h = VIEW_HEIGHT - 2.0 * PADDING;
    let axis = |value: f64, min: f64, max: f64, span: f64| {
        if max - min > f64::EPSILON {
            (value - min) / (max - min) * span
        } else {
            span / 2.0
        }
    };

    located
        .into_iter()
        .map(|(p, lat, lng)| {
            let status = p.status();
            MarkerVm {
                id: p.id.clone(),
                x: PADDING + axis(lng, min_lng, max_lng, usable_w),
                y: PADDING + usable_h - axis(lat, min_lat, max_lat, usable_h),
                nombre: p.nombre.clone(),
                grupo: p.grupo.clone(),
                status: status.label(),
                class: status_class(status),
                maps_url: p.maps_url.clone(),
            }
        })
        .collect()
}

/// Marker count per status, for the legend.
#[must_use]
pub fn legend_counts(points: &[MapPoint]) -> [(MapPointStatus, usize); 2] {
    let delivered = points
        .iter()
        .filter(|p| p.status() == MapPointStatus::Delivered)
        .count();
    [
        (MapPointStatus::Delivered, delivered),
        (MapPointStatus::Pending, points.len() - delivered),
    ]
}
