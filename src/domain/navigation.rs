// Great-circle dead reckoning on a spherical Earth.

/// Mean Earth radius used for all distance conversions.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Returns the `(lat, lon)` in degrees reached after travelling `speed_kph * hours`
/// kilometres from the start point along the great circle with the given initial bearing.
///
/// Longitude is folded back into (-180, 180] and latitude reflected back into [-90, 90].
/// Both folds assume a single wrap, which holds while one step covers less than a
/// revolution. The latitude reflection does not flip the longitude when passing over a
/// pole; callers relying on exact polar crossings should not use this.
pub fn destination(
    begin_lat_deg: f64,
    begin_lon_deg: f64,
    bearing_deg: f64,
    speed_kph: f64,
    hours: f64,
) -> (f64, f64) {
    let begin_lat = begin_lat_deg.to_radians();
    let begin_lon = begin_lon_deg.to_radians();
    let bearing = bearing_deg.to_radians();

    let distance_km = speed_kph * hours;
    let angular = distance_km / EARTH_RADIUS_KM;

    let end_lat = (begin_lat.sin() * angular.cos()
        + begin_lat.cos() * angular.sin() * bearing.cos())
    .asin();
    let end_lon = begin_lon
        + (bearing.sin() * angular.sin() * begin_lat.cos())
            .atan2(angular.cos() - begin_lat.sin() * end_lat.sin());

    (
        normalize_lat(end_lat.to_degrees()),
        normalize_lon(end_lon.to_degrees()),
    )
}

fn normalize_lon(lon: f64) -> f64 {
    if lon > 180.0 {
        -180.0 + lon % 180.0
    } else if lon <= -180.0 {
        180.0 + lon % 180.0
    } else {
        lon
    }
}

fn normalize_lat(lat: f64) -> f64 {
    if lat > 90.0 {
        90.0 - lat % 90.0
    } else if lat <= -90.0 {
        -90.0 - lat % 90.0
    } else {
        lat
    }
}
