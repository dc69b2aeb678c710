/// Rotates equatorial coordinates into the ecliptic frame.
///
/// Converts `(ra, dec)` to Cartesian, rotates about the X axis by
/// `-obliquity` and converts back. Returns `(longitude, latitude)` in
/// degrees, longitude in `[-180, 180]`.
pub fn celestial_to_ecliptic(ra: f64, dec: f64, obliquity: f64) -> (f64, f64) {
    let (sin_cx, cos_cx) = ra.to_radians().sin_cos();
    let (sin_cy, cos_cy) = dec.to_radians().sin_cos();
    let (sin_ob, cos_ob) = (-obliquity).to_radians().sin_cos();

    let sin_ey = (sin_ob * sin_cx * cos_cy + cos_ob * sin_cy).clamp(-1.0, 1.0);
    let ey = sin_ey.asin();

    let cos_ey = ey.cos();
    if cos_ey.abs() < 1e-12 {
        // ecliptic pole, longitude is undefined
        return (0.0, ey.to_degrees());
    }
    let cos_ex = (cos_cx * cos_cy / cos_ey).clamp(-1.0, 1.0);
    let mut ex = cos_ex.acos();
    if sin_ob * sin_cy > cos_ob * sin_cx * cos_cy {
        ex = -ex;
    }

    (ex.to_degrees(), ey.to_degrees())
}
