//! Spatial value generators.

use datum_core::Datum;
use geo_types::{Coord, Geometry, LineString, Point, Polygon};
use rand::Rng;

/// Maximum number of vertices in a generated line string.
const MAX_VERTICES: usize = 6;

/// Generate a point, line string or polygon.
///
/// With `geographic` set, every coordinate is a valid longitude/latitude
/// pair.
pub fn generate_geometry<R: Rng>(rng: &mut R, geographic: bool) -> Datum {
    let geometry = match rng.gen_range(0..3) {
        0 => Geometry::Point(Point(random_coord(rng, geographic))),
        1 => {
            let len = rng.gen_range(2..=MAX_VERTICES);
            let coords = (0..len).map(|_| random_coord(rng, geographic)).collect();
            Geometry::LineString(LineString(coords))
        }
        _ => Geometry::Polygon(random_triangle(rng, geographic)),
    };
    Datum::Geo(geometry)
}

fn random_triangle<R: Rng>(rng: &mut R, geographic: bool) -> Polygon<f64> {
    let corners: Vec<Coord<f64>> = (0..3).map(|_| random_coord(rng, geographic)).collect();
    // `Polygon::new` closes the ring.
    Polygon::new(LineString(corners), vec![])
}

fn random_coord<R: Rng>(rng: &mut R, geographic: bool) -> Coord<f64> {
    if geographic {
        Coord {
            x: round(rng.gen_range(-180.0..=180.0)),
            y: round(rng.gen_range(-90.0..=90.0)),
        }
    } else {
        Coord {
            x: round(rng.gen_range(-1.0e6..1.0e6)),
            y: round(rng.gen_range(-1.0e6..1.0e6)),
        }
    }
}

/// Keep six decimal places, which is what spatial outputs usually carry.
fn round(v: f64) -> f64 {
    (v * 1e6).round() / 1e6
}
