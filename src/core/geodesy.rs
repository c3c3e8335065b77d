//! Raumbezug, geodätische Distanz und Azimut (WGS84, Vincenty-Inverse).
//!
//! Winkel sind an der Schnittstelle in Grad, intern für die geodätische
//! Rechnung in Radiant. Distanzen immer in Metern.

use serde::{Deserialize, Serialize};

use super::Point3M;

/// WGS84 große Halbachse (Meter).
pub const WGS84_A: f64 = 6_378_137.0;
/// WGS84 Abplattung.
pub const WGS84_F: f64 = 1.0 / 298.257_223_563;
/// WGS84 kleine Halbachse (Meter).
pub const WGS84_B: f64 = WGS84_A * (1.0 - WGS84_F);

/// Maximale Iterationen der Vincenty-Lösung (nahezu antipodale Punkte konvergieren nicht).
const VINCENTY_MAX_ITERATIONS: usize = 200;
/// Konvergenzschwelle für λ (Radiant, ~0.006 mm).
const VINCENTY_EPSILON: f64 = 1e-12;
/// Unterhalb dieser Distanz ist kein Azimut definiert (Meter).
const MIN_AZIMUTH_DISTANCE_M: f64 = 1e-6;

/// Koordinatensystem eines Pfads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpatialReference {
    /// Geographisch: x = Länge, y = Breite (Grad)
    #[default]
    Wgs84,
    /// Web Mercator (EPSG:3857), Meter
    WebMercator,
    /// Lokales kartesisches System in Metern (euklidisch)
    Planar,
}

/// Geographische Position in Grad.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon {
    /// Breite in Grad
    pub latitude: f64,
    /// Länge in Grad
    pub longitude: f64,
}

/// Ergebnis der inversen geodätischen Aufgabe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeodesicInverse {
    /// Ellipsoidische Distanz in Metern
    pub distance_m: f64,
    /// Vorwärts-Azimut am Startpunkt in Radiant (Nord = 0, im Uhrzeigersinn)
    pub azimuth_rad: f64,
}

impl SpatialReference {
    /// `true` für Systeme mit geographischer Breite/Länge.
    pub fn is_geographic(self) -> bool {
        !matches!(self, SpatialReference::Planar)
    }

    /// Breite/Länge eines Punkts, `None` für planare Systeme.
    pub fn lat_lon(self, point: &Point3M) -> Option<LatLon> {
        match self {
            SpatialReference::Wgs84 => Some(LatLon {
                latitude: point.y,
                longitude: point.x,
            }),
            SpatialReference::WebMercator => {
                let longitude = (point.x / WGS84_A).to_degrees();
                let latitude = (point.y / WGS84_A).sinh().atan().to_degrees();
                Some(LatLon {
                    latitude,
                    longitude,
                })
            }
            SpatialReference::Planar => None,
        }
    }

    /// Horizontale Distanz zwischen zwei Punkten in Metern.
    ///
    /// Geographische Systeme rechnen geodätisch auf dem WGS84-Ellipsoid,
    /// planare Systeme euklidisch. Falls Vincenty nicht konvergiert
    /// (nahezu antipodal), wird auf die Großkreis-Distanz zurückgefallen.
    pub fn distance_m(self, a: &Point3M, b: &Point3M) -> f64 {
        match (self.lat_lon(a), self.lat_lon(b)) {
            (Some(from), Some(to)) => inverse_geodetic(
                from.latitude.to_radians(),
                from.longitude.to_radians(),
                to.latitude.to_radians(),
                to.longitude.to_radians(),
            )
            .map(|inv| inv.distance_m)
            .unwrap_or_else(|| haversine_m(from, to)),
            _ => a.xy().distance(b.xy()),
        }
    }

    /// Azimut von `from` nach `to` in Grad, normalisiert auf [0, 360).
    ///
    /// `None`, wenn beide Punkte zusammenfallen oder keine Lösung existiert.
    pub fn azimuth_deg(self, from: &Point3M, to: &Point3M) -> Option<f64> {
        match (self.lat_lon(from), self.lat_lon(to)) {
            (Some(a), Some(b)) => {
                let inv = inverse_geodetic(
                    a.latitude.to_radians(),
                    a.longitude.to_radians(),
                    b.latitude.to_radians(),
                    b.longitude.to_radians(),
                )?;
                if inv.distance_m < MIN_AZIMUTH_DISTANCE_M {
                    return None;
                }
                Some(normalize_degrees(inv.azimuth_rad.to_degrees()))
            }
            _ => {
                let delta = to.xy() - from.xy();
                if delta.length() < MIN_AZIMUTH_DISTANCE_M {
                    return None;
                }
                // Kompass-Konvention: Nord = +Y, Ost = +X
                Some(normalize_degrees(delta.x.atan2(delta.y).to_degrees()))
            }
        }
    }
}

/// Normalisiert einen Winkel auf [0, 360).
pub fn normalize_degrees(deg: f64) -> f64 {
    let wrapped = deg.rem_euclid(360.0);
    // rem_euclid kann bei -1e-15 exakt 360.0 liefern
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Inverse geodätische Aufgabe nach Vincenty auf dem WGS84-Ellipsoid.
///
/// Eingaben in Radiant. Gibt `None` zurück, wenn die Iteration nicht
/// konvergiert (nahezu antipodale Punkte).
pub fn inverse_geodetic(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> Option<GeodesicInverse> {
    let f = WGS84_F;
    let l = lon2 - lon1;
    let u1 = ((1.0 - f) * lat1.tan()).atan();
    let u2 = ((1.0 - f) * lat2.tan()).atan();
    let (sin_u1, cos_u1) = u1.sin_cos();
    let (sin_u2, cos_u2) = u2.sin_cos();

    let mut lambda = l;
    let mut converged = false;

    let mut sin_lambda = 0.0;
    let mut cos_lambda = 1.0;
    let mut sin_sigma = 0.0;
    let mut cos_sigma = 1.0;
    let mut sigma = 0.0;
    let mut cos_sq_alpha = 1.0;
    let mut cos_2sigma_m = 0.0;

    for _ in 0..VINCENTY_MAX_ITERATIONS {
        (sin_lambda, cos_lambda) = lambda.sin_cos();
        let t1 = cos_u2 * sin_lambda;
        let t2 = cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda;
        sin_sigma = (t1 * t1 + t2 * t2).sqrt();
        if sin_sigma == 0.0 {
            // Zusammenfallende Punkte
            return Some(GeodesicInverse {
                distance_m: 0.0,
                azimuth_rad: 0.0,
            });
        }
        cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
        sigma = sin_sigma.atan2(cos_sigma);
        let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
        cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;
        // Äquatoriale Linie: cos²α = 0
        cos_2sigma_m = if cos_sq_alpha != 0.0 {
            cos_sigma - 2.0 * sin_u1 * sin_u2 / cos_sq_alpha
        } else {
            0.0
        };
        let c = f / 16.0 * cos_sq_alpha * (4.0 + f * (4.0 - 3.0 * cos_sq_alpha));
        let lambda_prev = lambda;
        lambda = l
            + (1.0 - c)
                * f
                * sin_alpha
                * (sigma
                    + c * sin_sigma
                        * (cos_2sigma_m + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)));
        if (lambda - lambda_prev).abs() < VINCENTY_EPSILON {
            converged = true;
            break;
        }
    }

    if !converged {
        return None;
    }

    let a2 = WGS84_A * WGS84_A;
    let b2 = WGS84_B * WGS84_B;
    let u_sq = cos_sq_alpha * (a2 - b2) / b2;
    let big_a = 1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
    let big_b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));
    let c2sm2 = cos_2sigma_m * cos_2sigma_m;
    let delta_sigma = big_b
        * sin_sigma
        * (cos_2sigma_m
            + big_b / 4.0
                * (cos_sigma * (-1.0 + 2.0 * c2sm2)
                    - big_b / 6.0
                        * cos_2sigma_m
                        * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                        * (-3.0 + 4.0 * c2sm2)));

    let distance_m = WGS84_B * big_a * (sigma - delta_sigma);
    let azimuth_rad =
        (cos_u2 * sin_lambda).atan2(cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda);

    Some(GeodesicInverse {
        distance_m,
        azimuth_rad,
    })
}

/// Großkreis-Distanz auf der Kugel mit Radius `WGS84_A`.
fn haversine_m(a: LatLon, b: LatLon) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let d_lat = lat2 - lat1;
    let d_lon = (b.longitude - a.longitude).to_radians();
    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * WGS84_A * h.sqrt().min(1.0).asin()
}
