//! Coordinates and geocoded place candidates.

use serde::Deserialize;

/// A point on Earth. Replaced wholesale on every new fix or selection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// One place returned by the geocoding search.
///
/// `admin1`/`admin2` are regional subdivisions (state, county); any of the
/// descriptive fields past `name` may be absent.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PlaceCandidate {
    pub name: String,
    pub admin1: Option<String>,
    pub admin2: Option<String>,
    pub country: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

impl PlaceCandidate {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }

    /// The string written into the search input when this place is
    /// selected: `name[, admin1][, country]`, absent fields omitted.
    pub fn display_name(&self) -> String {
        let mut parts = vec![self.name.as_str()];
        if let Some(admin1) = self.admin1.as_deref() {
            parts.push(admin1);
        }
        if let Some(country) = self.country.as_deref() {
            parts.push(country);
        }
        parts.join(", ")
    }

    /// The string shown for this place in the suggestion dropdown:
    /// `name[, admin2][, admin1][, country]`.
    pub fn row_label(&self) -> String {
        let mut parts = vec![self.name.as_str()];
        if let Some(admin2) = self.admin2.as_deref() {
            parts.push(admin2);
        }
        if let Some(admin1) = self.admin1.as_deref() {
            parts.push(admin1);
        }
        if let Some(country) = self.country.as_deref() {
            parts.push(country);
        }
        parts.join(", ")
    }
}
