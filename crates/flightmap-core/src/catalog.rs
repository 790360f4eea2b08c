//! Navdata catalog: airports and enroute fixes.
//!
//! Loaded once from a JSON navdata file and queried read-only afterwards.
//! Fix names are not unique (the same ident can exist in several regions),
//! so lookups that need a single fix pick the one nearest a reference
//! position.

use crate::error::CatalogError;
use crate::geo::haversine_distance;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// An airport record from the navdata file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Airport {
    pub ident: String,
    #[serde(default)]
    pub name: Option<String>,
    pub lat: f64,
    pub lon: f64,
}

/// An enroute fix record from the navdata file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fix {
    pub ident: String,
    pub lat: f64,
    pub lon: f64,
}

/// On-disk navdata layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NavData {
    #[serde(default)]
    pub airports: Vec<Airport>,
    #[serde(default)]
    pub fixes: Vec<Fix>,
}

/// In-memory catalog with indexed lookups.
pub struct NavCatalog {
    airports: HashMap<String, Airport>,
    fixes: Vec<Fix>,
    fixes_by_ident: HashMap<String, Vec<usize>>,
}

impl NavCatalog {
    pub fn new(data: NavData) -> Self {
        let airports = data
            .airports
            .into_iter()
            .map(|airport| (airport.ident.clone(), airport))
            .collect();

        let mut fixes_by_ident: HashMap<String, Vec<usize>> = HashMap::new();
        for (index, fix) in data.fixes.iter().enumerate() {
            fixes_by_ident.entry(fix.ident.clone()).or_default().push(index);
        }

        Self {
            airports,
            fixes: data.fixes,
            fixes_by_ident,
        }
    }

    /// Load a catalog from a JSON navdata file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let raw = std::fs::read(path)?;
        let data: NavData = serde_json::from_slice(&raw)?;
        Ok(Self::new(data))
    }

    pub fn airport(&self, ident: &str) -> Option<&Airport> {
        self.airports.get(ident)
    }

    /// All fixes de-duplicated by ident, first occurrence wins.
    ///
    /// Mirrors the map listing endpoint: duplicate idents confuse the
    /// client-side search box, so only the first record per name is shown.
    pub fn unique_fixes(&self) -> Vec<&Fix> {
        let mut seen = std::collections::HashSet::new();
        self.fixes
            .iter()
            .filter(|fix| seen.insert(fix.ident.as_str()))
            .collect()
    }

    /// Among same-named fixes, the one closest to a reference position.
    pub fn nearest_fix(&self, ident: &str, ref_lat: f64, ref_lon: f64) -> Option<&Fix> {
        self.fixes_by_ident.get(ident).and_then(|indexes| {
            indexes
                .iter()
                .map(|&i| &self.fixes[i])
                .min_by(|a, b| {
                    let da = haversine_distance(ref_lat, ref_lon, a.lat, a.lon);
                    let db = haversine_distance(ref_lat, ref_lon, b.lat, b.lon);
                    da.total_cmp(&db)
                })
        })
    }

    pub fn airport_count(&self) -> usize {
        self.airports.len()
    }

    pub fn fix_count(&self) -> usize {
        self.fixes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NavCatalog {
        NavCatalog::new(NavData {
            airports: vec![
                Airport {
                    ident: "EGLL".into(),
                    name: Some("Heathrow".into()),
                    lat: 51.4700,
                    lon: -0.4543,
                },
                Airport {
                    ident: "KJFK".into(),
                    name: None,
                    lat: 40.6413,
                    lon: -73.7781,
                },
            ],
            fixes: vec![
                Fix {
                    ident: "DET".into(),
                    lat: 51.3040,
                    lon: 0.5972,
                },
                // same ident on the other side of the world
                Fix {
                    ident: "DET".into(),
                    lat: -33.0,
                    lon: 151.0,
                },
                Fix {
                    ident: "LAM".into(),
                    lat: 51.6461,
                    lon: 0.1517,
                },
            ],
        })
    }

    #[test]
    fn airport_lookup_is_exact() {
        let catalog = sample();
        assert!(catalog.airport("EGLL").is_some());
        assert!(catalog.airport("egll").is_none());
        assert!(catalog.airport("ZZZZ").is_none());
    }

    #[test]
    fn unique_fixes_keeps_first_occurrence() {
        let catalog = sample();
        let unique = catalog.unique_fixes();
        assert_eq!(unique.len(), 2);
        assert_eq!(unique[0].ident, "DET");
        assert!((unique[0].lat - 51.3040).abs() < 1e-9);
    }

    #[test]
    fn nearest_fix_prefers_the_close_duplicate() {
        let catalog = sample();
        let fix = catalog.nearest_fix("DET", 51.47, -0.45).expect("fix");
        assert!(fix.lat > 0.0);

        let fix = catalog.nearest_fix("DET", -34.0, 150.0).expect("fix");
        assert!(fix.lat < 0.0);

        assert!(catalog.nearest_fix("NOPE", 0.0, 0.0).is_none());
    }

    #[test]
    fn navdata_parses_with_missing_sections() {
        let data: NavData = serde_json::from_str(r#"{"airports": []}"#).unwrap();
        assert!(data.fixes.is_empty());
    }
}
