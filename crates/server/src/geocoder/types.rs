//! Geocoding service response types.
//!
//! The service answers with a GeoJSON `FeatureCollection` ranked by relevance:
//!
//! ```json
//! {
//!   "type": "FeatureCollection",
//!   "version": "draft",
//!   "features": [
//!     {
//!       "type": "Feature",
//!       "geometry": { "type": "Point", "coordinates": [2.308628, 48.850699] },
//!       "properties": {
//!         "label": "20 Avenue de Ségur 75007 Paris",
//!         "score": 0.97,
//!         "housenumber": "20",
//!         "name": "20 Avenue de Ségur",
//!         "postcode": "75007",
//!         "city": "Paris",
//!         ...
//!       }
//!     }
//!   ],
//!   "query": "20 avenue de Segur",
//!   "limit": 5
//! }
//! ```
//!
//! Only `features` is required to decode. Candidates are read leniently, so a
//! malformed candidate further down the ranking never fails the lookup; the
//! `name`, `postcode` and `city` properties are only required of the
//! candidate that is actually used (see [`FeatureProperties::resolved`]).

use order_gate_core::ResolvedAddress;
use serde::Deserialize;

/// A ranked collection of address candidates.
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    pub features: Vec<Feature>,
    #[serde(default)]
    pub attribution: Option<String>,
    #[serde(default)]
    pub licence: Option<String>,
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub limit: Option<u32>,
}

impl FeatureCollection {
    /// The highest ranked candidate, if any.
    #[must_use]
    pub fn best(&self) -> Option<&Feature> {
        self.features.first()
    }
}

/// One address candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub properties: FeatureProperties,
}

/// Point geometry of a candidate (`[longitude, latitude]`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub coordinates: Vec<f64>,
}

/// Address properties of a candidate.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeatureProperties {
    /// Street line, e.g. `20 Avenue de Ségur`.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub postcode: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    /// Full display label including postcode and city.
    #[serde(default)]
    pub label: Option<String>,
    /// Relevance score in `[0, 1]`.
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub housenumber: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    /// Match granularity: `housenumber`, `street`, `locality` or `municipality`.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// INSEE municipality code.
    #[serde(default)]
    pub citycode: Option<String>,
    /// Department and region, e.g. `75, Paris, Île-de-France`.
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default)]
    pub importance: Option<f64>,
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub x: Option<f64>,
    #[serde(default)]
    pub y: Option<f64>,
}

impl FeatureProperties {
    /// The canonical address, if street line, postcode and city are all present.
    #[must_use]
    pub fn resolved(&self) -> Option<ResolvedAddress> {
        Some(ResolvedAddress {
            label: self.name.clone()?,
            postal_code: self.postcode.clone()?,
            city: self.city.clone()?,
        })
    }
}
