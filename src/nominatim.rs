//! Nominatim HTTP adapter for place search.

use std::collections::HashMap;

use serde::Deserialize;
use tracing::debug;

use crate::traits::{GeocodedPlace, Geocoder};

/// Address keys tried, in order, when picking a concise place name.
const NAME_KEYS: [&str; 6] = ["tourism", "amenity", "shop", "building", "road", "suburb"];

#[derive(Debug, Clone)]
pub struct NominatimConfig {
    pub base_url: String,
    /// Nominatim's usage policy requires an identifying agent.
    pub user_agent: String,
    pub accept_language: String,
    pub limit: u32,
    pub timeout_secs: u64,
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            base_url: "https://nominatim.openstreetmap.org".to_string(),
            user_agent: concat!("trip-planner/", env!("CARGO_PKG_VERSION")).to_string(),
            accept_language: "ja,ko,en".to_string(),
            limit: 10,
            timeout_secs: 10,
        }
    }
}

#[derive(Debug)]
pub enum GeocodeError {
    Http(reqwest::Error),
    /// The backend returned a coordinate that does not parse as a number.
    InvalidCoordinate(String),
}

impl From<reqwest::Error> for GeocodeError {
    fn from(err: reqwest::Error) -> Self {
        GeocodeError::Http(err)
    }
}

#[derive(Debug, Clone)]
pub struct NominatimClient {
    config: NominatimConfig,
    client: reqwest::blocking::Client,
}

impl NominatimClient {
    pub fn new(config: NominatimConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { config, client })
    }
}

impl Geocoder for NominatimClient {
    type Error = GeocodeError;

    fn search(&self, query: &str) -> Result<Vec<GeocodedPlace>, GeocodeError> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }

        let url = format!("{}/search", self.config.base_url);
        let limit = self.config.limit.to_string();

        let rows: Vec<SearchRow> = self
            .client
            .get(url)
            .query(&[
                ("q", query),
                ("format", "json"),
                ("addressdetails", "1"),
                ("limit", limit.as_str()),
                ("accept-language", self.config.accept_language.as_str()),
            ])
            .send()?
            .error_for_status()?
            .json()?;

        debug!("nominatim search - query={:?}, hits={}", query, rows.len());

        rows.into_iter().map(SearchRow::into_geocoded).collect()
    }
}

/// Raw response row; only the fields the planner consumes.
#[derive(Debug, Deserialize)]
struct SearchRow {
    lat: String,
    lon: String,
    display_name: String,
    #[serde(default)]
    address: Option<HashMap<String, String>>,
}

impl SearchRow {
    fn into_geocoded(self) -> Result<GeocodedPlace, GeocodeError> {
        let lat = parse_coord(&self.lat)?;
        let lng = parse_coord(&self.lon)?;
        let name = self.place_name();

        Ok(GeocodedPlace {
            name,
            lat,
            lng,
            address: Some(self.display_name),
        })
    }

    /// Concise place name: the first populated address component from
    /// [`NAME_KEYS`], falling back to the head of the display name.
    fn place_name(&self) -> String {
        if let Some(address) = &self.address {
            for key in NAME_KEYS {
                if let Some(value) = address.get(key) {
                    return value.clone();
                }
            }
        }

        self.display_name
            .split(',')
            .next()
            .unwrap_or(&self.display_name)
            .trim()
            .to_string()
    }
}

fn parse_coord(raw: &str) -> Result<f64, GeocodeError> {
    raw.trim()
        .parse()
        .map_err(|_| GeocodeError::InvalidCoordinate(raw.to_string()))
}
