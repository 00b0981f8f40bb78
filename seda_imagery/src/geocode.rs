/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “SEDA” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

//! free-text place resolution via a Nominatim-style geocoding endpoint.
//!
//! No-match and provider failures are reportable values the user recovers from by retrying
//! with a better query - nothing in here faults

use std::time::Duration;
use reqwest::Client;
use serde::{Serialize,Deserialize};

/// geocoding provider parameters
#[derive(Clone,Serialize,Deserialize,Debug)]
pub struct GeocodeConfig {
    /// search endpoint URL
    pub url: String,

    /// client identification - the public Nominatim instance rejects anonymous agents
    pub user_agent: String,

    /// fixed per-request timeout
    pub timeout: Duration
}

impl Default for GeocodeConfig {
    fn default()->Self {
        GeocodeConfig {
            url: "https://nominatim.openstreetmap.org/search".to_string(),
            user_agent: "seda_imagery".to_string(),
            timeout: Duration::from_secs(10)
        }
    }
}

/// wire format of one geocoding candidate (the provider sends coordinates as strings)
#[derive(Deserialize,Debug)]
struct GeocodePlace {
    lat: String,
    lon: String,
    display_name: String
}

/// what a geocode lookup produced
#[derive(Debug)]
pub enum GeocodeOutcome {
    Match { latitude: f64, longitude: f64, address: String },
    NoMatch,
    ServiceError( String )
}

/// resolve a free-text place description to the provider's best (first) match
pub async fn geocode (config: &GeocodeConfig, location_text: &str)->GeocodeOutcome {
    // per-call client so the fixed timeout is always enforced regardless of the caller's client
    let client = match Client::builder().timeout( config.timeout).user_agent( &config.user_agent).build() {
        Ok(client) => client,
        Err(e) => return GeocodeOutcome::ServiceError( e.to_string())
    };

    let response = match client.get( &config.url)
        .query( &[("q", location_text), ("format", "jsonv2"), ("limit", "1")])
        .send().await
    {
        Ok(response) => response,
        Err(e) => return GeocodeOutcome::ServiceError( e.to_string()) // covers timeouts
    };

    if !response.status().is_success() {
        return GeocodeOutcome::ServiceError( format!("geocoding server status {}", response.status()))
    }

    let places: Vec<GeocodePlace> = match response.json().await {
        Ok(places) => places,
        Err(e) => return GeocodeOutcome::ServiceError( e.to_string())
    };

    match places.into_iter().next() {
        Some(place) => {
            match (place.lat.parse::<f64>(), place.lon.parse::<f64>()) {
                (Ok(latitude), Ok(longitude)) => GeocodeOutcome::Match { latitude, longitude, address: place.display_name },
                _ => GeocodeOutcome::ServiceError( format!("unparseable coordinates for '{}'", place.display_name))
            }
        }
        None => GeocodeOutcome::NoMatch
    }
}

/// user-facing rendition of a geocode outcome
pub fn format_geocode_outcome (location_text: &str, outcome: &GeocodeOutcome)->String {
    match outcome {
        GeocodeOutcome::Match { latitude, longitude, address } => {
            format!("latitude: {latitude}, longitude: {longitude}\naddress: {address}")
        }
        GeocodeOutcome::NoMatch => {
            format!("no location found for '{location_text}' - please give a more specific description")
        }
        GeocodeOutcome::ServiceError(msg) => {
            format!("geocoding failed: {msg}")
        }
    }
}
