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

//! the closed operation set exposed to orchestration layers.
//!
//! Dispatch is over a fixed tagged-variant enum with statically typed argument records -
//! no name-string/argument-dictionary indirection. An orchestration loop (LLM tool calling,
//! a form UI, ..) constructs `ToolOp` values and surfaces the returned string verbatim

use std::path::Path;
use serde::Deserialize;

use seda_common::{datetime::parse_utc_date, net::mk_client};
use seda_stac::{Collection, EarthSearchConfig, ImageryQuery};

use crate::{download_imagery, ImageryConfig, Result};
use crate::geocode::{format_geocode_outcome, geocode, GeocodeConfig};

/// one invocable operation with its argument record. The `op`-tagged serde form lets an
/// orchestration layer hand over JSON argument records directly
#[derive(Deserialize,Debug,Clone)]
#[serde(tag="op", rename_all="snake_case")]
pub enum ToolOp {
    /// resolve a free-text place description to coordinates
    GeocodeLocation { location_text: String },

    /// download the closest Sentinel-1 SAR scene (VV/VH polarization assets)
    DownloadSar { lon: f64, lat: f64, date: String, save_dir: String },

    /// download the closest sufficiently cloud-free Sentinel-2 optical scene
    DownloadOptical { lon: f64, lat: f64, date: String, save_dir: String }
}

/// execute one operation to completion and return its report string. Recoverable conditions
/// (no scene, absent assets, failed transfers, geocode misses) are `Ok` strings; malformed
/// input (an unparseable date) and transport/config faults are the only errors
pub async fn execute_tool_op (search_config: &EarthSearchConfig, imagery_config: &ImageryConfig,
                              geocode_config: &GeocodeConfig, op: &ToolOp)->Result<String> {
    match op {
        ToolOp::GeocodeLocation { location_text } => {
            let outcome = geocode( geocode_config, location_text).await;
            Ok( format_geocode_outcome( location_text, &outcome) )
        }

        ToolOp::DownloadSar { lon, lat, date, save_dir } => {
            let query = ImageryQuery {
                longitude: *lon,
                latitude: *lat,
                center_date: parse_utc_date( date)?, // malformed input faults to the caller
                window_days: imagery_config.window_days,
                collection: Collection::Sar,
                max_cloud_cover: None
            };
            let client = mk_client( search_config.request_timeout)?;
            download_imagery( &client, search_config, &query, Path::new( save_dir)).await
        }

        ToolOp::DownloadOptical { lon, lat, date, save_dir } => {
            let query = ImageryQuery {
                longitude: *lon,
                latitude: *lat,
                center_date: parse_utc_date( date)?,
                window_days: imagery_config.window_days,
                collection: Collection::Optical,
                max_cloud_cover: Some( imagery_config.max_cloud_cover)
            };
            let client = mk_client( search_config.request_timeout)?;
            download_imagery( &client, search_config, &query, Path::new( save_dir)).await
        }
    }
}
