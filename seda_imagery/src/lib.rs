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
#![allow(unused)]

//! Sentinel imagery acquisition: per-collection asset role policy, sequential streaming
//! downloads into a destination dir and deterministic result formatting.
//!
//! All recoverable conditions (empty search window, absent asset roles, non-OK transfers)
//! come back as descriptive strings in the report - callers inspect content, they do not
//! catch faults. Only malformed input and transport/filesystem failures are errors.

use std::fmt;
use std::path::{Path,PathBuf};

use reqwest::{Client,StatusCode};
use serde::{Serialize,Deserialize};
use tracing::{info,warn};

use seda_common::{
    datetime::{short_utc_datetime_string, utc_date_string},
    fs::ensure_writable_dir,
    net::{get_file_to_path, HttpFileResult},
    s3::rewrite_storage_href
};
use seda_stac::{locate, Collection, EarthSearchConfig, ImageryQuery, LocateOutcome, SearchSummary, StacItem};

mod errors;
pub use errors::*;

pub mod geocode;
pub mod ops;

/// fixed SAR polarization roles - both are always reported, present on the item or not
pub const SAR_ROLES: [&str;2] = ["vv","vh"];

/// optical RGB-related roles in download priority order - only the subset present on the
/// item is attempted
pub const OPTICAL_ROLES: [&str;4] = ["visual","red","green","blue"];

pub const NO_DOWNLOADABLE_ASSETS: &str = "no downloadable RGB-related assets on the selected scene";

/// behavior defaults of the tool-op surface
#[derive(Clone,Serialize,Deserialize,Debug)]
pub struct ImageryConfig {
    /// half-width (days) of the scene search window
    pub window_days: u32,

    /// exclusive cloud cover ceiling (percent) applied to optical queries
    pub max_cloud_cover: f64
}

impl Default for ImageryConfig {
    fn default()->Self {
        ImageryConfig {
            window_days: 10,
            max_cloud_cover: 20.0
        }
    }
}

/// what one download attempt of one asset role produced. Produced fresh per attempt,
/// never retried
#[derive(Debug)]
pub enum DownloadOutcome {
    /// asset body was streamed to this local path
    Written( PathBuf ),

    /// role not present on the chosen item - no request was made
    Absent,

    /// server answered with a non-OK status, nothing was written
    Failed( StatusCode )
}

impl fmt::Display for DownloadOutcome {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        match self {
            DownloadOutcome::Written(path) => write!( f, "{}", path.display()),
            DownloadOutcome::Absent => write!( f, "asset absent from this item"),
            DownloadOutcome::Failed(status) => write!( f, "download failed (status code: {})", status.as_u16())
        }
    }
}

/// the asset roles to fetch for a collection/item combination. This is fixed policy, not
/// caller-configurable: SAR always reports both polarizations, optical only attempts the
/// roles the item actually has (in priority order)
pub fn download_roles (collection: Collection, item: &StacItem)->Vec<&'static str> {
    match collection {
        Collection::Sar => SAR_ROLES.to_vec(),
        Collection::Optical => OPTICAL_ROLES.iter().filter( |r| item.assets.contains_key(**r)).copied().collect()
    }
}

/// Asset Fetcher: sequentially stream each requested role of the item into
/// `dest_dir/<itemId>_<role>.tif`, collecting a per-role outcome under the uppercase role
/// label. A failed or absent role never aborts the remaining ones, and nothing is retried.
/// Existing files are overwritten in place
pub async fn fetch_assets (client: &Client, item: &StacItem, roles: &[&str], dest_dir: &Path)->Result<Vec<(String,DownloadOutcome)>> {
    ensure_writable_dir( dest_dir)?;

    let mut outcomes: Vec<(String,DownloadOutcome)> = Vec::with_capacity( roles.len());

    for &role in roles {
        let outcome = match item.asset( role) {
            None => DownloadOutcome::Absent,
            Some(asset) => {
                let url = rewrite_storage_href( &asset.href);
                let path = dest_dir.join( format!("{}_{}.tif", item.id, role));
                info!("downloading {} asset '{}'..", item.id, role);

                match get_file_to_path( client, &url, &path).await? {
                    HttpFileResult::Retrieved(len) => {
                        info!("{} kB saved to {}", len / 1024, path.display());
                        DownloadOutcome::Written(path)
                    }
                    HttpFileResult::Status(status) => {
                        warn!("asset '{}' of {} failed with status {}", role, item.id, status);
                        DownloadOutcome::Failed(status)
                    }
                }
            }
        };
        outcomes.push( (role.to_uppercase(), outcome) );
    }

    Ok(outcomes)
}

/// Result Formatter: deterministic line-oriented report - a header naming the collection,
/// one line per role in fetch order, the acquisition timestamp and (optical only) the
/// cloud cover percentage. This string is the sole value surfaced to callers
pub fn format_report (collection: Collection, outcomes: &[(String,DownloadOutcome)], item: &StacItem)->String {
    let mut lines: Vec<String> = Vec::with_capacity( outcomes.len() + 3);
    lines.push( format!("{} download results:", collection));

    for (role,outcome) in outcomes {
        lines.push( format!("  {}: {}", role, outcome));
    }

    let acquired = item.acquired()
        .map( |dt| short_utc_datetime_string(&dt))
        .unwrap_or_else( || "unknown".to_string());
    lines.push( format!("acquired: {}", acquired));

    if collection == Collection::Optical {
        let cloud = item.cloud_cover()
            .map( |v| v.to_string())
            .unwrap_or_else( || "N/A".to_string());
        lines.push( format!("cloud cover: {}%", cloud));
    }

    lines.join("\n")
}

/// report for an empty search window, carrying the window, center date and coordinates
/// that were searched
pub fn format_not_found (summary: &SearchSummary)->String {
    let cloud = match summary.max_cloud_cover {
        Some(lt) => format!(", cloud cover <{lt}%"),
        None => String::new()
    };

    format!("no {} scene found within ±{} days{}\ncenter date: {}, coordinates (lon={}, lat={})",
            summary.collection, summary.window_days, cloud,
            utc_date_string( &summary.center_date), summary.longitude, summary.latitude)
}

/// the full locate → fetch → format pipeline for one query
pub async fn download_imagery (client: &Client, config: &EarthSearchConfig, query: &ImageryQuery, save_dir: &Path)->Result<String> {
    match locate( client, config, query).await? {
        LocateOutcome::NotFound(summary) => Ok( format_not_found( &summary) ),

        LocateOutcome::Selected(selection) => {
            let roles = download_roles( query.collection, &selection.item);
            if roles.is_empty() { // only possible for optical items - SAR roles are fixed
                return Ok( NO_DOWNLOADABLE_ASSETS.to_string() )
            }

            let outcomes = fetch_assets( client, &selection.item, &roles, save_dir).await?;
            Ok( format_report( query.collection, &outcomes, &selection.item) )
        }
    }
}
