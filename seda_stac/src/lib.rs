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

//! Earth Search (STAC item-search) catalog client and deterministic scene selection.
//!
//! Given a point, a center date and a ±day window this issues a single first-page search
//! against the configured catalog and picks the one item whose acquisition timestamp is
//! closest to the center date. An empty window is a reportable `NotFound` value, not an error.

use std::collections::HashMap;
use std::str::FromStr;
use std::time::Duration;

use chrono::{DateTime, NaiveDate, Utc};
use reqwest::Client;
use serde::{Serialize,Deserialize};
use serde_json::{Map,Value};
use strum::Display;
use tracing::{debug, info};

use seda_common::{
    BoundingBox,
    datetime::{abs_offset_seconds, day_window, short_utc_datetime_string},
    net::post_json_query
};

mod errors;
pub use errors::*;

/// Earth Search server / query parameters
#[derive(Clone,Serialize,Deserialize,Debug)]
pub struct EarthSearchConfig {
    /// catalog root URL (the item-search endpoint is `{url}/search`)
    pub url: String,

    /// STAC collection id of the Sentinel-1 radar product
    pub sar_collection: String,

    /// STAC collection id of the Sentinel-2 optical product
    pub optical_collection: String,

    /// half-width (degrees) of the search box around the query point
    pub search_radius_deg: f64,

    /// candidate page cap; only the first page is consulted
    pub max_candidates: u32,

    /// optional overall request timeout. `None` leaves catalog queries and downloads unbounded
    pub request_timeout: Option<Duration>
}

impl Default for EarthSearchConfig {
    fn default()->Self {
        EarthSearchConfig {
            url: "https://earth-search.aws.element84.com/v1".to_string(),
            sar_collection: "sentinel-1-grd".to_string(),
            optical_collection: "sentinel-2-l2a".to_string(),
            search_radius_deg: 0.2,
            max_candidates: 50,
            request_timeout: None
        }
    }
}

impl EarthSearchConfig {
    pub fn search_url (&self)->String {
        format!("{}/search", self.url)
    }

    pub fn collection_id (&self, collection: Collection)->&str {
        match collection {
            Collection::Sar => self.sar_collection.as_str(),
            Collection::Optical => self.optical_collection.as_str()
        }
    }
}

/// the two supported imagery product families
#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize,Display)]
pub enum Collection {
    #[strum(to_string="Sentinel-1")]
    Sar,

    #[strum(to_string="Sentinel-2")]
    Optical
}

impl FromStr for Collection {
    type Err = SedaStacError;

    fn from_str (s: &str)->Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "sar" | "s1" | "sentinel-1" => Ok(Collection::Sar),
            "optical" | "s2" | "sentinel-2" => Ok(Collection::Optical),
            other => Err( op_failed( format!("not a known collection: {other}")))
        }
    }
}

/// the immutable inputs of one scene selection / download cycle
#[derive(Debug,Clone)]
pub struct ImageryQuery {
    pub longitude: f64,
    pub latitude: f64,

    /// the UTC calendar date the scene should be closest to
    pub center_date: NaiveDate,

    /// half-width of the search window in days (window spans `2w+1` days)
    pub window_days: u32,

    pub collection: Collection,

    /// exclusive ceiling (percent) on the `eo:cloud_cover` property. Only meaningful for
    /// optical queries - ignored for SAR
    pub max_cloud_cover: Option<f64>
}

/* #region search request / response model ***********************************************************/

/// body of a STAC item-search POST request
#[derive(Serialize,Debug)]
pub struct SearchRequest {
    pub collections: Vec<String>,

    /// `[west,south,east,north]` degrees
    pub bbox: [f64;4],

    /// ISO-8601 `start/end` range
    pub datetime: String,

    pub limit: u32,

    #[serde(skip_serializing_if="Option::is_none")]
    pub query: Option<PropertyFilter>
}

/// server-side item property filter (STAC query extension). The cloud-cover restriction is
/// applied by the catalog, not post-hoc by us
#[derive(Serialize,Debug)]
pub struct PropertyFilter {
    #[serde(rename="eo:cloud_cover")]
    pub cloud_cover: LtFilter
}

#[derive(Serialize,Debug)]
pub struct LtFilter {
    pub lt: f64
}

impl SearchRequest {
    pub fn for_query (config: &EarthSearchConfig, query: &ImageryQuery)->Self {
        let (start,end) = day_window( query.center_date, query.window_days);
        let bbox = BoundingBox::from_center( query.longitude, query.latitude, config.search_radius_deg);

        let filter = match query.collection {
            Collection::Optical => query.max_cloud_cover.map( |lt| PropertyFilter { cloud_cover: LtFilter{lt} }),
            Collection::Sar => None
        };

        SearchRequest {
            collections: vec![ config.collection_id( query.collection).to_string() ],
            bbox: bbox.to_wsen_array(),
            datetime: format!("{}/{}", short_utc_datetime_string(&start), short_utc_datetime_string(&end)),
            limit: config.max_candidates,
            query: filter
        }
    }
}

/// one catalog scene record as returned by item-search. Constructed per search response,
/// read-only, discarded after one selection/download cycle
#[derive(Deserialize,Debug,Clone)]
pub struct StacItem {
    pub id: String,

    #[serde(default)]
    pub properties: Map<String,Value>,

    #[serde(default)]
    pub assets: HashMap<String,StacAsset>
}

impl StacItem {
    /// acquisition timestamp (ISO-8601 UTC `datetime` property)
    pub fn acquired (&self)->Option<DateTime<Utc>> {
        self.properties.get("datetime")
            .and_then( |v| v.as_str())
            .and_then( |s| DateTime::parse_from_rfc3339(s).ok())
            .map( |dt| dt.with_timezone(&Utc))
    }

    pub fn cloud_cover (&self)->Option<f64> {
        self.properties.get("eo:cloud_cover").and_then( |v| v.as_f64())
    }

    pub fn asset (&self, role: &str)->Option<&StacAsset> {
        self.assets.get(role)
    }
}

/// downloadable asset descriptor, owned by its item
#[derive(Deserialize,Debug,Clone)]
pub struct StacAsset {
    pub href: String,

    #[serde(rename="type")]
    pub media_type: Option<String>
}

/// item-search response (GeoJSON FeatureCollection - we only care about the features)
#[derive(Deserialize,Debug)]
pub struct ItemCollection {
    #[serde(default)]
    pub features: Vec<StacItem>
}

/* #endregion search request / response model */

/* #region scene selection ***************************************************************************/

/// the scene chosen for a query, plus the ranking key: absolute offset (seconds) between its
/// acquisition timestamp and the 00:00:00 UTC instant of the query center date
#[derive(Debug,Clone)]
pub struct SceneSelection {
    pub item: StacItem,
    pub offset_seconds: i64
}

/// the search parameters echoed back for reporting, notably in the NotFound case
#[derive(Debug,Clone)]
pub struct SearchSummary {
    pub collection: Collection,
    pub collection_id: String,
    pub center_date: NaiveDate,
    pub window_days: u32,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub longitude: f64,
    pub latitude: f64,
    pub max_cloud_cover: Option<f64>
}

pub fn search_summary (config: &EarthSearchConfig, query: &ImageryQuery)->SearchSummary {
    let (start,end) = day_window( query.center_date, query.window_days);
    SearchSummary {
        collection: query.collection,
        collection_id: config.collection_id( query.collection).to_string(),
        center_date: query.center_date,
        window_days: query.window_days,
        start, end,
        longitude: query.longitude,
        latitude: query.latitude,
        max_cloud_cover: if query.collection == Collection::Optical { query.max_cloud_cover } else { None }
    }
}

/// a valid, reportable locate outcome - an empty window is not an error
#[derive(Debug)]
pub enum LocateOutcome {
    Selected( SceneSelection ),
    NotFound( SearchSummary )
}

// items without acquisition timestamp rank after every finite offset
const NO_TIMESTAMP_RANK: i64 = i64::MAX;

/// pick the item with the minimum time offset to the center date. Ties resolve to the
/// earliest-returned item (catalog response order)
pub fn select_scene (items: Vec<StacItem>, center: NaiveDate)->Option<SceneSelection> {
    let mut best: Option<(i64,StacItem)> = None;

    for item in items {
        let offset = item.acquired()
            .map( |dt| abs_offset_seconds( &dt, center))
            .unwrap_or( NO_TIMESTAMP_RANK);

        let is_better = match &best {
            Some((best_offset,_)) => offset < *best_offset, // strict '<' keeps the first-encountered on ties
            None => true
        };
        if is_better {
            best = Some((offset,item))
        }
    }

    best.map( |(offset_seconds,item)| SceneSelection { item, offset_seconds })
}

/// pure selection step, split from `locate` so both the empty and the selection path can be
/// exercised without a catalog server
pub fn resolve_candidates (items: Vec<StacItem>, center: NaiveDate, summary: SearchSummary)->LocateOutcome {
    match select_scene( items, center) {
        Some(selection) => {
            info!("selected {} at offset {} s", selection.item.id, selection.offset_seconds);
            LocateOutcome::Selected(selection)
        }
        None => LocateOutcome::NotFound(summary)
    }
}

/// issue one first-page item-search and return the (possibly empty) candidate list
pub async fn search_items (client: &Client, config: &EarthSearchConfig, request: &SearchRequest)->Result<Vec<StacItem>> {
    let response: ItemCollection = post_json_query( client, &config.search_url(), request).await?;
    Ok( response.features )
}

/// Scene Locator: single paginated search (first page only), then deterministic
/// closest-in-time selection
pub async fn locate (client: &Client, config: &EarthSearchConfig, query: &ImageryQuery)->Result<LocateOutcome> {
    let request = SearchRequest::for_query( config, query);
    debug!("item-search request {:?}", request);

    let items = search_items( client, config, &request).await?;
    info!("{} candidate {} items in {}", items.len(), config.collection_id( query.collection), request.datetime);

    Ok( resolve_candidates( items, query.center_date, search_summary( config, query)) )
}

/* #endregion scene selection */
