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

use clap::Parser;
use tracing_subscriber::EnvFilter;

use seda_common::{config::maybe_load_config, datetime::parse_utc_date, net::mk_client};
use seda_stac::{
    search_items, search_summary, resolve_candidates, Collection, EarthSearchConfig,
    ImageryQuery, LocateOutcome, Result, SearchRequest
};

#[derive(Parser)]
#[command(about="search the Earth Search catalog for Sentinel scenes around a point/date")]
struct Args {
    /// filename of EarthSearchConfig file (stock config used if not present)
    #[arg(long, default_value="earthsearch.ron")]
    config: String,

    /// collection to search ("sar" or "optical")
    #[arg(long, default_value="sar")]
    collection: String,

    /// center longitude (degrees)
    #[arg(long, allow_hyphen_values=true)]
    lon: f64,

    /// center latitude (degrees)
    #[arg(long, allow_hyphen_values=true)]
    lat: f64,

    /// center date (YYYY-MM-DD, UTC)
    #[arg(long)]
    date: String,

    /// half-width of the search window in days
    #[arg(long, default_value_t=10)]
    window_days: u32,

    /// exclusive cloud cover ceiling in percent (optical only)
    #[arg(long)]
    max_cloud_cover: Option<f64>,
}

#[tokio::main]
async fn main ()->Result<()> {
    tracing_subscriber::fmt().with_env_filter( EnvFilter::from_default_env()).init();
    let args = Args::parse();

    let config: EarthSearchConfig = maybe_load_config( &args.config)?.unwrap_or_default();

    let query = ImageryQuery {
        longitude: args.lon,
        latitude: args.lat,
        center_date: parse_utc_date( &args.date)?,
        window_days: args.window_days,
        collection: args.collection.parse::<Collection>()?,
        max_cloud_cover: args.max_cloud_cover
    };

    let client = mk_client( config.request_timeout)?;
    let request = SearchRequest::for_query( &config, &query);
    let items = search_items( &client, &config, &request).await?;

    println!("{} candidate items for {} in {}:", items.len(), request.collections[0], request.datetime);
    for item in &items {
        let acquired = item.acquired().map( |dt| dt.to_rfc3339()).unwrap_or_else( || "no timestamp".to_string());
        match item.cloud_cover() {
            Some(cc) => println!("  {} acquired {} cloud {:.1}%", item.id, acquired, cc),
            None => println!("  {} acquired {}", item.id, acquired)
        }
    }

    match resolve_candidates( items, query.center_date, search_summary( &config, &query)) {
        LocateOutcome::Selected(selection) => {
            println!("selected: {} (offset {} s)", selection.item.id, selection.offset_seconds);
        }
        LocateOutcome::NotFound(summary) => {
            println!("no scene found for {} between {} and {} around (lon={}, lat={})",
                     summary.collection_id, summary.start, summary.end, summary.longitude, summary.latitude);
        }
    }

    Ok(())
}
