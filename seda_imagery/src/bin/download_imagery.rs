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

//! direct-invocation surface: run the locate → fetch → format pipeline once for explicit
//! coordinates/date and print the report verbatim

use std::path::Path;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use seda_common::{config::maybe_load_config, datetime::parse_utc_date, net::mk_client};
use seda_imagery::{download_imagery, ImageryConfig, Result};
use seda_stac::{Collection, EarthSearchConfig, ImageryQuery};

#[derive(Parser)]
#[command(about="download the closest Sentinel-1/-2 scene assets for a point and date")]
struct Args {
    /// filename of EarthSearchConfig file (stock config used if not present)
    #[arg(long, default_value="earthsearch.ron")]
    search_config: String,

    /// filename of ImageryConfig file (stock config used if not present)
    #[arg(long, default_value="imagery.ron")]
    imagery_config: String,

    /// collection to download ("sar" or "optical")
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

    /// directory where asset files are stored (created if missing)
    #[arg(long, default_value="downloads")]
    save_dir: String,

    /// half-width of the search window in days (config default if not given)
    #[arg(long)]
    window_days: Option<u32>,

    /// exclusive cloud cover ceiling in percent (optical only, config default if not given)
    #[arg(long)]
    max_cloud_cover: Option<f64>,
}

#[tokio::main]
async fn main ()->Result<()> {
    tracing_subscriber::fmt().with_env_filter( EnvFilter::from_default_env()).init();
    let args = Args::parse();

    let search_config: EarthSearchConfig = maybe_load_config( &args.search_config)?.unwrap_or_default();
    let imagery_config: ImageryConfig = maybe_load_config( &args.imagery_config)?.unwrap_or_default();

    let collection = args.collection.parse::<Collection>()?;
    let query = ImageryQuery {
        longitude: args.lon,
        latitude: args.lat,
        center_date: parse_utc_date( &args.date)?,
        window_days: args.window_days.unwrap_or( imagery_config.window_days),
        collection,
        max_cloud_cover: match collection {
            Collection::Optical => Some( args.max_cloud_cover.unwrap_or( imagery_config.max_cloud_cover)),
            Collection::Sar => None
        }
    };

    let client = mk_client( search_config.request_timeout)?;
    let report = download_imagery( &client, &search_config, &query, Path::new( &args.save_dir)).await?;
    println!("{report}");

    Ok(())
}
