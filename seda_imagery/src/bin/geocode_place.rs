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

use seda_common::config::maybe_load_config;
use seda_imagery::Result;
use seda_imagery::geocode::{format_geocode_outcome, geocode, GeocodeConfig};

#[derive(Parser)]
#[command(about="resolve a free-text place description to coordinates")]
struct Args {
    /// filename of GeocodeConfig file (stock config used if not present)
    #[arg(long, default_value="geocode.ron")]
    config: String,

    /// the place description, e.g. "Gwangan Bridge, Busan"
    location: Vec<String>,
}

#[tokio::main]
async fn main ()->Result<()> {
    tracing_subscriber::fmt().with_env_filter( EnvFilter::from_default_env()).init();
    let args = Args::parse();

    let config: GeocodeConfig = maybe_load_config( &args.config)?.unwrap_or_default();
    let location_text = args.location.join(" ");

    let outcome = geocode( &config, &location_text).await;
    println!("{}", format_geocode_outcome( &location_text, &outcome));

    Ok(())
}
