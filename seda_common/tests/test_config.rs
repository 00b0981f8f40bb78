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

use std::{env, fs};
use serde::Deserialize;
use seda_common::config::{load_config, maybe_load_config, SedaConfigError};

#[derive(Deserialize,Debug,PartialEq)]
struct WindowConfig {
    days: u32
}

/// note this is the single test that mutates the SEDA_CONFIG env var, so there is no
/// interference with concurrently running tests
#[test]
fn test_load_config_from_env_dir () {
    let dir = env::temp_dir().join("seda_config_test");
    fs::create_dir_all( &dir).unwrap();
    fs::write( dir.join("window.ron"), "WindowConfig( days: 3 )").unwrap();
    fs::write( dir.join("broken.ron"), "WindowConfig( days: )").unwrap();

    unsafe { env::set_var( "SEDA_CONFIG", &dir); }

    let config: WindowConfig = load_config("window.ron").unwrap();
    assert_eq!( config, WindowConfig { days: 3 });

    match load_config::<WindowConfig>("no_such.ron") {
        Err(SedaConfigError::NoConfigFile(_)) => {}
        other => panic!("expected NoConfigFile, got {:?}", other)
    }

    // a missing file falls back, a present-but-broken file still fails
    assert!( maybe_load_config::<WindowConfig>("no_such.ron").unwrap().is_none());
    assert!( maybe_load_config::<WindowConfig>("broken.ron").is_err());

    unsafe { env::remove_var( "SEDA_CONFIG"); }
}
