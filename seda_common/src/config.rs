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

//! RON config file loading.
//!
//! Config files are resolved against the `SEDA_CONFIG` directory if that env var is set,
//! falling back to a `configs/` dir relative to the process CWD. All config structs carry
//! `Default` impls that preserve stock behavior, so bins can run without any config files
//! present (see `maybe_load_config`)

use std::env;
use std::path::PathBuf;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::fs::filepath_contents_as_string;

const CONFIG_DIR_ENV: &str = "SEDA_CONFIG";
const LOCAL_CONFIG_DIR: &str = "configs";

pub type Result<T> = std::result::Result<T, SedaConfigError>;

#[derive(Error,Debug)]
pub enum SedaConfigError {
    #[error("IO error: {0}")]
    IOError( #[from] std::io::Error),

    #[error("config parse error in {0}: {1}")]
    ConfigParseError( String, String ),

    #[error("no such config file: {0}")]
    NoConfigFile( String )
}

/// directory in which config files are looked up
pub fn config_dir ()->PathBuf {
    match env::var( CONFIG_DIR_ENV) {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => PathBuf::from( LOCAL_CONFIG_DIR)
    }
}

/// load a RON config file from the config dir. It is an error if the file does not exist
pub fn load_config<C> (file_name: &str)->Result<C> where C: DeserializeOwned {
    let path = config_dir().join( file_name);
    if !path.is_file() {
        return Err( SedaConfigError::NoConfigFile( path.display().to_string()) )
    }

    let contents = filepath_contents_as_string( &path)?;
    ron::from_str( &contents).map_err(|e| SedaConfigError::ConfigParseError( file_name.to_string(), e.to_string()))
}

/// load a RON config file if it exists. `Ok(None)` means there was no such file and the
/// caller should fall back to the `Default` impl. Parse errors of existing files still fail
pub fn maybe_load_config<C> (file_name: &str)->Result<Option<C>> where C: DeserializeOwned {
    let path = config_dir().join( file_name);
    if !path.is_file() {
        return Ok(None)
    }

    let contents = filepath_contents_as_string( &path)?;
    ron::from_str( &contents)
        .map( Some)
        .map_err(|e| SedaConfigError::ConfigParseError( file_name.to_string(), e.to_string()))
}
