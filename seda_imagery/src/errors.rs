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

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SedaImageryError>;

#[derive(Error,Debug)]
pub enum SedaImageryError {
    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    #[error("config error {0}")]
    ConfigError( #[from] seda_common::config::SedaConfigError),

    #[error("net error {0}")]
    NetError( #[from] seda_common::net::SedaNetError),

    #[error("catalog error {0}")]
    StacError( #[from] seda_stac::SedaStacError),

    #[error("date parse error {0}")]
    DateError( #[from] chrono::ParseError),

    #[error("http error {0}")]
    HttpError( #[from] reqwest::Error),

    /// a generic error
    #[error("operation failed {0}")]
    OpFailed(String)
}

pub fn op_failed (msg: impl ToString)->SedaImageryError {
    SedaImageryError::OpFailed(msg.to_string())
}
