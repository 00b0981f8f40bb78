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

//! common utility functions for network operations

use std::{fs::File, io::Write, path::Path, time::Duration};
use reqwest::{header::{HeaderValue,CONTENT_TYPE}, Client, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SedaNetError>;

#[derive(Error,Debug)]
pub enum SedaNetError {
    #[error("IO error: {0}")]
    IOError( #[from] std::io::Error),

    #[error("http error: {0}")]
    HttpError( #[from] reqwest::Error),

    #[error("operation failed: {0}")]
    OpFailed(String),

    #[error("parse error: {0}")]
    ParseError(String)
}

/// create a shared reqwest Client with an optional overall request timeout.
/// No timeout means a hung transfer blocks the calling context indefinitely
pub fn mk_client (timeout: Option<Duration>)->Result<Client> {
    let mut builder = Client::builder();
    if let Some(dur) = timeout {
        builder = builder.timeout( dur);
    }
    builder.build().map_err(|e| e.into())
}

/// what a status-aware file retrieval produced. Non-2xx responses are values here, not errors -
/// callers report them per request and move on
#[derive(Debug)]
pub enum HttpFileResult {
    /// number of content bytes written to the destination path
    Retrieved(u64),
    /// server answered with a non-OK status, nothing was written
    Status(StatusCode)
}

/// streaming HTTP GET to an explicit destination path. On a 200 the body is written to the
/// (truncated) destination file chunk by chunk as received. Any other status is returned as
/// a `HttpFileResult::Status` without touching the destination. Transport and IO failures
/// are the only errors
pub async fn get_file_to_path (client: &Client, url: &str, path: impl AsRef<Path>)->Result<HttpFileResult> {
    let mut response = client.get(url).send().await?;

    match response.status() {
        StatusCode::OK => {
            let mut file = File::create( path.as_ref())?;
            let mut len: u64 = 0;

            while let Some(chunk) = response.chunk().await? {
                len += chunk.len() as u64;
                file.write_all(&chunk)?;
            }
            file.flush()?;

            Ok( HttpFileResult::Retrieved(len) )
        }
        other => Ok( HttpFileResult::Status(other) )
    }
}

/// JSON-in/JSON-out POST query
pub async fn post_json_query<T,U> (client: &Client, url: &str, data: &T)->Result<U>
    where T: Serialize, U: DeserializeOwned
{
    let response = client.post( url)
        .header( CONTENT_TYPE, HeaderValue::from_static("application/json"))
        .json( data)
        .send().await?;

    match response.status() {
        StatusCode::OK => from_json( response).await,
        other => Err( SedaNetError::OpFailed( format!("response status {other:?} for {url}")) )
    }
}

pub async fn from_json<T> (response: reqwest::Response)->Result<T> where T: DeserializeOwned {
    let bytes = response.bytes().await?;
    serde_json::from_slice( &bytes).map_err(|e| SedaNetError::ParseError(e.to_string()))
}
