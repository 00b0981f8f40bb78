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

//! support functions for AWS S3 object hrefs
//!
//! catalog assets frequently use `s3://bucket/key` storage URIs. The buckets in question are
//! publicly readable so we do not need an S3 client - the objects can be fetched through the
//! virtual-hosted-style HTTPS endpoint

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // [bucket, key]
    static ref S3_HREF_RE: Regex = Regex::new( r"^s3://([^/]+)/(.+)$").unwrap();
}

pub fn is_object_store_href (href: &str)->bool {
    S3_HREF_RE.is_match( href)
}

/// rewrite a `s3://bucket/key` href into the equivalent `https://bucket.s3.amazonaws.com/key`
/// URL. Hrefs that are not in the object-store scheme (notably ones that already are
/// `http(s)://`) pass through unchanged, which makes this idempotent
pub fn rewrite_storage_href (href: &str)->String {
    if let Some(cap) = S3_HREF_RE.captures( href) {
        format!("https://{}.s3.amazonaws.com/{}", &cap[1], &cap[2])
    } else {
        href.to_string()
    }
}
