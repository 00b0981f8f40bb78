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

//! common filesystem helpers

use std::fs::{self, File};
use std::io::{self, ErrorKind, Read};
use std::path::Path;

pub type Result<T> = io::Result<T>;

/// check if dir pathname exists and is writable, try to create dir (including missing
/// parents) otherwise. Idempotent
pub fn ensure_writable_dir (path: impl AsRef<Path>)->Result<()> {
    let path = path.as_ref();
    if path.is_dir() {
        let md = fs::metadata(path)?;
        if md.permissions().readonly() {
            Err( io::Error::new( ErrorKind::PermissionDenied, format!("output dir {:?} not writable", path)) )
        } else {
            Ok(())
        }
    } else {
        fs::create_dir_all(path)
    }
}

pub fn filepath_contents_as_string (path: impl AsRef<Path>)->Result<String> {
    let mut file = File::open( path.as_ref())?;
    let mut contents = String::new();
    file.read_to_string( &mut contents)?;
    Ok(contents)
}

pub fn file_length (path: impl AsRef<Path>)->Option<u64> {
    fs::metadata(path).ok().map( |meta| meta.len())
}
