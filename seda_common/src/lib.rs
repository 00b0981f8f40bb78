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

use serde::{Serialize,Deserialize};

pub mod config;
pub mod datetime;
pub mod fs;
pub mod net;
pub mod s3;

/// a geographic bounding box in plain WGS84 degrees, west/south/east/north order
#[derive(Debug,Copy,Clone,Serialize,Deserialize,PartialEq)]
pub struct BoundingBox {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64
}

impl BoundingBox {
    pub fn new (west: f64, south: f64, east: f64, north: f64)->Self {
        BoundingBox { west, south, east, north }
    }

    /// box of given half-width (degrees) centered on a lon/lat point
    pub fn from_center (lon: f64, lat: f64, half_width: f64)->Self {
        BoundingBox {
            west: lon - half_width,
            south: lat - half_width,
            east: lon + half_width,
            north: lat + half_width
        }
    }

    /// `[west,south,east,north]` array as used by catalog bbox query parameters
    pub fn to_wsen_array (&self)->[f64;4] {
        [self.west, self.south, self.east, self.north]
    }

    pub fn center (&self)->(f64,f64) {
        ( (self.west + self.east) / 2.0, (self.south + self.north) / 2.0 )
    }
}
