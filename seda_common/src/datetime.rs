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

//! date/time helpers for UTC day granularity catalog queries

use chrono::{DateTime, Days, NaiveDate, NaiveDateTime, NaiveTime, ParseError, Utc};

/// parse a plain `YYYY-MM-DD` date that is supposed to be in UTC
pub fn parse_utc_date (s: &str)->Result<NaiveDate,ParseError> {
    NaiveDate::parse_from_str( s, "%Y-%m-%d")
}

/// get the 00:00:00 UTC instant of given date
pub fn utc_day_start (nd: NaiveDate)->DateTime<Utc> {
    let nt = NaiveTime::from_hms_opt(0, 0, 0).unwrap(); // 00:00:00 can't fail
    NaiveDateTime::new( nd, nt).and_utc()
}

/// get the 23:59:59 UTC instant of given date (inclusive day end at second granularity)
pub fn utc_day_end (nd: NaiveDate)->DateTime<Utc> {
    let nt = NaiveTime::from_hms_opt(23, 59, 59).unwrap();
    NaiveDateTime::new( nd, nt).and_utc()
}

/// inclusive `[center - days @ 00:00:00Z, center + days @ 23:59:59Z]` window around a date.
/// A window of `days = w` spans exactly `2w+1` calendar days
pub fn day_window (center: NaiveDate, days: u32)->(DateTime<Utc>,DateTime<Utc>) {
    let d = Days::new( days as u64);
    ( utc_day_start( center - d), utc_day_end( center + d) )
}

/// seconds between an instant and the 00:00:00 UTC start of a reference date, absolute value
pub fn abs_offset_seconds (dt: &DateTime<Utc>, center: NaiveDate)->i64 {
    (*dt - utc_day_start(center)).num_seconds().abs()
}

pub fn short_utc_datetime_string (dt: &DateTime<Utc>)->String {
    format!("{}", dt.format("%Y-%m-%dT%H:%M:%SZ"))
}

pub fn utc_date_string (nd: &NaiveDate)->String {
    format!("{}", nd.format("%Y-%m-%d"))
}
