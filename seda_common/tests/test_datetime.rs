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

use chrono::{Datelike, Timelike};
use seda_common::BoundingBox;
use seda_common::datetime::{day_window, parse_utc_date, short_utc_datetime_string, utc_day_end, utc_day_start};

#[test]
fn test_parse_utc_date () {
    let nd = parse_utc_date("2023-06-02").unwrap();
    assert_eq!( (nd.year(), nd.month(), nd.day()), (2023, 6, 2));

    assert!( parse_utc_date("06/02/2023").is_err());
    assert!( parse_utc_date("not-a-date").is_err());
}

#[test]
fn test_day_window_span () {
    // a window of w days has to span exactly 2w+1 calendar days, inclusive of the center date
    for w in [0u32, 1, 10, 30] {
        let center = parse_utc_date("2023-06-02").unwrap();
        let (start, end) = day_window( center, w);

        assert_eq!( (start.hour(), start.minute(), start.second()), (0, 0, 0));
        assert_eq!( (end.hour(), end.minute(), end.second()), (23, 59, 59));

        let spanned_days = (end.date_naive() - start.date_naive()).num_days() + 1;
        assert_eq!( spanned_days, (2 * w + 1) as i64);
    }
}

#[test]
fn test_day_window_endpoints () {
    let center = parse_utc_date("2023-06-02").unwrap();
    let (start, end) = day_window( center, 10);

    assert_eq!( short_utc_datetime_string(&start), "2023-05-23T00:00:00Z");
    assert_eq!( short_utc_datetime_string(&end), "2023-06-12T23:59:59Z");
}

#[test]
fn test_day_bounds () {
    let nd = parse_utc_date("2024-02-29").unwrap(); // leap day
    assert_eq!( short_utc_datetime_string( &utc_day_start(nd)), "2024-02-29T00:00:00Z");
    assert_eq!( short_utc_datetime_string( &utc_day_end(nd)), "2024-02-29T23:59:59Z");
}

#[test]
fn test_bounding_box_from_center () {
    let bbox = BoundingBox::from_center( 129.075, 35.1796, 0.2);
    let wsen = bbox.to_wsen_array();

    assert!( (wsen[0] - 128.875).abs() < 1e-9);
    assert!( (wsen[1] - 34.9796).abs() < 1e-9);
    assert!( (wsen[2] - 129.275).abs() < 1e-9);
    assert!( (wsen[3] - 35.3796).abs() < 1e-9);

    let (lon, lat) = bbox.center();
    assert!( (lon - 129.075).abs() < 1e-9 && (lat - 35.1796).abs() < 1e-9);
}
