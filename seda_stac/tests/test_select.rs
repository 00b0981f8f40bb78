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

use chrono::{TimeZone, Utc};
use seda_common::datetime::parse_utc_date;
use seda_stac::{
    resolve_candidates, search_summary, select_scene, Collection, EarthSearchConfig,
    ImageryQuery, ItemCollection, LocateOutcome, StacItem
};

/* #region test-data *************************************************************/

/// abridged Earth Search item-search response: two Sentinel-1 GRD scenes bracketing
/// a 2023-06-02 center date
const SEARCH_RESPONSE: &'static str = r#"{
  "type": "FeatureCollection",
  "features": [
    {
      "type": "Feature",
      "stac_version": "1.0.0",
      "id": "S1A_IW_GRDH_1SDV_20230528T092942_058724_Q1",
      "collection": "sentinel-1-grd",
      "properties": {
        "datetime": "2023-05-28T09:29:42Z",
        "platform": "sentinel-1a",
        "sar:instrument_mode": "IW",
        "sar:polarizations": ["VV", "VH"]
      },
      "assets": {
        "vv": {
          "href": "s3://sentinel-s1-l1c/GRD/2023/5/28/IW/DV/measurement/iw-vv.tiff",
          "type": "image/tiff; application=geotiff"
        },
        "vh": {
          "href": "s3://sentinel-s1-l1c/GRD/2023/5/28/IW/DV/measurement/iw-vh.tiff",
          "type": "image/tiff; application=geotiff"
        }
      }
    },
    {
      "type": "Feature",
      "stac_version": "1.0.0",
      "id": "S1A_IW_GRDH_1SDV_20230605T092943_058841_Q2",
      "collection": "sentinel-1-grd",
      "properties": {
        "datetime": "2023-06-05T09:29:43Z",
        "platform": "sentinel-1a",
        "sar:instrument_mode": "IW",
        "sar:polarizations": ["VV", "VH"]
      },
      "assets": {
        "vv": {
          "href": "s3://sentinel-s1-l1c/GRD/2023/6/5/IW/DV/measurement/iw-vv.tiff",
          "type": "image/tiff; application=geotiff"
        },
        "vh": {
          "href": "s3://sentinel-s1-l1c/GRD/2023/6/5/IW/DV/measurement/iw-vh.tiff",
          "type": "image/tiff; application=geotiff"
        }
      }
    }
  ]
}"#;

fn parse_items ()->Vec<StacItem> {
    let response: ItemCollection = serde_json::from_str( SEARCH_RESPONSE).unwrap();
    response.features
}

fn item_with_datetime (id: &str, dt: &str)->StacItem {
    let json = format!( r#"{{ "id": "{id}", "properties": {{ "datetime": "{dt}" }}, "assets": {{}} }}"#);
    serde_json::from_str( &json).unwrap()
}

fn item_without_datetime (id: &str)->StacItem {
    let json = format!( r#"{{ "id": "{id}", "properties": {{}}, "assets": {{}} }}"#);
    serde_json::from_str( &json).unwrap()
}

/* #endregion test-data */

#[test]
fn test_parse_item_collection () {
    let items = parse_items();
    assert_eq!( items.len(), 2);

    let first = &items[0];
    assert_eq!( first.id, "S1A_IW_GRDH_1SDV_20230528T092942_058724_Q1");
    assert_eq!( first.acquired().unwrap(), Utc.with_ymd_and_hms( 2023, 5, 28, 9, 29, 42).unwrap());
    assert!( first.cloud_cover().is_none());

    let vv = first.asset("vv").unwrap();
    assert!( vv.href.starts_with("s3://sentinel-s1-l1c/"));
    assert!( first.asset("visual").is_none());
}

#[test]
fn test_select_closest_scene () {
    // center 2023-06-02: the 06-05 scene (3 days off) has to win over the 05-28 scene (5 days off)
    let center = parse_utc_date("2023-06-02").unwrap();
    let selection = select_scene( parse_items(), center).unwrap();

    assert_eq!( selection.item.id, "S1A_IW_GRDH_1SDV_20230605T092943_058841_Q2");

    // offset is measured against 00:00:00Z of the center date
    let expected = (Utc.with_ymd_and_hms( 2023, 6, 5, 9, 29, 43).unwrap()
                    - Utc.with_ymd_and_hms( 2023, 6, 2, 0, 0, 0).unwrap()).num_seconds();
    assert_eq!( selection.offset_seconds, expected);
}

#[test]
fn test_select_tie_first_encountered_wins () {
    let center = parse_utc_date("2023-06-02").unwrap();
    let items = vec![
        item_with_datetime( "first", "2023-06-03T10:00:00Z"),
        item_with_datetime( "second", "2023-06-03T10:00:00Z")
    ];

    let selection = select_scene( items, center).unwrap();
    assert_eq!( selection.item.id, "first");
}

#[test]
fn test_select_missing_timestamp_ranks_last () {
    let center = parse_utc_date("2023-06-02").unwrap();
    let items = vec![
        item_without_datetime( "undated"),
        item_with_datetime( "dated", "2023-06-30T00:00:00Z") // four weeks off, still beats undated
    ];

    let selection = select_scene( items, center).unwrap();
    assert_eq!( selection.item.id, "dated");
}

#[test]
fn test_select_empty_is_none () {
    let center = parse_utc_date("2023-06-02").unwrap();
    assert!( select_scene( Vec::new(), center).is_none());
}

#[test]
fn test_empty_result_is_not_found_with_window () {
    let config = EarthSearchConfig::default();
    let query = ImageryQuery {
        longitude: 129.075,
        latitude: 35.1796,
        center_date: parse_utc_date("2023-06-02").unwrap(),
        window_days: 10,
        collection: Collection::Sar,
        max_cloud_cover: None
    };

    let outcome = resolve_candidates( Vec::new(), query.center_date, search_summary( &config, &query));
    match outcome {
        LocateOutcome::NotFound(summary) => {
            // NotFound has to carry the exact window and coordinates that were searched
            assert_eq!( summary.start, Utc.with_ymd_and_hms( 2023, 5, 23, 0, 0, 0).unwrap());
            assert_eq!( summary.end, Utc.with_ymd_and_hms( 2023, 6, 12, 23, 59, 59).unwrap());
            assert_eq!( summary.collection_id, "sentinel-1-grd");
            assert_eq!( summary.window_days, 10);
            assert_eq!( summary.longitude, 129.075);
            assert_eq!( summary.latitude, 35.1796);
            assert!( summary.max_cloud_cover.is_none());
        }
        LocateOutcome::Selected(selection) => panic!("unexpected selection {:?}", selection.item.id)
    }
}
