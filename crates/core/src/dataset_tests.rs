// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::collections::HashSet;

#[test]
fn equality_is_by_id_only() {
    let a = Dataset::new(3, "2019 October/GitHub");
    let b = Dataset::new(3, "renamed");
    let c = Dataset::new(4, "2019 October/GitHub");
    assert_eq!(a, b);
    assert_ne!(a, c);

    let set: HashSet<Dataset> = [a, b, c].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn display_shows_id_and_name() {
    let dataset = Dataset::new(12, "2015 September/GitHub");
    assert_eq!(dataset.to_string(), "12, 2015 September/GitHub");
}

#[test]
fn dataset_id_parses_decimal_strings() {
    assert_eq!("17".parse::<DatasetId>().unwrap(), DatasetId::new(17));
    assert_eq!(" 8 ".parse::<DatasetId>().unwrap().get(), 8);
    assert!("x7".parse::<DatasetId>().is_err());
    assert!("-1".parse::<DatasetId>().is_err());
}

#[test]
fn serializes_id_transparently() {
    let json = serde_json::to_string(&Dataset::new(5, "small")).unwrap();
    assert_eq!(json, r#"{"id":5,"name":"small"}"#);
}
