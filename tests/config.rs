//! Integration tests for MarshalConfig defaults, parsing and file loading.

use std::str::FromStr;

use pycol_marshal::{MarshalConfig, MatrixOrder, MatrixSize};

#[test]
fn config_default_values() {
    let cfg = MarshalConfig::default();
    assert_eq!(cfg.matrix_order, MatrixOrder::RowMajor);
    assert_eq!(cfg.matrix_size, MatrixSize::ElementCount);
}

#[test]
fn matrix_order_from_str() {
    assert_eq!(MatrixOrder::from_str("row_major").unwrap(), MatrixOrder::RowMajor);
    assert_eq!(MatrixOrder::from_str("Column-Major").unwrap(), MatrixOrder::ColumnMajor);
    assert_eq!(MatrixOrder::from_str("F").unwrap(), MatrixOrder::ColumnMajor);
    assert!(MatrixOrder::from_str("diagonal").is_err());
}

#[test]
fn matrix_size_from_str() {
    assert_eq!(MatrixSize::from_str("side_length").unwrap(), MatrixSize::SideLength);
    assert_eq!(MatrixSize::from_str("element-count").unwrap(), MatrixSize::ElementCount);
    assert!(MatrixSize::from_str("rows").is_err());
}

#[test]
fn config_serializes_to_json() {
    let json = serde_json::to_string(&MarshalConfig::default()).unwrap();
    assert!(json.contains("\"matrix_order\":\"row_major\""));
    assert!(json.contains("\"matrix_size\":\"element_count\""));
}

#[test]
fn partial_json_fills_defaults() {
    let cfg = MarshalConfig::from_json(r#"{ "matrix_order": "column_major" }"#).unwrap();
    assert_eq!(cfg.matrix_order, MatrixOrder::ColumnMajor);
    assert_eq!(cfg.matrix_size, MatrixSize::ElementCount);
}

#[test]
fn unknown_order_in_json_errors() {
    assert!(MarshalConfig::from_json(r#"{ "matrix_order": "diagonal" }"#).is_err());
}

#[test]
fn config_loads_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("marshal.json");
    let cfg = MarshalConfig::new(MatrixOrder::ColumnMajor, MatrixSize::SideLength);
    std::fs::write(&path, serde_json::to_string_pretty(&cfg).unwrap()).unwrap();

    let loaded = MarshalConfig::from_file(&path).unwrap();
    assert_eq!(loaded, cfg);
}

#[test]
fn missing_config_file_errors() {
    let err = MarshalConfig::from_file("/nonexistent/marshal.json").unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}
