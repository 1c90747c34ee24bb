use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

pub use crate::math::MatrixOrder;

/// Meaning of the `size` argument passed when viewing a buffer as a square matrix.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MatrixSize {
    /// `size` is the total number of elements and must be a perfect square.
    #[default]
    ElementCount,
    /// `size` is the side length; the buffer holds `size * size` elements.
    SideLength,
}

impl FromStr for MatrixSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "element_count" | "elements" => Ok(MatrixSize::ElementCount),
            "side_length" | "side" => Ok(MatrixSize::SideLength),
            _ => Err(format!(
                "Unknown matrix size convention: {}. Expected one of: element_count, side_length",
                s
            )),
        }
    }
}

/// Layout conventions used when turning flat buffers into containers.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(default)]
pub struct MarshalConfig {
    pub matrix_order: MatrixOrder,
    pub matrix_size: MatrixSize,
}

impl MarshalConfig {
    pub fn new(matrix_order: MatrixOrder, matrix_size: MatrixSize) -> Self {
        Self {
            matrix_order,
            matrix_size,
        }
    }

    /// Parse a JSON configuration. Missing fields take their default values.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse marshal configuration")
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config = Self::from_json(&json)
            .with_context(|| format!("Invalid config file: {:?}", path))?;
        log::debug!(
            "Loaded marshal config from {:?}: order={}, size={:?}",
            path,
            config.matrix_order,
            config.matrix_size
        );
        Ok(config)
    }
}
