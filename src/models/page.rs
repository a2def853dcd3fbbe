use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A wiki page with its geographic location, as returned by geosearch.
///
/// `page_id` is the string form of the upstream numeric id; views maps are
/// keyed the same way so the two sides always join cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WikiPage {
    pub page_id: String,
    pub title: String,
    pub lat: f64,
    pub lon: f64,
}

/// Summed view counts keyed by page id.
pub type PageViews = HashMap<String, u64>;

/// A rectangular geographic region in the upstream
/// `south,west,north,east` comma form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

#[derive(Debug, Error, PartialEq)]
pub enum BoundingBoxError {
    #[error("bounding box needs 4 comma-separated coordinates, got {0}")]
    WrongCount(usize),
    #[error("invalid coordinate '{0}'")]
    BadCoordinate(String),
}

impl FromStr for BoundingBox {
    type Err = BoundingBoxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() != 4 {
            return Err(BoundingBoxError::WrongCount(parts.len()));
        }

        let mut coords = [0f64; 4];
        for (slot, part) in coords.iter_mut().zip(&parts) {
            *slot = part
                .trim()
                .parse()
                .map_err(|_| BoundingBoxError::BadCoordinate(part.to_string()))?;
        }

        Ok(BoundingBox {
            south: coords[0],
            west: coords[1],
            north: coords[2],
            east: coords[3],
        })
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.south, self.west, self.north, self.east)
    }
}
