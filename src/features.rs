// features.rs - Human-readable traits of a landscape
//
// Published once as the token's metadata (window.$fxhashFeatures on the
// page). Keys and labels are read by the marketplace, so they are part of
// the output format.
//
// Some tables have gaps: a road height in (0.1, 0.6) or a lane wider than
// 12 never happen with the current draws but would classify as "".

use serde::Serialize;

use crate::classify::{Range, classify};
use crate::params::SceneParameters;

pub const MOUNTAINS: [Range; 4] = [
    Range::new("handful", 50.0, 100.0),
    Range::new("several", 100.0, 250.0),
    Range::new("many", 250.0, 450.0),
    Range::new("countless", 450.0, 500.0),
];

pub const ROAD_HEIGHT: [Range; 4] = [
    Range::new("ground level", 0.0, 0.1),
    Range::new("raised", 0.6, 20.0),
    Range::new("high", 20.0, 50.0),
    Range::new("sky high", 50.0, 60.0),
];

pub const ROAD_WIDTH: [Range; 2] = [Range::new("narrow", 2.0, 6.0), Range::new("wide", 6.0, 12.0)];

pub const GRID_DETAIL: [Range; 3] = [
    Range::new("low", 12.0, 18.0),
    Range::new("average", 18.0, 36.0),
    Range::new("exhaustive", 36.0, 48.0),
];

pub const GRID_LINE_WIDTH: [Range; 3] = [
    Range::new("small", 2.0, 4.0),
    Range::new("medium", 4.0, 10.0),
    Range::new("large", 10.0, 15.0),
];

pub const BLOOM: [Range; 4] = [
    Range::new("dark", 0.2, 0.3),
    Range::new("light", 0.3, 0.5),
    Range::new("glow", 0.5, 0.75),
    Range::new("starlight", 0.75, 0.875),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Features {
    pub mountains: &'static str,
    pub road_height: &'static str,
    pub road_width: &'static str,
    pub color: &'static str,
    pub grid_detail: &'static str,
    pub grid_line_width: &'static str,
    pub bloom: &'static str,
    pub see_through: bool,
}

impl Features {
    pub fn from_params(p: &SceneParameters) -> Self {
        Self {
            mountains: classify(p.mountains as f64, &MOUNTAINS),
            road_height: classify(road_height(p), &ROAD_HEIGHT),
            road_width: classify(p.lane_width as f64, &ROAD_WIDTH),
            color: if p.colorful { "rainbow" } else { "monochrome" },
            grid_detail: classify(p.grid_elements as f64, &GRID_DETAIL),
            grid_line_width: classify(p.grid_line_width as f64, &GRID_LINE_WIDTH),
            bloom: classify(p.bloom_strength, &BLOOM),
            see_through: p.transparent,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Lane brightness scaled by displacement, floored
pub fn road_height(p: &SceneParameters) -> f64 {
    (p.lane_darkness as f64 * p.max_height).floor()
}
