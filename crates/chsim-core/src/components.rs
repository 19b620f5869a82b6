//! Data carried by simulated entities.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::PROXIMITY_WARNING_DISTANCE;
use crate::types::BlipId;

/// A single swan signature approaching the scope center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Blip {
    pub id: BlipId,
    /// Direction from the center, `[0, 360)`.
    pub angle_deg: f64,
    /// 100 = edge, 0 = center.
    pub distance: f64,
    /// Distance lost per tick. Constant for the blip's lifetime.
    pub speed: f64,
}

impl Blip {
    /// Position on the scope in percent of its width, center at (50, 50).
    pub fn display_position(&self) -> DVec2 {
        let rad = self.angle_deg.to_radians();
        DVec2::splat(50.0) + DVec2::new(rad.cos(), rad.sin()) * (self.distance / 2.0)
    }

    /// Whether the swan sprite should face left (heading on the left half).
    pub fn faces_left(&self) -> bool {
        self.angle_deg > 90.0 && self.angle_deg < 270.0
    }

    /// Inside the proximity ring.
    pub fn is_proximate(&self) -> bool {
        self.distance < PROXIMITY_WARNING_DISTANCE
    }
}
