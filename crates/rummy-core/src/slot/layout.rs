use serde::{Deserialize, Serialize};

const DEFAULT_RADIUS: f32 = 2.0;
const DEFAULT_SPREAD_DEGREES: f32 = 180.0;
/// Each card sits slightly below the previous one so later cards draw on top.
const STACK_STEP: f32 = 0.01;

/// Fan parameters for drawing a slot's cards around its pivot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlotLayout {
    pub start_angle: f32,
    pub radius: f32,
    pub angle_spread: f32,
}

impl Default for SlotLayout {
    fn default() -> Self {
        Self {
            start_angle: 0.0,
            radius: DEFAULT_RADIUS,
            angle_spread: DEFAULT_SPREAD_DEGREES,
        }
    }
}

/// Offset of one card from the slot pivot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Placement {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl SlotLayout {
    pub fn placements(&self, count: usize) -> Vec<Placement> {
        if count == 0 {
            return Vec::new();
        }
        let delta = self.angle_spread / count as f32;
        (0..count)
            .map(|i| {
                let angle = (self.start_angle + i as f32 * delta).to_radians();
                Placement {
                    x: self.radius * angle.cos(),
                    y: -STACK_STEP * i as f32,
                    z: self.radius * angle.sin(),
                }
            })
            .collect()
    }
}
