/*

    Axis Aligned Bounding Box in (center, extents) form.

    This is the conventional box the host engine passes around.
    Growing it goes through min/max every time:
        (center, extents) -> (min, max) -> grow -> (center, extents)
    which is what MinMaxBounds (see bbox.rs) avoids.

    @date: 18 Oct, 2026
    @author: bartu
*/

use std::fmt;

use crate::prelude::*;
use crate::bbox::MinMaxBounds;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    pub center: Vector3,
    pub extents: Vector3, // half of the size along each axis
}

impl Bounds {

    pub fn new(center: Vector3, size: Vector3) -> Self {
        Self {
            center,
            extents: size * 0.5,
        }
    }

    pub fn from_center_extents(center: Vector3, extents: Vector3) -> Self {
        Self {
            center,
            extents,
        }
    }

    pub fn from_min_max(min: Vector3, max: Vector3) -> Self {
        let mut b = Self::default();
        b.set_min_max(min, max);
        b
    }

    #[inline]
    pub fn min(&self) -> Vector3 {
        self.center - self.extents
    }

    #[inline]
    pub fn max(&self) -> Vector3 {
        self.center + self.extents
    }

    #[inline]
    pub fn size(&self) -> Vector3 {
        self.extents * 2.0
    }

    pub fn set_min_max(&mut self, min: Vector3, max: Vector3) {
        self.extents = (max - min) * 0.5;
        self.center = min + self.extents;
    }

    pub fn encapsulate(&mut self, point: Vector3) {
        self.set_min_max(component_min(self.min(), point), component_max(self.max(), point));
    }

    pub fn encapsulate_bounds(&mut self, other: &Bounds) {
        self.encapsulate(other.center - other.extents);
        self.encapsulate(other.center + other.extents);
    }
}

impl From<MinMaxBounds> for Bounds {
    fn from(b: MinMaxBounds) -> Self {
        Self::from_min_max(b.min, b.max)
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Center: {}, Extents: {}", self.center, self.extents)
    }
}
