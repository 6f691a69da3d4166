/*

    Axis Aligned Bounding Box in (min, max) form.

    History bookkeeping calls encapsulate() a lot. Doing that on
    (center, extents) converts to (min, max) and back on every call,
    so we keep the corners directly instead.

    Default is min = max = (0, 0, 0), a valid zero volume box at
    the origin. Note that growing it keeps the origin inside, use
    from_point() or from_points() to start somewhere else.

    NaN coordinates follow component_min / component_max, i.e. they
    are ignored whenever the other side is a number.

    @date: 18 Oct, 2026
    @author: bartu
*/

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::prelude::*;
use crate::aabb::Bounds;

#[derive(Debug, Clone, Copy, Default)]
pub struct MinMaxBounds {
    pub min: Vector3,
    pub max: Vector3,
}

impl MinMaxBounds {

    pub const fn new(min: Vector3, max: Vector3) -> Self {
        Self {
            min,
            max,
        }
    }

    pub const fn from_point(point: Vector3) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Smallest box holding every point, None if there are none.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Vector3>,
    {
        let mut iter = points.into_iter();
        let mut bounds = Self::from_point(iter.next()?);
        for p in iter {
            bounds.encapsulate(p);
        }
        Some(bounds)
    }

    #[inline(always)]
    pub fn encapsulate(&mut self, point: Vector3) {
        self.min = component_min(self.min, point);
        self.max = component_max(self.max, point);
    }

    pub fn encapsulate_bounds(&mut self, other: &MinMaxBounds) {
        self.encapsulate(other.min);
        self.encapsulate(other.max);
    }

    pub fn equals_bounds(&self, other: &Bounds) -> bool {
        equals_bounds(self, other)
    }

    /// 17 / 23 rolling combine of min and max.
    pub fn hash_code(&self) -> i32 {
        let mut hash: i32 = 17;
        hash = hash.wrapping_mul(23).wrapping_add(vector_hash(self.min));
        hash = hash.wrapping_mul(23).wrapping_add(vector_hash(self.max));
        hash
    }
}

/// Compare against the (center, extents) box through its derived corners.
pub fn equals_bounds(extent: &MinMaxBounds, other: &Bounds) -> bool {
    vector_eq(extent.min, other.min()) && vector_eq(extent.max, other.max())
}

// Exact per coordinate like Bounds, but NaN == NaN so that Eq holds
impl PartialEq for MinMaxBounds {
    fn eq(&self, other: &Self) -> bool {
        vector_eq(self.min, other.min) && vector_eq(self.max, other.max)
    }
}

impl Eq for MinMaxBounds {}

impl PartialEq<Bounds> for MinMaxBounds {
    fn eq(&self, other: &Bounds) -> bool {
        equals_bounds(self, other)
    }
}

impl PartialEq<MinMaxBounds> for Bounds {
    fn eq(&self, other: &MinMaxBounds) -> bool {
        equals_bounds(other, self)
    }
}

impl Hash for MinMaxBounds {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

impl From<Bounds> for MinMaxBounds {
    fn from(b: Bounds) -> Self {
        Self::new(b.min(), b.max())
    }
}

impl fmt::Display for MinMaxBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.min, self.max)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::collections::hash_map::DefaultHasher;
    use rand::Rng;

    fn random_point(rng: &mut impl Rng) -> Vector3 {
        Vector3::new(
            rng.random_range(-100.0..100.0),
            rng.random_range(-100.0..100.0),
            rng.random_range(-100.0..100.0),
        )
    }

    fn random_bounds(rng: &mut impl Rng) -> MinMaxBounds {
        let a = random_point(rng);
        let b = random_point(rng);
        MinMaxBounds::new(component_min(a, b), component_max(a, b))
    }

    fn std_hash(b: &MinMaxBounds) -> u64 {
        let mut h = DefaultHasher::new();
        b.hash(&mut h);
        h.finish()
    }

    #[test]
    fn test_default_is_origin() {
        let b = MinMaxBounds::default();
        assert_eq!(b.min, Vector3::ZERO);
        assert_eq!(b.max, Vector3::ZERO);
    }

    #[test]
    fn test_encapsulate_scenario() {
        let mut b = MinMaxBounds::default();

        b.encapsulate(Vector3::new(2.0, -1.0, 5.0));
        assert_eq!(b, MinMaxBounds::new(Vector3::new(0.0, -1.0, 0.0), Vector3::new(2.0, 0.0, 5.0)));

        b.encapsulate(Vector3::new(-3.0, 0.0, 0.0));
        assert_eq!(b, MinMaxBounds::new(Vector3::new(-3.0, -1.0, 0.0), Vector3::new(2.0, 0.0, 5.0)));
    }

    #[test]
    fn test_same_point_twice() {
        let mut b = MinMaxBounds::default();
        let p = Vector3::new(4.0, 4.0, -4.0);
        b.encapsulate(p);
        let once = b;
        b.encapsulate(p);
        assert_eq!(b, once);
    }

    #[test]
    fn test_growth_contains_point_and_previous() {
        let mut rng = rand::rng();
        for _ in 0..1000 {
            let before = random_bounds(&mut rng);
            let p = random_point(&mut rng);
            let mut after = before;
            after.encapsulate(p);

            assert!(after.min.cmple(p).all() && p.cmple(after.max).all());
            assert!(after.min.cmple(before.min).all());
            assert!(after.max.cmpge(before.max).all());
        }
    }

    #[test]
    fn test_point_inside_is_noop() {
        let mut rng = rand::rng();
        for _ in 0..1000 {
            let mut b = random_bounds(&mut rng);
            let t = Vector3::new(rng.random(), rng.random(), rng.random());
            let inside = b.min + (b.max - b.min) * t;
            let inside = component_max(b.min, component_min(b.max, inside));
            let before = b;
            b.encapsulate(inside);
            assert_eq!(b, before);
        }
    }

    #[test]
    fn test_merge_order_does_not_matter() {
        let mut rng = rand::rng();
        for _ in 0..1000 {
            let b = random_bounds(&mut rng);
            let other = random_bounds(&mut rng);

            let mut merged = b;
            merged.encapsulate_bounds(&other);

            let mut max_first = b;
            max_first.encapsulate(other.max);
            max_first.encapsulate(other.min);
            assert_eq!(merged, max_first);

            // smallest box holding both
            assert_eq!(merged.min, component_min(b.min, other.min));
            assert_eq!(merged.max, component_max(b.max, other.max));
        }
    }

    #[test]
    fn test_equals_unit_bounds() {
        let unit = Bounds::from_center_extents(Vector3::ZERO, Vector3::ONE);
        let b = MinMaxBounds::new(Vector3::splat(-1.0), Vector3::ONE);
        assert!(equals_bounds(&b, &unit));
        assert!(b.equals_bounds(&unit));
        assert!(b == unit);
        assert!(unit == b);

        let shifted = Bounds::from_center_extents(Vector3::new(0.5, 0.0, 0.0), Vector3::ONE);
        assert!(b != shifted);
    }

    #[test]
    fn test_grows_like_bounds() {
        let mut conventional = Bounds::default();
        let mut b = MinMaxBounds::default();
        for p in [Vector3::new(2.0, -1.0, 5.0), Vector3::new(-3.0, 0.0, 0.0)] {
            conventional.encapsulate(p);
            b.encapsulate(p);
        }
        assert!(b == conventional);
        assert_eq!(MinMaxBounds::from(conventional), b);
        assert_eq!(Bounds::from(b), conventional);
    }

    #[test]
    fn test_hash_matches_equality() {
        let mut rng = rand::rng();
        for _ in 0..1000 {
            let b = random_bounds(&mut rng);
            let copy = MinMaxBounds::new(b.min, b.max);
            assert_eq!(b, copy);
            assert_eq!(b.hash_code(), copy.hash_code());
            assert_eq!(std_hash(&b), std_hash(&copy));
        }

        let zero = MinMaxBounds::default();
        let negative_zero = MinMaxBounds::from_point(Vector3::splat(-0.0));
        assert_eq!(zero, negative_zero);
        assert_eq!(zero.hash_code(), negative_zero.hash_code());
    }

    #[test]
    fn test_nan_equals_itself() {
        let b = MinMaxBounds::from_point(Vector3::new(Float::NAN, 0.0, 0.0));
        let copy = b;
        assert_eq!(b, copy);
        assert_eq!(b.hash_code(), copy.hash_code());
        assert_eq!(std_hash(&b), std_hash(&copy));

        let other_nan = MinMaxBounds::from_point(Vector3::new(-Float::NAN, -0.0, 0.0));
        assert_eq!(b, other_nan);
        assert_eq!(std_hash(&b), std_hash(&other_nan));

        assert_ne!(b, MinMaxBounds::default());
    }

    #[test]
    fn test_hash_set() {
        let mut set = HashSet::new();
        set.insert(MinMaxBounds::new(Vector3::ZERO, Vector3::ONE));
        set.insert(MinMaxBounds::new(Vector3::splat(-0.0), Vector3::ONE));
        assert_eq!(set.len(), 1);

        set.insert(MinMaxBounds::new(Vector3::ZERO, Vector3::splat(2.0)));
        assert_eq!(set.len(), 2);
        assert!(set.contains(&MinMaxBounds::new(Vector3::new(0.0, -0.0, 0.0), Vector3::ONE)));
    }

    #[test]
    fn test_hash_is_order_sensitive() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);
        assert_ne!(MinMaxBounds::new(a, b).hash_code(), MinMaxBounds::new(b, a).hash_code());
    }

    #[test]
    fn test_from_points() {
        assert_eq!(MinMaxBounds::from_points(Vec::new()), None);

        let b = MinMaxBounds::from_points([
            Vector3::new(1.0, 1.0, 1.0),
            Vector3::new(3.0, -2.0, 1.5),
        ]).unwrap();
        assert_eq!(b.min, Vector3::new(1.0, -2.0, 1.0));
        assert_eq!(b.max, Vector3::new(3.0, 1.0, 1.5));
    }

    #[test]
    fn test_nan_point_leaves_bounds() {
        let mut b = MinMaxBounds::from_point(Vector3::ONE);
        b.encapsulate(Vector3::new(Float::NAN, 2.0, Float::NAN));
        assert_eq!(b, MinMaxBounds::new(Vector3::ONE, Vector3::new(1.0, 2.0, 1.0)));
    }

    #[test]
    fn test_display() {
        let b = MinMaxBounds::new(Vector3::ZERO, Vector3::ONE);
        assert_eq!(format!("{}", b), format!("({}, {})", Vector3::ZERO, Vector3::ONE));
    }
}
