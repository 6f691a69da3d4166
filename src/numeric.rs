/*

    Declare numeric types used throughout this repo.

    Points are single precision, matching the vectors of
    the host engine the bounds are compared against. If you
    switch to f64, change both aliases:
    pub type Float = f64;
    pub type Vector3 = DVec3;

    Componentwise min/max follow the NaN-ignoring rule of
    f32::min / f32::max (IEEE-754 minNum / maxNum): if exactly
    one coordinate is NaN, the other one is returned.

    @date: 18 Oct, 2026
    @author: bartu
*/

use bevy_math::Vec3;

pub type Float = f32; // WARNING: If you change it to f64, don't forget to update Vector3
pub type Vector3 = Vec3;

#[inline]
pub fn component_min(a: Vector3, b: Vector3) -> Vector3 {
    Vector3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z))
}

#[inline]
pub fn component_max(a: Vector3, b: Vector3) -> Vector3 {
    Vector3::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z))
}

/// Hash of a single coordinate. 0.0 and -0.0 compare equal,
/// and so must hash equal. All NaNs collapse to one hash as well.
#[inline]
pub fn float_hash(x: Float) -> i32 {
    let canonical = if x == 0.0 {
        0.0
    } else if x.is_nan() {
        Float::NAN
    } else {
        x
    };
    canonical.to_bits() as i32
}

#[inline]
pub fn vector_hash(v: Vector3) -> i32 {
    float_hash(v.x) ^ (float_hash(v.y) << 2) ^ (float_hash(v.z) >> 2)
}

/// Exact equality, except NaN equals NaN. Agrees with float_hash.
#[inline]
pub fn float_eq(a: Float, b: Float) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

#[inline]
pub fn vector_eq(a: Vector3, b: Vector3) -> bool {
    float_eq(a.x, b.x) && float_eq(a.y, b.y) && float_eq(a.z, b.z)
}
