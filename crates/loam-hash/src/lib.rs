//! Seedable scrambling hashes over float coordinates.
//!
//! Every function here maps an N-dimensional float coordinate (N = 1..4) to
//! an M-dimensional result (M = 1..4) in `[0, 1)`, deterministically: the
//! same seed and coordinate always produce the same bits, across calls,
//! threads and processes. The mix runs on the raw bit patterns of the
//! inputs, so outputs stay decorrelated over the whole float domain rather
//! than just near the origin.
//!
//! Three variant families wrap the base hashes:
//!
//! - `zchash_*` remaps to `[-1, 1)` (gradient tables, jitter offsets).
//! - `phash_*` wraps each coordinate component with a floored modulo before
//!   hashing, so the result repeats exactly with the given period.
//! - `pzchash_*` does both.
//!
//! # Examples
//!
//! ```
//! use glam::Vec2;
//!
//! let a = loam_hash::hash_2_2(0.0, Vec2::new(1.5, -2.25));
//! let b = loam_hash::hash_2_2(0.0, Vec2::new(1.5, -2.25));
//! assert_eq!(a, b);
//! assert!(a.x >= 0.0 && a.x < 1.0);
//!
//! // Wrapped: same cell every 4 units.
//! let p = Vec2::splat(4.0);
//! let h0 = loam_hash::phash_2_1(7.0, Vec2::new(1.25, 2.5), p);
//! let h1 = loam_hash::phash_2_1(7.0, Vec2::new(5.25, -1.5), p);
//! assert_eq!(h0, h1);
//! ```

use glam::{Vec2, Vec3, Vec4, vec2, vec3, vec4};

// ============================================================
// Integer mixing core
// ============================================================

// Lane padding when a key is widened to a larger mixer. Arbitrary odd
// constants; they only have to differ per lane.
const PAD_Y: u32 = 0x9E37_79B9;
const PAD_Z: u32 = 0x7F4A_7C15;
const PAD_W: u32 = 0x2545_F491;

/// Murmur-style finalizer for single-lane keys.
#[inline]
fn mix1(mut h: u32) -> u32 {
    h ^= PAD_Y;
    h ^= h >> 16;
    h = h.wrapping_mul(0x85EB_CA6B);
    h ^= h >> 13;
    h = h.wrapping_mul(0xC2B2_AE35);
    h ^= h >> 16;
    h
}

#[inline]
fn pcg2d(mut x: u32, mut y: u32) -> (u32, u32) {
    x = x.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
    y = y.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
    x = x.wrapping_add(y.wrapping_mul(1_664_525));
    y = y.wrapping_add(x.wrapping_mul(1_664_525));
    x ^= x >> 16;
    y ^= y >> 16;
    x = x.wrapping_add(y.wrapping_mul(1_664_525));
    y = y.wrapping_add(x.wrapping_mul(1_664_525));
    x ^= x >> 16;
    y ^= y >> 16;
    (x, y)
}

#[inline]
fn pcg3d(mut x: u32, mut y: u32, mut z: u32) -> (u32, u32, u32) {
    x = x.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
    y = y.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
    z = z.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
    x = x.wrapping_add(y.wrapping_mul(z));
    y = y.wrapping_add(z.wrapping_mul(x));
    z = z.wrapping_add(x.wrapping_mul(y));
    x ^= x >> 16;
    y ^= y >> 16;
    z ^= z >> 16;
    x = x.wrapping_add(y.wrapping_mul(z));
    y = y.wrapping_add(z.wrapping_mul(x));
    z = z.wrapping_add(x.wrapping_mul(y));
    (x, y, z)
}

#[inline]
fn pcg4d(mut x: u32, mut y: u32, mut z: u32, mut w: u32) -> (u32, u32, u32, u32) {
    x = x.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
    y = y.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
    z = z.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
    w = w.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
    x = x.wrapping_add(y.wrapping_mul(w));
    y = y.wrapping_add(z.wrapping_mul(x));
    z = z.wrapping_add(x.wrapping_mul(y));
    w = w.wrapping_add(y.wrapping_mul(z));
    x ^= x >> 16;
    y ^= y >> 16;
    z ^= z >> 16;
    w ^= w >> 16;
    x = x.wrapping_add(y.wrapping_mul(w));
    y = y.wrapping_add(z.wrapping_mul(x));
    z = z.wrapping_add(x.wrapping_mul(y));
    w = w.wrapping_add(y.wrapping_mul(z));
    (x, y, z, w)
}

// Key extraction. `-0.0` and `+0.0` are the same coordinate, so they must
// produce the same key; the add canonicalizes the sign without touching any
// other value.
#[inline]
fn bits(v: f32) -> u32 {
    (v + 0.0).to_bits()
}

// Top 24 bits scaled down: uniform over [0, 1), never reaches 1.0.
#[inline]
fn unit(w: u32) -> f32 {
    (w >> 8) as f32 * (1.0 / 16_777_216.0)
}

// ============================================================
// Seed injection
// ============================================================

/// Scale of the per-seed coordinate shift.
///
/// Each seed slides the input domain by up to this many units per axis,
/// which decorrelates whole fields without a second hash pass. The value
/// trades decorrelation range against float resolution: at 5e6 the f32
/// spacing is 0.5, so integral (lattice) coordinates survive the shift
/// exactly, while direct hash calls on coordinates with structure finer
/// than ~0.5 will see that structure quantized. Noise evaluators only hash
/// lattice coordinates and are unaffected.
pub const SEED_SCALE: f32 = 5_000_000.0;

#[inline]
fn seed_shift1(seed: f32) -> f32 {
    unit(mix1(bits(seed))) * SEED_SCALE
}

#[inline]
fn seed_shift2(seed: f32) -> Vec2 {
    let (x, y) = pcg2d(bits(seed), PAD_Y);
    vec2(unit(x), unit(y)) * SEED_SCALE
}

#[inline]
fn seed_shift3(seed: f32) -> Vec3 {
    let (x, y, z) = pcg3d(bits(seed), PAD_Y, PAD_Z);
    vec3(unit(x), unit(y), unit(z)) * SEED_SCALE
}

#[inline]
fn seed_shift4(seed: f32) -> Vec4 {
    let (x, y, z, w) = pcg4d(bits(seed), PAD_Y, PAD_Z, PAD_W);
    vec4(unit(x), unit(y), unit(z), unit(w)) * SEED_SCALE
}

// ============================================================
// Base hashes: R^N -> [0, 1)^M
// ============================================================

/// Hashes a 1-D coordinate to a single value in `[0, 1)`.
///
/// The seed shifts the input domain (see [`SEED_SCALE`]); seed `0.0` is an
/// ordinary seed, not a passthrough.
#[inline]
pub fn hash_1_1(seed: f32, v: f32) -> f32 {
    let v = v + seed_shift1(seed);
    unit(mix1(bits(v)))
}

/// Hashes a 1-D coordinate to 2 values in `[0, 1)`.
#[inline]
pub fn hash_1_2(seed: f32, v: f32) -> Vec2 {
    let v = v + seed_shift1(seed);
    let (x, y) = pcg2d(bits(v), PAD_Y);
    vec2(unit(x), unit(y))
}

/// Hashes a 1-D coordinate to 3 values in `[0, 1)`.
#[inline]
pub fn hash_1_3(seed: f32, v: f32) -> Vec3 {
    let v = v + seed_shift1(seed);
    let (x, y, z) = pcg3d(bits(v), PAD_Y, PAD_Z);
    vec3(unit(x), unit(y), unit(z))
}

/// Hashes a 1-D coordinate to 4 values in `[0, 1)`.
#[inline]
pub fn hash_1_4(seed: f32, v: f32) -> Vec4 {
    let v = v + seed_shift1(seed);
    let (x, y, z, w) = pcg4d(bits(v), PAD_Y, PAD_Z, PAD_W);
    vec4(unit(x), unit(y), unit(z), unit(w))
}

/// Hashes a 2-D coordinate to a single value in `[0, 1)`.
#[inline]
pub fn hash_2_1(seed: f32, v: Vec2) -> f32 {
    let v = v + seed_shift2(seed);
    let (x, _) = pcg2d(bits(v.x), bits(v.y));
    unit(x)
}

/// Hashes a 2-D coordinate to 2 values in `[0, 1)`.
///
/// Both output lanes are decorrelated from each other as well as from
/// neighboring inputs, so the result can be used directly as a random
/// offset vector.
#[inline]
pub fn hash_2_2(seed: f32, v: Vec2) -> Vec2 {
    let v = v + seed_shift2(seed);
    let (x, y) = pcg2d(bits(v.x), bits(v.y));
    vec2(unit(x), unit(y))
}

/// Hashes a 2-D coordinate to 3 values in `[0, 1)`.
#[inline]
pub fn hash_2_3(seed: f32, v: Vec2) -> Vec3 {
    let v = v + seed_shift2(seed);
    let (x, y, z) = pcg3d(bits(v.x), bits(v.y), PAD_Z);
    vec3(unit(x), unit(y), unit(z))
}

/// Hashes a 2-D coordinate to 4 values in `[0, 1)`.
#[inline]
pub fn hash_2_4(seed: f32, v: Vec2) -> Vec4 {
    let v = v + seed_shift2(seed);
    let (x, y, z, w) = pcg4d(bits(v.x), bits(v.y), PAD_Z, PAD_W);
    vec4(unit(x), unit(y), unit(z), unit(w))
}

/// Hashes a 3-D coordinate to a single value in `[0, 1)`.
#[inline]
pub fn hash_3_1(seed: f32, v: Vec3) -> f32 {
    let v = v + seed_shift3(seed);
    let (x, _, _) = pcg3d(bits(v.x), bits(v.y), bits(v.z));
    unit(x)
}

/// Hashes a 3-D coordinate to 2 values in `[0, 1)`.
#[inline]
pub fn hash_3_2(seed: f32, v: Vec3) -> Vec2 {
    let v = v + seed_shift3(seed);
    let (x, y, _) = pcg3d(bits(v.x), bits(v.y), bits(v.z));
    vec2(unit(x), unit(y))
}

/// Hashes a 3-D coordinate to 3 values in `[0, 1)`.
#[inline]
pub fn hash_3_3(seed: f32, v: Vec3) -> Vec3 {
    let v = v + seed_shift3(seed);
    let (x, y, z) = pcg3d(bits(v.x), bits(v.y), bits(v.z));
    vec3(unit(x), unit(y), unit(z))
}

/// Hashes a 3-D coordinate to 4 values in `[0, 1)`.
#[inline]
pub fn hash_3_4(seed: f32, v: Vec3) -> Vec4 {
    let v = v + seed_shift3(seed);
    let (x, y, z, w) = pcg4d(bits(v.x), bits(v.y), bits(v.z), PAD_W);
    vec4(unit(x), unit(y), unit(z), unit(w))
}

/// Hashes a 4-D coordinate to a single value in `[0, 1)`.
#[inline]
pub fn hash_4_1(seed: f32, v: Vec4) -> f32 {
    let v = v + seed_shift4(seed);
    let (x, _, _, _) = pcg4d(bits(v.x), bits(v.y), bits(v.z), bits(v.w));
    unit(x)
}

/// Hashes a 4-D coordinate to 2 values in `[0, 1)`.
#[inline]
pub fn hash_4_2(seed: f32, v: Vec4) -> Vec2 {
    let v = v + seed_shift4(seed);
    let (x, y, _, _) = pcg4d(bits(v.x), bits(v.y), bits(v.z), bits(v.w));
    vec2(unit(x), unit(y))
}

/// Hashes a 4-D coordinate to 3 values in `[0, 1)`.
#[inline]
pub fn hash_4_3(seed: f32, v: Vec4) -> Vec3 {
    let v = v + seed_shift4(seed);
    let (x, y, z, _) = pcg4d(bits(v.x), bits(v.y), bits(v.z), bits(v.w));
    vec3(unit(x), unit(y), unit(z))
}

/// Hashes a 4-D coordinate to 4 values in `[0, 1)`.
#[inline]
pub fn hash_4_4(seed: f32, v: Vec4) -> Vec4 {
    let v = v + seed_shift4(seed);
    let (x, y, z, w) = pcg4d(bits(v.x), bits(v.y), bits(v.z), bits(v.w));
    vec4(unit(x), unit(y), unit(z), unit(w))
}

// ============================================================
// Zero-centered hashes: R^N -> [-1, 1)^M
// ============================================================

/// Like [`hash_1_1`] remapped to `[-1, 1)`.
#[inline]
pub fn zchash_1_1(seed: f32, v: f32) -> f32 {
    hash_1_1(seed, v) * 2.0 - 1.0
}

/// Like [`hash_1_2`] remapped to `[-1, 1)`.
#[inline]
pub fn zchash_1_2(seed: f32, v: f32) -> Vec2 {
    hash_1_2(seed, v) * 2.0 - 1.0
}

/// Like [`hash_1_3`] remapped to `[-1, 1)`.
#[inline]
pub fn zchash_1_3(seed: f32, v: f32) -> Vec3 {
    hash_1_3(seed, v) * 2.0 - 1.0
}

/// Like [`hash_1_4`] remapped to `[-1, 1)`.
#[inline]
pub fn zchash_1_4(seed: f32, v: f32) -> Vec4 {
    hash_1_4(seed, v) * 2.0 - 1.0
}

/// Like [`hash_2_1`] remapped to `[-1, 1)`.
#[inline]
pub fn zchash_2_1(seed: f32, v: Vec2) -> f32 {
    hash_2_1(seed, v) * 2.0 - 1.0
}

/// Like [`hash_2_2`] remapped to `[-1, 1)`.
#[inline]
pub fn zchash_2_2(seed: f32, v: Vec2) -> Vec2 {
    hash_2_2(seed, v) * 2.0 - 1.0
}

/// Like [`hash_2_3`] remapped to `[-1, 1)`.
#[inline]
pub fn zchash_2_3(seed: f32, v: Vec2) -> Vec3 {
    hash_2_3(seed, v) * 2.0 - 1.0
}

/// Like [`hash_2_4`] remapped to `[-1, 1)`.
#[inline]
pub fn zchash_2_4(seed: f32, v: Vec2) -> Vec4 {
    hash_2_4(seed, v) * 2.0 - 1.0
}

/// Like [`hash_3_1`] remapped to `[-1, 1)`.
#[inline]
pub fn zchash_3_1(seed: f32, v: Vec3) -> f32 {
    hash_3_1(seed, v) * 2.0 - 1.0
}

/// Like [`hash_3_2`] remapped to `[-1, 1)`.
#[inline]
pub fn zchash_3_2(seed: f32, v: Vec3) -> Vec2 {
    hash_3_2(seed, v) * 2.0 - 1.0
}

/// Like [`hash_3_3`] remapped to `[-1, 1)`.
#[inline]
pub fn zchash_3_3(seed: f32, v: Vec3) -> Vec3 {
    hash_3_3(seed, v) * 2.0 - 1.0
}

/// Like [`hash_3_4`] remapped to `[-1, 1)`.
#[inline]
pub fn zchash_3_4(seed: f32, v: Vec3) -> Vec4 {
    hash_3_4(seed, v) * 2.0 - 1.0
}

/// Like [`hash_4_1`] remapped to `[-1, 1)`.
#[inline]
pub fn zchash_4_1(seed: f32, v: Vec4) -> f32 {
    hash_4_1(seed, v) * 2.0 - 1.0
}

/// Like [`hash_4_2`] remapped to `[-1, 1)`.
#[inline]
pub fn zchash_4_2(seed: f32, v: Vec4) -> Vec2 {
    hash_4_2(seed, v) * 2.0 - 1.0
}

/// Like [`hash_4_3`] remapped to `[-1, 1)`.
#[inline]
pub fn zchash_4_3(seed: f32, v: Vec4) -> Vec3 {
    hash_4_3(seed, v) * 2.0 - 1.0
}

/// Like [`hash_4_4`] remapped to `[-1, 1)`.
#[inline]
pub fn zchash_4_4(seed: f32, v: Vec4) -> Vec4 {
    hash_4_4(seed, v) * 2.0 - 1.0
}

// ============================================================
// Floored modulo
// ============================================================

/// Floored (always-positive) modulo.
///
/// For `m > 0` the result is in `[0, m)` regardless of the sign of `v`,
/// and is never `-0.0`, so wrapped coordinates that land on the same cell
/// hash to the same bits. `m <= 0` is not meaningful here and simply
/// follows IEEE remainder rules.
///
/// ```
/// assert_eq!(loam_hash::fmodr(-1.0, 4.0), 3.0);
/// assert_eq!(loam_hash::fmodr(5.25, 4.0), 1.25);
/// assert_eq!(loam_hash::fmodr(-8.0, 4.0).to_bits(), 0.0f32.to_bits());
/// ```
#[inline]
pub fn fmodr(v: f32, m: f32) -> f32 {
    let r = v % m;
    if r.is_sign_negative() { (r + m) % m } else { r }
}

/// Componentwise [`fmodr`].
#[inline]
pub fn fmodr2(v: Vec2, m: Vec2) -> Vec2 {
    vec2(fmodr(v.x, m.x), fmodr(v.y, m.y))
}

/// Componentwise [`fmodr`].
#[inline]
pub fn fmodr3(v: Vec3, m: Vec3) -> Vec3 {
    vec3(fmodr(v.x, m.x), fmodr(v.y, m.y), fmodr(v.z, m.z))
}

/// Componentwise [`fmodr`].
#[inline]
pub fn fmodr4(v: Vec4, m: Vec4) -> Vec4 {
    vec4(fmodr(v.x, m.x), fmodr(v.y, m.y), fmodr(v.z, m.z), fmodr(v.w, m.w))
}

// ============================================================
// Periodic hashes: wrap, then hash
// ============================================================

/// [`hash_1_1`] with the coordinate wrapped to `[0, period)` first.
///
/// Repeats exactly: `phash_1_1(s, v, p) == phash_1_1(s, v + k * p, p)` for
/// any integer `k` (as long as `v + k * p` is itself exact in f32).
/// `period` must be positive; zero or negative periods are not validated.
#[inline]
pub fn phash_1_1(seed: f32, v: f32, period: f32) -> f32 {
    hash_1_1(seed, fmodr(v, period))
}

/// [`hash_1_2`] with the coordinate wrapped to `[0, period)` first.
#[inline]
pub fn phash_1_2(seed: f32, v: f32, period: f32) -> Vec2 {
    hash_1_2(seed, fmodr(v, period))
}

/// [`hash_1_3`] with the coordinate wrapped to `[0, period)` first.
#[inline]
pub fn phash_1_3(seed: f32, v: f32, period: f32) -> Vec3 {
    hash_1_3(seed, fmodr(v, period))
}

/// [`hash_1_4`] with the coordinate wrapped to `[0, period)` first.
#[inline]
pub fn phash_1_4(seed: f32, v: f32, period: f32) -> Vec4 {
    hash_1_4(seed, fmodr(v, period))
}

/// [`hash_2_1`] with each component wrapped to `[0, period)` first.
#[inline]
pub fn phash_2_1(seed: f32, v: Vec2, period: Vec2) -> f32 {
    hash_2_1(seed, fmodr2(v, period))
}

/// [`hash_2_2`] with each component wrapped to `[0, period)` first.
#[inline]
pub fn phash_2_2(seed: f32, v: Vec2, period: Vec2) -> Vec2 {
    hash_2_2(seed, fmodr2(v, period))
}

/// [`hash_2_3`] with each component wrapped to `[0, period)` first.
#[inline]
pub fn phash_2_3(seed: f32, v: Vec2, period: Vec2) -> Vec3 {
    hash_2_3(seed, fmodr2(v, period))
}

/// [`hash_2_4`] with each component wrapped to `[0, period)` first.
#[inline]
pub fn phash_2_4(seed: f32, v: Vec2, period: Vec2) -> Vec4 {
    hash_2_4(seed, fmodr2(v, period))
}

/// [`hash_3_1`] with each component wrapped to `[0, period)` first.
#[inline]
pub fn phash_3_1(seed: f32, v: Vec3, period: Vec3) -> f32 {
    hash_3_1(seed, fmodr3(v, period))
}

/// [`hash_3_2`] with each component wrapped to `[0, period)` first.
#[inline]
pub fn phash_3_2(seed: f32, v: Vec3, period: Vec3) -> Vec2 {
    hash_3_2(seed, fmodr3(v, period))
}

/// [`hash_3_3`] with each component wrapped to `[0, period)` first.
#[inline]
pub fn phash_3_3(seed: f32, v: Vec3, period: Vec3) -> Vec3 {
    hash_3_3(seed, fmodr3(v, period))
}

/// [`hash_3_4`] with each component wrapped to `[0, period)` first.
#[inline]
pub fn phash_3_4(seed: f32, v: Vec3, period: Vec3) -> Vec4 {
    hash_3_4(seed, fmodr3(v, period))
}

/// [`hash_4_1`] with each component wrapped to `[0, period)` first.
#[inline]
pub fn phash_4_1(seed: f32, v: Vec4, period: Vec4) -> f32 {
    hash_4_1(seed, fmodr4(v, period))
}

/// [`hash_4_2`] with each component wrapped to `[0, period)` first.
#[inline]
pub fn phash_4_2(seed: f32, v: Vec4, period: Vec4) -> Vec2 {
    hash_4_2(seed, fmodr4(v, period))
}

/// [`hash_4_3`] with each component wrapped to `[0, period)` first.
#[inline]
pub fn phash_4_3(seed: f32, v: Vec4, period: Vec4) -> Vec3 {
    hash_4_3(seed, fmodr4(v, period))
}

/// [`hash_4_4`] with each component wrapped to `[0, period)` first.
#[inline]
pub fn phash_4_4(seed: f32, v: Vec4, period: Vec4) -> Vec4 {
    hash_4_4(seed, fmodr4(v, period))
}

// ============================================================
// Periodic zero-centered hashes
// ============================================================

/// [`zchash_1_1`] with the coordinate wrapped to `[0, period)` first.
#[inline]
pub fn pzchash_1_1(seed: f32, v: f32, period: f32) -> f32 {
    zchash_1_1(seed, fmodr(v, period))
}

/// [`zchash_1_2`] with the coordinate wrapped to `[0, period)` first.
#[inline]
pub fn pzchash_1_2(seed: f32, v: f32, period: f32) -> Vec2 {
    zchash_1_2(seed, fmodr(v, period))
}

/// [`zchash_1_3`] with the coordinate wrapped to `[0, period)` first.
#[inline]
pub fn pzchash_1_3(seed: f32, v: f32, period: f32) -> Vec3 {
    zchash_1_3(seed, fmodr(v, period))
}

/// [`zchash_1_4`] with the coordinate wrapped to `[0, period)` first.
#[inline]
pub fn pzchash_1_4(seed: f32, v: f32, period: f32) -> Vec4 {
    zchash_1_4(seed, fmodr(v, period))
}

/// [`zchash_2_1`] with each component wrapped to `[0, period)` first.
#[inline]
pub fn pzchash_2_1(seed: f32, v: Vec2, period: Vec2) -> f32 {
    zchash_2_1(seed, fmodr2(v, period))
}

/// [`zchash_2_2`] with each component wrapped to `[0, period)` first.
#[inline]
pub fn pzchash_2_2(seed: f32, v: Vec2, period: Vec2) -> Vec2 {
    zchash_2_2(seed, fmodr2(v, period))
}

/// [`zchash_2_3`] with each component wrapped to `[0, period)` first.
#[inline]
pub fn pzchash_2_3(seed: f32, v: Vec2, period: Vec2) -> Vec3 {
    zchash_2_3(seed, fmodr2(v, period))
}

/// [`zchash_2_4`] with each component wrapped to `[0, period)` first.
#[inline]
pub fn pzchash_2_4(seed: f32, v: Vec2, period: Vec2) -> Vec4 {
    zchash_2_4(seed, fmodr2(v, period))
}

/// [`zchash_3_1`] with each component wrapped to `[0, period)` first.
#[inline]
pub fn pzchash_3_1(seed: f32, v: Vec3, period: Vec3) -> f32 {
    zchash_3_1(seed, fmodr3(v, period))
}

/// [`zchash_3_2`] with each component wrapped to `[0, period)` first.
#[inline]
pub fn pzchash_3_2(seed: f32, v: Vec3, period: Vec3) -> Vec2 {
    zchash_3_2(seed, fmodr3(v, period))
}

/// [`zchash_3_3`] with each component wrapped to `[0, period)` first.
#[inline]
pub fn pzchash_3_3(seed: f32, v: Vec3, period: Vec3) -> Vec3 {
    zchash_3_3(seed, fmodr3(v, period))
}

/// [`zchash_3_4`] with each component wrapped to `[0, period)` first.
#[inline]
pub fn pzchash_3_4(seed: f32, v: Vec3, period: Vec3) -> Vec4 {
    zchash_3_4(seed, fmodr3(v, period))
}

/// [`zchash_4_1`] with each component wrapped to `[0, period)` first.
#[inline]
pub fn pzchash_4_1(seed: f32, v: Vec4, period: Vec4) -> f32 {
    zchash_4_1(seed, fmodr4(v, period))
}

/// [`zchash_4_2`] with each component wrapped to `[0, period)` first.
#[inline]
pub fn pzchash_4_2(seed: f32, v: Vec4, period: Vec4) -> Vec2 {
    zchash_4_2(seed, fmodr4(v, period))
}

/// [`zchash_4_3`] with each component wrapped to `[0, period)` first.
#[inline]
pub fn pzchash_4_3(seed: f32, v: Vec4, period: Vec4) -> Vec3 {
    zchash_4_3(seed, fmodr4(v, period))
}

/// [`zchash_4_4`] with each component wrapped to `[0, period)` first.
#[inline]
pub fn pzchash_4_4(seed: f32, v: Vec4, period: Vec4) -> Vec4 {
    zchash_4_4(seed, fmodr4(v, period))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic() {
        assert_eq!(
            hash_1_1(0.0, 0.0).to_bits(),
            hash_1_1(0.0, 0.0).to_bits()
        );
        let v = vec2(12.5, -3.25);
        assert_eq!(hash_2_2(4.0, v), hash_2_2(4.0, v));
        let w = vec3(-7.0, 0.5, 1e6);
        assert_eq!(hash_3_3(-2.0, w), hash_3_3(-2.0, w));
    }

    #[test]
    fn test_unit_range_all_shapes() {
        let in_01 = |x: f32| x >= 0.0 && x < 1.0;
        for i in -8..8 {
            let f = i as f32 * 0.75;
            let v2 = vec2(f, f * 1.3 + 0.1);
            let v3 = vec3(f, f * 1.3 + 0.1, f * -0.7);
            let v4 = vec4(f, f * 1.3 + 0.1, f * -0.7, f + 11.0);
            for seed in [0.0, 1.0, -3.5] {
                assert!(in_01(hash_1_1(seed, f)), "hash_1_1({seed}, {f})");
                assert!(hash_1_2(seed, f).cmpge(Vec2::ZERO).all());
                assert!(hash_1_2(seed, f).cmplt(Vec2::ONE).all());
                assert!(hash_1_3(seed, f).cmpge(Vec3::ZERO).all());
                assert!(hash_1_3(seed, f).cmplt(Vec3::ONE).all());
                assert!(hash_1_4(seed, f).cmpge(Vec4::ZERO).all());
                assert!(hash_1_4(seed, f).cmplt(Vec4::ONE).all());
                assert!(in_01(hash_2_1(seed, v2)));
                assert!(hash_2_2(seed, v2).cmplt(Vec2::ONE).all());
                assert!(hash_2_2(seed, v2).cmpge(Vec2::ZERO).all());
                assert!(hash_2_3(seed, v2).cmplt(Vec3::ONE).all());
                assert!(hash_2_4(seed, v2).cmplt(Vec4::ONE).all());
                assert!(in_01(hash_3_1(seed, v3)));
                assert!(hash_3_2(seed, v3).cmplt(Vec2::ONE).all());
                assert!(hash_3_3(seed, v3).cmpge(Vec3::ZERO).all());
                assert!(hash_3_3(seed, v3).cmplt(Vec3::ONE).all());
                assert!(hash_3_4(seed, v3).cmplt(Vec4::ONE).all());
                assert!(in_01(hash_4_1(seed, v4)));
                assert!(hash_4_2(seed, v4).cmplt(Vec2::ONE).all());
                assert!(hash_4_3(seed, v4).cmplt(Vec3::ONE).all());
                assert!(hash_4_4(seed, v4).cmpge(Vec4::ZERO).all());
                assert!(hash_4_4(seed, v4).cmplt(Vec4::ONE).all());
            }
        }
    }

    #[test]
    fn test_zero_centered_range() {
        for i in 0..64 {
            let v = vec2(i as f32 * 0.37 - 5.0, i as f32 * -1.11);
            let h = zchash_2_2(1.0, v);
            assert!(h.cmpge(Vec2::splat(-1.0)).all(), "low {h:?}");
            assert!(h.cmplt(Vec2::ONE).all(), "high {h:?}");
            let s = zchash_3_1(2.0, v.extend(0.5));
            assert!((-1.0..1.0).contains(&s));
        }
    }

    #[test]
    fn test_seeds_decorrelate() {
        let v = vec2(3.5, -1.25);
        let mut distinct = 0;
        for (a, b) in [(0.0, 1.0), (1.0, 2.0), (5.0, -5.0), (100.0, 101.0)] {
            if hash_2_2(a, v) != hash_2_2(b, v) {
                distinct += 1;
            }
        }
        assert!(distinct >= 3, "seeds barely changed the field: {distinct}");
    }

    #[test]
    fn test_signed_zero_same_cell() {
        assert_eq!(
            hash_1_1(3.0, -0.0).to_bits(),
            hash_1_1(3.0, 0.0).to_bits()
        );
        assert_eq!(hash_2_2(0.0, vec2(-0.0, 2.0)), hash_2_2(0.0, vec2(0.0, 2.0)));
        assert_eq!(
            hash_3_3(1.0, vec3(0.0, -0.0, -0.0)),
            hash_3_3(1.0, vec3(-0.0, 0.0, 0.0))
        );
    }

    #[test]
    fn test_fmodr_basics() {
        assert_eq!(fmodr(-1.0, 4.0), 3.0);
        assert_eq!(fmodr(5.25, 4.0), 1.25);
        assert_eq!(fmodr(0.0, 4.0), 0.0);
        assert_eq!(fmodr(7.5, 2.5), 0.0);
        assert_eq!(fmodr(-2.5, 2.5).to_bits(), 0.0f32.to_bits());
        assert_eq!(fmodr(-8.0, 4.0).to_bits(), 0.0f32.to_bits());
        assert_eq!(fmodr(-0.0, 4.0).to_bits(), 0.0f32.to_bits());
        let r = fmodr(-1e-7, 4.0);
        assert!((0.0..4.0).contains(&r), "tiny negative wrapped to {r}");
    }

    #[test]
    fn test_fmodr_vectors() {
        let m = vec3(4.0, 2.0, 8.0);
        let r = fmodr3(vec3(-1.0, 5.0, -16.5), m);
        assert_eq!(r, vec3(3.0, 1.0, 7.5));
        let r4 = fmodr4(vec4(-1.0, 9.0, 0.25, -0.75), Vec4::splat(1.0));
        assert_eq!(r4, vec4(0.0, 0.0, 0.25, 0.25));
    }

    #[test]
    fn test_periodic_repeats_exactly() {
        let period = vec2(4.0, 4.0);
        for seed in [0.0, 7.0] {
            let a = phash_2_2(seed, vec2(1.25, 2.5), period);
            let b = phash_2_2(seed, vec2(5.25, -1.5), period);
            assert_eq!(a, b, "seed {seed}");
        }
        let p3 = vec3(3.0, 5.0, 2.0);
        let a = pzchash_3_3(2.0, vec3(0.5, 1.5, 0.25), p3);
        let b = pzchash_3_3(2.0, vec3(3.5, -3.5, 4.25), p3);
        assert_eq!(a, b);
        let c = phash_1_1(1.0, 0.75, 3.0);
        let d = phash_1_1(1.0, -2.25, 3.0);
        assert_eq!(c, d);
    }

    #[test]
    fn test_periodic_boundary_collapses() {
        // The far edge of the tile is the same cell as the near edge.
        let p = vec2(4.0, 4.0);
        assert_eq!(
            phash_2_3(0.0, vec2(4.0, 8.0), p),
            phash_2_3(0.0, Vec2::ZERO, p)
        );
        assert_eq!(
            phash_2_3(0.0, vec2(-4.0, -0.0), p),
            phash_2_3(0.0, Vec2::ZERO, p)
        );
    }

    #[test]
    fn test_nearby_coords_decorrelate() {
        let mut distinct = 0;
        let pairs = [
            (vec2(0.0, 0.0), vec2(1.0, 0.0)),
            (vec2(1.0, 0.0), vec2(0.0, 1.0)),
            (vec2(5.0, 5.0), vec2(5.0, 6.0)),
            (vec2(-3.0, 2.0), vec2(-2.0, 2.0)),
        ];
        for (a, b) in pairs {
            if hash_2_2(0.0, a) != hash_2_2(0.0, b) {
                distinct += 1;
            }
        }
        assert_eq!(distinct, pairs.len());
    }
}
