//! Packed ARGB8888 colors.
//!
//! Colors are stored as `0xAARRGGBB` in a single `u32`, matching the layout
//! of the renderer's color buffer.

pub const BACKGROUND: u32 = 0xFF1E1E1E;
pub const GRID: u32 = 0xFF333333;
pub const BLACK: u32 = 0xFF000000;
pub const WHITE: u32 = 0xFFFFFFFF;
pub const RED: u32 = 0xFFFF0000;
pub const GREEN: u32 = 0xFF00FF00;
pub const BLUE: u32 = 0xFF0000FF;
pub const YELLOW: u32 = 0xFFFFFF00;
pub const MAGENTA: u32 = 0xFFFF00FF;
pub const CYAN: u32 = 0xFF00FFFF;

/// Pack normalized channels into ARGB8888. Channels are clamped to [0, 1].
#[inline]
pub fn pack_color(r: f32, g: f32, b: f32, a: f32) -> u32 {
    let to_u8 = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u32;
    (to_u8(a) << 24) | (to_u8(r) << 16) | (to_u8(g) << 8) | to_u8(b)
}

/// Unpack the RGB channels of an ARGB8888 color to normalized floats.
/// Alpha is dropped.
#[inline]
pub fn unpack_color(color: u32) -> (f32, f32, f32) {
    let r = ((color >> 16) & 0xFF) as f32 / 255.0;
    let g = ((color >> 8) & 0xFF) as f32 / 255.0;
    let b = (color & 0xFF) as f32 / 255.0;
    (r, g, b)
}

/// Linearly interpolate between two unpacked colors.
#[inline]
pub fn lerp_color(a: (f32, f32, f32), b: (f32, f32, f32), t: f32) -> (f32, f32, f32) {
    (
        a.0 + (b.0 - a.0) * t,
        a.1 + (b.1 - a.1) * t,
        a.2 + (b.2 - a.2) * t,
    )
}

/// Convert an ARGB8888 color to RGBA byte order (used for image export).
#[inline]
pub fn argb_to_rgba(color: u32) -> [u8; 4] {
    let [a, r, g, b] = color.to_be_bytes();
    [r, g, b, a]
}
