// Colors in ARGB8888 format
pub const BACKGROUND: u32 = 0xFF000000;
pub const WHITE: u32 = 0xFFFFFFFF;
pub const BLUE: u32 = 0xFF0000FF;
pub const DIVIDER: u32 = 0xFFFFFFFF;
pub const WINDOW_FILL: u32 = 0xFF101828;
pub const LABEL: u32 = 0xFFC0C0C0;

/// Splits a packed ARGB color into `[r, g, b, a]` bytes.
pub fn unpack_rgba(color: u32) -> [u8; 4] {
    let a = (color >> 24) as u8;
    let r = (color >> 16) as u8;
    let g = (color >> 8) as u8;
    let b = color as u8;
    [r, g, b, a]
}
