use super::Rgb;

/// Default anchor colors, cycled by anchor index on initialisation.
pub const DEFAULT_PALETTE: [[u8; 3]; 8] = [
    [0xFF, 0x6B, 0x6B],
    [0xFF, 0xD9, 0x3D],
    [0x6B, 0xCB, 0x77],
    [0x4D, 0x96, 0xFF],
    [0x9B, 0x5D, 0xE5],
    [0xF1, 0x5B, 0xB5],
    [0x00, 0xBB, 0xF9],
    [0x00, 0xF5, 0xD4],
];

/// Color assigned to anchor `index` by a fresh mesh.
#[inline]
pub fn default_color(index: usize) -> Rgb {
    let [r, g, b] = DEFAULT_PALETTE[index % DEFAULT_PALETTE.len()];
    Rgb::from_u8(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_cycles() {
        assert_eq!(default_color(0), default_color(DEFAULT_PALETTE.len()));
        assert_ne!(default_color(0), default_color(1));
    }
}
