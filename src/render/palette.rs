use crate::render::Color;

/// Fixed series palette; series `i` starts with entry `i % len`.
const SERIES_COLORS: [u32; 64] = [
    0xe50000, 0x25009e, 0x00b700, 0xe5be00, 0x065693, 0xb7dd00, 0xe58300, 0x950095,
    0xfc7cfc, 0x001800, 0x00fc84, 0xfcfca0, 0x90a08c, 0x00a8fc, 0x7454fc, 0xfc08fc,
    0x784c30, 0xfc4078, 0x80fc68, 0x002cfc, 0xfc9c78, 0x20a868, 0x4cfc04, 0xd0ccfc,
    0x709c04, 0x006430, 0x00fce8, 0x700000, 0x6400f8, 0x70a8f4, 0xa450a0, 0x50d4ac,
    0x2c2450, 0xfcfc34, 0x3090b8, 0xd04024, 0xc840f4, 0xc4d05c, 0xec009c, 0x00f034,
    0xacf4b8, 0x5438b4, 0xbc7854, 0x547070, 0xa80840, 0xb080dc, 0x58cc3c, 0x246cf8,
    0xb400e4, 0x384800, 0x00c4bc, 0xccbcac, 0xe86cac, 0x38d4fc, 0xfc0c4c, 0x742c70,
    0xa06c00, 0x288400, 0x98a840, 0x7070bc, 0xfc6c44, 0xfc30c4, 0xc02878, 0x002cbc,
];

/// Ordered list of candidate series colors.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: SERIES_COLORS.iter().map(|&rgb| Color::from_hex(rgb)).collect(),
        }
    }
}

impl Palette {
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color for `index`, wrapping around the palette.
    #[must_use]
    pub fn color(&self, index: usize) -> Color {
        self.colors[index % self.colors.len()]
    }

    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
}
