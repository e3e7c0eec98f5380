//! RGBA color values

/// An 8-bit-per-channel RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Create a new color from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color from RGB components.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Opaque white (255, 255, 255, 255), the background color.
    pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);

    /// Opaque black (0, 0, 0, 255).
    pub const BLACK: Rgba = Rgba::opaque(0, 0, 0);

    /// Opaque red (255, 0, 0, 255).
    pub const RED: Rgba = Rgba::opaque(255, 0, 0);

    /// Opaque green (0, 255, 0, 255).
    pub const GREEN: Rgba = Rgba::opaque(0, 255, 0);

    /// Opaque blue (0, 0, 255, 255).
    pub const BLUE: Rgba = Rgba::opaque(0, 0, 255);

    /// Fully transparent (0, 0, 0, 0).
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    /// The color as `[r, g, b, a]` bytes.
    #[inline]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Build a color from `[r, g, b, a]` bytes.
    #[inline]
    pub const fn from_array(bytes: [u8; 4]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Rgba::BLACK
    }
}

impl From<[u8; 4]> for Rgba {
    fn from(bytes: [u8; 4]) -> Self {
        Self::from_array(bytes)
    }
}

impl From<Rgba> for [u8; 4] {
    fn from(color: Rgba) -> Self {
        color.to_array()
    }
}
