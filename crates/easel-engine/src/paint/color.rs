use core::fmt;

use rand::Rng;

/// Straight-alpha RGBA color with 8-bit channels.
///
/// Unlike premultiplied representations, channels here are independent; this
/// matches the immediate-mode canvas boundary, which takes fill and stroke
/// styles as plain colors.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const RED: Color = Color::rgb(0xFF, 0x00, 0x00);
    pub const GREEN: Color = Color::rgb(0x00, 0x80, 0x00);
    pub const BLUE: Color = Color::rgb(0x00, 0x00, 0xFF);

    /// Opaque color from RGB channels.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parses a `#RRGGBB` or `#RRGGBBAA` hex literal (case-insensitive).
    pub fn from_hex(input: &str) -> Result<Self, ColorParseError> {
        let digits = input
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::new(input))?;

        let channel = |index: usize| -> Result<u8, ColorParseError> {
            let pair = digits
                .get(index * 2..index * 2 + 2)
                .ok_or_else(|| ColorParseError::new(input))?;
            u8::from_str_radix(pair, 16).map_err(|_| ColorParseError::new(input))
        };

        match digits.len() {
            6 => Ok(Color::rgb(channel(0)?, channel(1)?, channel(2)?)),
            8 => Ok(Color::rgba(channel(0)?, channel(1)?, channel(2)?, channel(3)?)),
            _ => Err(ColorParseError::new(input)),
        }
    }

    /// Uniformly random opaque color.
    pub fn random_opaque<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Color::rgb(rng.random(), rng.random(), rng.random())
    }

    #[inline]
    pub const fn is_opaque(self) -> bool {
        self.a == 0xFF
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Error returned for malformed color hex literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorParseError {
    pub input: String,
}

impl ColorParseError {
    fn new(input: &str) -> Self {
        Self { input: input.to_string() }
    }
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid color literal `{}`: expected #RRGGBB or #RRGGBBAA",
            self.input
        )
    }
}

impl std::error::Error for ColorParseError {}
