use std::ops::{Add, Div, Mul};

use serde::{Deserialize, Serialize};

use crate::foundation::core::Rgb8;

/// Straight (non-premultiplied) RGBA in linear floats.
///
/// Channels may exceed `1.0` to leave headroom for overbright effects; only [`Color::to_rgb8`]
/// clamps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Color {
    /// All channels zero, including alpha.
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    /// Opaque color.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Color with explicit alpha.
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same color channels with alpha replaced.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Opaque color from a frame-buffer triple.
    pub fn from_rgb8(px: Rgb8) -> Self {
        Self::rgb(
            f32::from(px.r) / 255.0,
            f32::from(px.g) / 255.0,
            f32::from(px.b) / 255.0,
        )
    }

    /// Clamp to `[0, 1]` and truncate to a frame-buffer triple. Alpha is dropped.
    pub fn to_rgb8(self) -> Rgb8 {
        fn to_u8(c: f32) -> u8 {
            (c.clamp(0.0, 1.0) * 255.0) as u8
        }
        Rgb8::new(to_u8(self.r), to_u8(self.g), to_u8(self.b))
    }

    /// Lay `self` over `under`.
    ///
    /// Non-premultiplied blend that renormalizes by the combined alpha, so both operands may be
    /// partially transparent. Not idempotent: laying the same partial-alpha color twice keeps
    /// moving the result toward it.
    pub fn over(self, under: Self) -> Self {
        if self.a >= 1.0 {
            return self;
        }
        if self.a <= 0.0 {
            return under;
        }
        let under_coeff = (1.0 - self.a) * under.a;
        (self * self.a + under * under_coeff) / (self.a + under_coeff)
    }

    /// Lay `over` on top of `self`.
    pub fn under(self, over: Self) -> Self {
        over.over(self)
    }

    /// Invert the color channels, keeping alpha.
    pub fn flip(self) -> Self {
        Self::rgba(1.0 - self.r, 1.0 - self.g, 1.0 - self.b, self.a)
    }
}

impl Add for Color {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::rgba(
            self.r + rhs.r,
            self.g + rhs.g,
            self.b + rhs.b,
            self.a + rhs.a,
        )
    }
}

impl Mul<f32> for Color {
    type Output = Self;

    fn mul(self, m: f32) -> Self {
        Self::rgba(self.r * m, self.g * m, self.b * m, self.a * m)
    }
}

impl Mul for Color {
    type Output = Self;

    fn mul(self, m: Self) -> Self {
        Self::rgba(self.r * m.r, self.g * m.g, self.b * m.b, self.a * m.a)
    }
}

impl Div<f32> for Color {
    type Output = Self;

    fn div(self, d: f32) -> Self {
        self * d.recip()
    }
}

impl From<Rgb8> for Color {
    fn from(px: Rgb8) -> Self {
        Self::from_rgb8(px)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            RgbaObj {
                r: f32,
                g: f32,
                b: f32,
                #[serde(default = "one")]
                a: f32,
            },
            Arr(Vec<f32>),
        }

        fn one() -> f32 {
            1.0
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => parse_hex(&s).map_err(serde::de::Error::custom),
            Repr::RgbaObj { r, g, b, a } => Ok(Self::rgba(r, g, b, a)),
            Repr::Arr(v) => match v.as_slice() {
                &[r, g, b] => Ok(Self::rgb(r, g, b)),
                &[r, g, b, a] => Ok(Self::rgba(r, g, b, a)),
                _ => Err(serde::de::Error::custom(
                    "color array must have len 3 ([r,g,b]) or 4 ([r,g,b,a])",
                )),
            },
        }
    }
}

fn parse_hex(s: &str) -> Result<Color, String> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);

    fn hex_channel(s: &str, at: usize) -> Result<f32, String> {
        let pair = s
            .get(at..at + 2)
            .ok_or_else(|| format!("invalid hex color \"{s}\""))?;
        u8::from_str_radix(pair, 16)
            .map(|v| f32::from(v) / 255.0)
            .map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    match s.len() {
        6 => Ok(Color::rgb(
            hex_channel(s, 0)?,
            hex_channel(s, 2)?,
            hex_channel(s, 4)?,
        )),
        8 => Ok(Color::rgba(
            hex_channel(s, 0)?,
            hex_channel(s, 2)?,
            hex_channel(s, 4)?,
            hex_channel(s, 6)?,
        )),
        _ => Err("hex color must be #RRGGBB or #RRGGBBAA (case-insensitive)".to_owned()),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/rgba.rs"]
mod tests;
