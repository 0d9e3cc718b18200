//! RGBA colors used for glyph fills, rules and placeholder frames.
use std::str::FromStr;
use std::{error, fmt};

pub const BLACK: ColorU8 = ColorU8::from_rgb(0, 0, 0);
pub const WHITE: ColorU8 = ColorU8::from_rgb(255, 255, 255);
pub const RED: ColorU8 = ColorU8::from_rgb(255, 0, 0);
pub const GREEN: ColorU8 = ColorU8::from_rgb(0, 128, 0);
pub const BLUE: ColorU8 = ColorU8::from_rgb(0, 0, 255);
pub const GRAY: ColorU8 = ColorU8::from_rgb(128, 128, 128);
pub const TRANSPARENT: ColorU8 = ColorU8::from_rgba(0, 0, 0, 0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorU8 {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl Default for ColorU8 {
    fn default() -> Self {
        BLACK
    }
}

impl ColorU8 {
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        ColorU8 { r, g, b, a: 255 }
    }

    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        ColorU8 { r, g, b, a }
    }

    /// Parse a `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa` string
    pub fn from_html(hex: &str) -> Result<Self, ParseError> {
        let digits = hex.strip_prefix('#').ok_or(ParseError::InvalidHex)?;
        let nibbles: Vec<u8> = digits
            .bytes()
            .map(hex_to_u8)
            .collect::<Option<_>>()
            .ok_or(ParseError::InvalidHex)?;
        let short = |n: u8| n << 4 | n;
        match nibbles.as_slice() {
            [r, g, b] => Ok(ColorU8::from_rgb(short(*r), short(*g), short(*b))),
            [r, g, b, a] => Ok(ColorU8::from_rgba(short(*r), short(*g), short(*b), short(*a))),
            [r1, r2, g1, g2, b1, b2] => Ok(ColorU8::from_rgb(
                r1 << 4 | r2,
                g1 << 4 | g2,
                b1 << 4 | b2,
            )),
            [r1, r2, g1, g2, b1, b2, a1, a2] => Ok(ColorU8::from_rgba(
                r1 << 4 | r2,
                g1 << 4 | g2,
                b1 << 4 | b2,
                a1 << 4 | a2,
            )),
            _ => Err(ParseError::InvalidHex),
        }
    }

    pub const fn rgba(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub const fn red(&self) -> u8 {
        self.r
    }

    pub const fn green(&self) -> u8 {
        self.g
    }

    pub const fn blue(&self) -> u8 {
        self.b
    }

    pub const fn alpha(&self) -> u8 {
        self.a
    }

    pub fn html(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

const fn hex_to_u8(hex: u8) -> Option<u8> {
    match hex {
        b'0'..=b'9' => Some(hex - b'0'),
        b'a'..=b'f' => Some(hex - b'a' + 10),
        b'A'..=b'F' => Some(hex - b'A' + 10),
        _ => None,
    }
}

fn lookup_name(name: &str) -> Option<ColorU8> {
    let col = match name.to_ascii_lowercase().as_str() {
        "black" => BLACK,
        "white" => WHITE,
        "red" => RED,
        "green" => GREEN,
        "blue" => BLUE,
        "gray" | "grey" => GRAY,
        "transparent" => TRANSPARENT,
        _ => return None,
    };
    Some(col)
}

/// Color parsing error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    InvalidFormat,
    InvalidComponent,
    InvalidAlphaComponent,
    InvalidHex,
    UnknownName,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidFormat => write!(f, "invalid color format"),
            ParseError::InvalidComponent => write!(f, "invalid color component"),
            ParseError::InvalidAlphaComponent => write!(f, "invalid alpha component"),
            ParseError::InvalidHex => write!(f, "invalid hex color"),
            ParseError::UnknownName => write!(f, "unknown color name"),
        }
    }
}

impl error::Error for ParseError {}

fn parse_component(s: &str) -> Result<u8, ParseError> {
    let s = s.trim();
    if let Some(pct) = s.strip_suffix('%') {
        let val = pct
            .trim()
            .parse::<f32>()
            .map_err(|_| ParseError::InvalidComponent)?;
        if !(0.0..=100.0).contains(&val) {
            return Err(ParseError::InvalidComponent);
        }
        Ok(((val / 100.0) * 255.0).round() as u8)
    } else {
        let v: i32 = s.parse().map_err(|_| ParseError::InvalidComponent)?;
        u8::try_from(v).map_err(|_| ParseError::InvalidComponent)
    }
}

fn parse_alpha(s: &str) -> Result<u8, ParseError> {
    let s = s.trim();
    let val = s
        .parse::<f32>()
        .map_err(|_| ParseError::InvalidAlphaComponent)?;
    if !(0.0..=1.0).contains(&val) {
        return Err(ParseError::InvalidAlphaComponent);
    }
    Ok((val * 255.0).round() as u8)
}

impl FromStr for ColorU8 {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        if raw.is_empty() {
            return Err(ParseError::InvalidFormat);
        }
        if raw.starts_with('#') {
            return ColorU8::from_html(raw);
        }

        let lower = raw.to_ascii_lowercase();
        let (inner, with_alpha) = if let Some(inner) = lower.strip_prefix("rgba(") {
            (inner, true)
        } else if let Some(inner) = lower.strip_prefix("rgb(") {
            (inner, false)
        } else {
            return lookup_name(raw).ok_or(ParseError::UnknownName);
        };
        let inner = inner.strip_suffix(')').ok_or(ParseError::InvalidFormat)?;
        let parts: Vec<&str> = inner.split(',').collect();
        match (parts.as_slice(), with_alpha) {
            ([r, g, b], false) => Ok(ColorU8::from_rgb(
                parse_component(r)?,
                parse_component(g)?,
                parse_component(b)?,
            )),
            ([r, g, b, a], true) => Ok(ColorU8::from_rgba(
                parse_component(r)?,
                parse_component(g)?,
                parse_component(b)?,
                parse_alpha(a)?,
            )),
            _ => Err(ParseError::InvalidFormat),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_html_hex() {
        assert_eq!("#ff0000".parse::<ColorU8>().unwrap(), RED);
        assert_eq!("#f00".parse::<ColorU8>().unwrap(), RED);

        let c = "#ff000080".parse::<ColorU8>().unwrap();
        assert_eq!(c.rgba(), [255, 0, 0, 128]);
        assert_eq!(c.html(), "#ff0000");
    }

    #[test]
    fn parse_css_rgb_rgba() {
        assert_eq!("rgb(255,0,0)".parse::<ColorU8>().unwrap(), RED);
        assert_eq!("rgb(100%,0%,0%)".parse::<ColorU8>().unwrap(), RED);

        let c = "rgba(255, 0, 0, 0.5)".parse::<ColorU8>().unwrap();
        assert_eq!(c.rgba(), [255, 0, 0, 128]);
    }

    #[test]
    fn parse_named_colors() {
        assert_eq!("Blue".parse::<ColorU8>().unwrap(), BLUE);
        assert_eq!("grey".parse::<ColorU8>().unwrap(), GRAY);
    }

    #[test]
    fn parse_errors() {
        assert_eq!("".parse::<ColorU8>(), Err(ParseError::InvalidFormat));
        assert_eq!("#12345".parse::<ColorU8>(), Err(ParseError::InvalidHex));
        assert_eq!("#zzz".parse::<ColorU8>(), Err(ParseError::InvalidHex));
        assert_eq!(
            "rgb(300,0,0)".parse::<ColorU8>(),
            Err(ParseError::InvalidComponent)
        );
        assert_eq!(
            "rgba(255,0,0,2.0)".parse::<ColorU8>(),
            Err(ParseError::InvalidAlphaComponent)
        );
        assert_eq!("rgb(1,2)".parse::<ColorU8>(), Err(ParseError::InvalidFormat));
        assert_eq!("notacolor".parse::<ColorU8>(), Err(ParseError::UnknownName));
    }
}
