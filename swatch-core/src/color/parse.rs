use core::{fmt, str::FromStr};

use palette::{rgb::FromHexError, Srgb};

use super::{Color, Hsl};

/// Why an input string was not accepted as a color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseFailure {
    Empty,
    InvalidLength,
    InvalidHex,
    InvalidFunc,
    OutOfRange,
    Unrecognized,
}

impl fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ParseFailure::*;
        let msg = match self {
            Empty => "empty color string",
            InvalidLength => "invalid hex length",
            InvalidHex => "invalid hex digits",
            InvalidFunc => "invalid rgb()/hsl() function",
            OutOfRange => "component out of range",
            Unrecognized => "not a hex, rgb(), hsl() or named color",
        };
        f.write_str(msg)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    InvalidColorFormat { input: String, reason: ParseFailure },
}

impl ColorError {
    fn invalid(input: &str, reason: ParseFailure) -> Self {
        Self::InvalidColorFormat {
            input: input.to_string(),
            reason,
        }
    }

    /// The input which failed to parse
    pub fn input(&self) -> &str {
        match self {
            Self::InvalidColorFormat { input, .. } => input,
        }
    }

    pub fn reason(&self) -> ParseFailure {
        match self {
            Self::InvalidColorFormat { reason, .. } => *reason,
        }
    }
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidColorFormat { input, reason } => {
                write!(f, "invalid color format {input:?}: {reason}")
            }
        }
    }
}

impl std::error::Error for ColorError {}

/// Parse the digits of a hex color, without the leading `#`.
///
/// The allowed formats are:
/// * RGB
/// * RRGGBB
fn parse_hex(hex: &str) -> Result<Color, ParseFailure> {
    if !hex.bytes().all(|c| c.is_ascii_hexdigit()) {
        return Err(ParseFailure::InvalidHex);
    }

    Srgb::<u8>::from_str(hex)
        .map(Color::from)
        .map_err(|err| match err {
            FromHexError::ParseIntError(_) => ParseFailure::InvalidHex,
            FromHexError::HexFormatError(_) | FromHexError::RgbaHexFormatError(_) => {
                ParseFailure::InvalidLength
            }
        })
}

fn split_args(args: &str) -> Result<[&str; 3], ParseFailure> {
    let mut parts = args.split(',').map(str::trim);
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(a), Some(b), Some(c), None) => Ok([a, b, c]),
        _ => Err(ParseFailure::InvalidFunc),
    }
}

/// Parse the arguments of `rgb(r, g, b)` with integer channels
fn parse_css_rgb(args: &str) -> Result<Color, ParseFailure> {
    let channel = |v: &str| -> Result<u8, ParseFailure> {
        let v = v.parse::<u16>().map_err(|_| ParseFailure::InvalidFunc)?;
        u8::try_from(v).map_err(|_| ParseFailure::OutOfRange)
    };

    let [r, g, b] = split_args(args)?;
    Ok(Color::rgb(channel(r)?, channel(g)?, channel(b)?))
}

/// Parse the arguments of `hsl(h, s%, l%)`
fn parse_css_hsl(args: &str) -> Result<Color, ParseFailure> {
    let percent = |v: &str| -> Result<f64, ParseFailure> {
        let v = v
            .strip_suffix('%')
            .unwrap_or(v)
            .trim()
            .parse::<f64>()
            .map_err(|_| ParseFailure::InvalidFunc)?;

        if (0.0..=100.0).contains(&v) {
            Ok(v / 100.0)
        } else {
            Err(ParseFailure::OutOfRange)
        }
    };

    let [h, s, l] = split_args(args)?;
    let hue = h
        .strip_suffix("deg")
        .unwrap_or(h)
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or(ParseFailure::InvalidFunc)?;

    Ok(Color::from_hsl(Hsl::new(hue, percent(s)?, percent(l)?)))
}

fn parse_inner(s: &str) -> Result<Color, ParseFailure> {
    if s.is_empty() {
        return Err(ParseFailure::Empty);
    }

    if let Some(rest) = s.strip_prefix('#') {
        return parse_hex(rest);
    }

    let lower = s.to_ascii_lowercase();
    if let Some(args) = lower.strip_prefix("rgb(").and_then(|x| x.strip_suffix(')')) {
        return parse_css_rgb(args);
    }

    if let Some(args) = lower.strip_prefix("hsl(").and_then(|x| x.strip_suffix(')')) {
        return parse_css_hsl(args);
    }

    if let Some(color) = palette::named::from_str(&lower) {
        return Ok(color.into());
    }

    // bare hex digits such as `3498db`
    if matches!(s.len(), 3 | 6) && s.bytes().all(|c| c.is_ascii_hexdigit()) {
        return parse_hex(s);
    }

    Err(ParseFailure::Unrecognized)
}

/// Parse a color from user input.
///
/// Accepts `#RGB`, `#RRGGBB`, `rgb(r, g, b)`, `hsl(h, s%, l%)` and CSS color keywords.
/// Surrounding whitespace is ignored and keywords are case-insensitive.
pub fn parse_color(s: &str) -> Result<Color, ColorError> {
    parse_inner(s.trim()).map_err(|reason| ColorError::invalid(s, reason))
}

impl FromStr for Color {
    type Err = ColorError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorError;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse_color(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex() {
        assert_eq!(parse_color("#3498DB"), Ok(Color::rgb(0x34, 0x98, 0xdb)));
        assert_eq!(parse_color("#3498db"), Ok(Color::rgb(0x34, 0x98, 0xdb)));
        assert_eq!(parse_color("#fa0"), Ok(Color::rgb(0xff, 0xaa, 0x00)));
        assert_eq!(parse_color("  3498db "), Ok(Color::rgb(0x34, 0x98, 0xdb)));
    }

    #[test]
    fn functions() {
        assert_eq!(
            parse_color("rgb(52, 152, 219)"),
            Ok(Color::rgb(0x34, 0x98, 0xdb))
        );
        assert_eq!(parse_color("RGB(0,0,0)"), Ok(Color::BLACK));
        assert_eq!(parse_color("hsl(0, 100%, 50%)"), Ok(Color::rgb(255, 0, 0)));
        assert_eq!(parse_color("hsl(120deg, 100%, 25%)"), Ok(Color::rgb(0, 128, 0)));
    }

    #[test]
    fn named() {
        assert_eq!(parse_color("Red"), Ok(Color::rgb(255, 0, 0)));
        assert_eq!(parse_color("REBECCAPURPLE"), Ok(Color::rgb(0x66, 0x33, 0x99)));
        assert_eq!(parse_color("grey"), parse_color("gray"));
        assert_eq!(parse_color("green"), Ok(Color::rgb(0, 128, 0)));
        assert_eq!(
            parse_color("transparent").unwrap_err().reason(),
            ParseFailure::Unrecognized
        );
    }

    #[test]
    fn rejects_garbage() {
        let reason = |s: &str| parse_color(s).unwrap_err().reason();

        assert_eq!(reason("not-a-color"), ParseFailure::Unrecognized);
        assert_eq!(reason(""), ParseFailure::Empty);
        assert_eq!(reason("   "), ParseFailure::Empty);
        assert_eq!(reason("#12345"), ParseFailure::InvalidLength);
        assert_eq!(reason("#12345g"), ParseFailure::InvalidHex);
        assert_eq!(reason("#+12"), ParseFailure::InvalidHex);
        assert_eq!(reason("#é12"), ParseFailure::InvalidHex);
        assert_eq!(reason("#"), ParseFailure::InvalidLength);
        assert_eq!(reason("rgb(1, 2)"), ParseFailure::InvalidFunc);
        assert_eq!(reason("rgb(256, 0, 0)"), ParseFailure::OutOfRange);
        assert_eq!(reason("hsl(0, 120%, 50%)"), ParseFailure::OutOfRange);
        assert_eq!(reason("hsl(nan, 10%, 50%)"), ParseFailure::InvalidFunc);
    }

    #[test]
    fn error_keeps_input() {
        let err = parse_color("not-a-color").unwrap_err();
        assert_eq!(err.input(), "not-a-color");
        assert_eq!(
            err.to_string(),
            "invalid color format \"not-a-color\": not a hex, rgb(), hsl() or named color"
        );
    }
}
