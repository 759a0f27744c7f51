//! Position codec: symbolic zodiac positions to and from arc-minute indices.

use crate::{AspectError, Position, ZodiacSign, CIRCLE_MINUTES, MINUTES_PER_SIGN};

/// Encodes a sign/degree/minute triple as an arc-minute index.
pub fn encode(sign: ZodiacSign, degree: u32, minute: u32) -> Result<Position, AspectError> {
    if degree > 29 {
        return Err(AspectError::InvalidInput(format!(
            "degree {} out of range 0..=29",
            degree
        )));
    }
    if minute > 59 {
        return Err(AspectError::InvalidInput(format!(
            "minute {} out of range 0..=59",
            minute
        )));
    }
    Ok(sign as u32 * MINUTES_PER_SIGN + degree * 60 + minute)
}

/// Decodes an arc-minute index back into its sign/degree/minute triple.
///
/// The inverse of [`encode`] for every valid input; positions are reduced
/// modulo the full circle first, so 21600 decodes the same as 0.
pub fn decode(position: Position) -> (ZodiacSign, u32, u32) {
    let position = position % CIRCLE_MINUTES;
    let sign_index = (position / MINUTES_PER_SIGN) as usize;
    let sign = ZodiacSign::from_index(sign_index).unwrap_or(ZodiacSign::Aries); // Fallback
    let degree = (position % MINUTES_PER_SIGN) / 60;
    let minute = position % 60;
    (sign, degree, minute)
}

/// Parses a table cell of the form `<sign-symbol> <deg>°<min>′` (a plain
/// apostrophe is accepted for the minute mark as well).
///
/// Returns `None` on any malformed input. This is the table-loading path:
/// blank and unparseable cells mean "no target here" and are expected data,
/// never an error.
pub fn parse_position(text: &str) -> Option<Position> {
    let mut parts = text.split_whitespace();
    let symbol = parts.next()?;
    let angle = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    let sign = ZodiacSign::from_symbol(symbol)?;
    let (degree_part, minute_part) = angle.split_once('°')?;
    let minute_part = minute_part.trim_end_matches(&['\'', '′'][..]);
    let degree: u32 = degree_part.parse().ok()?;
    let minute: u32 = minute_part.parse().ok()?;
    encode(sign, degree, minute).ok()
}

/// Renders a position the way the dataset writes it, e.g. `♊ 26°45′`.
pub fn format_position(position: Position) -> String {
    let (sign, degree, minute) = decode(position);
    format!("{} {}°{}′", sign.symbol(), degree, minute)
}
