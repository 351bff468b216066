//!
//! Conversion between numeric dispersion and its `± N` display string.
//!

///
/// Range string parsing error.
///
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid range `{0}`: expected `± <number>`, `+/- <number>` or `±<number>%`")]
pub struct Error(pub String);

///
/// Formats a dispersion as a range display string.
///
pub fn format(dispersion: f64) -> String {
    format!("± {dispersion}")
}

///
/// Parses a range display string back to a numeric dispersion.
///
/// A percentage is relative to `value`. An empty range means no dispersion.
///
pub fn parse(range: &str, value: f64) -> Result<f64, Error> {
    let trimmed = range.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }

    let body = trimmed
        .strip_prefix('±')
        .or_else(|| trimmed.strip_prefix("+/-"))
        .unwrap_or(trimmed)
        .trim();
    let (body, is_percentage) = match body.strip_suffix('%') {
        Some(body) => (body.trim_end(), true),
        None => (body, false),
    };

    let number = body
        .replace(',', "")
        .parse::<f64>()
        .map_err(|_| Error(range.to_owned()))?;
    if !number.is_finite() || number < 0.0 {
        return Err(Error(range.to_owned()));
    }

    if is_percentage {
        Ok(value * number / 100.0)
    } else {
        Ok(number)
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn parse_canonical() {
        assert_eq!(super::parse("± 49", 283.0), Ok(49.0));
    }

    #[test]
    fn parse_variants() {
        assert_eq!(super::parse("±3", 1.0), Ok(3.0));
        assert_eq!(super::parse("+/- 1,234", 1.0), Ok(1234.0));
        assert_eq!(super::parse("0.25", 1.0), Ok(0.25));
        assert_eq!(super::parse("", 1.0), Ok(0.0));
        assert_eq!(super::parse("  ", 1.0), Ok(0.0));
    }

    #[test]
    fn parse_percentage() {
        assert_eq!(super::parse("±2%", 500.0), Ok(10.0));
        assert_eq!(super::parse("± 50 %", 8.0), Ok(4.0));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(super::parse("± lots", 1.0).is_err());
        assert!(super::parse("± -3", 1.0).is_err());
        assert!(super::parse("± inf", 1.0).is_err());
    }

    #[test]
    fn format_parses_back() {
        for dispersion in [0.0, 3.0, 0.5, 1234.125, 1e-7] {
            let range = super::format(dispersion);
            assert_eq!(super::parse(range.as_str(), 1.0), Ok(dispersion));
        }
        assert_eq!(super::format(49.0), "± 49");
    }
}
