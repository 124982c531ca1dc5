use crate::{Density, Error, Result};

/// Density at which one dp equals one pixel.
pub const BASELINE: Density = Density::Mdpi;

const UNITS: [&str; 2] = ["dip", "dp"];

/// Parses a density independent length such as `30dp`.
pub fn parse_dp(input: &str) -> Result<i64> {
    let invalid = || Error::InvalidUnitFormat(input.to_string());
    let trimmed = input.trim();
    let value = UNITS
        .iter()
        .find_map(|unit| trimmed.strip_suffix(unit))
        .ok_or_else(invalid)?;
    if !value
        .trim_start_matches(['+', '-'])
        .starts_with(|c: char| c.is_ascii_digit())
    {
        return Err(invalid());
    }
    value.parse().map_err(|_| invalid())
}

/// Pixel size of `dp` in every density bucket, in ascending order.
pub fn convert(dp: i64) -> [(Density, f64); 5] {
    Density::ALL.map(|density| {
        let px = dp as f64 / f64::from(BASELINE.factor()) * f64::from(density.factor());
        (density, px)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dp() -> Result<()> {
        assert_eq!(parse_dp("30dp")?, 30);
        assert_eq!(parse_dp(" 12dip ")?, 12);
        assert_eq!(parse_dp("0dp")?, 0);
        assert_eq!(parse_dp("-8dp")?, -8);
        Ok(())
    }

    #[test]
    fn test_parse_dp_invalid() {
        for input in ["30", "30px", "dp", "3.5dp", "30 dp", "x30dp", "--3dp", "30sp", ""] {
            let err = parse_dp(input).unwrap_err();
            assert!(matches!(err, Error::InvalidUnitFormat(_)), "{input}: {err}");
        }
    }

    #[test]
    fn test_convert() {
        let px: Vec<_> = convert(30)
            .iter()
            .map(|(density, px)| (density.label(), *px))
            .collect();
        assert_eq!(
            px,
            [
                ("mdpi", 30.0),
                ("hdpi", 45.0),
                ("xhdpi", 60.0),
                ("xxhdpi", 90.0),
                ("xxxhdpi", 120.0),
            ]
        );
        assert_eq!(convert(1)[1].1, 1.5);
    }
}
