use anyhow::Result;
use drawable::Density;

pub fn convert(value: &str) -> Result<()> {
    let dp = drawable::parse_dp(value)?;
    for (density, px) in drawable::convert(dp) {
        println!("{}", format_row(density, px));
    }
    Ok(())
}

fn format_row(density: Density, px: f64) -> String {
    format!("{:>7} {:.1}px", density.label(), px)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rows() {
        let rows: Vec<_> = drawable::convert(30)
            .into_iter()
            .map(|(density, px)| format_row(density, px))
            .collect();
        assert_eq!(
            rows,
            [
                "   mdpi 30.0px",
                "   hdpi 45.0px",
                "  xhdpi 60.0px",
                " xxhdpi 90.0px",
                "xxxhdpi 120.0px",
            ]
        );
    }

    #[test]
    fn test_convert_rejects_pixels() {
        assert!(convert("30px").is_err());
    }
}
