mod convert;
mod error;
mod resolve;
mod scaler;

pub use convert::{convert, parse_dp, BASELINE};
pub use error::{Error, Result};
pub use resolve::{Drawable, Resolver, DEFAULT_RES_DIRS};
pub use scaler::{scaled_width, Scaler};

/// Android display density bucket.
///
/// The discriminant is the scale factor relative to a quarter of `mdpi`, so
/// `mdpi` is 4 and `xxxhdpi` is 16. Variants are declared in ascending order.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(u32)]
pub enum Density {
    Mdpi = 4,
    Hdpi = 6,
    Xhdpi = 8,
    Xxhdpi = 12,
    Xxxhdpi = 16,
}

impl Density {
    /// Every bucket in ascending order.
    pub const ALL: [Density; 5] = [
        Self::Mdpi,
        Self::Hdpi,
        Self::Xhdpi,
        Self::Xxhdpi,
        Self::Xxxhdpi,
    ];

    const FOLDERS: [&'static str; 5] = [
        "drawable-mdpi",
        "drawable-hdpi",
        "drawable-xhdpi",
        "drawable-xxhdpi",
        "drawable-xxxhdpi",
    ];

    fn ordinal(self) -> usize {
        match self {
            Self::Mdpi => 0,
            Self::Hdpi => 1,
            Self::Xhdpi => 2,
            Self::Xxhdpi => 3,
            Self::Xxxhdpi => 4,
        }
    }

    pub fn factor(self) -> u32 {
        self as u32
    }

    /// Name of the resource folder holding drawables of this density.
    pub fn folder(self) -> &'static str {
        Self::FOLDERS[self.ordinal()]
    }

    /// Density qualifier, i.e. the folder name without the `drawable-` prefix.
    pub fn label(self) -> &'static str {
        &self.folder()["drawable-".len()..]
    }

    pub fn from_folder(folder: &str) -> Option<Self> {
        Self::FOLDERS
            .iter()
            .position(|name| *name == folder)
            .map(|i| Self::ALL[i])
    }

    /// Every bucket in descending order, highest resolution first.
    pub fn descending() -> impl Iterator<Item = Density> {
        Self::ALL.into_iter().rev()
    }

    /// Buckets strictly below `self`, from the next lower one down to `mdpi`.
    pub fn below(self) -> impl Iterator<Item = Density> {
        Self::descending().skip(Self::ALL.len() - self.ordinal())
    }
}

impl std::fmt::Display for Density {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folder_mapping_is_bijective() {
        for density in Density::ALL {
            assert_eq!(Density::from_folder(density.folder()), Some(density));
        }
        assert_eq!(Density::from_folder("drawable-xxhdpi"), Some(Density::Xxhdpi));
        assert_eq!(Density::from_folder("drawable-ldpi"), None);
        assert_eq!(Density::from_folder("mipmap-hdpi"), None);
        assert_eq!(Density::from_folder("res"), None);
    }

    #[test]
    fn factors_ascend() {
        let factors: Vec<u32> = Density::ALL.iter().map(|d| d.factor()).collect();
        assert_eq!(factors, [4, 6, 8, 12, 16]);
        assert!(Density::ALL.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn labels() {
        assert_eq!(Density::Mdpi.label(), "mdpi");
        assert_eq!(Density::Xxxhdpi.to_string(), "xxxhdpi");
    }

    #[test]
    fn below_is_strictly_descending() {
        let below: Vec<_> = Density::Xxhdpi.below().collect();
        assert_eq!(below, [Density::Xhdpi, Density::Hdpi, Density::Mdpi]);
        let below: Vec<_> = Density::Xxxhdpi.below().collect();
        assert_eq!(
            below,
            [
                Density::Xxhdpi,
                Density::Xhdpi,
                Density::Hdpi,
                Density::Mdpi
            ]
        );
        assert_eq!(Density::Mdpi.below().count(), 0);
        for density in Density::ALL {
            assert!(density.below().all(|d| d < density));
            assert_eq!(density.below().count(), density.ordinal());
        }
    }
}
