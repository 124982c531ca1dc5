use crate::{Density, Drawable, Error, Result};
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageFormat, ImageReader};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Width of an image with `width` pixels at density `from` once rescaled to
/// density `to`.
pub fn scaled_width(width: u32, from: Density, to: Density) -> u32 {
    let width = f64::from(width) * f64::from(to.factor()) / f64::from(from.factor());
    (width.round() as u32).max(1)
}

/// Decoded drawable that can be written out at lower densities.
pub struct Scaler {
    img: DynamicImage,
}

impl Scaler {
    /// Opens and decodes the png at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut reader = ImageReader::open(path).map_err(|source| Error::FileOpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        reader.set_format(ImageFormat::Png);
        let img = reader.decode().map_err(|source| Error::DecodeFailed {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(img))
    }

    pub fn new(img: DynamicImage) -> Self {
        Self { img }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.img.dimensions()
    }

    /// Writes the image to `path` as png, `width` pixels wide and keeping the
    /// aspect ratio. An existing file is overwritten.
    pub fn write<P: AsRef<Path>>(&self, path: P, width: u32) -> Result<()> {
        let path = path.as_ref();
        let (src_width, src_height) = self.dimensions();
        let height = f64::from(src_height) * f64::from(width) / f64::from(src_width);
        let height = (height.round() as u32).max(1);
        tracing::debug!(
            "resizing {}x{} to {}x{} for {}",
            src_width,
            src_height,
            width,
            height,
            path.display()
        );
        let resized = self.img.resize_exact(width, height, FilterType::Lanczos3);
        let create_failed = |source: std::io::Error| Error::OutputCreateFailed {
            path: path.to_path_buf(),
            source,
        };
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).map_err(create_failed)?;
        }
        let mut out = BufWriter::new(File::create(path).map_err(create_failed)?);
        resized
            .write_to(&mut out, ImageFormat::Png)
            .map_err(|source| Error::EncodeFailed {
                path: path.to_path_buf(),
                source,
            })?;
        out.flush().map_err(create_failed)
    }

    /// Writes a copy of `drawable` into every density bucket below its own,
    /// highest density first.
    ///
    /// `generated` is called after each file is written. The first failure
    /// aborts, leaving the files written so far in place.
    pub fn resize_to_folders<F>(
        &self,
        drawable: &Drawable,
        mut generated: F,
    ) -> Result<Vec<PathBuf>>
    where
        F: FnMut(Density, &Path),
    {
        let (width, _) = self.dimensions();
        let mut paths = vec![];
        for density in drawable.density().below() {
            let path = drawable.path(density);
            self.write(&path, scaled_width(width, drawable.density(), density))?;
            generated(density, &path);
            paths.push(path);
        }
        Ok(paths)
    }
}
