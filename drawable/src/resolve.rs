use crate::{Density, Error, Result};
use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

/// Conventional resource roots, relative to the working directory.
pub const DEFAULT_RES_DIRS: [&str; 2] = ["res", "src/main/res"];

/// A drawable asset located in a resource root.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Drawable {
    res_dir: PathBuf,
    density: Density,
    filename: PathBuf,
}

impl Drawable {
    pub fn res_dir(&self) -> &Path {
        &self.res_dir
    }

    pub fn density(&self) -> Density {
        self.density
    }

    pub fn filename(&self) -> &Path {
        &self.filename
    }

    /// Path of this drawable in the `density` bucket.
    pub fn path(&self, density: Density) -> PathBuf {
        self.res_dir.join(density.folder()).join(&self.filename)
    }

    /// Path of the highest resolution version the drawable was resolved from.
    pub fn source(&self) -> PathBuf {
        self.path(self.density)
    }
}

/// Works out the resource root and source density of a drawable.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Resolver {
    res_dirs: Vec<PathBuf>,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(DEFAULT_RES_DIRS.iter().map(PathBuf::from).collect())
    }
}

impl Resolver {
    /// Creates a resolver that guesses the resource root of bare filenames by
    /// trying `res_dirs` in order.
    pub fn new(res_dirs: Vec<PathBuf>) -> Self {
        Self { res_dirs }
    }

    pub fn res_dirs(&self) -> &[PathBuf] {
        &self.res_dirs
    }

    /// Resolves `path` to a [`Drawable`].
    ///
    /// An existing file is expected to live in a `res/drawable-<density>`
    /// folder. Anything else is treated as a filename which is looked up in
    /// every density bucket of the first existing resource root, highest
    /// density first.
    pub fn resolve<P: AsRef<Path>>(&self, path: P) -> Result<Drawable> {
        let path = path.as_ref();
        let (res_dir, density, filename) = if path.is_file() {
            let abs = absolute(path);
            let res_dir =
                extract_res_dir(&abs).ok_or_else(|| Error::NoResourceRootFound(abs.clone()))?;
            let density =
                extract_density(&abs).ok_or_else(|| Error::NoDensityFound(abs.clone()))?;
            let filename = abs
                .file_name()
                .map(PathBuf::from)
                .ok_or_else(|| Error::NoDensityFound(abs.clone()))?;
            (res_dir, density, filename)
        } else {
            let res_dir = self.guess_res_dir(path)?;
            let density = find_highest_density(res_dir, path)
                .ok_or_else(|| Error::NoDensityFound(path.to_path_buf()))?;
            (absolute(res_dir), density, path.to_path_buf())
        };
        tracing::debug!(
            "resolved {} to {} in {}",
            path.display(),
            density,
            res_dir.display()
        );
        Ok(Drawable {
            res_dir,
            density,
            filename,
        })
    }

    fn guess_res_dir(&self, path: &Path) -> Result<&Path> {
        self.res_dirs
            .iter()
            .map(PathBuf::as_path)
            .find(|dir| dir.is_dir())
            .ok_or_else(|| Error::NoResourceRootFound(path.to_path_buf()))
    }
}

/// Makes `path` absolute without resolving symlinks, so the folder names
/// given by the caller are kept.
fn absolute(path: &Path) -> PathBuf {
    match std::path::absolute(path) {
        Ok(abs) => dunce::simplified(&abs).to_path_buf(),
        Err(_) => path.to_path_buf(),
    }
}

/// Returns the path up to and including the first `res` component.
fn extract_res_dir(path: &Path) -> Option<PathBuf> {
    let mut res_dir = PathBuf::new();
    for component in path.components() {
        res_dir.push(component);
        if component == Component::Normal(OsStr::new("res")) {
            return Some(res_dir);
        }
    }
    None
}

fn extract_density(path: &Path) -> Option<Density> {
    path.components()
        .filter_map(|component| component.as_os_str().to_str())
        .find_map(Density::from_folder)
}

fn find_highest_density(res_dir: &Path, filename: &Path) -> Option<Density> {
    Density::descending().find(|density| {
        let candidate = res_dir.join(density.folder()).join(filename);
        tracing::debug!("probing {}", candidate.display());
        candidate.is_file()
    })
}
