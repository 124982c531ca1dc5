use anyhow::Result;
use console::style;
use drawable::{Resolver, Scaler};
use std::path::PathBuf;

/// Resizes every asset into the density buckets below its own, one after the
/// other. Stops at the first asset that fails.
pub fn dpi(resolver: &Resolver, assets: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut generated = vec![];
    for asset in assets {
        let _span = tracing::info_span!("dpi", asset = %asset.display()).entered();
        let drawable = resolver.resolve(asset)?;
        let source = drawable.source();
        println!("{} {}", style("source").green(), source.display());
        let scaler = Scaler::open(&source)?;
        generated.extend(scaler.resize_to_folders(&drawable, |_, path| {
            println!("{} {}", style("generated").green(), path.display());
        })?);
    }
    Ok(generated)
}
