use std::path::Path;

use anyhow::Context as _;

/// Natural pixel size of a logo file.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LogoDimensions {
    pub width: f64,
    pub height: f64,
}

impl LogoDimensions {
    /// `width / height`; zero-height files yield a non-finite ratio that the balancer guards.
    pub fn ratio(self) -> f64 {
        self.width / self.height
    }
}

/// Read the intrinsic size of an SVG (via `usvg`) or raster image (via `image`).
pub fn probe_logo(path: &Path) -> anyhow::Result<LogoDimensions> {
    let is_svg = path
        .extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg") || ext.eq_ignore_ascii_case("svgz"));

    if is_svg {
        let bytes =
            std::fs::read(path).with_context(|| format!("read svg '{}'", path.display()))?;
        return parse_svg_dimensions(&bytes)
            .with_context(|| format!("probe svg '{}'", path.display()));
    }

    let (width, height) = image::image_dimensions(path)
        .with_context(|| format!("probe image '{}'", path.display()))?;
    tracing::debug!(width, height, path = %path.display(), "probed raster logo");
    Ok(LogoDimensions {
        width: f64::from(width),
        height: f64::from(height),
    })
}

pub fn parse_svg_dimensions(bytes: &[u8]) -> anyhow::Result<LogoDimensions> {
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_data(bytes, &opts).context("parse svg tree")?;
    let size = tree.size();
    tracing::debug!(width = size.width(), height = size.height(), "probed svg logo");
    Ok(LogoDimensions {
        width: f64::from(size.width()),
        height: f64::from(size.height()),
    })
}
