use crate::utils::error::Result;
use std::path::Path;

/// Decode an image file and re-encode it as lossy WEBP at the given quality.
pub fn encode_webp(path: &Path, quality: f32) -> Result<Vec<u8>> {
    let image = image::open(path)?;
    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();

    let encoder = webp::Encoder::from_rgba(rgba.as_raw(), width, height);
    let webp = encoder.encode(quality);
    Ok(webp.to_vec())
}
