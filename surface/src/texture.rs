//! Texture loading
//!
//! Decodes a raster image file and uploads it through the egui texture
//! manager. Decode failure is a no-op: the handle stays unset and callers
//! see `None`, matching the "absent resource, no crash" contract. The GPU
//! side is released when the handle is dropped.

use std::path::Path;

use tracing::{debug, warn};

/// A loaded (or failed-to-load) texture
#[derive(Clone)]
pub struct Texture {
    unit: u32,
    handle: Option<egui::TextureHandle>,
}

impl Texture {
    /// Load `path` and assign it the caller's texture unit index.
    ///
    /// On decode failure the returned value carries no handle.
    pub fn load(ctx: &egui::Context, path: impl AsRef<Path>, unit: u32) -> Self {
        let path = path.as_ref();
        let handle = match decode(path) {
            Ok(color_image) => {
                debug!(path = %path.display(), unit, "texture loaded");
                Some(ctx.load_texture(
                    path.display().to_string(),
                    color_image,
                    egui::TextureOptions::LINEAR,
                ))
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to load texture");
                None
            }
        };
        Self { unit, handle }
    }

    /// An unset texture, as produced by a failed load
    pub fn unset(unit: u32) -> Self {
        Self { unit, handle: None }
    }

    /// Render id, or `None` when the load failed
    pub fn id(&self) -> Option<egui::TextureId> {
        self.handle.as_ref().map(|h| h.id())
    }

    pub fn unit(&self) -> u32 {
        self.unit
    }

    /// Pixel size, or `None` when the load failed
    pub fn size(&self) -> Option<geom::Vec2> {
        self.handle.as_ref().map(|h| {
            let [w, h] = h.size();
            geom::Vec2::new(w as f32, h as f32)
        })
    }

    pub fn is_loaded(&self) -> bool {
        self.handle.is_some()
    }
}

fn decode(path: &Path) -> Result<egui::ColorImage, image::ImageError> {
    let dynamic = image::ImageReader::open(path)
        .map_err(image::ImageError::IoError)?
        .decode()?;
    let rgba = dynamic.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(
        size,
        rgba.as_flat_samples().as_slice(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_texture_has_no_handle() {
        let texture = Texture::unset(3);
        assert!(!texture.is_loaded());
        assert_eq!(texture.id(), None);
        assert_eq!(texture.size(), None);
        assert_eq!(texture.unit(), 3);
    }

    #[test]
    fn test_decode_missing_file_fails() {
        assert!(decode(Path::new("definitely/not/here.png")).is_err());
    }
}
