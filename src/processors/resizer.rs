// picresize/src/processors/resizer.rs
use crate::core::Resolution;
use image::{imageops::FilterType, DynamicImage};

/// Resamples to an exact resolution. Aspect ratio is not preserved.
pub struct Resizer {
    filter: FilterType,
}

impl Resizer {
    pub fn new() -> Self {
        Self {
            filter: FilterType::Lanczos3,
        }
    }

    pub fn resize(&self, image: &DynamicImage, resolution: Resolution) -> DynamicImage {
        let (width, height) = (resolution.width(), resolution.height());

        if width == image.width() && height == image.height() {
            log::debug!("Image dimensions unchanged, skipping resize");
            return image.clone();
        }

        log::debug!(
            "Resizing image from {}x{} to {}x{}",
            image.width(),
            image.height(),
            width,
            height
        );

        image.resize_exact(width, height, self.filter)
    }
}

impl Default for Resizer {
    fn default() -> Self {
        Self::new()
    }
}
