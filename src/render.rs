//! Image loading and drawing helpers
//!
//! Screens ask an [`ImageLoader`] for images during `logic()` and receive a
//! small copyable [`ImageInfo`]. At render time the same handle is drawn
//! through the [`TextureCache`] that produced it.
//!
//! Keeping loading behind a trait means the menus can be driven in tests
//! without an SDL2 video context.

use log::{debug, error};
use sdl2::image::LoadTexture;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use std::collections::HashMap;
use std::path::PathBuf;

/// Opaque index of a loaded image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageHandle(usize);

/// A loaded image and its pixel size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageInfo {
    pub handle: ImageHandle,
    pub width: u32,
    pub height: u32,
}

/// Something that can turn an image path into a drawable handle
pub trait ImageLoader {
    /// Loads (or returns the cached) image at `path`
    ///
    /// Returns `None` and logs when the image can't be loaded. Callers
    /// fall back to procedural drawing.
    fn load_image(&mut self, path: &str) -> Option<ImageInfo>;
}

/// SDL2 texture store keyed by data-relative path
pub struct TextureCache<'a> {
    creator: &'a TextureCreator<WindowContext>,
    root: PathBuf,
    textures: Vec<Texture<'a>>,
    by_path: HashMap<String, ImageInfo>,
}

impl<'a> TextureCache<'a> {
    /// Creates an empty cache resolving paths under `root`
    pub fn new(creator: &'a TextureCreator<WindowContext>, root: impl Into<PathBuf>) -> Self {
        TextureCache {
            creator,
            root: root.into(),
            textures: Vec::new(),
            by_path: HashMap::new(),
        }
    }

    /// Draws a loaded image, clipped to `src`, into `dest`
    pub fn draw(
        &self,
        canvas: &mut Canvas<Window>,
        image: ImageInfo,
        src: Option<Rect>,
        dest: Rect,
    ) -> Result<(), String> {
        match self.textures.get(image.handle.0) {
            Some(texture) => canvas.copy(texture, src, dest),
            None => Ok(()),
        }
    }
}

impl ImageLoader for TextureCache<'_> {
    fn load_image(&mut self, path: &str) -> Option<ImageInfo> {
        if let Some(info) = self.by_path.get(path) {
            return Some(*info);
        }

        let full_path = self.root.join(path);
        match self.creator.load_texture(&full_path) {
            Ok(texture) => {
                let query = texture.query();
                let info = ImageInfo {
                    handle: ImageHandle(self.textures.len()),
                    width: query.width,
                    height: query.height,
                };
                self.textures.push(texture);
                self.by_path.insert(path.to_string(), info);
                debug!("Loaded image {} ({}x{})", path, info.width, info.height);
                Some(info)
            }
            Err(e) => {
                error!("Couldn't load image {}: {}", full_path.display(), e);
                None
            }
        }
    }
}

/// Fills `rect` and outlines it
pub fn draw_panel(
    canvas: &mut Canvas<Window>,
    rect: Rect,
    fill: Color,
    border: Color,
) -> Result<(), String> {
    canvas.set_draw_color(fill);
    canvas.fill_rect(rect)?;
    canvas.set_draw_color(border);
    canvas.draw_rect(rect)
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::collections::HashSet;

    /// Image loader that records requests instead of touching SDL2
    #[derive(Debug, Default)]
    pub struct FakeImages {
        pub requested: Vec<String>,
        missing: HashSet<String>,
        known: HashMap<String, ImageInfo>,
    }

    impl FakeImages {
        pub fn new() -> Self {
            Self::default()
        }

        /// Makes `path` fail to load
        pub fn mark_missing(&mut self, path: &str) {
            self.missing.insert(path.to_string());
        }

        /// Most recently requested path
        pub fn last(&self) -> Option<&str> {
            self.requested.last().map(String::as_str)
        }
    }

    impl ImageLoader for FakeImages {
        fn load_image(&mut self, path: &str) -> Option<ImageInfo> {
            self.requested.push(path.to_string());
            if self.missing.contains(path) {
                return None;
            }
            let next = self.known.len();
            let info = *self.known.entry(path.to_string()).or_insert(ImageInfo {
                handle: ImageHandle(next),
                width: 32,
                height: 32,
            });
            Some(info)
        }
    }
}
