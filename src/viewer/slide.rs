use std::path::PathBuf;

use raylib::prelude::*;
use tracing::warn;

use crate::constants::SLIDE_FILL_RATIO;
use crate::surface::ImageProvider;
use crate::viewer::texture_loader::load_texture_with_exif_rotation;

pub struct Slide {
    path: PathBuf,
    resolved: Option<PathBuf>,
    texture: Option<Texture2D>,
    failed: bool,
}

/// Slide images, loaded into GPU textures only once the slider asks for them.
///
/// Resolving a source only queues the slide: textures need the raylib
/// handle, so the frame loop calls [`Gallery::load_pending`].
pub struct Gallery {
    slides: Vec<Slide>,
    pending: Vec<usize>,
}

impl Gallery {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        let slides = paths
            .into_iter()
            .map(|path| Slide {
                path,
                resolved: None,
                texture: None,
                failed: false,
            })
            .collect();
        Self {
            slides,
            pending: Vec::new(),
        }
    }

    pub fn load_pending(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        for index in self.pending.drain(..) {
            let Some(slide) = self.slides.get_mut(index) else {
                continue;
            };
            let Some(path) = slide.resolved.as_deref() else {
                continue;
            };
            match load_texture_with_exif_rotation(rl, thread, path) {
                Ok(texture) => slide.texture = Some(texture),
                Err(e) => {
                    warn!(index, "slide image unavailable: {:#}", e);
                    slide.failed = true;
                }
            }
        }
    }

    /// Draws slide `index` centered, scaled down to fit the screen.
    pub fn draw(&self, index: usize, d: &mut RaylibDrawHandle) {
        let Some(slide) = self.slides.get(index) else {
            return;
        };
        let screen_width = d.get_screen_width() as f32;
        let screen_height = d.get_screen_height() as f32;

        let Some(texture) = &slide.texture else {
            let name = slide
                .path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let (text, color) = if slide.failed {
                (format!("Cannot display {name}"), Color::RED)
            } else {
                (format!("Loading {name}"), Color::GRAY)
            };
            d.draw_text(&text, 20, 20, 20, color);
            return;
        };

        let tex_width = texture.width() as f32;
        let tex_height = texture.height() as f32;
        let scale = fit_scale(tex_width, tex_height, screen_width, screen_height);
        let scaled_width = tex_width * scale;
        let scaled_height = tex_height * scale;

        d.draw_texture_pro(
            texture,
            Rectangle::new(0.0, 0.0, tex_width, tex_height),
            Rectangle::new(
                (screen_width - scaled_width) * 0.5,
                (screen_height - scaled_height) * 0.5,
                scaled_width,
                scaled_height,
            ),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }
}

impl ImageProvider for Gallery {
    fn deferred_source(&self, index: usize) -> Option<String> {
        self.slides
            .get(index)
            .map(|slide| slide.path.to_string_lossy().into_owned())
    }

    fn has_resolved_source(&self, index: usize) -> bool {
        self.slides
            .get(index)
            .is_some_and(|slide| slide.resolved.is_some())
    }

    fn set_resolved_source(&mut self, index: usize, value: String) {
        if let Some(slide) = self.slides.get_mut(index) {
            slide.resolved = Some(PathBuf::from(value));
            self.pending.push(index);
        }
    }
}

/// Largest scale (never above 1) keeping the image inside the fill area.
fn fit_scale(tex_width: f32, tex_height: f32, screen_width: f32, screen_height: f32) -> f32 {
    if tex_width <= 0.0 || tex_height <= 0.0 {
        return 1.0;
    }
    let max_width = screen_width * SLIDE_FILL_RATIO;
    let max_height = screen_height * SLIDE_FILL_RATIO;
    (max_width / tex_width).min(max_height / tex_height).min(1.0)
}
