use raylib::prelude::*;

use crate::constants::{BAR_BOTTOM_MARGIN, BAR_DOT_RADIUS, BAR_DOT_SPACING};
use crate::surface::{Collection, PresentationSurface};

/// Active flags of the on-screen slides and bar dots.
pub struct ScreenSurface {
    slides: Vec<bool>,
    bar: Vec<bool>,
}

impl ScreenSurface {
    pub fn new(slide_count: usize) -> Self {
        Self {
            slides: vec![false; slide_count],
            bar: Vec::with_capacity(slide_count),
        }
    }

    pub fn bar_len(&self) -> usize {
        self.bar.len()
    }

    pub fn draw_bar(&self, d: &mut RaylibDrawHandle) {
        let width = d.get_screen_width() as f32;
        let height = d.get_screen_height() as f32;
        for (index, active) in self.bar.iter().enumerate() {
            let (x, y) = bar_item_center(index, self.bar.len(), width, height);
            let color = if *active { Color::WHITE } else { Color::DARKGRAY };
            d.draw_circle_v(Vector2::new(x, y), BAR_DOT_RADIUS, color);
        }
    }

    fn flags(&mut self, collection: Collection) -> &mut Vec<bool> {
        match collection {
            Collection::Slides => &mut self.slides,
            Collection::Bar => &mut self.bar,
        }
    }
}

impl PresentationSurface for ScreenSurface {
    fn count(&self, collection: Collection) -> usize {
        match collection {
            Collection::Slides => self.slides.len(),
            Collection::Bar => self.bar.len(),
        }
    }

    fn set_active(&mut self, collection: Collection, index: usize) {
        if let Some(flag) = self.flags(collection).get_mut(index) {
            *flag = true;
        }
    }

    fn clear_active(&mut self, collection: Collection) {
        // at most one flag is set
        if let Some(flag) = self.flags(collection).iter_mut().find(|flag| **flag) {
            *flag = false;
        }
    }

    fn append_bar_item(&mut self, index: usize) {
        debug_assert_eq!(index, self.bar.len());
        self.bar.push(false);
    }
}

/// Center of bar dot `index`; the dots form a centered row near the bottom edge.
pub fn bar_item_center(index: usize, count: usize, width: f32, height: f32) -> (f32, f32) {
    let row_width = count.saturating_sub(1) as f32 * BAR_DOT_SPACING;
    let x = (width - row_width) * 0.5 + index as f32 * BAR_DOT_SPACING;
    (x, height - BAR_BOTTOM_MARGIN)
}

/// Bar dot under `(x, y)`, with a slightly larger hit radius than drawn.
pub fn bar_item_at(x: f32, y: f32, count: usize, width: f32, height: f32) -> Option<usize> {
    let hit_radius = BAR_DOT_RADIUS * 2.0;
    (0..count).find(|&index| {
        let (cx, cy) = bar_item_center(index, count, width, height);
        let (dx, dy) = (x - cx, y - cy);
        dx * dx + dy * dy <= hit_radius * hit_radius
    })
}
