pub const DEFAULT_INTERVAL_MS: u64 = 2000;           // Autoplay period between two forward steps

pub const ITEM_SELECTOR: &str = ".slider-item";        // Slide elements
pub const ACTIVE_CLASS_NAME: &str = "slider-item-action"; // Marker on the current slide
pub const BAR_SELECTOR: &str = "#bar";                 // Container of the bar dots
pub const BAR_ITEM_CLASS_NAME: &str = "bar-item";      // One dot per slide
pub const BAR_ACTIVE_CLASS_NAME: &str = "bar-item-active"; // Marker on the current dot
pub const PREV_BUTTON_SELECTOR: &str = "#slider-btn-prev";
pub const NEXT_BUTTON_SELECTOR: &str = "#slider-btn-next";

pub const DEFERRED_SOURCE_ATTR: &str = "data-src";     // Image url waiting to be loaded
pub const RESOLVED_SOURCE_ATTR: &str = "src";          // Set once the image is requested
pub const SLIDE_NUMBER_ATTR: &str = "data-slide-number"; // Back-reference from a dot to its slide

pub const RENDER_WIDTH: i32 = 1280;                    // Initial window width
pub const RENDER_HEIGHT: i32 = 720;                    // Initial window height
pub const FPS: u32 = 60;                               // Frames per second
pub const BAR_DOT_RADIUS: f32 = 6.0;                   // Bar dot radius (pixels)
pub const BAR_DOT_SPACING: f32 = 24.0;                 // Distance between two dot centers (pixels)
pub const BAR_BOTTOM_MARGIN: f32 = 28.0;               // Distance from the bottom edge to the dots
pub const EDGE_ZONE_RATIO: f32 = 0.15;                 // Width share of the left/right click zones
pub const SLIDE_FILL_RATIO: f32 = 0.9;                 // Max share of the screen a slide covers
