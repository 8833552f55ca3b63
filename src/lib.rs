//! Carousel controller: a slide-index state machine with autoplay, lazy
//! image loading and a position bar kept in sync with the current slide.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod error;
pub mod input;
pub mod lazy;
pub mod markup;
pub mod slider;
pub mod state;
pub mod surface;
pub mod timer;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use config::SliderConfig;
pub use error::{Result, SliderError};
pub use input::{InputBus, InputSource, Intent};
pub use slider::Slider;
pub use state::{AutoplayState, Direction, SliderState};
pub use surface::{Collection, ImageProvider, PresentationSurface};
