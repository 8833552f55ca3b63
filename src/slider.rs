//! The slide-index state machine.
//!
//! Every index change goes through one entry point which, before returning,
//! requests the new slide's image and moves the active marker on both the
//! slide set and the bar. Autoplay ticks, button presses and bar clicks all
//! end up there.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::config::SliderConfig;
use crate::error::{Result, SliderError};
use crate::input::{InputSource, Intent};
use crate::lazy::ensure_loaded;
use crate::state::{AutoplayState, Direction, SliderState};
use crate::surface::{Collection, ImageProvider, PresentationSurface};
use crate::timer::AutoplayTimer;

pub struct Slider<S, P> {
    config: SliderConfig,
    slide_count: usize,
    current_index: usize,
    timer: AutoplayTimer,
    surface: S,
    images: P,
}

impl<S, P> Slider<S, P>
where
    S: PresentationSurface,
    P: ImageProvider,
{
    /// Builds the bar, marks slide 0 active and requests its image.
    pub fn new(config: SliderConfig, slide_count: usize, surface: S, images: P) -> Self {
        let mut slider = Self {
            timer: AutoplayTimer::new(config.interval()),
            config,
            slide_count,
            current_index: 0,
            surface,
            images,
        };
        slider.build_bar();
        if slide_count > 0 {
            ensure_loaded(&mut slider.images, 0);
            slider.sync_markers();
        }
        info!(slide_count, interval_ms = slider.config.interval_ms, "slider ready");
        slider
    }

    /// Same as [`Slider::new`], with the slide count queried from the surface.
    pub fn from_surface(config: SliderConfig, surface: S, images: P) -> Self {
        let slide_count = surface.count(Collection::Slides);
        Self::new(config, slide_count, surface, images)
    }

    /// Builds a slider and registers its transition handlers on `input`.
    pub fn shared<I>(
        config: SliderConfig,
        slide_count: usize,
        surface: S,
        images: P,
        input: &mut I,
    ) -> Rc<RefCell<Self>>
    where
        I: InputSource + ?Sized,
        S: 'static,
        P: 'static,
    {
        let slider = Rc::new(RefCell::new(Self::new(config, slide_count, surface, images)));
        Self::attach(&slider, input);
        slider
    }

    /// Registers previous/next/jump handlers on `input`. Handlers hold a weak
    /// reference, so dropping the slider silently disables them.
    pub fn attach<I>(this: &Rc<RefCell<Self>>, input: &mut I)
    where
        I: InputSource + ?Sized,
        S: 'static,
        P: 'static,
    {
        let weak = Rc::downgrade(this);
        input.on_previous(Box::new(move || dispatch(&weak, Intent::PreviousRequested)));
        let weak = Rc::downgrade(this);
        input.on_next(Box::new(move || dispatch(&weak, Intent::NextRequested)));
        let weak = Rc::downgrade(this);
        input.on_jump(Box::new(move |index| dispatch(&weak, Intent::JumpRequested(index))));
    }

    pub fn autoplay(&mut self) {
        if self.timer.start() {
            info!(interval_ms = self.config.interval_ms, "autoplay started");
        } else {
            debug!("autoplay already running");
        }
    }

    pub fn stop_autoplay(&mut self) {
        if self.timer.stop() {
            info!(index = self.current_index, "autoplay stopped");
        }
    }

    pub fn next(&mut self, manual_stop: bool) {
        self.advance(Direction::Forward, manual_stop);
    }

    pub fn prev(&mut self, manual_stop: bool) {
        self.advance(Direction::Backward, manual_stop);
    }

    pub fn advance(&mut self, direction: Direction, manual_stop: bool) {
        if self.slide_count == 0 {
            debug!(?direction, "no slides, ignoring advance");
            return;
        }
        let target = direction.step(self.current_index, self.slide_count);
        self.transition(target, manual_stop);
    }

    /// Moves straight to `index` and stops autoplay.
    ///
    /// An index outside the slide range is rejected and changes nothing.
    pub fn jump(&mut self, index: usize) -> Result<()> {
        if self.slide_count == 0 {
            debug!(index, "no slides, ignoring jump");
            return Ok(());
        }
        if index >= self.slide_count {
            warn!(index, slide_count = self.slide_count, "jump target out of range");
            return Err(SliderError::IndexOutOfRange {
                index,
                len: self.slide_count,
            });
        }
        self.transition(index, true);
        Ok(())
    }

    /// Applies a manual intent: every one of them stops autoplay.
    pub fn handle(&mut self, intent: Intent) -> Result<()> {
        match intent {
            Intent::PreviousRequested => self.prev(true),
            Intent::NextRequested => self.next(true),
            Intent::JumpRequested(index) => self.jump(index)?,
        }
        Ok(())
    }

    /// Feeds elapsed time to the autoplay timer and performs one forward step
    /// per completed interval. Returns the number of steps taken.
    pub fn tick(&mut self, elapsed: Duration) -> u32 {
        let fired = self.timer.advance(elapsed);
        let mut steps = 0;
        for _ in 0..fired {
            // a stop between two steps cancels the remaining ones
            if !self.timer.is_running() || self.slide_count == 0 {
                break;
            }
            self.advance(Direction::Forward, false);
            steps += 1;
        }
        steps
    }

    pub fn current_index(&self) -> Option<usize> {
        (self.slide_count > 0).then_some(self.current_index)
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn is_empty(&self) -> bool {
        self.slide_count == 0
    }

    pub fn is_autoplay_running(&self) -> bool {
        self.timer.is_running()
    }

    pub fn autoplay_state(&self) -> AutoplayState {
        self.timer.state()
    }

    pub fn state(&self) -> SliderState {
        SliderState {
            current_index: self.current_index(),
            autoplay: self.timer.state(),
        }
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn images(&self) -> &P {
        &self.images
    }

    pub fn images_mut(&mut self) -> &mut P {
        &mut self.images
    }

    fn transition(&mut self, target: usize, stop_autoplay: bool) {
        let from = self.current_index;
        self.current_index = target;
        ensure_loaded(&mut self.images, target); // before the marker moves
        if stop_autoplay {
            self.stop_autoplay();
        }
        self.sync_markers();
        debug!(from, to = target, manual = stop_autoplay, "slide changed");
    }

    fn build_bar(&mut self) {
        for index in 0..self.slide_count {
            self.surface.append_bar_item(index);
        }
    }

    /// Clear-then-set on both collections; calling it twice changes nothing.
    fn sync_markers(&mut self) {
        if self.slide_count == 0 {
            return;
        }
        self.surface.clear_active(Collection::Slides);
        self.surface.set_active(Collection::Slides, self.current_index);
        self.surface.clear_active(Collection::Bar);
        self.surface.set_active(Collection::Bar, self.current_index);
    }
}

fn dispatch<S, P>(slider: &Weak<RefCell<Slider<S, P>>>, intent: Intent)
where
    S: PresentationSurface,
    P: ImageProvider,
{
    let Some(slider) = slider.upgrade() else {
        debug!(?intent, "slider dropped, ignoring intent");
        return;
    };
    let Ok(mut slider) = slider.try_borrow_mut() else {
        warn!(?intent, "transition in progress, dropping intent");
        return;
    };
    if let Err(e) = slider.handle(intent) {
        warn!(?intent, "intent rejected: {}", e);
    }
}
