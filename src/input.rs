use std::fmt;

use tracing::trace;

/// A discrete, manually triggered navigation request.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Intent {
    PreviousRequested,
    NextRequested,
    JumpRequested(usize),
}

pub type Handler = Box<dyn FnMut()>;
pub type JumpHandler = Box<dyn FnMut(usize)>;

/// Source of navigation intents. One handler per intent kind; registering
/// again replaces the previous handler.
pub trait InputSource {
    fn on_previous(&mut self, handler: Handler);
    fn on_next(&mut self, handler: Handler);
    fn on_jump(&mut self, handler: JumpHandler);
}

/// Plain synchronous dispatcher: adapters turn raw events into [`Intent`]s
/// and [`emit`](InputBus::emit) them; the registered handler runs to
/// completion before `emit` returns.
#[derive(Default)]
pub struct InputBus {
    previous: Option<Handler>,
    next: Option<Handler>,
    jump: Option<JumpHandler>,
}

impl InputBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when no handler is registered for the intent.
    pub fn emit(&mut self, intent: Intent) -> bool {
        trace!(?intent, "dispatching intent");
        match intent {
            Intent::PreviousRequested => match self.previous.as_mut() {
                Some(handler) => {
                    handler();
                    true
                }
                None => false,
            },
            Intent::NextRequested => match self.next.as_mut() {
                Some(handler) => {
                    handler();
                    true
                }
                None => false,
            },
            Intent::JumpRequested(index) => match self.jump.as_mut() {
                Some(handler) => {
                    handler(index);
                    true
                }
                None => false,
            },
        }
    }
}

impl InputSource for InputBus {
    fn on_previous(&mut self, handler: Handler) {
        self.previous = Some(handler);
    }

    fn on_next(&mut self, handler: Handler) {
        self.next = Some(handler);
    }

    fn on_jump(&mut self, handler: JumpHandler) {
        self.jump = Some(handler);
    }
}

impl fmt::Debug for InputBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputBus")
            .field("previous", &self.previous.is_some())
            .field("next", &self.next.is_some())
            .field("jump", &self.jump.is_some())
            .finish()
    }
}
