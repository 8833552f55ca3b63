//! Collaborator seams of the slider.
//!
//! The slider never paints or fetches anything itself. It talks to a
//! [`PresentationSurface`] to count elements and move the active marker,
//! and to an [`ImageProvider`] to turn a deferred image source into a
//! resolved one.

/// The two element sets carrying an active marker.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Collection {
    Slides,
    Bar,
}

pub trait PresentationSurface {
    /// Number of elements currently present in `collection`.
    fn count(&self, collection: Collection) -> usize;
    /// Marks the element at `index` of `collection` active.
    fn set_active(&mut self, collection: Collection, index: usize);
    /// Removes the active marker from whichever element of `collection` has it.
    fn clear_active(&mut self, collection: Collection);
    /// Adds one bar item that refers back to slide `index`.
    fn append_bar_item(&mut self, index: usize);
}

pub trait ImageProvider {
    /// Deferred source of slide `index`, if the slide has one.
    fn deferred_source(&self, index: usize) -> Option<String>;
    fn has_resolved_source(&self, index: usize) -> bool;
    /// Resolving a source is what triggers the actual fetch.
    fn set_resolved_source(&mut self, index: usize, value: String);
}
