use tracing::{debug, warn};

use crate::surface::ImageProvider;

/// Requests the image of slide `index` unless it was requested before.
///
/// Returns true when this call triggered the load.
pub fn ensure_loaded<P: ImageProvider + ?Sized>(images: &mut P, index: usize) -> bool {
    if images.has_resolved_source(index) {
        return false;
    }
    match images.deferred_source(index) {
        Some(source) => {
            debug!(index, %source, "lazy loading slide image");
            images.set_resolved_source(index, source);
            true
        }
        None => {
            warn!(index, "slide has no deferred image source");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        deferred: Vec<Option<String>>,
        resolved: Vec<Option<String>>,
        loads: usize,
    }

    impl ImageProvider for Recorder {
        fn deferred_source(&self, index: usize) -> Option<String> {
            self.deferred.get(index).cloned().flatten()
        }
        fn has_resolved_source(&self, index: usize) -> bool {
            self.resolved.get(index).is_some_and(Option::is_some)
        }
        fn set_resolved_source(&mut self, index: usize, value: String) {
            self.loads += 1;
            self.resolved[index] = Some(value);
        }
    }

    #[test]
    fn loads_at_most_once() {
        let mut images = Recorder {
            deferred: vec![Some("a.jpg".into()), Some("b.jpg".into())],
            resolved: vec![None, None],
            loads: 0,
        };
        assert!(ensure_loaded(&mut images, 1));
        assert!(!ensure_loaded(&mut images, 1));
        assert_eq!(images.loads, 1);
        assert_eq!(images.resolved[1].as_deref(), Some("b.jpg"));
        assert_eq!(images.resolved[0], None);
    }

    #[test]
    fn missing_deferred_source_is_skipped() {
        let mut images = Recorder {
            deferred: vec![None],
            resolved: vec![None],
            loads: 0,
        };
        assert!(!ensure_loaded(&mut images, 0));
        assert_eq!(images.loads, 0);
    }
}
