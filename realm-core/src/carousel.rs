//! Detail-view image carousel.
//!
//! The carousel shows a record's extra images with the center slot active.
//! Clicking a side image rotates it into the center; clicking the active
//! image opens it in the full-size viewer.

use std::collections::VecDeque;

/// What a click on the carousel asks the presentation layer to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarouselAction {
    /// Open the full-size viewer with this image.
    OpenViewer(String),
    /// The images were reordered; re-render the strip.
    Rotated,
    /// The click hit nothing.
    None,
}

/// Rotating image strip.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Carousel {
    images: VecDeque<String>,
}

impl Carousel {
    /// Build a carousel from image URLs, keeping their order.
    #[must_use]
    pub fn new<I, S>(images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            images: images.into_iter().map(Into::into).collect(),
        }
    }

    /// Slot index of the active image: the center slot (1), or 0 when there
    /// is a single image. `None` for an empty carousel.
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        match self.images.len() {
            0 => None,
            1 => Some(0),
            _ => Some(1),
        }
    }

    /// URL of the active image.
    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.active_index()
            .and_then(|i| self.images.get(i))
            .map(String::as_str)
    }

    /// Images in display order.
    pub fn images(&self) -> impl Iterator<Item = &str> {
        self.images.iter().map(String::as_str)
    }

    /// Handle a click on slot `index`.
    ///
    /// Left of the active slot rotates right (the last image wraps to the
    /// front); right of it rotates left (the first image wraps to the back).
    pub fn click(&mut self, index: usize) -> CarouselAction {
        let Some(active) = self.active_index() else {
            return CarouselAction::None;
        };
        if index >= self.images.len() {
            return CarouselAction::None;
        }

        if index == active {
            return CarouselAction::OpenViewer(self.images[active].clone());
        }

        if index < active {
            self.images.rotate_right(1);
        } else {
            self.images.rotate_left(1);
        }
        CarouselAction::Rotated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip() -> Carousel {
        Carousel::new(["a", "b", "c"])
    }

    #[test]
    fn center_is_active() {
        let c = strip();
        assert_eq!(c.active_index(), Some(1));
        assert_eq!(c.active(), Some("b"));
    }

    #[test]
    fn clicking_left_brings_last_to_front() {
        let mut c = strip();
        assert_eq!(c.click(0), CarouselAction::Rotated);
        assert_eq!(c.images().collect::<Vec<_>>(), vec!["c", "a", "b"]);
        assert_eq!(c.active(), Some("a"));
    }

    #[test]
    fn clicking_right_sends_first_to_back() {
        let mut c = strip();
        assert_eq!(c.click(2), CarouselAction::Rotated);
        assert_eq!(c.images().collect::<Vec<_>>(), vec!["b", "c", "a"]);
        assert_eq!(c.active(), Some("c"));
    }

    #[test]
    fn clicking_active_opens_viewer() {
        let mut c = strip();
        assert_eq!(c.click(1), CarouselAction::OpenViewer("b".to_string()));
        assert_eq!(c.images().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn single_image_is_active_and_empty_is_inert() {
        let mut one = Carousel::new(["solo"]);
        assert_eq!(one.click(0), CarouselAction::OpenViewer("solo".to_string()));

        let mut none = Carousel::default();
        assert_eq!(none.active(), None);
        assert_eq!(none.click(0), CarouselAction::None);
    }

    #[test]
    fn out_of_range_click_is_ignored() {
        let mut c = strip();
        assert_eq!(c.click(7), CarouselAction::None);
    }
}
