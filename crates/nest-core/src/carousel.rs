//! Image carousel index arithmetic

/// Position within a listing's image list
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ImageCarousel {
    index: usize,
    len: usize,
}

impl ImageCarousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Advance, wrapping from the last image to the first
    pub fn next(&mut self) -> usize {
        if self.len > 0 {
            self.index = if self.index + 1 < self.len { self.index + 1 } else { 0 };
        }
        self.index
    }

    /// Step back, wrapping from the first image to the last
    pub fn prev(&mut self) -> usize {
        if self.len > 0 {
            self.index = if self.index > 0 { self.index - 1 } else { self.len - 1 };
        }
        self.index
    }

    /// Arrows and counter only appear for more than one image
    pub fn has_controls(&self) -> bool {
        self.len > 1
    }

    /// 1-based "current/total"
    pub fn counter(&self) -> String {
        format!("{}/{}", self.index + 1, self.len)
    }

    pub fn current<'a>(&self, images: &'a [String]) -> Option<&'a str> {
        images.get(self.index).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps() {
        let mut carousel = ImageCarousel::new(3);
        assert_eq!(carousel.next(), 1);
        assert_eq!(carousel.next(), 2);
        assert_eq!(carousel.next(), 0);
    }

    #[test]
    fn test_prev_wraps() {
        let mut carousel = ImageCarousel::new(3);
        assert_eq!(carousel.prev(), 2);
        assert_eq!(carousel.prev(), 1);
        assert_eq!(carousel.counter(), "2/3");
    }

    #[test]
    fn test_empty_carousel_stays_put() {
        let mut carousel = ImageCarousel::new(0);
        assert_eq!(carousel.next(), 0);
        assert_eq!(carousel.prev(), 0);
        assert!(!carousel.has_controls());
        assert!(carousel.current(&[]).is_none());
    }

    #[test]
    fn test_single_image_has_no_controls() {
        let mut carousel = ImageCarousel::new(1);
        assert!(!carousel.has_controls());
        assert_eq!(carousel.next(), 0);

        let images = vec!["cover.jpg".to_string()];
        assert_eq!(carousel.current(&images), Some("cover.jpg"));
    }
}
