/// Cyclic position over a fixed, non-empty list of images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    /// Treats `len == 0` as a single slot so the index stays at 0.
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len: len.max(1),
        }
    }

    pub fn index(self) -> usize {
        self.index
    }

    /// Arrows and dots only make sense with something to cycle through.
    pub fn has_controls(self) -> bool {
        self.len > 1
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.len;
    }

    pub fn prev(&mut self) {
        self.index = (self.index + self.len - 1) % self.len;
    }

    /// Jumps to `index`, ignoring positions past the end.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.len {
            self.index = index;
            true
        } else {
            false
        }
    }

    pub fn is_current(self, index: usize) -> bool {
        self.index == index
    }
}
