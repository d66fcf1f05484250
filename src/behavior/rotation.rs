/// Which item of a carousel is showing.
///
/// The index is always `< len` (wraps both ways). A rotation over zero items
/// is inert: it stays at index 0 and every move is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation {
    index: usize,
    len: usize,
}

impl Rotation {
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

    pub fn is_current(&self, i: usize) -> bool {
        !self.is_empty() && self.index == i
    }

    pub fn advance(self) -> Self {
        if self.is_empty() {
            return self;
        }
        Self {
            index: (self.index + 1) % self.len,
            ..self
        }
    }

    pub fn retreat(self) -> Self {
        if self.is_empty() {
            return self;
        }
        Self {
            index: (self.index + self.len - 1) % self.len,
            ..self
        }
    }

    /// Jump straight to slide `i` (taken modulo the item count).
    pub fn go_to(self, i: usize) -> Self {
        if self.is_empty() {
            return self;
        }
        Self {
            index: i % self.len,
            ..self
        }
    }
}
