use crate::coords::Transform;

use super::DrawCmd;

/// A single draw item: command plus the transform it was recorded under.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub cmd: DrawCmd,
    /// Local-to-surface transform resolved at push time.
    pub transform: Transform,
}

/// Recorded draw stream for a frame.
///
/// Insertion order is paint order, matching an immediate-mode canvas.
/// `push()` is O(1); `clear()` keeps allocated capacity for reuse.
///
/// # Transforms
///
/// Use [`push_transform`] / [`pop_transform`] to scope draw commands to a
/// local coordinate space. Pushed transforms compose with the current
/// parent, so nested translate/rotate groups behave like a canvas
/// `save`/`translate`/`rotate`/`restore` sequence. [`with_transform`]
/// wraps a balanced pair around a closure so restoration also happens on
/// an early return.
///
/// [`push_transform`]: DrawList::push_transform
/// [`pop_transform`]: DrawList::pop_transform
/// [`with_transform`]: DrawList::with_transform
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,

    /// Stack of active transforms. The top is always the current effective
    /// local-to-surface transform, already composed with all parents.
    transform_stack: Vec<Transform>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items and the transform stack.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.transform_stack.clear();
    }

    /// Returns items in insertion (= paint) order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    /// The effective transform commands are currently recorded under.
    #[inline]
    pub fn current_transform(&self) -> Transform {
        self.transform_stack.last().copied().unwrap_or(Transform::IDENTITY)
    }

    /// Pushes a draw command, recording the current transform with it.
    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(DrawItem { cmd, transform: self.current_transform() });
    }

    /// Begins a local coordinate space. All draw commands pushed until
    /// [`pop_transform`](DrawList::pop_transform) are mapped through
    /// `transform` composed onto the current parent.
    ///
    /// Calls must be balanced with `pop_transform`; prefer
    /// [`with_transform`](DrawList::with_transform) where control flow may
    /// leave early.
    #[inline]
    pub fn push_transform(&mut self, transform: Transform) {
        self.transform_stack.push(self.current_transform() * transform);
    }

    /// Ends the most recent scope started by
    /// [`push_transform`](DrawList::push_transform).
    ///
    /// # Panics
    /// Panics (debug only) if called without a matching `push_transform`.
    #[inline]
    pub fn pop_transform(&mut self) {
        debug_assert!(
            !self.transform_stack.is_empty(),
            "pop_transform called without matching push_transform"
        );
        self.transform_stack.pop();
    }

    /// Runs `f` inside a transform scope, restoring the previous transform
    /// afterwards regardless of how `f` exits.
    pub fn with_transform<R>(&mut self, transform: Transform, f: impl FnOnce(&mut Self) -> R) -> R {
        self.push_transform(transform);
        let result = f(self);
        self.pop_transform();
        result
    }
}
