//! The board-renderer seam.

/// Produces an opaque snapshot of the board as it currently looks.
///
/// The history never inspects a snapshot; it only stores it and hands it back
/// on lookup.
pub trait BoardRenderer {
    /// The snapshot type.
    type Snapshot;

    /// Captures the current board.
    fn snapshot(&self) -> Self::Snapshot;
}

/// A renderer that always reports the same snapshot.
///
/// Useful when the caller already holds the serialized board (for example
/// markup handed over from a page) and just wants it recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedSnapshot<S>(pub S);

impl<S: Clone> BoardRenderer for FixedSnapshot<S> {
    type Snapshot = S;

    fn snapshot(&self) -> S {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_snapshot_repeats_value() {
        let renderer = FixedSnapshot("<div/>".to_string());
        assert_eq!(renderer.snapshot(), "<div/>");
        assert_eq!(renderer.snapshot(), renderer.snapshot());
    }
}
