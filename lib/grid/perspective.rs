use crate::grid::PlayerId;

/// Trait for types that can be seen from the opponent's perspective.
pub trait Perspective: Copy {
    /// Flips the perspective.
    fn flip(&self) -> Self;

    /// Sets the perspective to the side of the given [`PlayerId`].
    #[inline(always)]
    fn perspective(&self, side: PlayerId) -> Self {
        match side {
            PlayerId::One => *self,
            PlayerId::Two => self.flip(),
        }
    }
}
