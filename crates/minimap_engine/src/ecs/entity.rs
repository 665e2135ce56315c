//! Entity implementation

slotmap::new_key_type! {
    /// Entity identifier
    ///
    /// Generational handle into a [`World`](super::World). Holding one does not
    /// keep the entity alive; once the entity is destroyed the handle never
    /// resolves again, even after its slot is reused.
    pub struct Entity;
}
