//! Swap Board
//!
//! Slot-to-item mapping plus the single drag session that mutates it.

use std::fmt;

/// Handle of one container on the board, stable for the board's lifetime
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(pub usize);

impl SlotId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slot#{}", self.0)
    }
}

/// Errors raised when an event refers to a slot the board does not own
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SwapError {
    #[error("unknown {slot} (board has {len} slots)")]
    UnknownSlot { slot: SlotId, len: usize },
}

/// State of the current drag gesture.
///
/// The source is never cleared explicitly: a drag released outside every slot
/// leaves it in place until the next drag start overwrites it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DragSession {
    source: Option<SlotId>,
}

impl DragSession {
    /// Slot currently holding the dragged content
    pub fn source(&self) -> Option<SlotId> {
        self.source
    }

    pub fn is_open(&self) -> bool {
        self.source.is_some()
    }
}

/// Result of a drag entering a slot
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnterOutcome {
    /// Contents of `from` and `to` were exchanged; `to` is now the source
    Swapped { from: SlotId, to: SlotId },
    /// The slot already holds the dragged content
    SameSlot,
    /// No drag was started on this board
    NoSession,
}

/// Fixed set of slots, each holding one item, reordered by hover-swaps
#[derive(Clone, Debug, PartialEq)]
pub struct SwapBoard<T> {
    slots: Vec<T>,
    active: Vec<bool>,
    session: DragSession,
    pointer_events: bool,
}

impl<T> SwapBoard<T> {
    pub fn new(items: Vec<T>) -> Self {
        let active = vec![false; items.len()];
        Self {
            slots: items,
            active,
            session: DragSession::default(),
            pointer_events: true,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// All slot handles in document order
    pub fn slot_ids(&self) -> impl Iterator<Item = SlotId> + '_ {
        (0..self.slots.len()).map(SlotId)
    }

    /// Items in slot order
    pub fn items(&self) -> &[T] {
        &self.slots
    }

    pub fn item_at(&self, slot: SlotId) -> Option<&T> {
        self.slots.get(slot.0)
    }

    pub fn session(&self) -> DragSession {
        self.session
    }

    /// Whether the slot carries the "drag over" marker
    pub fn is_active(&self, slot: SlotId) -> bool {
        self.active.get(slot.0).copied().unwrap_or(false)
    }

    /// False while a drag is in progress, so slot children do not steal drag events
    pub fn pointer_events_enabled(&self) -> bool {
        self.pointer_events
    }

    /// Begin a drag on `slot`, replacing any stale session
    pub fn drag_start(&mut self, slot: SlotId) -> Result<(), SwapError> {
        self.check(slot)?;
        self.pointer_events = false;
        self.session.source = Some(slot);
        Ok(())
    }

    /// Pointer entered `slot`: mark it and swap it with the source when they differ
    pub fn drag_enter(&mut self, slot: SlotId) -> Result<EnterOutcome, SwapError> {
        self.check(slot)?;
        self.active[slot.0] = true;

        let Some(source) = self.session.source else {
            return Ok(EnterOutcome::NoSession);
        };
        if source == slot {
            return Ok(EnterOutcome::SameSlot);
        }

        self.slots.swap(source.0, slot.0);
        self.session.source = Some(slot);
        Ok(EnterOutcome::Swapped { from: source, to: slot })
    }

    /// Pointer left `slot`; session is untouched
    pub fn drag_leave(&mut self, slot: SlotId) -> Result<(), SwapError> {
        self.check(slot)?;
        self.active[slot.0] = false;
        Ok(())
    }

    /// Drop on `slot`: clear its marker, restore pointer events and return the final order
    pub fn drop_on(&mut self, slot: SlotId) -> Result<Vec<T>, SwapError>
    where
        T: Clone,
    {
        self.check(slot)?;
        self.active[slot.0] = false;
        self.pointer_events = true;
        Ok(self.slots.clone())
    }

    fn check(&self, slot: SlotId) -> Result<(), SwapError> {
        if slot.0 < self.slots.len() {
            Ok(())
        } else {
            Err(SwapError::UnknownSlot {
                slot,
                len: self.slots.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn board() -> SwapBoard<u32> {
        SwapBoard::new(vec![10, 20, 30])
    }

    fn sorted(items: &[u32]) -> Vec<u32> {
        let mut v = items.to_vec();
        v.sort_unstable();
        v
    }

    #[test]
    fn test_swap_far_slot_then_drop() {
        let mut b = board();
        b.drag_start(SlotId(0)).unwrap();
        assert!(!b.pointer_events_enabled());

        let outcome = b.drag_enter(SlotId(2)).unwrap();
        assert_eq!(outcome, EnterOutcome::Swapped { from: SlotId(0), to: SlotId(2) });
        assert_eq!(b.items(), &[30, 20, 10]);
        assert_eq!(b.session().source(), Some(SlotId(2)));
        assert!(b.is_active(SlotId(2)));

        let order = b.drop_on(SlotId(2)).unwrap();
        assert_eq!(order, vec![30, 20, 10]);
        assert!(!b.is_active(SlotId(2)));
        assert!(b.pointer_events_enabled());
    }

    #[test]
    fn test_swaps_cascade_from_current_position() {
        let mut b = SwapBoard::new(vec![1, 2, 3, 4]);
        b.drag_start(SlotId(0)).unwrap();
        b.drag_enter(SlotId(1)).unwrap();
        b.drag_enter(SlotId(2)).unwrap();
        b.drag_enter(SlotId(3)).unwrap();
        // Dragged item walked down one slot at a time
        assert_eq!(b.items(), &[2, 3, 4, 1]);
    }

    #[test]
    fn test_swap_back_restores_assignment() {
        let mut b = board();
        b.drag_start(SlotId(0)).unwrap();
        b.drag_enter(SlotId(1)).unwrap();
        b.drag_enter(SlotId(0)).unwrap();
        assert_eq!(b.items(), &[10, 20, 30]);
        // Session tracks where the content is, not where it came from
        assert_eq!(b.session().source(), Some(SlotId(0)));

        b.drag_start(SlotId(0)).unwrap();
        b.drag_enter(SlotId(2)).unwrap();
        b.drag_enter(SlotId(0)).unwrap();
        assert_eq!(b.items(), &[10, 20, 30]);
        assert_eq!(b.session().source(), Some(SlotId(0)));
    }

    #[test]
    fn test_enter_source_is_noop() {
        let mut b = board();
        b.drag_start(SlotId(1)).unwrap();
        assert_eq!(b.drag_enter(SlotId(1)).unwrap(), EnterOutcome::SameSlot);
        assert_eq!(b.items(), &[10, 20, 30]);
        assert_eq!(b.session().source(), Some(SlotId(1)));
    }

    #[test]
    fn test_double_enter_is_noop() {
        let mut b = board();
        b.drag_start(SlotId(0)).unwrap();
        b.drag_enter(SlotId(1)).unwrap();
        let snapshot = b.clone();
        assert_eq!(b.drag_enter(SlotId(1)).unwrap(), EnterOutcome::SameSlot);
        assert_eq!(b, snapshot);
    }

    #[test]
    fn test_multiset_conserved() {
        let mut b = SwapBoard::new(vec![5, 7, 7, 9, 11]);
        let before = sorted(b.items());
        b.drag_start(SlotId(3)).unwrap();
        for i in [0, 4, 4, 1, 2, 3, 0, 2, 1, 4] {
            b.drag_enter(SlotId(i)).unwrap();
            b.drag_leave(SlotId(i)).unwrap();
            assert_eq!(sorted(b.items()), before);
        }
        let order = b.drop_on(SlotId(1)).unwrap();
        assert_eq!(order.len(), b.len());
        assert_eq!(sorted(&order), before);
    }

    #[test]
    fn test_leave_clears_marker_only() {
        let mut b = board();
        b.drag_start(SlotId(0)).unwrap();
        b.drag_enter(SlotId(1)).unwrap();
        b.drag_leave(SlotId(1)).unwrap();
        assert!(!b.is_active(SlotId(1)));
        assert_eq!(b.session().source(), Some(SlotId(1)));
        assert_eq!(b.items(), &[20, 10, 30]);
    }

    #[test]
    fn test_enter_without_session() {
        let mut b = board();
        assert_eq!(b.drag_enter(SlotId(2)).unwrap(), EnterOutcome::NoSession);
        assert!(b.is_active(SlotId(2)));
        assert!(!b.session().is_open());
        assert_eq!(b.items(), &[10, 20, 30]);
    }

    #[test]
    fn test_stale_session_overwritten_by_next_start() {
        let mut b = board();
        b.drag_start(SlotId(0)).unwrap();
        b.drag_enter(SlotId(1)).unwrap();
        // Released outside any slot: no drop, session stays open
        assert_eq!(b.session().source(), Some(SlotId(1)));
        assert!(!b.pointer_events_enabled());

        b.drag_start(SlotId(2)).unwrap();
        assert_eq!(b.session().source(), Some(SlotId(2)));
        b.drag_enter(SlotId(0)).unwrap();
        assert_eq!(b.items(), &[30, 10, 20]);
    }

    #[test]
    fn test_unknown_slot_rejected() {
        let mut b = board();
        let err = b.drag_start(SlotId(3)).unwrap_err();
        assert_eq!(err, SwapError::UnknownSlot { slot: SlotId(3), len: 3 });
        assert!(b.drag_enter(SlotId(9)).is_err());
        assert!(b.drop_on(SlotId(4)).is_err());
        assert_eq!(
            b.drag_leave(SlotId(5)).unwrap_err(),
            SwapError::UnknownSlot { slot: SlotId(5), len: 3 }
        );
        assert!(!b.session().is_open());
    }
}
