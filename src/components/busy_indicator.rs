//! Busy Indicator Component
//!
//! Loading images appended to a slot by each drop, shown while its save is pending.

use leptos::prelude::*;
use leptos_dragswap::SlotId;

use crate::persist::BusyIndicator;

/// One appended indicator
#[derive(Clone, Debug, PartialEq)]
pub struct BusyMarker {
    pub token: usize,
    pub slot: SlotId,
    pub visible: bool,
}

/// Outstanding indicators. A marker is dropped once its save settles.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BusyMarkers {
    next_token: usize,
    markers: Vec<BusyMarker>,
}

impl BusyMarkers {
    /// Append a hidden marker to `slot` and return its token
    pub fn append(&mut self, slot: SlotId) -> usize {
        let token = self.next_token;
        self.next_token += 1;
        self.markers.push(BusyMarker { token, slot, visible: false });
        token
    }

    pub fn show(&mut self, token: usize) {
        if let Some(marker) = self.markers.iter_mut().find(|m| m.token == token) {
            marker.visible = true;
        }
    }

    pub fn hide(&mut self, token: usize) {
        self.markers.retain(|m| m.token != token);
    }

    pub fn in_slot(&self, slot: SlotId) -> Vec<BusyMarker> {
        self.markers.iter().filter(|m| m.slot == slot).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }
}

/// Handle toggling a single marker; overlapping saves each own one
#[derive(Clone, Copy)]
pub struct SpinnerHandle {
    markers: RwSignal<BusyMarkers>,
    /// None when the marker list was already disposed
    token: Option<usize>,
}

impl SpinnerHandle {
    pub fn append(markers: RwSignal<BusyMarkers>, slot: SlotId) -> Self {
        let token = markers.try_update(|m| m.append(slot));
        if token.is_none() {
            log::warn!("busy markers disposed, no indicator for {}", slot);
        }
        Self { markers, token }
    }

    pub fn token(&self) -> Option<usize> {
        self.token
    }
}

impl BusyIndicator for SpinnerHandle {
    fn show(&self) {
        if let Some(token) = self.token {
            let _ = self.markers.try_update(|m| m.show(token));
        }
    }

    fn hide(&self) {
        if let Some(token) = self.token {
            let _ = self.markers.try_update(|m| m.hide(token));
        }
    }
}

/// Indicators appended to `slot_id`
#[component]
pub fn BusyImages(
    slot_id: SlotId,
    markers: RwSignal<BusyMarkers>,
    /// Loading image URL
    src: String,
) -> impl IntoView {
    move || {
        markers
            .with(|m| m.in_slot(slot_id))
            .into_iter()
            .map(|m| {
                view! {
                    <img
                        src=src.clone()
                        alt=""
                        style:display=if m.visible { "inline" } else { "none" }
                    />
                }
            })
            .collect_view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;
    use pretty_assertions::assert_eq;

    fn visible(markers: RwSignal<BusyMarkers>, slot: SlotId) -> Vec<bool> {
        markers.with(|m| m.in_slot(slot).iter().map(|m| m.visible).collect())
    }

    #[test]
    fn test_overlapping_saves_hide_their_own_indicator() {
        let owner = Owner::new();
        owner.set();
        let markers = RwSignal::new(BusyMarkers::default());

        let first = SpinnerHandle::append(markers, SlotId(1));
        let second = SpinnerHandle::append(markers, SlotId(1));
        assert_eq!(visible(markers, SlotId(1)), vec![false, false]);

        first.show();
        second.show();
        assert_eq!(visible(markers, SlotId(1)), vec![true, true]);

        first.hide();
        assert_eq!(visible(markers, SlotId(1)), vec![true]);
        assert_eq!(markers.with(|m| m.in_slot(SlotId(1))[0].token), second.token().unwrap());

        second.hide();
        assert_eq!(markers.with(|m| m.len()), 0);
    }

    #[test]
    fn test_tokens_stay_unique_after_pruning() {
        let mut markers = BusyMarkers::default();
        let a = markers.append(SlotId(0));
        markers.hide(a);
        let b = markers.append(SlotId(0));
        let c = markers.append(SlotId(2));
        assert_ne!(a, b);
        assert_ne!(b, c);

        markers.show(b);
        markers.hide(a);
        assert_eq!(markers.in_slot(SlotId(0)).len(), 1);
        assert!(markers.in_slot(SlotId(0))[0].visible);
        assert!(!markers.in_slot(SlotId(2))[0].visible);
    }

    #[test]
    fn test_disposed_markers_give_inert_handle() {
        let owner = Owner::new();
        owner.set();
        let markers = RwSignal::new(BusyMarkers::default());
        markers.dispose();

        let handle = SpinnerHandle::append(markers, SlotId(0));
        assert_eq!(handle.token(), None);
        handle.show();
        handle.hide();
    }
}
