//! Reference geometry engine: a slot arena of box styles with dirty flags.

use crate::config::StyleEngineConfig;
use crate::layout_model::{BoxId, LayoutEngine};
use crate::style_model::BoxStyle;

#[derive(Clone, Debug)]
struct BoxSlot {
    style: BoxStyle,
    dirty: bool,
}

/// Stores box styles in reusable slots; hosts drain dirty boxes after a flush.
#[derive(Clone, Debug)]
pub struct BoxStore {
    slots: Vec<Option<BoxSlot>>,
    free: Vec<usize>,
    initial: BoxStyle,
}

impl BoxStore {
    pub fn new(config: &StyleEngineConfig) -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            initial: BoxStyle::initial(config.use_web_defaults),
        }
    }

    fn slot(&self, id: BoxId) -> Option<&BoxSlot> {
        let index = usize::try_from(id.0).ok()?;
        self.slots.get(index)?.as_ref()
    }

    fn slot_mut(&mut self, id: BoxId) -> Option<&mut BoxSlot> {
        let index = usize::try_from(id.0).ok()?;
        self.slots.get_mut(index)?.as_mut()
    }

    pub fn is_dirty(&self, id: BoxId) -> bool {
        self.slot(id).is_some_and(|slot| slot.dirty)
    }

    /// Dirty boxes in slot order; their flags are cleared.
    pub fn take_dirty(&mut self) -> Vec<BoxId> {
        let mut dirty = Vec::new();
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if let Some(live) = slot.as_mut().filter(|live| live.dirty) {
                live.dirty = false;
                if let Ok(raw) = u32::try_from(index) {
                    dirty.push(BoxId(raw));
                }
            }
        }
        dirty
    }

    /// Number of live boxes.
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LayoutEngine for BoxStore {
    fn create_box(&mut self) -> BoxId {
        let slot = BoxSlot {
            style: self.initial,
            dirty: true,
        };
        let index = if let Some(index) = self.free.pop() {
            if let Some(entry) = self.slots.get_mut(index) {
                *entry = Some(slot);
            }
            index
        } else {
            self.slots.push(Some(slot));
            self.slots.len() - 1
        };
        BoxId(u32::try_from(index).unwrap_or(u32::MAX))
    }

    fn remove_box(&mut self, id: BoxId) {
        let Ok(index) = usize::try_from(id.0) else {
            return;
        };
        if let Some(entry) = self.slots.get_mut(index)
            && entry.take().is_some()
        {
            self.free.push(index);
        }
    }

    fn style(&self, id: BoxId) -> Option<&BoxStyle> {
        self.slot(id).map(|slot| &slot.style)
    }

    fn style_mut(&mut self, id: BoxId) -> Option<&mut BoxStyle> {
        self.slot_mut(id).map(|slot| &mut slot.style)
    }

    fn initial_style(&self) -> &BoxStyle {
        &self.initial
    }

    fn mark_dirty(&mut self, id: BoxId) {
        if let Some(slot) = self.slot_mut(id) {
            slot.dirty = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use css_values_units::FlexDirection;

    #[test]
    fn slots_are_reused_after_removal() {
        let mut store = BoxStore::new(&StyleEngineConfig::default());
        let first = store.create_box();
        let second = store.create_box();
        store.remove_box(first);
        assert!(store.style(first).is_none());
        assert_eq!(store.len(), 1);
        let third = store.create_box();
        assert_eq!(third, first);
        assert_ne!(third, second);
        store.remove_box(first);
        store.remove_box(first);
        assert_eq!(store.len(), 1, "double removal must not free twice");
    }

    #[test]
    fn initial_style_follows_config() {
        let config = StyleEngineConfig::new(false, 16.0, 1.2, css_values_units::TextAlign::Start);
        let mut store = BoxStore::new(&config);
        let id = store.create_box();
        assert_eq!(
            store.style(id).map(|style| style.flex_direction),
            Some(FlexDirection::Column)
        );
        assert!(store.style(id).is_some_and(|style| style.flex_shrink.abs() < f32::EPSILON));
    }

    #[test]
    fn dirty_flags_drain_once() {
        let mut store = BoxStore::new(&StyleEngineConfig::default());
        let id = store.create_box();
        assert_eq!(store.take_dirty(), vec![id]);
        assert!(store.take_dirty().is_empty());
        store.mark_dirty(id);
        assert!(store.is_dirty(id));
    }
}
