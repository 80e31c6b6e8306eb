//! Per-node storage of property entries across the three priority groups.

use crate::{PropertyEvent, StyleGroup};
use css_values_units::StyleValue;

/// One property's state within one group.
///
/// An empty value list means the property is removed; the entry itself is
/// kept so later lookups and writes reuse it.
#[derive(Clone, Debug, PartialEq)]
pub struct PropertyEntry<K> {
    key: K,
    values: Vec<StyleValue>,
    event: PropertyEvent,
}

impl<K: Copy + Eq> PropertyEntry<K> {
    const fn new(key: K) -> Self {
        Self {
            key,
            values: Vec::new(),
            event: PropertyEvent::None,
        }
    }

    pub const fn key(&self) -> K {
        self.key
    }

    pub fn values(&self) -> &[StyleValue] {
        &self.values
    }

    pub const fn event(&self) -> PropertyEvent {
        self.event
    }

    pub fn is_removed(&self) -> bool {
        self.values.is_empty()
    }

    /// Store `values`, coalescing the pending event. Returns whether the value changed.
    pub fn write(&mut self, values: Vec<StyleValue>) -> bool {
        if values.is_empty() {
            return self.clear_values();
        }
        if self.values == values {
            return false;
        }
        self.event = self.event.on_write(!self.is_removed());
        self.values = values;
        true
    }

    /// Remove the value, coalescing the pending event. Returns whether anything was removed.
    pub fn clear_values(&mut self) -> bool {
        if self.is_removed() {
            return false;
        }
        self.event = self.event.on_clear();
        self.values.clear();
        true
    }

    pub fn clear_event(&mut self) {
        self.event = PropertyEvent::None;
    }
}

/// Property entries of one node, grouped by priority and kept in write order.
#[derive(Clone, Debug, PartialEq)]
pub struct PropertyTable<K> {
    preset: Vec<PropertyEntry<K>>,
    style_sheet: Vec<PropertyEntry<K>>,
    inline: Vec<PropertyEntry<K>>,
}

impl<K> Default for PropertyTable<K> {
    fn default() -> Self {
        Self {
            preset: Vec::new(),
            style_sheet: Vec::new(),
            inline: Vec::new(),
        }
    }
}

impl<K: Copy + Eq> PropertyTable<K> {
    pub fn new() -> Self {
        Self::default()
    }

    fn group(&self, group: StyleGroup) -> &[PropertyEntry<K>] {
        match group {
            StyleGroup::Preset => &self.preset,
            StyleGroup::StyleSheet => &self.style_sheet,
            StyleGroup::Inline => &self.inline,
        }
    }

    fn group_mut(&mut self, group: StyleGroup) -> &mut Vec<PropertyEntry<K>> {
        match group {
            StyleGroup::Preset => &mut self.preset,
            StyleGroup::StyleSheet => &mut self.style_sheet,
            StyleGroup::Inline => &mut self.inline,
        }
    }

    /// Entry for writing: created (removed) on first touch and moved to the
    /// back of its group so the latest write is applied last.
    ///
    /// Only use this when a value is about to be written.
    pub fn get_or_create(&mut self, group: StyleGroup, key: K) -> Option<&mut PropertyEntry<K>> {
        let entries = self.group_mut(group);
        let entry = entries
            .iter()
            .position(|candidate| candidate.key == key)
            .map_or_else(|| PropertyEntry::new(key), |index| entries.remove(index));
        entries.push(entry);
        entries.last_mut()
    }

    /// Entry for `key` in `group`, including removed ones.
    pub fn find(&self, group: StyleGroup, key: K) -> Option<&PropertyEntry<K>> {
        self.group(group).iter().find(|entry| entry.key == key)
    }

    /// First non-removed entry scanning `Inline`, `StyleSheet`, then `Preset`.
    pub fn find_cascaded(&self, key: K) -> Option<(StyleGroup, &PropertyEntry<K>)> {
        StyleGroup::CASCADE_ORDER.into_iter().find_map(|group| {
            self.find(group, key)
                .filter(|entry| !entry.is_removed())
                .map(|entry| (group, entry))
        })
    }

    /// Write `values` into `group`; an empty list removes the property.
    ///
    /// Returns whether the stored value changed. The entry moves to the back
    /// of its group even when the value is unchanged.
    pub fn set(&mut self, group: StyleGroup, key: K, values: Vec<StyleValue>) -> bool {
        if values.is_empty() {
            return self.remove(group, key);
        }
        self.get_or_create(group, key)
            .is_some_and(|entry| entry.write(values))
    }

    /// Remove `key` from `group`. Returns false when it was missing or already removed.
    pub fn remove(&mut self, group: StyleGroup, key: K) -> bool {
        self.group_mut(group)
            .iter_mut()
            .find(|entry| entry.key == key)
            .is_some_and(PropertyEntry::clear_values)
    }

    /// Remove every entry of `group`, or of all groups when `None`.
    /// Returns whether anything was removed.
    pub fn clear(&mut self, group: Option<StyleGroup>) -> bool {
        let mut removed = false;
        for current in StyleGroup::APPLICATION_ORDER {
            if group.is_some_and(|only| only != current) {
                continue;
            }
            for entry in self.group_mut(current) {
                removed |= entry.clear_values();
            }
        }
        removed
    }

    /// Copy the live entries of `source` (one group, or all) into this table,
    /// preserving their order. Returns whether anything changed.
    pub fn copy_from(&mut self, source: &Self, group: Option<StyleGroup>) -> bool {
        let mut changed = false;
        for current in StyleGroup::APPLICATION_ORDER {
            if group.is_some_and(|only| only != current) {
                continue;
            }
            for entry in source.group(current) {
                if !entry.is_removed() {
                    changed |= self.set(current, entry.key, entry.values.clone());
                }
            }
        }
        changed
    }

    /// All entries in application order: `Preset`, `StyleSheet`, then `Inline`,
    /// each group in write order.
    pub fn iter(&self) -> impl Iterator<Item = (StyleGroup, &PropertyEntry<K>)> {
        StyleGroup::APPLICATION_ORDER
            .into_iter()
            .flat_map(move |group| self.group(group).iter().map(move |entry| (group, entry)))
    }

    /// Live entries of one group in write order.
    pub fn live_entries(&self, group: StyleGroup) -> impl Iterator<Item = &PropertyEntry<K>> {
        self.group(group).iter().filter(|entry| !entry.is_removed())
    }

    fn entries_mut(&mut self) -> impl Iterator<Item = &mut PropertyEntry<K>> {
        self.preset
            .iter_mut()
            .chain(self.style_sheet.iter_mut())
            .chain(self.inline.iter_mut())
    }

    pub fn clear_events(&mut self) {
        for entry in self.entries_mut() {
            entry.clear_event();
        }
    }

    pub fn has_pending_events(&self) -> bool {
        self.iter()
            .any(|(_, entry)| entry.event != PropertyEvent::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn px(value: f32) -> Vec<StyleValue> {
        vec![StyleValue::px(value)]
    }

    fn keys(table: &PropertyTable<u8>, group: StyleGroup) -> Vec<u8> {
        table.group(group).iter().map(PropertyEntry::key).collect()
    }

    #[test]
    fn writes_move_entries_to_the_back() {
        let mut table = PropertyTable::new();
        table.set(StyleGroup::Inline, 1u8, px(1.0));
        table.set(StyleGroup::Inline, 2, px(2.0));
        assert_eq!(keys(&table, StyleGroup::Inline), vec![1, 2]);
        table.set(StyleGroup::Inline, 1, px(1.0));
        assert_eq!(keys(&table, StyleGroup::Inline), vec![2, 1]);
    }

    #[test]
    fn cascaded_lookup_prefers_inline_and_skips_removed() {
        let mut table = PropertyTable::new();
        table.set(StyleGroup::Preset, 7u8, px(1.0));
        table.set(StyleGroup::StyleSheet, 7, px(2.0));
        table.set(StyleGroup::Inline, 7, px(3.0));
        let found = table.find_cascaded(7).map(|(group, entry)| (group, entry.values().to_vec()));
        assert_eq!(found, Some((StyleGroup::Inline, px(3.0))));

        assert!(table.remove(StyleGroup::Inline, 7));
        assert!(!table.remove(StyleGroup::Inline, 7), "already removed");
        let found = table.find_cascaded(7).map(|(group, _)| group);
        assert_eq!(found, Some(StyleGroup::StyleSheet));
        assert!(table.find(StyleGroup::Inline, 7).is_some_and(PropertyEntry::is_removed));
    }

    #[test]
    fn create_then_remove_nets_no_event() {
        let mut table = PropertyTable::new();
        table.set(StyleGroup::Inline, 3u8, px(1.0));
        assert!(table.has_pending_events());
        table.remove(StyleGroup::Inline, 3);
        assert!(!table.has_pending_events());

        table.set(StyleGroup::Inline, 3, px(1.0));
        table.clear_events();
        table.remove(StyleGroup::Inline, 3);
        table.set(StyleGroup::Inline, 3, px(4.0));
        assert_eq!(
            table.find(StyleGroup::Inline, 3).map(PropertyEntry::event),
            Some(PropertyEvent::Updated)
        );
    }

    #[test]
    fn equal_writes_do_not_raise_events() {
        let mut table = PropertyTable::new();
        assert!(table.set(StyleGroup::Inline, 1u8, px(1.0)));
        table.clear_events();
        assert!(!table.set(StyleGroup::Inline, 1, px(1.0)));
        assert!(!table.has_pending_events());
    }

    #[test]
    fn clear_and_copy_respect_groups() {
        let mut source = PropertyTable::new();
        source.set(StyleGroup::StyleSheet, 1u8, px(1.0));
        source.set(StyleGroup::Inline, 2, px(2.0));
        source.set(StyleGroup::Inline, 3, px(3.0));
        source.remove(StyleGroup::Inline, 3);

        let mut copy = PropertyTable::new();
        assert!(copy.copy_from(&source, Some(StyleGroup::Inline)));
        assert_eq!(keys(&copy, StyleGroup::Inline), vec![2]);
        assert!(copy.find(StyleGroup::StyleSheet, 1).is_none());

        assert!(source.clear(Some(StyleGroup::Inline)));
        assert!(source.find_cascaded(2).is_none());
        assert!(source.find_cascaded(1).is_some());
        assert!(source.clear(None));
        assert_eq!(source.iter().filter(|(_, entry)| !entry.is_removed()).count(), 0);
    }
}
