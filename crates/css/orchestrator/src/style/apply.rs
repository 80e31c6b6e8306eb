//! Per-node application pass.

use std::rc::Rc;

use indextree::{Node, NodeId};

use super::StyleTree;
use crate::layout_model::LayoutEngine;
use crate::properties::{self, ApplyContext, PropertyId};
use crate::text_style::ComputedTextStyle;
use css_cascade::{PropertyEvent, PropertyTable, StyleGroup};

impl<E: LayoutEngine> StyleTree<E> {
    /// Apply every live entry of `node` to its box and recompute its text
    /// style. Returns whether the computed text style changed.
    pub(super) fn apply_node(&mut self, node: NodeId) -> bool {
        let inherited = self.inherited_text_style(node);
        let Some(entry) = self.arena.get_mut(node).map(Node::get_mut) else {
            return false;
        };
        entry.scheduled = false;

        let mut text = ComputedTextStyle {
            font: entry
                .font
                .as_ref()
                .map_or_else(|| Rc::clone(&inherited.font), Rc::clone),
            ..inherited.clone()
        };
        let initial = *self.engine.initial_style();
        let changed = match self.engine.style_mut(entry.layout_box) {
            Some(style) => {
                let mut context = ApplyContext {
                    style,
                    initial: &initial,
                    text: &mut text,
                    inherited: &inherited,
                };
                apply_table(&entry.table, &mut context)
            }
            None => {
                log::warn!(target: "style.apply", "{node:?} has no layout box");
                false
            }
        };
        entry.table.clear_events();

        let text_changed = entry.text_style != text;
        entry.text_style = text;
        let layout_box = entry.layout_box;
        if changed {
            self.engine.mark_dirty(layout_box);
        }
        log::trace!(
            target: "style.apply",
            "{node:?}: box changed {changed}, text changed {text_changed}"
        );
        text_changed
    }

    /// Parent's computed text style, or the tree default for a root.
    fn inherited_text_style(&self, node: NodeId) -> ComputedTextStyle {
        self.arena
            .get(node)
            .and_then(Node::parent)
            .and_then(|parent| self.arena.get(parent))
            .map_or_else(
                || self.root_text.clone(),
                |parent| parent.get().text_style.clone(),
            )
    }
}

/// Install the table into `context`. Text-defining properties go first so
/// font-relative lengths see this node's font size.
fn apply_table(table: &PropertyTable<PropertyId>, context: &mut ApplyContext<'_>) -> bool {
    let mut changed = false;
    for id in properties::text_defining() {
        changed |= match table.find_cascaded(id) {
            Some((_, entry)) => id.definition().install(context, entry.values()),
            None => id.definition().reset(context),
        };
    }

    // Installation order of this pass; a re-written id moves to the back.
    let mut installed: Vec<(PropertyId, StyleGroup)> = Vec::new();
    for (group, entry) in table.iter() {
        let id = entry.key();
        let definition = id.definition();
        if definition.is_text_defining() {
            continue;
        }
        if !entry.is_removed() {
            changed |= definition.install(context, entry.values());
            installed.retain(|&(earlier, _)| earlier != id);
            installed.push((id, group));
            continue;
        }
        if entry.event() != PropertyEvent::Removed {
            continue;
        }
        changed |= definition.reset(context);
        // The reset may have clobbered fields still owned by live relatives.
        let family = id.family();
        for &(relative, relative_group) in &installed {
            if !family.contains(&relative) {
                continue;
            }
            if let Some(live) = table.find(relative_group, relative) {
                changed |= relative.definition().install(context, live.values());
            }
        }
    }
    changed
}
