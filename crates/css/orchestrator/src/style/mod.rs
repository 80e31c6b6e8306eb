//! The style tree: per-node property tables, the tree-scoped dirty set, and
//! the flush that applies pending changes shallow-before-deep.
//!
//! Every accepted write schedules its node once. Nothing reaches the geometry
//! engine until [`StyleTree::flush`] runs for a root containing the node.

mod apply;
mod node;

use core::cmp::Reverse;
use core::mem;
use std::collections::BinaryHeap;
use std::rc::Rc;

use anyhow::{Result, anyhow};
use indextree::{Arena, Node, NodeId};
use tracing::info_span;

use crate::config::StyleEngineConfig;
use crate::layout::BoxStore;
use crate::layout_model::{BoxId, LayoutEngine};
use crate::properties;
use crate::style_model::BoxStyle;
use crate::text_style::{ComputedTextStyle, FixedFontMetrics, FontHandle};
use css_cascade::{PropertyEntry, StyleGroup};
use css_style_attr::{Declaration, parse_style_attribute, serialize_style_attribute};
use css_values_units::{RawValue, StyleValue};
use node::StyleNode;

/// A forest of styled nodes backed by one geometry engine.
pub struct StyleTree<E: LayoutEngine = BoxStore> {
    arena: Arena<StyleNode>,
    engine: E,
    config: StyleEngineConfig,
    /// Text style inherited by parentless nodes.
    root_text: ComputedTextStyle,
    /// Nodes waiting for a flush, in scheduling order.
    scheduled: Vec<NodeId>,
}

impl StyleTree<BoxStore> {
    /// Tree over a [`BoxStore`] using the built-in fallback font.
    pub fn new(config: StyleEngineConfig) -> Self {
        let engine = BoxStore::new(&config);
        let font = FixedFontMetrics::handle(config.default_font_size_px);
        Self::with_engine(engine, config, font)
    }
}

impl Default for StyleTree<BoxStore> {
    fn default() -> Self {
        Self::new(StyleEngineConfig::default())
    }
}

impl<E: LayoutEngine> StyleTree<E> {
    pub fn with_engine(engine: E, config: StyleEngineConfig, font: FontHandle) -> Self {
        Self {
            arena: Arena::new(),
            engine,
            root_text: ComputedTextStyle::root(&config, font),
            config,
            scheduled: Vec::new(),
        }
    }

    pub const fn config(&self) -> &StyleEngineConfig {
        &self.config
    }

    pub const fn engine(&self) -> &E {
        &self.engine
    }

    pub const fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Create a detached node with a fresh layout box.
    pub fn create_node(&mut self) -> NodeId {
        let layout_box = self.engine.create_box();
        self.arena
            .new_node(StyleNode::new(layout_box, self.root_text.clone()))
    }

    fn node(&self, node: NodeId) -> Option<&StyleNode> {
        self.arena
            .get(node)
            .filter(|entry| !entry.is_removed())
            .map(Node::get)
    }

    fn node_mut(&mut self, node: NodeId) -> Option<&mut StyleNode> {
        self.arena
            .get_mut(node)
            .filter(|entry| !entry.is_removed())
            .map(Node::get_mut)
    }

    fn require(&self, node: NodeId) -> Result<()> {
        if self.contains(node) {
            Ok(())
        } else {
            Err(anyhow!("style node {node:?} does not exist"))
        }
    }

    /// Whether `node` exists and has not been removed.
    pub fn contains(&self, node: NodeId) -> bool {
        self.node(node).is_some()
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.arena
            .get(node)
            .filter(|entry| !entry.is_removed())
            .and_then(Node::parent)
    }

    /// Move `child` (with its subtree) under `parent`, after existing children.
    ///
    /// # Errors
    /// Fails when either node is unknown or removed, or when `child` is
    /// `parent` or one of its ancestors.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.require(parent)?;
        self.require(child)?;
        if parent.ancestors(&self.arena).any(|ancestor| ancestor == child) {
            return Err(anyhow!("cannot append {child:?} beneath its own descendant {parent:?}"));
        }
        child.detach(&mut self.arena);
        parent
            .checked_append(child, &mut self.arena)
            .map_err(|error| anyhow!("failed to append {child:?} to {parent:?}: {error}"))?;
        self.schedule(child);
        Ok(())
    }

    /// Detach `node` from its parent; it becomes the root of its own tree.
    ///
    /// # Errors
    /// Fails when the node is unknown or removed.
    pub fn detach(&mut self, node: NodeId) -> Result<()> {
        self.require(node)?;
        node.detach(&mut self.arena);
        self.schedule(node);
        Ok(())
    }

    /// Remove `node` and its descendants together with their layout boxes.
    ///
    /// # Errors
    /// Fails when the node is unknown or removed.
    pub fn remove_subtree(&mut self, node: NodeId) -> Result<()> {
        self.require(node)?;
        let boxes: Vec<BoxId> = node
            .descendants(&self.arena)
            .filter_map(|member| self.node(member).map(|entry| entry.layout_box))
            .collect();
        for layout_box in boxes {
            self.engine.remove_box(layout_box);
        }
        node.remove_subtree(&mut self.arena);
        Ok(())
    }

    fn schedule(&mut self, node: NodeId) {
        if let Some(entry) = self.node_mut(node)
            && !entry.scheduled
        {
            entry.scheduled = true;
            self.scheduled.push(node);
        }
    }

    /// Whether `node` has changes waiting for a flush.
    pub fn is_scheduled(&self, node: NodeId) -> bool {
        self.node(node).is_some_and(|entry| entry.scheduled)
    }

    /// Write `values` to `name` in `group`.
    ///
    /// A single string is split on ASCII whitespace first. A list made only
    /// of unspecified inputs removes the property. Returns whether the write
    /// was accepted; rejected writes leave the table untouched.
    pub fn set(
        &mut self,
        node: NodeId,
        group: StyleGroup,
        name: &str,
        values: &[RawValue<'_>],
    ) -> bool {
        let Some(id) = properties::lookup(name) else {
            log::debug!(target: "style.set", "unknown property {name}");
            return false;
        };
        if values.iter().all(RawValue::is_unspecified) {
            return self.remove(node, group, name);
        }
        let tokens: Vec<RawValue<'_>>;
        let arguments = if let [RawValue::Str(text)] = *values {
            tokens = text.split_ascii_whitespace().map(RawValue::Str).collect();
            tokens.as_slice()
        } else {
            values
        };
        let Some(parsed) = id.definition().accept(arguments) else {
            log::debug!(target: "style.set", "rejected {name}: {values:?}");
            return false;
        };
        let Some(entry) = self.node_mut(node) else {
            log::debug!(target: "style.set", "{node:?} does not exist");
            return false;
        };
        entry.table.set(group, id, parsed);
        self.schedule(node);
        true
    }

    /// Parse `text` as the value of `name`.
    pub fn set_str(&mut self, node: NodeId, group: StyleGroup, name: &str, text: &str) -> bool {
        self.set(node, group, name, &[RawValue::Str(text)])
    }

    /// Remove `name` from `group`. Returns false when nothing was removed.
    pub fn remove(&mut self, node: NodeId, group: StyleGroup, name: &str) -> bool {
        let Some(id) = properties::lookup(name) else {
            return false;
        };
        let removed = self
            .node_mut(node)
            .is_some_and(|entry| entry.table.remove(group, id));
        if removed {
            self.schedule(node);
        }
        removed
    }

    /// Values of `name` stored in `group`, if it holds any.
    pub fn get(&self, node: NodeId, group: StyleGroup, name: &str) -> Option<&[StyleValue]> {
        let id = properties::lookup(name)?;
        self.node(node)?
            .table
            .find(group, id)
            .filter(|entry| !entry.is_removed())
            .map(PropertyEntry::values)
    }

    /// Effective values of `name` across groups; empty when unset.
    pub fn get_cascaded(&self, node: NodeId, name: &str) -> Vec<StyleValue> {
        properties::lookup(name)
            .zip(self.node(node))
            .and_then(|(id, entry)| entry.table.find_cascaded(id))
            .map(|(_, entry)| entry.values().to_vec())
            .unwrap_or_default()
    }

    /// Remove every property of `group`, or of all groups.
    pub fn clear(&mut self, node: NodeId, group: Option<StyleGroup>) -> bool {
        let cleared = self
            .node_mut(node)
            .is_some_and(|entry| entry.table.clear(group));
        if cleared {
            self.schedule(node);
        }
        cleared
    }

    /// Copy live entries of `source` into `target`, one group or all.
    pub fn copy_styles(
        &mut self,
        target: NodeId,
        source: NodeId,
        group: Option<StyleGroup>,
    ) -> bool {
        let Some(table) = self.node(source).map(|entry| entry.table.clone()) else {
            return false;
        };
        let changed = self
            .node_mut(target)
            .is_some_and(|entry| entry.table.copy_from(&table, group));
        if changed {
            self.schedule(target);
        }
        changed
    }

    /// Serialize the Inline group as `name: value;` declarations.
    pub fn get_inline_css_text(&self, node: NodeId) -> String {
        let Some(entry) = self.node(node) else {
            return String::new();
        };
        let declarations: Vec<Declaration> = entry
            .table
            .live_entries(StyleGroup::Inline)
            .map(|live| {
                let value = live
                    .values()
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(" ");
                Declaration::new(live.key().name(), &value)
            })
            .collect();
        serialize_style_attribute(&declarations)
    }

    /// Replace the Inline group with the declarations in `text`.
    ///
    /// Unknown or invalid declarations are skipped. Returns whether every
    /// declaration was accepted.
    pub fn set_inline_css_text(&mut self, node: NodeId, text: &str) -> bool {
        if !self.contains(node) {
            return false;
        }
        self.clear(node, Some(StyleGroup::Inline));
        let mut accepted = true;
        for declaration in parse_style_attribute(text) {
            accepted &= self.set_str(
                node,
                StyleGroup::Inline,
                &declaration.property,
                &declaration.value,
            );
        }
        accepted
    }

    /// Replace the node's local font; `None` inherits the parent's.
    pub fn set_font(&mut self, node: NodeId, font: Option<FontHandle>) -> bool {
        let Some(entry) = self.node_mut(node) else {
            return false;
        };
        let same = match (&entry.font, &font) {
            (Some(current), Some(next)) => Rc::ptr_eq(current, next),
            (None, None) => true,
            _ => false,
        };
        if same {
            return false;
        }
        entry.font = font;
        self.schedule(node);
        true
    }

    /// Text style resolved by the last flush.
    pub fn computed_text_style(&self, node: NodeId) -> Option<&ComputedTextStyle> {
        self.node(node).map(|entry| &entry.text_style)
    }

    pub fn layout_box(&self, node: NodeId) -> Option<BoxId> {
        self.node(node).map(|entry| entry.layout_box)
    }

    /// Engine style record of the node's box.
    pub fn box_style(&self, node: NodeId) -> Option<&BoxStyle> {
        self.engine.style(self.layout_box(node)?)
    }

    /// Whether the node's table still carries pending change events.
    pub fn has_pending_changes(&self, node: NodeId) -> bool {
        self.node(node)
            .is_some_and(|entry| entry.table.has_pending_events())
    }

    fn is_within(&self, root: NodeId, node: NodeId) -> bool {
        node.ancestors(&self.arena).any(|ancestor| ancestor == root)
    }

    fn depth(&self, node: NodeId) -> usize {
        node.ancestors(&self.arena).count()
    }

    /// Apply pending changes of every scheduled node under `root`.
    ///
    /// Nodes run shallowest first. A node whose computed text style changes
    /// re-applies its descendants; a descendant reached that way is not
    /// applied again in its own turn. Scheduled nodes of other trees stay
    /// queued. Returns the number of node passes.
    ///
    /// # Errors
    /// Fails when `root` is unknown or removed.
    pub fn flush(&mut self, root: NodeId) -> Result<usize> {
        let _span = info_span!("style.flush").entered();
        self.require(root)?;

        let pending = mem::take(&mut self.scheduled);
        let mut queue = BinaryHeap::new();
        for (sequence, &node) in pending.iter().enumerate() {
            if !self.contains(node) {
                continue;
            }
            if self.is_within(root, node) {
                queue.push(Reverse((self.depth(node), sequence)));
            } else {
                self.scheduled.push(node);
            }
        }

        let mut passes = 0;
        while let Some(Reverse((_, sequence))) = queue.pop() {
            let Some(&node) = pending.get(sequence) else {
                continue;
            };
            if self.is_scheduled(node) {
                passes += self.apply_from(node);
            }
        }
        log::debug!(target: "style.flush", "{passes} node passes under {root:?}");
        Ok(passes)
    }

    /// Apply `start`, then any descendants whose inherited text style changed.
    fn apply_from(&mut self, start: NodeId) -> usize {
        let mut passes = 0;
        let mut stack = vec![start];
        while let Some(node) = stack.pop() {
            passes += 1;
            if self.apply_node(node) {
                let children: Vec<NodeId> = node.children(&self.arena).collect();
                stack.extend(children.into_iter().rev());
            }
        }
        passes
    }
}
