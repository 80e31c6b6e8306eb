//! Property definition registry.
//!
//! Each property is plain data: the argument shapes it accepts, the operation
//! that installs a resolved value into a box style or computed text style, and
//! the longhands its installation covers. Operations are stateless; all state
//! lives in the node being applied.

use core::hash::{Hash, Hasher};
use core::fmt;
use std::collections::{HashMap, VecDeque};

use once_cell::sync::Lazy;

use crate::style_model::{BoxStyle, EdgeBox, Side};
use crate::text_style::ComputedTextStyle;
use css_values_units::{Pattern, RawValue, Slot, StyleValue, ValueKind, match_patterns};

mod dimensions;
mod edges;
mod flex;
mod gaps;
mod layout;
mod typography;

/// Immutable description of one property.
#[derive(Debug)]
pub struct PropertyDefinition {
    pub name: &'static str,
    /// Accepted argument shapes, tried in order.
    pub patterns: &'static [Pattern],
    pub operation: Operation,
    /// Properties whose effect this one overwrites when installed.
    pub affects: &'static [&'static str],
}

/// How a property writes its value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Keyword(KeywordField),
    Factor(FactorField),
    AspectRatio,
    Dimension(DimensionField),
    /// CSS 1–4 value edge expansion into one edge quad.
    EdgeQuad(EdgeBox),
    Flex,
    FlexFlow,
    Gap,
    FontSize,
    LineHeight,
    TextAlign,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeywordField {
    AlignContent,
    AlignItems,
    AlignSelf,
    Direction,
    Display,
    FlexDirection,
    FlexWrap,
    JustifyContent,
    Position,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FactorField {
    FlexGrow,
    FlexShrink,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DimensionField {
    Edge(EdgeBox, Side),
    Width,
    Height,
    MinWidth,
    MinHeight,
    MaxWidth,
    MaxHeight,
    FlexBasis,
    RowGap,
    ColumnGap,
}

/// Mutable view of one node while its properties are applied.
pub(crate) struct ApplyContext<'node> {
    pub style: &'node mut BoxStyle,
    /// Engine probe record used by resets.
    pub initial: &'node BoxStyle,
    /// The node's text style being resolved.
    pub text: &'node mut ComputedTextStyle,
    /// Parent's computed text style, or the root default.
    pub inherited: &'node ComputedTextStyle,
}

impl PropertyDefinition {
    /// Validate raw arguments against the declared patterns.
    pub fn accept(&self, arguments: &[RawValue<'_>]) -> Option<Vec<StyleValue>> {
        match_patterns(self.patterns, arguments)
    }

    /// Whether this property defines the computed text style.
    pub const fn is_text_defining(&self) -> bool {
        matches!(
            self.operation,
            Operation::FontSize | Operation::LineHeight | Operation::TextAlign
        )
    }

    /// Push `values` into the node. Returns whether observable state changed.
    pub(crate) fn install(&self, context: &mut ApplyContext<'_>, values: &[StyleValue]) -> bool {
        match self.operation {
            Operation::Keyword(field) => values
                .first()
                .is_some_and(|value| layout::install_keyword(context.style, field, value)),
            Operation::Factor(field) => values
                .first()
                .and_then(StyleValue::as_f32)
                .is_some_and(|factor| flex::set_factor(context.style, field, factor)),
            Operation::AspectRatio => values
                .first()
                .is_some_and(|value| layout::install_aspect_ratio(context.style, value)),
            Operation::Dimension(field) => values.first().is_some_and(|value| {
                dimensions::resolve(value, context.text)
                    .is_some_and(|dimension| dimensions::set(context.style, field, dimension))
            }),
            Operation::EdgeQuad(edge_box) => {
                edges::install_quad(context.style, edge_box, values, context.text)
            }
            Operation::Flex => flex::install_flex(context.style, values, context.text),
            Operation::FlexFlow => flex::install_flex_flow(context.style, values),
            Operation::Gap => gaps::install_gap(context.style, values, context.text),
            Operation::FontSize => values
                .first()
                .is_some_and(|value| typography::install_font_size(context, value)),
            Operation::LineHeight => values
                .first()
                .is_some_and(|value| typography::install_line_height(context, value)),
            Operation::TextAlign => values
                .first()
                .is_some_and(|value| typography::install_text_align(context, value)),
        }
    }

    /// Restore the value the node would have if this property was never set.
    pub(crate) fn reset(&self, context: &mut ApplyContext<'_>) -> bool {
        let initial = context.initial;
        match self.operation {
            Operation::Keyword(field) => layout::reset_keyword(context.style, initial, field),
            Operation::Factor(field) => {
                flex::set_factor(context.style, field, flex::factor(initial, field))
            }
            Operation::AspectRatio => assign(&mut context.style.aspect_ratio, initial.aspect_ratio),
            Operation::Dimension(field) => {
                dimensions::set(context.style, field, dimensions::get(initial, field))
            }
            Operation::EdgeQuad(edge_box) => {
                assign(context.style.edges_mut(edge_box), *initial.edges(edge_box))
            }
            Operation::Flex => flex::reset_flex(context.style, initial),
            Operation::FlexFlow => {
                layout::reset_keyword(context.style, initial, KeywordField::FlexDirection)
                    | layout::reset_keyword(context.style, initial, KeywordField::FlexWrap)
            }
            Operation::Gap => {
                dimensions::set(context.style, DimensionField::RowGap, initial.row_gap)
                    | dimensions::set(context.style, DimensionField::ColumnGap, initial.column_gap)
            }
            Operation::FontSize => assign(
                &mut context.text.font_size_px,
                context.inherited.font_size_px,
            ),
            Operation::LineHeight => {
                assign(&mut context.text.line_height, context.inherited.line_height)
            }
            Operation::TextAlign => {
                assign(&mut context.text.text_align, context.inherited.text_align)
            }
        }
    }
}

/// Registry key of a property.
#[derive(Clone, Copy)]
pub struct PropertyId(&'static PropertyDefinition);

impl PropertyId {
    pub const fn definition(self) -> &'static PropertyDefinition {
        self.0
    }

    pub const fn name(self) -> &'static str {
        self.0.name
    }

    /// This property, the longhands it covers, the shorthands covering it,
    /// and their longhands: everything whose installation can overlap its fields.
    pub fn family(self) -> &'static [Self] {
        REGISTRY
            .families
            .get(self.name())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

impl PartialEq for PropertyId {
    fn eq(&self, other: &Self) -> bool {
        self.0.name == other.0.name
    }
}

impl Eq for PropertyId {}

impl Hash for PropertyId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.name.hash(state);
    }
}

impl fmt::Debug for PropertyId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.0.name)
    }
}

struct Registry {
    by_name: HashMap<&'static str, PropertyId>,
    families: HashMap<&'static str, Vec<PropertyId>>,
}

static REGISTRY: Lazy<Registry> = Lazy::new(Registry::build);

impl Registry {
    fn build() -> Self {
        let by_name: HashMap<&'static str, PropertyId> = [
            layout::DEFINITIONS,
            flex::DEFINITIONS,
            gaps::DEFINITIONS,
            edges::DEFINITIONS,
            dimensions::DEFINITIONS,
            typography::DEFINITIONS,
        ]
        .into_iter()
        .flatten()
        .map(|definition| (definition.name, PropertyId(definition)))
        .collect();

        // Undirected adjacency over `affects`, then connected components.
        let mut neighbours: HashMap<&'static str, Vec<&'static str>> = HashMap::new();
        for id in by_name.values() {
            for &dependent in id.definition().affects {
                neighbours.entry(id.name()).or_default().push(dependent);
                neighbours.entry(dependent).or_default().push(id.name());
            }
        }
        let mut families = HashMap::new();
        for (&name, &id) in &by_name {
            let mut family = vec![id];
            let mut queue = VecDeque::from([name]);
            while let Some(current) = queue.pop_front() {
                for &next in neighbours.get(current).into_iter().flatten() {
                    if let Some(&member) = by_name.get(next)
                        && !family.contains(&member)
                    {
                        family.push(member);
                        queue.push_back(next);
                    }
                }
            }
            families.insert(name, family);
        }
        log::debug!(target: "style.registry", "registered {} properties", by_name.len());
        Self { by_name, families }
    }
}

/// Look up a property by name (ASCII case-insensitive).
pub fn lookup(name: &str) -> Option<PropertyId> {
    if let Some(&id) = REGISTRY.by_name.get(name) {
        return Some(id);
    }
    REGISTRY
        .by_name
        .get(name.to_ascii_lowercase().as_str())
        .copied()
}

/// The text-defining properties in the order a node applies them.
pub fn text_defining() -> impl Iterator<Item = PropertyId> {
    typography::ORDER.into_iter().filter_map(lookup)
}

/// Every registered property, in no particular order.
pub fn all() -> impl Iterator<Item = PropertyId> {
    REGISTRY.by_name.values().copied()
}

/// Replace `slot` with `value`, reporting whether it changed.
pub(crate) fn assign<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        false
    } else {
        *slot = value;
        true
    }
}

// Slots shared by the category modules.
pub(crate) const LENGTH: Slot = &[ValueKind::Length];
pub(crate) const LENGTH_PERCENTAGE: Slot = &[ValueKind::Length, ValueKind::Percentage];
pub(crate) const LENGTH_PERCENTAGE_AUTO: Slot =
    &[ValueKind::Length, ValueKind::Percentage, ValueKind::Auto];
pub(crate) const NUMBER: Slot = &[ValueKind::Number];
