#![cfg(test)]

use core::error::Error;
use std::rc::Rc;

use css_orchestrator::{
    Dimension, FixedFontMetrics, FontMetrics, NodeId, StyleEngineConfig, StyleGroup, StyleTree,
};
use css_values_units::TextAlign;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn margin_top(tree: &StyleTree, node: NodeId) -> Result<Dimension, Box<dyn Error>> {
    tree.box_style(node)
        .map(|style| style.margin.top)
        .ok_or_else(|| "node has no box".into())
}

fn font_size(tree: &StyleTree, node: NodeId) -> Result<f32, Box<dyn Error>> {
    tree.computed_text_style(node)
        .map(|text| text.font_size_px)
        .ok_or_else(|| "node has no text style".into())
}

fn parent_and_child(tree: &mut StyleTree) -> Result<(NodeId, NodeId), Box<dyn Error>> {
    let parent = tree.create_node();
    let child = tree.create_node();
    tree.append_child(parent, child)?;
    Ok((parent, child))
}

/// Font-relative lengths follow the nearest ancestor font size.
///
/// # Errors
/// Returns an error if tree construction or a flush fails.
#[test]
fn em_follows_ancestor_font_size() -> Result<(), Box<dyn Error>> {
    init_logging();
    let mut tree = StyleTree::default();
    let (parent, child) = parent_and_child(&mut tree)?;
    tree.set_str(parent, StyleGroup::Inline, "font-size", "10px");
    tree.set_str(child, StyleGroup::Inline, "margin-top", "2em");
    tree.flush(parent)?;
    assert_eq!(margin_top(&tree, child)?, Dimension::Points(20.0));

    tree.remove(parent, StyleGroup::Inline, "font-size");
    tree.flush(parent)?;
    assert_eq!(margin_top(&tree, child)?, Dimension::Points(32.0));
    Ok(())
}

/// A child reached through its parent's text change is applied once.
///
/// # Errors
/// Returns an error if tree construction or a flush fails.
#[test]
fn revisited_child_is_not_applied_twice() -> Result<(), Box<dyn Error>> {
    init_logging();
    let mut tree = StyleTree::default();
    let (parent, child) = parent_and_child(&mut tree)?;
    let grandchild = tree.create_node();
    tree.append_child(child, grandchild)?;
    tree.flush(parent)?;

    tree.set_str(parent, StyleGroup::Inline, "font-size", "12px");
    tree.set_str(grandchild, StyleGroup::Inline, "padding-left", "1em");
    assert_eq!(tree.flush(parent)?, 3);
    assert!(!tree.is_scheduled(grandchild));
    let padding = tree
        .box_style(grandchild)
        .map(|style| style.padding.left)
        .ok_or("grandchild has no box")?;
    assert_eq!(padding, Dimension::Points(12.0));
    Ok(())
}

/// Children are left alone when the parent's text style did not change.
///
/// # Errors
/// Returns an error if tree construction or a flush fails.
#[test]
fn unchanged_text_does_not_visit_children() -> Result<(), Box<dyn Error>> {
    init_logging();
    let mut tree = StyleTree::default();
    let (parent, _child) = parent_and_child(&mut tree)?;
    tree.flush(parent)?;
    tree.set_str(parent, StyleGroup::Inline, "width", "10px");
    assert_eq!(tree.flush(parent)?, 1);
    Ok(())
}

/// Line height, alignment and percentage font sizes inherit.
///
/// # Errors
/// Returns an error if tree construction or a flush fails.
#[test]
fn text_properties_inherit() -> Result<(), Box<dyn Error>> {
    init_logging();
    let mut tree = StyleTree::default();
    let (parent, child) = parent_and_child(&mut tree)?;
    tree.set_str(parent, StyleGroup::Inline, "font-size", "20px");
    tree.set_str(parent, StyleGroup::Inline, "line-height", "2");
    tree.set_str(parent, StyleGroup::Inline, "text-align", "center");
    tree.set_str(child, StyleGroup::Inline, "font-size", "150%");
    tree.set_str(child, StyleGroup::Inline, "margin-top", "1lh");
    tree.flush(parent)?;

    let text = tree
        .computed_text_style(child)
        .ok_or("child has no text style")?;
    assert_eq!(text.text_align, TextAlign::Center);
    assert!((text.line_height - 2.0).abs() < f32::EPSILON);
    assert!((font_size(&tree, child)? - 30.0).abs() < f32::EPSILON);
    // 16px native line height of 19.2, scaled to 30px, doubled.
    let Dimension::Points(line) = margin_top(&tree, child)? else {
        return Err("margin is not in points".into());
    };
    assert!((line - 72.0).abs() < 1e-3);
    assert!((line - text.line_height_px()).abs() < 1e-4);

    tree.set_str(child, StyleGroup::Inline, "text-align", "right");
    tree.flush(parent)?;
    let realigned = tree
        .computed_text_style(child)
        .ok_or("child has no text style")?;
    assert_eq!(realigned.text_align, TextAlign::Right);
    Ok(())
}

/// Root nodes inherit the configured defaults.
///
/// # Errors
/// Returns an error if a flush fails.
#[test]
fn roots_inherit_configured_text_style() -> Result<(), Box<dyn Error>> {
    init_logging();
    let config = StyleEngineConfig::new(false, 20.0, 1.5, TextAlign::End);
    let mut tree = StyleTree::new(config);
    let node = tree.create_node();
    assert!((font_size(&tree, node)? - 20.0).abs() < f32::EPSILON);
    tree.set_str(node, StyleGroup::Inline, "margin-top", "1em");
    tree.flush(node)?;
    assert_eq!(margin_top(&tree, node)?, Dimension::Points(20.0));
    let style = tree.box_style(node).ok_or("node has no box")?;
    assert!(style.flex_shrink.abs() < f32::EPSILON);
    Ok(())
}

/// Three narrow units per ten pixels of native size.
#[derive(Debug)]
struct NarrowFont;

impl FontMetrics for NarrowFont {
    fn native_size_px(&self) -> f32 {
        10.0
    }

    fn advance(&self, _character: char) -> f32 {
        3.0
    }

    fn glyph_height(&self, _character: char) -> f32 {
        4.0
    }

    fn line_height(&self) -> f32 {
        12.0
    }
}

/// A local font changes glyph-relative units of the node and its children.
///
/// # Errors
/// Returns an error if tree construction or a flush fails.
#[test]
fn font_override_drives_glyph_units() -> Result<(), Box<dyn Error>> {
    init_logging();
    let mut tree = StyleTree::default();
    let (parent, child) = parent_and_child(&mut tree)?;
    tree.set_str(child, StyleGroup::Inline, "margin-top", "1ch");
    tree.flush(parent)?;
    assert_eq!(margin_top(&tree, child)?, Dimension::Points(8.0));

    let font: Rc<dyn FontMetrics> = Rc::new(NarrowFont);
    assert!(tree.set_font(parent, Some(Rc::clone(&font))));
    assert!(!tree.set_font(parent, Some(Rc::clone(&font))));
    tree.flush(parent)?;
    let Dimension::Points(advance) = margin_top(&tree, child)? else {
        return Err("margin is not in points".into());
    };
    // 3 units at native 10px, scaled to 16px.
    assert!((advance - 4.8).abs() < 1e-4);

    assert!(tree.set_font(parent, None));
    tree.flush(parent)?;
    assert_eq!(margin_top(&tree, child)?, Dimension::Points(8.0));
    let fallback = tree.computed_text_style(child).ok_or("no text style")?;
    assert!((fallback.rendering_scale() - 1.0).abs() < f32::EPSILON);
    assert_eq!(
        format!("{:?}", fallback.font),
        format!("{:?}", FixedFontMetrics::new(16.0))
    );
    Ok(())
}

/// Glyph units in `font-size` measure the node's own font at the parent's size.
///
/// # Errors
/// Returns an error if tree construction or a flush fails.
#[test]
fn font_size_glyph_units_use_local_font() -> Result<(), Box<dyn Error>> {
    init_logging();
    let mut tree = StyleTree::default();
    let (parent, child) = parent_and_child(&mut tree)?;
    assert!(tree.set_font(child, Some(Rc::new(NarrowFont))));
    tree.set_str(child, StyleGroup::Inline, "font-size", "2ch");
    tree.flush(parent)?;
    // Advance 3 at native 10px, scaled to the parent's 16px, twice.
    assert!((font_size(&tree, child)? - 9.6).abs() < 1e-4);
    assert!((font_size(&tree, parent)? - 16.0).abs() < f32::EPSILON);
    Ok(())
}
