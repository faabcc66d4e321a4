//! The DOM side of a task item, reduced to what a toggle needs.

use crate::config::ToggleConfig;

/// A rendered task item. Methods take `&self`: DOM nodes are mutated through
/// shared handles.
pub trait TaskElement {
    /// Value of an attribute on the item itself, `None` when absent.
    fn attribute(&self, name: &str) -> Option<String>;

    /// Add (`present == true`) or remove a CSS class on the item.
    fn set_class(&self, class: &str, present: bool);

    /// Replace the text of the first descendant matching `selector`.
    /// Returns `false` when no descendant matches.
    fn set_descendant_text(&self, selector: &str, text: &str) -> bool;
}

/// Make an item's completed class and glyph agree with `complete`.
///
/// Returns whether a glyph holder was found and updated; a missing holder is
/// not an error.
pub fn apply_completion<E: TaskElement + ?Sized>(
    item: &E,
    complete: bool,
    config: &ToggleConfig,
) -> bool {
    item.set_class(&config.completed_class, complete);
    item.set_descendant_text(&config.glyph_selector, config.glyph_for(complete))
}
