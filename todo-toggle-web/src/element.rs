use todo_toggle_core::TaskElement;
use web_sys::Element;

/// A rendered task `<li>` seen through [`TaskElement`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomTaskItem(Element);

impl DomTaskItem {
    #[must_use]
    pub const fn new(element: Element) -> Self {
        Self(element)
    }

}

impl TaskElement for DomTaskItem {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_class(&self, class: &str, present: bool) {
        if let Err(err) = self.0.class_list().toggle_with_force(class, present) {
            log::warn!(
                "could not set class {class:?}: {}",
                crate::dom::js_error_message(&err)
            );
        }
    }

    fn set_descendant_text(&self, selector: &str, text: &str) -> bool {
        match self.0.query_selector(selector) {
            Ok(Some(holder)) => {
                holder.set_text_content(Some(text));
                true
            }
            Ok(None) => false,
            Err(err) => {
                log::warn!(
                    "invalid glyph selector {selector:?}: {}",
                    crate::dom::js_error_message(&err)
                );
                false
            }
        }
    }
}
