//! Nested markup rendering
//!
//! Titles are emitted as-is (they may carry markup); attribute values and
//! hrefs are escaped.

use super::MenuTree;
use crate::domain::services::html_attributes;
use crate::domain::value_objects::{Attributes, ItemId};
use crate::escaping::escape_html;

impl MenuTree {
    /// Render the children of `parent` (roots for `None`) without an outer
    /// container.
    ///
    /// Items are wrapped in `<li>` for `ul`/`ol`, otherwise in `tag` itself.
    /// Nested levels open a `tag` container carrying `children`.
    pub fn render(&self, tag: &str, parent: Option<&ItemId>, children: &Attributes) -> String {
        let mut out = String::new();
        self.render_into(&mut out, tag, parent, children);
        out
    }

    fn render_into(
        &self,
        out: &mut String,
        tag: &str,
        parent: Option<&ItemId>,
        children: &Attributes,
    ) {
        let wrapper = match tag {
            "ul" | "ol" => "li",
            other => other,
        };

        for item in self.where_parent(parent) {
            out.push('<');
            out.push_str(wrapper);
            out.push_str(&html_attributes(item.attributes()));
            out.push('>');

            match (item.link(), self.url(item)) {
                (Some(link), Some(url)) => {
                    out.push_str("<a");
                    out.push_str(&html_attributes(link.attributes()));
                    out.push_str(" href=\"");
                    out.push_str(&escape_html(&url));
                    out.push_str("\">");
                    out.push_str(item.title());
                    out.push_str("</a>");
                }
                _ => out.push_str(item.title()),
            }

            if self.has_children(item.id()) {
                out.push('<');
                out.push_str(tag);
                out.push_str(&html_attributes(children));
                out.push('>');
                self.render_into(out, tag, Some(item.id()), children);
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }

            out.push_str("</");
            out.push_str(wrapper);
            out.push('>');

            if let Some(divider) = item.divider() {
                out.push_str(&format!("<{0}{1}></{0}>", wrapper, html_attributes(divider)));
            }
        }
    }

    /// Render as `<ul>` lists
    pub fn as_unordered_list(&self, attrs: &Attributes, children: &Attributes) -> String {
        self.wrap("ul", attrs, children)
    }

    /// Render as `<ol>` lists
    pub fn as_ordered_list(&self, attrs: &Attributes, children: &Attributes) -> String {
        self.wrap("ol", attrs, children)
    }

    /// Render as nested `<div>` containers
    pub fn as_container(&self, attrs: &Attributes, children: &Attributes) -> String {
        self.wrap("div", attrs, children)
    }

    fn wrap(&self, tag: &str, attrs: &Attributes, children: &Attributes) -> String {
        format!(
            "<{0}{1}>{2}</{0}>",
            tag,
            html_attributes(attrs),
            self.render(tag, None, children)
        )
    }
}
