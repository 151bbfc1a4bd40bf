use crate::renderer::classify::{Classification, ValueClassifier};
use crate::renderer::escape::XmlEscaper;
use crate::renderer::traits::RenderContext;
use crate::value::{Container, Renderable, Value};

/// Root element wrapping every rendered document.
pub const ROOT_TAG: &str = "root";
/// Wrapper around the body of a nested sub-document, distinct from the
/// field name so a consumer can tell a sub-document from a plain container.
pub const PROMPT_TAG: &str = "prompt";
/// Derived tag for sequence entries.
pub const ENTRY_TAG: &str = "entry";
/// Wrapper around a sequence entry that is itself a container.
pub const LIST_TAG: &str = "list";

/// Recursive markup renderer for structured values.
///
/// Every element lands on its own line with no indentation. Cycles,
/// capability-less objects and resource handles all degrade to an empty
/// element; there is no error path.
pub struct XmlRenderer;

impl XmlRenderer {
    /// Renders the fields of `root` wrapped in the fixed root element. The
    /// traversal context is created here and lives exactly as long as this
    /// call.
    pub fn render(&self, root: &dyn Renderable) -> String {
        let context = RenderContext::new();
        let mut output = String::new();
        output.push_str(&format!("<{}>\n", ROOT_TAG));
        for (name, value) in root.fields() {
            self.render_node(&name, &value, &context, &mut output);
        }
        output.push_str(&format!("</{}>\n", ROOT_TAG));
        output
    }

    fn render_node(&self, name: &str, value: &Value, context: &RenderContext, output: &mut String) {
        let classifier = ValueClassifier;
        match classifier.classify(value, context) {
            Classification::Scalar => {
                self.render_text_element(name, &value.scalar_text(), output);
            }
            Classification::Container(container) => {
                self.render_container(name, container, context, output);
            }
            Classification::Nested { id, renderable } => {
                // Identity goes into the context before the children are
                // visited; a path back to this object renders empty.
                let entered = context.with(id);
                output.push_str(&format!("<{}>\n<{}>\n", name, PROMPT_TAG));
                for (field_name, field_value) in renderable.fields() {
                    self.render_node(&field_name, &field_value, &entered, output);
                }
                output.push_str(&format!("</{}>\n</{}>\n", PROMPT_TAG, name));
            }
            Classification::ContainerView { id, container } => {
                let entered = context.with(id);
                self.render_container(name, &container, &entered, output);
            }
            Classification::Text(text) => {
                self.render_text_element(name, &text, output);
            }
            Classification::Opaque => {
                output.push_str(&format!("<{}></{}>\n", name, name));
            }
        }
    }

    fn render_container(
        &self,
        name: &str,
        container: &Container,
        context: &RenderContext,
        output: &mut String,
    ) {
        output.push_str(&format!("<{}>\n", name));
        match container {
            Container::Seq(items) => {
                let classifier = ValueClassifier;
                for item in items {
                    // A literal container under a sequence index gets the
                    // extra list wrapper; scalars and objects do not.
                    if matches!(
                        classifier.classify(item, context),
                        Classification::Container(_)
                    ) {
                        output.push_str(&format!("<{}>\n", LIST_TAG));
                        self.render_node(ENTRY_TAG, item, context, output);
                        output.push_str(&format!("</{}>\n", LIST_TAG));
                    } else {
                        self.render_node(ENTRY_TAG, item, context, output);
                    }
                }
            }
            Container::Map(entries) => {
                for (key, child) in entries {
                    self.render_node(key, child, context, output);
                }
            }
        }
        output.push_str(&format!("</{}>\n", name));
    }

    fn render_text_element(&self, name: &str, text: &str, output: &mut String) {
        let escaper = XmlEscaper;
        output.push_str(&format!("<{}>{}</{}>\n", name, escaper.escape(text), name));
    }
}
