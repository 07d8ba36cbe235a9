//! Template-based rendering of views into nodes.

use minijinja::{Environment, context};
use thiserror::Error;

use crate::board::domain::ItemStatus;

use super::{ItemView, Node};

/// Template for one work item: title, effort, description.
pub const ITEM_TEMPLATE: &str = "single-project";
/// Template for a list header.
pub const LIST_TEMPLATE: &str = "project-list";
/// Template for the new-item form.
pub const INPUT_TEMPLATE: &str = "project-input";

const ITEM_SOURCE: &str = "{{ title }}\n{{ effort }}\n{{ description }}";
const LIST_SOURCE: &str = "{{ kind | upper }} PROJECTS";
const INPUT_SOURCE: &str = "Title: {{ title }}\nDescription: {{ description }}\nEffort: {{ effort }}";

/// Errors raised while instantiating a template.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RenderError {
    /// A template failed to compile or render.
    #[error("failed to render template '{template}': {reason}")]
    Template {
        /// Template name.
        template: &'static str,
        /// Engine message.
        reason: String,
    },
}

/// Instantiates the board's templates.
#[derive(Debug)]
pub struct Renderer {
    environment: Environment<'static>,
}

impl Renderer {
    /// Compiles the built-in templates.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Template`] when a template does not compile.
    pub fn new() -> Result<Self, RenderError> {
        let mut environment = Environment::new();
        for (name, source) in [
            (ITEM_TEMPLATE, ITEM_SOURCE),
            (LIST_TEMPLATE, LIST_SOURCE),
            (INPUT_TEMPLATE, INPUT_SOURCE),
        ] {
            environment
                .add_template(name, source)
                .map_err(|err| template_error(name, &err))?;
        }
        Ok(Self { environment })
    }

    /// Renders one item as a list entry identified by the item id.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Template`] when rendering fails.
    pub fn render_item(&self, view: &ItemView) -> Result<Node, RenderError> {
        let item = view.item();
        let text = self.render(
            ITEM_TEMPLATE,
            context! {
                title => item.title(),
                effort => view.effort_label().to_string(),
                description => item.description(),
            },
        )?;
        Ok(Node::new("li")
            .with_id(item.id().as_str())
            .with_text(text.lines()))
    }

    /// Renders the heading of the list showing `kind` items.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Template`] when rendering fails.
    pub fn render_list_header(&self, kind: ItemStatus) -> Result<Node, RenderError> {
        let text = self.render(LIST_TEMPLATE, context! { kind => kind.as_str() })?;
        Ok(Node::new("h2").with_text(text.lines()))
    }

    /// Renders the new-item form with its current field values.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Template`] when rendering fails.
    pub fn render_input(
        &self,
        title: &str,
        description: &str,
        effort: &str,
    ) -> Result<Node, RenderError> {
        let text = self.render(
            INPUT_TEMPLATE,
            context! { title, description, effort },
        )?;
        Ok(Node::new("form").with_id("user-input").with_text(text.lines()))
    }

    fn render(&self, name: &'static str, ctx: minijinja::Value) -> Result<String, RenderError> {
        self.environment
            .get_template(name)
            .and_then(|template| template.render(ctx))
            .map_err(|err| template_error(name, &err))
    }
}

fn template_error(template: &'static str, err: &minijinja::Error) -> RenderError {
    RenderError::Template {
        template,
        reason: err.to_string(),
    }
}
