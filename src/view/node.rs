//! Minimal visual node tree.

use std::{collections::BTreeSet, fmt};

use serde::Serialize;

/// A visual element: a tag with optional id, classes, text lines and
/// children.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Node {
    tag: String,
    id: Option<String>,
    classes: BTreeSet<String>,
    text: Vec<String>,
    children: Vec<Self>,
}

impl Node {
    /// Creates an empty element.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Sets the element id.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Appends text lines.
    #[must_use]
    pub fn with_text<S: Into<String>>(mut self, lines: impl IntoIterator<Item = S>) -> Self {
        self.text.extend(lines.into_iter().map(Into::into));
        self
    }

    /// Appends a child element.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Adds or removes a class.
    pub fn set_class(&mut self, class: &str, enabled: bool) {
        if enabled {
            self.classes.insert(class.to_owned());
        } else {
            self.classes.remove(class);
        }
    }

    /// Returns `true` when the element carries `class`.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// Returns the tag name.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the element id.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Returns the text lines.
    #[must_use]
    pub fn text(&self) -> &[String] {
        &self.text
    }

    /// Returns the child elements.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    pub(crate) const fn children_mut(&mut self) -> &mut Vec<Self> {
        &mut self.children
    }

    fn write_outline(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let indent = "  ".repeat(depth);
        write!(f, "{indent}<{}", self.tag)?;
        if let Some(id) = &self.id {
            write!(f, "#{id}")?;
        }
        for class in &self.classes {
            write!(f, ".{class}")?;
        }
        writeln!(f, ">")?;
        for line in &self.text {
            writeln!(f, "{indent}  {line}")?;
        }
        for child in &self.children {
            child.write_outline(f, depth.saturating_add(1))?;
        }
        Ok(())
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_outline(f, 0)
    }
}
