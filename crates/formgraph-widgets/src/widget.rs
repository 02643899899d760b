//! The widget contract and the render tree it produces.

use std::fmt;

use formgraph_core::{Path, Value};
use serde::Serialize;

use crate::context::{FillContext, RenderContext};
use crate::error::Result;

/// A binding between one path in the data graph and its presentation.
///
/// `fill` starts by clearing the widget's errors, reads its submitted
/// value, coerces and validates it, writes it through the resolver and
/// reports validity. Validation failures push a message onto
/// [`WidgetBase::errors`] and return `Ok(false)`; an `Err` means the widget
/// does not fit the data graph at all.
pub trait Widget: fmt::Debug {
    /// Shared identity and error state.
    fn base(&self) -> &WidgetBase;

    /// Mutable shared state.
    fn base_mut(&mut self) -> &mut WidgetBase;

    /// Bind the submission onto the data graph.
    fn fill(&mut self, ctx: &mut FillContext<'_>) -> Result<bool>;

    /// Describe the widget and its current value.
    fn render(&self, ctx: &RenderContext<'_>) -> Result<RenderNode>;

    /// Whether a form containing this widget must be submitted as
    /// multipart.
    fn requires_multipart(&self) -> bool {
        false
    }

    /// The widget id, which is also its dotted path.
    fn id(&self) -> &str {
        &self.base().id
    }
}

/// Identity, labels and validation errors common to every widget.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WidgetBase {
    /// Dotted path of the bound value.
    pub id: String,
    /// Human readable label.
    pub label: String,
    /// Longer help text.
    pub description: String,
    /// Messages from the last fill, in order.
    pub errors: Vec<String>,
    /// Presentation classes passed through to the renderer.
    pub classes: Vec<String>,
}

impl WidgetBase {
    /// The id parsed as a path.
    pub fn path(&self) -> Path {
        Path::parse(&self.id)
    }

    /// Build a render node carrying this base.
    pub fn node(&self, template: Template, data: RenderValue) -> RenderNode {
        RenderNode {
            id: self.id.clone(),
            label: self.label.clone(),
            description: self.description.clone(),
            errors: self.errors.clone(),
            classes: self.classes.clone(),
            template,
            data,
        }
    }

    /// Render the current bound value unchanged.
    pub(crate) fn render_bound(&self, ctx: &RenderContext<'_>, template: Template) -> Result<RenderNode> {
        let value = ctx.get(&self.path())?;
        Ok(self.node(template, RenderValue::Value(value.clone())))
    }
}

/// Template selector naming the intended presentation of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    /// Single-line text input.
    Text,
    /// Multi-line text input.
    TextArea,
    /// Masked text input.
    Password,
    /// Boolean checkbox.
    Checkbox,
    /// Choice from fixed options.
    Select,
    /// Hidden input.
    Hidden,
    /// File upload.
    File,
    /// Date and time input.
    Time,
    /// Repeating group of rows.
    List,
}

impl Template {
    /// The token a renderer selects its template by.
    pub fn as_str(self) -> &'static str {
        match self {
            Template::Text => "text",
            Template::TextArea => "textarea",
            Template::Password => "password",
            Template::Checkbox => "checkbox",
            Template::Select => "select",
            Template::Hidden => "hidden",
            Template::File => "file",
            Template::Time => "time",
            Template::List => "list",
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One widget in the render tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderNode {
    /// Widget id.
    pub id: String,
    /// Widget label.
    pub label: String,
    /// Widget description.
    pub description: String,
    /// Validation and externally added errors.
    pub errors: Vec<String>,
    /// Presentation classes.
    pub classes: Vec<String>,
    /// Template selector.
    pub template: Template,
    /// Variant specific payload.
    pub data: RenderValue,
}

/// Variant specific payload of a [`RenderNode`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RenderValue {
    /// The bound value as stored.
    Value(Value),
    /// The bound value already formatted for display.
    Formatted(String),
    /// Options of a select widget.
    Options(Vec<SelectOption>),
    /// Password value plus its verification field.
    Password(PasswordData),
    /// Rows of a list widget.
    List(ListData),
}

impl RenderValue {
    /// The plain value payload, if this is one.
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            RenderValue::Value(value) => Some(value),
            _ => None,
        }
    }

    /// The list payload, if this is one.
    pub fn as_list(&self) -> Option<&ListData> {
        match self {
            RenderValue::List(list) => Some(list),
            _ => None,
        }
    }
}

/// One choice of a select widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    /// Value bound when chosen.
    pub value: String,
    /// Displayed text.
    pub description: String,
    /// Whether this option is the current choice.
    pub selected: bool,
}

impl SelectOption {
    /// An unselected option.
    pub fn new(value: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            description: description.into(),
            selected: false,
        }
    }
}

/// Render payload of a password widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PasswordData {
    /// The bound value.
    pub value: Value,
    /// Metadata for a repeated entry field, if one is configured.
    pub verify: Option<VerifyField>,
}

/// Label, description and error message of a password's repeat field.
///
/// Render-only: the two entries are not compared during fill.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VerifyField {
    /// Label of the repeat field.
    pub label: String,
    /// Description of the repeat field.
    pub description: String,
    /// Message to show when the entries differ.
    pub error: String,
}

/// Render payload of a list widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListData {
    /// One node per row, in index order.
    pub fields: Vec<RenderNode>,
    /// Text of the add-row control.
    pub add_label: String,
    /// Text of the remove-row control.
    pub remove_label: String,
}
