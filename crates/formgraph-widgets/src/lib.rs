//! Formgraph Widgets — bind flat form submissions onto a value graph.
//!
//! Widgets are registered on a [`Form`] against dotted paths. A fill pass
//! reads a [`FormValues`] submission, coerces and validates each value and
//! writes it into the caller's [`Value`](formgraph_core::Value) graph. A
//! render pass reads the graph back and produces a serializable
//! [`RenderData`] tree for a template engine.
//!
//! # Modules
//!
//! - [`context`]: State passed to widgets during fill and render
//! - [`error`]: Error types and Result alias
//! - [`form`]: Widget registration and the fill/render passes
//! - [`settings`]: TOML-backed form settings
//! - [`values`]: Submitted key/value pairs
//! - [`widget`]: The widget trait and render tree types
//! - [`widgets`]: Widget variants, including repeating lists

#![doc = include_str!("../README.md")]

pub mod context;
pub mod error;
pub mod form;
pub mod settings;
pub mod values;
pub mod widget;
pub mod widgets;

mod proptests;
#[cfg(test)]
mod test_support;

// Re-export key types at crate root for convenience
pub use context::{FillContext, RenderContext};
pub use error::{Error, Result};
pub use form::{Form, RenderData};
pub use settings::FormSettings;
pub use values::FormValues;
pub use widget::{
    ListData, PasswordData, RenderNode, RenderValue, SelectOption, Template, VerifyField, Widget,
    WidgetBase,
};
pub use widgets::{
    BoolWidget, FileWidget, HiddenWidget, IntegerWidget, ListWidget, PasswordWidget, SelectWidget,
    TextAreaWidget, TextWidget, TimeFormat, TimeWidget,
};
