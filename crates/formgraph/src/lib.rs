//! Formgraph — umbrella crate.
//!
//! This crate re-exports all Formgraph components for convenience.

#![doc = include_str!("../README.md")]

pub use formgraph_core as core;
pub use formgraph_widgets as widgets;

/// The types needed to declare a data graph, build a form and run it.
pub mod prelude {
    pub use formgraph_core::{Mapping, Path, Record, Sequence, Value};
    pub use formgraph_widgets::{
        BoolWidget, FileWidget, Form, FormSettings, FormValues, HiddenWidget, IntegerWidget,
        ListWidget, PasswordWidget, RenderData, RenderNode, RenderValue, SelectOption,
        SelectWidget, TextAreaWidget, TextWidget, TimeFormat, TimeWidget, Widget,
    };
}
