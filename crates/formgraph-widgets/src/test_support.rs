//! Shared fixtures for unit tests.

use formgraph_core::{Mapping, Record, Sequence, Value};

use crate::context::{FillContext, RenderContext};
use crate::error::Result;
use crate::settings::FormSettings;
use crate::values::FormValues;
use crate::widget::{RenderNode, Widget};

/// A user record with one field per widget kind.
pub(crate) fn user() -> Value {
    Value::from(
        Record::new()
            .with_field("Name", "")
            .with_field("Bio", "")
            .with_field("Password", "")
            .with_field("Admin", false)
            .with_field("Age", 0)
            .with_field("Color", "")
            .with_field("Token", "")
            .with_field("Avatar", "")
            .with_field("Birthday", Value::zero_time())
            .with_field("Tags", Sequence::of(""))
            .with_field("Extra", Mapping::new()),
    )
}

pub(crate) fn fill_with(
    widget: &mut dyn Widget,
    data: &mut Value,
    values: &FormValues,
    settings: &FormSettings,
) -> Result<bool> {
    let mut ctx = FillContext::new(data, values, settings);
    widget.fill(&mut ctx)
}

pub(crate) fn fill_one(widget: &mut dyn Widget, data: &mut Value, values: &FormValues) -> Result<bool> {
    fill_with(widget, data, values, &FormSettings::default())
}

pub(crate) fn render_with(widget: &dyn Widget, data: &Value, settings: &FormSettings) -> Result<RenderNode> {
    widget.render(&RenderContext::new(data, settings))
}

pub(crate) fn render_one(widget: &dyn Widget, data: &Value) -> Result<RenderNode> {
    render_with(widget, data, &FormSettings::default())
}
