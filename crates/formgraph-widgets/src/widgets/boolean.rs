//! Checkbox input.

use crate::context::{FillContext, RenderContext};
use crate::error::Result;
use crate::widget::{RenderNode, Template, Widget, WidgetBase};

/// Parse the boolean spellings a checkbox may submit.
///
/// Accepts `1 t T true TRUE True` and `0 f F false FALSE False`.
pub fn parse_bool(input: &str) -> Option<bool> {
    match input {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}

/// Binds a boolean. An unchecked box submits nothing, so absent or
/// unreadable input binds `false`. Never invalid.
#[derive(Debug, Clone, Default)]
pub struct BoolWidget {
    base: WidgetBase,
}

impl BoolWidget {
    /// A checkbox widget.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Widget for BoolWidget {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn fill(&mut self, ctx: &mut FillContext<'_>) -> Result<bool> {
        self.base.errors.clear();
        let checked = ctx
            .submitted(&self.base.id)
            .and_then(parse_bool)
            .unwrap_or(false);
        ctx.set(&self.base.path(), checked)?;
        Ok(true)
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Result<RenderNode> {
        self.base.render_bound(ctx, Template::Checkbox)
    }
}
