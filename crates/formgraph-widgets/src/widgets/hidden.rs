//! Hidden input.

use crate::context::{FillContext, RenderContext};
use crate::error::Result;
use crate::widget::{RenderNode, Template, Widget, WidgetBase};

/// Binds a string from a hidden input, unvalidated.
#[derive(Debug, Clone, Default)]
pub struct HiddenWidget {
    base: WidgetBase,
}

impl HiddenWidget {
    /// A hidden widget.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Widget for HiddenWidget {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn fill(&mut self, ctx: &mut FillContext<'_>) -> Result<bool> {
        self.base.errors.clear();
        let value = ctx.submitted(&self.base.id).unwrap_or_default();
        ctx.set(&self.base.path(), value)?;
        Ok(true)
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Result<RenderNode> {
        self.base.render_bound(ctx, Template::Hidden)
    }
}
