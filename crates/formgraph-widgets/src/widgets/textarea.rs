//! Multi-line text input.

use crate::context::{FillContext, RenderContext};
use crate::error::Result;
use crate::widget::{RenderNode, Template, Widget, WidgetBase};
use crate::widgets::text::TextRules;

/// Binds a string from a multi-line input. Only a minimum length applies.
#[derive(Debug, Clone, Default)]
pub struct TextAreaWidget {
    base: WidgetBase,
    rules: TextRules,
}

impl TextAreaWidget {
    /// An unconstrained text area.
    pub fn new() -> Self {
        Self::default()
    }

    /// Require at least `min_length` characters.
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.rules.min_length = min_length;
        self
    }

    /// Message recorded when validation fails.
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.rules.error = error.into();
        self
    }
}

impl Widget for TextAreaWidget {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn fill(&mut self, ctx: &mut FillContext<'_>) -> Result<bool> {
        self.rules.fill(&mut self.base, ctx)
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Result<RenderNode> {
        self.base.render_bound(ctx, Template::TextArea)
    }
}
