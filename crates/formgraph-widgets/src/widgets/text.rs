//! Single-line text input.

use regex::Regex;

use crate::context::{FillContext, RenderContext};
use crate::error::Result;
use crate::widget::{RenderNode, Template, Widget, WidgetBase};

/// Message recorded when a text value fails validation and no other
/// message was configured.
pub const DEFAULT_TEXT_ERROR: &str = "invalid value";

/// Length and pattern constraints shared by the text-like widgets.
#[derive(Debug, Clone)]
pub struct TextRules {
    /// Minimum number of characters.
    pub min_length: usize,
    /// Pattern the whole value must match.
    pub pattern: Option<Regex>,
    /// Message recorded on failure.
    pub error: String,
}

impl Default for TextRules {
    fn default() -> Self {
        Self {
            min_length: 0,
            pattern: None,
            error: DEFAULT_TEXT_ERROR.to_string(),
        }
    }
}

impl TextRules {
    /// Compile `pattern` so that it must match the entire value.
    pub fn compile(pattern: &str) -> Result<Regex> {
        Ok(Regex::new(&format!("^(?:{pattern})$"))?)
    }

    /// Check `value`, pushing the configured message onto `errors` when it
    /// fails.
    pub fn validate(&self, value: &str, errors: &mut Vec<String>) -> bool {
        let long_enough = value.chars().count() >= self.min_length;
        let matches = self
            .pattern
            .as_ref()
            .is_none_or(|pattern| pattern.is_match(value));
        if long_enough && matches {
            true
        } else {
            errors.push(self.error.clone());
            false
        }
    }

    /// Bind the first submitted value (empty when absent) and validate it.
    ///
    /// The value is written even when it fails validation, so the user sees
    /// what they typed.
    pub(crate) fn fill(&self, base: &mut WidgetBase, ctx: &mut FillContext<'_>) -> Result<bool> {
        base.errors.clear();
        let value = ctx.submitted(&base.id).unwrap_or_default();
        ctx.set(&base.path(), value)?;
        Ok(self.validate(value, &mut base.errors))
    }
}

/// Binds a string from a single-line input.
///
/// # Example
///
/// ```
/// use formgraph_widgets::TextWidget;
///
/// let title = TextWidget::new()
///     .with_min_length(2)
///     .with_pattern("[A-Z][a-z]+")
///     .unwrap()
///     .with_error("Please enter a capitalised title");
/// assert_eq!(title.rules().min_length, 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TextWidget {
    base: WidgetBase,
    rules: TextRules,
}

impl TextWidget {
    /// An unconstrained text widget.
    pub fn new() -> Self {
        Self::default()
    }

    /// Require at least `min_length` characters.
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.rules.min_length = min_length;
        self
    }

    /// Require the whole value to match `pattern`.
    pub fn with_pattern(mut self, pattern: &str) -> Result<Self> {
        self.rules.pattern = Some(TextRules::compile(pattern)?);
        Ok(self)
    }

    /// Message recorded when validation fails.
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.rules.error = error.into();
        self
    }

    /// The active constraints.
    pub fn rules(&self) -> &TextRules {
        &self.rules
    }
}

impl Widget for TextWidget {
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
        self.base.render_bound(ctx, Template::Text)
    }
}
