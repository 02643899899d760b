//! Masked text input with an optional repeat field.

use crate::context::{FillContext, RenderContext};
use crate::error::Result;
use crate::widget::{PasswordData, RenderNode, RenderValue, Template, VerifyField, Widget, WidgetBase};
use crate::widgets::text::TextWidget;

/// Binds a string like [`TextWidget`] and renders it as a password input.
///
/// The verify field only describes a second input for the renderer. The two
/// entries are not compared here; callers that want that check add an error
/// to the form themselves.
#[derive(Debug, Clone, Default)]
pub struct PasswordWidget {
    text: TextWidget,
    verify: Option<VerifyField>,
}

impl PasswordWidget {
    /// A password widget with the same rules as `text`.
    pub fn new(text: TextWidget) -> Self {
        Self { text, verify: None }
    }

    /// Ask the renderer for a repeat field.
    pub fn with_verify(
        mut self,
        label: impl Into<String>,
        description: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        self.verify = Some(VerifyField {
            label: label.into(),
            description: description.into(),
            error: error.into(),
        });
        self
    }

    /// The repeat field, if configured.
    pub fn verify(&self) -> Option<&VerifyField> {
        self.verify.as_ref()
    }
}

impl Widget for PasswordWidget {
    fn base(&self) -> &WidgetBase {
        self.text.base()
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        self.text.base_mut()
    }

    fn fill(&mut self, ctx: &mut FillContext<'_>) -> Result<bool> {
        self.text.fill(ctx)
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Result<RenderNode> {
        let base = self.base();
        let value = ctx.get(&base.path())?.clone();
        Ok(base.node(
            Template::Password,
            RenderValue::Password(PasswordData {
                value,
                verify: self.verify.clone(),
            }),
        ))
    }
}
