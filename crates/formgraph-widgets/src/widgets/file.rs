//! File upload input.

use crate::context::{FillContext, RenderContext};
use crate::error::Result;
use crate::widget::{RenderNode, Template, Widget, WidgetBase};

/// Renders a file input and makes the form multipart.
///
/// Uploaded bytes are not part of the flat submission; the caller handles
/// them. Fill only checks that the id addresses the data; it never writes
/// and is never invalid.
#[derive(Debug, Clone, Default)]
pub struct FileWidget {
    base: WidgetBase,
}

impl FileWidget {
    /// A file widget.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Widget for FileWidget {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn fill(&mut self, ctx: &mut FillContext<'_>) -> Result<bool> {
        self.base.errors.clear();
        ctx.get(&self.base.path())?;
        Ok(true)
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Result<RenderNode> {
        self.base.render_bound(ctx, Template::File)
    }

    fn requires_multipart(&self) -> bool {
        true
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::FormValues;
    use crate::test_support::{fill_one, render_one, user};
    use formgraph_core::Value;

    #[test]
    fn test_fill_leaves_value_alone() {
        let mut data = user();
        let before = data.clone();
        let mut widget = FileWidget::new();
        widget.base_mut().id = "Avatar".to_string();
        assert!(fill_one(&mut widget, &mut data, &FormValues::from([("Avatar", "me.png")])).unwrap());
        assert_eq!(data, before);
        assert!(widget.requires_multipart());

        let node = render_one(&widget, &data).unwrap();
        assert_eq!(node.template, Template::File);
        assert_eq!(node.data.as_value(), Some(&Value::from("")));
    }

    #[test]
    fn test_fill_unknown_id_is_fatal() {
        let mut data = user();
        let mut widget = FileWidget::new();
        widget.base_mut().id = "Avatr".to_string();
        let err = fill_one(&mut widget, &mut data, &FormValues::new()).unwrap_err();
        assert!(err.is_address());
    }
}
