//! Choice from a fixed option list.

use log::debug;

use crate::context::{FillContext, RenderContext};
use crate::error::{Error, Result};
use crate::widget::{RenderNode, RenderValue, SelectOption, Template, Widget, WidgetBase};

/// Binds one value out of a fixed list of options.
///
/// A submitted value matching an option selects it; anything else selects
/// the first option. Never invalid.
///
/// # Example
///
/// ```
/// use formgraph_widgets::SelectWidget;
///
/// let color = SelectWidget::from_pairs([("r", "Red"), ("g", "Green")]).unwrap();
/// assert_eq!(color.options().len(), 2);
/// assert!(SelectWidget::new(Vec::new()).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct SelectWidget {
    base: WidgetBase,
    options: Vec<SelectOption>,
}

impl SelectWidget {
    /// A select widget over `options`, which must not be empty.
    pub fn new(options: impl IntoIterator<Item = SelectOption>) -> Result<Self> {
        let options: Vec<SelectOption> = options.into_iter().collect();
        if options.is_empty() {
            return Err(Error::config("select widget needs at least one option"));
        }
        Ok(Self {
            base: WidgetBase::default(),
            options,
        })
    }

    /// Build options from `(value, description)` pairs.
    pub fn from_pairs<V, D>(pairs: impl IntoIterator<Item = (V, D)>) -> Result<Self>
    where
        V: Into<String>,
        D: Into<String>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(value, description)| SelectOption::new(value, description)),
        )
    }

    /// The options with their selection state from the last fill.
    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    fn select(&mut self, chosen: usize) {
        for (index, option) in self.options.iter_mut().enumerate() {
            option.selected = index == chosen;
        }
    }
}

impl Widget for SelectWidget {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn fill(&mut self, ctx: &mut FillContext<'_>) -> Result<bool> {
        self.base.errors.clear();
        let submitted = ctx.submitted(&self.base.id);
        let matched = submitted.and_then(|value| self.options.iter().position(|o| o.value == value));
        if matched.is_none() {
            debug!("{}: no option matches {submitted:?}, using the first", self.base.id);
        }
        let chosen = matched.unwrap_or(0);
        self.select(chosen);
        let value = self
            .options
            .get(chosen)
            .map(|option| option.value.clone())
            .ok_or_else(|| Error::config("select widget needs at least one option"))?;
        ctx.set(&self.base.path(), value)?;
        Ok(true)
    }

    /// Options are reported with the bound value selected when it matches
    /// one of them; otherwise the flags from the last fill are kept.
    fn render(&self, ctx: &RenderContext<'_>) -> Result<RenderNode> {
        let bound = ctx.get(&self.base.path())?.as_str();
        let mut options = self.options.clone();
        if let Some(bound) = bound.filter(|bound| options.iter().any(|o| o.value == *bound)) {
            for option in &mut options {
                option.selected = option.value == bound;
            }
        }
        Ok(self.base.node(Template::Select, RenderValue::Options(options)))
    }
}
