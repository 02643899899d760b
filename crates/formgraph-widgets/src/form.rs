//! Forms: ordered widgets over one data graph.

use std::collections::HashMap;

use formgraph_core::Value;
use log::debug;
use serde::Serialize;

use crate::context::{FillContext, RenderContext};
use crate::error::{Error, Result};
use crate::settings::FormSettings;
use crate::values::FormValues;
use crate::widget::{RenderNode, Widget};

/// Everything a template needs to display a form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderData {
    /// One node per registered widget, in registration order.
    pub widgets: Vec<RenderNode>,
    /// Form-level errors added under the empty id.
    pub errors: Vec<String>,
    /// Encoding the form must be submitted with, when not the default.
    pub enctype: Option<String>,
    /// Submission target, passed through unchanged.
    pub action: String,
}

/// An ordered set of widgets bound onto a caller-owned data graph.
///
/// The graph itself is borrowed only for the duration of
/// [`Form::fill`] and [`Form::render_data`].
///
/// # Example
///
/// ```
/// use formgraph_core::{Record, Value};
/// use formgraph_widgets::{Form, FormValues, TextWidget};
///
/// let mut data = Value::from(Record::new().with_field("Name", ""));
/// let mut form = Form::new().with_action("/signup");
/// form.add_widget(TextWidget::new().with_min_length(1), "Name", "Name", "").unwrap();
///
/// let valid = form.fill(&mut data, &FormValues::from([("Name", "Ada")])).unwrap();
/// assert!(valid);
///
/// let rendered = form.render_data(&data).unwrap();
/// assert_eq!(rendered.action, "/signup");
/// assert_eq!(rendered.widgets.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Form {
    widgets: Vec<Box<dyn Widget>>,
    errors: HashMap<String, Vec<String>>,
    action: String,
    settings: FormSettings,
}

impl Form {
    /// An empty form with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty form with `settings`.
    pub fn with_settings(settings: FormSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// Builder-style [`Form::set_action`].
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = action.into();
        self
    }

    /// Set the submission target passed through to the render tree.
    pub fn set_action(&mut self, action: impl Into<String>) {
        self.action = action.into();
    }

    /// The submission target.
    pub fn action(&self) -> &str {
        &self.action
    }

    /// Settings in effect.
    pub fn settings(&self) -> &FormSettings {
        &self.settings
    }

    /// Register `widget` under `id`, which is also the dotted path it binds.
    ///
    /// Returns the registered widget for further tweaks. Registering an id
    /// twice is a configuration error.
    pub fn add_widget<W>(
        &mut self,
        widget: W,
        id: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<&mut dyn Widget>
    where
        W: Widget + 'static,
    {
        self.add_boxed(Box::new(widget), id, label, description)
    }

    /// Register an already boxed widget. See [`Form::add_widget`].
    pub fn add_boxed(
        &mut self,
        mut widget: Box<dyn Widget>,
        id: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<&mut dyn Widget> {
        let id = id.into();
        if self.position(&id).is_some() {
            return Err(Error::config(format!("duplicate widget id {id:?}")));
        }
        let base = widget.base_mut();
        base.id = id;
        base.label = label.into();
        base.description = description.into();

        let position = self.widgets.len();
        self.widgets.push(widget);
        self.widget_at(position)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.widgets.iter().position(|widget| widget.id() == id)
    }

    fn widget_at(&mut self, position: usize) -> Result<&mut dyn Widget> {
        match self.widgets.get_mut(position) {
            Some(widget) => Ok(widget.as_mut()),
            None => Err(Error::config(format!("no widget at position {position}"))),
        }
    }

    /// Look up a registered widget by its current id.
    pub fn widget(&self, id: &str) -> Option<&dyn Widget> {
        let position = self.position(id)?;
        self.widgets.get(position).map(Box::as_ref)
    }

    /// Mutable lookup of a registered widget.
    ///
    /// The id is also the widget's data path. Changing it through the
    /// returned handle rebinds the widget and re-keys later lookups.
    pub fn widget_mut(&mut self, id: &str) -> Option<&mut dyn Widget> {
        let position = self.position(id)?;
        match self.widgets.get_mut(position) {
            Some(widget) => Some(widget.as_mut()),
            None => None,
        }
    }

    /// Number of registered widgets.
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    /// Returns `true` if no widget is registered.
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Bind `values` onto `data`, widget by widget in registration order.
    ///
    /// Returns `Ok(true)` if every widget accepted its input. Every widget
    /// is filled even after one has failed validation. An `Err` means a
    /// widget does not fit the data graph and aborts the pass.
    pub fn fill(&mut self, data: &mut Value, values: &FormValues) -> Result<bool> {
        let mut ctx = FillContext::new(data, values, &self.settings);
        let mut valid = true;
        for widget in &mut self.widgets {
            if !widget.fill(&mut ctx)? {
                debug!("{}: fill rejected", widget.id());
                valid = false;
            }
        }
        debug!("Filled {} widget(s), valid: {valid}", self.widgets.len());
        Ok(valid)
    }

    /// Add an error shown with widget `id`, or with the form when `id` is
    /// empty.
    ///
    /// Errors added here only affect rendering; a fill result already
    /// returned stays as it was.
    pub fn add_error(&mut self, id: impl Into<String>, message: impl Into<String>) {
        self.errors.entry(id.into()).or_default().push(message.into());
    }

    /// Forget all errors added with [`Form::add_error`].
    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    /// Describe every widget and its current value.
    pub fn render_data(&self, data: &Value) -> Result<RenderData> {
        let ctx = RenderContext::new(data, &self.settings);
        let widgets = self
            .widgets
            .iter()
            .map(|widget| -> Result<RenderNode> {
                let mut node = widget.render(&ctx)?;
                if let Some(extra) = self.errors.get(widget.id()) {
                    node.errors.extend(extra.iter().cloned());
                }
                Ok(node)
            })
            .collect::<Result<Vec<_>>>()?;
        let enctype = self
            .widgets
            .iter()
            .any(|widget| widget.requires_multipart())
            .then(|| self.settings.multipart_enctype.clone());

        Ok(RenderData {
            widgets,
            errors: self.errors.get("").cloned().unwrap_or_default(),
            enctype,
            action: self.action.clone(),
        })
    }
}
