//! Explicit state handed to widgets during a fill or render pass.
//!
//! Widgets never hold a reference back to their form. A [`FillContext`]
//! carries the exclusive borrow of the data graph together with the
//! submission; a [`RenderContext`] carries a shared borrow of the graph.
//! Both carry the form's [`FormSettings`].

use formgraph_core::{Path, PathResolver, Value, lookup, sequence_len};

use crate::error::Result;
use crate::settings::FormSettings;
use crate::values::FormValues;

/// Everything a widget needs to bind a submission.
#[derive(Debug)]
pub struct FillContext<'a> {
    resolver: PathResolver<'a>,
    values: &'a FormValues,
    settings: &'a FormSettings,
}

impl<'a> FillContext<'a> {
    /// Start a fill pass over `data`.
    pub fn new(data: &'a mut Value, values: &'a FormValues, settings: &'a FormSettings) -> Self {
        Self {
            resolver: PathResolver::new(data),
            values,
            settings,
        }
    }

    /// The submission being bound.
    pub fn values(&self) -> &'a FormValues {
        self.values
    }

    /// Settings of the form being filled.
    pub fn settings(&self) -> &'a FormSettings {
        self.settings
    }

    /// First value submitted under `id`.
    pub fn submitted(&self, id: &str) -> Option<&'a str> {
        self.values.get(id)
    }

    /// Direct access to the resolver.
    pub fn resolver(&mut self) -> &mut PathResolver<'a> {
        &mut self.resolver
    }

    /// Current value at `path`.
    pub fn get(&self, path: &Path) -> Result<&Value> {
        Ok(self.resolver.get(path)?)
    }

    /// Write `value` at `path`.
    pub fn set(&mut self, path: &Path, value: impl Into<Value>) -> Result<()> {
        Ok(self.resolver.set(path, value.into())?)
    }

    /// Number of elements of the sequence at `path`.
    pub fn len(&self, path: &Path) -> Result<usize> {
        Ok(self.resolver.len(path)?)
    }
}

/// Everything a widget needs to describe itself for display.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    data: &'a Value,
    settings: &'a FormSettings,
}

impl<'a> RenderContext<'a> {
    /// Start a render pass over `data`.
    pub fn new(data: &'a Value, settings: &'a FormSettings) -> Self {
        Self { data, settings }
    }

    /// The whole data graph.
    pub fn data(&self) -> &'a Value {
        self.data
    }

    /// Settings of the form being rendered.
    pub fn settings(&self) -> &'a FormSettings {
        self.settings
    }

    /// Current value at `path`.
    pub fn get(&self, path: &Path) -> Result<&'a Value> {
        Ok(lookup(self.data, path)?)
    }

    /// Number of elements of the sequence at `path`.
    pub fn len(&self, path: &Path) -> Result<usize> {
        Ok(sequence_len(self.data, path)?)
    }
}
