//! Repeating groups of rows.
//!
//! A [`ListWidget`] binds the sequence at its id. Each row `<id>.<n>` is
//! bound by a fresh inner widget from the list's factory. Two reserved
//! submission keys (see [`FormSettings`](crate::FormSettings)) ask for a row
//! to be appended or removed; either request makes the fill invalid so the
//! form is shown again.
//!
//! Fill works in three steps:
//!
//! 1. Count the rows: one past the highest submitted `<id>.<n>` key, and at
//!    least one past the appended row when an add was requested. The
//!    appended row sits at the sequence's length before the fill. Keys with
//!    an index at or past [`FormSettings::max_rows`](crate::FormSettings)
//!    are not rows, and an add on a full list is ignored.
//! 2. Walk the rows in order. Each slot is created if needed. A row named
//!    by the remove control, or missing from the submission (other than the
//!    appended one), is marked; every other row is filled by its own inner
//!    widget.
//! 3. Drop sequence elements past the row count, then drop the marked rows
//!    from the highest index down.

use std::collections::BTreeMap;
use std::fmt;

use log::{debug, warn};

use crate::context::{FillContext, RenderContext};
use crate::error::Result;
use crate::widget::{ListData, RenderNode, RenderValue, Template, Widget, WidgetBase};

/// Builds one inner widget per row.
pub type WidgetFactory = Box<dyn Fn() -> Box<dyn Widget>>;

/// Default text of the add-row control.
pub const DEFAULT_ADD_LABEL: &str = "Add";

/// Default text of the remove-row control.
pub const DEFAULT_REMOVE_LABEL: &str = "Remove";

/// Binds a sequence, one inner widget per element.
///
/// # Example
///
/// ```
/// use formgraph_widgets::{ListWidget, TextWidget};
///
/// let tags = ListWidget::new(|| TextWidget::new().with_min_length(1))
///     .with_labels("Add tag", "Remove tag");
/// assert_eq!(tags.add_label(), "Add tag");
/// ```
pub struct ListWidget {
    base: WidgetBase,
    factory: WidgetFactory,
    add_label: String,
    remove_label: String,
    child_errors: BTreeMap<usize, Vec<String>>,
}

impl ListWidget {
    /// A list whose rows are bound by widgets from `factory`.
    pub fn new<W, F>(factory: F) -> Self
    where
        W: Widget + 'static,
        F: Fn() -> W + 'static,
    {
        Self::from_factory(Box::new(move || Box::new(factory()) as Box<dyn Widget>))
    }

    /// A list over an already boxed factory.
    pub fn from_factory(factory: WidgetFactory) -> Self {
        Self {
            base: WidgetBase::default(),
            factory,
            add_label: DEFAULT_ADD_LABEL.to_string(),
            remove_label: DEFAULT_REMOVE_LABEL.to_string(),
            child_errors: BTreeMap::new(),
        }
    }

    /// Text of the add and remove controls.
    pub fn with_labels(mut self, add: impl Into<String>, remove: impl Into<String>) -> Self {
        self.add_label = add.into();
        self.remove_label = remove.into();
        self
    }

    /// Text of the add control.
    pub fn add_label(&self) -> &str {
        &self.add_label
    }

    /// Text of the remove control.
    pub fn remove_label(&self) -> &str {
        &self.remove_label
    }

    /// Errors of each row from the last fill, keyed by current row index.
    pub fn child_errors(&self) -> &BTreeMap<usize, Vec<String>> {
        &self.child_errors
    }

    fn build_child(&self, id: String) -> Box<dyn Widget> {
        let mut child = (self.factory)();
        child.base_mut().id = id;
        child
    }

    /// Move stored row errors to the indices rows have after `removed`
    /// (ascending) are gone.
    fn shift_child_errors(&mut self, removed: &[usize]) {
        self.child_errors = std::mem::take(&mut self.child_errors)
            .into_iter()
            .filter(|(index, _)| !removed.contains(index))
            .map(|(index, errors)| {
                let shift = removed.iter().filter(|gone| **gone < index).count();
                (index - shift, errors)
            })
            .collect();
    }
}

impl fmt::Debug for ListWidget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListWidget")
            .field("base", &self.base)
            .field("add_label", &self.add_label)
            .field("remove_label", &self.remove_label)
            .field("child_errors", &self.child_errors)
            .finish_non_exhaustive()
    }
}

impl Widget for ListWidget {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn fill(&mut self, ctx: &mut FillContext<'_>) -> Result<bool> {
        self.base.errors.clear();
        self.child_errors.clear();

        let path = self.base.path();
        let values = ctx.values();
        let settings = ctx.settings();
        let add_requested = values.get(&settings.add_control) == Some(self.base.id.as_str());
        let remove_target = values.get(&settings.remove_control);

        let max_rows = settings.max_rows;

        let current = ctx.len(&path)?;
        let added_row = if !add_requested {
            None
        } else if current < max_rows {
            Some(current)
        } else {
            warn!("{}: add ignored, list already holds {current} row(s)", self.base.id);
            None
        };

        let (in_bounds, out_of_bounds): (Vec<usize>, Vec<usize>) = values
            .keys()
            .filter_map(|key| path.child_index(key))
            .partition(|index| *index < max_rows);
        if !out_of_bounds.is_empty() {
            warn!(
                "{}: ignoring {} row key(s) at or past max_rows {max_rows}",
                self.base.id,
                out_of_bounds.len()
            );
        }
        let submitted_rows = in_bounds
            .into_iter()
            .filter_map(|index| index.checked_add(1))
            .max()
            .unwrap_or(0);
        let rows = submitted_rows.max(added_row.map_or(0, |row| row + 1));

        if let Some(target) = remove_target.and_then(|target| path.child_index(target))
            && target >= rows
        {
            warn!("{}: remove requested for missing row {target}", self.base.id);
        }

        let mut valid = !add_requested;
        let mut pending_add = added_row;
        let mut marked = Vec::new();

        for index in 0..rows {
            let child_path = path.child(index);
            let child_id = child_path.to_string();
            ctx.resolver().ensure(&child_path)?;

            if remove_target == Some(child_id.as_str()) {
                marked.push(index);
                valid = false;
                continue;
            }
            let fresh = pending_add == Some(index) && !values.contains(&child_id);
            if fresh {
                pending_add = None;
            } else if !values.contains(&child_id) {
                marked.push(index);
                continue;
            }

            let mut child = self.build_child(child_id);
            if !child.fill(ctx)? {
                valid = false;
            }
            let errors = &child.base().errors;
            if !fresh && !errors.is_empty() {
                self.child_errors.insert(index, errors.clone());
            }
        }

        let cropped = ctx.resolver().truncate(&path, rows)?;
        for index in marked.iter().rev() {
            ctx.resolver().remove(&path.child(index))?;
        }
        self.shift_child_errors(&marked);

        debug!(
            "{}: filled {rows} row(s), cropped {cropped}, removed {marked:?}, add requested: {add_requested}",
            self.base.id
        );
        Ok(valid)
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Result<RenderNode> {
        let path = self.base.path();
        let fields = (0..ctx.len(&path)?)
            .map(|index| {
                let mut child = self.build_child(path.child(index).to_string());
                if let Some(errors) = self.child_errors.get(&index) {
                    child.base_mut().errors = errors.clone();
                }
                child.render(ctx)
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(self.base.node(
            Template::List,
            RenderValue::List(ListData {
                fields,
                add_label: self.add_label.clone(),
                remove_label: self.remove_label.clone(),
            }),
        ))
    }

    fn requires_multipart(&self) -> bool {
        (self.factory)().requires_multipart()
    }
}
