//! Common test utilities for formgraph-widgets integration tests.

use formgraph_core::{Mapping, Path, Record, Value, lookup};
use formgraph_widgets::{Form, FormValues, RenderValue, Widget};

/// A record holding a single field `Id` initialised to `slot`.
pub fn single(slot: impl Into<Value>) -> Value {
    Value::from(Record::new().with_field("Id", slot))
}

/// The profile used by whole-form tests.
pub fn profile() -> Value {
    Value::from(
        Record::new()
            .with_field("Title", "")
            .with_field("Age", 0)
            .with_field("Extra", Mapping::new().with_entry("ExtraField", "")),
    )
}

/// Read the value at `id`.
pub fn bound(data: &Value, id: &str) -> Value {
    lookup(data, &Path::parse(id)).unwrap().clone()
}

/// One widget exercised through a form: submit a value, check the bound
/// value and the render payload, then submit nothing and check again.
pub struct WidgetCase<W: Widget + 'static> {
    /// Widget under test, registered as `Id`.
    pub widget: W,
    /// Initial value of the `Id` slot.
    pub slot: Value,
    /// Value submitted under `Id`.
    pub submitted: &'static str,
    /// Expected bound value after the submission.
    pub filled: Value,
    /// Expected bound value after an empty submission.
    pub empty: Value,
    /// Expected render payload after the submission.
    pub rendered: RenderValue,
    /// Expected template token.
    pub template: &'static str,
}

impl<W: Widget + 'static> WidgetCase<W> {
    /// Run the case, panicking with context on the first mismatch.
    pub fn check(self) {
        let mut data = single(self.slot);
        let mut form = Form::new();
        form.add_widget(self.widget, "Id", "Label", "Description")
            .unwrap();

        let values = FormValues::from([("Id", self.submitted)]);
        form.fill(&mut data, &values).unwrap();
        assert_eq!(bound(&data, "Id"), self.filled, "bound after submitting {:?}", self.submitted);

        let rendered = form.render_data(&data).unwrap();
        assert!(rendered.errors.is_empty());
        let node = &rendered.widgets[0];
        assert_eq!(node.id, "Id");
        assert_eq!(node.label, "Label");
        assert_eq!(node.description, "Description");
        assert_eq!(node.template.as_str(), self.template);
        assert_eq!(node.data, self.rendered);

        form.fill(&mut data, &FormValues::new()).unwrap();
        assert_eq!(bound(&data, "Id"), self.empty, "bound after an empty submission");
    }
}
