//! List add/remove round trips through a form, one submission at a time.

use formgraph_core::{Record, Sequence, Value};
use formgraph_widgets::{Form, FormValues, IntegerWidget, ListWidget, TextWidget};

use crate::common::bound;

const ADD: &str = "formgraph-action--add-to-list";
const REMOVE: &str = "formgraph-action--remove-from-list";

fn tagged() -> (Form, Value) {
    let data = Value::from(
        Record::new()
            .with_field("Name", "")
            .with_field("L", Sequence::of("")),
    );
    let mut form = Form::new();
    form.add_widget(TextWidget::new(), "Name", "Name", "").unwrap();
    form.add_widget(ListWidget::new(TextWidget::new).with_labels("Add", "Remove"), "L", "Tags", "")
        .unwrap();
    (form, data)
}

fn items(data: &Value) -> Vec<String> {
    bound(data, "L")
        .as_sequence()
        .unwrap()
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect()
}

#[test]
fn test_add_then_remove() {
    let (mut form, mut data) = tagged();

    let add = FormValues::from([("Name", "n"), (ADD, "L"), ("L.0", "x")]);
    assert!(!form.fill(&mut data, &add).unwrap());
    assert_eq!(items(&data), ["x"]);

    let remove = FormValues::from([("Name", "n"), (REMOVE, "L.0"), ("L.0", "x")]);
    assert!(!form.fill(&mut data, &remove).unwrap());
    assert!(items(&data).is_empty());
}

#[test]
fn test_browser_session() {
    let (mut form, mut data) = tagged();

    // First round: the user clicks "Add" on an empty list.
    let round = FormValues::from_query(&format!("Name=Ada&{ADD}=L")).unwrap();
    assert!(!form.fill(&mut data, &round).unwrap());
    assert_eq!(items(&data), [""]);

    let rendered = form.render_data(&data).unwrap();
    let rows = &rendered.widgets[1].data.as_list().unwrap().fields;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, "L.0");

    // Second round: the row is typed in and another one added.
    let round = FormValues::from_query(&format!("Name=Ada&L.0=math&{ADD}=L")).unwrap();
    assert!(!form.fill(&mut data, &round).unwrap());
    assert_eq!(items(&data), ["math", ""]);

    // Third round: both rows typed in, plain submit.
    let round = FormValues::from_query("Name=Ada&L.0=math&L.1=poetry").unwrap();
    assert!(form.fill(&mut data, &round).unwrap());
    assert_eq!(items(&data), ["math", "poetry"]);

    // Fourth round: the first row is removed.
    let round =
        FormValues::from_query(&format!("Name=Ada&L.0=math&L.1=poetry&{REMOVE}=L.0")).unwrap();
    assert!(!form.fill(&mut data, &round).unwrap());
    assert_eq!(items(&data), ["poetry"]);
}

#[test]
fn test_list_growth_is_contiguous() {
    let (mut form, mut data) = tagged();
    let values = FormValues::from([("L.0", "a"), ("L.3", "d")]);
    form.fill(&mut data, &values).unwrap();
    // Rows 1 and 2 were not submitted and are dropped; nothing is left sparse.
    assert_eq!(items(&data), ["a", "d"]);
}

#[test]
fn test_row_errors_render_under_rows() {
    let mut data = Value::from(Record::new().with_field("N", Sequence::of(0)));
    let mut form = Form::new();
    form.add_widget(
        ListWidget::new(|| IntegerWidget::new().with_error("Numbers only")),
        "N",
        "Numbers",
        "",
    )
    .unwrap();

    let values = FormValues::from([("N.0", "1"), ("N.1", "two"), ("N.2", "3")]);
    assert!(!form.fill(&mut data, &values).unwrap());

    let rendered = form.render_data(&data).unwrap();
    let rows = &rendered.widgets[0].data.as_list().unwrap().fields;
    let errors: Vec<usize> = rows.iter().map(|row| row.errors.len()).collect();
    assert_eq!(errors, [0, 1, 0]);
    assert_eq!(rows[1].errors, ["Numbers only"]);
    assert_eq!(rows[2].data.as_value(), Some(&Value::from(3)));
}

#[test]
fn test_add_from_stale_client_appends_after_data() {
    let (mut form, mut data) = tagged();
    form.fill(&mut data, &FormValues::from([("L.0", "a"), ("L.1", "b")]))
        .unwrap();
    assert_eq!(items(&data), ["a", "b"]);

    // The client only knows row 0; the new row lands at the data's length
    // and the unsubmitted row 1 is dropped.
    let values = FormValues::from([("L.0", "a"), (ADD, "L")]);
    assert!(!form.fill(&mut data, &values).unwrap());
    assert_eq!(items(&data), ["a", ""]);

    let rendered = form.render_data(&data).unwrap();
    let rows = &rendered.widgets[1].data.as_list().unwrap().fields;
    let ids: Vec<&str> = rows.iter().map(|row| row.id.as_str()).collect();
    assert_eq!(ids, ["L.0", "L.1"]);
}

#[test]
fn test_oversized_row_index_is_ignored() {
    let (mut form, mut data) = tagged();
    let values = FormValues::from([
        ("L.0".to_string(), "a".to_string()),
        (format!("L.{}", usize::MAX), "x".to_string()),
        ("L.3000000".to_string(), "y".to_string()),
    ]);
    assert!(form.fill(&mut data, &values).unwrap());
    assert_eq!(items(&data), ["a"]);
}
