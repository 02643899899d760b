//! Whole-form fill and render passes.

use formgraph_core::Value;
use formgraph_widgets::{
    BoolWidget, FileWidget, Form, FormValues, IntegerWidget, RenderValue, TextWidget,
};
use serde_json::json;

use crate::common::{bound, profile};

fn profile_form() -> Form {
    let mut form = Form::new();
    form.add_widget(TextWidget::new(), "Title", "Title", "Your title")
        .unwrap();
    form.add_widget(IntegerWidget::new(), "Age", "Age", "Years since your birth")
        .unwrap();
    form.add_widget(BoolWidget::new(), "Extra.ExtraField", "Alive", "Still alive?")
        .unwrap();
    form
}

#[test]
fn test_render_after_fill() {
    let mut data = profile();
    let mut form = profile_form();
    let values = FormValues::from([("Title", ""), ("Age", "14"), ("Extra.ExtraField", "true")]);
    assert!(form.fill(&mut data, &values).unwrap());
    form.set_action("targetURL");

    let rendered = form.render_data(&data).unwrap();
    assert_eq!(rendered.action, "targetURL");
    assert!(rendered.errors.is_empty());

    let summary: Vec<(&str, &str, &str, Option<&Value>)> = rendered
        .widgets
        .iter()
        .map(|node| {
            (
                node.id.as_str(),
                node.label.as_str(),
                node.description.as_str(),
                node.data.as_value(),
            )
        })
        .collect();
    assert_eq!(
        summary,
        [
            ("Title", "Title", "Your title", Some(&Value::from(""))),
            ("Age", "Age", "Years since your birth", Some(&Value::from(14))),
            ("Extra.ExtraField", "Alive", "Still alive?", Some(&Value::from(true))),
        ]
    );
}

#[test]
fn test_mapping_entries_are_created_on_fill() {
    let mut data = profile();
    let mut form = Form::new();
    form.add_widget(TextWidget::new(), "Extra.Nickname", "Nickname", "")
        .unwrap();
    form.fill(&mut data, &FormValues::from([("Extra.Nickname", "Ace")]))
        .unwrap();
    assert_eq!(bound(&data, "Extra.Nickname"), Value::from("Ace"));
}

#[test]
fn test_fill_result_is_conjunction() {
    let mut data = profile();
    let mut form = Form::new();
    form.add_widget(TextWidget::new().with_min_length(5).with_error("Too short"), "Title", "Title", "")
        .unwrap();
    form.add_widget(IntegerWidget::new(), "Age", "Age", "").unwrap();

    let ok = FormValues::from([("Title", "Professor"), ("Age", "70")]);
    assert!(form.fill(&mut data, &ok).unwrap());

    let short = FormValues::from([("Title", "Dr"), ("Age", "70")]);
    assert!(!form.fill(&mut data, &short).unwrap());
    assert_eq!(bound(&data, "Title"), Value::from("Dr"));

    let rendered = form.render_data(&data).unwrap();
    assert_eq!(rendered.widgets[0].errors, ["Too short"]);
    assert!(rendered.widgets[1].errors.is_empty());
}

#[test]
fn test_add_error_does_not_change_returned_result() {
    let mut data = profile();
    let mut form = profile_form();
    let values = FormValues::from([("Title", "Dr"), ("Age", "40")]);
    let valid = form.fill(&mut data, &values).unwrap();
    form.add_error("Title", "Foo");
    form.add_error("", "Bar");
    assert!(valid);

    let rendered = form.render_data(&data).unwrap();
    assert_eq!(rendered.widgets[0].errors, ["Foo"]);
    assert!(rendered.widgets[1].errors.is_empty());
    assert_eq!(rendered.errors, ["Bar"]);
}

#[test]
fn test_enctype_only_with_file_widget() {
    let data = Value::from(
        formgraph_core::Record::new()
            .with_field("Name", "")
            .with_field("File", ""),
    );

    let mut plain = Form::new();
    plain.add_widget(TextWidget::new(), "Name", "Name", "").unwrap();
    plain.add_widget(TextWidget::new(), "File", "File dummy", "").unwrap();
    assert_eq!(plain.render_data(&data).unwrap().enctype, None);

    let mut upload = Form::new();
    upload.add_widget(TextWidget::new(), "Name", "Name", "").unwrap();
    upload.add_widget(FileWidget::new(), "File", "File!", "").unwrap();
    assert_eq!(
        upload.render_data(&data).unwrap().enctype.as_deref(),
        Some("multipart/form-data")
    );
}

#[test]
fn test_query_submission_end_to_end() {
    let mut data = profile();
    let mut form = profile_form();
    let values = FormValues::from_query("Title=Sir+Dr.&Age=0x2A&Extra.ExtraField=1").unwrap();
    assert!(form.fill(&mut data, &values).unwrap());
    assert_eq!(bound(&data, "Title"), Value::from("Sir Dr."));
    assert_eq!(bound(&data, "Age"), Value::from(42));
    assert_eq!(bound(&data, "Extra.ExtraField"), Value::from(true));
}

#[test]
fn test_render_data_serializes_for_templates() {
    let mut data = profile();
    let mut form = profile_form().with_action("/profile");
    let values = FormValues::from([("Title", "Dr"), ("Age", "oops"), ("Extra.ExtraField", "0")]);
    assert!(!form.fill(&mut data, &values).unwrap());

    let rendered = form.render_data(&data).unwrap();
    let json = serde_json::to_value(&rendered).unwrap();
    assert_eq!(json["action"], json!("/profile"));
    assert_eq!(json["enctype"], json!(null));
    assert_eq!(
        json["widgets"][1],
        json!({
            "id": "Age",
            "label": "Age",
            "description": "Years since your birth",
            "errors": ["not a valid integer"],
            "classes": [],
            "template": "text",
            "data": 0
        })
    );
    assert_eq!(json["widgets"][2]["template"], json!("checkbox"));
    assert_eq!(json["widgets"][2]["data"], json!(false));
}

#[test]
fn test_unresolvable_widget_aborts_render() {
    let data = profile();
    let mut form = Form::new();
    form.add_widget(TextWidget::new(), "Extra.Missing", "Missing", "")
        .unwrap();
    let err = form.render_data(&data).unwrap_err();
    assert!(err.is_address());
}

#[test]
fn test_widget_mut_reaches_registered_widget() {
    let mut form = profile_form();
    form.widget_mut("Title")
        .unwrap()
        .base_mut()
        .classes
        .push("headline".to_string());
    let data = profile();
    let rendered = form.render_data(&data).unwrap();
    assert_eq!(rendered.widgets[0].classes, ["headline"]);
    assert!(matches!(rendered.widgets[0].data, RenderValue::Value(_)));
}
