//! Settings loaded from disk and applied to whole forms.

use std::io::Write;

use chrono::{TimeZone, Utc};
use formgraph_core::{Record, Sequence, Value};
use formgraph_widgets::{Form, FormSettings, FormValues, ListWidget, RenderValue, TextWidget, TimeWidget};

use crate::common::bound;

fn settings_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_loaded_controls_drive_lists() {
    let file = settings_file(
        r#"
        add_control = "more"
        remove_control = "less"
        "#,
    );
    let settings = FormSettings::load(file.path()).unwrap();

    let mut data = Value::from(Record::new().with_field("L", Sequence::of("")));
    let mut form = Form::with_settings(settings);
    form.add_widget(ListWidget::new(TextWidget::new), "L", "List", "")
        .unwrap();

    assert!(!form.fill(&mut data, &FormValues::from([("more", "L")])).unwrap());
    assert_eq!(bound(&data, "L").as_sequence().unwrap().len(), 1);

    // The default control names carry no meaning under these settings.
    let values = FormValues::from([("L.0", "x"), ("formgraph-action--remove-from-list", "L.0")]);
    assert!(form.fill(&mut data, &values).unwrap());
    assert_eq!(bound(&data, "L.0"), Value::from("x"));

    let values = FormValues::from([("L.0", "x"), ("less", "L.0")]);
    assert!(!form.fill(&mut data, &values).unwrap());
    assert!(bound(&data, "L").as_sequence().unwrap().is_empty());
}

#[test]
fn test_loaded_time_zone_applies_to_time_widgets() {
    let file = settings_file("time_zone = \"America/Sao_Paulo\"\n");
    let settings = FormSettings::load(file.path()).unwrap();

    let mut data = Value::from(Record::new().with_field("When", Value::zero_time()));
    let mut form = Form::with_settings(settings);
    form.add_widget(TimeWidget::new(), "When", "When", "").unwrap();

    form.fill(&mut data, &FormValues::from([("When", "2030-06-01T12:00")]))
        .unwrap();
    let expected = Utc.with_ymd_and_hms(2030, 6, 1, 15, 0, 0).unwrap();
    assert_eq!(bound(&data, "When"), Value::Time(expected));

    let rendered = form.render_data(&data).unwrap();
    assert_eq!(
        rendered.widgets[0].data,
        RenderValue::Formatted("2030-06-01T12:00".to_string())
    );
}

#[test]
fn test_env_style_override() {
    let settings = FormSettings::default()
        .apply_overrides(|key| (key == "FORMGRAPH_TIME_ZONE").then(|| "Asia/Kolkata".to_string()))
        .unwrap();
    assert_eq!(settings.time_zone().unwrap(), chrono_tz::Asia::Kolkata);
}

#[test]
fn test_invalid_file_is_reported() {
    let file = settings_file("time_zone = 42\n");
    assert!(FormSettings::load(file.path()).is_err());
}
