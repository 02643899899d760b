//! One submission and one empty submission per widget variant.

use chrono::{TimeZone, Utc};
use formgraph_core::Value;
use formgraph_widgets::{
    BoolWidget, FileWidget, HiddenWidget, IntegerWidget, PasswordData, PasswordWidget, RenderValue,
    SelectOption, SelectWidget, TextAreaWidget, TextWidget, TimeWidget,
};

use crate::common::WidgetCase;

#[test]
fn test_text_widget() {
    WidgetCase {
        widget: TextWidget::new(),
        slot: Value::from(""),
        submitted: "foo",
        filled: Value::from("foo"),
        empty: Value::from(""),
        rendered: RenderValue::Value(Value::from("foo")),
        template: "text",
    }
    .check();
}

#[test]
fn test_text_area_widget() {
    WidgetCase {
        widget: TextAreaWidget::new(),
        slot: Value::from(""),
        submitted: "first\nsecond",
        filled: Value::from("first\nsecond"),
        empty: Value::from(""),
        rendered: RenderValue::Value(Value::from("first\nsecond")),
        template: "textarea",
    }
    .check();
}

#[test]
fn test_password_widget() {
    WidgetCase {
        widget: PasswordWidget::new(TextWidget::new()),
        slot: Value::from(""),
        submitted: "hunter2",
        filled: Value::from("hunter2"),
        empty: Value::from(""),
        rendered: RenderValue::Password(PasswordData {
            value: Value::from("hunter2"),
            verify: None,
        }),
        template: "password",
    }
    .check();
}

#[test]
fn test_bool_widget() {
    WidgetCase {
        widget: BoolWidget::new(),
        slot: Value::from(false),
        submitted: "True",
        filled: Value::from(true),
        empty: Value::from(false),
        rendered: RenderValue::Value(Value::from(true)),
        template: "checkbox",
    }
    .check();
}

#[test]
fn test_integer_widget_keeps_value_on_empty_submission() {
    WidgetCase {
        widget: IntegerWidget::new(),
        slot: Value::from(0),
        submitted: "14",
        filled: Value::from(14),
        empty: Value::from(14),
        rendered: RenderValue::Value(Value::from(14)),
        template: "text",
    }
    .check();
}

#[test]
fn test_select_widget() {
    let widget = SelectWidget::new([
        SelectOption {
            selected: true,
            ..SelectOption::new("foo", "Foo")
        },
        SelectOption::new("bar", "Bar"),
    ])
    .unwrap();
    WidgetCase {
        widget,
        slot: Value::from(""),
        submitted: "bar",
        filled: Value::from("bar"),
        empty: Value::from("foo"),
        rendered: RenderValue::Options(vec![
            SelectOption::new("foo", "Foo"),
            SelectOption {
                selected: true,
                ..SelectOption::new("bar", "Bar")
            },
        ]),
        template: "select",
    }
    .check();
}

#[test]
fn test_hidden_widget() {
    WidgetCase {
        widget: HiddenWidget::new(),
        slot: Value::from(""),
        submitted: "foo",
        filled: Value::from("foo"),
        empty: Value::from(""),
        rendered: RenderValue::Value(Value::from("foo")),
        template: "hidden",
    }
    .check();
}

#[test]
fn test_file_widget() {
    WidgetCase {
        widget: FileWidget::new(),
        slot: Value::from(""),
        submitted: "upload.bin",
        filled: Value::from(""),
        empty: Value::from(""),
        rendered: RenderValue::Value(Value::from("")),
        template: "file",
    }
    .check();
}

#[test]
fn test_time_widget() {
    let instant = Utc.with_ymd_and_hms(1985, 4, 10, 8, 10, 0).unwrap();
    WidgetCase {
        widget: TimeWidget::new(),
        slot: Value::Time(Value::zero_time()),
        submitted: "1985-04-10T08:10",
        filled: Value::Time(instant),
        empty: Value::Time(Value::zero_time()),
        rendered: RenderValue::Formatted("1985-04-10T08:10".to_string()),
        template: "time",
    }
    .check();
}

#[test]
fn test_time_widget_into_optional_slot() {
    let instant = Utc.with_ymd_and_hms(2001, 9, 9, 1, 46, 40).unwrap();
    WidgetCase {
        widget: TimeWidget::new(),
        slot: Value::none(),
        submitted: "2001-09-09T01:46:40",
        filled: Value::Time(instant),
        empty: Value::Time(Value::zero_time()),
        rendered: RenderValue::Formatted("2001-09-09T01:46".to_string()),
        template: "time",
    }
    .check();
}
