mod form_flow;
mod list_flow;
mod settings_flow;
mod widget_cases;
