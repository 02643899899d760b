//! The widget variants.
//!
//! | Widget             | Template   | Binds                               |
//! |--------------------|------------|-------------------------------------|
//! | [`TextWidget`]     | `text`     | string, length and pattern checked  |
//! | [`TextAreaWidget`] | `textarea` | string, length checked              |
//! | [`PasswordWidget`] | `password` | string, checked like text           |
//! | [`BoolWidget`]     | `checkbox` | boolean                             |
//! | [`IntegerWidget`]  | `text`     | integer                             |
//! | [`SelectWidget`]   | `select`   | one of a fixed set of strings       |
//! | [`HiddenWidget`]   | `hidden`   | string                              |
//! | [`FileWidget`]     | `file`     | nothing                             |
//! | [`TimeWidget`]     | `time`     | instant                             |
//! | [`ListWidget`]     | `list`     | sequence, one inner widget per row  |

pub mod boolean;
pub mod file;
pub mod hidden;
pub mod integer;
pub mod list;
pub mod password;
pub mod select;
pub mod text;
pub mod textarea;
pub mod time;

pub use boolean::{BoolWidget, parse_bool};
pub use file::FileWidget;
pub use hidden::HiddenWidget;
pub use integer::{IntegerWidget, parse_integer};
pub use list::{ListWidget, WidgetFactory};
pub use password::PasswordWidget;
pub use select::SelectWidget;
pub use text::{TextRules, TextWidget};
pub use textarea::TextAreaWidget;
pub use time::{TimeFormat, TimeWidget, parse_local};
