//! Whole number input.

use log::debug;

use crate::context::{FillContext, RenderContext};
use crate::error::Result;
use crate::widget::{RenderNode, Template, Widget, WidgetBase};

/// Message recorded when input is not an integer and no other message was
/// configured.
pub const DEFAULT_INTEGER_ERROR: &str = "not a valid integer";

/// Parse a signed 64-bit integer.
///
/// An optional `+` or `-` sign may be followed by a `0x`, `0o` or `0b`
/// prefix (either case) selecting base 16, 8 or 2; otherwise the digits are
/// decimal. Values outside the `i64` range are rejected.
pub fn parse_integer(input: &str) -> Option<i64> {
    let (negative, unsigned) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };
    let (radix, digits) = split_radix(unsigned);
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return None;
    }
    let magnitude = i128::from(u64::from_str_radix(digits, radix).ok()?);
    i64::try_from(if negative { -magnitude } else { magnitude }).ok()
}

fn split_radix(unsigned: &str) -> (u32, &str) {
    const PREFIXES: [(&str, u32); 6] = [
        ("0x", 16),
        ("0X", 16),
        ("0o", 8),
        ("0O", 8),
        ("0b", 2),
        ("0B", 2),
    ];
    PREFIXES
        .iter()
        .find_map(|(prefix, radix)| unsigned.strip_prefix(prefix).map(|rest| (*radix, rest)))
        .unwrap_or((10, unsigned))
}

/// Binds an integer.
///
/// Input that does not parse leaves the bound value as it was, records the
/// configured message and makes the fill invalid.
#[derive(Debug, Clone)]
pub struct IntegerWidget {
    base: WidgetBase,
    error: String,
}

impl Default for IntegerWidget {
    fn default() -> Self {
        Self {
            base: WidgetBase::default(),
            error: DEFAULT_INTEGER_ERROR.to_string(),
        }
    }
}

impl IntegerWidget {
    /// An integer widget with the default message.
    pub fn new() -> Self {
        Self::default()
    }

    /// Message recorded when input does not parse.
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = error.into();
        self
    }
}

impl Widget for IntegerWidget {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn fill(&mut self, ctx: &mut FillContext<'_>) -> Result<bool> {
        self.base.errors.clear();
        let path = self.base.path();
        ctx.get(&path)?;
        let submitted = ctx.submitted(&self.base.id);
        match submitted.and_then(parse_integer) {
            Some(number) => {
                ctx.set(&path, number)?;
                Ok(true)
            }
            None => {
                debug!("{}: rejecting integer input {submitted:?}", self.base.id);
                self.base.errors.push(self.error.clone());
                Ok(false)
            }
        }
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Result<RenderNode> {
        self.base.render_bound(ctx, Template::Text)
    }
}
