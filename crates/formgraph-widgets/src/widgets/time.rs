//! Date and time input.
//!
//! Submitted text carries no offset. It is read as wall-clock time in the
//! widget's zone, falling back to the form's configured zone and then UTC,
//! and stored as a UTC instant. Rendering converts back to that zone.

use chrono::{DateTime, NaiveDateTime, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;
use formgraph_core::{AddressError, Kind, Value};
use log::debug;

use crate::context::{FillContext, RenderContext};
use crate::error::Result;
use crate::settings::{FormSettings, parse_time_zone};
use crate::widget::{RenderNode, RenderValue, Template, Widget, WidgetBase};

/// Layouts understood by [`TimeWidget`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimeFormat {
    /// `1985-04-10T08:10:00.123456789`
    Nano,
    /// `1985-04-10T08:10:00`
    Full,
    /// `1985-04-10T08:10`
    #[default]
    Short,
}

impl TimeFormat {
    /// Order in which input layouts are tried.
    pub const PARSE_ORDER: [TimeFormat; 3] = [TimeFormat::Nano, TimeFormat::Full, TimeFormat::Short];

    /// The `chrono` format string.
    pub fn pattern(self) -> &'static str {
        match self {
            TimeFormat::Nano => "%Y-%m-%dT%H:%M:%S%.f",
            TimeFormat::Full => "%Y-%m-%dT%H:%M:%S",
            TimeFormat::Short => "%Y-%m-%dT%H:%M",
        }
    }
}

/// Read `input` as wall-clock time in `zone`.
///
/// Ambiguous local times resolve to the earlier instant. Local times that
/// fall into a daylight saving gap are moved forward by an hour.
pub fn parse_local(input: &str, zone: Tz) -> Option<DateTime<Utc>> {
    let naive = TimeFormat::PARSE_ORDER
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format.pattern()).ok())?;
    zone.from_local_datetime(&naive)
        .earliest()
        .or_else(|| {
            let shifted = naive.checked_add_signed(TimeDelta::hours(1))?;
            zone.from_local_datetime(&shifted).earliest()
        })
        .map(|local| local.with_timezone(&Utc))
}

/// Binds an instant. Unparsable input binds the zero time; never invalid.
///
/// # Example
///
/// ```
/// use formgraph_widgets::{TimeFormat, TimeWidget};
///
/// let meeting = TimeWidget::new()
///     .with_time_zone("Europe/Berlin")
///     .unwrap()
///     .with_format(TimeFormat::Full);
/// assert_eq!(meeting.format(), TimeFormat::Full);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TimeWidget {
    base: WidgetBase,
    time_zone: Option<Tz>,
    format: TimeFormat,
}

impl TimeWidget {
    /// A time widget rendering the short layout in the form's zone.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an IANA zone instead of the form's.
    pub fn with_time_zone(mut self, name: &str) -> Result<Self> {
        self.time_zone = Some(parse_time_zone(name)?);
        Ok(self)
    }

    /// Layout used when rendering.
    pub fn with_format(mut self, format: TimeFormat) -> Self {
        self.format = format;
        self
    }

    /// Layout used when rendering.
    pub fn format(&self) -> TimeFormat {
        self.format
    }

    fn zone(&self, settings: &FormSettings) -> Result<Tz> {
        match self.time_zone {
            Some(zone) => Ok(zone),
            None => settings.time_zone(),
        }
    }
}

impl Widget for TimeWidget {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn fill(&mut self, ctx: &mut FillContext<'_>) -> Result<bool> {
        self.base.errors.clear();
        let zone = self.zone(ctx.settings())?;
        let input = ctx.submitted(&self.base.id).unwrap_or_default();
        let instant = parse_local(input, zone).unwrap_or_else(|| {
            debug!("{}: unreadable time {input:?}, binding zero time", self.base.id);
            Value::zero_time()
        });
        ctx.set(&self.base.path(), instant)?;
        Ok(true)
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Result<RenderNode> {
        let path = self.base.path();
        let formatted = match ctx.get(&path)? {
            Value::Time(instant) => {
                let zone = self.zone(ctx.settings())?;
                instant.with_timezone(&zone).format(self.format.pattern()).to_string()
            }
            Value::Null | Value::Optional(None) => String::new(),
            other => {
                return Err(AddressError::TypeMismatch {
                    path: path.to_string(),
                    expected: Kind::Time,
                    found: other.kind(),
                }
                .into());
            }
        };
        Ok(self.base.node(Template::Time, RenderValue::Formatted(formatted)))
    }
}
