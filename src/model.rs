use crate::error::Error;
use crate::tabs::{TabStop, Tabs};
use crate::units::{LINE_TWIPS, levels_to_twips, line_height_to_twips, to_twips};
use crate::value::StyleValue;

pub const DEFAULT_BASED_ON: &str = "Normal";

/// Keys recognised by [`ParagraphStyle::set_style_value`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleKey {
    LineHeight,
    Align,
    SpaceBefore,
    SpaceAfter,
    Spacing,
    Tabs,
    Indent,
    Hanging,
    BasedOn,
    Next,
    WidowControl,
    KeepNext,
    KeepLines,
    PageBreakBefore,
}

impl StyleKey {
    /// Case-insensitive lookup by field name; `None` for keys with no
    /// matching field. The hyphenated `line-height` is not a field name and
    /// is handled by [`ParagraphStyle::set_style_value`] itself.
    pub fn lookup(key: &str) -> Option<StyleKey> {
        let key = key.to_ascii_lowercase();
        let found = match key.as_str() {
            "lineheight" => StyleKey::LineHeight,
            "align" => StyleKey::Align,
            "spacebefore" => StyleKey::SpaceBefore,
            "spaceafter" => StyleKey::SpaceAfter,
            "spacing" => StyleKey::Spacing,
            "tabs" => StyleKey::Tabs,
            "indent" => StyleKey::Indent,
            "hanging" => StyleKey::Hanging,
            "basedon" => StyleKey::BasedOn,
            "next" => StyleKey::Next,
            "widowcontrol" => StyleKey::WidowControl,
            "keepnext" => StyleKey::KeepNext,
            "keeplines" => StyleKey::KeepLines,
            "pagebreakbefore" => StyleKey::PageBreakBefore,
            _ => return None,
        };
        Some(found)
    }
}

/// Strips the leading `_` some callers put on internal style keys.
fn strip_private_marker(key: &str) -> &str {
    key.strip_prefix('_').unwrap_or(key)
}

/// Mimics a lenient decimal read: the longest `digits[.digits]` prefix.
fn leading_number(text: &str) -> Option<f64> {
    let mut end = 0;
    let mut seen_dot = false;
    for (i, c) in text.char_indices() {
        match c {
            '0'..='9' => end = i + 1,
            '.' if !seen_dot => {
                seen_dot = true;
                end = i + 1;
            }
            _ => break,
        }
    }
    text[..end].parse::<f64>().ok()
}

/// Paragraph formatting attributes, as written to `w:pPr`.
///
/// Twip-valued fields hold whole twips (1/20 pt). Optional fields start
/// unset; the pagination toggles start at their WordprocessingML defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct ParagraphStyle {
    line_height: Option<f64>,
    align: Option<String>,
    space_before: Option<i32>,
    space_after: Option<i32>,
    spacing: Option<i32>,
    tabs: Option<Tabs>,
    indent: Option<i32>,
    hanging: Option<i32>,
    based_on: String,
    next: Option<String>,
    widow_control: bool,
    keep_next: bool,
    keep_lines: bool,
    page_break_before: bool,
}

impl Default for ParagraphStyle {
    fn default() -> Self {
        ParagraphStyle {
            line_height: None,
            align: None,
            space_before: None,
            space_after: None,
            spacing: None,
            tabs: None,
            indent: None,
            hanging: None,
            based_on: DEFAULT_BASED_ON.to_string(),
            next: None,
            widow_control: true,
            keep_next: false,
            keep_lines: false,
            page_break_before: false,
        }
    }
}

impl ParagraphStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_style_map<I, K, V>(map: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<StyleValue>,
    {
        let mut style = Self::new();
        style.apply_style_map(map)?;
        Ok(style)
    }

    /// Applies each entry in order through [`set_style_value`](Self::set_style_value).
    ///
    /// Unknown keys are ignored. The first invalid line height aborts the
    /// call; entries before it stay applied.
    pub fn apply_style_map<I, K, V>(&mut self, map: I) -> Result<&mut Self, Error>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<StyleValue>,
    {
        for (key, value) in map {
            self.set_style_value(strip_private_marker(key.as_ref()), value)?;
        }
        Ok(self)
    }

    /// Sets one field from a style map entry. These exact keys carry a unit
    /// conversion:
    ///
    /// - `indent`, `hanging`: indentation levels, stored as `levels * 720` twips
    /// - `spacing`: extra twips on top of single spacing, stored as `value + 240`
    /// - `line-height`: multiplier, also derives `spacing`
    ///
    /// Any other spelling that names a field (`Indent`, `SPACING`) stores
    /// the value as given. Boolean keys fall back to their default for
    /// non-boolean values.
    pub fn set_style_value(
        &mut self,
        key: &str,
        value: impl Into<StyleValue>,
    ) -> Result<&mut Self, Error> {
        let key = strip_private_marker(key);
        let value = value.into();
        if key == "line-height" {
            self.set_line_height(value)?;
            return Ok(self);
        }
        let Some(style_key) = StyleKey::lookup(key) else {
            log::debug!("ignoring unknown paragraph style key '{key}'");
            return Ok(self);
        };

        match style_key {
            StyleKey::LineHeight => {
                self.set_line_height(value)?;
            }
            StyleKey::Indent
            | StyleKey::Hanging
            | StyleKey::Spacing
            | StyleKey::SpaceBefore
            | StyleKey::SpaceAfter => {
                let Some(n) = value.as_number() else {
                    log::warn!("paragraph style '{key}' expects a number, got {value:?}");
                    return Ok(self);
                };
                let converted = match key {
                    "indent" | "hanging" => levels_to_twips(n),
                    "spacing" => to_twips(n + LINE_TWIPS),
                    _ => to_twips(n),
                };
                let Some(twips) = converted else {
                    log::warn!("paragraph style '{key}' value {n} is out of twip range");
                    return Ok(self);
                };
                match style_key {
                    StyleKey::Indent => self.set_indent(twips),
                    StyleKey::Hanging => self.set_hanging(twips),
                    StyleKey::Spacing => self.set_spacing(twips),
                    StyleKey::SpaceBefore => self.set_space_before(twips),
                    _ => self.set_space_after(twips),
                };
            }
            StyleKey::Align | StyleKey::BasedOn | StyleKey::Next => {
                let Some(text) = value.as_text() else {
                    log::warn!("paragraph style '{key}' expects text, got {value:?}");
                    return Ok(self);
                };
                match style_key {
                    StyleKey::Align => self.set_align(text),
                    StyleKey::BasedOn => self.set_based_on(text),
                    _ => self.set_next(text),
                };
            }
            StyleKey::Tabs => match value {
                StyleValue::Tabs(stops) => {
                    self.set_tabs(stops);
                }
                other => log::debug!("ignoring non-list tab value {other:?}"),
            },
            StyleKey::WidowControl => {
                self.set_widow_control(value.as_bool().unwrap_or(true));
            }
            StyleKey::KeepNext => {
                self.set_keep_next(value.as_bool().unwrap_or(false));
            }
            StyleKey::KeepLines => {
                self.set_keep_lines(value.as_bool().unwrap_or(false));
            }
            StyleKey::PageBreakBefore => {
                self.set_page_break_before(value.as_bool().unwrap_or(false));
            }
        }
        Ok(self)
    }

    pub fn line_height(&self) -> Option<f64> {
        self.line_height
    }

    /// Sets the line height multiplier (1.0 = single spacing) and derives
    /// `spacing = line_height * 240`.
    ///
    /// Text input keeps only digits, dots and commas before being read as a
    /// decimal, so `"1.5x"` is 1.5. Anything that is not then a positive
    /// number, or whose derived spacing does not fit in twips, is rejected
    /// and the style is left as it was.
    pub fn set_line_height(&mut self, value: impl Into<StyleValue>) -> Result<&mut Self, Error> {
        let value = value.into();
        let parsed = match &value {
            StyleValue::Int(i) => Some(*i as f64),
            StyleValue::Float(f) => Some(*f),
            StyleValue::Text(s) => {
                let kept: String = s
                    .chars()
                    .filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
                    .collect();
                Some(leading_number(&kept).unwrap_or(0.0))
            }
            StyleValue::Bool(_) | StyleValue::Tabs(_) => None,
        };
        let line_height = match parsed {
            Some(n) if n.is_finite() && n > 0.0 => n,
            _ => {
                return Err(Error::InvalidStyleValue(format!(
                    "line height must be a positive number, got {value:?}"
                )));
            }
        };
        let Some(spacing) = line_height_to_twips(line_height) else {
            return Err(Error::InvalidStyleValue(format!(
                "line height {line_height} is too large"
            )));
        };

        self.line_height = Some(line_height);
        self.set_spacing(spacing);
        Ok(self)
    }

    pub fn align(&self) -> Option<&str> {
        self.align.as_deref()
    }

    /// `justify` in any case becomes `both`; anything else is kept as given.
    pub fn set_align(&mut self, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        self.align = if value.eq_ignore_ascii_case("justify") {
            Some("both".to_string())
        } else {
            Some(value)
        };
        self
    }

    pub fn space_before(&self) -> Option<i32> {
        self.space_before
    }

    pub fn set_space_before(&mut self, twips: i32) -> &mut Self {
        self.space_before = Some(twips);
        self
    }

    pub fn space_after(&self) -> Option<i32> {
        self.space_after
    }

    pub fn set_space_after(&mut self, twips: i32) -> &mut Self {
        self.space_after = Some(twips);
        self
    }

    /// Line spacing in twips (`w:spacing/@w:line`).
    pub fn spacing(&self) -> Option<i32> {
        self.spacing
    }

    /// Overwrites spacing only; `line_height` is not recomputed.
    pub fn set_spacing(&mut self, twips: i32) -> &mut Self {
        self.spacing = Some(twips);
        self
    }

    pub fn tabs(&self) -> Option<&Tabs> {
        self.tabs.as_ref()
    }

    pub fn set_tabs(&mut self, stops: Vec<TabStop>) -> &mut Self {
        self.tabs = Some(Tabs::new(stops));
        self
    }

    pub fn indent(&self) -> Option<i32> {
        self.indent
    }

    pub fn set_indent(&mut self, twips: i32) -> &mut Self {
        self.indent = Some(twips);
        self
    }

    pub fn hanging(&self) -> Option<i32> {
        self.hanging
    }

    pub fn set_hanging(&mut self, twips: i32) -> &mut Self {
        self.hanging = Some(twips);
        self
    }

    pub fn based_on(&self) -> &str {
        &self.based_on
    }

    /// An empty name resets to `Normal`.
    pub fn set_based_on(&mut self, style_id: impl Into<String>) -> &mut Self {
        let style_id = style_id.into();
        self.based_on = if style_id.is_empty() {
            DEFAULT_BASED_ON.to_string()
        } else {
            style_id
        };
        self
    }

    pub fn next(&self) -> Option<&str> {
        self.next.as_deref()
    }

    pub fn set_next(&mut self, style_id: impl Into<String>) -> &mut Self {
        self.next = Some(style_id.into());
        self
    }

    pub fn widow_control(&self) -> bool {
        self.widow_control
    }

    pub fn set_widow_control(&mut self, on: bool) -> &mut Self {
        self.widow_control = on;
        self
    }

    pub fn keep_next(&self) -> bool {
        self.keep_next
    }

    pub fn set_keep_next(&mut self, on: bool) -> &mut Self {
        self.keep_next = on;
        self
    }

    pub fn keep_lines(&self) -> bool {
        self.keep_lines
    }

    pub fn set_keep_lines(&mut self, on: bool) -> &mut Self {
        self.keep_lines = on;
        self
    }

    pub fn page_break_before(&self) -> bool {
        self.page_break_before
    }

    pub fn set_page_break_before(&mut self, on: bool) -> &mut Self {
        self.page_break_before = on;
        self
    }
}
