/// A value as submitted to a field.
///
/// `Absent` stands for "no value supplied" (a missing form key). Together
/// with empty text it forms the empty-equivalent set that fields treat as
/// "nothing entered" rather than as a malformed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RawValue<'a> {
    /// No value was supplied at all.
    #[default]
    Absent,
    /// Text as entered, possibly with separators or stray characters.
    Text(&'a str),
}

impl<'a> RawValue<'a> {
    /// True for `Absent` and for empty text.
    pub fn is_empty(&self) -> bool {
        match self {
            RawValue::Absent => true,
            RawValue::Text(s) => s.is_empty(),
        }
    }

    /// Returns the text when the value is not empty-equivalent.
    pub fn text(&self) -> Option<&'a str> {
        match *self {
            RawValue::Text(s) if !s.is_empty() => Some(s),
            _ => None,
        }
    }
}

impl<'a> From<&'a str> for RawValue<'a> {
    fn from(value: &'a str) -> Self {
        RawValue::Text(value)
    }
}

impl<'a> From<&'a String> for RawValue<'a> {
    fn from(value: &'a String) -> Self {
        RawValue::Text(value.as_str())
    }
}

impl<'a> From<Option<&'a str>> for RawValue<'a> {
    fn from(value: Option<&'a str>) -> Self {
        value.map_or(RawValue::Absent, RawValue::Text)
    }
}
