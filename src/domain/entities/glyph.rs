use std::borrow::Cow;
use std::fmt;

/// A renderable icon: one or more terminal cells of text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Glyph(Cow<'static, str>);

impl Glyph {
    #[must_use]
    pub const fn from_static(symbol: &'static str) -> Self {
        Self(Cow::Borrowed(symbol))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
