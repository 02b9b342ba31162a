use std::fmt;

/// Markup that is safe to hand to a display surface.
///
/// Untrusted text can only enter through [`Html::text`] (or
/// [`Html::attr`] inside a quoted attribute), which escapes it. Literal markup
/// must be `'static`, so record content can never be passed as markup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Html(String);

impl Html {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(text: &str) -> Self {
        Self(html_escape::encode_safe(text).into_owned())
    }

    pub fn markup(markup: &'static str) -> Self {
        Self(markup.to_string())
    }

    pub fn push(&mut self, other: Html) -> &mut Self {
        self.0.push_str(&other.0);
        self
    }

    pub fn push_markup(&mut self, markup: &'static str) -> &mut Self {
        self.0.push_str(markup);
        self
    }

    pub fn push_text(&mut self, text: &str) -> &mut Self {
        self.0.push_str(&html_escape::encode_safe(text));
        self
    }

    /// Value for a double-quoted attribute.
    pub fn push_attr(&mut self, value: &str) -> &mut Self {
        self.0
            .push_str(&html_escape::encode_double_quoted_attribute(value));
        self
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Html {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromIterator<Html> for Html {
    fn from_iter<I: IntoIterator<Item = Html>>(iter: I) -> Self {
        let mut out = Html::new();
        for part in iter {
            out.push(part);
        }
        out
    }
}
