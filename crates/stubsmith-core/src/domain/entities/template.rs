//! Template entity and placeholder substitution.
//!
//! A template is plain text with `{{key}}` markers. There is no escaping,
//! no nesting, and no conditional sections: substitution is a single
//! literal scan, so keys containing regex metacharacters are matched as-is
//! and inserted values are never rescanned.

use std::path::{Path, PathBuf};

/// An immutable text asset addressed by a short logical name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    name: String,
    source: PathBuf,
    content: String,
}

impl Template {
    pub fn new(
        name: impl Into<String>,
        source: impl Into<PathBuf>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            content: content.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Where the template was loaded from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn render(&self, ctx: &RenderContext) -> String {
        ctx.render(&self.content)
    }
}

/// Ordered placeholder bindings.
///
/// Bindings are applied in insertion order. Setting a key twice replaces
/// the earlier value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    bindings: Vec<(String, String)>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.bindings.iter_mut().find(|(k, _)| *k == key) {
            Some(existing) => existing.1 = value,
            None => self.bindings.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.bindings
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.bindings.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Replace every `{{key}}` with its bound value.
    ///
    /// Unbound placeholders are left verbatim; bindings with no placeholder
    /// are ignored.
    pub fn render(&self, template: &str) -> String {
        substitute_placeholders(template, self.iter())
    }
}

impl<K, V> FromIterator<(K, V)> for RenderContext
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut ctx = Self::new();
        for (k, v) in iter {
            ctx.insert(k, v);
        }
        ctx
    }
}

/// Literal `{{key}}` → value replacement over any sequence of bindings.
///
/// The template is scanned once, so text inserted from a bound value is
/// never searched for further placeholders. If a key is bound more than
/// once the first binding wins.
pub fn substitute_placeholders<'a>(
    template: &str,
    bindings: impl IntoIterator<Item = (&'a str, &'a str)>,
) -> String {
    let bindings: Vec<(&str, &str)> = bindings.into_iter().collect();
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        let (before, tail) = rest.split_at(start);
        rendered.push_str(before);

        let Some(end) = tail[2..].find("}}") else {
            rest = tail;
            break;
        };
        let key = &tail[2..2 + end];
        match bindings.iter().find(|(k, _)| *k == key) {
            Some((_, value)) => {
                rendered.push_str(value);
                rest = &tail[end + 4..];
            }
            None => {
                // Step one brace so `{{{key}}}` still matches at the next offset.
                rendered.push('{');
                rest = &tail[1..];
            }
        }
    }

    rendered.push_str(rest);
    rendered
}
