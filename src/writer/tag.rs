use std::borrow::Cow;

use crate::error::RenderError;
use crate::model::{Entity, Field, TextType};
use crate::util::{escape_text, iso8601};

/// An ordered set of element attributes.
///
/// Iteration follows insertion order. Inserting an existing key replaces its
/// value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Attributes::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Attributes::new();
        for (key, value) in iter {
            attributes.insert(key, value);
        }
        attributes
    }
}

/// Renders attributes as ` key="value"` pairs in insertion order.
///
/// Values are written verbatim. Callers are responsible for supplying
/// values that are safe inside double quotes.
///
/// # Examples
///
/// ```
/// use feedwright::writer::{write_attributes, Attributes};
///
/// let attr = Attributes::new().with("key1", "value1").with("key2", "value2");
/// assert_eq!(write_attributes(Some(&attr)), r#" key1="value1" key2="value2""#);
/// assert_eq!(write_attributes(None), "");
/// ```
pub fn write_attributes(attr: Option<&Attributes>) -> String {
    let Some(attr) = attr else {
        return String::new();
    };
    attr.iter().fold(String::new(), |mut pairs, (key, value)| {
        pairs.push(' ');
        pairs.push_str(key);
        pairs.push_str("=\"");
        pairs.push_str(value);
        pairs.push('"');
        pairs
    })
}

/// Renders `<name ATTRS>content</name>` with `content` escaped, or the empty
/// string when `content` is empty.
///
/// # Examples
///
/// ```
/// use feedwright::writer::write_tag;
///
/// assert_eq!(write_tag("tag", "value1", None), "<tag>value1</tag>");
/// assert_eq!(write_tag("p", "", None), "");
/// ```
pub fn write_tag(name: &str, content: &str, attr: Option<&Attributes>) -> String {
    if content.is_empty() {
        return String::new();
    }
    format!(
        "<{name}{}>{}</{name}>",
        write_attributes(attr),
        escape_text(content)
    )
}

/// Renders the field `name` of `entity` as a tag of the same name.
///
/// Dates are written as ISO-8601 UTC with milliseconds, strings and text
/// constructs as their value. An absent field renders nothing.
///
/// # Errors
///
/// - [`RenderError::UnknownField`] if `entity` has no field called `name`
/// - [`RenderError::InvalidFieldKind`] if the field is a list, generator or
///   other value that has no single text form
pub fn write_entity_tag<E: Entity>(
    name: &str,
    entity: &E,
    attr: Option<&Attributes>,
) -> Result<String, RenderError> {
    let text: Cow<'_, str> = match entity.field(name)? {
        None => return Ok(String::new()),
        Some(Field::Str(s)) => Cow::Borrowed(s),
        Some(Field::Text(t)) => Cow::Borrowed(t.value.as_str()),
        Some(Field::Date(d)) => Cow::Owned(iso8601(d)),
        Some(other) => {
            return Err(RenderError::invalid_kind(
                E::NAME,
                name,
                "a string, text or date",
                other.kind(),
            ))
        }
    };
    Ok(write_tag(name, &text, attr))
}

/// Renders a text construct field with its `type` attribute.
///
/// A bare string field is written as `type="text"`; a [`Text`] field carries
/// its own type. The value is escaped once, so HTML content arrives in the
/// document as entity-encoded markup.
///
/// [`Text`]: crate::model::Text
///
/// # Errors
///
/// - [`RenderError::UnknownField`] if `entity` has no field called `name`
/// - [`RenderError::InvalidFieldKind`] if the field is not textual
pub fn write_text_tag<E: Entity>(name: &str, entity: &E) -> Result<String, RenderError> {
    let (value, kind) = match entity.field(name)? {
        None => return Ok(String::new()),
        Some(Field::Str(s)) => (s, TextType::Text),
        Some(Field::Text(t)) => (t.value.as_str(), t.kind),
        Some(other) => {
            return Err(RenderError::invalid_kind(
                E::NAME,
                name,
                "a string or text",
                other.kind(),
            ))
        }
    };
    let attr = Attributes::new().with("type", kind.as_str());
    Ok(write_tag(name, value, Some(&attr)))
}
