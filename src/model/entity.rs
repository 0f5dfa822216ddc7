//! Named field access for the generic tag writers.
//!
//! The writers address record fields by their element name (`"title"`,
//! `"updated"`, ...). Each record type maps those names onto its own fields
//! through [`Entity::field`], so one writer serves feeds, entries and persons
//! alike without runtime reflection.

use chrono::{DateTime, Utc};

use super::{Category, Entry, Feed, Generator, Link, OneOrMany, Person, Text};
use crate::error::RenderError;

/// A borrowed view of one record field.
#[derive(Debug, Clone, Copy)]
pub enum Field<'a> {
    Str(&'a str),
    Text(&'a Text),
    Date(&'a DateTime<Utc>),
    Persons(&'a OneOrMany<Person>),
    Links(&'a OneOrMany<Link>),
    Categories(&'a OneOrMany<Category>),
    Generator(&'a Generator),
    Entries(&'a [Entry]),
}

impl Field<'_> {
    pub fn kind(&self) -> FieldKind {
        match self {
            Field::Str(_) => FieldKind::Str,
            Field::Text(_) => FieldKind::Text,
            Field::Date(_) => FieldKind::Date,
            Field::Persons(_) => FieldKind::Persons,
            Field::Links(_) => FieldKind::Links,
            Field::Categories(_) => FieldKind::Categories,
            Field::Generator(_) => FieldKind::Generator,
            Field::Entries(_) => FieldKind::Entries,
        }
    }
}

/// The shape of a [`Field`], used in error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Str,
    Text,
    Date,
    Persons,
    Links,
    Categories,
    Generator,
    Entries,
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FieldKind::Str => "a string",
            FieldKind::Text => "a text construct",
            FieldKind::Date => "a date",
            FieldKind::Persons => "a person list",
            FieldKind::Links => "a link list",
            FieldKind::Categories => "a category list",
            FieldKind::Generator => "a generator",
            FieldKind::Entries => "an entry list",
        };
        f.write_str(name)
    }
}

/// A record whose fields can be looked up by element name.
pub trait Entity {
    /// Record name used in error messages.
    const NAME: &'static str;

    /// Returns `Ok(None)` for a known field that is absent and
    /// [`RenderError::UnknownField`] for a name the record does not define.
    fn field(&self, name: &str) -> Result<Option<Field<'_>>, RenderError>;
}

fn unknown<T>(entity: &'static str, name: &str) -> Result<T, RenderError> {
    Err(RenderError::UnknownField {
        entity,
        field: name.to_string(),
    })
}

impl Entity for Person {
    const NAME: &'static str = "person";

    fn field(&self, name: &str) -> Result<Option<Field<'_>>, RenderError> {
        Ok(match name {
            "name" => Some(Field::Str(&self.name)),
            "email" => self.email.as_deref().map(Field::Str),
            "uri" => self.uri.as_deref().map(Field::Str),
            _ => return unknown(Self::NAME, name),
        })
    }
}

impl Entity for Feed {
    const NAME: &'static str = "feed";

    fn field(&self, name: &str) -> Result<Option<Field<'_>>, RenderError> {
        Ok(match name {
            "id" => self.id.as_deref().map(Field::Str),
            "title" => self.title.as_ref().map(Field::Text),
            "subtitle" => self.subtitle.as_ref().map(Field::Text),
            "updated" => self.updated.as_ref().map(Field::Date),
            "author" => self.author.as_ref().map(Field::Persons),
            "contributor" => self.contributor.as_ref().map(Field::Persons),
            "link" => self.link.as_ref().map(Field::Links),
            "icon" => self.icon.as_deref().map(Field::Str),
            "logo" => self.logo.as_deref().map(Field::Str),
            "rights" => self.rights.as_ref().map(Field::Text),
            "generator" => self.generator.as_ref().map(Field::Generator),
            "category" => self.category.as_ref().map(Field::Categories),
            "entry" => Some(Field::Entries(&self.entry)),
            _ => return unknown(Self::NAME, name),
        })
    }
}

impl Entity for Entry {
    const NAME: &'static str = "entry";

    fn field(&self, name: &str) -> Result<Option<Field<'_>>, RenderError> {
        Ok(match name {
            "id" => self.id.as_deref().map(Field::Str),
            "title" => self.title.as_ref().map(Field::Text),
            "link" => self.link.as_ref().map(Field::Links),
            "published" => self.published.as_ref().map(Field::Date),
            "updated" => self.updated.as_ref().map(Field::Date),
            "summary" => self.summary.as_ref().map(Field::Text),
            "content" => self.content.as_ref().map(Field::Text),
            "rights" => self.rights.as_ref().map(Field::Text),
            "author" => self.author.as_ref().map(Field::Persons),
            "contributor" => self.contributor.as_ref().map(Field::Persons),
            "category" => self.category.as_ref().map(Field::Categories),
            "image" => self.image.as_deref().map(Field::Str),
            _ => return unknown(Self::NAME, name),
        })
    }
}
