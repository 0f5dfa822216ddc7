//! Primitive XML writers shared by the Atom and RSS assemblers.
//!
//! Each writer is a pure function from a record (or part of one) to a
//! fragment of markup. Absent content renders as the empty string, so the
//! assemblers can concatenate fragments without checking for presence.
//!
//! - [`tag`] - attributes, plain tags, entity tags and typed-text tags
//! - [`link`] - self-closing `<link/>` elements
//! - [`person`] - `<author>` / `<contributor>` person constructs
//! - [`generator`] - the `<generator>` element
//! - [`category`] - self-closing `<category/>` elements

pub mod category;
pub mod generator;
pub mod link;
pub mod person;
pub mod tag;

pub use category::write_category;
pub use generator::{generator_attributes, write_generator};
pub use link::write_link;
pub use person::{write_person, PersonRole};
pub use tag::{
    write_attributes, write_entity_tag, write_tag, write_text_tag, Attributes,
};
