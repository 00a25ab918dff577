//! Page-address parsing into structured lesson keys.
//!
//! The catalog site addresses lessons as
//! `/{courses|lessons}/{id}-{title-words...}` with an optional one-based
//! `chapter` query parameter for course pages. This module turns such an
//! address into a [`LessonKey`] or fails with a structured [`ParseError`];
//! no partial key is ever returned.

mod error;
mod key;
mod page;

pub use error::ParseError;
pub use key::{LessonKey, LessonKind};
pub use page::lesson_key_from_page;
