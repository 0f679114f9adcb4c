//! Document model types for course content representation.
//!
//! This module defines the intermediate representation (IR) that bridges
//! markdown parsing and HTML rendering. Strings in the model hold raw
//! markdown text; escaping and inline formatting happen at render time.

mod block;
mod course;

pub use block::{Block, CardKind, Table};
pub use course::{Course, Module};
