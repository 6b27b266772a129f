//! # mf2-parser
//!
//! microformats-2 object extraction over already-parsed element trees.
//!
//! The engine reads class-attribute conventions (`h-*` object roots,
//! `p-/u-/dt-/e-*` properties, the value-class pattern) and assembles a typed,
//! nested object graph:
//! - **grammar**: class token classification (object / property / value / value-title)
//! - **extract**: per-prefix property value extraction, value-class date-time
//!   assembly, URL and date validation
//! - **vocabulary**: legacy (v1) vocabulary registration and class translation
//! - **builder**: the recursive tree walk that creates and populates objects
//! - **index**: the all / standalone / by-id accumulator behind [`Results`]
//!
//! Any tree implementing [`mf2_core::DomNode`] can be parsed; the [`html`]
//! module exposes ast-grep (tree-sitter-html) syntax trees as such.
//!
//! # Concurrency
//!
//! A [`Parser`] is an immutable value (settings plus a vocabulary snapshot).
//! Each [`Parser::parse`] call owns its accumulator, so independent parses may
//! run on separate threads sharing one parser.
//!
//! [`Results`]: mf2_core::Results

pub mod builder;
pub mod error;
pub mod extract;
pub mod grammar;
pub mod html;
pub mod index;
pub mod parser;
pub mod vocabulary;

pub use error::ParserError;
pub use grammar::{ClassToken, Classification, Prefix, PropertyClass};
pub use parser::Parser;
pub use vocabulary::VocabularyRegistry;
