//! # mf2-core
//!
//! Core types shared across the mf2 crates.
//!
//! This crate provides the foundational types the extraction engine reads and
//! produces:
//! - The [`DomNode`] capability trait an element tree must satisfy
//! - An owned, builder-style element tree ([`dom::Node`])
//! - The microformat object model ([`MicroformatObject`], [`PropertyValue`])
//! - The per-parse result set and its query surface ([`Results`])
//! - Parser settings and override snapshots
//! - Legacy (v1) vocabulary descriptors

pub mod dom;
pub mod node;
pub mod object;
pub mod results;
pub mod settings;
pub mod vocabulary;

pub use node::{DomNode, NodeType};
pub use object::{MicroformatObject, PropertyValue};
pub use results::Results;
pub use settings::{ParserSettings, SettingsOverride};
pub use vocabulary::{LegacyProperty, LegacyVocabulary};
