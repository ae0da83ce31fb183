//! saxns - Namespace resolution for SAX-style XML parsing
//!
//! The upstream tokenizer packs namespace URI, local name, and prefix
//! into a single tab-separated string per element or attribute name.
//! This crate decodes that packing and dispatches resolved start/end
//! element events to a `ContentHandler`, under one of three policies:
//!
//! - NoNamespaces: raw names pass through untouched
//! - NoPrefixes: URIs and local names, no qualified names
//! - WithPrefixes: URIs, local names, and reconstructed `prefix:local`
//!   qualified names
//!
//! Strategies are stateless values; nothing persists between element
//! events except the policy choice itself.

pub mod core;
pub mod sax;
pub mod strategy;

pub use crate::core::name::{qualified_name, split_name, split_name_full, NAME_SEPARATOR};
pub use crate::sax::attributes::{Attribute, Attributes, AttributesImpl};
pub use crate::sax::collector::{ElementEvent, EventCollector};
pub use crate::sax::handler::ContentHandler;
pub use crate::strategy::{pair_attributes, NamespaceStrategy, CDATA};
