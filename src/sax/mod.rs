//! SAX Collaborator Contracts
//!
//! The namespace strategies talk to the rest of the parser through the
//! interfaces in this module:
//!
//! - `Attributes` / `AttributesImpl` - the attribute list built once
//!   per element start
//! - `ContentHandler` - the downstream consumer of resolved events
//! - `EventCollector` - a `ContentHandler` that batches owned events

pub mod attributes;
pub mod collector;
pub mod handler;

pub use attributes::{Attribute, Attributes, AttributesImpl};
pub use collector::{ElementEvent, EventCollector};
pub use handler::ContentHandler;
