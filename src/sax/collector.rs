//! Event Collector
//!
//! A `ContentHandler` that copies events out of the dispatch frame so
//! they can be consumed in a batch after parsing.

use super::attributes::{Attribute, Attributes};
use super::handler::ContentHandler;

/// An element event with every field copied out of the dispatch frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementEvent {
    /// Element opening tag with its resolved attribute list
    StartElement {
        uri: String,
        local_name: String,
        qname: String,
        attributes: Vec<Attribute>,
    },
    /// Element closing tag
    EndElement {
        uri: String,
        local_name: String,
        qname: String,
    },
}

impl ElementEvent {
    /// Check if this is a start element event
    #[inline]
    pub fn is_start_element(&self) -> bool {
        matches!(self, ElementEvent::StartElement { .. })
    }

    /// Check if this is an end element event
    #[inline]
    pub fn is_end_element(&self) -> bool {
        matches!(self, ElementEvent::EndElement { .. })
    }

    /// Qualified name carried by the event
    pub fn qname(&self) -> &str {
        match self {
            ElementEvent::StartElement { qname, .. } => qname,
            ElementEvent::EndElement { qname, .. } => qname,
        }
    }

    /// Local name carried by the event
    pub fn local_name(&self) -> &str {
        match self {
            ElementEvent::StartElement { local_name, .. } => local_name,
            ElementEvent::EndElement { local_name, .. } => local_name,
        }
    }
}

/// Collector that gathers element events during dispatch
#[derive(Debug, Default)]
pub struct EventCollector {
    /// Collected events
    events: Vec<ElementEvent>,
}

impl EventCollector {
    /// Create a new collector
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Create with estimated capacity
    pub fn with_capacity(events: usize) -> Self {
        Self {
            events: Vec::with_capacity(events),
        }
    }

    /// Get the collected events as a slice
    pub fn events(&self) -> &[ElementEvent] {
        &self.events
    }

    /// Take the collected events
    pub fn take_events(&mut self) -> Vec<ElementEvent> {
        std::mem::take(&mut self.events)
    }

    /// Get number of collected events
    pub fn event_count(&self) -> usize {
        self.events.len()
    }
}

impl ContentHandler for EventCollector {
    fn start_element(
        &mut self,
        uri: &str,
        local_name: &str,
        qname: &str,
        attributes: &dyn Attributes,
    ) {
        let attributes = (0..attributes.len())
            .map(|i| Attribute {
                uri: attributes.uri(i).unwrap_or("").to_owned(),
                local_name: attributes.local_name(i).unwrap_or("").to_owned(),
                qname: attributes.qname(i).unwrap_or("").to_owned(),
                attr_type: attributes.attr_type(i).unwrap_or("").to_owned(),
                value: attributes.value(i).unwrap_or("").to_owned(),
                specified: attributes.specified(i).unwrap_or(false),
            })
            .collect();

        self.events.push(ElementEvent::StartElement {
            uri: uri.to_owned(),
            local_name: local_name.to_owned(),
            qname: qname.to_owned(),
            attributes,
        });
    }

    fn end_element(&mut self, uri: &str, local_name: &str, qname: &str) {
        self.events.push(ElementEvent::EndElement {
            uri: uri.to_owned(),
            local_name: local_name.to_owned(),
            qname: qname.to_owned(),
        });
    }
}
