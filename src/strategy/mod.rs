//! Namespace Processing Strategies
//!
//! Three policies decide how much namespace information reaches the
//! content handler:
//! - NoNamespaces: raw names pass through untouched
//! - NoPrefixes: URIs and local names, no qualified names
//! - WithPrefixes: URIs, local names, and reconstructed qualified names
//!
//! Element and attribute names arrive packed (see `core::name`); each
//! policy decodes exactly as much of the packing as its output shape
//! needs.

use crate::core::name::{qualified_name, split_name, split_name_full};
use crate::sax::attributes::AttributesImpl;
use crate::sax::handler::ContentHandler;

/// Attribute type reported for every attribute.
///
/// The tokenizer carries no DTD type information at this layer, so
/// every attribute is CDATA.
pub const CDATA: &str = "CDATA";

/// Namespace-processing policy applied to element events
///
/// Values are stateless and immutable; a single value can drive any
/// number of elements, from any number of threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamespaceStrategy {
    /// Ignore namespace information; raw names become qualified names
    NoNamespaces,
    /// Decode URIs and local names; suppress qualified names
    NoPrefixes,
    /// Decode everything and reconstruct `prefix:local` qualified names
    WithPrefixes,
}

impl NamespaceStrategy {
    /// Select the policy matching the parser's namespace feature flags
    /// (SAX `namespaces` and `namespace-prefixes`).
    pub fn from_features(namespaces: bool, namespace_prefixes: bool) -> Self {
        match (namespaces, namespace_prefixes) {
            (false, _) => NamespaceStrategy::NoNamespaces,
            (true, false) => NamespaceStrategy::NoPrefixes,
            (true, true) => NamespaceStrategy::WithPrefixes,
        }
    }

    /// Dispatch an element-start event.
    ///
    /// `attrs` holds the tokenizer's (name, value) pairs in document
    /// order. The first `specified_count` of them were written in the
    /// source markup; the rest were defaulted from a DTD or schema.
    /// `specified_count` must not exceed `attrs.len()`.
    pub fn start_element(
        &self,
        name: &str,
        attrs: &[(&str, &str)],
        specified_count: usize,
        handler: &mut impl ContentHandler,
    ) {
        debug_assert!(specified_count <= attrs.len());

        let mut attributes = AttributesImpl::with_capacity(attrs.len());
        match self {
            NamespaceStrategy::NoNamespaces => {
                for (index, &(attr_name, attr_value)) in attrs.iter().enumerate() {
                    attributes.add_attribute(
                        "",
                        "",
                        attr_name,
                        CDATA,
                        attr_value,
                        index < specified_count,
                    );
                }
                handler.start_element("", "", name, &attributes);
            }
            NamespaceStrategy::NoPrefixes => {
                for (index, &(attr_name, attr_value)) in attrs.iter().enumerate() {
                    let (attr_uri, attr_local) = split_name(attr_name);
                    attributes.add_attribute(
                        attr_uri,
                        attr_local,
                        "",
                        CDATA,
                        attr_value,
                        index < specified_count,
                    );
                }
                let (uri, local_name) = split_name(name);
                handler.start_element(uri, local_name, "", &attributes);
            }
            NamespaceStrategy::WithPrefixes => {
                for (index, &(attr_name, attr_value)) in attrs.iter().enumerate() {
                    let (attr_uri, attr_local, attr_prefix) = split_name_full(attr_name);
                    attributes.add_attribute(
                        attr_uri,
                        attr_local,
                        &qualified_name(attr_prefix, attr_local),
                        CDATA,
                        attr_value,
                        index < specified_count,
                    );
                }
                let (uri, local_name, prefix) = split_name_full(name);
                handler.start_element(
                    uri,
                    local_name,
                    &qualified_name(prefix, local_name),
                    &attributes,
                );
            }
        }
    }

    /// Dispatch an element-end event with the same name shape the
    /// matching start used.
    pub fn end_element(&self, name: &str, handler: &mut impl ContentHandler) {
        match self {
            NamespaceStrategy::NoNamespaces => handler.end_element("", "", name),
            NamespaceStrategy::NoPrefixes => {
                let (uri, local_name) = split_name(name);
                handler.end_element(uri, local_name, "");
            }
            NamespaceStrategy::WithPrefixes => {
                let (uri, local_name, prefix) = split_name_full(name);
                handler.end_element(uri, local_name, &qualified_name(prefix, local_name));
            }
        }
    }
}

/// Pair up the tokenizer's flat `[name, value, name, value, ..]`
/// attribute buffer.
///
/// The flat form is decoded once here at the tokenizer boundary; the
/// strategies only ever see bounded pairs. Input length must be even;
/// a dangling trailing name is dropped.
pub fn pair_attributes<'a>(flat: &[&'a str]) -> Vec<(&'a str, &'a str)> {
    debug_assert!(flat.len() % 2 == 0);
    flat.chunks_exact(2).map(|pair| (pair[0], pair[1])).collect()
}
