//! XML Attribute Lists
//!
//! The read contract handed to content handlers, plus the concrete
//! list the namespace strategies build once per element start.

/// A single resolved attribute
///
/// All fields are owned; a record lives only for the element event
/// that carries it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Namespace URI, empty when the attribute has no namespace
    pub uri: String,
    /// Local name, empty under the namespace-unaware policy
    pub local_name: String,
    /// Qualified name, empty when the active policy suppresses it
    pub qname: String,
    /// Attribute type as reported by the tokenizer
    pub attr_type: String,
    /// Attribute value
    pub value: String,
    /// Whether the attribute was written in the source markup, as
    /// opposed to defaulted from a DTD or schema
    pub specified: bool,
}

/// Read access to an element's attribute list
///
/// Index-based accessors return `None` past the end of the list.
pub trait Attributes {
    /// Number of attributes in the list
    fn len(&self) -> usize;

    /// Check whether the list is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Namespace URI of the attribute at `index`
    fn uri(&self, index: usize) -> Option<&str>;

    /// Local name of the attribute at `index`
    fn local_name(&self, index: usize) -> Option<&str>;

    /// Qualified name of the attribute at `index`
    fn qname(&self, index: usize) -> Option<&str>;

    /// Type of the attribute at `index`
    fn attr_type(&self, index: usize) -> Option<&str>;

    /// Value of the attribute at `index`
    fn value(&self, index: usize) -> Option<&str>;

    /// Whether the attribute at `index` was explicitly written in the
    /// source markup
    fn specified(&self, index: usize) -> Option<bool>;

    /// Find an attribute by namespace URI and local name
    fn index_of(&self, uri: &str, local_name: &str) -> Option<usize>;

    /// Find an attribute by qualified name
    fn index_of_qname(&self, qname: &str) -> Option<usize>;

    /// Value of the attribute with the given URI and local name
    fn value_of(&self, uri: &str, local_name: &str) -> Option<&str> {
        self.index_of(uri, local_name).and_then(|i| self.value(i))
    }

    /// Value of the attribute with the given qualified name
    fn value_of_qname(&self, qname: &str) -> Option<&str> {
        self.index_of_qname(qname).and_then(|i| self.value(i))
    }
}

/// Concrete attribute list
///
/// Append-only; insertion order is preserved and equals document
/// order. Exactly one list is built per element-start dispatch, but a
/// caller that owns one may `clear` and refill it across elements.
#[derive(Debug, Clone, Default)]
pub struct AttributesImpl {
    attrs: Vec<Attribute>,
}

impl AttributesImpl {
    /// Create an empty list
    pub fn new() -> Self {
        Self { attrs: Vec::new() }
    }

    /// Create an empty list with room for `capacity` attributes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            attrs: Vec::with_capacity(capacity),
        }
    }

    /// Append an attribute to the end of the list
    pub fn add_attribute(
        &mut self,
        uri: &str,
        local_name: &str,
        qname: &str,
        attr_type: &str,
        value: &str,
        specified: bool,
    ) {
        self.attrs.push(Attribute {
            uri: uri.to_owned(),
            local_name: local_name.to_owned(),
            qname: qname.to_owned(),
            attr_type: attr_type.to_owned(),
            value: value.to_owned(),
            specified,
        });
    }

    /// Remove all attributes, keeping the allocation
    pub fn clear(&mut self) {
        self.attrs.clear();
    }

    /// Get the attribute record at `index`
    pub fn get(&self, index: usize) -> Option<&Attribute> {
        self.attrs.get(index)
    }

    /// Iterate over the attribute records in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Attribute> {
        self.attrs.iter()
    }
}

impl Attributes for AttributesImpl {
    fn len(&self) -> usize {
        self.attrs.len()
    }

    fn uri(&self, index: usize) -> Option<&str> {
        self.attrs.get(index).map(|a| a.uri.as_str())
    }

    fn local_name(&self, index: usize) -> Option<&str> {
        self.attrs.get(index).map(|a| a.local_name.as_str())
    }

    fn qname(&self, index: usize) -> Option<&str> {
        self.attrs.get(index).map(|a| a.qname.as_str())
    }

    fn attr_type(&self, index: usize) -> Option<&str> {
        self.attrs.get(index).map(|a| a.attr_type.as_str())
    }

    fn value(&self, index: usize) -> Option<&str> {
        self.attrs.get(index).map(|a| a.value.as_str())
    }

    fn specified(&self, index: usize) -> Option<bool> {
        self.attrs.get(index).map(|a| a.specified)
    }

    fn index_of(&self, uri: &str, local_name: &str) -> Option<usize> {
        self.attrs
            .iter()
            .position(|a| a.uri == uri && a.local_name == local_name)
    }

    fn index_of_qname(&self, qname: &str) -> Option<usize> {
        self.attrs.iter().position(|a| a.qname == qname)
    }
}
