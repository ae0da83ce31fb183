//! Packed-Name Decoding
//!
//! The tokenizer reports every element and attribute name as a single
//! string with its namespace URI, local name, and prefix joined by a
//! reserved separator byte. This module splits those strings back into
//! their fields.

use memchr::memchr;
use std::borrow::Cow;

/// Separator byte used inside packed names.
///
/// Tab cannot occur in an XML name, so its position in the packed
/// string is unambiguous. The value is part of the wire contract with
/// the tokenizer and must not change.
pub const NAME_SEPARATOR: u8 = b'\t';

/// Split a packed name into `(uri, local_name)`.
///
/// Only the first separator is significant; everything after it
/// (further separators included) belongs to the local name. A string
/// without a separator is a bare local name with no namespace.
///
/// The tokenizer guarantees that the individual fields contain no
/// separator byte; extra separators are not rejected here, they simply
/// end up in the local name.
#[inline]
pub fn split_name(packed: &str) -> (&str, &str) {
    match memchr(NAME_SEPARATOR, packed.as_bytes()) {
        Some(pos) => (&packed[..pos], &packed[pos + 1..]),
        None => ("", packed),
    }
}

/// Split a packed name into `(uri, local_name, prefix)`.
///
/// The first separator ends the URI, the second ends the local name,
/// and the remainder is the prefix. A missing second separator leaves
/// the prefix empty; a missing first separator means the whole string
/// is the local name. A trailing separator leaves the following field
/// empty.
#[inline]
pub fn split_name_full(packed: &str) -> (&str, &str, &str) {
    let Some(first) = memchr(NAME_SEPARATOR, packed.as_bytes()) else {
        return ("", packed, "");
    };
    let uri = &packed[..first];
    let rest = &packed[first + 1..];
    match memchr(NAME_SEPARATOR, rest.as_bytes()) {
        Some(second) => (uri, &rest[..second], &rest[second + 1..]),
        None => (uri, rest, ""),
    }
}

/// Reconstruct a qualified name from a prefix and a local name.
///
/// An empty prefix borrows the local name unchanged; a non-empty
/// prefix allocates `prefix:local_name`.
#[inline]
pub fn qualified_name<'a>(prefix: &str, local_name: &'a str) -> Cow<'a, str> {
    if prefix.is_empty() {
        Cow::Borrowed(local_name)
    } else {
        Cow::Owned(format!("{prefix}:{local_name}"))
    }
}
