//! Content Handler Contract
//!
//! The single downstream interface the namespace strategies dispatch
//! into.

use super::attributes::Attributes;

/// Receives resolved element events
///
/// Every string argument and the attribute list are borrowed from the
/// dispatch frame of the current call; a handler that wants to retain
/// anything must copy it out before returning.
pub trait ContentHandler {
    /// Called once per element start, after name resolution.
    ///
    /// Which of `uri`, `local_name`, and `qname` are populated depends
    /// on the active namespace policy; suppressed fields are empty
    /// strings.
    fn start_element(
        &mut self,
        uri: &str,
        local_name: &str,
        qname: &str,
        attributes: &dyn Attributes,
    );

    /// Called once per element end, with the same name shape as the
    /// matching start.
    fn end_element(&mut self, uri: &str, local_name: &str, qname: &str);
}
