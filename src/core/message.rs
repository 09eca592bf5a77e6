//! Canonical message construction
//!
//! A canonical message is the delimiter-free concatenation of a record's
//! fields in a fixed order. It is the exact input to the hasher, so every
//! party must render each field identically; only types with a pinned
//! rendering implement [`CanonicalField`].

use crate::core::Amount;

/// A value with a fixed text rendering inside a canonical message.
pub trait CanonicalField {
    fn render_into(&self, out: &mut String);
}

impl CanonicalField for str {
    fn render_into(&self, out: &mut String) {
        out.push_str(self);
    }
}

impl CanonicalField for String {
    fn render_into(&self, out: &mut String) {
        out.push_str(self);
    }
}

impl CanonicalField for i64 {
    fn render_into(&self, out: &mut String) {
        out.push_str(&self.to_string());
    }
}

impl CanonicalField for u64 {
    fn render_into(&self, out: &mut String) {
        out.push_str(&self.to_string());
    }
}

impl CanonicalField for Amount {
    fn render_into(&self, out: &mut String) {
        out.push_str(&self.to_string());
    }
}

/// Builder for a canonical message. Fields are appended in call order with
/// no separator.
#[derive(Debug, Default, Clone)]
pub struct CanonicalMessage {
    buf: String,
}

impl CanonicalMessage {
    pub fn new() -> CanonicalMessage {
        CanonicalMessage::default()
    }

    pub fn field<F: CanonicalField + ?Sized>(mut self, field: &F) -> CanonicalMessage {
        field.render_into(&mut self.buf);
        self
    }

    /// Append every field of `fields` in iteration order.
    pub fn fields<'a, F, I>(mut self, fields: I) -> CanonicalMessage
    where
        F: CanonicalField + ?Sized + 'a,
        I: IntoIterator<Item = &'a F>,
    {
        for field in fields {
            field.render_into(&mut self.buf);
        }
        self
    }

    pub fn finish(self) -> String {
        self.buf
    }
}
