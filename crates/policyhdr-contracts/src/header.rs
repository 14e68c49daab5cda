//! The rendered header record handed to whatever sends the response.

/// A single response header produced by a policy serializer.
///
/// `value` is `None` when the serializer declined to produce a value; the
/// header should then be omitted by the sender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseHeader {
    pub name: String,
    pub value: Option<String>,
}

impl ResponseHeader {
    pub fn new(name: impl Into<String>, value: Option<String>) -> Self {
        Self { name: name.into(), value }
    }
}
