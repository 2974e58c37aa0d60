//! Tagged references to records that may or may not be loaded yet.

/// Records addressable by an opaque string id.
pub trait Identified {
    fn id(&self) -> &str;
}

/// Either a bare id or an already loaded value.
///
/// Commands arriving from Discord carry ids while internal callers often already hold the
/// record. Services resolve a `Ref` exactly once at their boundary by reading the record
/// behind `id()`, so downstream code only ever sees current values.
#[derive(Debug, Clone, PartialEq)]
pub enum Ref<T> {
    Id(String),
    Resolved(T),
}

impl<T: Identified> Ref<T> {
    /// Id of the referenced record regardless of whether it is loaded.
    pub fn id(&self) -> &str {
        match self {
            Ref::Id(id) => id,
            Ref::Resolved(value) => value.id(),
        }
    }
}

impl<T> From<String> for Ref<T> {
    fn from(id: String) -> Self {
        Ref::Id(id)
    }
}

impl<T> From<&str> for Ref<T> {
    fn from(id: &str) -> Self {
        Ref::Id(id.to_string())
    }
}
