//! Policy options: the ordered directive mapping a header is rendered from.
//!
//! `PolicyOptions` is either `Disabled` (no header at all) or an ordered list
//! of directive entries. Keys are kept as raw strings and only checked
//! against the catalog when a serializer runs, so a configuration containing
//! an unsupported name still loads and fails at render time with the name
//! attached.

use std::fmt;

use serde::de::{self, value::MapAccessDeserializer, Deserializer, MapAccess, Visitor};
use serde::Deserialize;

use crate::directive::{DirectiveName, DirectiveParameters};

/// One `name → parameters` pair, in the position it was declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveEntry {
    /// The configuration key. Not guaranteed to be a supported directive.
    pub name: String,

    /// `None` when the key was given no parameters (`null` or `false`).
    pub parameters: Option<DirectiveParameters>,
}

/// The full input to a policy serializer.
///
/// Entry order is significant: serializers emit directives in exactly this
/// order so the same options always produce the same header value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PolicyOptions {
    /// Emit nothing.
    #[default]
    Disabled,

    /// Emit one directive per entry, in order.
    Directives(Vec<DirectiveEntry>),
}

impl PolicyOptions {
    /// The `false` sentinel: no header is produced.
    pub fn disabled() -> Self {
        PolicyOptions::Disabled
    }

    /// Start building an ordered directive mapping.
    pub fn builder() -> PolicyOptionsBuilder {
        PolicyOptionsBuilder::default()
    }

    /// Return true if these options suppress the header entirely.
    pub fn is_disabled(&self) -> bool {
        matches!(self, PolicyOptions::Disabled)
    }

    /// The declared entries in order. Empty when disabled.
    pub fn entries(&self) -> &[DirectiveEntry] {
        match self {
            PolicyOptions::Disabled => &[],
            PolicyOptions::Directives(entries) => entries,
        }
    }
}

/// Builds `PolicyOptions::Directives`, keeping keys unique.
///
/// Re-declaring a key replaces its parameters but keeps its original
/// position, matching how a mapping behaves.
#[derive(Debug, Default)]
pub struct PolicyOptionsBuilder {
    entries: Vec<DirectiveEntry>,
}

impl PolicyOptionsBuilder {
    /// Add a catalog directive.
    pub fn directive(self, name: DirectiveName, parameters: DirectiveParameters) -> Self {
        self.entry(name.as_str(), Some(parameters))
    }

    /// Add an arbitrary key, including ones outside the catalog or with no
    /// parameters. Used when options come from untyped input.
    pub fn entry(mut self, name: impl Into<String>, parameters: Option<DirectiveParameters>) -> Self {
        insert_entry(&mut self.entries, name.into(), parameters);
        self
    }

    pub fn build(self) -> PolicyOptions {
        PolicyOptions::Directives(self.entries)
    }
}

fn insert_entry(entries: &mut Vec<DirectiveEntry>, name: String, parameters: Option<DirectiveParameters>) {
    match entries.iter_mut().find(|e| e.name == name) {
        Some(existing) => existing.parameters = parameters,
        None => entries.push(DirectiveEntry { name, parameters }),
    }
}

// ── Deserialization ──────────────────────────────────────────────────────────
//
// Map entries are collected in the order the deserializer yields them.
// `false` / `null` mean disabled at the top level and absent per entry.

impl<'de> Deserialize<'de> for PolicyOptions {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(PolicyOptionsVisitor)
    }
}

struct PolicyOptionsVisitor;

impl<'de> Visitor<'de> for PolicyOptionsVisitor {
    type Value = PolicyOptions;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of directive names to parameters, or false")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        if v {
            Err(E::invalid_value(de::Unexpected::Bool(true), &self))
        } else {
            Ok(PolicyOptions::Disabled)
        }
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(PolicyOptions::Disabled)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(PolicyOptions::Disabled)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        PolicyOptions::deserialize(deserializer)
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = Vec::new();
        while let Some((name, EntryParameters(parameters))) =
            map.next_entry::<String, EntryParameters>()?
        {
            insert_entry(&mut entries, name, parameters);
        }
        Ok(PolicyOptions::Directives(entries))
    }
}

/// Parameters for one key; `null` and `false` both mean "not given".
struct EntryParameters(Option<DirectiveParameters>);

impl<'de> Deserialize<'de> for EntryParameters {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(EntryParametersVisitor)
    }
}

struct EntryParametersVisitor;

impl<'de> Visitor<'de> for EntryParametersVisitor {
    type Value = EntryParameters;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("directive parameters, null, or false")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        if v {
            Err(E::invalid_value(de::Unexpected::Bool(true), &self))
        } else {
            Ok(EntryParameters(None))
        }
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(EntryParameters(None))
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(EntryParameters(None))
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        EntryParameters::deserialize(deserializer)
    }

    fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        DirectiveParameters::deserialize(MapAccessDeserializer::new(map))
            .map(|p| EntryParameters(Some(p)))
    }
}
