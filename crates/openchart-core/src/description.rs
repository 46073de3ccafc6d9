//! Resource descriptions: the ordered property sets a resource exposes per
//! representation, and the property sets it accepts on create/update.
//!
//! A description is built once when a resource handler is constructed and is
//! read-only afterwards. Insertion order defines output field order; the
//! backing map makes duplicate property names structurally impossible.

use indexmap::IndexMap;

use crate::representation::Representation;

/// How a single property appears in a description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PropertySpec {
    /// Whether the property must be present in a create/update payload.
    pub required: bool,
    /// For relation-valued properties, the representation at which the
    /// related entity expands. `Ref` keeps related entities from expanding
    /// recursively without bound.
    pub nested: Option<Representation>,
}

/// A navigation link appended after the ordered properties.
///
/// A URI starting with `.` is resolved against the entity's canonical URI at
/// serialization time, so `.` is the self link and `.?v=full` points at the
/// full representation of the same entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub rel: String,
    pub uri: String,
}

impl Link {
    pub fn new(rel: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            rel: rel.into(),
            uri: uri.into(),
        }
    }
}

/// An ordered set of properties plus navigation links.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceDescription {
    properties: IndexMap<String, PropertySpec>,
    links: Vec<Link>,
}

impl ResourceDescription {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an optional property. Re-adding an existing name replaces its
    /// spec but keeps the original position.
    pub fn add_property(&mut self, name: impl Into<String>) -> &mut Self {
        self.properties.insert(name.into(), PropertySpec::default());
        self
    }

    /// Adds an optional relation-valued property expanded at `nested`.
    pub fn add_property_with(
        &mut self,
        name: impl Into<String>,
        nested: Representation,
    ) -> &mut Self {
        self.properties.insert(
            name.into(),
            PropertySpec {
                required: false,
                nested: Some(nested),
            },
        );
        self
    }

    /// Adds a property that must be present in a write payload.
    pub fn add_required_property(&mut self, name: impl Into<String>) -> &mut Self {
        self.properties.insert(
            name.into(),
            PropertySpec {
                required: true,
                nested: None,
            },
        );
        self
    }

    /// Appends a link to the entity's canonical URI.
    pub fn add_self_link(&mut self) -> &mut Self {
        self.add_link("self", ".")
    }

    /// Appends an arbitrary navigation link.
    pub fn add_link(&mut self, rel: impl Into<String>, uri: impl Into<String>) -> &mut Self {
        self.links.push(Link::new(rel, uri));
        self
    }

    /// Properties in insertion order.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &PropertySpec)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Names of properties flagged required, in insertion order.
    pub fn required_properties(&self) -> impl Iterator<Item = &str> {
        self.properties
            .iter()
            .filter(|(_, spec)| spec.required)
            .map(|(k, _)| k.as_str())
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    #[must_use]
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ResourceDescription {
        let mut description = ResourceDescription::new();
        description
            .add_property("display")
            .add_property("uuid")
            .add_required_property("identifier")
            .add_property_with("identifierType", Representation::Ref)
            .add_property("preferred")
            .add_self_link()
            .add_link("full", ".?v=full");
        description
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let description = sample();
        let names: Vec<&str> = description.properties().map(|(n, _)| n).collect();
        assert_eq!(
            names,
            vec!["display", "uuid", "identifier", "identifierType", "preferred"]
        );
    }

    #[test]
    fn test_no_duplicate_names() {
        let mut description = sample();
        description.add_property("uuid");
        let names: Vec<&str> = description.properties().map(|(n, _)| n).collect();
        let mut deduped = names.clone();
        deduped.dedup();
        assert_eq!(names.len(), 5);
        assert_eq!(names, deduped);
        // position of the re-added name is unchanged
        assert_eq!(names[1], "uuid");
    }

    #[test]
    fn test_required_properties() {
        let description = sample();
        let required: Vec<&str> = description.required_properties().collect();
        assert_eq!(required, vec!["identifier"]);
    }

    #[test]
    fn test_nested_representation() {
        let description = sample();
        let (_, spec) = description
            .properties()
            .find(|(n, _)| *n == "identifierType")
            .unwrap();
        assert_eq!(spec.nested, Some(Representation::Ref));
    }

    #[test]
    fn test_links() {
        let description = sample();
        assert_eq!(description.links().len(), 2);
        assert_eq!(description.links()[0], Link::new("self", "."));
        assert_eq!(description.links()[1], Link::new("full", ".?v=full"));
    }

    #[test]
    fn test_stable_across_clones() {
        let description = sample();
        let clone = description.clone();
        let a: Vec<&str> = description.properties().map(|(n, _)| n).collect();
        let b: Vec<&str> = clone.properties().map(|(n, _)| n).collect();
        assert_eq!(a, b);
    }
}
