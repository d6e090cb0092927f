//! Version properties and version references.
//!
//! A dependency or BOM version is either a literal value or a reference to a
//! build property. "Internal" properties are exposed to the script under a
//! camel-cased name derived from their dotted/dashed key; external properties
//! keep the literal key. The same name must be used at the declaration site
//! and in every interpolation, so the transform lives here and nowhere else.

/// A version pin exposed as a build property.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionProperty {
    key: String,
    internal: bool,
}

impl VersionProperty {
    pub fn new(key: impl Into<String>, internal: bool) -> Self {
        Self {
            key: key.into(),
            internal,
        }
    }

    /// A property accessed through its camel-cased script name.
    pub fn internal(key: impl Into<String>) -> Self {
        Self::new(key, true)
    }

    /// A property accessed through its literal (dotted/dashed) key.
    pub fn external(key: impl Into<String>) -> Self {
        Self::new(key, false)
    }

    /// The original key, untransformed. Sorting uses this.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn is_internal(&self) -> bool {
        self.internal
    }

    /// The name under which the property appears in the generated script:
    /// camel-cased for internal properties, the key itself otherwise.
    pub fn script_name(&self) -> String {
        if self.internal {
            camel_case(&self.key)
        } else {
            self.key.clone()
        }
    }
}

/// A literal version or a reference to a [`VersionProperty`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionReference {
    Value(String),
    Property(VersionProperty),
}

impl VersionReference {
    pub fn value(version: impl Into<String>) -> Self {
        Self::Value(version.into())
    }

    /// Reference an internal property by key.
    pub fn property(key: impl Into<String>) -> Self {
        Self::Property(VersionProperty::internal(key))
    }

    pub fn of_property(property: VersionProperty) -> Self {
        Self::Property(property)
    }
}

/// `spring.boot-version` → `springBootVersion`: drop `.` and `-`, capitalize
/// the letter that follows each.
fn camel_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut upper_next = false;
    for c in key.chars() {
        if c == '.' || c == '-' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_case_dotted_key() {
        assert_eq!(camel_case("internal.property"), "internalProperty");
    }

    #[test]
    fn camel_case_dashed_key() {
        assert_eq!(camel_case("test-version"), "testVersion");
    }

    #[test]
    fn camel_case_mixed_separators() {
        assert_eq!(camel_case("spring.boot-version"), "springBootVersion");
    }

    #[test]
    fn camel_case_plain_key_unchanged() {
        assert_eq!(camel_case("alpha"), "alpha");
    }

    #[test]
    fn internal_property_uses_camel_script_name() {
        let property = VersionProperty::internal("kotlin.version");
        assert_eq!(property.script_name(), "kotlinVersion");
        assert_eq!(property.key(), "kotlin.version");
    }

    #[test]
    fn external_property_keeps_literal_name() {
        let property = VersionProperty::external("acme.version");
        assert_eq!(property.script_name(), "acme.version");
    }

    #[test]
    fn property_reference_defaults_to_internal() {
        let VersionReference::Property(property) = VersionReference::property("kotlin.version")
        else {
            panic!("expected property reference");
        };
        assert!(property.is_internal());
    }
}
