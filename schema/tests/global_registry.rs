//! Descriptors resolved through an installed process-wide registry.
//!
//! This binary installs its own table, so every test goes through `setup`
//! first.

use std::sync::Once;

use oxml_schema::{registry, AttributeDescriptor, NamespaceId, NamespaceRegistry, SchemaError};

const EXAMPLE: &str = "http://example.com/ns";

fn setup() {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        let mut builder = NamespaceRegistry::builder();
        let registered = builder.register(NamespaceId::new(3), "ex", EXAMPLE).is_ok();
        assert!(registered);
        assert!(registry::install(builder.build()).is_ok());
    });
}

#[test]
fn id_constructor_resolves_example_namespace() -> oxml_schema::Result<()> {
    setup();
    let color = AttributeDescriptor::new(NamespaceId::new(3), "color")?;
    assert_eq!(color.tag(), "color");
    assert_eq!(color.namespace_uri(), EXAMPLE);
    assert_eq!(color.index(), 255);
    Ok(())
}

#[test]
fn uri_constructor_matches_id_constructor() -> oxml_schema::Result<()> {
    setup();
    let by_uri = AttributeDescriptor::from_uri(EXAMPLE, "color")?;
    let by_id = AttributeDescriptor::new(NamespaceId::new(3), "color")?;
    assert_eq!(by_uri, by_id);
    assert_eq!(by_uri.namespace_uri(), by_id.namespace_uri());
    Ok(())
}

#[test]
fn empty_tag_fails() {
    setup();
    let result = AttributeDescriptor::new(NamespaceId::new(3), "");
    assert!(matches!(result, Err(SchemaError::InvalidArgument { param: "tag" })));
}

#[test]
fn unregistered_uri_fails() {
    setup();
    let result = AttributeDescriptor::from_uri("http://unregistered.example/", "color");
    assert!(matches!(result, Err(SchemaError::NamespaceNotFound { .. })));
}

#[test]
fn builtin_table_is_not_loaded() {
    setup();
    let uri = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
    assert!(registry::global().try_get_namespace_id(uri).is_none());
}

#[test]
fn second_install_is_rejected() {
    setup();
    let again = registry::install(NamespaceRegistry::builder().build());
    assert!(matches!(again, Err(SchemaError::RegistryAlreadyInitialized)));
}
