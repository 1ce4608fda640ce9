//! Integration tests for configured, on-disk schema sources
//!
//! Each test writes a taxonomy configuration plus Turtle documents into a
//! temporary directory and drives the service through `TaxonomyConfig`.

use std::fs;
use std::path::Path;
use std::sync::Arc;
use taxonomy_core::{TaxonomyConfig, TaxonomyError, TaxonomyService};
use tempfile::TempDir;

const CONFIG: &str = r#"
apiVersion: taxonomy/v1
kind: TaxonomySet
spec:
  resourceRoot: schemas
  defaultVariant: retail
  variants:
    - name: logistics
      namespace: http://taxonomy.sirktek.no/logistics#
      resource: /taxonomy/logistics-base.ttl
    - name: retail
      namespace: http://example.org/retail#
      resource: /taxonomy/retail.ttl
"#;

const PREFIXES: &str = r#"
@prefix rdf:  <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix xsd:  <http://www.w3.org/2001/XMLSchema#> .
@prefix r:    <http://example.org/retail#> .
"#;

const RETAIL: &str = r#"
r:Store a rdfs:Class ; rdfs:label "Store"@en , "Butikk"@no .
r:Outlet a rdfs:Class ; rdfs:subClassOf r:Store ; rdfs:label "Outlet"@en .
r:Product a rdfs:Class ; rdfs:label "Product"@en .

r:address a rdf:Property ; rdfs:domain r:Store ; rdfs:range xsd:string .
r:price a rdf:Property ; rdfs:domain r:Product ; rdfs:range xsd:decimal .
"#;

fn write_schema(root: &Path, body: &str) {
    let dir = root.join("schemas/taxonomy");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("retail.ttl"), format!("{}{}", PREFIXES, body)).unwrap();
}

fn setup(body: &str) -> (TempDir, TaxonomyConfig) {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("taxonomy.yaml");
    fs::write(&config_path, CONFIG).unwrap();
    write_schema(temp.path(), body);

    let config = TaxonomyConfig::load(&config_path).unwrap();
    (temp, config)
}

#[test]
fn test_default_variant_loads_from_disk() {
    let (_temp, config) = setup(RETAIL);
    let service = TaxonomyService::from_config(&config, None).unwrap();

    let stats = service.get_stats().unwrap();
    assert_eq!(stats.total_categories, 3);
    assert_eq!(stats.root_categories, 2);
    assert_eq!(stats.total_properties, 2);

    let outlet = service.get_category_by_class_name("Outlet").unwrap().unwrap();
    assert_eq!(outlet.parent().unwrap().class_name(), "Store");
}

#[test]
fn test_embedded_variant_still_available() {
    let (_temp, config) = setup(RETAIL);
    let service = TaxonomyService::from_config(&config, Some("logistics")).unwrap();
    assert!(service.is_base_taxonomy_class("Location").unwrap());
    assert!(!service.is_base_taxonomy_class("Store").unwrap());
}

#[test]
fn test_unknown_variant() {
    let (_temp, config) = setup(RETAIL);
    let result = TaxonomyService::from_config(&config, Some("pharma"));
    assert!(matches!(result, Err(TaxonomyError::UnknownVariant(_))));
}

#[test]
fn test_missing_document_is_source_unavailable() {
    let (temp, config) = setup(RETAIL);
    fs::remove_file(temp.path().join("schemas/taxonomy/retail.ttl")).unwrap();

    let service = TaxonomyService::from_config(&config, None).unwrap();
    let err = service.load_base_taxonomy().unwrap_err();
    assert!(matches!(err, TaxonomyError::SourceUnavailable(_)));
    assert!(service.cached_taxonomy().is_none());
}

#[test]
fn test_malformed_document_is_parse_error() {
    let (_temp, config) = setup("r:Store a rdfs:Class ; rdfs:label \"unterminated .");
    let service = TaxonomyService::from_config(&config, None).unwrap();

    let err = service.load_base_taxonomy().unwrap_err();
    assert!(matches!(err, TaxonomyError::SchemaParse(_)));
    assert!(!err.is_structural());
}

#[test]
fn test_dangling_parent_is_structural_error() {
    let (_temp, config) = setup("r:Outlet a rdfs:Class ; rdfs:subClassOf r:Store .");
    let service = TaxonomyService::from_config(&config, None).unwrap();

    let err = service.load_base_taxonomy().unwrap_err();
    assert!(matches!(err, TaxonomyError::UnresolvedParent { .. }));
    assert!(err.is_structural());
}

#[test]
fn test_unknown_domain_is_structural_error() {
    let (_temp, config) = setup(
        "r:Store a rdfs:Class .\nr:sku a rdf:Property ; rdfs:domain r:Product .",
    );
    let service = TaxonomyService::from_config(&config, None).unwrap();

    let err = service.load_base_taxonomy().unwrap_err();
    assert!(matches!(err, TaxonomyError::UnresolvedDomain { .. }));
}

#[test]
fn test_empty_taxonomy_is_not_an_error() {
    let (_temp, config) = setup("");
    let service = TaxonomyService::from_config(&config, None).unwrap();

    let tree = service.load_base_taxonomy().unwrap();
    assert!(tree.is_empty());

    let stats = service.get_stats().unwrap();
    assert_eq!(stats.total_categories, 0);
    assert_eq!(stats.root_categories, 0);
}

#[test]
fn test_reload_picks_up_changed_document() {
    let (temp, config) = setup(RETAIL);
    let service = TaxonomyService::from_config(&config, None).unwrap();
    let first = service.load_base_taxonomy().unwrap();
    assert!(!first.contains("Kiosk"));

    write_schema(
        temp.path(),
        &format!("{}\nr:Kiosk a rdfs:Class ; rdfs:subClassOf r:Store .", RETAIL),
    );

    // cached until an explicit reload
    assert!(!service.is_base_taxonomy_class("Kiosk").unwrap());

    let reloaded = service.reload_base_taxonomy().unwrap();
    assert!(reloaded.contains("Kiosk"));
    assert_eq!(service.get_stats().unwrap().total_categories, 4);
    assert!(!first.contains("Kiosk"));
}

#[test]
fn test_failed_reload_keeps_valid_cache() {
    let (temp, config) = setup(RETAIL);
    let service = TaxonomyService::from_config(&config, None).unwrap();
    let first = service.load_base_taxonomy().unwrap();

    write_schema(temp.path(), "r:Outlet a rdfs:Class ; rdfs:subClassOf r:Missing .");
    assert!(service.reload_base_taxonomy().is_err());

    let cached = service.load_base_taxonomy().unwrap();
    assert!(Arc::ptr_eq(&first, &cached));
    assert!(service.is_base_taxonomy_class("Store").unwrap());
}
