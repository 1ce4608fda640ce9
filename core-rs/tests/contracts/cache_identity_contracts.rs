// Cache Identity Contract Tests
//
// These tests verify the identity semantics of the taxonomy cache.
// Consumers compare Arc pointers to detect whether a reload happened.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use taxonomy_core::schema::{ClassDefinition, SchemaDefinitions, StaticLocator};
use taxonomy_core::{
    Result, SchemaSourceLocator, SchemaSourceReader, TaxonomyError, TaxonomyService,
};

const NS: &str = "http://example.org/contract#";
const LOCATOR: StaticLocator = StaticLocator::new(NS, "/taxonomy/contract.ttl");

/// Returns byte-identical definitions on every read and counts the reads
struct CountingReader {
    reads: Arc<AtomicUsize>,
}

impl SchemaSourceReader for CountingReader {
    fn read(&self, _locator: &dyn SchemaSourceLocator) -> Result<SchemaDefinitions> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(SchemaDefinitions {
            classes: vec![
                ClassDefinition::new(format!("{}Location", NS)),
                ClassDefinition::new(format!("{}LocationType", NS)),
            ],
            properties: vec![],
        })
    }
}

/// Fails every read
struct BrokenReader;

impl SchemaSourceReader for BrokenReader {
    fn read(&self, locator: &dyn SchemaSourceLocator) -> Result<SchemaDefinitions> {
        Err(TaxonomyError::SourceUnavailable(locator.resource_path().to_string()))
    }
}

fn counting_service() -> (TaxonomyService, Arc<AtomicUsize>) {
    let reads = Arc::new(AtomicUsize::new(0));
    let service = TaxonomyService::new(
        LOCATOR,
        CountingReader {
            reads: Arc::clone(&reads),
        },
    );
    (service, reads)
}

/// WHY: Repeated loads must return the very same tree instance
/// REASON: Callers use pointer identity to detect "no reload happened"
/// BREAKS: Change detection in every consumer holding a tree
#[test]
fn repeated_loads_are_pointer_identical() {
    let (service, reads) = counting_service();

    let first = service.load_base_taxonomy().unwrap();
    for _ in 0..5 {
        assert!(Arc::ptr_eq(&first, &service.load_base_taxonomy().unwrap()));
    }
    assert_eq!(reads.load(Ordering::SeqCst), 1, "source must be read once");
}

/// WHY: Reload must produce a new identity even for identical source content
/// REASON: An explicit reload is a new cache generation
/// BREAKS: Consumers that invalidate derived state on identity change
#[test]
fn reload_always_yields_new_identity() {
    let (service, _) = counting_service();

    let mut previous = service.load_base_taxonomy().unwrap();
    for _ in 0..3 {
        let reloaded = service.reload_base_taxonomy().unwrap();
        assert!(!Arc::ptr_eq(&previous, &reloaded));
        assert_ne!(previous.id(), reloaded.id());
        previous = reloaded;
    }
}

/// WHY: After reload, loads return the reloaded instance
/// REASON: The cache holds exactly one generation at a time
#[test]
fn load_after_reload_returns_reloaded_instance() {
    let (service, _) = counting_service();

    service.load_base_taxonomy().unwrap();
    let reloaded = service.reload_base_taxonomy().unwrap();
    assert!(Arc::ptr_eq(&reloaded, &service.load_base_taxonomy().unwrap()));
    assert!(Arc::ptr_eq(&reloaded, &service.cached_taxonomy().unwrap()));
}

/// WHY: Concurrent first loads must build once and agree on one instance
/// REASON: Check-and-populate is a single critical section
/// BREAKS: Duplicate schema reads and diverging trees under load
#[test]
fn concurrent_first_loads_share_one_build() {
    let (service, reads) = counting_service();

    let trees: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..16)
            .map(|_| scope.spawn(|| service.load_base_taxonomy().unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(reads.load(Ordering::SeqCst), 1);
    assert!(trees.iter().all(|t| Arc::ptr_eq(t, &trees[0])));
}

/// WHY: Readers racing a reload see a complete old or new tree
/// REASON: The cache swap is a single reference replacement
#[test]
fn readers_during_reload_see_complete_trees() {
    let (service, _) = counting_service();
    service.load_base_taxonomy().unwrap();

    std::thread::scope(|scope| {
        scope.spawn(|| {
            for _ in 0..20 {
                service.reload_base_taxonomy().unwrap();
            }
        });
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..50 {
                    let stats = service.get_stats().unwrap();
                    assert_eq!(stats.total_categories, 2);
                    assert_eq!(stats.root_categories, 2);
                }
            });
        }
    });
}

/// WHY: A broken source is an error, never an empty taxonomy
/// REASON: Callers must tell "broken schema" from "valid but empty"
#[test]
fn load_failure_is_not_cached_as_empty() {
    let service = TaxonomyService::new(LOCATOR, BrokenReader);

    assert!(matches!(
        service.load_base_taxonomy(),
        Err(TaxonomyError::SourceUnavailable(_))
    ));
    assert!(service.get_stats().is_err());
    assert!(service.get_category_by_class_name("Location").is_err());
    assert!(service.cached_taxonomy().is_none());
}
