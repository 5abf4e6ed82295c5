//! Load-once cache of the export tree.
//!
//! The cache is an ordinary value owned by whoever orchestrates exports. It
//! reads its source at most once successfully: concurrent first callers wait
//! on the same load and all receive the same `Arc`. A failed load is not
//! remembered, so the next caller reads the source again and gets the same
//! configuration error.

use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use crate::error::SchemaError;
use crate::flatten::flatten;
use crate::reader::SchemaReader;
use crate::source::SchemaSource;
use crate::tree::ExportSchema;

pub struct SchemaCache<S> {
    reader: SchemaReader<S>,
    schema: OnceLock<Arc<ExportSchema>>,
    init: Mutex<()>,
}

impl<S: SchemaSource> SchemaCache<S> {
    pub const fn new(source: S) -> Self {
        Self {
            reader: SchemaReader::new(source),
            schema: OnceLock::new(),
            init: Mutex::new(()),
        }
    }

    /// The cached tree, loading it on first use.
    pub fn get(&self) -> Result<Arc<ExportSchema>, SchemaError> {
        if let Some(schema) = self.schema.get() {
            return Ok(Arc::clone(schema));
        }

        // A panicking loader leaves nothing behind to repair.
        let _guard = self.init.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(schema) = self.schema.get() {
            return Ok(Arc::clone(schema));
        }

        let schema = Arc::new(self.reader.load_schema()?);
        tracing::debug!(source = %self.reader.source().name(), "export schema cached");
        Ok(Arc::clone(self.schema.get_or_init(|| schema)))
    }

    /// Top-level relation names of the cached tree.
    pub fn flatten(&self) -> Result<Vec<String>, SchemaError> {
        Ok(flatten(&*self.get()?))
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.schema.get().is_some()
    }
}

impl<S> std::fmt::Debug for SchemaCache<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaCache")
            .field("loaded", &self.schema.get().is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::BundledSource;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FlakySource {
        reads: AtomicUsize,
    }

    impl SchemaSource for FlakySource {
        fn name(&self) -> String {
            "flaky".to_string()
        }

        fn read(&self) -> Result<String, SchemaError> {
            if self.reads.fetch_add(1, Ordering::SeqCst) == 0 {
                Err(SchemaError::Load {
                    source_name: self.name(),
                    reason: "not yet mounted".to_string(),
                })
            } else {
                Ok("- labels\n".to_string())
            }
        }
    }

    #[test]
    fn second_get_returns_same_instance() {
        let cache = SchemaCache::new(BundledSource);
        assert!(!cache.is_loaded());

        let first = cache.get().unwrap();
        let second = cache.get().unwrap();
        assert!(cache.is_loaded());
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn failed_load_is_not_cached() {
        let cache = SchemaCache::new(FlakySource {
            reads: AtomicUsize::new(0),
        });

        assert!(cache.get().is_err());
        assert!(!cache.is_loaded());
        assert_eq!(cache.flatten().unwrap(), vec!["labels"]);
    }
}
