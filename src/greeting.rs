use crate::store::RecordStore;

/// Failure classes of a greeting lookup
///
/// Absence and backend failure are distinct conditions: the HTTP surface
/// turns the former into a 404 and the latter into a 503.
#[derive(Debug)]
pub enum LookupError {
    /// No record with the given id
    NotFound(i64),
    /// The record store could not answer
    Store(anyhow::Error),
}

/// Composes record store lookups into greeting strings
///
/// Holds no state of its own between calls; the store is injected at
/// construction time.
#[derive(Clone)]
pub struct GreetingService {
    store: RecordStore,
}

impl GreetingService {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }

    /// Build the greeting for the record with the given id
    ///
    /// A single synchronous store call per invocation; no retries, no
    /// caching. A missing row is a `NotFound` error, never a crash.
    pub async fn hello_for(&self, id: i64) -> Result<String, LookupError> {
        match self.store.get_by_id(id).await.map_err(LookupError::Store)? {
            Some(record) => {
                tracing::debug!("Greeting record with id: {}", id);
                Ok(greeting(record.message.as_deref()))
            }
            None => {
                tracing::info!("No record with id: {}", id);
                Err(LookupError::NotFound(id))
            }
        }
    }
}

/// Compose the greeting string for a record's message
///
/// A NULL message greets with an empty message, never a literal "null".
pub fn greeting(message: Option<&str>) -> String {
    format!("Hello {}", message.unwrap_or(""))
}
