use anyhow::{Context, Result};
use gcloud_spanner::client::{Client, ClientConfig};
use gcloud_spanner::row::Row;
use gcloud_spanner::statement::Statement;
use std::sync::Arc;

use crate::config::SpannerConfig;
use crate::models::Record;

/// Shareable Spanner-backed record store for use across async handlers
///
/// Reads rows of the `test_message` table:
///
/// ```sql
/// CREATE TABLE test_message (
///     id INT64 NOT NULL,
///     message STRING(MAX),
/// ) PRIMARY KEY (id)
/// ```
///
/// The table is provisioned outside this service; the store only reads.
#[derive(Clone)]
pub struct RecordStore {
    inner: Arc<Client>,
}

impl RecordStore {
    /// Create a new record store from configuration
    ///
    /// The gcloud-spanner library automatically detects the
    /// SPANNER_EMULATOR_HOST environment variable and connects to
    /// the emulator when set, or production Spanner otherwise.
    pub async fn from_config(config: &SpannerConfig) -> Result<Self> {
        let database_path = format!(
            "projects/{}/instances/{}/databases/{}",
            config.project, config.instance, config.database
        );

        match &config.emulator_host {
            Some(host) => tracing::info!("Connecting to Spanner emulator at: {}", host),
            None => tracing::info!("Connecting to production Spanner"),
        }

        // ClientConfig::default() automatically uses SPANNER_EMULATOR_HOST if set
        let client = Client::new(&database_path, ClientConfig::default())
            .await
            .context("Failed to create Spanner client")?;

        tracing::info!(
            "Successfully connected to Spanner database: {}",
            database_path
        );

        Ok(Self {
            inner: Arc::new(client),
        })
    }

    /// Look up the record with the given primary key
    ///
    /// # Returns
    /// * `Ok(Some(record))` - Record found and returned
    /// * `Ok(None)` - No record with that id
    /// * `Err(_)` - Spanner is unreachable or the query failed
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Record>> {
        let mut statement = Statement::new(
            "SELECT id, message FROM test_message WHERE id = @id"
        );
        statement.add_param("id", &id);

        let mut tx = self.inner
            .single()
            .await
            .context("Failed to create read transaction")?;

        let mut result_set = tx
            .query(statement)
            .await
            .context("Failed to query record from Spanner")?;

        if let Some(row) = result_set.next().await? {
            let record = record_from_row(&row)?;
            tracing::debug!("Read record with id: {}", id);
            Ok(Some(record))
        } else {
            tracing::debug!("No record with id: {}", id);
            Ok(None)
        }
    }

    /// Perform a health check by executing a simple query
    ///
    /// Runs a lightweight SELECT 1 to verify that the database connection
    /// is alive and responsive.
    pub async fn health_check(&self) -> Result<()> {
        let statement = Statement::new("SELECT 1");

        let mut tx = self.inner
            .single()
            .await
            .context("Failed to create health check transaction")?;

        let mut result_set = tx
            .query(statement)
            .await
            .context("Failed to execute health check query")?;

        if result_set.next().await?.is_some() {
            tracing::debug!("Health check query succeeded");
            Ok(())
        } else {
            Err(anyhow::anyhow!("Health check query returned no results"))
        }
    }

    /// Insert or update a record, for seeding test data
    ///
    /// There is no write endpoint; records are created and destroyed outside
    /// this service, which is why this helper is test-only.
    #[cfg(test)]
    pub async fn upsert(&self, record: &Record) -> Result<()> {
        use gcloud_spanner::mutation::insert_or_update;

        let (columns, values) = record_columns(record);
        let mutation = insert_or_update("test_message", &columns, &values);

        self.inner
            .apply(vec![mutation])
            .await
            .context("Failed to upsert record to Spanner")?;

        tracing::debug!("Upserted record with id: {}", record.id);
        Ok(())
    }
}

/// Translate a raw `test_message` row into a Record
fn record_from_row(row: &Row) -> Result<Record> {
    let id: i64 = row.column_by_name("id")?;
    let message: Option<String> = row.column_by_name("message")?;
    Ok(Record { id, message })
}

/// Translate a Record back into column names and values
///
/// Counterpart of `record_from_row` for the write path; only tests write
/// today.
#[cfg(test)]
fn record_columns(record: &Record) -> ([&'static str; 2], [&dyn gcloud_spanner::statement::ToKind; 2]) {
    (["id", "message"], [&record.id, &record.message])
}
