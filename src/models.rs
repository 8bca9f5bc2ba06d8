/// A single row of the `test_message` table
///
/// `message` is nullable in the schema, so it maps to an `Option` here
/// rather than an empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: i64,
    pub message: Option<String>,
}
