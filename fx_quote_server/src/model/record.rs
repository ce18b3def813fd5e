//! History row built from a fetched quote.

use fx_quote_common::Quote;
use uuid::Uuid;

/// A quote ready to be inserted, tagged with a freshly generated id.
///
/// The id is not part of the upstream shape; it exists only in the history table.
#[derive(Debug, Clone)]
pub struct QuoteRecord<'a> {
    /// Random UUID v4 in its hyphenated string form.
    pub id: String,
    /// The quote as received from upstream.
    pub quote: &'a Quote,
}

impl<'a> QuoteRecord<'a> {
    /// Tag `quote` with a new unique id.
    pub fn new(quote: &'a Quote) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            quote,
        }
    }
}
