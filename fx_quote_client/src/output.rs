//! Writing the fetched bid to the local output file.
use std::path::Path;

use fx_quote_common::net::OUTPUT_LABEL;
use log::error;

use crate::error::ClientError;

/// Replace the content of `path` with the label followed by `body`.
///
/// The file is created if missing and truncated otherwise. The whole content is
/// written in one call.
pub async fn write_quote_file(path: &Path, body: &[u8]) -> Result<(), ClientError> {
    let mut content = Vec::with_capacity(OUTPUT_LABEL.len() + body.len());
    content.extend_from_slice(OUTPUT_LABEL.as_bytes());
    content.extend_from_slice(body);

    tokio::fs::write(path, content).await.map_err(|e| {
        error!("Failed to write the quote to {}: {}", path.display(), e);
        ClientError::from(e)
    })
}
