use futures::future::join_all;
use serde_json::Value;
use tracing::{debug, warn};
use crate::models::balance::NftItem;
use crate::models::errors::MetadataError;
use crate::services::api_client::TokenApi;

/// Reads the `image` field of a token's metadata JSON.
pub async fn fetch_image(api: &dyn TokenApi, token_uri: &str) -> Result<Option<String>, MetadataError> {
    let metadata = api.token_metadata(token_uri).await?;
    Ok(metadata
        .get("image")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|image| !image.is_empty())
        .map(str::to_string))
}

/// Resolves every item's image concurrently. A failed lookup leaves that
/// item's image unset; the item itself is always kept, in input order.
pub async fn resolve_images(api: &dyn TokenApi, items: Vec<NftItem>) -> Vec<NftItem> {
    let lookups = items.into_iter().map(|item| async move {
        let image = match item.token_uri.as_deref() {
            Some(uri) if !uri.trim().is_empty() => match fetch_image(api, uri).await {
                Ok(image) => {
                    debug!(token_id = %item.token_id, found = image.is_some(), "Resolved token metadata");
                    image
                }
                Err(e) => {
                    warn!(token_id = %item.token_id, token_uri = %uri, error = %e, "Failed to fetch token URI");
                    None
                }
            },
            _ => None,
        };
        NftItem { image, ..item }
    });

    join_all(lookups).await
}
