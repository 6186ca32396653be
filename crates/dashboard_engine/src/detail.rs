use dashboard_core::{DetailData, KeywordId};

use crate::{Gateway, GatewayError};

/// Fetches articles and trend for one keyword with both requests in flight at
/// once. The first failure aborts the other request and no partial data is
/// returned.
pub async fn fetch_detail(
    gateway: &dyn Gateway,
    keyword_id: KeywordId,
) -> Result<DetailData, GatewayError> {
    let (articles, trend) = futures_util::try_join!(
        gateway.list_articles(keyword_id),
        gateway.list_trend(keyword_id)
    )?;
    Ok(DetailData { articles, trend })
}
