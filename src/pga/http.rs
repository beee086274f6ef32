use tracing::debug;

use crate::{
    core::{stats_headers, ApiClient, Table},
    error::GolfError,
    pga::{
        query::StatQuery,
        types::{GraphQlResponse, StatDetails},
    },
    Result,
};

/// Run the `StatDetails` query once and return the typed result.
///
/// Non-2xx statuses and bodies without `data.statDetails.rows` are errors.
pub async fn fetch_stat_details(
    client: &ApiClient,
    api_key: &str,
    query: &StatQuery,
) -> Result<StatDetails> {
    let body = client
        .post_json(
            &client.endpoints().stats_url,
            &query.to_request(),
            stats_headers(api_key)?,
        )
        .await?;

    let resp: GraphQlResponse = serde_json::from_value(body)?;
    match resp.data {
        Some(data) => {
            if !resp.errors.is_empty() {
                debug!(errors = resp.errors.len(), "statDetails returned partial errors");
            }
            Ok(data.stat_details)
        }
        None if !resp.errors.is_empty() => Err(GolfError::GraphQl {
            messages: resp.errors.into_iter().map(|e| e.message).collect(),
        }),
        None => Err(GolfError::NoData),
    }
}

/// Per-player stat table for `query`.
pub async fn fetch_stat_table(
    client: &ApiClient,
    api_key: &str,
    query: &StatQuery,
) -> Result<Table> {
    Ok(fetch_stat_details(client, api_key, query).await?.to_table())
}
