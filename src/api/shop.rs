//! Shop sub-client: item listings and single items.

use std::borrow::Borrow;

use serde_json::Value;
use url::form_urlencoded;

use crate::client::GsaClient;
use crate::error::GsaError;

/// Sub-client for the donation shop.
pub struct Shop<'a> {
    pub(crate) client: &'a GsaClient,
}

impl<'a> Shop<'a> {
    /// `GET shop[/{route}]`. `None` or an empty route lists the shop root.
    pub async fn items(&self, route: Option<&str>) -> Result<Value, GsaError> {
        let path = items_path(route, std::iter::empty::<(&str, &str)>());
        self.client.http.get(&path).await
    }

    /// `GET shop[/{route}][?query]`, query pairs encoded in order.
    ///
    /// ```rust,ignore
    /// client.shop().items_with_query(Some("featured"), [("page", "2")]).await?;
    /// ```
    pub async fn items_with_query<I, K, V>(
        &self,
        route: Option<&str>,
        query: I,
    ) -> Result<Value, GsaError>
    where
        I: IntoIterator,
        I::Item: Borrow<(K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let path = items_path(route, query);
        self.client.http.get(&path).await
    }

    /// `GET shop/{id}`
    pub async fn item(&self, id: &str) -> Result<Value, GsaError> {
        self.client.http.get(&format!("shop/{}", id)).await
    }
}

fn items_path<I, K, V>(route: Option<&str>, query: I) -> String
where
    I: IntoIterator,
    I::Item: Borrow<(K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut path = String::from("shop");
    if let Some(route) = route.filter(|r| !r.is_empty()) {
        path.push('/');
        path.push_str(route);
    }

    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(query)
        .finish();
    if !query.is_empty() {
        path.push('?');
        path.push_str(&query);
    }
    path
}
