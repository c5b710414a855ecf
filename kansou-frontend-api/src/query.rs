use std::fmt;

use gloo_net::http::Request;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{de::DeserializeOwned, Serialize};

use crate::{into_empty, into_json, BackendClient, Result};

// Operators and column lists of the REST dialect
// must reach the server unescaped.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'*')
    .remove(b',')
    .remove(b'.')
    .remove(b'-')
    .remove(b'_');

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Ascending,
    Descending,
}

impl Order {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

/// A query against a single table of the REST endpoint.
#[derive(Debug)]
#[must_use]
pub struct Query<'a> {
    client: &'a BackendClient,
    table: String,
    params: Vec<(String, String)>,
}

impl<'a> Query<'a> {
    pub(crate) fn new(client: &'a BackendClient, table: &str) -> Self {
        Self {
            client,
            table: table.to_owned(),
            params: vec![],
        }
    }

    pub fn select(self, columns: &str) -> Self {
        self.param("select", columns)
    }

    pub fn order(self, column: &str, order: Order) -> Self {
        let value = format!("{column}.{}", order.as_str());
        self.param("order", value)
    }

    pub fn eq(self, column: &str, value: impl fmt::Display) -> Self {
        let value = format!("eq.{value}");
        self.param(column, value)
    }

    fn param(mut self, key: &str, value: impl Into<String>) -> Self {
        self.params.push((key.to_owned(), value.into()));
        self
    }

    #[must_use]
    pub fn url(&self) -> String {
        let mut url = format!("{}/rest/v1/{}", self.client.config().url, self.table);
        for (i, (key, value)) in self.params.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            let key = utf8_percent_encode(key, QUERY_VALUE);
            let value = utf8_percent_encode(value, QUERY_VALUE);
            url.push_str(&format!("{sep}{key}={value}"));
        }
        url
    }

    /// Fetch all matching rows.
    pub async fn execute<T>(self) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        self.client.ensure_fresh_session().await;
        let url = self.url();
        log::debug!("GET {url}");
        let response = self.client.request(Request::get(&url)).send().await?;
        into_json(response).await
    }

    /// Insert rows without returning them.
    pub async fn insert<T>(self, rows: &[T]) -> Result<()>
    where
        T: Serialize,
    {
        self.client.ensure_fresh_session().await;
        let url = self.url();
        log::debug!("POST {url}");
        let response = self
            .client
            .request(Request::post(&url))
            .header("Prefer", "return=minimal")
            .json(&rows)?
            .send()
            .await?;
        into_empty(response).await
    }

    /// Delete all matching rows.
    pub async fn delete(self) -> Result<()> {
        self.client.ensure_fresh_session().await;
        let url = self.url();
        log::debug!("DELETE {url}");
        let response = self
            .client
            .request(Request::delete(&url))
            .header("Prefer", "return=minimal")
            .send()
            .await?;
        into_empty(response).await
    }
}
