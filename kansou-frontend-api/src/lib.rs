//! Client of the hosted backend.
//!
//! A single [`BackendClient`] is created when the application starts
//! and handed to every page that needs access to the backend.

use gloo_net::http::Response;
use serde::de::DeserializeOwned;
use thiserror::Error;

use kansou_boundary as boundary;

mod auth;
mod client;
mod config;
mod ports;
mod query;

pub use self::{client::*, config::*, query::*};

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    #[error("{0}")]
    Fetch(String),

    #[error("{0}")]
    Api(#[from] boundary::Error),

    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for Error {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(err) => Self::Decode(err.to_string()),
            err => Self::Fetch(format!("{err}")),
        }
    }
}

pub async fn into_json<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    // ensure we've got 2xx status
    if response.ok() {
        Ok(response.json().await?)
    } else {
        Err(into_api_error(response).await)
    }
}

/// Check the status of a response without a (relevant) body.
pub async fn into_empty(response: Response) -> Result<()> {
    if response.ok() {
        Ok(())
    } else {
        Err(into_api_error(response).await)
    }
}

async fn into_api_error(response: Response) -> Error {
    match response.json::<boundary::Error>().await {
        Ok(err) => err.into(),
        Err(err) => {
            log::debug!("Unable to decode error response: {err}");
            boundary::Error::new(format!(
                "HTTP {} {}",
                response.status(),
                response.status_text()
            ))
            .into()
        }
    }
}
