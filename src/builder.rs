// Command Builder

use crate::client::Namecheap;
use crate::types::*;
use crate::utils::xml_extractor::{decode_response, FromXml};

use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use url::Url;

/// Parameters and dispatch for a single API command.
///
/// A builder is created per call with [`Namecheap::command`] and consumed by
/// [`send`](CommandBuilder::send), so parameters can never leak from one
/// request into the next.
pub struct CommandBuilder {
    client: Arc<Namecheap>,
    command: String,
    params: Vec<(String, String)>,
    cancel: Option<CancellationToken>,
}

impl CommandBuilder {
    pub(crate) fn from_client(client: Arc<Namecheap>, command: impl Into<String>) -> Self {
        Self {
            client,
            command: command.into(),
            params: Vec::new(),
            cancel: None,
        }
    }

    /// Append one parameter. Names may repeat; order is preserved.
    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((name.into(), value.into()));
        self
    }

    /// Append a parameter only when a value is present
    pub fn param_opt<V: Into<String>>(self, name: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.param(name, value),
            None => self,
        }
    }

    /// Append a batch of parameters in iteration order
    pub fn params<I, K, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.params
            .extend(params.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Abort the call when the token is cancelled
    pub fn cancel_on(mut self, token: Option<CancellationToken>) -> Self {
        self.cancel = token;
        self
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    /// Parameters added so far, without the credential parameters
    pub fn parameters(&self) -> &[(String, String)] {
        &self.params
    }

    /// Full request URL: credentials, then `Command`, then every parameter
    /// in insertion order, all percent-encoded.
    pub fn url(&self) -> NamecheapResult<Url> {
        let config = self.client.config();
        let mut url = Url::parse(self.client.api_url()).map_err(|e| {
            NamecheapError::Config(format!("invalid API url {}: {}", self.client.api_url(), e))
        })?;

        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("ApiUser", &config.api_user)
                .append_pair("UserName", &config.user_name)
                .append_pair("ApiKey", config.api_key.as_str())
                .append_pair("ClientIp", &config.client_ip.to_string())
                .append_pair("Command", &self.command);
            for (name, value) in &self.params {
                query.append_pair(name, value);
            }
        }

        Ok(url)
    }

    fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().map_or(false, |t| t.is_cancelled())
    }

    /// Send the command and decode its result element.
    ///
    /// Makes exactly one HTTP call. A cancelled token wins over any response
    /// that arrives, so a cancelled call never yields a decoded value.
    pub async fn send<T: FromXml>(self) -> NamecheapResult<T> {
        let url = self.url()?;

        tracing::debug!(
            command = %self.command,
            params = self.params.len(),
            "dispatching Namecheap command"
        );

        if self.is_cancelled() {
            return Err(NamecheapError::cancelled(&self.command));
        }

        let body = match &self.cancel {
            Some(token) => tokio::select! {
                biased;
                _ = token.cancelled() => return Err(NamecheapError::cancelled(&self.command)),
                body = self.execute_request(url) => body?,
            },
            None => self.execute_request(url).await?,
        };

        if self.is_cancelled() {
            return Err(NamecheapError::cancelled(&self.command));
        }

        let result = decode_response::<T>(&self.command, &body);

        if self.is_cancelled() {
            return Err(NamecheapError::cancelled(&self.command));
        }

        tracing::debug!(
            command = %self.command,
            ok = result.is_ok(),
            "Namecheap command completed"
        );
        result
    }

    /// Issue the GET and read the whole body
    async fn execute_request(&self, url: Url) -> NamecheapResult<String> {
        let response = self.client.http_client.get(url).send().await?;
        self.handle_error_response(response).await
    }

    /// Namecheap reports business errors inside a 200 response, so a
    /// non-success status is only a transport error when the body is not an
    /// API envelope.
    async fn handle_error_response(&self, response: reqwest::Response) -> NamecheapResult<String> {
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() || body.contains("<ApiResponse") {
            return Ok(body);
        }

        Err(NamecheapError::request_error(
            format!("{} returned HTTP {}", self.command, status),
            Some(status.as_u16()),
            None::<std::io::Error>,
            Some(concat!(file!(), ":", line!())),
        ))
    }
}
