// ----------------------------------------------------------------------------
// This source code contains derived artifacts from seanmonstar's `reqwest`.
// for further information(including license information),
// please visit their repository: https://github.com/seanmonstar/reqwest .
// ----------------------------------------------------------------------------
use std::{future::Future, time::Duration};

use http::{header::AUTHORIZATION, Method};
use reqwest::{Error, RequestBuilder as ReqwestRequestBuilder, Response, Url};
use serde::Serialize;

use crate::{SecretsProvider, Signer};

/// A `reqwest::RequestBuilder` that signs itself on `send`.
///
/// The URL and the form body are captured alongside the inner builder,
/// since the signature has to cover them and reqwest does not expose them
/// back.
pub struct RequestBuilder<'a, TSecretsProvider>
where
    TSecretsProvider: SecretsProvider,
{
    method: Method,
    inner: ReqwestRequestBuilder,
    signer: Signer<'a, TSecretsProvider>,
    url: Option<Url>,
    body: String,
}

impl<'a, TSecretsProvider> RequestBuilder<'a, TSecretsProvider>
where
    TSecretsProvider: SecretsProvider,
{
    pub(crate) fn new(
        builder: ReqwestRequestBuilder,
        method: Method,
        url: Option<Url>,
        signer: Signer<'a, TSecretsProvider>,
    ) -> Self {
        RequestBuilder {
            inner: builder,
            method,
            url,
            body: String::new(),
            signer,
        }
    }

    /// Constructs the Request and sends it to the target URL, returning a
    /// future Response.
    ///
    /// # Errors
    ///
    /// This method fails if there was an error while sending request,
    /// redirect loop was detected or redirect limit was exhausted.
    pub fn send(self) -> impl Future<Output = Result<Response, Error>> {
        self.generate_signature().send()
    }

    /// Generate an OAuth signature and return the reqwest's `RequestBuilder`.
    pub fn generate_signature(self) -> ReqwestRequestBuilder {
        let url = match self.url {
            Some(url) => url,
            // reqwest reports the unparsable url itself on send
            None => return self.inner,
        };
        let (is_q, url, payload) = match url.query() {
            None | Some("") => (false, url.clone(), self.body.as_str()),
            Some(q) => {
                let mut pure_url = url.clone();
                pure_url.set_query(None);
                (true, pure_url, q)
            }
        };
        let signature = self
            .signer
            .generate_signature(self.method, url, payload, is_q);
        self.inner.header(AUTHORIZATION, signature)
    }

    /// Modify the query string of the URL.
    ///
    /// Appends the parameters provided; existing keys are not overwritten.
    ///
    /// # Errors
    /// This method will fail if the object you provide cannot be serialized
    /// into a query string.
    pub fn query<T: Serialize + ?Sized>(mut self, query: &T) -> Self {
        if let Some(ref mut url) = self.url {
            let mut pairs = url.query_pairs_mut();
            let serializer = serde_urlencoded::Serializer::new(&mut pairs);
            let _ = query.serialize(serializer);
        }
        if let Some(ref mut url) = self.url {
            if let Some("") = url.query() {
                url.set_query(None);
            }
        }
        self.inner = self.inner.query(query);
        self
    }

    /// Send a form body.
    ///
    /// Sets `Content-Type: application/x-www-form-urlencoded`.
    pub fn form<T: Serialize + ?Sized>(mut self, form: &T) -> Self {
        if let Ok(body) = serde_urlencoded::to_string(form) {
            self.body = body;
        }
        self.inner = self.inner.form(form);
        self
    }

    /// Enables a request timeout.
    ///
    /// The timeout is applied from the when the request starts connecting
    /// until the response body has finished.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.inner = self.inner.timeout(timeout);
        self
    }
}
