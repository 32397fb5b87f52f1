// ----------------------------------------------------------------------------
// This source code contains derived artifacts from seanmonstar's `reqwest`.
// for further information(including license information),
// please visit their repository: https://github.com/seanmonstar/reqwest .
// ----------------------------------------------------------------------------
use reqwest::{Client as ReqwestClient, IntoUrl, Method};

use crate::{OAuthParameters, Params, SecretsProvider, Signer};

use super::request::RequestBuilder;

/// Turns a `reqwest::Client` into a signing [`Client`].
pub trait OAuthClientProvider {
    fn oauth1<T>(self, secrets: &T) -> Client<'_, T>
    where
        Self: Sized,
        T: SecretsProvider,
    {
        self.oauth1_with_params(secrets, OAuthParameters::new())
    }

    fn oauth1_with_params<'a, T>(
        self,
        secrets: &'a T,
        params: OAuthParameters<'a>,
    ) -> Client<'a, T>
    where
        Self: Sized,
        T: SecretsProvider;
}

/// A `reqwest::Client` bound to one set of secrets.
#[derive(Debug)]
pub struct Client<'a, T>
where
    T: SecretsProvider,
{
    inner: ReqwestClient,
    signer: Signer<'a, T>,
}

impl OAuthClientProvider for ReqwestClient {
    fn oauth1_with_params<'a, T>(
        self,
        secrets: &'a T,
        parameters: OAuthParameters<'a>,
    ) -> Client<'a, T>
    where
        Self: Sized,
        T: SecretsProvider,
    {
        Client {
            inner: self,
            signer: Signer::new(secrets, parameters),
        }
    }
}

impl<'a, T> Client<'a, T>
where
    T: SecretsProvider + Clone,
{
    /// Convenience method to make a `GET` request to a URL.
    pub fn get<U: IntoUrl + Clone>(&self, url: U) -> RequestBuilder<'a, T> {
        self.request(Method::GET, url)
    }

    /// Convenience method to make a `POST` request to a URL.
    pub fn post<U: IntoUrl + Clone>(&self, url: U) -> RequestBuilder<'a, T> {
        self.request(Method::POST, url)
    }

    /// Start building a `Request` with the `Method` and `Url`.
    ///
    /// An unparsable url is not signed; the error surfaces when the request
    /// is sent.
    pub fn request<U: IntoUrl + Clone>(&self, method: Method, url: U) -> RequestBuilder<'a, T> {
        let cloned_url = url.clone().into_url().ok();
        RequestBuilder::new(
            self.inner.request(method.clone(), url),
            method,
            cloned_url,
            self.signer.clone(),
        )
    }

    /// Start a request carrying `params` in the query of a `GET` and in the
    /// form body of anything else, which is how the API takes its arguments.
    pub fn request_with_params<U: IntoUrl + Clone>(
        &self,
        method: Method,
        url: U,
        params: &Params,
    ) -> RequestBuilder<'a, T> {
        let builder = self.request(method.clone(), url);
        if method == Method::GET {
            builder.query(params)
        } else {
            builder.form(params)
        }
    }
}
