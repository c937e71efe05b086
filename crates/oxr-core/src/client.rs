//! Request builder and dispatcher.
//!
//! Every public operation assembles its [`QueryParams`] and optional path
//! segments, then goes through [`Client::get`], which resolves the URL, injects
//! `app_id`, normalizes values, executes the request and decodes the body.
//! The client holds only read-only configuration and a shared transport, so
//! clones can be used from any number of tasks at once.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use time::{Date, OffsetDateTime};

use crate::domain::iso;
use crate::http_client::{HttpClient, HttpRequest, ReqwestHttpClient};
use crate::query::QueryParams;
use crate::responses::{Conversion, Currencies, Ohlc, Rates, TimeSeries, Usage};
use crate::{ClientConfig, ClientError, Currency, Endpoint, Period, ValidationError};

/// Per-call options shared by the rate endpoints.
///
/// `base: None` falls back to the client's configured base currency.
/// `symbols: None` omits the parameter; `Some(vec![])` sends it empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RatesOptions {
    pub base: Option<Currency>,
    pub symbols: Option<Vec<Currency>>,
    pub show_alternative: bool,
}

impl RatesOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base(mut self, base: Currency) -> Self {
        self.base = Some(base);
        self
    }

    pub fn with_symbols(mut self, symbols: Vec<Currency>) -> Self {
        self.symbols = Some(symbols);
        self
    }

    pub fn with_show_alternative(mut self, show_alternative: bool) -> Self {
        self.show_alternative = show_alternative;
        self
    }
}

/// Async client for the Open Exchange Rates API.
#[derive(Clone)]
pub struct Client {
    http_client: Arc<dyn HttpClient>,
    config: Arc<ClientConfig>,
}

impl Client {
    /// Client using the default reqwest transport.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let transport = ReqwestHttpClient::new()?;
        Ok(Self::with_http_client(config, Arc::new(transport)))
    }

    pub fn with_http_client(config: ClientConfig, http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            http_client,
            config: Arc::new(config),
        }
    }

    /// Client configured from `OXR_*` environment variables.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Supported currency codes and their display names.
    pub async fn currencies(&self) -> Result<Currencies, ClientError> {
        self.get(Endpoint::Currencies, QueryParams::new(), &[]).await
    }

    pub async fn latest(&self, options: RatesOptions) -> Result<Rates, ClientError> {
        let params = self.rates_params(QueryParams::new(), options);
        self.get(Endpoint::Latest, params, &[]).await
    }

    /// Rates at end of day `date`. The date travels in the path, not the query.
    pub async fn historical(&self, date: Date, options: RatesOptions) -> Result<Rates, ClientError> {
        let segment = iso::format_date(date)?;
        let params = self.rates_params(QueryParams::new(), options);
        self.get(Endpoint::Historical, params, &[segment]).await
    }

    /// Convert `amount` from one currency to another. The client's base currency
    /// plays no part here.
    pub async fn convert(
        &self,
        amount: f64,
        from: &Currency,
        to: &Currency,
    ) -> Result<Conversion, ClientError> {
        if !amount.is_finite() {
            return Err(ValidationError::NonFiniteValue { field: "amount" }.into());
        }

        let params = QueryParams::new()
            .with("from", from)
            .with("to", to)
            .with("amount", amount);
        self.get(Endpoint::Convert, params, &[]).await
    }

    /// Daily rates for `start..=end`. Range ordering is left to the API.
    pub async fn time_series(
        &self,
        start: Date,
        end: Date,
        options: RatesOptions,
    ) -> Result<TimeSeries, ClientError> {
        let params = QueryParams::new()
            .with("start", iso::format_date(start)?)
            .with("end", iso::format_date(end)?);
        let params = self.rates_params(params, options);
        self.get(Endpoint::TimeSeries, params, &[]).await
    }

    pub async fn ohlc(
        &self,
        start_time: OffsetDateTime,
        period: Period,
        options: RatesOptions,
    ) -> Result<Ohlc, ClientError> {
        let params = QueryParams::new()
            .with("start_time", iso::format_datetime(start_time)?)
            .with("period", period.as_str());
        let params = self.rates_params(params, options);
        self.get(Endpoint::Ohlc, params, &[]).await
    }

    /// Plan and quota usage for the configured app id.
    pub async fn usage(&self) -> Result<Usage, ClientError> {
        self.get(Endpoint::Usage, QueryParams::new(), &[]).await
    }

    /// Build the wire request for `endpoint` without sending it.
    pub fn build_request(
        &self,
        endpoint: Endpoint,
        mut params: QueryParams,
        path_params: &[String],
    ) -> Result<HttpRequest, ClientError> {
        let url = endpoint.url(self.config.base_url(), path_params)?;
        params.prepend("app_id", self.config.app_id());

        Ok(HttpRequest::get(url)
            .with_query(params.encode())
            .with_timeout_ms(self.config.timeout_ms()))
    }

    /// Execute a GET against `endpoint` and decode the body as `T`.
    pub async fn get<T>(
        &self,
        endpoint: Endpoint,
        params: QueryParams,
        path_params: &[String],
    ) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        let request = self.build_request(endpoint, params, path_params)?;
        tracing::debug!(endpoint = %endpoint, url = %request.url, "dispatching request");

        let response = self.http_client.execute(request).await.map_err(|error| {
            tracing::warn!(endpoint = %endpoint, error = %error, "transport failure");
            ClientError::from(error)
        })?;

        if !response.is_success() {
            tracing::warn!(endpoint = %endpoint, status = response.status, "api rejected request");
            return Err(ClientError::Status {
                status: response.status,
                body: response.body,
            });
        }

        serde_json::from_str(&response.body).map_err(|error| {
            tracing::debug!(endpoint = %endpoint, error = %error, "response body did not decode");
            ClientError::Decode(error)
        })
    }

    fn rates_params(&self, params: QueryParams, options: RatesOptions) -> QueryParams {
        let base = options.base.unwrap_or_else(|| self.config.base().clone());
        params
            .with("base", &base)
            .with("show_alternative", options.show_alternative)
            .with_opt("symbols", options.symbols)
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
