//! Response records, one per endpoint.
//!
//! These mirror the documented JSON bodies. Unknown fields are ignored and the
//! boilerplate `disclaimer`/`license` strings default to empty, but a body whose
//! core fields have the wrong shape fails decoding.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Currency code to display name, e.g. `"EUR" -> "Euro"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Currencies(pub BTreeMap<String, String>);

impl Currencies {
    pub fn name(&self, code: &str) -> Option<&str> {
        self.0.get(code).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(code, name)| (code.as_str(), name.as_str()))
    }
}

/// Body of `latest` and `historical`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rates {
    #[serde(default)]
    pub disclaimer: String,
    #[serde(default)]
    pub license: String,
    /// Unix seconds at which the rates were published.
    #[serde(default)]
    pub timestamp: i64,
    #[serde(default)]
    pub base: String,
    pub rates: BTreeMap<String, f64>,
}

impl Rates {
    pub fn rate(&self, code: &str) -> Option<f64> {
        self.rates.get(code).copied()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    #[serde(default)]
    pub query: String,
    pub amount: f64,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionMeta {
    pub timestamp: i64,
    pub rate: f64,
}

/// Body of `convert`. `response` is the converted amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    #[serde(default)]
    pub disclaimer: String,
    #[serde(default)]
    pub license: String,
    pub request: ConversionRequest,
    pub meta: ConversionMeta,
    pub response: f64,
}

/// Body of `time-series`: date (`YYYY-MM-DD`) to rate map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    #[serde(default)]
    pub disclaimer: String,
    #[serde(default)]
    pub license: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub base: String,
    pub rates: BTreeMap<String, BTreeMap<String, f64>>,
}

impl TimeSeries {
    pub fn on(&self, date: &str) -> Option<&BTreeMap<String, f64>> {
        self.rates.get(date)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OhlcRate {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub average: f64,
}

/// Body of `ohlc`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ohlc {
    #[serde(default)]
    pub disclaimer: String,
    #[serde(default)]
    pub license: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub base: String,
    pub rates: BTreeMap<String, OhlcRate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsagePlan {
    pub name: String,
    #[serde(default)]
    pub quota: String,
    #[serde(default)]
    pub update_frequency: String,
    /// Feature name (`base`, `symbols`, `time-series`, ...) to availability.
    #[serde(default)]
    pub features: BTreeMap<String, bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageCounters {
    pub requests: u64,
    /// `-1` on unlimited plans.
    pub requests_quota: i64,
    pub requests_remaining: i64,
    #[serde(default)]
    pub days_elapsed: u32,
    #[serde(default)]
    pub days_remaining: u32,
    #[serde(default)]
    pub daily_average: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageData {
    pub app_id: String,
    pub status: String,
    pub plan: UsagePlan,
    pub usage: UsageCounters,
}

/// Body of `usage`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Usage {
    pub status: u16,
    pub data: UsageData,
}
