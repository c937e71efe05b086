//! The seven fixed API resources and their URL templates.
//!
//! | Endpoint | Path | Path segments |
//! |----------|------|---------------|
//! | `currencies` | `/currencies.json` | 0 |
//! | `latest` | `/latest.json` | 0 |
//! | `historical` | `/historical/{date}.json` | 1 |
//! | `convert` | `/convert.json` | 0 |
//! | `time-series` | `/time-series.json` | 0 |
//! | `ohlc` | `/ohlc.json` | 0 |
//! | `usage` | `/usage.json` | 0 |

use std::fmt::{Display, Formatter};

use crate::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Currencies,
    Latest,
    Historical,
    Convert,
    TimeSeries,
    Ohlc,
    Usage,
}

impl Endpoint {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Currencies => "currencies",
            Self::Latest => "latest",
            Self::Historical => "historical",
            Self::Convert => "convert",
            Self::TimeSeries => "time-series",
            Self::Ohlc => "ohlc",
            Self::Usage => "usage",
        }
    }

    /// Number of path segments the template interpolates.
    pub const fn path_slots(self) -> usize {
        match self {
            Self::Historical => 1,
            _ => 0,
        }
    }

    /// Resolve the full resource URL under `base_url`, filling path slots in order.
    pub fn url(self, base_url: &str, segments: &[String]) -> Result<String, ValidationError> {
        if segments.len() != self.path_slots() {
            return Err(ValidationError::PathSegmentCount {
                endpoint: self.as_str(),
                expected: self.path_slots(),
                actual: segments.len(),
            });
        }

        let mut path = String::from(self.as_str());
        for segment in segments {
            path.push('/');
            path.push_str(&urlencoding::encode(segment));
        }

        Ok(format!("{}/{path}.json", base_url.trim_end_matches('/')))
    }
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
