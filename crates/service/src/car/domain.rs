use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize};
use models::car::CarData;

fn default_available() -> bool { true }

/// Car payload for create and full replace.
///
/// `id` is accepted only so that create can refuse it; replace takes the
/// identifier from the path and ignores this field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarInput {
    #[serde(default)]
    pub id: Option<i32>,
    pub model: String,
    pub company: String,
    pub daily_rate: f64,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default = "default_available")]
    pub available: bool,
    #[serde(default, rename = "type")]
    pub car_type: Option<String>,
}

impl From<CarInput> for CarData {
    fn from(i: CarInput) -> Self {
        CarData {
            model: i.model,
            company: i.company,
            daily_rate: i.daily_rate,
            image_url: i.image_url,
            available: i.available,
            car_type: i.car_type,
        }
    }
}

/// Query of `GET /api/cars/filters`. Blank values count as absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarFilter {
    #[serde(default, rename = "type", deserialize_with = "blank_as_none")]
    pub car_type: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub min_price: Option<f64>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub max_price: Option<f64>,
}

/// Which finder a [`CarFilter`] resolves to.
#[derive(Debug, Clone, PartialEq)]
pub enum CarQuery {
    All,
    ByType(String),
    PriceRange { min: f64, max: f64 },
}

impl CarFilter {
    /// `type` wins over the price bounds; a range needs both bounds.
    pub fn resolve(&self) -> CarQuery {
        if let Some(t) = &self.car_type {
            return CarQuery::ByType(t.clone());
        }
        match (self.min_price, self.max_price) {
            (Some(min), Some(max)) => CarQuery::PriceRange { min, max },
            _ => CarQuery::All,
        }
    }
}

fn blank_as_none<'de, D, T>(d: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw: Option<String> = Option::deserialize(d)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse::<T>().map(Some).map_err(serde::de::Error::custom),
    }
}
