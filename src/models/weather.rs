use serde::Serialize;

use crate::clients::weather::ForecastDay;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Weather {
    pub forecast: String,
    pub time: String,
}

impl From<ForecastDay> for Weather {
    fn from(day: ForecastDay) -> Self {
        Self {
            forecast: day.weather.description,
            time: day.datetime,
        }
    }
}
