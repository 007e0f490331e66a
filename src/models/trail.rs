use serde::Serialize;

use crate::clients::trails::RawTrail;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trail {
    pub trail_url: String,
    pub name: String,
    pub location: String,
    pub length: f64,
    pub condition_date: String,
    pub condition_time: String,
    pub conditions: Option<String>,
    pub stars: f64,
    pub star_votes: i64,
    pub summary: String,
}

impl From<RawTrail> for Trail {
    fn from(raw: RawTrail) -> Self {
        let (condition_date, condition_time) = raw
            .condition_date
            .split_once(' ')
            .map_or_else(
                || (raw.condition_date.clone(), String::new()),
                |(date, time)| (date.to_string(), time.to_string()),
            );

        Self {
            trail_url: raw.url,
            name: raw.name,
            location: raw.location,
            length: raw.length,
            condition_date,
            condition_time,
            conditions: raw.condition_details.or(raw.condition_status),
            stars: raw.stars,
            star_votes: raw.star_votes,
            summary: raw.summary,
        }
    }
}
