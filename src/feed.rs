use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::FeedError;
use crate::model::EventBundle;

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Feed {
    // sport keys stay in the order the feed sent them
    sports: IndexMap<String, Vec<EventBundle>>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FeedReport {
    pub events: usize,
    pub duplicates_dropped: usize,
}

impl Feed {
    pub fn from_json(json: &str) -> Result<(Self, FeedReport), FeedError> {
        let mut feed: Feed = serde_json::from_str(json).map_err(FeedError::Parse)?;
        let report = feed.normalize();
        Ok((feed, report))
    }

    fn normalize(&mut self) -> FeedReport {
        let mut report = FeedReport::default();
        for bundle in self.sports.values_mut().flatten() {
            report.events += 1;
            for market in &mut bundle.markets {
                report.duplicates_dropped += market.dedup_odds();
            }
        }
        report
    }

    pub fn sports(&self) -> impl Iterator<Item = &str> {
        self.sports.keys().map(String::as_str)
    }

    pub fn events(&self, sport: &str) -> &[EventBundle] {
        self.sports.get(sport).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.sports.values().all(Vec::is_empty)
    }
}
