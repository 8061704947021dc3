//! Bedtime answers

use crate::error::TrackerResult;
use crate::repositories::SleepStore;
use chrono::NaiveDateTime;
use sleepfast_engine::{has_answered_bedtime_on, SleepEvent};
use tracing::debug;

pub struct SleepService;

impl SleepService {
    /// Record whether the user went to bed on time
    ///
    /// Only the first answer of a calendar day is kept; later ones return `None`.
    pub async fn answer_bedtime<S>(
        store: &S,
        on_time: bool,
        now: NaiveDateTime,
    ) -> TrackerResult<Option<SleepEvent>>
    where
        S: SleepStore + ?Sized,
    {
        let events = store.all_sleep_events().await?;
        if has_answered_bedtime_on(&events, now.date()) {
            debug!(date = %now.date(), "Bedtime already answered today");
            return Ok(None);
        }

        let event = SleepEvent::new(on_time, now);
        store.insert_sleep_event(event.clone()).await?;
        Ok(Some(event))
    }
}
