use crate::data::{Event, EventBusPoster};

use super::CallLog;

/// Event bus double that keeps every posted event.
#[derive(Debug, Default)]
pub struct RecordingEventBus {
    events: CallLog<Event>,
}

impl RecordingEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.calls()
    }
}

impl EventBusPoster for RecordingEventBus {
    fn post_event(&self, event: Event) {
        self.events.record(event);
    }
}
