use std::cell::Cell;

use crate::contexts::{ContactsListener, QuestionDetailsListener};
use crate::data::{Contact, QuestionDetails};

use super::CallLog;

/// Contacts listener double recording every callback it receives.
#[derive(Debug, Default)]
pub struct RecordingContactsListener {
    successes: CallLog<Vec<Contact>>,
    failures: Cell<usize>,
}

impl RecordingContactsListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn successes(&self) -> Vec<Vec<Contact>> {
        self.successes.calls()
    }

    pub fn failures(&self) -> usize {
        self.failures.get()
    }

    pub fn interactions(&self) -> usize {
        self.successes.count() + self.failures.get()
    }
}

impl ContactsListener for RecordingContactsListener {
    fn on_contacts_fetched(&self, contacts: &[Contact]) {
        self.successes.record(contacts.to_vec());
    }

    fn on_contacts_fetch_failed(&self) {
        self.failures.set(self.failures.get() + 1);
    }
}

/// Question details listener double recording every callback it receives.
#[derive(Debug, Default)]
pub struct RecordingQuestionDetailsListener {
    successes: CallLog<QuestionDetails>,
    failures: Cell<usize>,
}

impl RecordingQuestionDetailsListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn successes(&self) -> Vec<QuestionDetails> {
        self.successes.calls()
    }

    pub fn failures(&self) -> usize {
        self.failures.get()
    }

    pub fn interactions(&self) -> usize {
        self.successes.count() + self.failures.get()
    }
}

impl QuestionDetailsListener for RecordingQuestionDetailsListener {
    fn on_question_details_fetched(&self, details: &QuestionDetails) {
        self.successes.record(details.clone());
    }

    fn on_question_details_fetch_failed(&self) {
        self.failures.set(self.failures.get() + 1);
    }
}
