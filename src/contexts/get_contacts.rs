use std::rc::Rc;

use crate::contexts::{ListenerError, ListenerSet, UseCaseStatus};
use crate::data::{Contact, ContactSchema, FailReason};

/// Trait for searching contacts on the server
pub trait ContactsEndpoint {
    fn get_contacts(&self, filter_term: &str) -> Result<Vec<ContactSchema>, FailReason>;
}

impl<E: ContactsEndpoint + ?Sized> ContactsEndpoint for &E {
    fn get_contacts(&self, filter_term: &str) -> Result<Vec<ContactSchema>, FailReason> {
        (**self).get_contacts(filter_term)
    }
}

/// Receives the outcome of [`GetContactsUseCase::fetch_contacts_and_notify`].
pub trait ContactsListener {
    fn on_contacts_fetched(&self, contacts: &[Contact]);
    fn on_contacts_fetch_failed(&self);
}

/// Fetches contacts matching a filter term and fans the outcome out to the
/// registered listeners.
pub struct GetContactsUseCase<E: ContactsEndpoint> {
    endpoint: E,
    listeners: ListenerSet<dyn ContactsListener>,
}

impl<E: ContactsEndpoint> GetContactsUseCase<E> {
    pub fn new(endpoint: E) -> Self {
        Self {
            endpoint,
            listeners: ListenerSet::new(),
        }
    }

    pub fn register_listener(&self, listener: Rc<dyn ContactsListener>) -> Result<(), ListenerError> {
        self.listeners.register(listener)
    }

    pub fn unregister_listener(&self, listener: &Rc<dyn ContactsListener>) -> Result<(), ListenerError> {
        self.listeners.unregister(listener)
    }

    pub fn fetch_contacts_and_notify(&self, filter_term: &str) -> UseCaseStatus {
        tracing::info!(
            "[GetContactsUseCase] fetch_contacts_and_notify, filter_term={}",
            filter_term
        );

        match self.endpoint.get_contacts(filter_term) {
            Ok(schemas) => {
                let contacts: Vec<Contact> = schemas.iter().map(Contact::from).collect();
                let notified = self
                    .listeners
                    .notify(|listener| listener.on_contacts_fetched(&contacts));
                tracing::debug!(
                    "[GetContactsUseCase] fetch_contacts_and_notify, contacts={}, notified={}",
                    contacts.len(),
                    notified
                );
                UseCaseStatus::Success
            }
            Err(FailReason::AuthError) => {
                tracing::warn!(
                    "[GetContactsUseCase] fetch_contacts_and_notify, filter_term={}, auth error, listeners not notified",
                    filter_term
                );
                UseCaseStatus::Failure
            }
            Err(reason) => {
                tracing::warn!(
                    "[GetContactsUseCase] fetch_contacts_and_notify, filter_term={}, error={}",
                    filter_term,
                    reason
                );
                self.listeners
                    .notify(|listener| listener.on_contacts_fetch_failed());
                reason.into()
            }
        }
    }
}
