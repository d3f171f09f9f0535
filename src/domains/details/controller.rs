//! Single-record loader.

use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, instrument};

use crate::core::api::{ApiError, DataSource};
use crate::domains::context::ViewContext;
use crate::domains::navigation::{Navigation, NavigationIntent};
use crate::domains::resources::{ResourceDescriptor, ResourceId};

#[derive(Debug)]
struct DetailsState<T> {
    id: Option<ResourceId>,
    record: Option<T>,
    loading: bool,
}

/// Clears the loading flag when a load ends, however it ends.
struct LoadingFlag<'a, T> {
    state: &'a Mutex<DetailsState<T>>,
}

impl<T> Drop for LoadingFlag<'_, T> {
    fn drop(&mut self) {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .loading = false;
    }
}

/// Loads and holds one record of a resource.
pub struct ResourceDetails<S: DataSource> {
    source: S,
    descriptor: ResourceDescriptor,
    context: ViewContext,
    state: Mutex<DetailsState<S::Item>>,
}

impl<S: DataSource> ResourceDetails<S> {
    pub fn new(source: S, descriptor: ResourceDescriptor, context: ViewContext) -> Self {
        Self {
            source,
            descriptor,
            context,
            state: Mutex::new(DetailsState {
                id: None,
                record: None,
                loading: false,
            }),
        }
    }

    /// Fetch record `id`.
    ///
    /// On failure the user is notified and the navigator is sent back to the
    /// list; `None` is returned and any previously loaded record is kept.
    #[instrument(skip(self), fields(resource = self.descriptor.name))]
    pub async fn load(&self, id: ResourceId) -> Option<S::Item> {
        {
            let mut state = self.lock_state();
            state.id = Some(id);
            state.loading = true;
        }
        let _loading = LoadingFlag { state: &self.state };

        let messages = self.context.messages();
        let labels = self.descriptor.labels(self.context.locale);
        let fallback = messages.load_failed(labels);

        let outcome = match self.source.get(id).await {
            Ok(envelope) => envelope
                .into_data()
                .and_then(|data| data.ok_or_else(|| ApiError::reported(None))),
            Err(err) => Err(ApiError::from(err)),
        };

        match outcome {
            Ok(record) => {
                debug!(id, "Record loaded");
                self.lock_state().record = Some(record.clone());
                Some(record)
            }
            Err(err) => {
                // Only the generic text is shown here, never the server's.
                let err = match err {
                    ApiError::Reported { .. } => ApiError::reported(None),
                    transport => transport,
                };
                self.context
                    .notify_failure(self.descriptor.name, &err, &fallback);
                self.context
                    .navigate(Navigation::new(self.descriptor.name, self.back_intent()));
                None
            }
        }
    }

    pub fn record(&self) -> Option<S::Item> {
        self.lock_state().record.clone()
    }

    pub fn loading(&self) -> bool {
        self.lock_state().loading
    }

    /// Edit page of the requested record, once an id has been requested.
    pub fn edit_intent(&self) -> Option<NavigationIntent> {
        self.lock_state().id.map(NavigationIntent::Edit)
    }

    pub fn back_intent(&self) -> NavigationIntent {
        NavigationIntent::List
    }

    fn lock_state(&self) -> MutexGuard<'_, DetailsState<S::Item>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
