//! In-memory doubles for controller tests.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::core::api::{DataSource, Envelope, ListQuery, TransportError};
use crate::domains::context::ViewContext;
use crate::domains::navigation::NavigationLog;
use crate::domains::notifications::{Locale, ToastQueue};
use crate::domains::resources::{Resource, ResourceId};

/// A minimal record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ResourceId,
    pub name: String,
}

impl Item {
    pub fn new(id: ResourceId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl Resource for Item {
    fn id(&self) -> ResourceId {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}

/// `n` items named `Row 1..=n`.
pub fn rows(n: i64) -> Vec<Item> {
    (1..=n).map(|id| Item::new(id, format!("Row {id}"))).collect()
}

/// A successful list envelope with pagination.
pub fn page(items: Vec<Item>, total_count: u64, total_pages: u32) -> Envelope<Vec<Item>> {
    Envelope::success(items).with_pagination(total_count, total_pages)
}

/// What the fake answers to one call.
pub enum Reply<T> {
    Now(Envelope<T>),
    After(Duration, Envelope<T>),
    Fail(TransportError),
}

impl<T> Reply<T> {
    async fn resolve(self) -> Result<Envelope<T>, TransportError> {
        match self {
            Self::Now(envelope) => Ok(envelope),
            Self::After(delay, envelope) => {
                tokio::time::sleep(delay).await;
                Ok(envelope)
            }
            Self::Fail(err) => Err(err),
        }
    }
}

/// A call received by the fake.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List(ListQuery),
    Get(ResourceId),
    Remove(ResourceId),
}

/// Scripted [`DataSource`].
///
/// Unscripted calls succeed: an empty page, a delete acknowledgement, or a
/// `get` without data.
pub struct FakeSource<T = Item> {
    lists: Mutex<VecDeque<Reply<Vec<T>>>>,
    pages: Mutex<HashMap<u32, Reply<Vec<T>>>>,
    gets: Mutex<VecDeque<Reply<T>>>,
    removes: Mutex<VecDeque<Reply<()>>>,
    calls: Mutex<Vec<Call>>,
}

impl<T> Default for FakeSource<T> {
    fn default() -> Self {
        Self {
            lists: Mutex::default(),
            pages: Mutex::default(),
            gets: Mutex::default(),
            removes: Mutex::default(),
            calls: Mutex::default(),
        }
    }
}

impl FakeSource {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

impl<T> FakeSource<T> {
    /// A fake serving records of any type.
    pub fn of() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_list(&self, reply: Reply<Vec<T>>) {
        self.lists.lock().unwrap().push_back(reply);
    }

    /// Answer the next list request for `page` with `reply`, ahead of the queue.
    pub fn on_page(&self, page: u32, reply: Reply<Vec<T>>) {
        self.pages.lock().unwrap().insert(page, reply);
    }

    pub fn push_get(&self, reply: Reply<T>) {
        self.gets.lock().unwrap().push_back(reply);
    }

    pub fn push_remove(&self, reply: Reply<()>) {
        self.removes.lock().unwrap().push_back(reply);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn list_calls(&self) -> Vec<ListQuery> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::List(query) => Some(query),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl<T: Resource> DataSource for FakeSource<T> {
    type Item = T;

    async fn list(&self, query: &ListQuery) -> Result<Envelope<Vec<T>>, TransportError> {
        self.record(Call::List(query.clone()));
        let scripted = self.pages.lock().unwrap().remove(&query.page);
        let reply = scripted.or_else(|| self.lists.lock().unwrap().pop_front());
        reply
            .unwrap_or_else(|| Reply::Now(Envelope::success(Vec::new()).with_pagination(0, 0)))
            .resolve()
            .await
    }

    async fn get(&self, id: ResourceId) -> Result<Envelope<T>, TransportError> {
        self.record(Call::Get(id));
        let reply = self.gets.lock().unwrap().pop_front();
        reply
            .unwrap_or_else(|| Reply::Now(Envelope::acknowledged("")))
            .resolve()
            .await
    }

    async fn remove(&self, id: ResourceId) -> Result<Envelope<()>, TransportError> {
        self.record(Call::Remove(id));
        let reply = self.removes.lock().unwrap().pop_front();
        reply
            .unwrap_or_else(|| Reply::Now(Envelope::acknowledged("deleted")))
            .resolve()
            .await
    }
}

/// A view context that records everything it receives.
pub struct RecordingContext {
    pub toasts: Arc<ToastQueue>,
    pub navigation: Arc<NavigationLog>,
    pub context: ViewContext,
}

impl RecordingContext {
    pub fn new(locale: Locale) -> Self {
        let toasts = Arc::new(ToastQueue::new());
        let navigation = Arc::new(NavigationLog::new());
        let context = ViewContext::new(toasts.clone(), navigation.clone(), locale);
        Self {
            toasts,
            navigation,
            context,
        }
    }
}
