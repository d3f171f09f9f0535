//! The resource browser controller.
//!
//! Operations are synchronous state updates. Fetches and the debounce timer
//! run as Tokio tasks that report back into the same state, so every method
//! must be called from within a runtime.

use futures::future::join_all;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument};

use super::debounce::Debouncer;
use super::error::BrowserError;
use super::query::PageSize;
use super::state::{BrowserSnapshot, BrowserState};
use crate::core::api::{ApiError, DataSource, Envelope, ListQuery};
use crate::core::config::BrowserConfig;
use crate::domains::context::ViewContext;
use crate::domains::navigation::{Navigation, NavigationIntent};
use crate::domains::notifications::Notification;
use crate::domains::resources::{Resource, ResourceDescriptor, ResourceLabels};

/// Paginated, searchable list of one resource with delete confirmation.
pub struct ResourceBrowser<S: DataSource> {
    shared: Arc<Shared<S>>,
    debouncer: Debouncer,
}

struct Shared<S: DataSource> {
    source: S,
    descriptor: ResourceDescriptor,
    context: ViewContext,
    discard_stale: bool,
    state: Mutex<BrowserState<S::Item>>,
    generation: AtomicU64,
    tasks: Mutex<Vec<JoinHandle<()>>>,
}

/// Releases one unit of `in_flight` when the fetch ends, however it ends.
struct LoadingGuard<S: DataSource> {
    shared: Arc<Shared<S>>,
}

impl<S: DataSource> Drop for LoadingGuard<S> {
    fn drop(&mut self) {
        let mut state = self.shared.lock_state();
        state.in_flight = state.in_flight.saturating_sub(1);
    }
}

/// A fetch that has been issued but not yet run.
struct FetchTicket<S: DataSource> {
    query: ListQuery,
    generation: u64,
    guard: LoadingGuard<S>,
}

impl<S: DataSource> ResourceBrowser<S> {
    pub fn new(
        source: S,
        descriptor: ResourceDescriptor,
        settings: &BrowserConfig,
        context: ViewContext,
    ) -> Self {
        Self {
            shared: Arc::new(Shared {
                source,
                descriptor,
                context,
                discard_stale: settings.discard_stale_responses,
                state: Mutex::new(BrowserState::new(settings.default_page_size)),
                generation: AtomicU64::new(0),
                tasks: Mutex::new(Vec::new()),
            }),
            debouncer: Debouncer::new(settings.debounce()),
        }
    }

    pub fn descriptor(&self) -> &ResourceDescriptor {
        &self.shared.descriptor
    }

    /// Load the first page.
    pub fn mount(&self) {
        info!("Browsing {}", self.shared.descriptor.name);
        self.shared.schedule_fetch();
    }

    /// Update the search box. The term is committed after the quiet period.
    ///
    /// Collections the backend cannot search are filtered in place, so a new
    /// term only refetches when it moves the browser back to the first page.
    pub fn set_search_term(&self, text: impl Into<String>) {
        self.shared.lock_state().query.set_search_term(text);

        let shared = Arc::clone(&self.shared);
        self.debouncer.schedule(move || {
            let (changed, page_moved) = {
                let mut state = shared.lock_state();
                let before = state.query.page();
                let changed = state.query.commit_search();
                (changed, state.query.page() != before)
            };
            if page_moved || (changed && shared.descriptor.searchable) {
                shared.schedule_fetch();
            }
        });
    }

    pub fn set_page(&self, page: u32) {
        let changed = self.shared.lock_state().query.set_page(page);
        if changed {
            self.shared.schedule_fetch();
        }
    }

    /// Change the page size; only the sizes the pager offers are accepted.
    pub fn set_page_size(&self, size: u32) -> Result<(), BrowserError> {
        let size = PageSize::try_from(size)?;
        let changed = self.shared.lock_state().query.set_page_size(size);
        if changed {
            self.shared.schedule_fetch();
        }
        Ok(())
    }

    /// Fetch the current page and wait for it to be applied.
    pub async fn fetch_page(&self) {
        let ticket = self.shared.begin_fetch();
        self.shared.run_fetch(ticket).await;
    }

    /// Fetch the current page in the background.
    pub fn refresh(&self) {
        self.shared.schedule_fetch();
    }

    /// Stage `record` for deletion and open the confirmation prompt.
    pub fn request_delete(&self, record: S::Item) {
        self.shared.lock_state().deletion.stage(record);
    }

    /// Delete the staged record, if any, and close the prompt.
    #[instrument(skip_all, fields(resource = self.shared.descriptor.name))]
    pub async fn confirm_delete(&self) {
        let target = self.shared.lock_state().deletion.target.clone();
        if let Some(target) = target {
            self.shared.delete(target).await;
        }
        self.shared.lock_state().deletion.clear();
    }

    pub fn cancel_delete(&self) {
        self.shared.lock_state().deletion.clear();
    }

    /// Wait for every fetch issued so far, including ones issued while
    /// waiting. A pending debounce is not waited for.
    pub async fn settle(&self) {
        loop {
            let tasks = std::mem::take(&mut *self.shared.lock_tasks());
            if tasks.is_empty() {
                break;
            }
            join_all(tasks).await;
        }
    }

    pub fn snapshot(&self) -> BrowserSnapshot<S::Item> {
        self.shared
            .lock_state()
            .snapshot(!self.shared.descriptor.searchable)
    }

    /// Whether a search term is waiting for the quiet period.
    pub fn search_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub fn create_intent(&self) -> NavigationIntent {
        NavigationIntent::Create
    }

    pub fn view_intent(&self, record: &S::Item) -> NavigationIntent {
        NavigationIntent::View(record.id())
    }

    pub fn edit_intent(&self, record: &S::Item) -> NavigationIntent {
        NavigationIntent::Edit(record.id())
    }

    /// Hand `intent` to the navigator of this view.
    pub fn navigate(&self, intent: NavigationIntent) {
        self.shared
            .context
            .navigate(Navigation::new(self.shared.descriptor.name, intent));
    }
}

impl<S: DataSource> Shared<S> {
    fn lock_state(&self) -> MutexGuard<'_, BrowserState<S::Item>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_tasks(&self) -> MutexGuard<'_, Vec<JoinHandle<()>>> {
        self.tasks.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn labels(&self) -> ResourceLabels {
        self.descriptor.labels(self.context.locale)
    }

    /// Claim a generation and mark the browser as loading.
    fn begin_fetch(self: &Arc<Self>) -> FetchTicket<S> {
        let (query, generation) = {
            let mut state = self.lock_state();
            state.in_flight += 1;
            let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            (state.query.to_list_query(), generation)
        };

        FetchTicket {
            query,
            generation,
            guard: LoadingGuard {
                shared: Arc::clone(self),
            },
        }
    }

    fn schedule_fetch(self: &Arc<Self>) {
        let ticket = self.begin_fetch();
        let shared = Arc::clone(self);
        let handle = tokio::spawn(async move { shared.run_fetch(ticket).await });

        let mut tasks = self.lock_tasks();
        tasks.retain(|task| !task.is_finished());
        tasks.push(handle);
    }

    #[instrument(skip_all, fields(resource = self.descriptor.name, generation = ticket.generation))]
    async fn run_fetch(&self, ticket: FetchTicket<S>) {
        let FetchTicket {
            query,
            generation,
            guard,
        } = ticket;
        debug!(?query, "Fetching page");

        let outcome = self
            .source
            .list(&query)
            .await
            .map_err(ApiError::from)
            .and_then(Envelope::into_page);

        match outcome {
            Ok(page) => {
                let mut state = self.lock_state();
                let latest = self.generation.load(Ordering::SeqCst);
                if self.discard_stale && generation != latest {
                    debug!(latest, "Discarding stale page");
                } else {
                    debug!(
                        items = page.items.len(),
                        total = page.total_count,
                        "Page loaded"
                    );
                    state.result = page;
                }
            }
            Err(err) => {
                let fallback = self.context.messages().list_failed(self.labels());
                self.context
                    .notify_failure(self.descriptor.name, &err, &fallback);
            }
        }

        drop(guard);
    }

    async fn delete(self: &Arc<Self>, target: S::Item) {
        let id = target.id();
        let messages = self.context.messages();
        debug!(id, "Deleting record");

        let outcome = self
            .source
            .remove(id)
            .await
            .map_err(ApiError::from)
            .and_then(Envelope::into_ack);

        match outcome {
            Ok(_) => {
                info!(id, "Record deleted");
                self.context.notify(Notification::success(
                    messages.success_title(),
                    messages.delete_succeeded(self.labels()),
                ));
                self.schedule_fetch();
            }
            Err(err) => {
                let fallback = messages.delete_failed(self.labels());
                self.context
                    .notify_failure(self.descriptor.name, &err, &fallback);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::api::TransportError;
    use crate::domains::notifications::{Locale, NotificationKind};
    use crate::domains::resources::find_resource;
    use crate::testing::{Call, FakeSource, Item, RecordingContext, Reply, page, rows};
    use std::time::Duration;
    use tokio::time::sleep;
    use tokio_test::{assert_err, assert_ok};

    struct Harness {
        browser: ResourceBrowser<Arc<FakeSource>>,
        source: Arc<FakeSource>,
        recorder: RecordingContext,
    }

    fn harness_with(resource: &str, settings: BrowserConfig) -> Harness {
        let source = FakeSource::new();
        let recorder = RecordingContext::new(Locale::En);
        let browser = ResourceBrowser::new(
            Arc::clone(&source),
            find_resource(resource).unwrap(),
            &settings,
            recorder.context.clone(),
        );
        Harness {
            browser,
            source,
            recorder,
        }
    }

    fn harness() -> Harness {
        harness_with("associations", BrowserConfig::default())
    }

    fn messages(h: &Harness) -> Vec<(NotificationKind, String)> {
        h.recorder
            .toasts
            .drain()
            .into_iter()
            .map(|n| (n.kind, n.message))
            .collect()
    }

    #[tokio::test(start_paused = true)]
    async fn test_mount_loads_first_page() {
        let h = harness();
        h.source.push_list(Reply::Now(page(rows(2), 2, 1)));

        h.browser.mount();
        assert!(h.browser.snapshot().loading);
        h.browser.settle().await;

        let snapshot = h.browser.snapshot();
        assert_eq!(snapshot.items, rows(2));
        assert_eq!(snapshot.total_items, 2);
        assert_eq!(snapshot.total_pages, 1);
        assert!(!snapshot.pager_visible);
        assert!(!snapshot.loading);
        assert_eq!(h.source.list_calls(), vec![ListQuery::new(1, 10, "")]);
        assert!(h.recorder.toasts.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_pager_visible_with_several_pages() {
        let h = harness();
        h.source.push_list(Reply::Now(page(rows(10), 35, 4)));
        h.browser.mount();
        h.browser.settle().await;

        let snapshot = h.browser.snapshot();
        assert!(snapshot.pager_visible);
        assert_eq!(snapshot.total_items, 35);
    }

    #[tokio::test(start_paused = true)]
    async fn test_typing_commits_last_term_once() {
        let h = harness();
        h.browser.mount();
        h.browser.settle().await;

        for term in ["t", "te", "teh", "tehr", "tehra", "tehran"] {
            h.browser.set_search_term(term);
            sleep(Duration::from_millis(60)).await;
        }
        // The last key landed 60ms ago; the window ends 440ms from now.
        sleep(Duration::from_millis(439)).await;
        h.browser.settle().await;
        assert_eq!(h.source.list_calls().len(), 1);
        assert_eq!(h.browser.snapshot().search_term, "tehran");
        assert_eq!(h.browser.snapshot().debounced_search_term, "");
        assert!(h.browser.search_pending());

        sleep(Duration::from_millis(2)).await;
        h.browser.settle().await;
        assert_eq!(
            h.source.list_calls(),
            vec![ListQuery::new(1, 10, ""), ListQuery::new(1, 10, "tehran")]
        );
        assert_eq!(h.browser.snapshot().debounced_search_term, "tehran");
    }

    #[tokio::test(start_paused = true)]
    async fn test_committed_search_resets_page() {
        let h = harness();
        h.browser.set_page(3);
        h.browser.settle().await;

        h.browser.set_search_term("mehr");
        sleep(Duration::from_millis(600)).await;
        h.browser.settle().await;

        assert_eq!(h.browser.snapshot().page, 1);
        assert_eq!(
            h.source.list_calls().last(),
            Some(&ListQuery::new(1, 10, "mehr"))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_unchanged_search_does_not_refetch() {
        let h = harness();
        h.browser.set_search_term("");
        sleep(Duration::from_millis(600)).await;
        h.browser.settle().await;
        assert!(h.source.calls().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_page_size_change_resets_page() {
        let h = harness();
        h.browser.set_page(4);
        h.browser.settle().await;

        assert_ok!(h.browser.set_page_size(20));
        h.browser.settle().await;
        assert_eq!(
            h.source.list_calls().last(),
            Some(&ListQuery::new(1, 20, ""))
        );

        let err = assert_err!(h.browser.set_page_size(15));
        assert_eq!(err, BrowserError::InvalidPageSize(15));
        assert_eq!(h.source.list_calls().len(), 2);
        assert_eq!(h.browser.snapshot().page_size, PageSize::Twenty);
    }

    #[tokio::test(start_paused = true)]
    async fn test_set_page_zero_means_first_page() {
        let h = harness();
        h.browser.set_page(2);
        h.browser.set_page(0);
        h.browser.settle().await;

        assert_eq!(h.browser.snapshot().page, 1);
        let calls = h.source.list_calls();
        assert_eq!(calls.len(), 2);
        assert!(calls.contains(&ListQuery::new(2, 10, "")));
        assert!(calls.contains(&ListQuery::new(1, 10, "")));
    }

    #[tokio::test(start_paused = true)]
    async fn test_loading_released_on_every_outcome() {
        let h = harness();
        h.source.push_list(Reply::Now(page(rows(1), 1, 1)));
        h.source.push_list(Reply::Now(Envelope::failure(None)));
        h.source.push_list(Reply::Fail(TransportError::Timeout));

        for _ in 0..3 {
            h.browser.fetch_page().await;
            assert!(!h.browser.snapshot().loading);
        }

        h.source
            .push_list(Reply::After(Duration::from_secs(1), page(rows(2), 2, 1)));
        h.browser.refresh();
        sleep(Duration::from_millis(10)).await;
        assert!(h.browser.snapshot().loading);
        h.browser.settle().await;
        assert!(!h.browser.snapshot().loading);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reported_failure_keeps_items() {
        let h = harness();
        h.source.push_list(Reply::Now(page(rows(2), 2, 1)));
        h.browser.mount();
        h.browser.settle().await;

        h.source
            .push_list(Reply::Now(Envelope::failure(Some("not found".into()))));
        h.browser.refresh();
        h.browser.settle().await;

        assert_eq!(
            messages(&h),
            vec![(NotificationKind::Danger, "not found".to_string())]
        );
        assert_eq!(h.browser.snapshot().items, rows(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reported_failure_without_message_uses_fallback() {
        let h = harness();
        h.source.push_list(Reply::Now(Envelope::failure(None)));
        h.browser.fetch_page().await;

        assert_eq!(
            messages(&h),
            vec![(
                NotificationKind::Danger,
                "Failed to load the associations list".to_string()
            )]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_transport_failure_uses_connectivity_message() {
        let h = harness();
        h.source
            .push_list(Reply::Fail(TransportError::network("connection refused")));
        h.browser.fetch_page().await;

        assert_eq!(
            messages(&h),
            vec![(
                NotificationKind::Danger,
                "Could not reach the server".to_string()
            )]
        );
        assert!(h.browser.snapshot().items.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_confirm_without_target_only_closes_prompt() {
        let h = harness();
        h.browser.confirm_delete().await;

        assert!(h.source.calls().is_empty());
        assert!(!h.browser.snapshot().delete_dialog_open);
        assert!(h.recorder.toasts.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_delete_success_refreshes_current_query() {
        let h = harness();
        h.browser.set_page(2);
        h.browser.settle().await;

        let target = Item::new(7, "Mehr");
        h.browser.request_delete(target.clone());
        let snapshot = h.browser.snapshot();
        assert!(snapshot.delete_dialog_open);
        assert_eq!(snapshot.pending_deletion, Some(target));

        h.source.push_remove(Reply::Now(Envelope::acknowledged("deleted")));
        h.browser.confirm_delete().await;
        h.browser.settle().await;

        assert_eq!(
            h.source.calls(),
            vec![
                Call::List(ListQuery::new(2, 10, "")),
                Call::Remove(7),
                Call::List(ListQuery::new(2, 10, "")),
            ]
        );
        assert_eq!(
            messages(&h),
            vec![(
                NotificationKind::Success,
                "Association deleted successfully.".to_string()
            )]
        );
        let snapshot = h.browser.snapshot();
        assert!(!snapshot.delete_dialog_open);
        assert_eq!(snapshot.pending_deletion, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_delete_transport_failure_closes_prompt() {
        let h = harness();
        h.browser.request_delete(Item::new(3, "Row 3"));
        h.source.push_remove(Reply::Fail(TransportError::Timeout));

        h.browser.confirm_delete().await;
        h.browser.settle().await;

        assert_eq!(h.source.calls(), vec![Call::Remove(3)]);
        assert_eq!(
            messages(&h),
            vec![(
                NotificationKind::Danger,
                "Could not reach the server".to_string()
            )]
        );
        let snapshot = h.browser.snapshot();
        assert!(!snapshot.delete_dialog_open);
        assert_eq!(snapshot.pending_deletion, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_delete_rejected_shows_server_message() {
        let h = harness();
        h.browser.request_delete(Item::new(3, "Row 3"));
        h.source
            .push_remove(Reply::Now(Envelope::failure(Some("in use".into()))));

        h.browser.confirm_delete().await;

        assert_eq!(
            messages(&h),
            vec![(NotificationKind::Danger, "in use".to_string())]
        );
        assert_eq!(h.source.list_calls().len(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_delete() {
        let h = harness();
        h.browser.request_delete(Item::new(1, "Row 1"));
        h.browser.cancel_delete();

        let snapshot = h.browser.snapshot();
        assert!(!snapshot.delete_dialog_open);
        assert_eq!(snapshot.pending_deletion, None);
        assert!(h.source.calls().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_response_is_discarded() {
        let h = harness();
        h.source.on_page(
            2,
            Reply::After(Duration::from_millis(300), page(rows(5), 5, 1)),
        );
        h.source.on_page(3, Reply::Now(page(rows(1), 1, 1)));

        h.browser.set_page(2);
        h.browser.set_page(3);
        h.browser.settle().await;

        assert_eq!(h.browser.snapshot().items, rows(1));
        assert!(!h.browser.snapshot().loading);
    }

    #[tokio::test(start_paused = true)]
    async fn test_last_response_wins_when_not_discarding() {
        let settings = BrowserConfig {
            discard_stale_responses: false,
            ..BrowserConfig::default()
        };
        let h = harness_with("associations", settings);
        h.source.on_page(
            2,
            Reply::After(Duration::from_millis(300), page(rows(5), 5, 1)),
        );
        h.source.on_page(3, Reply::Now(page(rows(1), 1, 1)));

        h.browser.set_page(2);
        h.browser.set_page(3);
        h.browser.settle().await;

        assert_eq!(h.browser.snapshot().items, rows(5));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_failure_is_still_notified() {
        let h = harness();
        h.source
            .on_page(2, Reply::Now(Envelope::failure(Some("gone".into()))));
        h.source.on_page(
            3,
            Reply::After(Duration::from_millis(300), page(rows(1), 1, 1)),
        );

        h.browser.set_page(3);
        h.browser.set_page(2);
        h.browser.set_page(3);
        h.browser.settle().await;

        assert_eq!(
            messages(&h),
            vec![(NotificationKind::Danger, "gone".to_string())]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_pending_search() {
        let h = harness();
        h.browser.set_search_term("abc");
        let Harness { browser, source, .. } = h;
        drop(browser);

        sleep(Duration::from_secs(2)).await;
        assert!(source.calls().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_unsearchable_resource_filters_loaded_page() {
        let h = harness_with("doctors", BrowserConfig::default());
        let mut items = rows(2);
        items.push(Item::new(3, "Other"));
        h.source.push_list(Reply::Now(page(items, 3, 1)));
        h.browser.mount();
        h.browser.settle().await;

        h.browser.set_search_term("ROW");
        sleep(Duration::from_millis(600)).await;
        h.browser.settle().await;

        assert_eq!(h.browser.snapshot().items, rows(2));
        assert_eq!(h.source.list_calls(), vec![ListQuery::new(1, 10, "")]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unsearchable_search_off_first_page_fetches_first_page() {
        let h = harness_with("patients", BrowserConfig::default());
        h.browser.set_page(3);
        h.browser.settle().await;

        h.browser.set_search_term("karimi");
        sleep(Duration::from_millis(600)).await;
        h.browser.settle().await;

        assert_eq!(h.browser.snapshot().page, 1);
        assert_eq!(
            h.source.list_calls(),
            vec![ListQuery::new(3, 10, ""), ListQuery::new(1, 10, "karimi")]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_searchable_resource_shows_page_as_served() {
        let h = harness();
        h.source.push_list(Reply::Now(page(vec![Item::new(3, "Other")], 1, 1)));

        h.browser.set_search_term("row");
        sleep(Duration::from_millis(600)).await;
        h.browser.settle().await;

        assert_eq!(h.browser.snapshot().items, vec![Item::new(3, "Other")]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_navigation_intents() {
        let h = harness();
        let record = Item::new(12, "Mehr");

        assert_eq!(h.browser.create_intent(), NavigationIntent::Create);
        assert_eq!(h.browser.view_intent(&record), NavigationIntent::View(12));
        assert_eq!(h.browser.edit_intent(&record), NavigationIntent::Edit(12));

        h.browser.navigate(h.browser.edit_intent(&record));
        assert_eq!(
            h.recorder.navigation.last().map(|n| n.path()),
            Some("/associations/edit/12".to_string())
        );
    }
}
