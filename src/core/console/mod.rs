//! Interactive stdio console.
//!
//! Reads one [`Command`] per line from stdin, applies it to a
//! [`ResourceBrowser`] backed by the HTTP API, and prints the resulting
//! screen through the configured layout. Notifications and navigations are
//! printed as they arrive.
//!
//! Logs go to stderr so they never interleave with the screen.

mod command;

pub use command::{Command, CommandError};

use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Stdout};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, info};

use super::api::{HttpDataSource, TransportError};
use super::config::Config;
use super::error::Result;
use crate::domains::browser::{BrowserSnapshot, ResourceBrowser};
use crate::domains::context::ViewContext;
use crate::domains::details::ResourceDetails;
use crate::domains::layouts::LayoutRegistry;
use crate::domains::navigation::{Navigation, NavigationIntent, NavigationLog, RouteTable};
use crate::domains::notifications::{ChannelNotifier, Notification, capitalize};
use crate::domains::resources::definitions::DynamicRecord;
use crate::domains::resources::{
    Resource, ResourceDescriptor, ResourceId, ResourceLabels, find_resource,
};

type Source = Arc<HttpDataSource<DynamicRecord>>;

/// How often the console checks whether a typed search has been committed.
const SEARCH_POLL: Duration = Duration::from_millis(20);

/// The console host.
pub struct Console {
    config: Config,
    client: Client,
    layouts: LayoutRegistry,
    routes: RouteTable,
    navigator: Arc<NavigationLog>,
    context: ViewContext,
    toasts: UnboundedReceiver<Notification>,
    stdout: Stdout,
}

/// The resource currently on screen.
struct Screen {
    descriptor: ResourceDescriptor,
    source: Source,
    browser: ResourceBrowser<Source>,
}

impl Console {
    pub fn new(config: Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.api.timeout())
            .build()
            .map_err(TransportError::from)?;

        let (notifier, toasts) = ChannelNotifier::new();
        let navigator = Arc::new(NavigationLog::new());
        let context = ViewContext::new(Arc::new(notifier), navigator.clone(), config.app.locale);

        Ok(Self {
            config,
            client,
            layouts: LayoutRegistry::with_builtin(),
            routes: RouteTable::from_registry(),
            navigator,
            context,
            toasts,
            stdout: tokio::io::stdout(),
        })
    }

    /// Run until `:quit` or end of input.
    pub async fn run(mut self) -> Result<()> {
        let start = find_resource(&self.config.app.default_resource)?;
        let mut screen = self.open(start)?;
        screen.browser.mount();
        screen.browser.settle().await;
        self.show(&screen).await?;

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            let command = match Command::parse(&line) {
                Ok(command) => command,
                Err(e) => {
                    self.print(&format!("{e}\n")).await?;
                    continue;
                }
            };
            debug!(?command, "Console command");

            if command == Command::Quit {
                break;
            }
            if command == Command::Help {
                self.print(&format!("{}\n", command::HELP)).await?;
                continue;
            }

            if let Some(next) = self.apply(&screen, command).await? {
                screen = next;
            }
            self.show(&screen).await?;
        }

        info!("Console closed");
        Ok(())
    }

    fn open(&self, descriptor: ResourceDescriptor) -> Result<Screen> {
        let source = Arc::new(HttpDataSource::with_client(
            self.client.clone(),
            &self.config,
            &descriptor,
        )?);
        let browser = ResourceBrowser::new(
            Arc::clone(&source),
            descriptor.clone(),
            &self.config.browser,
            self.context.clone(),
        );
        Ok(Screen {
            descriptor,
            source,
            browser,
        })
    }

    /// Apply one command. Returns a new screen when the resource changed.
    async fn apply(&mut self, screen: &Screen, command: Command) -> Result<Option<Screen>> {
        let browser = &screen.browser;
        match command {
            Command::Search(term) => {
                browser.set_search_term(term);
                while browser.search_pending() {
                    tokio::time::sleep(SEARCH_POLL).await;
                }
            }
            Command::Page(page) => browser.set_page(page),
            Command::Size(size) => {
                if let Err(e) = browser.set_page_size(size) {
                    self.print(&format!("{e}\n")).await?;
                }
            }
            Command::Delete(id) => {
                let staged = browser.snapshot().items.into_iter().find(|r| r.id() == id);
                match staged {
                    Some(record) => browser.request_delete(record),
                    None => self.print(&format!("No record #{id} on this page\n")).await?,
                }
            }
            Command::Confirm => browser.confirm_delete().await,
            Command::Cancel => browser.cancel_delete(),
            Command::View(id) => self.view(screen, id).await?,
            Command::Edit(id) => browser.navigate(NavigationIntent::Edit(id)),
            Command::Create => browser.navigate(browser.create_intent()),
            Command::Refresh => browser.refresh(),
            Command::Go(path) => return self.go(screen, &path).await,
            Command::Help | Command::Quit => {}
        }

        browser.settle().await;
        Ok(None)
    }

    async fn go(&mut self, screen: &Screen, path: &str) -> Result<Option<Screen>> {
        let navigation = if path == self.config.app.authenticated_entry_path {
            let home = find_resource(&self.config.app.default_resource)?;
            Navigation::new(home.name, NavigationIntent::List)
        } else {
            match self.routes.resolve(path) {
                Some(navigation) => navigation,
                None => {
                    self.print(&format!("No route for {path}\n")).await?;
                    return Ok(None);
                }
            }
        };

        let next = if navigation.resource == screen.descriptor.name {
            None
        } else {
            let descriptor = find_resource(navigation.resource)?;
            let next = self.open(descriptor)?;
            next.browser.mount();
            next.browser.settle().await;
            Some(next)
        };

        let target = next.as_ref().unwrap_or(screen);
        match navigation.intent {
            NavigationIntent::List => target.browser.refresh(),
            NavigationIntent::View(id) => self.view(target, id).await?,
            intent => target.browser.navigate(intent),
        }
        target.browser.settle().await;

        Ok(next)
    }

    async fn view(&mut self, screen: &Screen, id: ResourceId) -> Result<()> {
        let details = ResourceDetails::new(
            Arc::clone(&screen.source),
            screen.descriptor.clone(),
            self.context.clone(),
        );
        if let Some(record) = details.load(id).await {
            let labels = self.labels(&screen.descriptor);
            let title = format!("{} #{}", capitalize(labels.singular), record.id());
            let body = serde_json::to_string_pretty(&record)?;
            self.frame(&title, &body).await?;
        }
        Ok(())
    }

    /// Print pending notifications, navigations and the list screen.
    async fn show(&mut self, screen: &Screen) -> Result<()> {
        let mut out = String::new();
        while let Ok(notification) = self.toasts.try_recv() {
            out.push_str(&format!("{notification}\n"));
        }
        for navigation in self.navigator.take() {
            out.push_str(&format!("-> {}\n", navigation.path()));
        }
        self.print(&out).await?;

        let labels = self.labels(&screen.descriptor);
        let title = format!("{} | {}", self.config.app.name, capitalize(labels.plural));
        let body = render_list(&screen.browser.snapshot(), labels);
        self.frame(&title, &body).await
    }

    async fn frame(&mut self, title: &str, body: &str) -> Result<()> {
        let rendered = self.layouts.resolve(self.config.app.layout)?.render(title, body);
        self.print(&rendered).await
    }

    async fn print(&mut self, text: &str) -> Result<()> {
        self.stdout.write_all(text.as_bytes()).await?;
        self.stdout.flush().await?;
        Ok(())
    }

    fn labels(&self, descriptor: &ResourceDescriptor) -> ResourceLabels {
        descriptor.labels(self.config.app.locale)
    }
}

/// Text body of a list screen.
pub fn render_list<T: Resource>(snapshot: &BrowserSnapshot<T>, labels: ResourceLabels) -> String {
    let mut lines = Vec::new();

    if !snapshot.search_term.is_empty() {
        lines.push(format!("search: {}", snapshot.search_term));
    }
    if snapshot.loading {
        lines.push("loading...".to_string());
    }
    if snapshot.items.is_empty() {
        lines.push(format!("no {} found", labels.plural));
    }
    for item in &snapshot.items {
        lines.push(format!("{:>6}  {}", item.id(), item.display_name()));
    }

    let mut footer = format!(
        "{} {} | {} per page",
        snapshot.total_items, labels.plural, snapshot.page_size
    );
    if snapshot.pager_visible {
        footer.push_str(&format!(" | page {}/{}", snapshot.page, snapshot.total_pages));
    }
    lines.push(footer);

    if let Some(target) = &snapshot.pending_deletion {
        if snapshot.delete_dialog_open {
            lines.push(format!(
                "delete {} \"{}\"? (:confirm / :cancel)",
                labels.singular,
                target.display_name()
            ));
        }
    }

    lines.join("\n")
}
