//! Leptos Query Cache
//!
//! Minimal request cache for Leptos CSR apps.
//! Queries are grouped under a logical key; invalidating the key bumps its
//! version and every query registered under it re-fetches.

use std::collections::HashMap;
use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

/// Version counter per query key
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryVersions {
    versions: HashMap<&'static str, u32>,
}

impl QueryVersions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current version of a key (0 if never invalidated)
    pub fn get(&self, key: &str) -> u32 {
        self.versions.get(key).copied().unwrap_or(0)
    }

    /// Bump a key, returning the new version
    pub fn invalidate(&mut self, key: &'static str) -> u32 {
        let version = self.versions.entry(key).or_insert(0);
        *version = version.wrapping_add(1);
        *version
    }
}

/// Cache handle provided via context
#[derive(Clone, Copy)]
pub struct QueryClient {
    versions: RwSignal<QueryVersions>,
}

impl QueryClient {
    pub fn new() -> Self {
        Self {
            versions: RwSignal::new(QueryVersions::new()),
        }
    }

    /// Tracked read of a key's version
    pub fn version(&self, key: &str) -> u32 {
        self.versions.with(|v| v.get(key))
    }

    pub fn version_untracked(&self, key: &str) -> u32 {
        self.versions.with_untracked(|v| v.get(key))
    }

    /// Mark every query under `key` stale so it re-fetches
    pub fn invalidate(&self, key: &'static str) {
        self.versions.update(|v| {
            v.invalidate(key);
        });
    }
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a client and provide it to all children
pub fn provide_query_client() -> QueryClient {
    let client = QueryClient::new();
    provide_context(client);
    client
}

/// Get the query client from context
pub fn use_query_client() -> QueryClient {
    expect_context::<QueryClient>()
}

/// Reactive state of a query
pub struct Query<T: 'static> {
    pub data: ReadSignal<Option<T>>,
    pub loading: ReadSignal<bool>,
    pub error: ReadSignal<Option<String>>,
    /// Changes only when the query flips between failed and not failed
    pub failed: Memo<bool>,
}

impl<T: 'static> Clone for Query<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for Query<T> {}

/// Writable side of a query
struct QuerySignals<T: 'static> {
    data: RwSignal<Option<T>>,
    loading: RwSignal<bool>,
    error: RwSignal<Option<String>>,
}

impl<T: 'static> Clone for QuerySignals<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for QuerySignals<T> {}

impl<T: Send + Sync + 'static> QuerySignals<T> {
    fn new() -> Self {
        Self {
            data: RwSignal::new(None),
            loading: RwSignal::new(true),
            error: RwSignal::new(None),
        }
    }

    fn query(&self) -> Query<T> {
        let error = self.error;
        Query {
            data: self.data.read_only(),
            loading: self.loading.read_only(),
            error: error.read_only(),
            failed: Memo::new(move |_| error.with(Option::is_some)),
        }
    }

    fn start(&self) {
        if !self.loading.get_untracked() {
            self.loading.set(true);
        }
    }

    /// Store a fetch result. Unchanged flags are not written, so readers
    /// of `error`/`loading` are not woken by a plain refetch.
    fn settle(&self, result: Result<T, String>) {
        match result {
            Ok(value) => {
                self.data.set(Some(value));
                if self.error.with_untracked(Option::is_some) {
                    self.error.set(None);
                }
            }
            Err(e) => self.error.set(Some(e)),
        }
        if self.loading.get_untracked() {
            self.loading.set(false);
        }
    }

    /// Settle only if `key` is still at `started`; returns whether it did
    fn settle_if_current(
        &self,
        client: &QueryClient,
        key: &str,
        started: u32,
        result: Result<T, String>,
    ) -> bool {
        if client.version_untracked(key) != started {
            return false;
        }
        self.settle(result);
        true
    }
}

/// Run `fetcher` on mount and again whenever `key` is invalidated.
///
/// Results of a fetch started under an older version of the key are dropped.
pub fn use_query<T, F, Fut>(key: &'static str, fetcher: F) -> Query<T>
where
    T: Send + Sync + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let client = use_query_client();
    let signals = QuerySignals::new();

    Effect::new(move |_| {
        let version = client.version(key);
        signals.start();
        let fut = fetcher();
        spawn_local(async move {
            let result = fut.await;
            signals.settle_if_current(&client, key, version, result);
        });
    });

    signals.query()
}

/// Fire-and-forget mutation with a pending flag
#[derive(Clone, Copy)]
pub struct Mutation {
    pending: RwSignal<bool>,
}

impl Mutation {
    pub fn new() -> Self {
        Self {
            pending: RwSignal::new(false),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }

    /// Spawn `fut`, then hand its result to `on_success` or `on_error`
    pub fn mutate<T, E, Fut, S, F>(&self, fut: Fut, on_success: S, on_error: F)
    where
        T: 'static,
        E: 'static,
        Fut: Future<Output = Result<T, E>> + 'static,
        S: FnOnce(T) + 'static,
        F: FnOnce(E) + 'static,
    {
        self.pending.set(true);
        spawn_local(self.run(fut, on_success, on_error));
    }

    async fn run<T, E, Fut, S, F>(self, fut: Fut, on_success: S, on_error: F)
    where
        Fut: Future<Output = Result<T, E>>,
        S: FnOnce(T),
        F: FnOnce(E),
    {
        let result = fut.await;
        self.pending.set(false);
        match result {
            Ok(value) => on_success(value),
            Err(e) => on_error(e),
        }
    }
}

impl Default for Mutation {
    fn default() -> Self {
        Self::new()
    }
}
