//! In-memory cache for page content fetched during a browser session.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides one `ContentCache` through context. Pages load their
//! content with [`use_cached_content`], so returning to a page within
//! [`STALE_TIME`] renders the cached value without another round trip.
//! Stale entries are refetched and replaced.

#[cfg(test)]
#[path = "cache_test.rs"]
mod cache_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use leptos::prelude::*;

use super::types::{AboutData, FleetData, HomeData, ProductDetails, ProductExtraDetails, SolutionDetails};

/// How long fetched content is served without refetching.
pub const STALE_TIME: Duration = Duration::from_secs(5 * 60);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContentKey {
    Home,
    About,
    Product,
    Solution,
    Details,
    Fleet,
}

#[derive(Clone, Debug)]
pub enum PageContent {
    Home(HomeData),
    About(AboutData),
    Product(ProductDetails),
    Solution(SolutionDetails),
    Details(ProductExtraDetails),
    Fleet(FleetData),
}

/// Content type stored under a fixed cache key.
pub trait CachedContent: Clone + Sized + 'static {
    const KEY: ContentKey;

    fn into_content(self) -> PageContent;
    fn from_content(content: &PageContent) -> Option<Self>;
}

macro_rules! cached_content {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl CachedContent for $ty {
                const KEY: ContentKey = ContentKey::$variant;

                fn into_content(self) -> PageContent {
                    PageContent::$variant(self)
                }

                fn from_content(content: &PageContent) -> Option<Self> {
                    match content {
                        PageContent::$variant(value) => Some(value.clone()),
                        _ => None,
                    }
                }
            }
        )*
    };
}

cached_content! {
    HomeData => Home,
    AboutData => About,
    ProductDetails => Product,
    SolutionDetails => Solution,
    ProductExtraDetails => Details,
    FleetData => Fleet,
}

#[derive(Clone, Debug)]
struct Entry {
    fetched_at_ms: u64,
    content: PageContent,
}

/// Shared store of fetched page content. Clones share entries.
#[derive(Clone, Debug, Default)]
pub struct ContentCache {
    entries: Arc<Mutex<HashMap<ContentKey, Entry>>>,
}

impl ContentCache {
    /// Cached value for `T` if it was fetched less than [`STALE_TIME`] before
    /// `now_ms`.
    pub fn fresh<T: CachedContent>(&self, now_ms: u64) -> Option<T> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        let entry = entries.get(&T::KEY)?;
        if is_fresh(entry.fetched_at_ms, now_ms) { T::from_content(&entry.content) } else { None }
    }

    pub fn store<T: CachedContent>(&self, now_ms: u64, value: T) {
        let entry = Entry { fetched_at_ms: now_ms, content: value.into_content() };
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(T::KEY, entry);
    }

    /// Serve `T` from cache when fresh at `now_ms`, otherwise await `fetch`
    /// and cache its result under the same timestamp.
    pub async fn get_or_fetch_at<T, F, Fut>(&self, now_ms: u64, fetch: F) -> T
    where
        T: CachedContent,
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        if let Some(hit) = self.fresh::<T>(now_ms) {
            return hit;
        }
        let value = fetch().await;
        self.store(now_ms, value.clone());
        value
    }

    /// [`Self::get_or_fetch_at`] against the current clock.
    pub async fn get_or_fetch<T, F, Fut>(&self, fetch: F) -> T
    where
        T: CachedContent,
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        self.get_or_fetch_at(now_millis(), fetch).await
    }
}

fn is_fresh(fetched_at_ms: u64, now_ms: u64) -> bool {
    let stale_ms = u64::try_from(STALE_TIME.as_millis()).unwrap_or(u64::MAX);
    now_ms.saturating_sub(fetched_at_ms) < stale_ms
}

/// Milliseconds since the Unix epoch.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn now_millis() -> u64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| d.as_millis() as u64)
    }
}

/// Local resource for `T` backed by the context `ContentCache`.
pub fn use_cached_content<T, F, Fut>(fetch: F) -> LocalResource<T>
where
    T: CachedContent,
    F: Fn() -> Fut + Clone + 'static,
    Fut: Future<Output = T> + 'static,
{
    let cache = expect_context::<ContentCache>();
    LocalResource::new(move || {
        let cache = cache.clone();
        let fetch = fetch.clone();
        async move { cache.get_or_fetch(fetch).await }
    })
}
