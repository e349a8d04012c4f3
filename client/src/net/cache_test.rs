use std::cell::Cell;

use futures::executor::block_on;
use futures::future;

use super::*;
use crate::net::api;

const T0: u64 = 1_700_000_000_000;

fn stale_ms() -> u64 {
    u64::try_from(STALE_TIME.as_millis()).unwrap()
}

#[test]
fn stale_time_is_five_minutes() {
    assert_eq!(STALE_TIME, Duration::from_secs(300));
}

#[test]
fn empty_cache_has_no_fresh_entry() {
    assert!(ContentCache::default().fresh::<HomeData>(T0).is_none());
}

#[test]
fn second_load_within_stale_window_skips_fetch() {
    let cache = ContentCache::default();
    let calls = Cell::new(0);
    let first = block_on(cache.get_or_fetch_at(T0, || {
        calls.set(calls.get() + 1);
        api::fetch_home()
    }));

    // A fetch that never resolves: the call only completes if served from cache.
    let second = block_on(cache.get_or_fetch_at(T0 + 60_000, || {
        calls.set(calls.get() + 1);
        future::pending::<HomeData>()
    }));

    assert_eq!(first, second);
    assert_eq!(calls.get(), 1);
}

#[test]
fn load_after_stale_window_refetches() {
    let cache = ContentCache::default();
    let calls = Cell::new(0);
    let load = |now| {
        block_on(cache.get_or_fetch_at(now, || {
            calls.set(calls.get() + 1);
            api::fetch_fleet()
        }))
    };
    load(T0);
    load(T0 + stale_ms() - 1);
    assert_eq!(calls.get(), 1);
    load(T0 + stale_ms());
    assert_eq!(calls.get(), 2);
}

#[test]
fn refetch_restarts_the_stale_window() {
    let cache = ContentCache::default();
    let later = T0 + stale_ms() + 5;
    cache.store(T0, block_on(api::fetch_about()));
    assert!(cache.fresh::<AboutData>(later).is_none());
    block_on(cache.get_or_fetch_at(later, api::fetch_about));
    assert!(cache.fresh::<AboutData>(later + 1_000).is_some());
}

#[test]
fn entries_are_keyed_by_content_type() {
    let cache = ContentCache::default();
    cache.store(T0, block_on(api::fetch_product()));
    assert!(cache.fresh::<ProductDetails>(T0).is_some());
    assert!(cache.fresh::<ProductExtraDetails>(T0).is_none());
    assert!(cache.fresh::<SolutionDetails>(T0).is_none());
}

#[test]
fn clones_share_entries() {
    let cache = ContentCache::default();
    let other = cache.clone();
    cache.store(T0, block_on(api::fetch_details()));
    assert!(other.fresh::<ProductExtraDetails>(T0 + 1).is_some());
}

#[test]
fn clock_moving_backwards_keeps_entry_fresh() {
    let cache = ContentCache::default();
    cache.store(T0, block_on(api::fetch_home()));
    assert!(cache.fresh::<HomeData>(T0 - 10).is_some());
}

#[test]
fn now_millis_is_after_2020() {
    assert!(now_millis() > 1_577_836_800_000);
}
