//! Todo Footer Component

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

/// "{n} items, {m} left" summary line
#[component]
pub fn TodoFooter() -> impl IntoView {
    let store = use_app_store();

    let summary = move || {
        let cache = store.cache().read();
        if cache.is_empty() {
            "Nothing to do".to_string()
        } else {
            format!("{} items, {} left", cache.len(), cache.remaining())
        }
    };

    view! { <p class="item-count">{summary}</p> }
}
