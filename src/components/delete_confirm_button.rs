//! Delete Confirm Button Component
//!
//! Inline delete confirmation for a todo row.

use leptos::prelude::*;

const PROMPT_LABEL_MAX: usize = 24;

/// Confirmation text naming the todo, shortened for long labels
pub fn confirm_prompt(label: &str) -> String {
    let label = label.trim();
    if label.chars().count() > PROMPT_LABEL_MAX {
        let short: String = label.chars().take(PROMPT_LABEL_MAX - 1).collect();
        format!("Delete \"{}…\"?", short.trim_end())
    } else {
        format!("Delete \"{}\"?", label)
    }
}

/// Inline delete confirmation for one todo
///
/// Shows a × button; clicking it asks to confirm with ✓/✗. Clicks and
/// double-clicks stay inside the control so the row's double-click
/// toggle never fires from here.
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] label: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);
    let prompt = confirm_prompt(&label);
    let title = format!("Delete \"{}\"", label.trim());

    view! {
        <span
            class="delete-control"
            on:click=|ev| ev.stop_propagation()
            on:dblclick=|ev| ev.stop_propagation()
        >
            <Show
                when=move || confirming.get()
                fallback=move || view! {
                    <button
                        class="delete-btn"
                        title=title.clone()
                        on:click=move |_| set_confirming.set(true)
                    >
                        "×"
                    </button>
                }
            >
                <span class="delete-confirm">
                    <span class="delete-confirm-text">{prompt.clone()}</span>
                    <button
                        class="confirm-btn"
                        on:click=move |_| {
                            set_confirming.set(false);
                            on_confirm.run(());
                        }
                    >
                        "✓"
                    </button>
                    <button class="cancel-btn" on:click=move |_| set_confirming.set(false)>
                        "✗"
                    </button>
                </span>
            </Show>
        </span>
    }
}
