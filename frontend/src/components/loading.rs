use leptos::*;

/// Spinner with a visible label, so assistive tech and tests can find it.
#[component]
pub fn Loading(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    let label = label.unwrap_or_else(|| "Loading...".to_string());

    view! {
        <div class="loading" role="status" aria-live="polite">
            <div class="spinner"></div>
            <p class="loading-label">{label}</p>
        </div>
    }
}
