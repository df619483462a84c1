use leptos::*;

/// Shown in place of a list that loaded with nothing in it.
#[component]
pub fn EmptyState(
    #[prop(optional, into)] icon: Option<String>,
    #[prop(into)] message: String,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            {icon.map(|i| view! {
                <span class="empty-state-icon">{i}</span>
            })}
            <p class="empty-state-message">{message}</p>
        </div>
    }
}
