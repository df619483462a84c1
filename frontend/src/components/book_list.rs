use leptos::*;
use std::rc::Rc;

use crate::api::BookSource;
use crate::components::alert::{Alert, AlertVariant};
use crate::components::book_card::BookCard;
use crate::components::empty_state::EmptyState;
use crate::components::loading::Loading;
use crate::state::BookListState;

/// Fetches the catalog once from `source` and renders it.
///
/// Shows a loading indicator until the request settles, then either the
/// titles in received order, an empty state, or the failure message.
#[component]
pub fn BookList(source: Rc<dyn BookSource>) -> impl IntoView {
    let state = create_rw_signal(BookListState::Loading);

    // The component body runs once per mount, so this is the only request
    wasm_bindgen_futures::spawn_local(async move {
        let result = source.fetch_books().await;
        if let Err(ref e) = result {
            logging::error!("Failed to load books: {}", e);
        }
        // The list may have been unmounted while the request was in flight
        let _ = state.try_update(|current| current.settle(result));
    });

    view! {
        <section class="book-list">
            {move || state.with(|current| {
                if current.is_loading() {
                    return view! { <Loading label="Loading books..." /> }.into_view();
                }
                if let Some(message) = current.error() {
                    let message = message.to_string();
                    return view! {
                        <Alert variant=AlertVariant::Error>
                            <p class="book-list-error">{message}</p>
                        </Alert>
                    }.into_view();
                }
                if current.books().is_empty() {
                    return view! {
                        <EmptyState icon="📚" message="No books found." />
                    }.into_view();
                }
                view! {
                    <ul class="book-list-items">
                        {current.books().iter().cloned().map(|book| view! {
                            <li class="book-list-item">
                                <BookCard book=book />
                            </li>
                        }).collect_view()}
                    </ul>
                }.into_view()
            })}
        </section>
    }
}
