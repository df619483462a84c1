use leptos::*;
use std::rc::Rc;

use crate::api::{BookSource, HttpBookSource};
use crate::components::book_list::BookList;

#[component]
pub fn App() -> impl IntoView {
    let source: Rc<dyn BookSource> = Rc::new(HttpBookSource::default());

    view! {
        <main class="container">
            <header class="page-header">
                <h1>"Bookshelf"</h1>
            </header>
            <BookList source=source />
        </main>
    }
}
