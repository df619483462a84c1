use leptos::*;
use shared::Book;

/// One catalog entry: title first, then author, year and ISBN.
#[component]
pub fn BookCard(book: Book) -> impl IntoView {
    view! {
        <article class="book-card" data-book-id=book.id>
            <h3 class="book-title">{book.title}</h3>
            <p class="book-meta">
                <span class="book-author">{book.author}</span>
                " · "
                <span class="book-year">{book.year}</span>
            </p>
            <p class="book-isbn">"ISBN " {book.isbn}</p>
        </article>
    }
}
