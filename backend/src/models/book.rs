use sqlx::FromRow;

/// Database model for books
#[derive(Debug, Clone, FromRow)]
pub struct BookRow {
    pub id: String,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub year: i32,
}

impl BookRow {
    pub fn to_shared(&self) -> shared::Book {
        shared::Book {
            id: self.id.clone(),
            title: self.title.clone(),
            author: self.author.clone(),
            isbn: self.isbn.clone(),
            year: self.year,
        }
    }
}
