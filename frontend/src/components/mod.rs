pub mod alert;
pub mod book_card;
pub mod book_list;
pub mod empty_state;
pub mod loading;
