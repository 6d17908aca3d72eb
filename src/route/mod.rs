pub mod base;
pub mod books;
pub mod echo;
