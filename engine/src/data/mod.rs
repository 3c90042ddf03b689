// Item feed loading and the in-memory catalog
pub mod catalog;
pub mod feed;
