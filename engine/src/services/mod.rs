// Report generation over the loaded catalog
pub mod catalog_service;

pub use catalog_service::CatalogService;
