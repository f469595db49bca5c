pub mod catalog_service;
pub mod data_service;
pub mod kolada_service;
pub mod municipality_service;

pub use catalog_service::*;
pub use data_service::*;
pub use kolada_service::*;
pub use municipality_service::*;
