pub mod handlers;
pub mod routes;
pub mod static_files;

pub use routes::create_api_router;
