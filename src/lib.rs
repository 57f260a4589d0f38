pub mod api;
pub mod error;
pub mod flash;
pub mod routes;
pub mod server;
pub mod state;
pub mod template_context;
mod static_files;
mod templates;
