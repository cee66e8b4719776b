pub mod logging;
pub mod routes;
