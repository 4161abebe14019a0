pub mod advisor;
pub mod api_connection;
pub mod cli;
pub mod config;
pub mod estimator;
pub mod food_list;
pub mod recommendation;
