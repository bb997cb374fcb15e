pub mod db;
pub mod generator;
pub mod handlers;
pub mod models;
pub mod scorer;
