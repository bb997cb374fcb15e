mod common;
mod generator;
mod routes;
