//! Integration test harness

mod containers;
mod docker_client;
