//! Integration tests for the package tree pipeline

mod cli_contracts;
mod scenario;
mod support;
