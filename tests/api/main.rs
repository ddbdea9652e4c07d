//! Integration tests
//! Every test spawns the whole application on a random port against a freshly created database.

mod health_check;
mod helpers;
mod subscribe;
