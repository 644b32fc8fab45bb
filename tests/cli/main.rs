#[path = "../harness/mod.rs"]
mod harness;

mod list;
mod setup;
