// MyVacation shared type definitions
// Each submodule defines types used across the crate.

pub mod errors;
pub mod history;
pub mod page;
pub mod result;
pub mod route;
pub mod settings;
