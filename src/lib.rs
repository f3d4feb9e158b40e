//! Use cases of a small client application and the test doubles used to
//! exercise them.
//!
//! `contexts` holds the use cases and the collaborator traits they depend
//! on, `data` the entities and in-memory collaborators, and `doubles` the
//! recording fakes. `scenario` drives a use case from a YAML description.

pub mod contexts;
pub mod data;
pub mod doubles;
pub mod fundamentals;
pub mod scenario;
