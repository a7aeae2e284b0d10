// Module layout (Clean Architecture style)
// - bootstrap: configuration, dependency wiring and lifecycle
// - infrastructure: MySQL pool and sqlx repositories
// - presentation: HTTP handlers/routing and CLI commands
// - application: ports, validation and use cases
// - domain: core models

pub mod application;
pub mod bootstrap;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
