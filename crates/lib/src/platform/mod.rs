//! Platform glue: where the well-known storage roots live on this system.

pub mod paths;
