// src/numerics/mod.rs
// Top-level numerics module. Exposes a `types` namespace with submodules.

pub mod config;

pub mod types {
    // The submodules live in src/numerics/types/*.rs
    pub mod cofactor;
    pub mod error;
    pub mod matrix;
    pub mod traits;
}
