// src/application/ports/util.rs

/// Turns a display name into a routing slug. Implementations must be total:
/// every input yields a (possibly empty) slug.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
