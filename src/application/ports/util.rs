// src/application/ports/util.rs
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}

/// Mints opaque credentials (unsubscribe tokens).
pub trait TokenGenerator: Send + Sync {
    fn generate(&self) -> String;
}
