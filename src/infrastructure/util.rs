use crate::application::ports::util::{SlugGenerator, TokenGenerator};
use rand::RngCore;
use slug::slugify;

#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}

/// 256-bit random credentials, hex-encoded.
#[derive(Default, Clone)]
pub struct HexTokenGenerator;

impl TokenGenerator for HexTokenGenerator {
    fn generate(&self) -> String {
        let mut bytes = [0u8; 32];
        rand::rngs::OsRng.fill_bytes(&mut bytes);
        hex::encode(bytes)
    }
}
