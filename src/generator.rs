use crate::encoder::PathEncoder;
use crate::error::KwResult;
use crate::layout::KeyboardLayout;
use tracing::{debug, info};

/// Replays a fingerprint from several start keys.
#[derive(Debug, Clone)]
pub struct PasswordGenerator<'a> {
    encoder: &'a PathEncoder,
}

impl<'a> PasswordGenerator<'a> {
    pub fn new(encoder: &'a PathEncoder) -> Self {
        Self { encoder }
    }

    /// One candidate per start character, in input order. Starts that
    /// cannot produce a password are dropped; a malformed fingerprint is
    /// an error even when `start_chars` is empty.
    pub fn generate(
        &self,
        fingerprint: &str,
        start_chars: &str,
        target_len: usize,
    ) -> KwResult<Vec<String>> {
        let glyphs = self.encoder.parse(fingerprint)?;
        let passwords: Vec<String> = start_chars
            .chars()
            .filter_map(|start| {
                let candidate = self.encoder.replay(&glyphs, start, target_len);
                if candidate.is_empty() {
                    debug!(?start, "No candidate from start key");
                    None
                } else {
                    Some(candidate)
                }
            })
            .collect();
        info!(
            "Generated {} candidates from {} start keys",
            passwords.len(),
            start_chars.chars().count()
        );
        Ok(passwords)
    }
}

/// `count` start keys drawn uniformly from the layout.
pub fn random_starts(layout: &KeyboardLayout, count: usize, rng: &mut fastrand::Rng) -> String {
    let keys: Vec<char> = layout.keys().collect();
    if keys.is_empty() {
        return String::new();
    }
    (0..count).map(|_| keys[rng.usize(..keys.len())]).collect()
}
