//! Single-call entry points over a shared [`WalkEngine`].

use crate::batch::{self, FingerprintTally};
use crate::encoder::Fingerprint;
use crate::engine::WalkEngine;
use crate::error::KwResult;
use crate::generator::PasswordGenerator;
use std::collections::HashMap;

/// Empty fingerprint when the password has no resolvable walk.
pub fn analyze_password(engine: &WalkEngine, password: &str) -> Fingerprint {
    engine.fingerprint(password)
}

pub fn analyze_batch<S>(engine: &WalkEngine, passwords: &[S]) -> HashMap<Fingerprint, FingerprintTally>
where
    S: AsRef<str> + Sync,
{
    batch::analyze_batch(engine, passwords).into_map()
}

pub fn generate_passwords(
    engine: &WalkEngine,
    fingerprint: &str,
    starting_chars: &str,
    length: usize,
) -> KwResult<Vec<String>> {
    PasswordGenerator::new(engine.encoder()).generate(fingerprint, starting_chars, length)
}

/// Lowercased, unshifted form of `password`; characters off the layout are dropped.
pub fn simplify_password(engine: &WalkEngine, password: &str) -> String {
    engine.layout().simplify(password)
}
