use crate::consts::SIMILARITY_THRESHOLD;
use crate::encoder::Fingerprint;
use crate::engine::WalkEngine;
use crate::path::PathStep;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// Passwords whose fingerprints match the group's representative.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatternGroup {
    pub fingerprint: Fingerprint,
    pub passwords: Vec<String>,
}

/// Groups passwords by walk similarity, in the order groups are founded.
///
/// A password joins the first group whose representative fingerprint is
/// strictly more than `threshold` similar to its own; otherwise it founds
/// a new group.
#[derive(Debug)]
pub struct PasswordAnalyzer {
    engine: Arc<WalkEngine>,
    threshold: f64,
    groups: Vec<PatternGroup>,
    last_path: Vec<PathStep>,
    smallest: Option<Fingerprint>,
}

impl PasswordAnalyzer {
    pub fn new(engine: Arc<WalkEngine>) -> Self {
        Self {
            engine,
            threshold: SIMILARITY_THRESHOLD,
            groups: Vec::new(),
            last_path: Vec::new(),
            smallest: None,
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Returns the password's fingerprint, or `None` when the password is
    /// blank or its walk encodes to nothing (both leave state untouched).
    pub fn analyze(&mut self, password: &str) -> Option<Fingerprint> {
        if password.trim().is_empty() {
            return None;
        }

        let path = self.engine.finder().password_path(password);
        let fingerprint = self.engine.encoder().encode(&path);
        if fingerprint.is_empty() {
            debug!(len = password.chars().count(), "Password produced an empty walk");
            return None;
        }

        let threshold = self.threshold;
        match self
            .groups
            .iter_mut()
            .find(|g| g.fingerprint.similarity(&fingerprint) > threshold)
        {
            Some(group) => group.passwords.push(password.to_string()),
            None => self.groups.push(PatternGroup {
                fingerprint: fingerprint.clone(),
                passwords: vec![password.to_string()],
            }),
        }

        self.smallest = Some(fingerprint.clone());
        self.last_path = path;
        Some(fingerprint)
    }

    pub fn analyze_batch<I, S>(&mut self, passwords: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for password in passwords {
            self.analyze(password.as_ref());
        }
    }

    pub fn pattern_groups(&self) -> &[PatternGroup] {
        &self.groups
    }

    pub fn group(&self, fingerprint: &Fingerprint) -> Option<&[String]> {
        self.groups
            .iter()
            .find(|g| &g.fingerprint == fingerprint)
            .map(|g| g.passwords.as_slice())
    }

    /// Reduced fingerprint of the most recently analyzed password.
    pub fn smallest_path(&self) -> Option<&Fingerprint> {
        self.smallest.as_ref()
    }

    pub fn last_path(&self) -> &[PathStep] {
        &self.last_path
    }
}
