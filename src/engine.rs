use crate::config::AnalysisParams;
use crate::consts::DEFAULT_BACK_REFERENCE_WINDOW;
use crate::cost::StrategyKind;
use crate::encoder::{EncodeOptions, EncodedPath, Fingerprint, PathEncoder};
use crate::error::KwResult;
use crate::layout::{KeyboardLayout, LayoutKind};
use crate::path::{PathFinder, PathStep};
use std::sync::Arc;
use tracing::debug;

/// Password -> path -> fingerprint pipeline. Immutable and shareable
/// across worker threads.
#[derive(Debug, Clone)]
pub struct WalkEngine {
    finder: PathFinder,
    encoder: PathEncoder,
}

#[derive(Debug, Clone)]
pub struct WalkTrace {
    pub path: Vec<PathStep>,
    pub encoded: EncodedPath,
}

impl Default for WalkEngine {
    fn default() -> Self {
        EngineBuilder::new().build()
    }
}

impl WalkEngine {
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    pub fn from_params(params: &AnalysisParams) -> KwResult<Self> {
        let engine = EngineBuilder::new()
            .with_layout(params.layout_kind()?)
            .with_strategy(params.strategy_kind()?)
            .with_back_references(params.back_references)
            .with_window(params.back_reference_window)
            .build();
        debug!(?engine, "Engine ready");
        Ok(engine)
    }

    pub fn finder(&self) -> &PathFinder {
        &self.finder
    }

    pub fn encoder(&self) -> &PathEncoder {
        &self.encoder
    }

    pub fn layout(&self) -> &KeyboardLayout {
        self.finder.layout()
    }

    pub fn fingerprint(&self, password: &str) -> Fingerprint {
        self.encoder.encode(&self.finder.password_path(password))
    }

    pub fn trace(&self, password: &str) -> WalkTrace {
        let path = self.finder.password_path(password);
        let encoded = self.encoder.encode_with_trace(&path);
        WalkTrace { path, encoded }
    }
}

#[derive(Debug, Clone)]
pub struct EngineBuilder {
    layout: LayoutKind,
    strategy: Option<StrategyKind>,
    back_references: bool,
    window: usize,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self {
            layout: LayoutKind::Qwerty,
            strategy: None,
            back_references: false,
            window: DEFAULT_BACK_REFERENCE_WINDOW,
        }
    }

    pub fn with_layout(mut self, layout: LayoutKind) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_strategy(mut self, strategy: Option<StrategyKind>) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_back_references(mut self, enabled: bool) -> Self {
        self.back_references = enabled;
        self
    }

    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    pub fn build(self) -> WalkEngine {
        let layout = Arc::new(KeyboardLayout::new(self.layout));
        let finder = match self.strategy {
            Some(kind) => PathFinder::weighted(layout.clone(), kind.build()),
            None => PathFinder::new(layout.clone()),
        };
        let encoder = PathEncoder::with_options(
            layout,
            EncodeOptions {
                back_references: self.back_references,
                window: self.window,
            },
        );
        WalkEngine { finder, encoder }
    }
}
