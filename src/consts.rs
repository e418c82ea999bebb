/// Two fingerprints belong to the same pattern group only when their
/// similarity is strictly greater than this value.
pub const SIMILARITY_THRESHOLD: f64 = 0.8;

/// Version of the glyph table written next to persisted fingerprints.
/// Version 2 = shift-aware glyphs, `Release` dropped, counted redundancy removal.
pub const FINGERPRINT_FORMAT_VERSION: u32 = 2;

/// Passwords shorter than this are ignored by bulk ingestion.
pub const DEFAULT_MIN_PASSWORD_LEN: usize = 4;

/// Look-back distance (in glyphs) of the back-reference compressor.
pub const DEFAULT_BACK_REFERENCE_WINDOW: usize = 32;

/// The grid row fingers rest on (0 = number row).
pub const HOME_ROW: usize = 2;

// Metadata keys written onto PathSteps.
pub const META_TOTAL_EFFORT: &str = "TotalEffort";
pub const META_REDUNDANT_MOVES: &str = "RedundantMoveCount";
pub const META_REPEAT_COUNT: &str = "RepeatCount";
pub const META_SHIFT_SIDE: &str = "ShiftSide";
