//! Pluggable effort models used by the weighted path finder.
//!
//! All strategies share the movement model (distance scaled by finger and
//! hand relationships) and differ in their press costs and bonus zones.

use crate::consts::HOME_ROW;
use crate::ergonomics::{EnhancedKeyPosition, ShiftState};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use strum_macros::{Display, EnumIter, EnumString};

/// Constant weights of a strategy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostProfile {
    /// Multiplier when both keys are struck by the same finger.
    pub same_finger_penalty: f64,
    /// Multiplier when the hands alternate.
    pub cross_hand_bonus: f64,
    /// How strongly the target's reach matters while shift is held by the same hand.
    pub shift_reach_factor: f64,
    /// Multiplier when the shift hand must also make the whole movement.
    pub awkward_shift_penalty: f64,
}

impl CostProfile {
    pub const STANDARD: CostProfile = CostProfile {
        same_finger_penalty: 1.5,
        cross_hand_bonus: 0.8,
        shift_reach_factor: 1.5,
        awkward_shift_penalty: 2.0,
    };

    pub const GAMING: CostProfile = CostProfile {
        same_finger_penalty: 1.2,
        cross_hand_bonus: 0.7,
        shift_reach_factor: 1.0,
        awkward_shift_penalty: 2.0,
    };

    pub const MOBILE: CostProfile = CostProfile {
        same_finger_penalty: 1.7,
        cross_hand_bonus: 0.9,
        shift_reach_factor: 1.2,
        awkward_shift_penalty: 2.0,
    };
}

pub trait CostStrategy: Send + Sync {
    fn name(&self) -> &str;

    fn profile(&self) -> &CostProfile;

    /// Effort of striking `key` with the given shift state held.
    fn key_press_cost(&self, key: &EnhancedKeyPosition, shift: ShiftState) -> f64;

    /// Multiplier applied to a movement while shift is held. Pure: depends
    /// only on its arguments and the profile.
    fn shift_penalty(
        &self,
        from: &EnhancedKeyPosition,
        to: &EnhancedKeyPosition,
        shift: ShiftState,
    ) -> f64 {
        let Some(shift_hand) = shift.hand() else {
            return 1.0;
        };
        if to.hand != shift_hand {
            return 1.0;
        }
        let profile = self.profile();
        let mut penalty = 1.0 + to.reach_difficulty * profile.shift_reach_factor;
        if from.hand == shift_hand {
            penalty *= profile.awkward_shift_penalty;
        }
        penalty
    }

    fn movement_cost(
        &self,
        from: &EnhancedKeyPosition,
        to: &EnhancedKeyPosition,
        shift: ShiftState,
    ) -> f64 {
        let dr = from.row.abs_diff(to.row) as f64;
        let dc = from.col.abs_diff(to.col) as f64;
        let mut cost = (dr * dr + dc * dc).sqrt();

        let profile = self.profile();
        if from.hand == to.hand && from.finger == to.finger {
            cost *= profile.same_finger_penalty;
        }
        if from.hand != to.hand {
            cost *= profile.cross_hand_bonus;
        }
        cost * self.shift_penalty(from, to, shift)
    }
}

/// Two-handed touch typing.
#[derive(Debug, Clone, Default)]
pub struct StandardStrategy;

impl CostStrategy for StandardStrategy {
    fn name(&self) -> &str {
        "standard"
    }

    fn profile(&self) -> &CostProfile {
        &CostProfile::STANDARD
    }

    fn key_press_cost(&self, key: &EnhancedKeyPosition, shift: ShiftState) -> f64 {
        let mut cost = (5.0 - key.finger.strength_index()) / 4.0 * (1.0 + key.reach_difficulty);
        if key.is_home_row {
            cost *= 0.8;
        }
        // Shift held by the striking hand constrains it.
        if shift.hand() == Some(key.hand) {
            cost *= 1.5;
        }
        cost
    }
}

/// Left hand parked on the WASD cluster.
#[derive(Debug, Clone, Default)]
pub struct GamingStrategy;

const GAMING_CRITICAL_KEYS: &str = "wasd12345qerfg";

impl GamingStrategy {
    fn in_cluster(key: &EnhancedKeyPosition) -> bool {
        (key.row == HOME_ROW || key.row + 1 == HOME_ROW) && (1..=5).contains(&key.col)
    }
}

impl CostStrategy for GamingStrategy {
    fn name(&self) -> &str {
        "gaming"
    }

    fn profile(&self) -> &CostProfile {
        &CostProfile::GAMING
    }

    fn key_press_cost(&self, key: &EnhancedKeyPosition, shift: ShiftState) -> f64 {
        let mut cost =
            (4.0 - key.finger.strength_index()) / 3.0 * (1.0 + key.reach_difficulty * 0.7);
        if GAMING_CRITICAL_KEYS.contains(key.key.to_ascii_lowercase()) {
            cost *= 0.6;
        }
        if key.is_home_row || Self::in_cluster(key) {
            cost *= 0.7;
        }
        if shift.is_shifted() {
            cost *= 1.2;
        }
        cost
    }
}

/// Thumb typing on a phone-sized keyboard.
#[derive(Debug, Clone, Default)]
pub struct MobileStrategy;

const MOBILE_FREQUENT_KEYS: &str = "earion .";

impl MobileStrategy {
    fn in_thumb_zone(key: &EnhancedKeyPosition) -> bool {
        key.row >= HOME_ROW && (2..=8).contains(&key.col)
    }
}

impl CostStrategy for MobileStrategy {
    fn name(&self) -> &str {
        "mobile"
    }

    fn profile(&self) -> &CostProfile {
        &CostProfile::MOBILE
    }

    fn key_press_cost(&self, key: &EnhancedKeyPosition, shift: ShiftState) -> f64 {
        let mut cost =
            (4.0 - key.finger.strength_index()) / 3.5 * (1.0 + key.reach_difficulty * 1.2);
        if MOBILE_FREQUENT_KEYS.contains(key.key.to_ascii_lowercase()) {
            cost *= 0.8;
        }
        if Self::in_thumb_zone(key) {
            cost *= 0.7;
        }
        if shift.is_shifted() {
            cost *= 1.3;
        }
        cost
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    Standard,
    Gaming,
    Mobile,
}

impl StrategyKind {
    pub fn build(self) -> Arc<dyn CostStrategy> {
        match self {
            StrategyKind::Standard => Arc::new(StandardStrategy),
            StrategyKind::Gaming => Arc::new(GamingStrategy),
            StrategyKind::Mobile => Arc::new(MobileStrategy),
        }
    }
}
