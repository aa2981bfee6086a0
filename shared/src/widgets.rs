//! Dashboard widget state
//!
//! Timing and geometry for the small page widgets. Each widget keeps its
//! own local state; nothing here touches the DOM.

use serde::{Deserialize, Serialize};

use crate::errors::{ensure_positive, Result};

// ============================================================================
// Water glass fill animation
// ============================================================================

pub const FILL_DURATION_MS: u32 = 1500;
pub const FILL_STEPS: u32 = 50;
/// Glass height reached at 100% so the top stays empty
pub const FILL_MAX_PERCENT: f64 = 80.0;

/// One rendered frame of the water glass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterFrame {
    /// Milliseconds after the animation started
    pub at_ms: u32,
    pub fill_percent: f64,
    pub label: String,
}

/// Fill animation that ticks toward the recommended intake and then stops
#[derive(Debug, Clone)]
pub struct WaterFillAnimation {
    target_liters: f64,
    increment: f64,
    current: f64,
    tick: u32,
    done: bool,
}

impl WaterFillAnimation {
    pub fn new(target_liters: f64) -> Result<Self> {
        let target_liters = ensure_positive("recommended_water", target_liters)?;
        Ok(Self {
            target_liters,
            increment: target_liters / FILL_STEPS as f64,
            current: 0.0,
            tick: 0,
            done: false,
        })
    }

    /// Interval between frames
    pub fn step_ms() -> u32 {
        FILL_DURATION_MS / FILL_STEPS
    }

    pub fn is_done(&self) -> bool {
        self.done
    }
}

impl Iterator for WaterFillAnimation {
    type Item = WaterFrame;

    fn next(&mut self) -> Option<WaterFrame> {
        if self.done {
            return None;
        }
        self.tick += 1;
        self.current += self.increment;
        if self.current >= self.target_liters {
            self.current = self.target_liters;
            self.done = true;
        }
        Some(WaterFrame {
            at_ms: self.tick * Self::step_ms(),
            fill_percent: self.current / self.target_liters * FILL_MAX_PERCENT,
            label: format!("{:.1}L", self.current),
        })
    }
}

// ============================================================================
// Alerts
// ============================================================================

pub const ALERT_DISMISS_MS: u32 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    #[default]
    Error,
    Success,
}

impl AlertKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            AlertKind::Error => "alert alert-error",
            AlertKind::Success => "alert alert-success",
        }
    }
}

/// A transient message shown above the form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub kind: AlertKind,
    pub class_name: String,
    pub message: String,
    pub dismiss_after_ms: u32,
}

impl Alert {
    pub fn new(kind: AlertKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            class_name: kind.css_class().to_string(),
            message: message.into(),
            dismiss_after_ms: ALERT_DISMISS_MS,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(AlertKind::Error, message)
    }
}

// ============================================================================
// Fade-in and tooltips
// ============================================================================

/// Fade-in elements are forced visible after this long
pub const FADE_IN_FALLBACK_MS: u32 = 1000;

/// Gap between a tooltip and the element it describes
pub const TOOLTIP_OFFSET_PX: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub top: f64,
    pub left: f64,
}

/// Place a tooltip of `tip_width` x `tip_height` centered above `anchor`
pub fn tooltip_position(anchor: Rect, tip_width: f64, tip_height: f64) -> Position {
    Position {
        top: anchor.top - tip_height - TOOLTIP_OFFSET_PX,
        left: anchor.left + anchor.width / 2.0 - tip_width / 2.0,
    }
}
