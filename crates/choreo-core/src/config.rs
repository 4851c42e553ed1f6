use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration for the choreography engine and demo UI.
///
/// All animation thresholds are empirically tuned values carried over
/// from the production site; they are exposed here as named fields
/// rather than buried constants.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChoreoConfig {
    #[serde(default)]
    pub track: TrackConfig,
    #[serde(default)]
    pub reveal: RevealConfig,
    #[serde(default)]
    pub motion: MotionConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Scroll track geometry and section transition tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackConfig {
    /// Scroll distance each section owns, in viewport heights.
    #[serde(default = "default_budget_screens")]
    pub budget_screens: f64,
    /// Number of discrete steps the services section budget is split into.
    #[serde(default = "default_services_steps")]
    pub services_steps: u32,
    /// Scroll distance of the contact slide-in window, in px.
    #[serde(default = "default_slide_window_px")]
    pub slide_window_px: f64,
    /// How many sections of scroll an exit/anticipation fade spreads over.
    #[serde(default = "default_phase_spread")]
    pub phase_spread: f64,
    /// Fraction of the about section's active window that passes before
    /// its hand-off fade begins.
    #[serde(default = "default_late_start")]
    pub late_start: f64,
}

impl Default for TrackConfig {
    fn default() -> Self {
        Self {
            budget_screens: default_budget_screens(),
            services_steps: default_services_steps(),
            slide_window_px: default_slide_window_px(),
            phase_spread: default_phase_spread(),
            late_start: default_late_start(),
        }
    }
}

/// Card reveal tuning for the services section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevealConfig {
    /// Number of service cards.
    #[serde(default = "default_card_count")]
    pub card_count: usize,
    /// Minimum scroll distance per card, as a fraction of viewport height.
    #[serde(default = "default_min_unit_fraction")]
    pub min_unit_fraction: f64,
    /// Per-card entrance delay step in milliseconds.
    #[serde(default = "default_stagger_ms")]
    pub stagger_ms: u64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            card_count: default_card_count(),
            min_unit_fraction: default_min_unit_fraction(),
            stagger_ms: default_stagger_ms(),
        }
    }
}

/// Accessibility defaults. The live preference can still be toggled at
/// runtime; this is the starting value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MotionConfig {
    #[serde(default)]
    pub reduced: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Idle tick rate in milliseconds.
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Frame rate while scroll input is pending.
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u16,
    /// Keyboard scroll step in px.
    #[serde(default = "default_scroll_step_px")]
    pub scroll_step_px: f64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            animation_fps: default_animation_fps(),
            scroll_step_px: default_scroll_step_px(),
        }
    }
}

fn default_budget_screens() -> f64 {
    3.0
}

fn default_services_steps() -> u32 {
    9
}

fn default_slide_window_px() -> f64 {
    100.0
}

fn default_phase_spread() -> f64 {
    2.0
}

fn default_late_start() -> f64 {
    0.8
}

fn default_card_count() -> usize {
    3
}

fn default_min_unit_fraction() -> f64 {
    0.3
}

fn default_stagger_ms() -> u64 {
    200
}

fn default_tick_rate() -> u64 {
    100
}

fn default_animation_fps() -> u16 {
    60
}

fn default_scroll_step_px() -> f64 {
    48.0
}

impl ChoreoConfig {
    /// Load configuration from file or return defaults.
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file.
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Configuration file path: ~/.config/choreo/config.toml
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("choreo")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_site_tuning() {
        let config = ChoreoConfig::default();
        assert_eq!(config.track.budget_screens, 3.0);
        assert_eq!(config.track.services_steps, 9);
        assert_eq!(config.track.slide_window_px, 100.0);
        assert_eq!(config.track.late_start, 0.8);
        assert_eq!(config.reveal.card_count, 3);
        assert_eq!(config.reveal.min_unit_fraction, 0.3);
        assert_eq!(config.reveal.stagger_ms, 200);
        assert!(!config.motion.reduced);
    }

    #[test]
    fn test_partial_toml_uses_field_defaults() {
        let config: ChoreoConfig = toml::from_str(
            r#"
            [track]
            budget_screens = 2.0

            [motion]
            reduced = true
            "#,
        )
        .unwrap();
        assert_eq!(config.track.budget_screens, 2.0);
        assert_eq!(config.track.services_steps, 9);
        assert!(config.motion.reduced);
        assert_eq!(config.ui.tick_rate_ms, 100);
    }
}
