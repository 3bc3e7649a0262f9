//! Application configuration for the demo.

use bevy::prelude::*;
use bevy::winit::{UpdateMode, WinitSettings};
use std::time::Duration;
use swatch_core::PickerLayout;

/// Default frame pacing target.
const DEFAULT_FPS: f64 = 60.0;

/// Where the picker layout came from.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutSource {
    Default,
    /// Parsed from `SWATCH_LAYOUT`.
    Env,
    /// `SWATCH_LAYOUT` was set but unusable; defaults were used instead.
    EnvRejected(String),
}

/// Runtime configuration for the Swatch demo application.
#[derive(Resource, Clone)]
pub struct AppConfig {
    /// Frame pacing target in frames per second.
    pub fps: f64,
    /// Picker geometry; also determines the window size.
    pub layout: PickerLayout,
    pub layout_source: LayoutSource,
}

impl Default for AppConfig {
    fn default() -> Self {
        let fps = parse_fps(std::env::var("SWATCH_FPS").ok().as_deref());
        let (layout, layout_source) = match std::env::var("SWATCH_LAYOUT") {
            Ok(raw) => parse_layout(&raw),
            Err(_) => (PickerLayout::default(), LayoutSource::Default),
        };
        Self {
            fps,
            layout,
            layout_source,
        }
    }
}

impl AppConfig {
    /// Winit update pacing: redraw on input, and at least once per frame
    /// interval otherwise.
    pub fn winit_settings(&self) -> WinitSettings {
        let frame = Duration::from_secs_f64(1.0 / self.fps);
        WinitSettings {
            focused_mode: UpdateMode::reactive(frame),
            unfocused_mode: UpdateMode::reactive_low_power(frame),
        }
    }
}

fn parse_fps(raw: Option<&str>) -> f64 {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|fps| fps.is_finite() && *fps > 0.0)
        .unwrap_or(DEFAULT_FPS)
}

/// Parse a JSON layout override. Missing fields keep their defaults.
fn parse_layout(raw: &str) -> (PickerLayout, LayoutSource) {
    let parsed = serde_json::from_str::<PickerLayout>(raw)
        .map_err(|e| e.to_string())
        .and_then(|layout| {
            layout
                .validate()
                .map(|()| layout)
                .map_err(|e| e.to_string())
        });
    match parsed {
        Ok(layout) => (layout, LayoutSource::Env),
        Err(reason) => (PickerLayout::default(), LayoutSource::EnvRejected(reason)),
    }
}

/// Startup system: report the effective configuration.
pub fn log_config(config: Res<AppConfig>) {
    let (width, height) = config.layout.window_size();
    tracing::info!(
        "Swatch demo: {}x{} window, {} fps target, {} hue samples",
        width,
        height,
        config.fps,
        config.layout.sample_count
    );
    match &config.layout_source {
        LayoutSource::Default => {}
        LayoutSource::Env => tracing::info!("Layout loaded from SWATCH_LAYOUT"),
        LayoutSource::EnvRejected(reason) => {
            tracing::warn!("Ignoring SWATCH_LAYOUT ({reason}); using the default layout")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fps_defaults_and_overrides() {
        assert_eq!(parse_fps(None), 60.0);
        assert_eq!(parse_fps(Some("144")), 144.0);
        assert_eq!(parse_fps(Some(" 30 ")), 30.0);
        assert_eq!(parse_fps(Some("fast")), 60.0);
        assert_eq!(parse_fps(Some("0")), 60.0);
        assert_eq!(parse_fps(Some("-5")), 60.0);
    }

    #[test]
    fn test_layout_override_merges_with_defaults() {
        let (layout, source) = parse_layout(r#"{"sample_spacing": 4.0}"#);
        assert_eq!(source, LayoutSource::Env);
        assert_eq!(layout.sample_spacing, 4.0);
        assert_eq!(layout.sample_count, 192);
    }

    #[test]
    fn test_malformed_layout_falls_back() {
        let (layout, source) = parse_layout("{not json");
        assert_eq!(layout, PickerLayout::default());
        assert!(matches!(source, LayoutSource::EnvRejected(_)));
    }

    #[test]
    fn test_invalid_layout_falls_back() {
        let (layout, source) = parse_layout(r#"{"sample_count": 5}"#);
        assert_eq!(layout, PickerLayout::default());
        let LayoutSource::EnvRejected(reason) = source else {
            panic!("expected rejection");
        };
        assert!(reason.contains("sample_count"), "{reason}");
    }
}
