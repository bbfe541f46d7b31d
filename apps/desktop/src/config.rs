use std::{collections::HashMap, fs};

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub queue_capacity: usize,
    pub frame_interval_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            canvas_width: 617.0,
            canvas_height: 463.0,
            queue_capacity: 1024,
            frame_interval_ms: 33,
        }
    }
}

/// Defaults, then an optional `handbox.toml` in the working directory, then
/// environment overrides.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("handbox.toml") {
        apply_file(&mut settings, &raw);
    }
    apply_env(&mut settings);

    settings
}

fn apply_file(settings: &mut Settings, raw: &str) {
    let Ok(file_cfg) = toml::from_str::<HashMap<String, toml::Value>>(raw) else {
        return;
    };
    if let Some(v) = file_cfg.get("canvas_width").and_then(as_f64) {
        settings.canvas_width = v;
    }
    if let Some(v) = file_cfg.get("canvas_height").and_then(as_f64) {
        settings.canvas_height = v;
    }
    if let Some(v) = file_cfg.get("queue_capacity").and_then(|v| v.as_integer()) {
        if v > 0 {
            settings.queue_capacity = v as usize;
        }
    }
    if let Some(v) = file_cfg.get("frame_interval_ms").and_then(|v| v.as_integer()) {
        if v >= 0 {
            settings.frame_interval_ms = v as u64;
        }
    }
}

fn as_f64(value: &toml::Value) -> Option<f64> {
    value.as_float().or_else(|| value.as_integer().map(|v| v as f64))
}

fn apply_env(settings: &mut Settings) {
    if let Ok(v) = std::env::var("HANDBOX__CANVAS_WIDTH") {
        if let Ok(parsed) = v.parse::<f64>() {
            settings.canvas_width = parsed;
        }
    }
    if let Ok(v) = std::env::var("HANDBOX__CANVAS_HEIGHT") {
        if let Ok(parsed) = v.parse::<f64>() {
            settings.canvas_height = parsed;
        }
    }
    if let Ok(v) = std::env::var("HANDBOX__QUEUE_CAPACITY") {
        if let Ok(parsed) = v.parse::<usize>() {
            if parsed > 0 {
                settings.queue_capacity = parsed;
            }
        }
    }
    if let Ok(v) = std::env::var("HANDBOX__FRAME_INTERVAL_MS") {
        if let Ok(parsed) = v.parse::<u64>() {
            settings.frame_interval_ms = parsed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_values_override_defaults() {
        let mut settings = Settings::default();
        apply_file(
            &mut settings,
            "canvas_width = 800.0\ncanvas_height = 600\nframe_interval_ms = 16\n",
        );
        assert_eq!(settings.canvas_width, 800.0);
        assert_eq!(settings.canvas_height, 600.0);
        assert_eq!(settings.frame_interval_ms, 16);
        assert_eq!(settings.queue_capacity, 1024);
    }

    #[test]
    fn malformed_file_leaves_defaults_untouched() {
        let mut settings = Settings::default();
        apply_file(&mut settings, "canvas_width = [not toml");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn nonsensical_values_are_ignored() {
        let mut settings = Settings::default();
        apply_file(&mut settings, "queue_capacity = 0\nframe_interval_ms = -5\n");
        assert_eq!(settings.queue_capacity, 1024);
        assert_eq!(settings.frame_interval_ms, 33);
    }
}
