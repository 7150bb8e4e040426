use crate::drag::DEFAULT_DROP_THRESHOLD_PX;
use tracing::level_filters::LevelFilter;

/// Runtime knobs, read from `window.ENV` when present.
///
/// ```html
/// <script>window.ENV = { DROP_THRESHOLD_PX: 8, SEED_MENU: false, LOG_LEVEL: "debug" };</script>
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct EditorConfig {
    /// Height of the before/after bands at the top and bottom of a row.
    pub drop_threshold_px: f64,
    /// Start from the demo menu instead of an empty one.
    pub seed_menu: bool,
    pub log_level: LevelFilter,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            drop_threshold_px: DEFAULT_DROP_THRESHOLD_PX,
            seed_menu: true,
            log_level: LevelFilter::INFO,
        }
    }
}

impl EditorConfig {
    pub fn new() -> Self {
        let env = web_sys::window()
            .and_then(|w| w.get("ENV"))
            .filter(|env| !env.is_undefined() && env.is_object());

        let Some(env) = env else {
            return Self::default();
        };

        Self::from_lookup(|key| {
            let v = js_sys::Reflect::get(&env, &key.into()).ok()?;
            if v.is_undefined() || v.is_null() {
                return None;
            }
            // Numbers and booleans are accepted as well as strings.
            v.as_string()
                .or_else(|| v.as_f64().map(|n| n.to_string()))
                .or_else(|| v.as_bool().map(|b| b.to_string()))
        })
    }

    /// Build from a key lookup. Unparseable values keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(px) = lookup("DROP_THRESHOLD_PX").and_then(|v| v.trim().parse::<f64>().ok()) {
            if px.is_finite() && px > 0.0 {
                config.drop_threshold_px = px;
            }
        }

        if let Some(v) = lookup("SEED_MENU") {
            config.seed_menu = !matches!(
                v.trim().to_ascii_lowercase().as_str(),
                "0" | "false" | "no" | "off"
            );
        }

        if let Some(level) = lookup("LOG_LEVEL").and_then(|v| v.trim().parse::<LevelFilter>().ok())
        {
            config.log_level = level;
        }

        config
    }
}
