use serde::{Deserialize, Serialize};

/// Application settings from `gymtrain.yaml`, optionally overridden by
/// `GYMTRAIN_*` environment variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Directory holding the persisted key-value records.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// Start with the demo split when no training data has been saved yet.
    #[serde(default)]
    pub seed_demo_data: bool,

    #[serde(default)]
    pub logging: LoggingSettings,

    #[serde(default)]
    pub carousel: CarouselSettings,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            seed_demo_data: false,
            logging: LoggingSettings::default(),
            carousel: CarouselSettings::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_dir")]
    pub dir: String,

    #[serde(default = "default_log_prefix")]
    pub prefix: String,

    #[serde(default)]
    pub debug: bool,

    /// Mirror log output to the terminal.
    #[serde(default = "default_true")]
    pub console: bool,

    /// Write the log file as JSON lines.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            dir: default_log_dir(),
            prefix: default_log_prefix(),
            debug: false,
            console: true,
            json: false,
        }
    }
}

/// Slide geometry as percentages of the carousel container width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarouselSettings {
    #[serde(default = "default_slide_width_percent")]
    pub slide_width_percent: f64,

    #[serde(default = "default_gap_percent")]
    pub gap_percent: f64,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            slide_width_percent: default_slide_width_percent(),
            gap_percent: default_gap_percent(),
        }
    }
}

fn default_data_dir() -> String {
    "GymTrain Data".to_string()
}

fn default_log_dir() -> String {
    "logs".to_string()
}

fn default_log_prefix() -> String {
    "gymtrain".to_string()
}

fn default_true() -> bool {
    true
}

fn default_slide_width_percent() -> f64 {
    70.0
}

fn default_gap_percent() -> f64 {
    5.0
}
