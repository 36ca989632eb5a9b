use anyhow::{anyhow, Result};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_BACKEND: &str = "stub";
const DEFAULT_CONFIDENCE_THRESHOLD: f32 = 0.25;
const DEFAULT_BOX_THICKNESS: u32 = 2;
const DEFAULT_LABEL_SCALE: f32 = 16.0;
const DEFAULT_OUT_DIR: &str = "sitewatch_out";

#[derive(Debug, Deserialize, Default)]
struct SitewatchConfigFile {
    backend: Option<String>,
    confidence_threshold: Option<f32>,
    annotate: Option<AnnotateConfigFile>,
    out_dir: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct AnnotateConfigFile {
    box_thickness: Option<u32>,
    label_scale: Option<f32>,
}

#[derive(Debug, Clone)]
pub struct SitewatchConfig {
    pub backend: String,
    pub confidence_threshold: f32,
    pub annotate: AnnotateSettings,
    pub out_dir: String,
}

#[derive(Debug, Clone)]
pub struct AnnotateSettings {
    pub box_thickness: u32,
    pub label_scale: f32,
}

impl SitewatchConfig {
    /// Load configuration: JSON file named by `SITEWATCH_CONFIG` (when set),
    /// then environment overrides, then validation.
    pub fn load() -> Result<Self> {
        let config_path = std::env::var("SITEWATCH_CONFIG").ok();
        let file_cfg = match config_path.as_deref() {
            Some(path) => Some(read_config_file(Path::new(path))?),
            None => None,
        };
        let mut cfg = Self::from_file(file_cfg.unwrap_or_default());
        cfg.apply_env()?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn from_file(file: SitewatchConfigFile) -> Self {
        let annotate = AnnotateSettings {
            box_thickness: file
                .annotate
                .as_ref()
                .and_then(|annotate| annotate.box_thickness)
                .unwrap_or(DEFAULT_BOX_THICKNESS),
            label_scale: file
                .annotate
                .as_ref()
                .and_then(|annotate| annotate.label_scale)
                .unwrap_or(DEFAULT_LABEL_SCALE),
        };
        Self {
            backend: file.backend.unwrap_or_else(|| DEFAULT_BACKEND.to_string()),
            confidence_threshold: file
                .confidence_threshold
                .unwrap_or(DEFAULT_CONFIDENCE_THRESHOLD),
            annotate,
            out_dir: file.out_dir.unwrap_or_else(|| DEFAULT_OUT_DIR.to_string()),
        }
    }

    fn apply_env(&mut self) -> Result<()> {
        if let Ok(backend) = std::env::var("SITEWATCH_BACKEND") {
            if !backend.trim().is_empty() {
                self.backend = backend;
            }
        }
        if let Ok(threshold) = std::env::var("SITEWATCH_CONF_THRESHOLD") {
            let value: f32 = threshold
                .parse()
                .map_err(|_| anyhow!("SITEWATCH_CONF_THRESHOLD must be a number"))?;
            self.confidence_threshold = value;
        }
        if let Ok(thickness) = std::env::var("SITEWATCH_BOX_THICKNESS") {
            let value: u32 = thickness
                .parse()
                .map_err(|_| anyhow!("SITEWATCH_BOX_THICKNESS must be an integer"))?;
            self.annotate.box_thickness = value;
        }
        if let Ok(scale) = std::env::var("SITEWATCH_LABEL_SCALE") {
            let value: f32 = scale
                .parse()
                .map_err(|_| anyhow!("SITEWATCH_LABEL_SCALE must be a number"))?;
            self.annotate.label_scale = value;
        }
        if let Ok(out_dir) = std::env::var("SITEWATCH_OUT_DIR") {
            if !out_dir.trim().is_empty() {
                self.out_dir = out_dir;
            }
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.confidence_threshold) {
            return Err(anyhow!("confidence_threshold must be within [0, 1]"));
        }
        if self.annotate.box_thickness == 0 {
            return Err(anyhow!("annotate.box_thickness must be >= 1"));
        }
        if !(self.annotate.label_scale > 0.0) {
            return Err(anyhow!("annotate.label_scale must be > 0"));
        }
        if self.out_dir.trim().is_empty() {
            return Err(anyhow!("out_dir must not be empty"));
        }
        Ok(())
    }
}

fn read_config_file(path: &Path) -> Result<SitewatchConfigFile> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| anyhow!("failed to read config file {}: {}", path.display(), e))?;
    let cfg = serde_json::from_str(&raw)
        .map_err(|e| anyhow!("invalid config file {}: {}", path.display(), e))?;
    Ok(cfg)
}
