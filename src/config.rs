use serde::Deserialize;
use std::fs;
use std::time::Duration;

/// CSS selectors for the four record fields, resolved relative to one
/// listing element.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldSelectors {
    #[serde(default = "default_title_selector")]
    pub title: String,
    #[serde(default = "default_location_selector")]
    pub location: String,
    #[serde(default = "default_description_selector")]
    pub description: String,
    #[serde(default = "default_requirements_selector")]
    pub requirements: String,
}

impl Default for FieldSelectors {
    fn default() -> Self {
        Self {
            title: default_title_selector(),
            location: default_location_selector(),
            description: default_description_selector(),
            requirements: default_requirements_selector(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScrapeConfig {
    pub target_urls: Vec<String>,
    #[serde(default = "default_listing_selector")]
    pub listing_selector: String,
    #[serde(default)]
    pub selectors: FieldSelectors,
    #[serde(default = "default_load_more_selector")]
    pub load_more_selector: String,
    #[serde(default = "default_max_load_more_attempts")]
    pub max_load_more_attempts: u32,
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,
    #[serde(default = "default_expand_delay_ms")]
    pub expand_delay_ms: u64,
    #[serde(default = "default_navigation_timeout_ms")]
    pub navigation_timeout_ms: u64,
    #[serde(default = "default_element_timeout_ms")]
    pub element_timeout_ms: u64,
    pub target_keywords: Vec<String>,
    #[serde(default)]
    pub exclude_keywords: Vec<String>,
    #[serde(default = "default_output_path")]
    pub output_path: String,
    #[serde(default = "default_headless")]
    pub headless: bool,
}

impl ScrapeConfig {
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn expand_delay(&self) -> Duration {
        Duration::from_millis(self.expand_delay_ms)
    }

    pub fn navigation_timeout(&self) -> Duration {
        Duration::from_millis(self.navigation_timeout_ms)
    }

    pub fn element_timeout(&self) -> Duration {
        Duration::from_millis(self.element_timeout_ms)
    }
}

fn default_listing_selector() -> String {
    ".job-item".to_string()
}

fn default_title_selector() -> String {
    ".job-title".to_string()
}

fn default_location_selector() -> String {
    ".job-location".to_string()
}

fn default_description_selector() -> String {
    ".job-description".to_string()
}

fn default_requirements_selector() -> String {
    ".job-requirements".to_string()
}

fn default_load_more_selector() -> String {
    "button.load_jobs_btn".to_string()
}

fn default_max_load_more_attempts() -> u32 {
    5
}

fn default_settle_delay_ms() -> u64 {
    3000
}

fn default_expand_delay_ms() -> u64 {
    1000
}

fn default_navigation_timeout_ms() -> u64 {
    60_000
}

fn default_element_timeout_ms() -> u64 {
    10_000
}

fn default_output_path() -> String {
    "jobs.json".to_string()
}

fn default_headless() -> bool {
    true
}

pub fn load_config(path: &str) -> Result<ScrapeConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let config: ScrapeConfig = serde_json::from_str(&content)?;
    Ok(config)
}
