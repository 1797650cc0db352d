use log::Level;

use crate::animation::{DEFAULT_COUNTER_STEPS, DEFAULT_COUNTER_TICK_MS, DEFAULT_VISIBILITY_THRESHOLD};
use crate::contact::{RelayTarget, DEFAULT_SERVICE_ID, DEFAULT_TEMPLATE_ID};
use crate::scroll::DEFAULT_BACK_TO_TOP_THRESHOLD;
use crate::tagline::{DEFAULT_FADE_MS, DEFAULT_ROTATE_INTERVAL_MS};
use crate::theme::DEFAULT_THEME_KEY;

const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const BACK_TO_TOP_THRESHOLD_BOUNDS: (u32, u32) = (0, 10_000);
const TAGLINE_INTERVAL_MS_BOUNDS: (u32, u32) = (500, 60_000);
const TAGLINE_FADE_MS_BOUNDS: (u32, u32) = (0, 5_000);
const COUNTER_STEPS_BOUNDS: (u32, u32) = (1, 1_000);
const COUNTER_TICK_MS_BOUNDS: (u32, u32) = (1, 1_000);
const VISIBILITY_THRESHOLD_PERCENT_BOUNDS: (u32, u32) = (0, 100);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
        }
    }

    pub fn level(self) -> Level {
        match self {
            Self::Debug => Level::Debug,
            Self::Info => Level::Info,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PageConfig {
    pub relay: RelayTarget,
    pub relay_public_key: Option<String>,
    pub theme_key: String,
    pub back_to_top_threshold: f64,
    pub tagline_interval_ms: u32,
    pub tagline_fade_ms: u32,
    pub counter_steps: u32,
    pub counter_tick_ms: u32,
    pub visibility_threshold: f64,
    pub log_level: LogLevel,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl PageConfig {
    /// Builds the configuration from a variable lookup. Missing, malformed
    /// and out-of-range values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let service_id = parse_non_empty_string(&lookup, "PORTFOLIO_EMAILJS_SERVICE_ID")
            .unwrap_or_else(|| DEFAULT_SERVICE_ID.to_string());
        let template_id = parse_non_empty_string(&lookup, "PORTFOLIO_EMAILJS_TEMPLATE_ID")
            .unwrap_or_else(|| DEFAULT_TEMPLATE_ID.to_string());
        let relay_public_key = parse_non_empty_string(&lookup, "PORTFOLIO_EMAILJS_PUBLIC_KEY");
        let theme_key = parse_non_empty_string(&lookup, "PORTFOLIO_THEME_KEY")
            .unwrap_or_else(|| DEFAULT_THEME_KEY.to_string());
        let back_to_top_threshold = parse_u32_with_bounds(
            &lookup,
            "PORTFOLIO_BACK_TO_TOP_PX",
            DEFAULT_BACK_TO_TOP_THRESHOLD as u32,
            BACK_TO_TOP_THRESHOLD_BOUNDS,
        );
        let tagline_interval_ms = parse_u32_with_bounds(
            &lookup,
            "PORTFOLIO_TAGLINE_INTERVAL_MS",
            DEFAULT_ROTATE_INTERVAL_MS,
            TAGLINE_INTERVAL_MS_BOUNDS,
        );
        let tagline_fade_ms = parse_u32_with_bounds(
            &lookup,
            "PORTFOLIO_TAGLINE_FADE_MS",
            DEFAULT_FADE_MS,
            TAGLINE_FADE_MS_BOUNDS,
        )
        .min(tagline_interval_ms);
        let counter_steps = parse_u32_with_bounds(
            &lookup,
            "PORTFOLIO_COUNTER_STEPS",
            DEFAULT_COUNTER_STEPS,
            COUNTER_STEPS_BOUNDS,
        );
        let counter_tick_ms = parse_u32_with_bounds(
            &lookup,
            "PORTFOLIO_COUNTER_TICK_MS",
            DEFAULT_COUNTER_TICK_MS,
            COUNTER_TICK_MS_BOUNDS,
        );
        let visibility_threshold_percent = parse_u32_with_bounds(
            &lookup,
            "PORTFOLIO_VISIBILITY_THRESHOLD_PERCENT",
            (DEFAULT_VISIBILITY_THRESHOLD * 100.0) as u32,
            VISIBILITY_THRESHOLD_PERCENT_BOUNDS,
        );
        let log_level = parse_log_level(&lookup, "PORTFOLIO_LOG_LEVEL", DEFAULT_LOG_LEVEL);

        Self {
            relay: RelayTarget {
                service_id,
                template_id,
            },
            relay_public_key,
            theme_key,
            back_to_top_threshold: f64::from(back_to_top_threshold),
            tagline_interval_ms,
            tagline_fade_ms,
            counter_steps,
            counter_tick_ms,
            visibility_threshold: f64::from(visibility_threshold_percent) / 100.0,
            log_level,
        }
    }
}

fn parse_u32_with_bounds<F>(lookup: &F, name: &str, default: u32, bounds: (u32, u32)) -> u32
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_non_empty_string<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_log_level<F>(lookup: &F, name: &str, default: LogLevel) -> LogLevel
where
    F: Fn(&str) -> Option<String>,
{
    match parse_non_empty_string(lookup, name)
        .unwrap_or_else(|| default.as_str().to_string())
        .to_ascii_lowercase()
        .as_str()
    {
        "debug" => LogLevel::Debug,
        "info" => LogLevel::Info,
        _ => default,
    }
}
