//! Template-based explanation text.
//!
//! Every explanation comes from one of three fixed templates, one per global
//! state, with values interpolated. There is no free-form text, so every
//! possible output can be enumerated and tested.

use chrono::{DateTime, FixedOffset, Offset, Utc};

use crate::models::{GlobalState, LimitingFactor};

pub const DEFAULT_REFERENCE_CITY: &str = "Tromsø";

/// Values interpolated into the explanation templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplanationInput {
    pub state: GlobalState,
    pub best_window_ads: u8,
    pub best_window_start: DateTime<Utc>,
    pub limiting_factor: LimitingFactor,
    pub next_window_start: Option<DateTime<Utc>>,
    pub travel_time_minutes: Option<u32>,
}

/// Rendering settings shared by all templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplanationStyle {
    /// City named when the viewing spot is the reference location itself.
    pub reference_city: String,
    /// Offset used to render `HH:MM` times.
    pub utc_offset: FixedOffset,
}

impl Default for ExplanationStyle {
    fn default() -> Self {
        Self {
            reference_city: DEFAULT_REFERENCE_CITY.to_string(),
            utc_offset: Utc.fix(),
        }
    }
}

/// Short human description of a limiting factor.
pub fn factor_description(factor: LimitingFactor) -> &'static str {
    match factor {
        LimitingFactor::CloudCover => "too many clouds",
        LimitingFactor::LowKp => "weak geomagnetic activity",
        LimitingFactor::TooBright => "not dark enough",
        LimitingFactor::MixedConditions => "mixed conditions",
    }
}

fn format_clock(time: DateTime<Utc>, style: &ExplanationStyle) -> String {
    time.with_timezone(&style.utc_offset).format("%H:%M").to_string()
}

/// Travel suffix appended after a time, including its leading space.
pub fn travel_suffix(travel_time_minutes: Option<u32>, reference_city: &str) -> String {
    match travel_time_minutes {
        None => String::new(),
        Some(0) => format!(" (from {})", reference_city),
        Some(minutes) if minutes < 60 => format!(" ({} min away)", minutes),
        Some(minutes) => format!(" ({}h {}m away)", minutes / 60, minutes % 60),
    }
}

/// Render the explanation for a resolved decision.
pub fn generate_explanation(input: &ExplanationInput, style: &ExplanationStyle) -> String {
    let factor = factor_description(input.limiting_factor);
    let travel = travel_suffix(input.travel_time_minutes, &style.reference_city);

    match input.state {
        GlobalState::Excellent => format!(
            "Strong aurora conditions expected. Best viewing time: {}{}. Confidence: {}/100.",
            format_clock(input.best_window_start, style),
            travel,
            input.best_window_ads
        ),
        GlobalState::Possible => format!(
            "Limited aurora potential detected. Best window: {}{}. Confidence: {}/100. Main limitation: {}.",
            format_clock(input.best_window_start, style),
            travel,
            input.best_window_ads,
            factor
        ),
        GlobalState::Unlikely => {
            let next = input
                .next_window_start
                .map(|t| format!(": {}", format_clock(t, style)))
                .unwrap_or_default();
            format!(
                "Aurora unlikely in the next 48 hours. Limiting factor: {}. Next possible window{} (low confidence).",
                factor, next
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 12, 21, 5, 0).unwrap()
    }

    fn input(state: GlobalState) -> ExplanationInput {
        ExplanationInput {
            state,
            best_window_ads: 82,
            best_window_start: start(),
            limiting_factor: LimitingFactor::CloudCover,
            next_window_start: None,
            travel_time_minutes: None,
        }
    }

    #[test]
    fn test_excellent_template() {
        let style = ExplanationStyle::default();
        let text = generate_explanation(&input(GlobalState::Excellent), &style);
        assert_eq!(
            text,
            "Strong aurora conditions expected. Best viewing time: 21:05. Confidence: 82/100."
        );
    }

    #[test]
    fn test_possible_template_with_travel() {
        let mut i = input(GlobalState::Possible);
        i.best_window_ads = 48;
        i.travel_time_minutes = Some(45);
        let text = generate_explanation(&i, &ExplanationStyle::default());
        assert_eq!(
            text,
            "Limited aurora potential detected. Best window: 21:05 (45 min away). Confidence: 48/100. Main limitation: too many clouds."
        );
    }

    #[test]
    fn test_unlikely_template_without_next_window() {
        let mut i = input(GlobalState::Unlikely);
        i.limiting_factor = LimitingFactor::LowKp;
        let text = generate_explanation(&i, &ExplanationStyle::default());
        assert_eq!(
            text,
            "Aurora unlikely in the next 48 hours. Limiting factor: weak geomagnetic activity. Next possible window (low confidence)."
        );
    }

    #[test]
    fn test_unlikely_template_with_next_window() {
        let mut i = input(GlobalState::Unlikely);
        i.limiting_factor = LimitingFactor::TooBright;
        i.next_window_start = Some(Utc.with_ymd_and_hms(2026, 1, 13, 2, 0, 0).unwrap());
        let text = generate_explanation(&i, &ExplanationStyle::default());
        assert_eq!(
            text,
            "Aurora unlikely in the next 48 hours. Limiting factor: not dark enough. Next possible window: 02:00 (low confidence)."
        );
    }

    #[test]
    fn test_travel_suffix_variants() {
        assert_eq!(travel_suffix(None, "Tromsø"), "");
        assert_eq!(travel_suffix(Some(0), "Tromsø"), " (from Tromsø)");
        assert_eq!(travel_suffix(Some(59), "Tromsø"), " (59 min away)");
        assert_eq!(travel_suffix(Some(90), "Tromsø"), " (1h 30m away)");
        assert_eq!(travel_suffix(Some(120), "Tromsø"), " (2h 0m away)");
    }

    #[test]
    fn test_utc_offset_applied() {
        let style = ExplanationStyle {
            reference_city: "Tromsø".to_string(),
            utc_offset: FixedOffset::east_opt(3600).unwrap(),
        };
        let text = generate_explanation(&input(GlobalState::Excellent), &style);
        assert!(text.contains("Best viewing time: 22:05."));
    }

    #[test]
    fn test_factor_descriptions() {
        assert_eq!(factor_description(LimitingFactor::MixedConditions), "mixed conditions");
        assert_eq!(factor_description(LimitingFactor::CloudCover), "too many clouds");
    }
}
