//! Pure mappings from the upstream condition label to display artifacts.
//!
//! Both mappings are total: any label outside the known set falls through
//! to an explicit default (icon) or is echoed back verbatim (description).

/// Icon identifier matched to a sky condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConditionIcon {
    Sun,
    Cloud,
    Rain,
    Drizzle,
    Snow,
    /// Fallback for any label outside the known set.
    Unknown,
}

impl ConditionIcon {
    /// Terminal-friendly glyph for the icon.
    pub fn glyph(&self) -> &'static str {
        match self {
            ConditionIcon::Sun => "☀",
            ConditionIcon::Cloud => "☁",
            ConditionIcon::Rain => "🌧",
            ConditionIcon::Drizzle => "🌦",
            ConditionIcon::Snow => "❄",
            ConditionIcon::Unknown => "🌡",
        }
    }
}

/// Exact-match lookup from condition label to icon.
pub fn icon_for(label: &str) -> ConditionIcon {
    match label {
        "Clear" => ConditionIcon::Sun,
        "Clouds" => ConditionIcon::Cloud,
        "Rain" => ConditionIcon::Rain,
        "Drizzle" => ConditionIcon::Drizzle,
        "Snow" => ConditionIcon::Snow,
        _ => ConditionIcon::Unknown,
    }
}

/// Human label for a condition; unknown labels are echoed back verbatim.
pub fn description_for(label: &str) -> String {
    match label {
        "Clear" => "Clear skies".to_string(),
        "Clouds" => "Cloudy weather".to_string(),
        "Rain" => "Rainy weather".to_string(),
        "Drizzle" => "Light drizzle".to_string(),
        "Snow" => "Snowy weather".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels_map_to_distinct_icons() {
        assert_eq!(icon_for("Clear"), ConditionIcon::Sun);
        assert_eq!(icon_for("Clouds"), ConditionIcon::Cloud);
        assert_eq!(icon_for("Rain"), ConditionIcon::Rain);
        assert_eq!(icon_for("Drizzle"), ConditionIcon::Drizzle);
        assert_eq!(icon_for("Snow"), ConditionIcon::Snow);
    }

    #[test]
    fn unmatched_label_gets_default_icon() {
        assert_eq!(icon_for("Thunderstorm"), ConditionIcon::Unknown);
        assert_eq!(icon_for(""), ConditionIcon::Unknown);
        assert_eq!(icon_for("clear"), ConditionIcon::Unknown);
    }

    #[test]
    fn known_labels_have_display_strings() {
        assert_eq!(description_for("Clouds"), "Cloudy weather");
        assert_eq!(description_for("Clear"), "Clear skies");
        assert_eq!(description_for("Snow"), "Snowy weather");
    }

    #[test]
    fn unmatched_label_is_echoed_verbatim() {
        assert_eq!(description_for("Haze"), "Haze");
        assert_eq!(description_for(""), "");
    }

    #[test]
    fn every_icon_has_a_glyph() {
        for icon in [
            ConditionIcon::Sun,
            ConditionIcon::Cloud,
            ConditionIcon::Rain,
            ConditionIcon::Drizzle,
            ConditionIcon::Snow,
            ConditionIcon::Unknown,
        ] {
            assert!(!icon.glyph().is_empty());
        }
    }
}
