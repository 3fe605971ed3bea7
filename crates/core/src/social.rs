//! Social media platforms and their display names.

/// `(stored value, display name)` for every supported platform.
pub const PLATFORMS: &[(&str, &str)] = &[
    ("facebook", "Facebook"),
    ("instagram", "Instagram"),
    ("twitter", "Twitter/X"),
    ("linkedin", "LinkedIn"),
    ("youtube", "YouTube"),
    ("pinterest", "Pinterest"),
    ("tiktok", "TikTok"),
    ("snapchat", "Snapchat"),
    ("whatsapp", "WhatsApp"),
    ("telegram", "Telegram"),
    ("discord", "Discord"),
    ("github", "GitHub"),
    ("behance", "Behance"),
    ("dribbble", "Dribbble"),
    ("medium", "Medium"),
    ("reddit", "Reddit"),
    ("other", "Other"),
];

/// Stored platform values, for choice validation.
pub fn platform_values() -> Vec<&'static str> {
    PLATFORMS.iter().map(|(value, _)| *value).collect()
}

/// Human readable platform name. Unknown values are shown as `Unknown`.
pub fn display_name(platform: &str) -> &'static str {
    PLATFORMS
        .iter()
        .find(|(value, _)| *value == platform)
        .map(|(_, label)| *label)
        .unwrap_or("Unknown")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_and_unknown_platforms() {
        assert_eq!(display_name("linkedin"), "LinkedIn");
        assert_eq!(display_name("twitter"), "Twitter/X");
        assert_eq!(display_name("myspace"), "Unknown");
        assert_eq!(platform_values().len(), PLATFORMS.len());
    }
}
