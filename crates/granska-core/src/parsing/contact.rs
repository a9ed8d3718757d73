use crate::config::AnalyzerConfig;
use crate::model::ContactInfo;

/// Extract contact fields; the first match in document order wins for each.
///
/// Email and phone are matched against the original text. Profile links
/// are matched against the lowercased text, so they come back lowercased.
pub fn extract_contact(text: &str, config: &AnalyzerConfig) -> ContactInfo {
    let patterns = &config.contact;
    let lower = text.to_lowercase();

    ContactInfo {
        email: patterns.email.find(text).map(|m| m.as_str().to_string()),
        phone: patterns
            .phone
            .find(text)
            .map(|m| m.as_str().trim().to_string())
            .filter(|p| !p.is_empty()),
        linkedin: patterns.linkedin.find(&lower).map(|m| m.as_str().to_string()),
        github: patterns.github.find(&lower).map(|m| m.as_str().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> ContactInfo {
        extract_contact(text, AnalyzerConfig::builtin())
    }

    #[test]
    fn test_all_fields() {
        let c = extract("john@x.com 555-123-4567 linkedin.com/in/john github.com/john");
        assert_eq!(c.email.as_deref(), Some("john@x.com"));
        assert_eq!(c.phone.as_deref(), Some("555-123-4567"));
        assert_eq!(c.linkedin.as_deref(), Some("linkedin.com/in/john"));
        assert_eq!(c.github.as_deref(), Some("github.com/john"));
    }

    #[test]
    fn test_first_match_wins() {
        let c = extract("a@first.org\nb@second.org");
        assert_eq!(c.email.as_deref(), Some("a@first.org"));
    }

    #[test]
    fn test_phone_with_country_code_kept_whole() {
        let c = extract("Call +46 (070) 123 4567 anytime");
        assert_eq!(c.phone.as_deref(), Some("+46 (070) 123 4567"));
    }

    #[test]
    fn test_profile_links_lowercased() {
        let c = extract("LinkedIn.com/in/Jane-Doe GitHub.com/JaneDoe");
        assert_eq!(c.linkedin.as_deref(), Some("linkedin.com/in/jane-doe"));
        assert_eq!(c.github.as_deref(), Some("github.com/janedoe"));
    }

    #[test]
    fn test_missing_fields() {
        assert_eq!(extract("no contact details here"), ContactInfo::default());
    }
}
