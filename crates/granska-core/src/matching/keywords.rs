use crate::matching::outcome::KeywordMatchResult;
use crate::model::round_score;
use crate::taxonomy::schema::JobProfile;

pub const MAX_MISSING_KEYWORDS: usize = 10;

/// Case-insensitive substring match of every profile keyword against the
/// resume text. Keywords listed in several categories count once per
/// listing.
pub fn match_keywords(resume_text: &str, profile: &JobProfile) -> KeywordMatchResult {
    let required: Vec<&String> = profile.all_keywords().collect();
    let text = resume_text.to_lowercase();

    let (matched, missing): (Vec<String>, Vec<String>) = required
        .iter()
        .map(|k| k.to_string())
        .partition(|k| text.contains(k.to_lowercase().as_str()));

    let match_percentage = if required.is_empty() {
        0.0
    } else {
        round_score(matched.len() as f64 / required.len() as f64 * 100.0)
    };

    KeywordMatchResult {
        match_percentage,
        total_required: required.len(),
        total_matched: matched.len(),
        matched_keywords: matched,
        missing_keywords: missing.into_iter().take(MAX_MISSING_KEYWORDS).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn profile(keywords: &[&str]) -> JobProfile {
        JobProfile {
            name: "Test".into(),
            keywords: keywords.iter().map(|s| s.to_string()).collect(),
            ..JobProfile::default()
        }
    }

    #[test]
    fn test_partial_match() {
        let result = match_keywords("Python and SQL daily", &profile(&["python", "sql", "aws"]));
        assert_eq!(result.matched_keywords, vec!["python", "sql"]);
        assert_eq!(result.missing_keywords, vec!["aws"]);
        assert_eq!(result.match_percentage, 66.67);
        assert_eq!(result.total_required, 3);
        assert_eq!(result.total_matched, 2);
    }

    #[test]
    fn test_taxonomy_casing_preserved() {
        let result = match_keywords("worked with kubernetes", &profile(&["Kubernetes", "Helm"]));
        assert_eq!(result.matched_keywords, vec!["Kubernetes"]);
        assert_eq!(result.missing_keywords, vec!["Helm"]);
    }

    #[test]
    fn test_empty_profile_is_zero() {
        let result = match_keywords("python", &JobProfile::default());
        assert_eq!(result.match_percentage, 0.0);
        assert_eq!(result.total_required, 0);
    }

    #[test]
    fn test_duplicates_across_categories_counted_twice() {
        let p = JobProfile {
            name: "Dup".into(),
            core_skills: vec!["Git".into()],
            tools: vec!["git".into(), "jenkins".into()],
            ..JobProfile::default()
        };
        let result = match_keywords("git", &p);
        assert_eq!(result.total_required, 3);
        assert_eq!(result.total_matched, 2);
        assert_eq!(result.match_percentage, 66.67);
    }

    #[test]
    fn test_missing_truncated_to_ten() {
        let many: Vec<String> = (0..15).map(|i| format!("kw{i}x")).collect();
        let refs: Vec<&str> = many.iter().map(String::as_str).collect();
        let result = match_keywords("", &profile(&refs));
        assert_eq!(result.missing_keywords.len(), 10);
        assert_eq!(result.missing_keywords[0], "kw0x");
        assert_eq!(result.total_required, 15);
    }

    proptest! {
        #[test]
        fn percentage_stays_in_range(
            text in "[a-z ]{0,80}",
            keywords in prop::collection::vec("[a-z]{1,6}", 0..12),
        ) {
            let refs: Vec<&str> = keywords.iter().map(String::as_str).collect();
            let result = match_keywords(&text, &profile(&refs));
            prop_assert!((0.0..=100.0).contains(&result.match_percentage));
            prop_assert_eq!(result.total_matched, result.matched_keywords.len());
        }
    }
}
