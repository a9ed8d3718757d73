use crate::config::AnalyzerConfig;
use crate::model::{EducationEntry, ExperienceEntry, EDUCATION_LEVEL_DETECTED};

/// Extract work-experience entries.
///
/// A line with a year range (e.g. "2019 - present") opens an entry or, if
/// one is already open, replaces its duration and description. Following
/// non-blank lines are appended to the open entry's description. A blank
/// line closes the entry. Lines seen while no entry is open are dropped.
pub fn extract_experience(text: &str, config: &AnalyzerConfig) -> Vec<ExperienceEntry> {
    let mut entries = Vec::new();
    let mut current: Option<ExperienceEntry> = None;

    for line in text.split('\n') {
        let line = line.trim();
        if line.is_empty() {
            if let Some(entry) = current.take() {
                entries.push(entry);
            }
            continue;
        }

        let lower = line.to_lowercase();
        if let Some(m) = config.date_range.find(&lower) {
            let entry = current.get_or_insert_with(ExperienceEntry::default);
            entry.duration = Some(m.as_str().to_string());
            entry.description = line.to_string();
        } else if let Some(entry) = current.as_mut() {
            if !entry.description.is_empty() {
                entry.description.push(' ');
            }
            entry.description.push_str(line);
        }
    }

    if let Some(entry) = current {
        entries.push(entry);
    }

    entries
}

/// One education entry per line mentioning a degree or study level.
pub fn extract_education(text: &str, config: &AnalyzerConfig) -> Vec<EducationEntry> {
    text.split('\n')
        .filter(|line| {
            let lower = line.to_lowercase();
            config.degree_patterns.iter().any(|p| p.is_match(&lower))
        })
        .map(|line| EducationEntry {
            degree: line.trim().to_string(),
            level: EDUCATION_LEVEL_DETECTED.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn config() -> &'static AnalyzerConfig {
        AnalyzerConfig::builtin()
    }

    #[test]
    fn test_experience_blocks_split_on_blank_lines() {
        let text = "2018-2020 Analyst at Foo\nBuilt dashboards\n\n2020 – Present Engineer at Bar\nShipped APIs\nLed team";
        let entries = extract_experience(text, config());
        assert_eq!(
            entries,
            vec![
                ExperienceEntry {
                    duration: Some("2018-2020".into()),
                    description: "2018-2020 Analyst at Foo Built dashboards".into(),
                },
                ExperienceEntry {
                    duration: Some("2020 – present".into()),
                    description: "2020 – Present Engineer at Bar Shipped APIs Led team".into(),
                },
            ]
        );
    }

    #[test]
    fn test_lines_before_any_date_are_ignored() {
        let text = "Experience\nAcme Corp\n\nNo dates here";
        assert!(extract_experience(text, config()).is_empty());
    }

    #[test]
    fn test_second_date_line_replaces_description() {
        let text = "2015-2017 Intern\nnotes\n2017-current Developer";
        let entries = extract_experience(text, config());
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].duration.as_deref(), Some("2017-current"));
        assert_eq!(entries[0].description, "2017-current Developer");
    }

    #[test]
    fn test_education_one_entry_per_line() {
        let text = "Bachelor of Science in CS\nMaster of Engineering\nHobbies: chess";
        let entries = extract_education(text, config());
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].degree, "Bachelor of Science in CS");
        assert_eq!(entries[0].level, "detected");
    }

    #[test]
    fn test_education_abbreviation_matches_loosely() {
        // "m.s." style abbreviations are loose and hit ordinary words too.
        let entries = extract_education("Systems programming", config());
        assert_eq!(entries.len(), 1);
    }
}
