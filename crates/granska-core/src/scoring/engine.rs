use crate::config::{CriterionWeight, ScoringTables};
use crate::matching::outcome::KeywordAnalysis;
use crate::model::{round_score, ContactInfo, ResumeFacts, SectionLabel};
use crate::scoring::outcome::{CompositeScore, Criterion, RadarCategory, ShortlistEstimate};
use std::collections::BTreeMap;

/// Fraction of the required sections present, as 0–100.
pub fn sections_score(found: &[SectionLabel], required: &[SectionLabel]) -> f64 {
    if required.is_empty() {
        return 0.0;
    }
    let present = required.iter().filter(|label| found.contains(label)).count();
    present as f64 / required.len() as f64 * 100.0
}

/// Step function of word count.
pub fn readability_score(word_count: usize) -> f64 {
    match word_count {
        300..=800 => 100.0,
        801..=1200 => 90.0,
        200..=299 => 70.0,
        _ => 50.0,
    }
}

pub fn contact_score(contact: &ContactInfo) -> f64 {
    let mut score = 0.0;
    if contact.email.is_some() {
        score += 40.0;
    }
    if contact.phone.is_some() {
        score += 30.0;
    }
    if contact.linkedin.is_some() {
        score += 15.0;
    }
    if contact.github.is_some() {
        score += 15.0;
    }
    f64::min(score, 100.0)
}

/// Full marks in 300–1000 words, decaying with distance from 650 (floor 50).
pub fn length_score(word_count: usize) -> f64 {
    if (300..=1000).contains(&word_count) {
        100.0
    } else {
        let distance = (word_count as f64 - 650.0).abs();
        f64::max(50.0, 100.0 - distance / 10.0)
    }
}

pub fn keyword_presence_score(match_percentage: f64) -> f64 {
    f64::min(100.0, match_percentage * 1.5)
}

pub fn experience_score(entries: usize) -> f64 {
    match entries {
        0 => 30.0,
        1 => 60.0,
        2 => 80.0,
        _ => 100.0,
    }
}

pub fn education_score(entries: usize) -> f64 {
    f64::min(100.0, entries as f64 * 50.0)
}

pub fn skills_coverage_score(core_skills: usize) -> f64 {
    f64::min(100.0, core_skills as f64 * 10.0)
}

fn composite(
    breakdown: BTreeMap<Criterion, f64>,
    weights: &[CriterionWeight],
    tables: &ScoringTables,
) -> CompositeScore {
    let raw: f64 = weights
        .iter()
        .map(|w| breakdown.get(&w.criterion).copied().unwrap_or(0.0) * w.weight)
        .sum();
    let raw = raw.clamp(0.0, 100.0);

    CompositeScore {
        total: round_score(raw),
        grade: tables.grade_for(raw),
        breakdown,
    }
}

/// ATS compatibility composite.
pub fn score_ats(
    facts: &ResumeFacts,
    analysis: &KeywordAnalysis,
    tables: &ScoringTables,
) -> CompositeScore {
    let word_count = facts.formatting.word_count;

    let breakdown = BTreeMap::from([
        (Criterion::Formatting, f64::from(facts.formatting.score)),
        (
            Criterion::Sections,
            sections_score(
                &facts.formatting.sections_found,
                &tables.ats_required_sections,
            ),
        ),
        (Criterion::Readability, readability_score(word_count)),
        (Criterion::ContactInfo, contact_score(&facts.contact)),
        (Criterion::Length, length_score(word_count)),
        (
            Criterion::Keywords,
            keyword_presence_score(analysis.keyword_match.match_percentage),
        ),
    ]);

    composite(breakdown, &tables.ats_weights, tables)
}

/// Job-fit composite.
pub fn score_job_fit(
    facts: &ResumeFacts,
    analysis: &KeywordAnalysis,
    tables: &ScoringTables,
) -> CompositeScore {
    let breakdown = BTreeMap::from([
        (
            Criterion::KeywordMatch,
            analysis.keyword_match.match_percentage,
        ),
        (Criterion::SemanticSimilarity, analysis.semantic_similarity),
        (
            Criterion::ExperienceRelevance,
            experience_score(facts.experience.len()),
        ),
        (
            Criterion::EducationFit,
            education_score(facts.education.len()),
        ),
        (
            Criterion::SkillsCoverage,
            skills_coverage_score(analysis.categorized_skills.core_skills.len()),
        ),
    ]);

    composite(breakdown, &tables.job_fit_weights, tables)
}

/// Five fixed categories for a skills radar chart, each capped at 100.
pub fn radar_data(analysis: &KeywordAnalysis) -> Vec<RadarCategory> {
    let skills = &analysis.categorized_skills;
    let capped = |count: usize, per_item: f64| f64::min(100.0, count as f64 * per_item);

    vec![
        RadarCategory {
            category: "Core Skills".into(),
            score: capped(skills.core_skills.len(), 15.0),
        },
        RadarCategory {
            category: "Tools".into(),
            score: capped(skills.tools.len(), 15.0),
        },
        RadarCategory {
            category: "Frameworks".into(),
            score: capped(skills.frameworks.len(), 15.0),
        },
        RadarCategory {
            category: "Other Skills".into(),
            score: capped(skills.other.len(), 10.0),
        },
        RadarCategory {
            category: "Keywords".into(),
            score: f64::min(100.0, analysis.keyword_match.match_percentage),
        },
    ]
}

/// Blend both composites and bucket the result. The bucket is chosen from
/// the unrounded blend; only the reported score is rounded.
pub fn estimate_shortlist(
    ats_total: f64,
    job_fit_total: f64,
    tables: &ScoringTables,
) -> ShortlistEstimate {
    let weights = &tables.shortlist;
    let raw = ats_total * weights.ats_weight + job_fit_total * weights.job_fit_weight;
    ShortlistEstimate {
        combined_score: round_score(raw),
        ..shortlist_bucket(raw, tables)
    }
}

/// Bucket an already-combined score. The first bucket whose threshold the
/// score reaches wins; scores below every threshold take the last bucket.
pub fn shortlist_bucket(combined_score: f64, tables: &ScoringTables) -> ShortlistEstimate {
    let buckets = &tables.shortlist.buckets;
    let bucket = buckets
        .iter()
        .find(|b| combined_score >= b.min_score)
        .or_else(|| buckets.last());

    match bucket {
        Some(b) => ShortlistEstimate {
            probability: b.label.clone(),
            combined_score,
            color: b.color.clone(),
        },
        None => ShortlistEstimate {
            probability: String::new(),
            combined_score,
            color: String::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::outcome::{CategorizedSkills, KeywordMatchResult};
    use crate::model::{FormattingAudit, SectionMap};
    use crate::scoring::outcome::Grade;
    use proptest::prelude::*;

    fn facts(
        word_count: usize,
        formatting_score: u32,
        experience: usize,
        education: usize,
    ) -> ResumeFacts {
        ResumeFacts {
            sections: SectionMap::default(),
            contact: ContactInfo::default(),
            skills: Default::default(),
            experience: vec![Default::default(); experience],
            education: (0..education)
                .map(|i| crate::model::EducationEntry {
                    degree: format!("degree {i}"),
                    level: "detected".into(),
                })
                .collect(),
            formatting: FormattingAudit {
                score: formatting_score,
                issues: vec![],
                sections_found: vec![],
                word_count,
            },
        }
    }

    fn analysis(match_percentage: f64, semantic: f64, core: usize) -> KeywordAnalysis {
        KeywordAnalysis {
            keyword_match: KeywordMatchResult {
                match_percentage,
                ..KeywordMatchResult::default()
            },
            semantic_similarity: semantic,
            categorized_skills: CategorizedSkills {
                core_skills: (0..core).map(|i| format!("skill{i}")).collect(),
                ..CategorizedSkills::default()
            },
            job_display_name: "Test".into(),
        }
    }

    #[test]
    fn test_readability_steps() {
        assert_eq!(readability_score(0), 50.0);
        assert_eq!(readability_score(199), 50.0);
        assert_eq!(readability_score(200), 70.0);
        assert_eq!(readability_score(300), 100.0);
        assert_eq!(readability_score(800), 100.0);
        assert_eq!(readability_score(801), 90.0);
        assert_eq!(readability_score(1200), 90.0);
        assert_eq!(readability_score(1201), 50.0);
    }

    #[test]
    fn test_length_score_decay() {
        assert_eq!(length_score(300), 100.0);
        assert_eq!(length_score(1000), 100.0);
        assert_eq!(length_score(1100), 55.0);
        assert_eq!(length_score(250), 60.0);
        assert_eq!(length_score(0), 50.0);
        assert_eq!(length_score(5000), 50.0);
    }

    #[test]
    fn test_contact_score_additive() {
        let contact = ContactInfo {
            email: Some("a@b.io".into()),
            github: Some("github.com/a".into()),
            ..ContactInfo::default()
        };
        assert_eq!(contact_score(&contact), 55.0);
    }

    #[test]
    fn test_sections_score_counts_contact() {
        let found = [SectionLabel::Header, SectionLabel::Experience, SectionLabel::Skills];
        let required = ScoringTables::default().ats_required_sections;
        assert_eq!(sections_score(&found, &required), 50.0);
    }

    #[test]
    fn test_degenerate_resume_grades_f() {
        let tables = ScoringTables::default();
        let f = facts(0, 40, 0, 0);
        let a = analysis(0.0, 0.0, 0);

        let ats = score_ats(&f, &a, &tables);
        // 40*.2 + 0 + 50*.2 + 0 + 50*.15 + 0
        assert_eq!(ats.total, 25.5);
        assert_eq!(ats.grade, Grade::F);

        let fit = score_job_fit(&f, &a, &tables);
        // experience 30 * .2
        assert_eq!(fit.total, 6.0);
        assert_eq!(fit.grade, Grade::F);
    }

    #[test]
    fn test_job_fit_breakdown() {
        let tables = ScoringTables::default();
        let fit = score_job_fit(&facts(500, 100, 2, 3), &analysis(50.0, 40.0, 4), &tables);
        assert_eq!(fit.breakdown[&Criterion::ExperienceRelevance], 80.0);
        assert_eq!(fit.breakdown[&Criterion::EducationFit], 100.0);
        assert_eq!(fit.breakdown[&Criterion::SkillsCoverage], 40.0);
        // 20 + 8 + 16 + 10 + 4
        assert_eq!(fit.total, 58.0);
        assert_eq!(fit.grade, Grade::C);
    }

    #[test]
    fn test_keyword_presence_capped() {
        assert_eq!(keyword_presence_score(80.0), 100.0);
        assert_eq!(keyword_presence_score(40.0), 60.0);
    }

    #[test]
    fn test_radar_categories() {
        let mut a = analysis(66.67, 0.0, 8);
        a.categorized_skills.other = (0..3).map(|i| format!("o{i}")).collect();
        let radar = radar_data(&a);
        let names: Vec<&str> = radar.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(
            names,
            vec!["Core Skills", "Tools", "Frameworks", "Other Skills", "Keywords"]
        );
        assert_eq!(radar[0].score, 100.0);
        assert_eq!(radar[1].score, 0.0);
        assert_eq!(radar[3].score, 30.0);
        assert_eq!(radar[4].score, 66.67);
    }

    #[test]
    fn test_shortlist_boundaries() {
        let tables = ScoringTables::default();
        assert_eq!(
            shortlist_bucket(80.0, &tables).probability,
            "Very High (85-95%)"
        );
        assert_eq!(shortlist_bucket(79.99, &tables).probability, "High (70-85%)");
        assert_eq!(shortlist_bucket(65.0, &tables).probability, "High (70-85%)");
        assert_eq!(shortlist_bucket(50.0, &tables).probability, "Moderate (50-70%)");
        assert_eq!(shortlist_bucket(35.0, &tables).probability, "Low (30-50%)");
        let lowest = shortlist_bucket(34.99, &tables);
        assert_eq!(lowest.probability, "Very Low (< 30%)");
        assert_eq!(lowest.color, "#991b1b");
    }

    #[test]
    fn test_estimate_shortlist_blends_and_rounds() {
        let tables = ScoringTables::default();
        let estimate = estimate_shortlist(80.0, 80.0, &tables);
        assert_eq!(estimate.combined_score, 80.0);
        assert_eq!(estimate.probability, "Very High (85-95%)");
        assert_eq!(estimate.color, "#10b981");

        let estimate = estimate_shortlist(60.0, 40.0, &tables);
        // 27 + 22
        assert_eq!(estimate.combined_score, 49.0);
        assert_eq!(estimate.probability, "Low (30-50%)");
    }

    #[test]
    fn test_estimate_shortlist_buckets_unrounded_blend() {
        let tables = ScoringTables::default();
        // 79.99 * .45 + 80 * .55 = 79.9955, reported as 80.0
        let estimate = estimate_shortlist(79.99, 80.0, &tables);
        assert_eq!(estimate.combined_score, 80.0);
        assert_eq!(estimate.probability, "High (70-85%)");
        assert_eq!(estimate.color, shortlist_bucket(79.0, &tables).color);
    }

    #[test]
    fn test_grade_uses_unrounded_total() {
        let tables = ScoringTables::default();
        // 74.99*.4 + 0 + 100*.2 + 100*.1 + 100*.1 = 69.996
        let fit = score_job_fit(&facts(500, 100, 3, 2), &analysis(74.99, 0.0, 10), &tables);
        assert_eq!(fit.total, 70.0);
        assert_eq!(fit.grade, Grade::C);
    }

    #[test]
    fn test_ats_total_rounds_binary_value() {
        let tables = ScoringTables::default();
        let mut f = facts(1001, 100, 0, 0);
        f.contact = ContactInfo {
            email: Some("a@b.io".into()),
            phone: Some("555-123-4567".into()),
            linkedin: Some("linkedin.com/in/a".into()),
            github: Some("github.com/a".into()),
        };
        f.formatting.sections_found = vec![SectionLabel::Experience, SectionLabel::Skills];
        let ats = score_ats(&f, &analysis(0.0, 0.0, 0), &tables);
        assert_eq!(ats.breakdown[&Criterion::Sections], 50.0);
        // 20 + 10 + 18 + 15 + 9.735; the binary sum sits just below 72.735
        assert_eq!(ats.total, 72.73);
    }

    proptest! {
        #[test]
        fn totals_stay_in_range(
            word_count in 0usize..5000,
            formatting in 0u32..=100,
            experience in 0usize..6,
            education in 0usize..6,
            match_pct in 0.0f64..=100.0,
            semantic in 0.0f64..=100.0,
            core in 0usize..20,
        ) {
            let tables = ScoringTables::default();
            let f = facts(word_count, formatting, experience, education);
            let a = analysis(match_pct, semantic, core);
            for score in [score_ats(&f, &a, &tables), score_job_fit(&f, &a, &tables)] {
                prop_assert!((0.0..=100.0).contains(&score.total));
                prop_assert!(score.breakdown.values().all(|v| (0.0..=100.0).contains(v)));
            }
        }

        #[test]
        fn grades_monotonic(a in 0.0f64..=100.0, b in 0.0f64..=100.0) {
            let tables = ScoringTables::default();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            // Grade::A sorts first, so a higher total never yields a later letter.
            prop_assert!(tables.grade_for(hi) <= tables.grade_for(lo));
        }
    }
}
