use granska_core::scoring::outcome::{CompositeKind, CompositeScore};
use granska_core::trace::ScoreTrace;
use granska_core::AnalysisRecord;

const MAX_MISSING_SHOWN: usize = 10;

pub fn print(record: &AnalysisRecord, verbose: bool) {
    println!("=== Resume analysis: {} ===\n", record.job_display_name);

    println!("  Scores:");
    print_composite(CompositeKind::Ats, &record.ats_score);
    print_composite(CompositeKind::JobFit, &record.job_fit_score);
    println!(
        "    {:<20} {} (combined {})",
        "Shortlist",
        record.shortlist.probability,
        record.shortlist.combined_score
    );
    println!();

    let keyword_match = &record.keyword_analysis.keyword_match;
    println!("  Keywords:");
    println!(
        "    Matched {}/{} ({}%), semantic similarity {}%",
        keyword_match.total_matched,
        keyword_match.total_required,
        keyword_match.match_percentage,
        record.keyword_analysis.semantic_similarity
    );
    if !keyword_match.missing_keywords.is_empty() {
        println!("    Missing:");
        for keyword in keyword_match.missing_keywords.iter().take(MAX_MISSING_SHOWN) {
            println!("      - {keyword}");
        }
    }
    println!();

    let skills = &record.keyword_analysis.categorized_skills;
    println!("  Skills:");
    for (label, list) in [
        ("Core skills", &skills.core_skills),
        ("Tools", &skills.tools),
        ("Frameworks", &skills.frameworks),
    ] {
        if !list.is_empty() {
            println!("    {:<12} {}", label, list.join(", "));
        }
    }
    if !skills.other.is_empty() {
        println!("    {:<12} {} other candidate(s)", "Other", skills.other.len());
    }
    println!();

    let formatting = &record.facts.formatting;
    println!(
        "  Formatting: {}/100, {} words",
        formatting.score, formatting.word_count
    );
    for issue in &formatting.issues {
        println!("    - {issue}");
    }
    println!();

    if !record.suggestions.is_empty() {
        println!("  Suggestions:");
        for (i, suggestion) in record.suggestions.iter().enumerate() {
            println!("    {}. {}: {}", i + 1, suggestion.title, suggestion.detail);
        }
        println!();
    }

    if verbose {
        print_trace(&record.trace);
    }
}

fn print_composite(kind: CompositeKind, score: &CompositeScore) {
    println!(
        "    {:<20} {:>6}  (grade {})",
        kind.to_string(),
        score.total,
        score.grade
    );
}

fn print_trace(trace: &ScoreTrace) {
    for kind in [CompositeKind::Ats, CompositeKind::JobFit] {
        println!("  {kind} breakdown:");

        let entries: Vec<_> = trace.for_composite(kind).collect();
        let max_name = entries
            .iter()
            .map(|e| e.criterion.as_str().len())
            .max()
            .unwrap_or(10);

        for entry in entries {
            println!(
                "    {:<width$}  {:>6} x {:<4} = {:>6}  {}",
                entry.criterion.as_str(),
                entry.raw_score,
                entry.weight,
                entry.contribution,
                entry.reason,
                width = max_name
            );
        }
        println!();
    }
}
