use crate::matching::outcome::CategorizedSkills;
use crate::taxonomy::schema::JobProfile;
use std::collections::HashSet;

fn lowered(list: &[String]) -> HashSet<String> {
    list.iter().map(|s| s.to_lowercase()).collect()
}

/// Bucket each skill into exactly one category.
///
/// Membership is case-insensitive against the profile lists, checked in
/// precedence order core skills, tools, frameworks; anything else is
/// "other". Skills keep their input casing and order.
pub fn categorize_skills<'a, I>(skills: I, profile: &JobProfile) -> CategorizedSkills
where
    I: IntoIterator<Item = &'a String>,
{
    let core = lowered(&profile.core_skills);
    let tools = lowered(&profile.tools);
    let frameworks = lowered(&profile.frameworks);

    let mut result = CategorizedSkills::default();
    for skill in skills {
        let key = skill.to_lowercase();
        let bucket = if core.contains(&key) {
            &mut result.core_skills
        } else if tools.contains(&key) {
            &mut result.tools
        } else if frameworks.contains(&key) {
            &mut result.frameworks
        } else {
            &mut result.other
        };
        bucket.push(skill.clone());
    }
    result
}
