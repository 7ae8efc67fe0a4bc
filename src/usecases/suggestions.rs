use crate::common::context::Context;
use crate::common::error::ServiceResult;
use crate::entities::users::User;
use crate::models::users::SuggestedUser;
use crate::usecases::{friendships, users};
use std::cmp::Reverse;
use std::collections::HashSet;

const SUGGESTION_LIMIT: usize = 10;

/// Splits a comma-separated skills field into trimmed, non-empty tokens.
pub fn parse_skills(skills: Option<&str>) -> Vec<&str> {
    skills
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect()
}

/// How many of the caller's skill tokens occur as substrings of the
/// candidate's skills text. Case-sensitive, substring containment rather
/// than token-exact match.
pub fn skill_overlap(skills: &[&str], candidate_skills: &str) -> usize {
    skills
        .iter()
        .filter(|skill| candidate_skills.contains(*skill))
        .count()
}

/// Ranks candidates by overlap score, descending. The sort is stable, so
/// equal scores keep store order; a caller with no skills degrades to plain
/// store order.
pub fn rank_by_overlap(candidates: Vec<User>, skills: &[&str]) -> Vec<User> {
    let mut scored: Vec<(usize, User)> = candidates
        .into_iter()
        .map(|user| {
            let score = skill_overlap(skills, user.skills.as_deref().unwrap_or_default());
            (score, user)
        })
        .collect();
    scored.sort_by_key(|(score, _)| Reverse(*score));
    scored.truncate(SUGGESTION_LIMIT);
    scored.into_iter().map(|(_, user)| user).collect()
}

/// Up to ten users ranked by skill overlap with the caller, excluding the
/// caller and anyone already connected or with a request pending in either
/// direction.
pub async fn fetch_suggested<C: Context>(
    ctx: &C,
    caller_id: i64,
) -> ServiceResult<Vec<SuggestedUser>> {
    let caller = users::fetch_one(ctx, caller_id).await?;

    let mut excluded: HashSet<i64> = friendships::fetch_related_user_ids(ctx, caller_id)
        .await?
        .into_iter()
        .collect();
    excluded.insert(caller_id);

    let candidates: Vec<User> = users::fetch_all(ctx)
        .await?
        .into_iter()
        .filter(|user| !excluded.contains(&user.id))
        .collect();

    let skills = parse_skills(caller.skills.as_deref());
    Ok(rank_by_overlap(candidates, &skills)
        .into_iter()
        .map(SuggestedUser::from)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn user(id: i64, skills: &str) -> User {
        User {
            id,
            first_name: None,
            last_name: None,
            username: format!("user{id}"),
            email: format!("user{id}@example.com"),
            location: None,
            skills: (!skills.is_empty()).then(|| skills.to_string()),
            profile_photo_url: None,
            created_at: Utc::now(),
        }
    }

    fn ids(users: &[User]) -> Vec<i64> {
        users.iter().map(|u| u.id).collect()
    }

    #[test]
    fn parse_skills_trims_and_drops_empty_tokens() {
        assert_eq!(parse_skills(Some(" Go , Rust ,, ")), vec!["Go", "Rust"]);
        assert!(parse_skills(Some("")).is_empty());
        assert!(parse_skills(None).is_empty());
    }

    #[test]
    fn overlap_uses_substring_containment() {
        let skills = vec!["Go", "Rust"];
        // "Go" is a substring of "Golang".
        assert_eq!(skill_overlap(&skills, "Golang,Python"), 1);
        assert_eq!(skill_overlap(&skills, "Go,Rust"), 2);
        assert_eq!(skill_overlap(&skills, "Python"), 0);
    }

    #[test]
    fn overlap_is_case_sensitive() {
        assert_eq!(skill_overlap(&["go"], "Go,Golang"), 0);
    }

    #[test]
    fn higher_overlap_ranks_first() {
        let skills = vec!["Go", "Rust", "SQL"];
        let candidates = vec![
            user(1, "Python"),
            user(2, "Go,Rust,SQL"),
            user(3, "Rust"),
        ];
        let ranked = rank_by_overlap(candidates, &skills);
        assert_eq!(ids(&ranked), vec![2, 3, 1]);
    }

    #[test]
    fn equal_scores_keep_store_order() {
        let skills = vec!["Rust"];
        let candidates = vec![user(5, "Rust"), user(3, "Rust"), user(9, "Rust")];
        let ranked = rank_by_overlap(candidates, &skills);
        assert_eq!(ids(&ranked), vec![5, 3, 9]);
    }

    #[test]
    fn no_skills_degrades_to_store_order() {
        let skills: Vec<&str> = vec![];
        let candidates = vec![user(4, "Go"), user(2, "Rust"), user(7, "")];
        let ranked = rank_by_overlap(candidates, &skills);
        assert_eq!(ids(&ranked), vec![4, 2, 7]);
    }

    #[test]
    fn result_is_capped_at_ten() {
        let candidates: Vec<User> = (1..=15).map(|id| user(id, "Rust")).collect();
        let ranked = rank_by_overlap(candidates, &["Rust"]);
        assert_eq!(ranked.len(), 10);
    }
}
