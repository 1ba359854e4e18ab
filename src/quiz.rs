//! Listing and quiz-selection rules: fixed-size pagination windows,
//! case-insensitive question search, and random next-question draws
//! under a client-supplied exclusion set.

use std::collections::HashSet;

use rand::Rng;

use crate::models::Question;

pub const QUESTIONS_PER_PAGE: usize = 10;

/// Category id meaning "draw from any category".
/// Real category ids are strictly positive.
pub const ANY_CATEGORY: i64 = 0;

/// The `[start, end)` window for a 1-based page, clipped to the slice.
/// Non-positive pages and pages past the end yield an empty slice.
pub fn paginate<T>(items: &[T], page: i64) -> &[T] {
    let Ok(page) = usize::try_from(page) else {
        return &[];
    };
    if page == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(QUESTIONS_PER_PAGE);
    if start >= items.len() {
        return &[];
    }
    let end = items.len().min(start + QUESTIONS_PER_PAGE);
    &items[start..end]
}

/// Case-insensitive substring match on the question text (not the answer),
/// over the full set, preserving store order.
pub fn search(questions: &[Question], term: &str) -> Vec<Question> {
    let needle = term.to_lowercase();
    questions
        .iter()
        .filter(|q| q.question.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// One uniform random draw from the questions not yet asked, optionally
/// scoped to a category. `None` means the pool is exhausted.
///
/// The eligible set is materialized and indexed in process rather than
/// letting the store order by random, which degrades on large tables.
pub fn next_question(
    questions: Vec<Question>,
    previous: &HashSet<i64>,
    category: i64,
) -> Option<Question> {
    let mut eligible: Vec<Question> = questions
        .into_iter()
        .filter(|q| !previous.contains(&q.id))
        .filter(|q| category == ANY_CATEGORY || q.category == Some(category))
        .collect();

    if eligible.is_empty() {
        return None;
    }

    let idx = rand::thread_rng().gen_range(0..eligible.len());
    Some(eligible.swap_remove(idx))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: i64, text: &str, category: i64) -> Question {
        Question {
            id,
            question: text.to_string(),
            answer: "it depends".to_string(),
            difficulty: Some(1),
            category: Some(category),
        }
    }

    fn pool(n: i64) -> Vec<Question> {
        (1..=n)
            .map(|i| question(i, &format!("Question {i}"), i % 3 + 1))
            .collect()
    }

    #[test]
    fn paginate_windows_are_disjoint_and_capped() {
        let items: Vec<i64> = (0..25).collect();
        let first = paginate(&items, 1);
        let second = paginate(&items, 2);
        let third = paginate(&items, 3);

        assert_eq!(first.len(), 10);
        assert_eq!(second.len(), 10);
        assert_eq!(third.len(), 5);
        assert_eq!(first.last(), Some(&9));
        assert_eq!(second.first(), Some(&10));
        assert_eq!(third.first(), Some(&20));
    }

    #[test]
    fn paginate_past_the_end_is_empty() {
        let items: Vec<i64> = (0..19).collect();
        assert!(paginate(&items, 3).is_empty());
        assert!(paginate(&items, 45).is_empty());
    }

    #[test]
    fn paginate_rejects_non_positive_pages_without_panicking() {
        let items: Vec<i64> = (0..19).collect();
        assert!(paginate(&items, 0).is_empty());
        assert!(paginate(&items, -7).is_empty());
        assert!(paginate(&items, i64::MAX).is_empty());
        assert!(paginate(&items, i64::MIN).is_empty());
    }

    #[test]
    fn search_is_case_insensitive_on_question_text_only() {
        let questions = vec![
            question(1, "What is the capital of France?", 1),
            question(2, "what year did WW2 end?", 2),
            question(3, "Name the largest ocean.", 2),
        ];
        // "what" appears in an answer too, which must not match
        let mut questions = questions;
        questions[2].answer = "whatever".to_string();

        let lower: Vec<i64> = search(&questions, "what").iter().map(|q| q.id).collect();
        let upper: Vec<i64> = search(&questions, "WHAT").iter().map(|q| q.id).collect();

        assert_eq!(lower, vec![1, 2]);
        assert_eq!(lower, upper);
    }

    #[test]
    fn search_preserves_store_order() {
        let questions = pool(9);
        let hits = search(&questions, "question");
        let ids: Vec<i64> = hits.iter().map(|q| q.id).collect();
        assert_eq!(ids, (1..=9).collect::<Vec<i64>>());
    }

    #[test]
    fn next_question_never_repeats_an_excluded_id() {
        let previous: HashSet<i64> = [1, 2, 3].into_iter().collect();
        for _ in 0..50 {
            let picked = next_question(pool(6), &previous, ANY_CATEGORY).unwrap();
            assert!(!previous.contains(&picked.id));
        }
    }

    #[test]
    fn next_question_respects_the_category_scope() {
        for _ in 0..50 {
            let picked = next_question(pool(9), &HashSet::new(), 2).unwrap();
            assert_eq!(picked.category, Some(2));
        }
    }

    #[test]
    fn next_question_is_none_only_when_the_pool_is_spent() {
        let all: HashSet<i64> = (1..=6).collect();
        assert!(next_question(pool(6), &all, ANY_CATEGORY).is_none());

        let all_but_one: HashSet<i64> = (1..=5).collect();
        let picked = next_question(pool(6), &all_but_one, ANY_CATEGORY).unwrap();
        assert_eq!(picked.id, 6);
    }

    #[test]
    fn next_question_exhausts_a_category_independently() {
        // ids 2, 5, 8 are the only category-3 questions in pool(9)
        let category_3: HashSet<i64> = [2, 5, 8].into_iter().collect();
        assert!(next_question(pool(9), &category_3, 3).is_none());
        assert!(next_question(pool(9), &category_3, ANY_CATEGORY).is_some());
    }

    #[test]
    fn next_question_ignores_orphaned_categories_when_scoped() {
        let mut questions = pool(3);
        questions[0].category = None;
        for _ in 0..20 {
            let picked = next_question(questions.clone(), &HashSet::new(), 1).unwrap();
            assert_eq!(picked.category, Some(1));
        }
    }
}
