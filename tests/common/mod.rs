use trivia::db::Db;

pub async fn create_test_db() -> Db {
    use std::sync::atomic::{AtomicU32, Ordering};
    static COUNTER: AtomicU32 = AtomicU32::new(0);
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    let path = std::env::temp_dir().join(format!("trivia_test_{}_{}.db", std::process::id(), id));
    // Clean up leftover file from previous runs
    let _ = std::fs::remove_file(&path);
    let url = format!("file:{}", path.display());
    Db::new(url, String::new())
        .await
        .expect("failed to create test database")
}

/// 19 questions, of which 8 contain "what" (case-insensitively) and
/// exactly 3 belong to category 1 (Science).
#[rustfmt::skip]
pub const SEED_QUESTIONS: [(&str, &str, i64, i64); 19] = [
    ("What boxer's original name is Cassius Clay?", "Muhammad Ali", 1, 4),
    ("What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", 4, 5),
    ("What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?", "Tom Cruise", 4, 5),
    ("Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 2, 4),
    ("What was the title of the 1990 fantasy directed by Tim Burton about a young man with multi-bladed appendages?", "Edward Scissorhands", 3, 5),
    ("Which is the only team to play in every soccer World Cup tournament?", "Brazil", 3, 6),
    ("Which country won the first ever soccer World Cup in 1930?", "Uruguay", 4, 6),
    ("Who invented Peanut Butter?", "George Washington Carver", 2, 4),
    ("What is the largest lake in Africa?", "Lake Victoria", 2, 3),
    ("In which royal palace would you find the Hall of Mirrors?", "The Palace of Versailles", 3, 3),
    ("The Taj Mahal is located in which Indian city?", "Agra", 2, 3),
    ("Which Dutch graphic artist, initials M C, was a creator of optical illusions?", "Escher", 1, 2),
    ("La Giaconda is better known as what?", "Mona Lisa", 3, 2),
    ("How many paintings did Van Gogh sell in his lifetime?", "One", 4, 2),
    ("Which American artist was a pioneer of Abstract Expressionism, and a leading exponent of action painting?", "Jackson Pollock", 2, 2),
    ("What is the heaviest organ in the human body?", "The Liver", 4, 1),
    ("Who discovered penicillin?", "Alexander Fleming", 3, 1),
    ("Hematology is a branch of medicine involving the study of what?", "Blood", 4, 1),
    ("Which dung beetle was worshipped by the ancient Egyptians?", "Scarab", 4, 4),
];

/// Insert the full seed and return the assigned ids, in insertion order.
pub async fn seed_questions(db: &Db) -> Vec<i64> {
    let mut ids = Vec::new();
    for (question, answer, difficulty, category) in SEED_QUESTIONS {
        let id = db
            .create_question(question, answer, Some(difficulty), Some(category))
            .await
            .expect("failed to seed question");
        ids.push(id);
    }
    ids
}

/// Ids of the seeded questions in the given category.
pub fn seeded_category_ids(ids: &[i64], category: i64) -> Vec<i64> {
    SEED_QUESTIONS
        .iter()
        .zip(ids)
        .filter(|((_, _, _, c), _)| *c == category)
        .map(|(_, id)| *id)
        .collect()
}
