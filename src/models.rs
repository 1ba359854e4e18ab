use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A trivia question as stored and as formatted on the wire.
///
/// `difficulty` and `category` are nullable in the store; an id in
/// `category` that no longer resolves to a [`Category`] record is
/// permitted (referential integrity is not enforced here).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub difficulty: Option<i64>,
    pub category: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "type")]
    pub label: String,
}

/// Map of category id to display label, as the frontend expects it.
pub fn category_map(categories: Vec<Category>) -> BTreeMap<i64, String> {
    categories.into_iter().map(|c| (c.id, c.label)).collect()
}

#[derive(Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: BTreeMap<i64, String>,
}

#[derive(Serialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    /// Count of ALL questions in the store, not the filtered or paged count.
    pub total_questions: i64,
    pub categories: BTreeMap<i64, String>,
    pub current_category: Option<Category>,
}

#[derive(Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub current_category: Category,
}

#[derive(Serialize)]
pub struct MutationResponse {
    pub success: bool,
    pub id: i64,
}

#[derive(Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: QuizQuestion,
}

/// Either the next question, or the literal `false` the client treats as
/// "quiz over". Exhaustion is expected steady-state, not an error.
#[derive(Serialize)]
#[serde(untagged)]
pub enum QuizQuestion {
    Next(Question),
    Exhausted(bool),
}

impl From<Option<Question>> for QuizQuestion {
    fn from(question: Option<Question>) -> Self {
        match question {
            Some(q) => Self::Next(q),
            None => Self::Exhausted(false),
        }
    }
}
