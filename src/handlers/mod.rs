mod categories;
mod questions;
mod quizzes;

use serde::Deserialize;
use warp::Filter;

use crate::{db::Db, with_state};

/// Deserialize a value that may be either a JSON number or a string
/// containing a number. The original trivia frontend sends
/// `quiz_category` as a string.
fn deserialize_string_or_i64<'de, D: serde::Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
    struct Vis;
    impl<'de> serde::de::Visitor<'de> for Vis {
        type Value = i64;
        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            f.write_str("number or numeric string")
        }
        fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<i64, E> {
            Ok(v)
        }
        fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<i64, E> {
            Ok(v as i64)
        }
        fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<i64, E> {
            v.parse().map_err(E::custom)
        }
    }
    d.deserialize_any(Vis)
}

/// Query strings always arrive as text. A page value that does not parse
/// becomes an out-of-range window (empty page) rather than a failure.
fn deserialize_page<'de, D: serde::Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
    let raw = String::deserialize(d)?;
    Ok(raw.parse().unwrap_or(0))
}

fn default_page() -> i64 {
    1
}

#[derive(Deserialize)]
struct ListQuery {
    #[serde(default = "default_page", deserialize_with = "deserialize_page")]
    page: i64,
    #[serde(default)]
    search: String,
}

#[derive(Deserialize)]
struct PageQuery {
    #[serde(default = "default_page", deserialize_with = "deserialize_page")]
    page: i64,
}

#[derive(Deserialize)]
struct CreateQuestionBody {
    #[serde(default)]
    question: Option<String>,
    #[serde(default)]
    answer: Option<String>,
    #[serde(default)]
    difficulty: Option<i64>,
    #[serde(default)]
    category: Option<i64>,
}

#[derive(Deserialize)]
struct QuizBody {
    #[serde(default)]
    previous_questions: Vec<i64>,
    #[serde(default, deserialize_with = "deserialize_string_or_i64")]
    quiz_category: i64,
}

pub fn routes(
    db: Db,
) -> impl warp::Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    // Method filters come after the path so that a wrong verb on a known
    // path surfaces as 405 while an unknown path stays 404.
    let list_categories = with_state(db.clone())
        .and(warp::path!("categories"))
        .and(warp::get())
        .and_then(categories::list_categories);

    let category_questions = with_state(db.clone())
        .and(warp::path!("categories" / i64 / "questions"))
        .and(warp::get())
        .and(warp::query::<PageQuery>())
        .and_then(categories::category_questions);

    let list_questions = with_state(db.clone())
        .and(warp::path!("questions"))
        .and(warp::get())
        .and(warp::query::<ListQuery>())
        .and_then(questions::list_questions);

    let create_question = with_state(db.clone())
        .and(warp::path!("questions"))
        .and(warp::post())
        .and(warp::body::json::<CreateQuestionBody>())
        .and_then(questions::create_question);

    let delete_question = with_state(db.clone())
        .and(warp::path!("questions" / i64))
        .and(warp::delete())
        .and_then(questions::delete_question);

    let quiz_question = with_state(db)
        .and(warp::path!("quizzes"))
        .and(warp::post())
        .and(warp::body::json::<QuizBody>())
        .and_then(quizzes::next_question);

    list_categories
        .or(category_questions)
        .or(list_questions)
        .or(create_question)
        .or(delete_question)
        .or(quiz_question)
}
