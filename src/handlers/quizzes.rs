use std::collections::HashSet;

use warp::{Rejection, Reply};

use super::QuizBody;
use crate::{
    db::Db,
    models::QuizResponse,
    quiz,
    rejections::ResultExt,
};

pub(crate) async fn next_question(db: Db, body: QuizBody) -> Result<impl Reply, Rejection> {
    let previous: HashSet<i64> = body.previous_questions.into_iter().collect();

    let pool = db.questions().await.reject("could not load questions")?;
    let question = quiz::next_question(pool, &previous, body.quiz_category);

    if question.is_none() {
        tracing::debug!(
            "quiz pool exhausted for category {} after {} questions",
            body.quiz_category,
            previous.len()
        );
    }

    Ok(warp::reply::json(&QuizResponse {
        success: true,
        question: question.into(),
    }))
}
