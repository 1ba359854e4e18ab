use warp::{reject, Rejection, Reply};

use super::{CreateQuestionBody, ListQuery};
use crate::{
    db::Db,
    models::{category_map, MutationResponse, QuestionListResponse},
    quiz,
    rejections::{NotFound, ResultExt, Unprocessable},
};

pub(crate) async fn list_questions(db: Db, query: ListQuery) -> Result<impl Reply, Rejection> {
    let all = db.questions().await.reject("could not load questions")?;
    let total_questions = all.len() as i64;

    // Search results are returned in full; only the plain listing is paged.
    let questions = if query.search.is_empty() {
        quiz::paginate(&all, query.page).to_vec()
    } else {
        quiz::search(&all, &query.search)
    };

    if questions.is_empty() {
        return Err(reject::custom(NotFound));
    }

    let categories = db.categories().await.reject("could not load categories")?;

    Ok(warp::reply::json(&QuestionListResponse {
        success: true,
        questions,
        total_questions,
        categories: category_map(categories),
        current_category: None,
    }))
}

pub(crate) async fn create_question(
    db: Db,
    body: CreateQuestionBody,
) -> Result<impl Reply, Rejection> {
    let (Some(question), Some(answer)) = (body.question, body.answer) else {
        return Err(reject::custom(Unprocessable));
    };

    let id = db
        .create_question(&question, &answer, body.difficulty, body.category)
        .await
        .map_err(|e| {
            tracing::warn!("could not create question: {e}");
            reject::custom(Unprocessable)
        })?;

    Ok(warp::reply::json(&MutationResponse { success: true, id }))
}

pub(crate) async fn delete_question(db: Db, id: i64) -> Result<impl Reply, Rejection> {
    let deleted = db.delete_question(id).await.map_err(|e| {
        tracing::warn!("could not delete question {id}: {e}");
        reject::custom(Unprocessable)
    })?;

    if !deleted {
        return Err(reject::custom(Unprocessable));
    }

    Ok(warp::reply::json(&MutationResponse { success: true, id }))
}
