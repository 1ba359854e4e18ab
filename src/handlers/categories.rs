use warp::{reject, Rejection, Reply};

use super::PageQuery;
use crate::{
    db::Db,
    models::{category_map, CategoriesResponse, CategoryQuestionsResponse},
    quiz,
    rejections::{InternalServerError, NotFound, ResultExt},
};

pub(crate) async fn list_categories(db: Db) -> Result<impl Reply, Rejection> {
    let categories = db.categories().await.reject("could not load categories")?;

    Ok(warp::reply::json(&CategoriesResponse {
        success: true,
        categories: category_map(categories),
    }))
}

pub(crate) async fn category_questions(
    db: Db,
    category_id: i64,
    query: PageQuery,
) -> Result<impl Reply, Rejection> {
    let questions = db
        .questions_in_category(category_id)
        .await
        .reject("could not load category questions")?;

    // Not-found is decided on the full matching set; a page past the end
    // of a non-empty category still succeeds with an empty window.
    if questions.is_empty() {
        return Err(reject::custom(NotFound));
    }

    let total_questions = questions.len() as i64;
    let page = quiz::paginate(&questions, query.page).to_vec();

    // Questions can outlive their category record; formatting such an
    // orphaned reference is a loud failure, not a silent default.
    let current_category = db
        .get_category(category_id)
        .await
        .reject("could not resolve category")?
        .ok_or_else(|| {
            tracing::error!("questions reference unknown category {category_id}");
            reject::custom(InternalServerError)
        })?;

    Ok(warp::reply::json(&CategoryQuestionsResponse {
        success: true,
        questions: page,
        total_questions,
        current_category,
    }))
}
