pub mod db;
pub mod handlers;
pub mod models;
pub mod quiz;
pub mod rejections;

use std::convert::Infallible;

use warp::Filter;

use db::Db;

pub(crate) fn with_state(
    db: Db,
) -> impl Filter<Extract = (Db,), Error = Infallible> + Clone {
    warp::any().map(move || db.clone())
}

pub fn routes(
    db: Db,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    let cors = warp::cors()
        .allow_any_origin()
        .allow_headers(["content-type", "authorization"])
        .allow_methods(["GET", "POST", "DELETE"]);

    handlers::routes(db).with(cors)
}
