use std::convert::Infallible;

use serde::Serialize;
use warp::{
    http::StatusCode,
    reject::{Reject, Rejection},
    reply::Reply,
};

macro_rules! rejects {
    ($($name:ident),*) => {
        $(
            #[derive(Debug)]
            pub struct $name;

            impl Reject for $name {}
        )*
    };
}

rejects!(NotFound, Unprocessable, InternalServerError);

/// Log a failure with context and turn it into a 500 rejection.
pub trait ResultExt<T> {
    fn reject(self, context: &str) -> Result<T, Rejection>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for Result<T, E> {
    fn reject(self, context: &str) -> Result<T, Rejection> {
        self.map_err(|e| {
            tracing::error!("{context}: {e}");
            warp::reject::custom(InternalServerError)
        })
    }
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: u16,
    message: &'static str,
}

pub async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let code;
    let message;

    if err.is_not_found() || err.find::<NotFound>().is_some() {
        code = StatusCode::NOT_FOUND;
        message = "Not found";
    } else if err.find::<Unprocessable>().is_some() {
        code = StatusCode::UNPROCESSABLE_ENTITY;
        message = "Unprocessable";
    } else if err
        .find::<warp::filters::body::BodyDeserializeError>()
        .is_some()
        || err.find::<warp::reject::InvalidQuery>().is_some()
    {
        // Checked before MethodNotAllowed: a bad body on a path served by
        // several verbs combines with the other verbs' method rejections.
        code = StatusCode::BAD_REQUEST;
        message = "Bad request";
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        code = StatusCode::METHOD_NOT_ALLOWED;
        message = "Method not allowed";
    } else if err.find::<InternalServerError>().is_some() {
        code = StatusCode::INTERNAL_SERVER_ERROR;
        message = "Server error";
    } else {
        tracing::error!("unhandled rejection: {:?}", err);
        code = StatusCode::INTERNAL_SERVER_ERROR;
        message = "Server error";
    }

    let body = ErrorBody {
        success: false,
        error: code.as_u16(),
        message,
    };

    Ok(warp::reply::with_status(warp::reply::json(&body), code))
}
