use axum::extract::Path;
use axum::response::Json;

use crate::{HelloResponse, HiResponse};

pub async fn say_hi() -> Json<HiResponse> {
    Json(HiResponse { hi: "There" })
}

pub async fn say_hello(Path(name): Path<String>) -> Json<HelloResponse> {
    Json(HelloResponse { hello: name })
}
