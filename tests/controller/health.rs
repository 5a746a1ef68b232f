use movie_api::server::controller::health::health;

use super::*;

#[tokio::test]
async fn reports_ok() {
    let resp = health().await.into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await["status"], "ok");
}
