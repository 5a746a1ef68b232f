//! Tests for the get_movie endpoint.

use movie_api::server::controller::movie::get_movie;

use super::*;

#[tokio::test]
async fn returns_movie_with_comment_count() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_comment_table()
        .with_mock_comment(1, "Classic")
        .build()
        .await?;
    let state = test.app_state_with_cache(cache_with_movies(&[1]).await);

    let resp = get_movie(State(state), Path("1".to_string()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);

    let body = json_body(resp).await;
    assert_eq!(body["data"]["title"], "Episode 1");
    assert_eq!(body["data"]["comment_count"], 1);
    assert!(body.get("count").is_none());

    Ok(())
}

#[tokio::test]
async fn not_found_for_unknown_movie() -> Result<(), TestError> {
    let test = TestBuilder::new().with_comment_table().build().await?;

    let resp = get_movie(State(test.into_app_state()), Path("7".to_string()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(resp).await["message"], "Movie not found");

    Ok(())
}

#[tokio::test]
async fn bad_request_for_invalid_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_comment_table().build().await?;

    for raw in ["abc", "0", "-1", "1.5"] {
        let resp = get_movie(State(test.into_app_state()), Path(raw.to_string()))
            .await
            .into_response();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "movie id {:?}", raw);
    }

    Ok(())
}
