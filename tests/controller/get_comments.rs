//! Tests for the get_comments endpoint.

use chrono::{Duration, Utc};
use movie_api::server::controller::{comment::get_comments, util::params::PaginationParams};

use super::*;

/// Expected: comments of the movie newest first with the total count
#[tokio::test]
async fn lists_comments_newest_first() -> Result<(), TestError> {
    let test = TestBuilder::new().with_comment_table().build().await?;
    let now = Utc::now().naive_utc();

    test.comment()
        .insert_mock_comment_at(1, "first", now - Duration::minutes(2))
        .await?;
    test.comment()
        .insert_mock_comment_at(1, "second", now - Duration::minutes(1))
        .await?;
    test.comment().insert_mock_comment(2, "elsewhere").await?;

    let state = test.app_state_with_cache(cache_with_movies(&[1, 2]).await);

    let resp = get_comments(
        State(state),
        Path("1".to_string()),
        Ok(Query(PaginationParams::default())),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);

    let body = json_body(resp).await;
    assert_eq!(body["count"], 2);
    assert_eq!(body["data"][0]["message"], "second");
    assert_eq!(body["data"][1]["message"], "first");

    Ok(())
}

#[tokio::test]
async fn paginates_comments() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_comment_table()
        .with_mock_comment(1, "a")
        .with_mock_comment(1, "b")
        .with_mock_comment(1, "c")
        .build()
        .await?;
    let state = test.app_state_with_cache(cache_with_movies(&[1]).await);

    let params = PaginationParams {
        page: Some("2".to_string()),
        page_size: Some("2".to_string()),
    };
    let resp = get_comments(State(state), Path("1".to_string()), Ok(Query(params)))
        .await
        .into_response();

    let body = json_body(resp).await;
    assert_eq!(body["count"], 3);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    Ok(())
}

#[tokio::test]
async fn not_found_for_unknown_movie() -> Result<(), TestError> {
    let test = TestBuilder::new().with_comment_table().build().await?;

    let resp = get_comments(
        State(test.into_app_state()),
        Path("9".to_string()),
        Ok(Query(PaginationParams::default())),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
