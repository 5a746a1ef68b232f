//! Tests for the get_movie_characters endpoint.

use movie_api::server::controller::{
    character::get_movie_characters, util::params::CharacterParams,
};

use super::*;

fn params(
    sort_key: Option<&str>,
    sort_order: Option<&str>,
    gender: Option<&str>,
) -> CharacterParams {
    CharacterParams {
        sort_key: sort_key.map(str::to_string),
        sort_order: sort_order.map(str::to_string),
        gender: gender.map(str::to_string),
        ..Default::default()
    }
}

/// Expected: characters ordered by id with converted heights and totals
#[tokio::test]
async fn lists_characters_with_totals() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let state = test.app_state_with_cache(cache_with_characters().await);

    let resp = get_movie_characters(
        State(state),
        Path("1".to_string()),
        Ok(Query(CharacterParams::default())),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);

    let body = json_body(resp).await;
    let data = &body["data"];
    assert_eq!(body["count"], 3);
    assert_eq!(data["total_count"], 3);
    assert_eq!(data["total_cm"], 502);
    assert_eq!(data["total_ft"], "16");
    assert_eq!(data["characters"][0]["name"], "Luke Skywalker");
    assert_eq!(data["characters"][0]["height_ft"], "5");

    Ok(())
}

/// Expected: gender filter applies to the page and the totals
#[tokio::test]
async fn filters_by_gender() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let state = test.app_state_with_cache(cache_with_characters().await);

    let resp = get_movie_characters(
        State(state),
        Path("1".to_string()),
        Ok(Query(params(Some("height"), Some("desc"), Some("male")))),
    )
    .await
    .into_response();

    let body = json_body(resp).await;
    let data = &body["data"];
    assert_eq!(data["total_count"], 2);
    assert_eq!(data["total_cm"], 352);
    assert_eq!(data["characters"][0]["name"], "Han Solo");
    assert_eq!(data["characters"][1]["name"], "Luke Skywalker");

    Ok(())
}

#[tokio::test]
async fn sorts_by_name() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let state = test.app_state_with_cache(cache_with_characters().await);

    let resp = get_movie_characters(
        State(state),
        Path("1".to_string()),
        Ok(Query(params(Some("NAME"), None, None))),
    )
    .await
    .into_response();

    let body = json_body(resp).await;
    let names: Vec<&str> = body["data"]["characters"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Han Solo", "Leia Organa", "Luke Skywalker"]);

    Ok(())
}

/// Expected: 400 for unknown sort and filter options
#[tokio::test]
async fn bad_request_for_invalid_options() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let cache = cache_with_characters().await;

    for query in [
        params(Some("age"), None, None),
        params(None, Some("up"), None),
        params(None, None, Some("droid")),
    ] {
        let resp = get_movie_characters(
            State(test.app_state_with_cache(cache.clone())),
            Path("1".to_string()),
            Ok(Query(query)),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    Ok(())
}

#[tokio::test]
async fn not_found_for_unknown_movie() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let state = test.app_state_with_cache(cache_with_characters().await);

    let resp = get_movie_characters(
        State(state),
        Path("2".to_string()),
        Ok(Query(CharacterParams::default())),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(resp).await["message"], "Movie not found");

    Ok(())
}

/// Expected: 404 with a distinct message when no character matches the filter
#[tokio::test]
async fn not_found_when_no_character_matches() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let state = test.app_state_with_cache(cache_with_movies(&[1]).await);

    let resp = get_movie_characters(
        State(state),
        Path("1".to_string()),
        Ok(Query(params(None, None, Some("female")))),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(resp).await["message"], "No characters found");

    Ok(())
}
