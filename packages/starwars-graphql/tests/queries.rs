use async_graphql::Request;
use pretty_assertions::assert_eq;
use serde_json::json;
use starwars_graphql::pubsub::ReviewPublisher;
use starwars_graphql::schema::{build_schema, StarWarsSchema};
use starwars_graphql::store::Store;

fn schema() -> StarWarsSchema {
    build_schema(Store::new(), ReviewPublisher::new(8))
}

#[tokio::test]
async fn test_hero_per_episode() {
    let schema = schema();

    let response = schema
        .execute(Request::new(
            r#"
            query {
                artoo: hero { name }
                luke: hero(episode: EMPIRE) { name }
            }
        "#,
        ))
        .await
        .into_result()
        .unwrap();

    assert_eq!(
        response.data.into_json().unwrap(),
        json!({
            "artoo": { "name": "R2-D2" },
            "luke": { "name": "Luke Skywalker" },
        })
    );
}

#[tokio::test]
async fn test_friends_connection_without_paging_arguments() {
    let schema = schema();

    let response = schema
        .execute(Request::new(
            r#"
            query {
                human(id: "1000") {
                    friendsConnection {
                        totalCount
                        edges {
                            cursor
                            node { name }
                        }
                        friends { name }
                        pageInfo {
                            startCursor
                            endCursor
                            hasNextPage
                        }
                    }
                }
            }
        "#,
        ))
        .await
        .into_result()
        .unwrap();

    assert_eq!(
        response.data.into_json().unwrap(),
        json!({
            "human": {
                "friendsConnection": {
                    "totalCount": 4,
                    "edges": [
                        { "cursor": "Y3Vyc29yMQ==", "node": { "name": "Han Solo" } },
                        { "cursor": "Y3Vyc29yMg==", "node": { "name": "Leia Organa" } },
                        { "cursor": "Y3Vyc29yMw==", "node": { "name": "C-3PO" } },
                        { "cursor": "Y3Vyc29yNA==", "node": { "name": "R2-D2" } },
                    ],
                    "friends": [
                        { "name": "Han Solo" },
                        { "name": "Leia Organa" },
                        { "name": "C-3PO" },
                        { "name": "R2-D2" },
                    ],
                    "pageInfo": {
                        "startCursor": "Y3Vyc29yMQ==",
                        "endCursor": "Y3Vyc29yNA==",
                        "hasNextPage": false,
                    },
                }
            }
        })
    );
}

#[tokio::test]
async fn test_friends_connection_resumes_after_cursor() {
    let schema = schema();

    // "Y3Vyc29yMQ==" is the cursor of the first edge.
    let response = schema
        .execute(Request::new(
            r#"
            query {
                human(id: "1000") {
                    friendsConnection(first: 2, after: "Y3Vyc29yMQ==") {
                        totalCount
                        edges {
                            cursor
                            node { name }
                        }
                        pageInfo { hasNextPage }
                    }
                }
            }
        "#,
        ))
        .await
        .into_result()
        .unwrap();

    assert_eq!(
        response.data.into_json().unwrap(),
        json!({
            "human": {
                "friendsConnection": {
                    "totalCount": 4,
                    "edges": [
                        { "cursor": "Y3Vyc29yMg==", "node": { "name": "Leia Organa" } },
                        { "cursor": "Y3Vyc29yMw==", "node": { "name": "C-3PO" } },
                    ],
                    "pageInfo": { "hasNextPage": true },
                }
            }
        })
    );
}

#[tokio::test]
async fn test_friends_connection_works_through_the_interface() {
    let schema = schema();

    let response = schema
        .execute(Request::new(
            r#"
            query {
                character(id: "2001") {
                    name
                    friendsConnection(first: 1) {
                        totalCount
                        friends { name }
                        pageInfo { hasNextPage }
                    }
                }
            }
        "#,
        ))
        .await
        .into_result()
        .unwrap();

    assert_eq!(
        response.data.into_json().unwrap(),
        json!({
            "character": {
                "name": "R2-D2",
                "friendsConnection": {
                    "totalCount": 3,
                    "friends": [{ "name": "Luke Skywalker" }],
                    "pageInfo": { "hasNextPage": true },
                }
            }
        })
    );
}

#[tokio::test]
async fn test_friends_connection_rejects_malformed_cursor() {
    let schema = schema();

    let response = schema
        .execute(Request::new(
            r#"
            query {
                human(id: "1000") {
                    friendsConnection(after: "garbage") {
                        totalCount
                    }
                }
            }
        "#,
        ))
        .await;

    assert!(!response.errors.is_empty());
    assert!(response.errors[0].message.contains("Invalid cursor"));
}

#[tokio::test]
async fn test_friends_connection_rejects_negative_first() {
    let schema = schema();

    let response = schema
        .execute(Request::new(
            r#"
            query {
                human(id: "1000") {
                    friendsConnection(first: -1) {
                        totalCount
                    }
                }
            }
        "#,
        ))
        .await;

    assert!(!response.errors.is_empty());
    assert!(response.errors[0].message.contains("Invalid argument"));
}

#[tokio::test]
async fn test_search_spans_entity_kinds() {
    let schema = schema();

    let response = schema
        .execute(Request::new(
            r#"
            query {
                search(text: "an") {
                    __typename
                    ... on Human { name }
                    ... on Droid { name }
                    ... on Starship { name }
                }
            }
        "#,
        ))
        .await
        .into_result()
        .unwrap();

    assert_eq!(
        response.data.into_json().unwrap(),
        json!({
            "search": [
                { "__typename": "Human", "name": "Han Solo" },
                { "__typename": "Human", "name": "Leia Organa" },
                { "__typename": "Starship", "name": "TIE Advanced x1" },
            ]
        })
    );
}

#[tokio::test]
async fn test_seeded_reviews() {
    let schema = schema();

    let response = schema
        .execute(Request::new(
            r#"
            query {
                reviews(episode: EMPIRE) {
                    episode
                    stars
                    commentary
                }
            }
        "#,
        ))
        .await
        .into_result()
        .unwrap();

    assert_eq!(
        response.data.into_json().unwrap(),
        json!({
            "reviews": [
                {
                    "episode": "EMPIRE",
                    "stars": 4,
                    "commentary": "This IS a great movie?",
                },
                {
                    "episode": "EMPIRE",
                    "stars": 1,
                    "commentary": "This is NOT a great movie!",
                },
            ]
        })
    );
}

#[tokio::test]
async fn test_create_review_is_queryable() {
    let schema = schema();

    let response = schema
        .execute(Request::new(
            r#"
            mutation {
                createReview(
                    episode: JEDI
                    review: { stars: 3, commentary: "Ewoks." }
                ) {
                    episode
                    stars
                    commentary
                }
            }
        "#,
        ))
        .await
        .into_result()
        .unwrap();

    assert_eq!(
        response.data.into_json().unwrap(),
        json!({
            "createReview": {
                "episode": "JEDI",
                "stars": 3,
                "commentary": "Ewoks.",
            }
        })
    );

    let response = schema
        .execute(Request::new(
            r#"query { reviews(episode: JEDI) { stars } }"#,
        ))
        .await
        .into_result()
        .unwrap();

    assert_eq!(
        response.data.into_json().unwrap(),
        json!({ "reviews": [{ "stars": 3 }] })
    );
}

#[tokio::test]
async fn test_create_review_requires_an_episode() {
    let schema = schema();

    let response = schema
        .execute(Request::new(
            r#"
            mutation {
                createReview(review: { stars: 3 }) { stars }
            }
        "#,
        ))
        .await;

    assert!(!response.errors.is_empty());
    assert!(response.errors[0].message.contains("episode"));
}

#[tokio::test]
async fn test_length_unit_conversions() {
    let schema = schema();

    let response = schema
        .execute(Request::new(
            r#"
            query {
                human(id: "1000") { height }
                starship(id: "3001") {
                    name
                    meters: length
                    feet: length(unit: FOOT)
                }
            }
        "#,
        ))
        .await
        .into_result()
        .unwrap();

    let data = response.data.into_json().unwrap();
    assert_eq!(data["human"]["height"], json!(1.72));
    assert_eq!(data["starship"]["name"], json!("X-Wing"));
    assert_eq!(data["starship"]["meters"], json!(12.5));

    let feet = data["starship"]["feet"].as_f64().unwrap();
    assert!((feet - 12.5 * 3.28084).abs() < 1e-9);
}
