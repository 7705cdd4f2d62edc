use async_graphql::Variables;
use serde_json::json;
use uuid::Uuid;

use crate::common::*;

const SUBSCRIBE: &str = r#"
    mutation SubscribeTo($userId: UUID!, $authorId: UUID!) {
        subscribeTo(userId: $userId, authorId: $authorId)
    }
"#;

const UNSUBSCRIBE: &str = r#"
    mutation UnsubscribeFrom($userId: UUID!, $authorId: UUID!) {
        unsubscribeFrom(userId: $userId, authorId: $authorId)
    }
"#;

const SUBSCRIPTIONS_OF: &str = r#"
    query Subscriptions($id: UUID!) {
        user(id: $id) {
            userSubscribedTo { id name }
            subscribedToUser { id name }
        }
    }
"#;

fn pair(user_id: Uuid, author_id: Uuid) -> Variables {
    Variables::from_json(json!({
        "userId": user_id.to_string(),
        "authorId": author_id.to_string()
    }))
}

fn by_id(id: Uuid) -> Variables {
    Variables::from_json(json!({ "id": id.to_string() }))
}

fn ids(list: &serde_json::Value) -> Vec<String> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|u| u["id"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_subscribe_then_unsubscribe() {
    let state = setup_test_state();
    let schema = setup_test_schema();

    let reader = create_test_user(&state, "Reader", 0.0).await;
    let writer = create_test_user(&state, "Writer", 0.0).await;

    let response = execute_graphql(&schema, &state, SUBSCRIBE, Some(pair(reader, writer))).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    assert_eq!(
        response.data.into_json().unwrap(),
        json!({ "subscribeTo": "OK" })
    );

    let response = execute_graphql(&schema, &state, SUBSCRIPTIONS_OF, Some(by_id(reader))).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().unwrap();
    assert_eq!(ids(&data["user"]["userSubscribedTo"]), vec![writer.to_string()]);
    assert_eq!(data["user"]["userSubscribedTo"][0]["name"], "Writer");
    assert!(ids(&data["user"]["subscribedToUser"]).is_empty());

    let response = execute_graphql(&schema, &state, SUBSCRIPTIONS_OF, Some(by_id(writer))).await;
    let data = response.data.into_json().unwrap();
    assert_eq!(ids(&data["user"]["subscribedToUser"]), vec![reader.to_string()]);

    let response = execute_graphql(&schema, &state, UNSUBSCRIBE, Some(pair(reader, writer))).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    assert_eq!(
        response.data.into_json().unwrap(),
        json!({ "unsubscribeFrom": "OK" })
    );

    let response = execute_graphql(&schema, &state, SUBSCRIPTIONS_OF, Some(by_id(reader))).await;
    let data = response.data.into_json().unwrap();
    assert!(ids(&data["user"]["userSubscribedTo"]).is_empty());
}

#[tokio::test]
async fn test_duplicate_subscription_fails() {
    let state = setup_test_state();
    let schema = setup_test_schema();

    let reader = create_test_user(&state, "Reader", 0.0).await;
    let writer = create_test_user(&state, "Writer", 0.0).await;

    let first = execute_graphql(&schema, &state, SUBSCRIBE, Some(pair(reader, writer))).await;
    assert!(first.errors.is_empty(), "{:?}", first.errors);

    let second = execute_graphql(&schema, &state, SUBSCRIBE, Some(pair(reader, writer))).await;
    assert_eq!(error_codes(&second), vec!["CONFLICT"]);

    // The reverse direction is a different pair.
    let reverse = execute_graphql(&schema, &state, SUBSCRIBE, Some(pair(writer, reader))).await;
    assert!(reverse.errors.is_empty(), "{:?}", reverse.errors);
}

#[tokio::test]
async fn test_unsubscribe_without_subscription_fails() {
    let state = setup_test_state();
    let schema = setup_test_schema();

    let reader = create_test_user(&state, "Reader", 0.0).await;
    let writer = create_test_user(&state, "Writer", 0.0).await;

    let response = execute_graphql(&schema, &state, UNSUBSCRIBE, Some(pair(reader, writer))).await;
    assert_eq!(error_codes(&response), vec!["NOT_FOUND"]);
    assert_eq!(response.errors[0].message, "Subscription not found");
}

#[tokio::test]
async fn test_nested_subscriptions_resolve_per_user() {
    let state = setup_test_state();
    let schema = setup_test_schema();

    let a = create_test_user(&state, "A", 0.0).await;
    let b = create_test_user(&state, "B", 0.0).await;
    let c = create_test_user(&state, "C", 0.0).await;

    for (subscriber, author) in [(a, b), (b, c), (c, a)] {
        let response =
            execute_graphql(&schema, &state, SUBSCRIBE, Some(pair(subscriber, author))).await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);
    }

    let response = execute_graphql(
        &schema,
        &state,
        r#"
            query {
                users {
                    name
                    userSubscribedTo {
                        name
                        userSubscribedTo { name }
                    }
                }
            }
        "#,
        None,
    )
    .await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().unwrap();
    assert_eq!(
        data["users"],
        json!([
            { "name": "A", "userSubscribedTo": [{ "name": "B", "userSubscribedTo": [{ "name": "C" }] }] },
            { "name": "B", "userSubscribedTo": [{ "name": "C", "userSubscribedTo": [{ "name": "A" }] }] },
            { "name": "C", "userSubscribedTo": [{ "name": "A", "userSubscribedTo": [{ "name": "B" }] }] }
        ])
    );
}
