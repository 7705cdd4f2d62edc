use async_graphql::Variables;
use serde_json::json;
use uuid::Uuid;

use crate::common::*;

#[tokio::test]
async fn test_create_user() {
    let state = setup_test_state();
    let schema = setup_test_schema();

    let query = r#"
        mutation CreateUser($dto: CreateUserInput!) {
            createUser(dto: $dto) {
                id
                name
                balance
                profile { id }
                posts { id }
                userSubscribedTo { id }
                subscribedToUser { id }
            }
        }
    "#;

    let variables = Variables::from_json(json!({
        "dto": { "name": "Alice", "balance": 12.5 }
    }));

    let response = execute_graphql(&schema, &state, query, Some(variables)).await;

    assert!(
        response.errors.is_empty(),
        "createUser should succeed: {:?}",
        response.errors
    );

    let data = response.data.into_json().unwrap();
    let user = &data["createUser"];
    assert_eq!(user["name"], "Alice");
    assert_eq!(user["balance"], 12.5);
    assert!(user["profile"].is_null());
    assert_eq!(user["posts"], json!([]));
    assert_eq!(user["userSubscribedTo"], json!([]));
    assert_eq!(user["subscribedToUser"], json!([]));

    let id = user["id"].as_str().unwrap();
    assert!(Uuid::parse_str(id).is_ok());
}

#[tokio::test]
async fn test_list_users() {
    let state = setup_test_state();
    let schema = setup_test_schema();

    let alice = create_test_user(&state, "Alice", 1.0).await;
    let bob = create_test_user(&state, "Bob", 2.0).await;

    let response = execute_graphql(&schema, &state, "query { users { id name } }", None).await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().unwrap();
    let ids: Vec<&str> = data["users"]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["id"].as_str().unwrap())
        .collect();

    assert_eq!(ids, vec![alice.to_string(), bob.to_string()]);
}

#[tokio::test]
async fn test_get_user_by_id() {
    let state = setup_test_state();
    let schema = setup_test_schema();

    let user_id = create_test_user(&state, "Specific", 3.0).await;
    create_test_profile(&state, user_id, 1990).await;
    create_test_post(&state, user_id, "First").await;

    let query = r#"
        query GetUser($id: UUID!) {
            user(id: $id) {
                id
                name
                profile {
                    yearOfBirth
                    memberType { id }
                }
                posts { title authorId }
            }
        }
    "#;

    let variables = Variables::from_json(json!({ "id": user_id.to_string() }));
    let response = execute_graphql(&schema, &state, query, Some(variables)).await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().unwrap();
    let user = &data["user"];
    assert_eq!(user["id"], user_id.to_string());
    assert_eq!(user["name"], "Specific");
    assert_eq!(user["profile"]["yearOfBirth"], 1990);
    assert_eq!(user["profile"]["memberType"]["id"], "BASIC");
    assert_eq!(user["posts"][0]["title"], "First");
    assert_eq!(user["posts"][0]["authorId"], user_id.to_string());
}

#[tokio::test]
async fn test_missing_user_is_null_not_an_error() {
    let state = setup_test_state();
    let schema = setup_test_schema();

    let variables = Variables::from_json(json!({ "id": Uuid::new_v4().to_string() }));
    let response = execute_graphql(
        &schema,
        &state,
        "query GetUser($id: UUID!) { user(id: $id) { id } }",
        Some(variables),
    )
    .await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    assert_eq!(response.data.into_json().unwrap(), json!({ "user": null }));
}

#[tokio::test]
async fn test_invalid_uuid_argument_is_rejected() {
    let state = setup_test_state();
    let schema = setup_test_schema();

    let response = execute_graphql(
        &schema,
        &state,
        r#"query { user(id: "definitely-not-a-uuid") { id } }"#,
        None,
    )
    .await;

    assert!(!response.errors.is_empty(), "bad UUID should fail");

    let variables = Variables::from_json(json!({ "id": "12345" }));
    let response = execute_graphql(
        &schema,
        &state,
        "query GetUser($id: UUID!) { user(id: $id) { id } }",
        Some(variables),
    )
    .await;

    assert!(!response.errors.is_empty(), "bad UUID variable should fail");
}

#[tokio::test]
async fn test_change_user_only_touches_supplied_fields() {
    let state = setup_test_state();
    let schema = setup_test_schema();

    let user_id = create_test_user(&state, "Unchanged", 10.0).await;

    let query = r#"
        mutation ChangeUser($id: UUID!, $dto: ChangeUserInput!) {
            changeUser(id: $id, dto: $dto) {
                id
                name
                balance
            }
        }
    "#;

    let variables = Variables::from_json(json!({
        "id": user_id.to_string(),
        "dto": { "balance": 50 }
    }));
    let response = execute_graphql(&schema, &state, query, Some(variables)).await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().unwrap();
    assert_eq!(data["changeUser"]["name"], "Unchanged");
    assert_eq!(data["changeUser"]["balance"], 50.0);
}

#[tokio::test]
async fn test_change_missing_user_fails() {
    let state = setup_test_state();
    let schema = setup_test_schema();

    let variables = Variables::from_json(json!({
        "id": Uuid::new_v4().to_string(),
        "dto": { "name": "Ghost" }
    }));
    let response = execute_graphql(
        &schema,
        &state,
        "mutation ($id: UUID!, $dto: ChangeUserInput!) { changeUser(id: $id, dto: $dto) { id } }",
        Some(variables),
    )
    .await;

    assert_eq!(error_codes(&response), vec!["NOT_FOUND"]);
}

#[tokio::test]
async fn test_delete_user() {
    let state = setup_test_state();
    let schema = setup_test_schema();

    let user_id = create_test_user(&state, "Doomed", 0.0).await;
    let query = "mutation ($id: UUID!) { deleteUser(id: $id) }";

    let variables = Variables::from_json(json!({ "id": user_id.to_string() }));
    let response = execute_graphql(&schema, &state, query, Some(variables.clone())).await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    assert_eq!(
        response.data.into_json().unwrap(),
        json!({ "deleteUser": "OK" })
    );

    // Deleting again is not a no-op.
    let response = execute_graphql(&schema, &state, query, Some(variables)).await;
    assert_eq!(error_codes(&response), vec!["NOT_FOUND"]);
    assert_eq!(response.errors[0].message, "User not found");
}
