use crate::common::*;

#[tokio::test]
async fn test_list_member_types() {
    let state = setup_test_state();
    let schema = setup_test_schema();

    let query = r#"
        query {
            memberTypes {
                id
                discount
                postsLimitPerMonth
            }
        }
    "#;

    let response = execute_graphql(&schema, &state, query, None).await;

    assert!(
        response.errors.is_empty(),
        "memberTypes query should succeed: {:?}",
        response.errors
    );

    let data = response.data.into_json().unwrap();
    let member_types = data["memberTypes"].as_array().unwrap();
    assert_eq!(member_types.len(), 2);
    assert_eq!(member_types[0]["id"], "BASIC");
    assert_eq!(member_types[0]["postsLimitPerMonth"], 20.0);
    assert_eq!(member_types[1]["id"], "BUSINESS");
}

#[tokio::test]
async fn test_get_member_type_by_id() {
    let state = setup_test_state();
    let schema = setup_test_schema();

    let query = r#"
        query {
            memberType(id: BUSINESS) {
                id
                discount
            }
        }
    "#;

    let response = execute_graphql(&schema, &state, query, None).await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().unwrap();
    assert_eq!(data["memberType"]["id"], "BUSINESS");
    assert_eq!(data["memberType"]["discount"], 7.7);
}

#[tokio::test]
async fn test_unknown_member_type_id_is_rejected_by_the_engine() {
    let state = setup_test_state();
    let schema = setup_test_schema();

    let response = execute_graphql(
        &schema,
        &state,
        "query { memberType(id: PREMIUM) { id } }",
        None,
    )
    .await;

    assert!(!response.errors.is_empty(), "PREMIUM is not a MemberTypeId");
}
