use crate::helpers::{
    add_new_project, get_member_ids, get_random_email, sample_project,
    signup, signup_many, TestApp,
};
use campaign_tracker::{routes::projects::AddMemberResponse, ErrorResponse};
use serde_json::json;
use test_context::test_context;

#[test_context(TestApp)]
#[tokio::test]
async fn should_append_user_id_to_existing_members(app: &mut TestApp) {
    let ids = signup_many(app, 6).await;
    assert_eq!(ids[4], 5);
    let email = get_random_email();
    let user_id = signup(app, "Seven", &email, "password").await;
    assert_eq!(user_id, 7);

    let project_id = add_new_project(app, &sample_project("Funland", "5")).await;

    let response = app
        .post_add_user(&json!({ "projectId": project_id, "email": email }))
        .await;
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response
            .json::<AddMemberResponse>()
            .await
            .expect("Could not deserialise response body"),
        AddMemberResponse {
            message: "User added to project successfully".to_owned()
        }
    );

    assert_eq!(get_member_ids(app, project_id).await, "5,7");
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_start_list_on_empty_project(app: &mut TestApp) {
    let email = get_random_email();
    let user_id = signup(app, "Ted", &email, "password").await;
    let project_id = add_new_project(app, &json!({ "name": "Empty" })).await;

    let response = app
        .post_add_user(&json!({
            "projectId": project_id.to_string(),
            "email": email
        }))
        .await;
    assert_eq!(response.status().as_u16(), 200);

    assert_eq!(get_member_ids(app, project_id).await, user_id.to_string());
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_not_duplicate_existing_member(app: &mut TestApp) {
    let email = get_random_email();
    let user_id = signup(app, "Ted", &email, "password").await;
    let project_id = add_new_project(app, &sample_project("Funland", "")).await;
    let request = json!({ "projectId": project_id, "email": email });

    assert_eq!(app.post_add_user(&request).await.status().as_u16(), 200);

    let response = app.post_add_user(&request).await;
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response
            .json::<AddMemberResponse>()
            .await
            .expect("Could not deserialise response body"),
        AddMemberResponse {
            message: "User is already a member of the project".to_owned()
        }
    );

    assert_eq!(get_member_ids(app, project_id).await, user_id.to_string());
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_404_for_unknown_user_or_project(app: &mut TestApp) {
    let email = get_random_email();
    signup(app, "Ted", &email, "password").await;
    let project_id = add_new_project(app, &sample_project("Funland", "")).await;

    let test_cases = [
        (
            json!({ "projectId": project_id, "email": get_random_email() }),
            "User not found",
        ),
        (
            json!({ "projectId": 9999, "email": get_random_email() }),
            "User not found",
        ),
        (
            json!({ "projectId": 9999, "email": email }),
            "Project not found",
        ),
    ];

    for (body, expected_error) in test_cases.iter() {
        let response = app.post_add_user(body).await;
        assert_eq!(
            response.status().as_u16(),
            404,
            "Should fail with HTTP404 for input: {}",
            body
        );
        assert_eq!(
            response
                .json::<ErrorResponse>()
                .await
                .expect("Could not deserialise response body to ErrorResponse")
                .error,
            expected_error.to_string()
        );
    }

    assert_eq!(get_member_ids(app, project_id).await, "");
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_400_for_non_integer_project_id(app: &mut TestApp) {
    let response = app
        .post_add_user(&json!({
            "projectId": "funland",
            "email": get_random_email()
        }))
        .await;
    assert_eq!(response.status().as_u16(), 400);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_400_if_malformed_request(app: &mut TestApp) {
    let test_cases = [
        json!({ "projectId": 1 }),
        json!({ "email": get_random_email() }),
        json!({ "projectId": [1], "email": get_random_email() }),
    ];

    for test_case in test_cases.iter() {
        let response = app.post_add_user(test_case).await;
        assert_eq!(
            response.status().as_u16(),
            400,
            "Failed for input: {:?}",
            test_case
        );
        response
            .json::<ErrorResponse>()
            .await
            .expect("Could not deserialise response body to ErrorResponse");
    }
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_400_for_fractional_project_id(app: &mut TestApp) {
    let email = get_random_email();
    signup(app, "Ted", &email, "password").await;

    let response = app
        .post_add_user(&json!({ "projectId": 1.5, "email": email }))
        .await;
    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(
        response
            .json::<ErrorResponse>()
            .await
            .expect("Could not deserialise response body to ErrorResponse")
            .error,
        "Validation error: Invalid project ID: 1.5"
    );
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_keep_every_member_under_concurrent_adds(app: &mut TestApp) {
    let first_email = get_random_email();
    let second_email = get_random_email();
    let first = signup(app, "Ted", &first_email, "password").await;
    let second = signup(app, "Dougal", &second_email, "password").await;
    let project_id = add_new_project(app, &sample_project("Funland", "")).await;

    let first_request = json!({ "projectId": project_id, "email": first_email });
    let second_request =
        json!({ "projectId": project_id, "email": second_email });

    let (first_response, second_response) = tokio::join!(
        app.post_add_user(&first_request),
        app.post_add_user(&second_request)
    );
    assert_eq!(first_response.status().as_u16(), 200);
    assert_eq!(second_response.status().as_u16(), 200);

    let mut members: Vec<i64> = get_member_ids(app, project_id)
        .await
        .split(',')
        .map(|id| id.parse().unwrap())
        .collect();
    members.sort();
    assert_eq!(members, vec![first, second]);
}
