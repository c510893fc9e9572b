use crate::helpers::{
    add_new_project, get_json_response_body, sample_project, TestApp,
};
use serde_json::json;
use test_context::test_context;

#[test_context(TestApp)]
#[tokio::test]
async fn should_change_only_estimated_revenue(app: &mut TestApp) {
    let request = sample_project("Funland", "5,7");
    let id = add_new_project(app, &request).await;

    let response = app
        .put_update_revenue(&id.to_string(), &json!({ "estimatedRevenue": 999.5 }))
        .await;
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        get_json_response_body(response).await,
        json!({ "changes": 1 })
    );

    let mut expected = request.clone();
    expected["id"] = json!(id);
    expected["estimatedRevenue"] = json!(999.5);

    let response = app.get_proyecto(&id.to_string()).await;
    assert_eq!(
        get_json_response_body(response).await,
        json!({ "proyecto": expected })
    );
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_accept_legacy_field_name(app: &mut TestApp) {
    let id = add_new_project(app, &sample_project("Funland", "")).await;

    let response = app
        .put_update_revenue(
            &id.to_string(),
            &json!({ "facturacion_estimada": 42 }),
        )
        .await;
    assert_eq!(
        get_json_response_body(response).await,
        json!({ "changes": 1 })
    );

    let response = app.get_proyecto(&id.to_string()).await;
    assert_eq!(
        get_json_response_body(response).await["proyecto"]["estimatedRevenue"],
        json!(42.0)
    );
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_report_zero_changes_for_missing_project(app: &mut TestApp) {
    let response = app
        .put_update_revenue("9999", &json!({ "estimatedRevenue": 1.0 }))
        .await;
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        get_json_response_body(response).await,
        json!({ "changes": 0 })
    );
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_accept_revenue_as_numeric_text(app: &mut TestApp) {
    let id = add_new_project(app, &sample_project("Funland", "")).await;

    let response = app
        .put_update_revenue(&id.to_string(), &json!({ "estimatedRevenue": "1200.75" }))
        .await;
    assert_eq!(response.status().as_u16(), 200);

    let response = app.get_proyecto(&id.to_string()).await;
    assert_eq!(
        get_json_response_body(response).await["proyecto"]["estimatedRevenue"],
        1200.75
    );
}
