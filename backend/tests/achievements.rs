use test_utils::prelude::*;

fn id(value: &Value) -> &str {
    value["id"].as_str().expect("no id")
}

async fn create_rule(app: &App, admin: &User, body: Value) -> TestResponse {
    app.post("/v1/auto-achievements")
        .user(admin)
        .json(&body)
        .send()
        .await
}

async fn awarded(app: &App, cadet: &Value) -> Vec<Value> {
    let res = app
        .get(&format!("/v1/cadets/{}/achievements", id(cadet)))
        .send()
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    res.json().await
}

mod catalog {
    use super::*;

    #[tokio::test]
    async fn create_list_delete() {
        let app = App::new().await;
        let admin = app.admin().await;

        let res = app
            .post("/v1/achievements")
            .user(&admin)
            .json(&json!({
                "title": "Early Bird",
                "description": "first at formation",
                "icon": "sunrise",
                "color": "#ffaa00",
            }))
            .send()
            .await;
        assert_eq!(res.status(), StatusCode::CREATED);
        let achievement: Value = res.json().await;

        let res = app.get("/v1/achievements").send().await;
        let list: Vec<Value> = res.json().await;
        assert_eq!(list, vec![achievement.clone()]);

        let res = app
            .delete(&format!("/v1/achievements/{}", id(&achievement)))
            .user(&admin)
            .send()
            .await;
        assert_eq!(res.status(), StatusCode::NO_CONTENT);

        let res = app
            .delete(&format!("/v1/achievements/{}", id(&achievement)))
            .user(&admin)
            .send()
            .await;
        assert_error!(res, error::ACHIEVEMENT_NOT_FOUND);
    }

    #[tokio::test]
    async fn missing_title() {
        let app = App::new().await;
        let admin = app.admin().await;

        let res = app
            .post("/v1/achievements")
            .user(&admin)
            .json(&json!({
                "title": "",
                "description": "",
                "icon": "x",
                "color": "red",
            }))
            .send()
            .await;

        assert_error!(res, error::JSON_VALIDATE_INVALID);
    }
}

mod auto {
    use super::*;

    #[tokio::test]
    async fn category_rule_needs_category() {
        let app = App::new().await;
        let admin = app.admin().await;

        let res = create_rule(
            &app,
            &admin,
            json!({
                "title": "Bookworm",
                "description": "",
                "icon": "book",
                "color": "blue",
                "requirement_type": "category_score",
                "requirement_value": 10,
            }),
        )
        .await;

        assert_error!(res, error::JSON_VALIDATE_INVALID);
    }

    #[tokio::test]
    async fn ordered_by_threshold() {
        let app = App::new().await;
        let admin = app.admin().await;

        for value in [300, 100, 200] {
            let res = create_rule(
                &app,
                &admin,
                json!({
                    "title": format!("Total {value}"),
                    "description": "",
                    "icon": "star",
                    "color": "gold",
                    "requirement_type": "total_score",
                    "requirement_value": value,
                }),
            )
            .await;
            assert_eq!(res.status(), StatusCode::CREATED);
        }

        let res = app.get("/v1/auto-achievements").send().await;
        let rules: Vec<Value> = res.json().await;

        let values: Vec<_> = rules
            .iter()
            .map(|rule| rule["requirement_value"].as_i64().unwrap())
            .collect();
        assert_eq!(values, [100, 200, 300]);
    }

    #[tokio::test]
    async fn granted_once_threshold_is_reached() {
        let app = App::new().await;
        let admin = app.admin().await;
        let cadet = app.create_cadet("Climber", "10-1", 1).await;

        let res = create_rule(
            &app,
            &admin,
            json!({
                "title": "Bookworm",
                "description": "50 study points",
                "icon": "book",
                "color": "blue",
                "requirement_type": "category_score",
                "requirement_category": "study",
                "requirement_value": 50,
            }),
        )
        .await;
        assert_eq!(res.status(), StatusCode::CREATED);

        app.award(id(&cadet), "study", 30).await;
        app.award(id(&cadet), "events", 30).await;
        assert!(awarded(&app, &cadet).await.is_empty());

        app.award(id(&cadet), "study", 20).await;
        let list = awarded(&app, &cadet).await;
        assert_eq!(list.len(), 1);
        assert_eq!(list[0]["kind"], "auto");
        assert_eq!(list[0]["achievement"]["title"], "Bookworm");

        app.award(id(&cadet), "study", 20).await;
        assert_eq!(awarded(&app, &cadet).await.len(), 1);
    }

    #[tokio::test]
    async fn new_rule_reaches_existing_cadets() {
        let app = App::new().await;
        let admin = app.admin().await;
        let veteran = app.create_cadet("Veteran", "10-1", 1).await;
        let rookie = app.create_cadet("Rookie", "10-1", 1).await;
        app.award(id(&veteran), "discipline", 120).await;
        app.award(id(&rookie), "discipline", 10).await;

        let res = create_rule(
            &app,
            &admin,
            json!({
                "title": "Centurion",
                "description": "100 points in total",
                "icon": "shield",
                "color": "silver",
                "requirement_type": "total_score",
                "requirement_value": 100,
            }),
        )
        .await;
        assert_eq!(res.status(), StatusCode::CREATED);

        assert_eq!(awarded(&app, &veteran).await.len(), 1);
        assert!(awarded(&app, &rookie).await.is_empty());
    }

    #[tokio::test]
    async fn delete_unknown() {
        let app = App::new().await;
        let admin = app.admin().await;

        let res = app
            .delete("/v1/auto-achievements/00000000-0000-0000-0000-000000000000")
            .user(&admin)
            .send()
            .await;

        assert_error!(res, error::ACHIEVEMENT_NOT_FOUND);
    }
}
