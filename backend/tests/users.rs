use test_utils::prelude::*;

async fn create_user(app: &App, admin: &User, body: Value) -> TestResponse {
    app.post("/v1/users").user(admin).json(&body).send().await
}

mod create {
    use super::*;

    #[tokio::test]
    async fn success() {
        let app = App::new().await;
        let admin = app.admin().await;

        let res = create_user(
            &app,
            &admin,
            json!({
                "email": "Second.Admin@Example.com",
                "name": "Second Admin",
                "password": "second-password",
                "role": "admin",
            }),
        )
        .await;
        assert_eq!(res.status(), StatusCode::CREATED);

        let body: Value = res.json().await;
        assert_eq!(body["email"], "second.admin@example.com");
        assert!(body.get("password_hash").is_none());

        let res = app.login("second.admin@example.com", "second-password").await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn duplicate_email() {
        let app = App::new().await;
        let admin = app.admin().await;

        let res = create_user(
            &app,
            &admin,
            json!({
                "email": ADMIN_EMAIL.to_uppercase(),
                "name": "Impostor",
                "password": "impostor-password",
                "role": "admin",
            }),
        )
        .await;

        assert_error!(res, error::USER_ALREADY_EXISTS);
    }

    #[tokio::test]
    async fn dangling_cadet() {
        let app = App::new().await;
        let admin = app.admin().await;

        let res = create_user(
            &app,
            &admin,
            json!({
                "email": "ghost@example.com",
                "name": "Ghost",
                "password": "ghost-password",
                "role": "cadet",
                "cadet_id": "00000000-0000-0000-0000-000000000000",
            }),
        )
        .await;

        assert_error!(res, error::CADET_NOT_FOUND);
    }

    #[tokio::test]
    async fn cadet_already_linked() {
        let app = App::new().await;
        let admin = app.admin().await;
        let cadet = app.register_cadet().await;

        let res = create_user(
            &app,
            &admin,
            json!({
                "email": "twin@example.com",
                "name": "Twin",
                "password": "twin-password",
                "role": "cadet",
                "cadet_id": cadet.cadet_id,
            }),
        )
        .await;

        assert_error!(res, error::CADET_ALREADY_LINKED);
    }

    #[tokio::test]
    async fn short_password() {
        let app = App::new().await;
        let admin = app.admin().await;

        let res = create_user(
            &app,
            &admin,
            json!({
                "email": "short@example.com",
                "name": "Short",
                "password": "short",
                "role": "admin",
            }),
        )
        .await;

        assert_error!(res, error::JSON_VALIDATE_INVALID);
    }

    #[tokio::test]
    async fn not_an_email() {
        let app = App::new().await;
        let admin = app.admin().await;

        let res = create_user(
            &app,
            &admin,
            json!({
                "email": "definitely not an email",
                "name": "Nobody",
                "password": "nobody-password",
                "role": "admin",
            }),
        )
        .await;

        assert_error!(res, error::JSON_VALIDATE_INVALID);
    }

    #[tokio::test]
    async fn cadet_cannot_create() {
        let app = App::new().await;
        let cadet = app.register_cadet().await;

        let res = create_user(
            &app,
            &cadet,
            json!({
                "email": "sneaky@example.com",
                "name": "Sneaky",
                "password": "sneaky-password",
                "role": "admin",
            }),
        )
        .await;

        assert_error!(res, error::NOT_ENOUGH_PERMISSIONS);
    }
}

mod list {
    use super::*;

    #[tokio::test]
    async fn hides_password_hashes() {
        let app = App::new().await;
        let admin = app.admin().await;
        let cadet = app.register_cadet().await;

        let res = app.get("/v1/users").user(&admin).send().await;
        assert_eq!(res.status(), StatusCode::OK);

        let users: Vec<Value> = res.json().await;
        assert_eq!(users.len(), 2);
        assert!(users.iter().all(|user| user.get("password_hash").is_none()));
        assert!(users
            .iter()
            .any(|user| user["email"] == cadet.email.as_str() && user["role"] == "cadet"));
    }

    #[tokio::test]
    async fn anonymous() {
        let app = App::new().await;

        let res = app.get("/v1/users").send().await;

        assert_error!(res, error::NOT_ENOUGH_PERMISSIONS);
    }
}
