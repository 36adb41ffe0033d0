use test_utils::prelude::*;

mod login {
    use super::*;

    #[tokio::test]
    async fn admin_success() {
        let app = App::new().await;

        let res = app.login(ADMIN_EMAIL, ADMIN_PASSWORD).await;
        assert_eq!(res.status(), StatusCode::OK);

        let body: Value = res.json().await;
        assert!(body["token"].is_string());
        assert!(body["expires_at"].is_string());
        assert_json_include!(
            actual: &body["user"],
            expected: json!({
                "email": ADMIN_EMAIL,
                "role": "admin",
                "is_admin": true,
                "cadet_id": null,
                "platoon": null,
                "squad": null,
            })
        );
    }

    #[tokio::test]
    async fn email_is_case_insensitive() {
        let app = App::new().await;

        let res = app.login(&ADMIN_EMAIL.to_uppercase(), ADMIN_PASSWORD).await;

        assert_eq!(res.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn cadet_gets_unit_details() {
        let app = App::new().await;
        let cadet = app.register_cadet().await;

        let res = app.get("/v1/auth/me").user(&cadet).send().await;
        assert_eq!(res.status(), StatusCode::OK);

        let body: Value = res.json().await;
        assert_json_include!(
            actual: body,
            expected: json!({
                "role": "cadet",
                "is_admin": false,
                "cadet_id": cadet.cadet_id,
                "platoon": "10-1",
                "squad": 1,
            })
        );
    }

    #[tokio::test]
    async fn unknown_email() {
        let app = App::new().await;

        let res = app.login("nobody@example.com", "whatever").await;

        assert_error!(res, error::INVALID_CREDENTIALS);
    }

    #[tokio::test]
    async fn wrong_password() {
        let app = App::new().await;

        let res = app.login(ADMIN_EMAIL, "not-the-password").await;

        assert_error!(res, error::INVALID_CREDENTIALS);
    }

    #[tokio::test]
    async fn cadet_account_without_cadet() {
        let app = App::new().await;
        let admin = app.admin().await;

        let res = app
            .post("/v1/users")
            .user(&admin)
            .json(&json!({
                "email": "lonely@example.com",
                "name": "Lonely",
                "password": "lonely-password",
                "role": "cadet",
            }))
            .send()
            .await;
        assert_eq!(res.status(), StatusCode::CREATED);

        let res = app.login("lonely@example.com", "lonely-password").await;

        assert_error!(res, error::ACCOUNT_NOT_LINKED);
    }

    #[tokio::test]
    async fn missing_password() {
        let app = App::new().await;

        let res = app
            .post("/v1/auth/login")
            .json(&json!({ "email": ADMIN_EMAIL }))
            .send()
            .await;

        assert_error!(res, error::JSON_MISSING_FIELDS);
    }

    #[tokio::test]
    async fn malformed_body() {
        let app = App::new().await;

        let res = app
            .post("/v1/auth/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body("{\"email\": ")
            .send()
            .await;

        assert_error!(res, error::JSON_SYNTAX_ERROR);
    }

    #[tokio::test]
    async fn missing_content_type() {
        let app = App::new().await;

        let res = app
            .post("/v1/auth/login")
            .body(json!({ "email": ADMIN_EMAIL, "password": ADMIN_PASSWORD }).to_string())
            .send()
            .await;

        assert_error!(res, error::JSON_CONTENT_TYPE);
    }
}

mod session {
    use super::*;

    #[tokio::test]
    async fn me_without_token() {
        let app = App::new().await;

        let res = app.get("/v1/auth/me").send().await;

        assert_error!(res, error::COULD_NOT_GET_CLAIMS);
    }

    #[tokio::test]
    async fn garbage_token_is_anonymous() {
        let app = App::new().await;

        let res = app
            .get("/v1/auth/me")
            .user(&Token("not.a.jwt"))
            .send()
            .await;
        assert_error!(res, error::COULD_NOT_GET_CLAIMS);

        let res = app.get("/v1/users").user(&Token("not.a.jwt")).send().await;
        assert_error!(res, error::NOT_ENOUGH_PERMISSIONS);
    }

    #[tokio::test]
    async fn logout_revokes_admin_access() {
        let app = App::new().await;
        let admin = app.admin().await;

        let res = app.get("/v1/users").user(&admin).send().await;
        assert_eq!(res.status(), StatusCode::OK);

        let res = app.post("/v1/auth/logout").user(&admin).send().await;
        assert_eq!(res.status(), StatusCode::NO_CONTENT);

        let res = app.get("/v1/users").user(&admin).send().await;
        assert_error!(res, error::NOT_ENOUGH_PERMISSIONS);

        let res = app.get("/v1/auth/me").user(&admin).send().await;
        assert_error!(res, error::COULD_NOT_GET_CLAIMS);
    }

    #[tokio::test]
    async fn logout_only_ends_one_session() {
        let app = App::new().await;
        let first = app.admin().await;
        let second = app.admin().await;

        let res = app.post("/v1/auth/logout").user(&first).send().await;
        assert_eq!(res.status(), StatusCode::NO_CONTENT);

        let res = app.get("/v1/users").user(&second).send().await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn logout_without_session() {
        let app = App::new().await;

        let res = app.post("/v1/auth/logout").send().await;

        assert_error!(res, error::COULD_NOT_GET_CLAIMS);
    }
}

mod probes {
    use super::*;

    #[tokio::test]
    async fn liveness() {
        let app = App::new().await;

        let res = app.get("/livez").send().await;
        assert_eq!(res.status(), StatusCode::OK);

        let res = app.get("/readyz").send().await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn request_id_is_set() {
        let app = App::new().await;

        let res = app.get("/livez").send().await;

        assert!(res.header("x-request-id").is_some());
    }
}
