use test_utils::prelude::*;

fn id(value: &Value) -> &str {
    value["id"].as_str().expect("no id")
}

async fn publish(app: &App, admin: &User, title: &str, is_main: bool) -> Value {
    let res = app
        .post("/v1/news")
        .user(admin)
        .json(&json!({
            "title": title,
            "content": "Lorem ipsum",
            "is_main": is_main,
            "images": ["https://example.com/1.png"],
        }))
        .send()
        .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    res.json().await
}

mod manage {
    use super::*;

    #[tokio::test]
    async fn author_defaults_to_admin() {
        let app = App::new().await;
        let admin = app.admin().await;

        let news = publish(&app, &admin, "Parade", false).await;

        assert_json_include!(
            actual: news,
            expected: json!({
                "title": "Parade",
                "author": ADMIN_NAME,
                "is_main": false,
                "images": ["https://example.com/1.png"],
            })
        );
    }

    #[tokio::test]
    async fn only_one_main() {
        let app = App::new().await;
        let admin = app.admin().await;

        let first = publish(&app, &admin, "First", true).await;
        let second = publish(&app, &admin, "Second", true).await;

        let res = app.get(&format!("/v1/news/{}", id(&first))).send().await;
        let body: Value = res.json().await;
        assert_eq!(body["is_main"], false);

        let res = app
            .patch(&format!("/v1/news/{}", id(&first)))
            .user(&admin)
            .json(&json!({ "is_main": true }))
            .send()
            .await;
        assert_eq!(res.status(), StatusCode::OK);

        let res = app.get("/v1/news").send().await;
        let list: Vec<Value> = res.json().await;
        let main: Vec<_> = list.iter().filter(|news| news["is_main"] == true).collect();
        assert_eq!(main.len(), 1);
        assert_eq!(main[0]["id"], first["id"]);
        assert_ne!(main[0]["id"], second["id"]);
    }

    #[tokio::test]
    async fn delete() {
        let app = App::new().await;
        let admin = app.admin().await;
        let news = publish(&app, &admin, "Gone soon", false).await;

        let res = app
            .delete(&format!("/v1/news/{}", id(&news)))
            .user(&admin)
            .send()
            .await;
        assert_eq!(res.status(), StatusCode::NO_CONTENT);

        let res = app.get(&format!("/v1/news/{}", id(&news))).send().await;
        assert_error!(res, error::NEWS_NOT_FOUND);
    }

    #[tokio::test]
    async fn cadet_cannot_publish() {
        let app = App::new().await;
        let cadet = app.register_cadet().await;

        let res = app
            .post("/v1/news")
            .user(&cadet)
            .json(&json!({ "title": "Fake", "content": "news" }))
            .send()
            .await;

        assert_error!(res, error::NOT_ENOUGH_PERMISSIONS);
    }
}

mod engagement {
    use super::*;

    #[tokio::test]
    async fn comments_in_order() {
        let app = App::new().await;
        let admin = app.admin().await;
        let cadet = app.register_cadet().await;
        let news = publish(&app, &admin, "Exam results", false).await;

        for (user, content) in [(&cadet, "first!"), (&admin, "well done")] {
            let res = app
                .post(&format!("/v1/news/{}/comments", id(&news)))
                .user(user)
                .json(&json!({ "content": content }))
                .send()
                .await;
            assert_eq!(res.status(), StatusCode::CREATED);
        }

        let res = app
            .get(&format!("/v1/news/{}/comments", id(&news)))
            .send()
            .await;
        let comments: Vec<Value> = res.json().await;

        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0]["content"], "first!");
        assert_eq!(comments[0]["author_name"], cadet.name.as_str());
        assert_eq!(comments[1]["author_name"], ADMIN_NAME);

        let res = app.get(&format!("/v1/news/{}", id(&news))).send().await;
        let body: Value = res.json().await;
        assert_eq!(body["comments_count"], 2);
    }

    #[tokio::test]
    async fn comment_needs_session() {
        let app = App::new().await;
        let admin = app.admin().await;
        let news = publish(&app, &admin, "Quiet", false).await;

        let res = app
            .post(&format!("/v1/news/{}/comments", id(&news)))
            .json(&json!({ "content": "anonymous" }))
            .send()
            .await;

        assert_error!(res, error::COULD_NOT_GET_CLAIMS);
    }

    #[tokio::test]
    async fn comment_on_unknown_news() {
        let app = App::new().await;
        let cadet = app.register_cadet().await;

        let res = app
            .post("/v1/news/00000000-0000-0000-0000-000000000000/comments")
            .user(&cadet)
            .json(&json!({ "content": "hello?" }))
            .send()
            .await;

        assert_error!(res, error::NEWS_NOT_FOUND);
    }

    #[tokio::test]
    async fn blank_comment() {
        let app = App::new().await;
        let admin = app.admin().await;
        let cadet = app.register_cadet().await;
        let news = publish(&app, &admin, "Silence", false).await;

        let res = app
            .post(&format!("/v1/news/{}/comments", id(&news)))
            .user(&cadet)
            .json(&json!({ "content": "  \n\t " }))
            .send()
            .await;

        assert_error!(res, error::JSON_VALIDATE_INVALID);

        let res = app
            .get(&format!("/v1/news/{}/comments", id(&news)))
            .send()
            .await;
        let comments: Vec<Value> = res.json().await;
        assert!(comments.is_empty());
    }

    #[tokio::test]
    async fn comment_is_trimmed() {
        let app = App::new().await;
        let admin = app.admin().await;
        let cadet = app.register_cadet().await;
        let news = publish(&app, &admin, "Spacing", false).await;

        let res = app
            .post(&format!("/v1/news/{}/comments", id(&news)))
            .user(&cadet)
            .json(&json!({ "content": "   nice work  " }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::CREATED);
        let body: Value = res.json().await;
        assert_eq!(body["content"], "nice work");
    }

    #[tokio::test]
    async fn like_toggles() {
        let app = App::new().await;
        let admin = app.admin().await;
        let cadet = app.register_cadet().await;
        let news = publish(&app, &admin, "Likeable", false).await;
        let url = format!("/v1/news/{}/like", id(&news));

        let res = app.post(&url).user(&cadet).send().await;
        let body: Value = res.json().await;
        assert_json_eq!(body, json!({ "liked": true, "count": 1 }));

        let res = app.post(&url).user(&admin).send().await;
        let body: Value = res.json().await;
        assert_json_eq!(body, json!({ "liked": true, "count": 2 }));

        let res = app.post(&url).user(&cadet).send().await;
        let body: Value = res.json().await;
        assert_json_eq!(body, json!({ "liked": false, "count": 1 }));

        let res = app.get("/v1/news").send().await;
        let list: Vec<Value> = res.json().await;
        assert_eq!(list[0]["likes_count"], 1);
    }
}

#[tokio::test]
async fn newest_first() {
    let app = App::new().await;
    let admin = app.admin().await;
    publish(&app, &admin, "Old", false).await;
    publish(&app, &admin, "New", false).await;

    let res = app.get("/v1/news").send().await;
    let list: Vec<Value> = res.json().await;

    let titles: Vec<_> = list.iter().map(|news| news["title"].as_str().unwrap()).collect();
    assert_eq!(titles, ["New", "Old"]);
    assert_eq!(list[0]["likes_count"], 0);
    assert_eq!(list[0]["comments_count"], 0);
}
