pub mod macro_support {
    pub use tracing::level_filters::LevelFilter;
    pub use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};
}

#[macro_export]
macro_rules! assert_error {
    ($res:expr, $error:expr) => {{
        assert_eq!(Some($res.status()), $error.status());

        let res_json: serde_json::Value = $res.json().await;
        assert_eq!(res_json["code"], $error.code());
    }};
}

#[macro_export]
macro_rules! enable_logging {
    ($level:ident) => {{
        use $crate::macro_support::{
            EnvFilter, Layer, LevelFilter, SubscriberExt, SubscriberInitExt,
        };

        let env_filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::$level.into())
            .from_env_lossy();

        let _ = ::tracing_subscriber::registry()
            .with(
                ::tracing_subscriber::fmt::layer()
                    .with_test_writer()
                    .with_line_number(true)
                    .with_filter(env_filter),
            )
            .try_init();
    }};
}
