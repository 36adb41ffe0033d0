pub use crate::{
    assert_error, enable_logging, request::*, response::*, user::*, uuid, App, ADMIN_EMAIL,
    ADMIN_NAME, ADMIN_PASSWORD,
};
pub use assert_json_diff::{assert_json_eq, assert_json_include};
pub use cadet_rating_backend::error;
pub use http::{header, StatusCode};
pub use serde_json::{json, Value};
