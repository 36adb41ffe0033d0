use sea_orm::{sea_query::LikeExpr, ActiveValue, Value};

/// `Some` becomes an update of the column, `None` leaves it untouched.
pub fn set_option<T>(value: Option<T>) -> ActiveValue<T>
where
    T: Into<Value>,
{
    match value {
        Some(value) => ActiveValue::Set(value),
        None => ActiveValue::NotSet,
    }
}

/// `%needle%` with the LIKE wildcards of the needle escaped.
pub fn contains_pattern(needle: &str) -> LikeExpr {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');

    LikeExpr::new(pattern).escape('\\')
}
