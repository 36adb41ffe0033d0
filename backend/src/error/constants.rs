use super::const_error;

const_error! {
    #[error("E000", "internal server error")]
    #[status(INTERNAL_SERVER_ERROR)]
    const INTERNAL;
}

const_error! {
    #[error("E001", "missing fields")]
    #[status(UNPROCESSABLE_ENTITY)]
    const JSON_MISSING_FIELDS;
}

const_error! {
    #[error("E002", "syntax error")]
    #[status(BAD_REQUEST)]
    const JSON_SYNTAX_ERROR;
}

const_error! {
    #[error("E003", "missing or wrong content-type")]
    #[status(BAD_REQUEST)]
    const JSON_CONTENT_TYPE;
}

const_error! {
    #[error("E004", "invalid data")]
    #[status(BAD_REQUEST)]
    const JSON_VALIDATE_INVALID;
}

const_error! {
    #[error("E005", "failed to deserialize json")]
    #[status(INTERNAL_SERVER_ERROR)]
    const JSON_DESERIALIZE;
}

const_error! {
    #[error("E006", "database error")]
    #[status(INTERNAL_SERVER_ERROR)]
    const DATABASE_ERROR;
}

const_error! {
    #[error("E007", "invalid query string")]
    #[status(BAD_REQUEST)]
    const INVALID_QUERY;
}

const_error! {
    #[error("E008", "could not get claims")]
    #[status(UNAUTHORIZED)]
    const COULD_NOT_GET_CLAIMS;
}

const_error! {
    #[error("E009", "invalid token")]
    const JWT_INVALID_TOKEN;
}

const_error! {
    #[error("E010", "not enough permissions")]
    #[status(FORBIDDEN)]
    const NOT_ENOUGH_PERMISSIONS;
}

const_error! {
    #[error("E011", "invalid email or password")]
    #[status(UNAUTHORIZED)]
    const INVALID_CREDENTIALS;
}

const_error! {
    #[error("E012", "account is not linked to a cadet")]
    #[status(FORBIDDEN)]
    const ACCOUNT_NOT_LINKED;
}

const_error! {
    #[error("E013", "user is not a cadet")]
    #[status(FORBIDDEN)]
    const NOT_A_CADET;
}

const_error! {
    #[error("E014", "user already exists")]
    #[status(CONFLICT)]
    const USER_ALREADY_EXISTS;
}

const_error! {
    #[error("E015", "cadet is already linked to an account")]
    #[status(CONFLICT)]
    const CADET_ALREADY_LINKED;
}

const_error! {
    #[error("E016", "cadet not found")]
    #[status(NOT_FOUND)]
    const CADET_NOT_FOUND;
}

const_error! {
    #[error("E017", "achievement not found")]
    #[status(NOT_FOUND)]
    const ACHIEVEMENT_NOT_FOUND;
}

const_error! {
    #[error("E018", "achievement already awarded")]
    #[status(CONFLICT)]
    const ACHIEVEMENT_ALREADY_AWARDED;
}

const_error! {
    #[error("E019", "news not found")]
    #[status(NOT_FOUND)]
    const NEWS_NOT_FOUND;
}

const_error! {
    #[error("E020", "task not found")]
    #[status(NOT_FOUND)]
    const TASK_NOT_FOUND;
}

const_error! {
    #[error("E021", "task is not open")]
    #[status(BAD_REQUEST)]
    const TASK_NOT_ACTIVE;
}

const_error! {
    #[error("E022", "submission not found")]
    #[status(NOT_FOUND)]
    const SUBMISSION_NOT_FOUND;
}

const_error! {
    #[error("E023", "task already taken")]
    #[status(CONFLICT)]
    const SUBMISSION_ALREADY_EXISTS;
}

const_error! {
    #[error("E024", "submission is in the wrong state")]
    #[status(CONFLICT)]
    const INVALID_SUBMISSION_STATE;
}

const_error! {
    #[error("E025", "score out of range")]
    #[status(UNPROCESSABLE_ENTITY)]
    const SCORE_OUT_OF_RANGE;
}
