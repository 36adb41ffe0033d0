use crate::{extractors::Session, StateTrait};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use entity::{sessions, users};
use headers::{authorization::Bearer, Authorization, HeaderMapExt};
use sea_orm::EntityTrait;
use tracing::Instrument;

/// Resolves the bearer token to a live session.
///
/// Requests without a usable token pass through anonymously; the extractors
/// and the admin layer decide whether that is acceptable.
pub async fn get_claims<S: StateTrait>(
    State(state): State<S>,
    mut request: Request,
    next: Next,
) -> Response {
    let Some(header) = request.headers().typed_get::<Authorization<Bearer>>() else {
        return next.run(request).await;
    };

    let Ok(claims) = state.jwt().get_claims(header.token()) else {
        return next.run(request).await;
    };

    let found = sessions::Entity::find_live(claims.sid, Utc::now())
        .find_also_related(users::Entity)
        .one(state.db())
        .await;

    let (session, user) = match found {
        Ok(Some((session, Some(user)))) if session.user_id == claims.sub => (session, user),
        Ok(Some(_)) => {
            warn!(
                session_id = claims.sid.to_string(),
                "token does not match its session owner"
            );
            return next.run(request).await;
        }
        Ok(None) => {
            debug!(session_id = claims.sid.to_string(), "session is gone");
            return next.run(request).await;
        }
        Err(err) => return crate::Error::from(err).into_response(),
    };

    let span = info_span!("claims", user_id = user.id.to_string());

    request.extensions_mut().insert(Session {
        id: session.id,
        user_id: user.id,
        name: user.name,
        role: user.role,
        cadet_id: user.cadet_id,
    });

    next.run(request).instrument(span).await
}
