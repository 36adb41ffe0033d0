use crate::{error, Error};
use axum::{
    extract::{FromRequestParts, OptionalFromRequestParts},
    http::request::Parts,
};
use entity::sea_orm_active_enums::Role;
use std::{convert::Infallible, ops::Deref};
use uuid::Uuid;

/// The signed-in identity of the current request.
///
/// Put into the request extensions by the claims middleware once the
/// token's session row has been found alive.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub role: Role,
    pub cadet_id: Option<Uuid>,
}

impl Session {
    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Session>()
            .cloned()
            .ok_or(error::COULD_NOT_GET_CLAIMS)
    }
}

/// Anonymous requests extract as `None`.
impl<S> OptionalFromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        Ok(parts.extensions.get::<Session>().cloned())
    }
}

/// Cadet id of the signed-in user; rejects sessions without a linked cadet.
pub struct CadetID(pub Uuid);

impl Deref for CadetID {
    type Target = Uuid;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequestParts<S> for CadetID
where
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = <Session as FromRequestParts<S>>::from_request_parts(parts, state).await?;

        session.cadet_id.map(CadetID).ok_or(error::NOT_A_CADET)
    }
}
