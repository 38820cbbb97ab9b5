//! Validated URL-encoded form extractor.

use crate::error::ApiError;
use axum::{
    async_trait,
    extract::{rejection::FormRejection, FromRequest, Request},
    Form,
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// Form extractor that validates the fields using the `validator` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedForm<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedForm<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(value) = Form::<T>::from_request(req, state)
            .await
            .map_err(form_rejection)?;

        value.validate()?;

        Ok(ValidatedForm(value))
    }
}

fn form_rejection(rejection: FormRejection) -> ApiError {
    match rejection {
        FormRejection::FailedToDeserializeForm(e) => ApiError::InvalidInput(e.body_text()),
        FormRejection::FailedToDeserializeFormBody(e) => ApiError::InvalidInput(e.body_text()),
        other => ApiError::BadRequest(other.body_text()),
    }
}
