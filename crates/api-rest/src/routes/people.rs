//! People application endpoints.
//!
//! Echo handlers over the person models, a constant-list lookup, two
//! form endpoints and an image upload. Nothing here is persisted.

use crate::{
    error::{ApiError, ApiResult, ErrorResponse},
    extractors::{ValidatedForm, ValidatedJson, ValidatedPath, ValidatedQuery},
    responses::Created,
    state::AppState,
};
use axum::{
    extract::{multipart::MultipartRejection, Multipart},
    routing::{get, post, put},
    Json, Router,
};
use axum_extra::{extract::CookieJar, headers::UserAgent, TypedHeader};
use chirp_domain::person::{self, Location, Person, PersonOut};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationErrors};

/// Message returned when a person id is not registered
pub const PERSON_NOT_FOUND: &str = "¡This person doesn't exist!";

/// Multipart field carrying the uploaded image
pub const IMAGE_FIELD: &str = "image";

/// Greeting served at the root
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HomeMessage {
    /// Always `"World"`
    #[serde(rename = "Hello")]
    #[schema(example = "World")]
    pub hello: String,
}

/// Optional filters of the person detail endpoint
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PersonQuery {
    /// This is the person name. It's between 1 and 50 characters.
    #[validate(length(min = 1, max = 50))]
    #[param(min_length = 1, max_length = 50, example = "Rocío")]
    pub name: Option<String>,

    /// This is the person age.
    #[validate(range(min = 0, max = 150))]
    #[param(minimum = 0, maximum = 150, example = 25)]
    pub age: Option<i32>,
}

/// Person id taken from the path
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Path)]
pub struct PersonIdPath {
    /// This is the person id. It's greater than or equal to 1.
    #[validate(range(min = 1))]
    #[param(minimum = 1, example = 123)]
    pub person_id: i64,
}

/// Body of the person update endpoint
///
/// Either a bare person, or a person wrapped together with a location.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum PersonUpdate {
    /// `{"person": ..., "location": ...}`
    WithLocation(PersonLocation),
    /// The person fields at the top level
    Person(Person),
}

impl Validate for PersonUpdate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        match self {
            Self::WithLocation(update) => update.validate(),
            Self::Person(person) => person.validate(),
        }
    }
}

/// A person together with where they live
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct PersonLocation {
    /// Person being updated
    #[validate(nested)]
    pub person: Person,
    /// Location merged into the answer
    #[validate(nested)]
    pub location: Location,
}

/// Answer of the person update endpoint, mirroring the body's shape
#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum PersonUpdated {
    /// Person fields merged with the location fields
    WithLocation(PersonWithLocation),
    /// Person echoed without the password
    Person(PersonOut),
}

/// Updated person merged with its location
#[derive(Debug, Serialize, ToSchema)]
pub struct PersonWithLocation {
    /// Person without the password
    #[serde(flatten)]
    pub person: PersonOut,
    /// Where the person lives
    #[serde(flatten)]
    pub location: Location,
}

/// Login form fields
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginForm {
    /// Login name, at most 20 characters
    #[validate(length(max = 20))]
    #[schema(max_length = 20, example = "facundo")]
    pub username: String,

    /// Password, never echoed
    #[schema(format = Password)]
    pub password: String,
}

/// Login acknowledgement
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginOut {
    /// Login name, at most 20 characters
    #[schema(example = "facundo")]
    pub username: String,

    /// Acknowledgement text
    #[schema(example = "Login Successfully!")]
    pub message: String,
}

impl LoginOut {
    /// Acknowledge a login by `username`
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            message: "Login Successfully!".to_string(),
        }
    }
}

/// Contact form fields
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ContactForm {
    /// Sender given name
    #[validate(length(min = 1, max = 20))]
    #[schema(min_length = 1, max_length = 20, example = "Facundo")]
    pub first_name: String,

    /// Sender family name
    #[validate(length(min = 1, max = 20))]
    #[schema(min_length = 1, max_length = 20, example = "García")]
    pub last_name: String,

    /// Sender email address
    #[validate(email)]
    #[schema(example = "facundo@example.com")]
    pub email: String,

    /// Message body
    #[validate(length(min = 20))]
    #[schema(min_length = 20)]
    pub message: String,
}

/// Multipart body of the image upload endpoint
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct ImageUpload {
    #[schema(value_type = String, format = Binary)]
    image: Vec<u8>,
}

/// Summary of an uploaded image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ImageInfo {
    /// File name declared by the client
    #[serde(rename = "Filename")]
    #[schema(example = "cat.png")]
    pub filename: String,

    /// Content type declared by the client
    #[serde(rename = "Format")]
    #[schema(example = "image/png")]
    pub format: String,

    /// Size in kilobytes, rounded to two decimals with ties to even
    #[serde(rename = "Size(kb)")]
    #[schema(example = 12.5)]
    pub size_kb: f64,
}

impl ImageInfo {
    /// Describe an upload of `len` bytes
    pub fn new(filename: impl Into<String>, format: impl Into<String>, len: usize) -> Self {
        Self {
            filename: filename.into(),
            format: format.into(),
            size_kb: (len as f64 / 1024.0 * 100.0).round_ties_even() / 100.0,
        }
    }
}

/// People routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/person/new", post(create_person))
        .route("/person/detail", get(show_person))
        .route("/person/detail/:person_id", get(show_person_by_id))
        .route("/person/:person_id", put(update_person))
        .route("/login", post(login))
        .route("/contact", post(contact))
        .route("/post-image", post(post_image))
}

/// Home
#[utoipa::path(
    get,
    path = "/",
    tag = "Home",
    responses(
        (status = 200, description = "Greeting", body = HomeMessage)
    )
)]
pub async fn home() -> Json<HomeMessage> {
    Json(HomeMessage {
        hello: "World".to_string(),
    })
}

/// Create a person
///
/// Echoes the person back without the password.
#[utoipa::path(
    post,
    path = "/person/new",
    tag = "Persons",
    request_body = Person,
    responses(
        (status = 201, description = "Person created", body = PersonOut),
        (status = 400, description = "Malformed JSON", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
    )
)]
pub async fn create_person(
    ValidatedJson(person): ValidatedJson<Person>,
) -> Created<PersonOut> {
    Created(PersonOut::from(person))
}

/// Show a person
///
/// Answers `{name: age}`. A missing name is reported under the key `"null"`.
#[utoipa::path(
    get,
    path = "/person/detail",
    tag = "Persons",
    params(PersonQuery),
    responses(
        (status = 200, description = "Name mapped to age", body = HashMap<String, Option<i32>>),
        (status = 422, description = "Validation failed", body = ErrorResponse),
    )
)]
pub async fn show_person(
    ValidatedQuery(query): ValidatedQuery<PersonQuery>,
) -> Json<HashMap<String, Option<i32>>> {
    let name = query.name.unwrap_or_else(|| "null".to_string());
    Json(HashMap::from([(name, query.age)]))
}

/// Check that a person exists
#[utoipa::path(
    get,
    path = "/person/detail/{person_id}",
    tag = "Persons",
    params(PersonIdPath),
    responses(
        (status = 200, description = "Person exists", body = HashMap<String, String>),
        (status = 404, description = "Person not registered", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
    )
)]
pub async fn show_person_by_id(
    ValidatedPath(path): ValidatedPath<PersonIdPath>,
) -> ApiResult<Json<HashMap<String, String>>> {
    if !person::is_registered(path.person_id) {
        debug!(person_id = path.person_id, "Person not registered");
        return Err(ApiError::NotFound(PERSON_NOT_FOUND.to_string()));
    }

    Ok(Json(HashMap::from([(
        path.person_id.to_string(),
        "It exists!".to_string(),
    )])))
}

/// Update a person
///
/// Echoes the person without the password. When a location is sent along,
/// its fields are merged into the answer. Nothing is stored.
#[utoipa::path(
    put,
    path = "/person/{person_id}",
    tag = "Persons",
    params(PersonIdPath),
    request_body = PersonUpdate,
    responses(
        (status = 200, description = "Updated person", body = PersonUpdated),
        (status = 422, description = "Validation failed", body = ErrorResponse),
    )
)]
pub async fn update_person(
    ValidatedPath(_path): ValidatedPath<PersonIdPath>,
    ValidatedJson(update): ValidatedJson<PersonUpdate>,
) -> Json<PersonUpdated> {
    Json(match update {
        PersonUpdate::WithLocation(PersonLocation { person, location }) => {
            PersonUpdated::WithLocation(PersonWithLocation {
                person: PersonOut::from(person),
                location,
            })
        }
        PersonUpdate::Person(person) => PersonUpdated::Person(PersonOut::from(person)),
    })
}

/// Log in
#[utoipa::path(
    post,
    path = "/login",
    tag = "Persons",
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Login acknowledged", body = LoginOut),
        (status = 422, description = "Validation failed", body = ErrorResponse),
    )
)]
pub async fn login(ValidatedForm(form): ValidatedForm<LoginForm>) -> Json<LoginOut> {
    Json(LoginOut::new(form.username))
}

/// Contact
///
/// Returns the caller's user agent, or `null` when none was sent.
#[utoipa::path(
    post,
    path = "/contact",
    tag = "Contact",
    request_body(content = ContactForm, content_type = "application/x-www-form-urlencoded"),
    params(
        ("User-Agent" = Option<String>, Header, description = "Client user agent"),
        ("ads" = Option<String>, Cookie, description = "Advertising cookie"),
    ),
    responses(
        (status = 200, description = "User agent", body = Option<String>),
        (status = 422, description = "Validation failed", body = ErrorResponse),
    )
)]
pub async fn contact(
    user_agent: Option<TypedHeader<UserAgent>>,
    jar: CookieJar,
    ValidatedForm(form): ValidatedForm<ContactForm>,
) -> Json<Option<String>> {
    let ads = jar.get("ads").map(|cookie| cookie.value().to_string());
    debug!(email = %form.email, ads = ?ads, "Contact message received");

    Json(user_agent.map(|TypedHeader(agent)| agent.as_str().to_string()))
}

/// Upload an image
#[utoipa::path(
    post,
    path = "/post-image",
    tag = "Upload",
    request_body(content = ImageUpload, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Image summary", body = ImageInfo),
        (status = 400, description = "Malformed multipart body", body = ErrorResponse),
        (status = 422, description = "Image field missing", body = ErrorResponse),
    )
)]
pub async fn post_image(
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<Json<ImageInfo>> {
    let mut multipart = multipart.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(e.to_string()))?
    {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let format = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;

        let info = ImageInfo::new(filename, format, data.len());
        info!(filename = %info.filename, bytes = data.len(), "Image received");
        return Ok(Json(info));
    }

    Err(ApiError::InvalidInput(format!(
        "missing multipart field `{IMAGE_FIELD}`"
    )))
}
