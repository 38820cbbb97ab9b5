//! Generated OpenAPI document.

use crate::{
    error::{ErrorResponse, FieldError},
    routes::{health, people, twitter},
};
use chirp_domain::{HairColor, Location, Person, PersonOut, Tweet, User, UserLogin, UserRegister};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Path of the Swagger UI
pub const DOCS_PATH: &str = "/docs";

/// Path of the OpenAPI JSON document
pub const OPENAPI_PATH: &str = "/openapi.json";

/// OpenAPI description of every route
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        people::home,
        people::create_person,
        people::show_person,
        people::show_person_by_id,
        people::update_person,
        people::login,
        people::contact,
        people::post_image,
        twitter::home,
        twitter::users::signup,
        twitter::users::list_users,
        twitter::users::login,
        twitter::users::show_user,
        twitter::users::delete_user,
        twitter::users::update_user,
        twitter::tweets::post_tweet,
        twitter::tweets::show_tweet,
        twitter::tweets::delete_tweet,
        twitter::tweets::update_tweet,
    ),
    components(
        schemas(
            HairColor,
            Location,
            Person,
            PersonOut,
            User,
            UserLogin,
            UserRegister,
            Tweet,
            people::HomeMessage,
            people::PersonUpdate,
            people::PersonLocation,
            people::PersonUpdated,
            people::PersonWithLocation,
            people::LoginForm,
            people::LoginOut,
            people::ContactForm,
            people::ImageUpload,
            people::ImageInfo,
            twitter::TwitterStatus,
            health::HealthResponse,
            ErrorResponse,
            FieldError,
        )
    ),
    info(
        title = "Chirp API",
        version = "0.1.0",
        description = "Typed HTTP endpoints with field validation",
        license(name = "MIT"),
    ),
    tags(
        (name = "Home", description = "Application greetings"),
        (name = "Persons", description = "Person models and validation"),
        (name = "Contact", description = "Contact form"),
        (name = "Upload", description = "File upload"),
        (name = "Users", description = "Twitter users"),
        (name = "Tweets", description = "Twitter tweets"),
        (name = "health", description = "Health check endpoints"),
    )
)]
pub struct ApiDoc;

/// Swagger UI serving the generated document
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new(DOCS_PATH).url(OPENAPI_PATH, ApiDoc::openapi())
}
