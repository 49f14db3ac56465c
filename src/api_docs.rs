use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(api::recommend::recommend, api::health::health_check),
    components(schemas(
        api::recommend::RecommendRequest,
        api::recommend::RecommendResponse,
        api::error::ErrorResponse,
    )),
    tags(
        (name = "bibliorelay", description = "Book recommendation relay")
    )
)]
pub struct ApiDoc;
