//! HTTP handlers and route configuration.

mod blog;


use actix_web::{HttpRequest, HttpResponse, web};

use crate::middleware::error::{
    ApiError, ApiResult, AppError, json_error_handler, path_error_handler,
};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .service(
            web::resource("/blogs")
                .route(web::get().to(blog::list_blogs))
                .route(web::post().to(blog::create_blog))
                .default_service(web::to(method_not_supported)),
        )
        .service(
            web::resource("/blogs/{id}")
                .route(web::get().to(blog::get_blog))
                .route(web::put().to(blog::update_blog))
                .route(web::delete().to(blog::delete_blog))
                .default_service(web::to(method_not_supported)),
        )
        .default_service(web::to(route_not_found));
}

/// Known path, unsupported method: a client error like any other bad input.
async fn method_not_supported(req: HttpRequest) -> ApiResult<HttpResponse> {
    Err(ApiError::new(
        AppError::validation(format!("Request method '{}' not supported", req.method())),
        req.path(),
    ))
}

async fn route_not_found(req: HttpRequest) -> ApiResult<HttpResponse> {
    Err(ApiError::new(
        AppError::NotFound(format!(
            "No handler found for {} {}",
            req.method(),
            req.path()
        )),
        req.path(),
    ))
}
