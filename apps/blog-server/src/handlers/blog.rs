//! Blog handlers - translate between wire DTOs and the domain model and
//! delegate everything else to [`BlogService`](blog_core::BlogService).

use actix_web::{HttpRequest, HttpResponse, web};

use blog_core::domain::{Blog, BlogInput};
use blog_shared::{BlogRequest, BlogResponse};

use crate::middleware::error::{ApiResult, AppError, ResultExt};
use crate::state::AppState;

/// GET /blogs
pub async fn list_blogs(req: HttpRequest, state: web::Data<AppState>) -> ApiResult<HttpResponse> {
    let blogs = state.blogs.list_blogs().await.at(&req)?;
    tracing::debug!(count = blogs.len(), "Listing blogs");

    let body: Vec<BlogResponse> = blogs.into_iter().map(to_response).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /blogs/{id}
pub async fn get_blog(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let id = blog_id(path.into_inner()).at(&req)?;
    let blog = state.blogs.get_blog(id).await.at(&req)?;

    Ok(HttpResponse::Ok().json(to_response(blog)))
}

/// POST /blogs
pub async fn create_blog(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<BlogRequest>,
) -> ApiResult<HttpResponse> {
    let input = to_input(body.into_inner()).at(&req)?;
    let blog = state.blogs.create_blog(input).await.at(&req)?;
    tracing::info!(blog_id = blog.id, "Blog created");

    Ok(HttpResponse::Ok().json(to_response(blog)))
}

/// PUT /blogs/{id}
pub async fn update_blog(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<BlogRequest>,
) -> ApiResult<HttpResponse> {
    let id = blog_id(path.into_inner()).at(&req)?;
    let input = to_input(body.into_inner()).at(&req)?;
    let blog = state.blogs.update_blog(id, input).await.at(&req)?;
    tracing::info!(blog_id = blog.id, "Blog updated");

    Ok(HttpResponse::Ok().json(to_response(blog)))
}

/// DELETE /blogs/{id}
pub async fn delete_blog(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let id = blog_id(path.into_inner()).at(&req)?;
    state.blogs.delete_blog(id).await.at(&req)?;
    tracing::info!(blog_id = id, "Blog deleted");

    Ok(HttpResponse::Ok().finish())
}

/// Ids are assigned from 1 upwards; zero and negatives are malformed input.
fn blog_id(raw: i64) -> Result<i64, AppError> {
    if raw > 0 {
        Ok(raw)
    } else {
        Err(AppError::validation(format!(
            "blog id must be a positive integer, got {raw}"
        )))
    }
}

fn to_input(body: BlogRequest) -> Result<BlogInput, AppError> {
    body.validate().map_err(AppError::Validation)?;

    let (Some(title), Some(content)) = (body.title, body.content) else {
        return Err(AppError::validation("title and content are required"));
    };
    Ok(BlogInput::new(title, content))
}

fn to_response(blog: Blog) -> BlogResponse {
    BlogResponse {
        id: blog.id,
        title: blog.title,
        content: blog.content,
        created_date: blog.created_at.timestamp_millis(),
        last_modified_date: blog.updated_at.timestamp_millis(),
    }
}
