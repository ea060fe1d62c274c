use axum::{
    body::{Body, Bytes, HttpBody},
    extract::Request,
    http::{HeaderValue, Method, StatusCode, header::CONTENT_TYPE},
    response::Response,
};
use futures::future::BoxFuture;
use std::{
    convert::Infallible,
    path::Path,
    task::{Context, Poll},
};
use tower::{BoxError, Service, ServiceExt};
use tower_http::services::ServeFile;
use tracing::debug;

/// Single-page-app fallback around a static file service.
///
/// Responses from `inner` are forwarded untouched unless their status is
/// `404 Not Found`. In that case the inner body is dropped without being
/// polled and the index document is served instead with `Content-Type:
/// text/html`, letting client-side routing take over.
///
/// The static tree answers every method: anything other than `GET`/`HEAD` is
/// looked up as a `GET`.
#[derive(Debug, Clone)]
pub struct SpaFallback<S> {
    inner: S,
    index: ServeFile,
}

impl<S> SpaFallback<S> {
    pub fn new(inner: S, index_path: impl AsRef<Path>) -> Self {
        Self {
            inner,
            index: ServeFile::new(index_path),
        }
    }
}

impl<S, ResBody> Service<Request> for SpaFallback<S>
where
    S: Service<Request, Response = Response<ResBody>, Error = Infallible> + Clone + Send + 'static,
    S::Future: Send + 'static,
    ResBody: HttpBody<Data = Bytes> + Send + 'static,
    ResBody::Error: Into<BoxError>,
{
    type Response = Response;
    type Error = Infallible;
    type Future = BoxFuture<'static, Result<Response, Infallible>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, mut req: Request) -> Self::Future {
        if !matches!(*req.method(), Method::GET | Method::HEAD) {
            *req.method_mut() = Method::GET;
        }
        let index_req = replay_head(&req);
        let inner = self.inner.clone();
        let index = self.index.clone();

        Box::pin(async move {
            let resp = match inner.oneshot(req).await {
                Ok(resp) => resp,
                Err(never) => match never {},
            };
            if resp.status() != StatusCode::NOT_FOUND {
                return Ok(resp.map(Body::new));
            }

            debug!(path = %index_req.uri().path(), "static lookup missed, serving SPA index");
            drop(resp);

            let mut index_resp = match index.oneshot(index_req).await {
                Ok(resp) => resp,
                Err(never) => match never {},
            };
            index_resp
                .headers_mut()
                .insert(CONTENT_TYPE, HeaderValue::from_static("text/html"));
            Ok(index_resp.map(Body::new))
        })
    }
}

/// Copies the request line and headers so the index lookup honours the same
/// method and conditional/range headers as the original request.
fn replay_head(req: &Request) -> Request {
    let mut head = Request::new(Body::empty());
    *head.method_mut() = req.method().clone();
    *head.uri_mut() = req.uri().clone();
    *head.version_mut() = req.version();
    *head.headers_mut() = req.headers().clone();
    head
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::to_bytes, response::IntoResponse};
    use std::time::{SystemTime, UNIX_EPOCH};
    use tower::service_fn;

    fn temp_index(contents: &str) -> std::path::PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before UNIX_EPOCH")
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!("pantry-spa-unit-{}-{}.html", std::process::id(), nanos));
        std::fs::write(&path, contents).expect("failed to write index file");
        path
    }

    #[tokio::test]
    async fn not_found_is_replaced_by_index_document() {
        let index = temp_index("<html>app</html>");
        let static_files = service_fn(|_req: Request| async {
            Ok::<_, Infallible>((StatusCode::NOT_FOUND, "404 page not found").into_response())
        });
        let svc = SpaFallback::new(static_files, &index);

        let resp = svc
            .oneshot(axum::http::Request::get("/some/client/route").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()[CONTENT_TYPE], "text/html");
        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"<html>app</html>");

        let _ = std::fs::remove_file(index);
    }

    #[tokio::test]
    async fn other_statuses_pass_through_unmodified() {
        let index = temp_index("<html>app</html>");
        let static_files = service_fn(|_req: Request| async {
            Ok::<_, Infallible>((StatusCode::FORBIDDEN, "nope").into_response())
        });
        let svc = SpaFallback::new(static_files, &index);

        let resp = svc
            .oneshot(axum::http::Request::get("/secret").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"nope");

        let _ = std::fs::remove_file(index);
    }

    #[tokio::test]
    async fn non_get_methods_are_looked_up_as_get() {
        let index = temp_index("<html>app</html>");
        let static_files = service_fn(|req: Request| async move {
            let status = if req.method() == Method::GET {
                StatusCode::NOT_FOUND
            } else {
                StatusCode::METHOD_NOT_ALLOWED
            };
            Ok::<_, Infallible>(status.into_response())
        });
        let svc = SpaFallback::new(static_files, &index);

        let resp = svc
            .oneshot(
                axum::http::Request::post("/some/client/route")
                    .body(Body::from("ignored"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()[CONTENT_TYPE], "text/html");
        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"<html>app</html>");

        let _ = std::fs::remove_file(index);
    }
}
