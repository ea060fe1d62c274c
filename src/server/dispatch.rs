use axum::{Router, extract::Request, response::Response};
use futures::future::BoxFuture;
use std::{
    convert::Infallible,
    task::{Context, Poll},
};
use tower::{Service, ServiceExt};

/// Any request path containing this segment belongs to the JSON API.
pub const API_SEGMENT: &str = "/api";

pub fn is_api_path(path: &str) -> bool {
    path.contains(API_SEGMENT)
}

/// Single entry point splitting traffic between the API router and the
/// static/SPA tree.
///
/// API paths are handed over unconditionally, so an unknown `/api/...` path
/// gets the API's own 404 and never the SPA document.
#[derive(Clone)]
pub struct Dispatcher<Spa> {
    api: Router,
    spa: Spa,
}

impl<Spa> Dispatcher<Spa> {
    pub fn new(api: Router, spa: Spa) -> Self {
        Self { api, spa }
    }
}

impl<Spa> Service<Request> for Dispatcher<Spa>
where
    Spa: Service<Request, Response = Response, Error = Infallible> + Clone + Send + 'static,
    Spa::Future: Send + 'static,
{
    type Response = Response;
    type Error = Infallible;
    type Future = BoxFuture<'static, Result<Response, Infallible>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request) -> Self::Future {
        if is_api_path(req.uri().path()) {
            Box::pin(self.api.clone().oneshot(req))
        } else {
            Box::pin(self.spa.clone().oneshot(req))
        }
    }
}
