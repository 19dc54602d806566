use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpMessage,
    error::{ErrorUnauthorized, ErrorForbidden},
};
use futures_util::future::LocalBoxFuture;
use std::future::{ready, Ready};

use crate::auth::jwt::Claims;
use crate::middleware::auth::validate_jwt_from_request;
use crate::models::user::{UserRole, UserStatus};

/// Only active admins may manage scoring configuration.
pub fn authorize_admin(claims: &Claims) -> Result<(), Error> {
    if claims.status != UserStatus::Active {
        tracing::warn!("Inactive user attempted admin access: {}", claims.username);
        return Err(ErrorUnauthorized("Account is not active"));
    }

    if claims.role != UserRole::Admin {
        tracing::warn!("Non-admin user attempted admin access: {} (role: {:?})", claims.username, claims.role);
        return Err(ErrorForbidden("Insufficient privileges"));
    }

    Ok(())
}

pub struct AdminMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AdminMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = AdminMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AdminMiddlewareService { service }))
    }
}

pub struct AdminMiddlewareService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for AdminMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let claims = match validate_jwt_from_request(&req).and_then(|claims| {
            authorize_admin(&claims)?;
            Ok(claims)
        }) {
            Ok(claims) => claims,
            Err(e) => return Box::pin(async move { Err(e) }),
        };

        req.extensions_mut().insert(claims);

        let fut = self.service.call(req);
        Box::pin(async move { fut.await })
    }
}
