//! Shared fixtures for router-level tests

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use skillmatch_server::models::Skill;
use skillmatch_server::{build_router, AppState, JwtService, MemoryStore};

pub const SECRET: &str = "test-secret";
pub const ISSUER: &str = "skillmatch";

pub struct TestApp {
    pub store: Arc<MemoryStore>,
    pub jwt: JwtService,
    pub router: Router,
}

impl TestApp {
    /// Router over an empty store.
    pub fn new() -> Self {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let store = Arc::new(MemoryStore::new());
        let jwt = JwtService::new(SECRET, ISSUER);
        let router = build_router(AppState::new(store.clone(), jwt.clone()));
        Self { store, jwt, router }
    }

    /// Router over a store holding a plumbing skill (id 7), an electrical
    /// skill (id 8), and two profiles (1 in 10001, 2 in 90210).
    pub fn seeded() -> Self {
        let app = Self::new();
        app.store.add_skill(skill(7, "Plumbing"));
        app.store.add_skill(skill(8, "Electrical"));
        app.store.add_profile(1, Some("10001"));
        app.store.add_profile(2, Some("90210"));
        app
    }

    pub fn token_for(&self, user_id: i32) -> String {
        self.jwt
            .issue(user_id, &format!("user{user_id}"), 300)
            .expect("token issue")
    }

    pub async fn send(&self, req: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = self.router.clone().oneshot(req).await.expect("router error");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body read");
        (status, bytes.to_vec())
    }

    /// Authenticated request as `user_id`.
    pub async fn call(
        &self,
        user_id: i32,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Vec<u8>) {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.token_for(user_id)));

        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        self.send(builder.body(body).expect("request build")).await
    }

    pub async fn call_json(
        &self,
        user_id: i32,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let (status, bytes) = self.call(user_id, method, uri, body).await;
        (status, serde_json::from_slice(&bytes).expect("json body"))
    }
}

pub fn skill(id: i32, description: &str) -> Skill {
    Skill {
        id,
        skill_description: description.to_owned(),
        skill_img_url: Some(format!("https://img.example/{id}.png")),
        skill_type: Some("TRADE".to_owned()),
    }
}
