use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use fraudwatch_core::session::MarkerStore;

/// Session markers kept in the client's cookies.
#[derive(Debug, Default, Clone)]
pub struct CookieMarkers {
    jar: CookieJar,
}

impl CookieMarkers {
    pub fn new(jar: CookieJar) -> Self {
        Self { jar }
    }

    /// The jar, with any additions or removals, ready to go back as `Set-Cookie`.
    pub fn into_jar(self) -> CookieJar {
        self.jar
    }
}

impl MarkerStore for CookieMarkers {
    fn get(&self, key: &str) -> Option<String> {
        self.jar.get(key).map(|cookie| cookie.value().to_string())
    }

    fn set(&mut self, key: &str, value: &str) {
        let cookie = Cookie::build((key.to_string(), value.to_string()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .permanent();
        self.jar = std::mem::take(&mut self.jar).add(cookie);
    }

    fn remove(&mut self, key: &str) {
        self.jar = std::mem::take(&mut self.jar).remove(Cookie::build(key.to_string()).path("/"));
    }
}
