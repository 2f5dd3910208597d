//
//  antarctica-cli
//  api/endpoint.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! URL templates for the REST surface.
//!
//! | Operation | Path |
//! |-----------|------|
//! | login | `/api/login` |
//! | list, create | `/api/user/{user_id}/{prefix}s/{token}` |
//! | get, update, delete | `/api/user/{user_id}/{prefix}/{id}/{token}` |
//! | sub-resource | `/api/user/{user_id}/{prefix}/{id}/{action}/{token}` |
//!
//! Segments are appended with [`Url::path_segments_mut`], so ids and tokens
//! are percent-encoded and a base URL with its own path prefix keeps it.

use url::Url;

use crate::api::transport::Target;
use crate::auth::Session;

/// Appends `segments` to the path of `base`.
fn join(base: &Url, segments: &[&str]) -> Url {
    let mut url = base.clone();
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}

/// The login endpoint; needs no session.
pub fn login(base: &Url) -> Target {
    Target::public(join(base, &["api", "login"]))
}

/// Authenticated URL templates for one session.
#[derive(Debug, Clone)]
pub struct Endpoint {
    base: Url,
    session: Session,
}

impl Endpoint {
    pub fn new(base: Url, session: Session) -> Self {
        Self { base, session }
    }

    fn target(&self, segments: &[&str]) -> Target {
        let user_id = self.session.user_id.to_string();
        let mut path = vec!["api", "user", user_id.as_str()];
        path.extend_from_slice(segments);

        // the token is the last segment; the log label carries a mask instead
        let mut masked = path.clone();
        masked.push("***");
        path.push(&self.session.access_token);

        Target::with_label(join(&self.base, &path), join(&self.base, &masked).to_string())
    }

    /// `/api/user/{user_id}/{prefix}s/{token}`
    pub fn collection(&self, prefix: &str) -> Target {
        let plural = format!("{prefix}s");
        self.target(&[&plural])
    }

    /// `/api/user/{user_id}/{prefix}/{id}/{token}`
    pub fn item(&self, prefix: &str, id: i64) -> Target {
        let id = id.to_string();
        self.target(&[prefix, &id])
    }

    /// `/api/user/{user_id}/{prefix}/{id}/{action}/{token}`
    pub fn item_action(&self, prefix: &str, id: i64, action: &str) -> Target {
        let id = id.to_string();
        self.target(&[prefix, &id, action])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint(base: &str) -> Endpoint {
        Endpoint::new(Url::parse(base).unwrap(), Session::new(7, "abc"))
    }

    #[test]
    fn test_login_url() {
        let base = Url::parse("http://127.0.0.1:3000").unwrap();
        assert_eq!(login(&base).url.as_str(), "http://127.0.0.1:3000/api/login");
    }

    #[test]
    fn test_collection_url() {
        let target = endpoint("https://example.org").collection("repo");
        assert_eq!(target.url.as_str(), "https://example.org/api/user/7/repos/abc");
        assert_eq!(target.to_string(), "https://example.org/api/user/7/repos/***");
    }

    #[test]
    fn test_item_urls() {
        let endpoint = endpoint("https://example.org");
        assert_eq!(
            endpoint.item("pkg", 12).url.as_str(),
            "https://example.org/api/user/7/pkg/12/abc"
        );
        assert_eq!(
            endpoint.item_action("file", 5, "content").url.as_str(),
            "https://example.org/api/user/7/file/5/content/abc"
        );
        assert_eq!(
            endpoint.item_action("pkg", 3, "configs").url.as_str(),
            "https://example.org/api/user/7/pkg/3/configs/abc"
        );
    }

    #[test]
    fn test_base_path_prefix_is_kept() {
        let target = endpoint("https://example.org/antarctica").collection("file");
        assert_eq!(
            target.url.as_str(),
            "https://example.org/antarctica/api/user/7/files/abc"
        );
    }

    #[test]
    fn test_token_is_percent_encoded() {
        let endpoint = Endpoint::new(
            Url::parse("https://example.org").unwrap(),
            Session::new(1, "a/b c"),
        );
        assert_eq!(
            endpoint.collection("file").url.as_str(),
            "https://example.org/api/user/1/files/a%2Fb%20c"
        );
        assert_eq!(
            endpoint.collection("file").to_string(),
            "https://example.org/api/user/1/files/***"
        );
    }
}
