//
//  antarctica-cli
//  models/user.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use serde::{Deserialize, Serialize};

/// The account returned by a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub login: String,
    #[serde(rename = "name")]
    pub display_name: String,
    #[serde(rename = "token")]
    pub access_token: String,
}

impl User {
    /// Keys the login reply's `user` object must carry.
    pub const REQUIRED_KEYS: [&'static str; 4] = ["id", "login", "name", "token"];
}
