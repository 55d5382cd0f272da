//! User Name Value Object
//!
//! 表示用の氏名。一意性は求めない。
//!
//! ## 不変条件
//! - 空白のみは不可
//! - 長さ: 500 バイト以下

use serde::Serialize;
use std::fmt;

/// Maximum length for user name (in bytes)
pub const USER_NAME_MAX_BYTES: usize = 500;

/// User name value object
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct UserName(String);

impl UserName {
    /// The error is the field message reported to the client.
    pub fn new(name: impl Into<String>) -> Result<Self, &'static str> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err("must be provided");
        }
        if name.len() > USER_NAME_MAX_BYTES {
            return Err("must not be more than 500 bytes long");
        }

        Ok(Self(name))
    }

    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
