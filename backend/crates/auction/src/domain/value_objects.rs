//! Domain Value Objects

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt;

use crate::error::{AuctionError, AuctionResult};

/// ロットの状態
///
/// DB と JSON のどちらでも旧来の 2 のべき乗 (1, 2, 4, 8) で表現します。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LotStatus {
    Pending,
    Published,
    Processing,
    Finished,
}

impl LotStatus {
    /// DB 上の値
    pub const fn as_db(self) -> i32 {
        match self {
            LotStatus::Pending => 1,
            LotStatus::Published => 2,
            LotStatus::Processing => 4,
            LotStatus::Finished => 8,
        }
    }

    /// DB 上の値から復元（未知の値は内部エラー）
    pub fn from_db(value: i32) -> AuctionResult<Self> {
        match value {
            1 => Ok(LotStatus::Pending),
            2 => Ok(LotStatus::Published),
            4 => Ok(LotStatus::Processing),
            8 => Ok(LotStatus::Finished),
            other => Err(AuctionError::Internal(format!(
                "unknown lot status {other}"
            ))),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            LotStatus::Pending => "pending",
            LotStatus::Published => "published",
            LotStatus::Processing => "processing",
            LotStatus::Finished => "finished",
        }
    }
}

impl Serialize for LotStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i32(self.as_db())
    }
}

impl<'de> Deserialize<'de> for LotStatus {
    /// 未知の値は拒否
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = i32::deserialize(deserializer)?;
        LotStatus::from_db(value)
            .map_err(|_| de::Error::custom(format!("unknown lot status {value}")))
    }
}

impl fmt::Display for LotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
