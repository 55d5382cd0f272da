//! Database helpers
//!
//! すべてのクエリは固定のタイムアウト内で実行します。

use std::future::Future;
use std::time::Duration;

/// 1 クエリあたりの上限時間
pub const QUERY_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Debug, thiserror::Error)]
#[error("database query exceeded {0:?}")]
pub struct QueryTimedOut(pub Duration);

/// データベース処理を [`QUERY_TIMEOUT`] 以内に制限して実行
///
/// 時間切れの場合は `TimedOut` 種別の `sqlx::Error::Io` を返すので、
/// 呼び出し側は通常の `sqlx::Error` と同じように扱えます。
pub async fn bounded<T, F>(fut: F) -> Result<T, sqlx::Error>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    bounded_for(QUERY_TIMEOUT, fut).await
}

/// 任意のタイムアウトで [`bounded`] と同じ処理を行う
pub async fn bounded_for<T, F>(limit: Duration, fut: F) -> Result<T, sqlx::Error>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(result) => result,
        Err(_) => Err(sqlx::Error::Io(std::io::Error::new(
            std::io::ErrorKind::TimedOut,
            QueryTimedOut(limit),
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::app_error::{AppError, SERVER_ERROR_MESSAGE};
    use crate::error::kind::ErrorKind;

    #[tokio::test]
    async fn test_bounded_passes_result_through() {
        let value = bounded(async { Ok::<_, sqlx::Error>(5) }).await.unwrap();
        assert_eq!(value, 5);
    }

    #[tokio::test]
    async fn test_bounded_times_out() {
        let err = bounded_for(Duration::from_millis(10), async {
            tokio::time::sleep(Duration::from_secs(1)).await;
            Ok::<_, sqlx::Error>(())
        })
        .await
        .unwrap_err();

        assert!(matches!(&err, sqlx::Error::Io(io) if io.kind() == std::io::ErrorKind::TimedOut));

        let app_err: AppError = err.into();
        assert_eq!(app_err.kind(), ErrorKind::InternalServerError);
        assert_eq!(
            app_err.envelope(),
            serde_json::json!({"error": SERVER_ERROR_MESSAGE})
        );
    }
}
