//! Field Validator
//!
//! リクエスト単位でフィールドエラーを蓄積し、最後に 422 へ変換します。

use std::borrow::Cow;

use crate::error::app_error::{AppError, FieldErrors};

/// フィールドエラーの蓄積器
///
/// 同じフィールドに複数のエラーが付いた場合は最初のものだけを保持します。
///
/// ## Examples
/// ```rust
/// use kernel::validation::Validator;
///
/// let mut v = Validator::new();
/// v.check(!"".is_empty(), "title", "must be provided");
/// v.check(0 > 0, "start_price", "must be greater than zero");
/// assert!(!v.is_valid());
///
/// let err = v.finish().unwrap_err();
/// assert_eq!(err.status_code(), 422);
/// ```
#[derive(Debug, Default)]
pub struct Validator {
    errors: FieldErrors,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// エラーが一つもなければ `true`
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// エラーを追加（既にエラーのあるフィールドは上書きしない）
    pub fn add_error(&mut self, field: &str, message: impl Into<Cow<'static, str>>) {
        if !self.errors.contains_key(field) {
            self.errors
                .insert(field.to_owned(), message.into().into_owned());
        }
    }

    /// `ok` が `false` のときだけエラーを追加
    pub fn check(&mut self, ok: bool, field: &str, message: impl Into<Cow<'static, str>>) {
        if !ok {
            self.add_error(field, message);
        }
    }

    /// 値オブジェクトの生成結果を取り込み、失敗ならエラーとして記録
    pub fn field<T, M>(&mut self, field: &str, result: Result<T, M>) -> Option<T>
    where
        M: Into<Cow<'static, str>>,
    {
        match result {
            Ok(value) => Some(value),
            Err(message) => {
                self.add_error(field, message);
                None
            }
        }
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// 蓄積結果を `Result` に変換
    pub fn finish(self) -> Result<(), AppError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(AppError::validation(self.errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_validator_is_valid() {
        let v = Validator::new();
        assert!(v.is_valid());
        assert!(v.finish().is_ok());
    }

    #[test]
    fn test_first_error_wins() {
        let mut v = Validator::new();
        v.add_error("email", "must be provided");
        v.add_error("email", "must be a valid email address");
        assert_eq!(v.errors().get("email").map(String::as_str), Some("must be provided"));
    }

    #[test]
    fn test_check_only_records_failures() {
        let mut v = Validator::new();
        v.check(true, "name", "must be provided");
        v.check(false, "password", "must be at least 8 bytes long");
        assert_eq!(v.errors().len(), 1);
        assert!(v.errors().contains_key("password"));
    }

    #[test]
    fn test_field_collects_failures() {
        let mut v = Validator::new();
        let ok: Option<i32> = v.field("a", Ok::<_, &'static str>(1));
        let bad: Option<i32> = v.field("b", Err("must be provided"));
        assert_eq!(ok, Some(1));
        assert_eq!(bad, None);
        assert_eq!(v.errors().len(), 1);
    }

    #[test]
    fn test_finish_produces_field_map() {
        let mut v = Validator::new();
        v.check(false, "start_price", "must be greater than zero");
        let err = v.finish().unwrap_err();
        assert_eq!(err.status_code(), 422);
        assert_eq!(
            err.envelope(),
            serde_json::json!({"error": {"start_price": "must be greater than zero"}})
        );
    }
}
