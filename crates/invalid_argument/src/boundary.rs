//! Boundary helpers - Applying the factories to untyped input
//!
//! Extension traits for the places where loosely typed data enters the
//! program (decoded JSON, optional lookups). Each helper either returns
//! the typed value or the [`ArgumentError`] the matching factory builds.

use std::fmt;

use serde_json::Value;

use crate::error::argument_error::{ArgumentError, ArgumentResult};
use crate::error::kind::ArgumentErrorKind;

/// `serde_json::Value` から型付きのパラメータを取り出すための拡張トレイト
///
/// 取り出せない場合は、対応するファクトリ関数が生成するエラーを返します。
///
/// ## Examples
/// ```rust
/// use invalid_argument::boundary::ValueExt;
/// use serde_json::json;
///
/// let body = json!({ "count": "abc" });
/// let err = body.field("count").and_then(|v| v.integer_param("count")).unwrap_err();
/// assert_eq!(
///     err.message(),
///     "Invalid type for `count` passed. Expected `integer`, but got `string`"
/// );
/// ```
pub trait ValueExt {
    /// オブジェクトから `key` のフィールドを取得
    ///
    /// 存在しない場合と `null` の場合は空パラメータエラーになります。
    /// 受け手がオブジェクトでない場合は `key` を解決できないため、
    /// `key` を名前としたオブジェクト型不正エラーを返します
    /// （エラーが指すのはコンテナではなく、取得しようとしたフィールドです）。
    fn field(&self, key: &str) -> ArgumentResult<&Value>;

    /// `i64` の値を取得
    ///
    /// 整数だが `i64` の範囲を超える値（`i64::MAX` より大きい `u64`）は、
    /// 型不一致ではなく範囲外として報告します。
    fn integer_param(&self, name: &str) -> ArgumentResult<i64>;

    /// 文字列を取得。空文字列は空パラメータエラーになります。
    fn string_param(&self, name: &str) -> ArgumentResult<&str>;

    /// 真偽値を取得
    fn boolean_param(&self, name: &str) -> ArgumentResult<bool>;
}

impl ValueExt for Value {
    fn field(&self, key: &str) -> ArgumentResult<&Value> {
        let object = self
            .as_object()
            .ok_or_else(|| ArgumentError::invalid_type(key))?;

        match object.get(key) {
            None | Some(Value::Null) => Err(ArgumentError::empty_parameter(key)),
            Some(value) => Ok(value),
        }
    }

    fn integer_param(&self, name: &str) -> ArgumentResult<i64> {
        if let Some(value) = self.as_i64() {
            return Ok(value);
        }
        if self.is_u64() {
            return Err(ArgumentError::new(
                ArgumentErrorKind::InvalidType,
                format!("`{name}` is out of range. Expected an integer up to `{}`", i64::MAX),
            ));
        }
        Err(ArgumentError::invalid_integer_parameter(self, name))
    }

    fn string_param(&self, name: &str) -> ArgumentResult<&str> {
        match self.as_str() {
            Some("") => Err(ArgumentError::empty_parameter(name)),
            Some(value) => Ok(value),
            None => Err(ArgumentError::invalid_string_parameter(self, name)),
        }
    }

    fn boolean_param(&self, name: &str) -> ArgumentResult<bool> {
        self.as_bool()
            .ok_or_else(|| ArgumentError::invalid_boolean_parameter(self, name))
    }
}

/// `Option<T>` を `ArgumentResult<T>` に変換するための拡張トレイト
pub trait OptionExt<T> {
    /// `None` の場合にオブジェクト未検出エラーを返す
    fn ok_or_unknown_object(
        self,
        id: impl fmt::Display,
        object_type: impl fmt::Display,
    ) -> ArgumentResult<T>;

    /// `None` の場合に空パラメータエラーを返す
    fn ok_or_empty_parameter(self, name: impl fmt::Display) -> ArgumentResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_unknown_object(
        self,
        id: impl fmt::Display,
        object_type: impl fmt::Display,
    ) -> ArgumentResult<T> {
        self.ok_or_else(|| ArgumentError::unknown_object(id, object_type))
    }

    fn ok_or_empty_parameter(self, name: impl fmt::Display) -> ArgumentResult<T> {
        self.ok_or_else(|| ArgumentError::empty_parameter(name))
    }
}

/// `Result<T, E>` を `ArgumentResult<T>` に変換するための拡張トレイト
pub trait ResultExt<T> {
    /// エラーをオブジェクト型不正エラーに置き換える
    fn or_invalid_type(self, name: impl fmt::Display) -> ArgumentResult<T>;
}

impl<T, E> ResultExt<T> for Result<T, E> {
    fn or_invalid_type(self, name: impl fmt::Display) -> ArgumentResult<T> {
        self.map_err(|_| ArgumentError::invalid_type(name))
    }
}
