//! Argument Error - Pre-formatted invalid-argument error values
//!
//! Defines the [`ArgumentError`] struct, its factory functions and the
//! [`ArgumentResult<T>`] type alias.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use thiserror::Error;

use super::kind::ArgumentErrorKind;
use crate::value_type::TypeOf;

/// 不正な引数を表すエラー型
///
/// ファクトリ関数で生成し、生成後は変更されません。
/// ファクトリ関数はエラーを生成して返すだけで、送出・ログ出力は行いません。
///
/// ## Fields
/// * `kind` - エラーの分類
/// * `message` - ユーザー向けのエラーメッセージ
///
/// ## Examples
/// ```rust
/// use invalid_argument::error::{argument_error::ArgumentError, kind::ArgumentErrorKind};
///
/// let err = ArgumentError::invalid_integer_parameter("abc", "count");
/// assert_eq!(err.kind(), ArgumentErrorKind::InvalidType);
/// assert_eq!(
///     err.message(),
///     "Invalid type for `count` passed. Expected `integer`, but got `string`"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{message}")]
pub struct ArgumentError {
    /// エラー種別
    kind: ArgumentErrorKind,
    /// ユーザー向けメッセージ
    message: Cow<'static, str>,
}

/// 引数エラー結果型エイリアス
///
/// `Result<T, ArgumentError>` の省略形です。
///
/// ## Examples
/// ```rust
/// use invalid_argument::error::argument_error::{ArgumentError, ArgumentResult};
///
/// fn find_post(id: u64) -> ArgumentResult<&'static str> {
///     if id != 1 {
///         return Err(ArgumentError::unknown_object(id, "post"));
///     }
///     Ok("Hello world")
/// }
///
/// assert!(find_post(42).is_err());
/// ```
pub type ArgumentResult<T> = Result<T, ArgumentError>;

impl ArgumentError {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// 任意の種別とメッセージでエラーを作成
    #[inline]
    pub fn new(kind: ArgumentErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    // ========================================================================
    // Factories
    // ========================================================================

    /// 空パラメータエラー
    ///
    /// `name` が空かどうかは検査しません。
    ///
    /// ## Examples
    /// ```rust
    /// use invalid_argument::error::argument_error::ArgumentError;
    /// let err = ArgumentError::empty_parameter("title");
    /// assert_eq!(err.message(), "`title` cannot be empty.");
    /// ```
    pub fn empty_parameter(name: impl fmt::Display) -> Self {
        Self::new(
            ArgumentErrorKind::EmptyParameter,
            format!("`{name}` cannot be empty."),
        )
    }

    /// パラメータ型不一致エラー
    ///
    /// ## Arguments
    /// * `value` - 渡された値（実行時型をメッセージに含める）
    /// * `name` - パラメータ名
    /// * `expected` - 期待される型名
    pub fn invalid_parameter_type<V>(
        value: &V,
        name: impl fmt::Display,
        expected: impl fmt::Display,
    ) -> Self
    where
        V: TypeOf + ?Sized,
    {
        Self::new(
            ArgumentErrorKind::InvalidType,
            format!(
                "Invalid type for `{name}` passed. Expected `{expected}`, but got `{}`",
                value.type_of()
            ),
        )
    }

    /// `integer` を期待するパラメータの型不一致エラー
    #[inline]
    pub fn invalid_integer_parameter<V>(value: &V, name: impl fmt::Display) -> Self
    where
        V: TypeOf + ?Sized,
    {
        Self::invalid_parameter_type(value, name, "integer")
    }

    /// `string` を期待するパラメータの型不一致エラー
    #[inline]
    pub fn invalid_string_parameter<V>(value: &V, name: impl fmt::Display) -> Self
    where
        V: TypeOf + ?Sized,
    {
        Self::invalid_parameter_type(value, name, "string")
    }

    /// `boolean` を期待するパラメータの型不一致エラー
    #[inline]
    pub fn invalid_boolean_parameter<V>(value: &V, name: impl fmt::Display) -> Self
    where
        V: TypeOf + ?Sized,
    {
        Self::invalid_parameter_type(value, name, "boolean")
    }

    /// `callable` を期待するパラメータの型不一致エラー
    #[inline]
    pub fn invalid_callable_parameter<V>(value: &V, name: impl fmt::Display) -> Self
    where
        V: TypeOf + ?Sized,
    {
        Self::invalid_parameter_type(value, name, "callable")
    }

    /// オブジェクト型不正エラー
    ///
    /// 既存の呼び出し側との互換のため、`` ` `` と `is` の間に空白はありません。
    pub fn invalid_type(name: impl fmt::Display) -> Self {
        Self::new(
            ArgumentErrorKind::InvalidType,
            format!("`{name}`is of an invalid type."),
        )
    }

    /// オブジェクト未検出エラー
    ///
    /// ## Arguments
    /// * `id` - 検索に使った ID
    /// * `object_type` - 検索対象のオブジェクト種別（例: `post`）
    ///
    /// ## Examples
    /// ```rust
    /// use invalid_argument::error::argument_error::ArgumentError;
    /// let err = ArgumentError::unknown_object(42, "post");
    /// assert_eq!(err.message(), "No post with the ID `42`could be found.");
    /// ```
    pub fn unknown_object(id: impl fmt::Display, object_type: impl fmt::Display) -> Self {
        Self::new(
            ArgumentErrorKind::UnknownObject,
            format!("No {object_type} with the ID `{id}`could be found."),
        )
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// エラー種別を取得
    #[inline]
    pub fn kind(&self) -> ArgumentErrorKind {
        self.kind
    }

    /// メッセージを取得
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// HTTP ステータスコードを取得
    #[inline]
    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    /// 種別に応じたレベルでエラーを記録
    ///
    /// ファクトリ関数は記録を行わないため、必要な場合は呼び出し側が明示的に呼びます。
    pub fn log(&self) {
        match self.kind {
            ArgumentErrorKind::UnknownObject => {
                tracing::debug!(kind = self.kind.code(), detail = %self.message, "Unknown object requested");
            }
            ArgumentErrorKind::Unreadable => {
                tracing::error!(kind = self.kind.code(), detail = %self.message, "Argument could not be read");
            }
            _ => {
                tracing::warn!(kind = self.kind.code(), detail = %self.message, "Invalid argument");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_empty_parameter() {
        let err = ArgumentError::empty_parameter("title");
        assert_eq!(err.kind(), ArgumentErrorKind::EmptyParameter);
        assert_eq!(err.message(), "`title` cannot be empty.");
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn test_empty_parameter_accepts_empty_name() {
        let err = ArgumentError::empty_parameter("");
        assert_eq!(err.message(), "`` cannot be empty.");
    }

    #[test]
    fn test_invalid_parameter_type() {
        let err = ArgumentError::invalid_parameter_type(&1.5, "ratio", "integer");
        assert_eq!(err.kind(), ArgumentErrorKind::InvalidType);
        assert_eq!(
            err.message(),
            "Invalid type for `ratio` passed. Expected `integer`, but got `double`"
        );
    }

    #[test]
    fn test_typed_shortcuts_delegate() {
        let value = serde_json::json!(null);
        assert_eq!(
            ArgumentError::invalid_integer_parameter(&value, "n"),
            ArgumentError::invalid_parameter_type(&value, "n", "integer")
        );
        assert_eq!(
            ArgumentError::invalid_string_parameter(&value, "n"),
            ArgumentError::invalid_parameter_type(&value, "n", "string")
        );
        assert_eq!(
            ArgumentError::invalid_boolean_parameter(&value, "n"),
            ArgumentError::invalid_parameter_type(&value, "n", "boolean")
        );
        assert_eq!(
            ArgumentError::invalid_callable_parameter(&value, "n"),
            ArgumentError::invalid_parameter_type(&value, "n", "callable")
        );
    }

    #[test]
    fn test_invalid_type_keeps_spacing() {
        let err = ArgumentError::invalid_type("options");
        assert_eq!(err.kind(), ArgumentErrorKind::InvalidType);
        assert_eq!(err.message(), "`options`is of an invalid type.");
    }

    #[test]
    fn test_unknown_object() {
        let err = ArgumentError::unknown_object(0, "");
        assert_eq!(err.kind(), ArgumentErrorKind::UnknownObject);
        assert_eq!(err.message(), "No  with the ID `0`could be found.");
        assert_eq!(err.status_code(), 404);
    }

    #[test]
    fn test_display_is_message() {
        let err = ArgumentError::unknown_object("abc-123", "term");
        assert_eq!(err.to_string(), err.message());
        assert!(err.source().is_none());
    }

    #[test]
    fn test_serialize() {
        let err = ArgumentError::empty_parameter("slug");
        assert_eq!(
            serde_json::to_value(&err).unwrap(),
            serde_json::json!({
                "kind": "EMPTY_PARAMETER",
                "message": "`slug` cannot be empty.",
            })
        );
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture_log(err: &ArgumentError) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, || err.log());
        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_log_levels() {
        let output = capture_log(&ArgumentError::invalid_type("options"));
        assert!(output.contains("WARN"));
        assert!(output.contains("INVALID_TYPE"));

        let output = capture_log(&ArgumentError::unknown_object(7, "post"));
        assert!(output.contains("DEBUG"));
        assert!(output.contains("UNKNOWN_OBJECT"));

        let output = capture_log(&ArgumentError::new(ArgumentErrorKind::Unreadable, "disk gone"));
        assert!(output.contains("ERROR"));
        assert!(output.contains("UNREADABLE"));
    }
}
