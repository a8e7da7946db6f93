//! Argument Error Kind - Classification of argument violations
//!
//! Defines the [`ArgumentErrorKind`] enum carried by every
//! [`ArgumentError`](super::argument_error::ArgumentError).

use serde::Serialize;

/// 引数エラー種別の列挙体
///
/// どのファクトリ関数でエラーが生成されたかを表す判別子です。
/// 呼び出し側はこの値で網羅的にマッチできます。
///
/// ## Notes
/// * `non_exhaustive` - 将来的に列挙子が追加される可能性があることを示す
///
/// ## Examples
/// ```rust
/// use invalid_argument::error::kind::ArgumentErrorKind;
///
/// let kind = ArgumentErrorKind::UnknownObject;
/// assert_eq!(kind.status_code(), 404);
/// assert_eq!(kind.as_str(), "Unknown Object");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ArgumentErrorKind {
    /// 必須パラメータが空、または存在しない
    EmptyParameter,
    /// パラメータの実行時型が期待と異なる、またはオブジェクトが構造的に不正
    InvalidType,
    /// ID による検索で該当オブジェクトが見つからない
    UnknownObject,
    /// 入力そのものを読み取れない（I/O エラーなど）
    Unreadable,
}

impl ArgumentErrorKind {
    /// ユーザー向けの文字列表現を取得
    ///
    /// ## Examples
    /// ```rust
    /// use invalid_argument::error::kind::ArgumentErrorKind;
    /// assert_eq!(ArgumentErrorKind::InvalidType.as_str(), "Invalid Type");
    /// ```
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ArgumentErrorKind::EmptyParameter => "Empty Parameter",
            ArgumentErrorKind::InvalidType => "Invalid Type",
            ArgumentErrorKind::UnknownObject => "Unknown Object",
            ArgumentErrorKind::Unreadable => "Unreadable",
        }
    }

    /// 機械判定用のコードを取得
    ///
    /// serde でシリアライズした場合と同じ文字列を返します。
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            ArgumentErrorKind::EmptyParameter => "EMPTY_PARAMETER",
            ArgumentErrorKind::InvalidType => "INVALID_TYPE",
            ArgumentErrorKind::UnknownObject => "UNKNOWN_OBJECT",
            ArgumentErrorKind::Unreadable => "UNREADABLE",
        }
    }

    /// HTTP ステータスコードを取得
    ///
    /// Web 境界でこのエラーを返す場合に使うステータスです。
    /// 検索失敗は 404、読み取り失敗は 500、それ以外は 400 になります。
    #[inline]
    pub const fn status_code(&self) -> u16 {
        match self {
            ArgumentErrorKind::EmptyParameter | ArgumentErrorKind::InvalidType => 400,
            ArgumentErrorKind::UnknownObject => 404,
            ArgumentErrorKind::Unreadable => 500,
        }
    }
}

impl std::fmt::Display for ArgumentErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
