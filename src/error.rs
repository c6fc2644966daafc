use thiserror::Error;

/// エラー型の定義
#[derive(Error, Debug)]
pub enum Error {
    #[error("データ不足エラー: {0}")]
    InsufficientData(String),

    #[error("次元不一致エラー: {0}")]
    DimensionMismatch(String),

    #[error("空データエラー: {0}")]
    EmptyData(String),

    #[error("計算エラー: {0}")]
    ComputationError(String),

    #[error("未学習モデルエラー: {0}")]
    NotFitted(String),
}

/// Resultの型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
