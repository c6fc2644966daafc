//! 機械学習の評価指標モジュール
//!
//! 分類モデルの評価に使用する指標を提供します。

pub mod classification;
