//! 機械学習機能を提供するモジュール
//!
//! ロジスティック回帰による二値分類モデルと、分類モデルの評価指標を
//! 提供します。

pub mod metrics;
pub mod models;
