//! 分類モデル評価のためのメトリクス

use crate::error::{Error, Result};

/// 正解率（accuracy）を計算
///
/// # Arguments
/// * `y_true` - 0/1でエンコードされた真のラベル
/// * `y_pred` - 0/1でエンコードされた予測ラベル
///
/// # Returns
/// * `Result<f64>` - 正解率 1 - mean(|y_pred - y_true|)
pub fn accuracy_score(y_true: &[f64], y_pred: &[f64]) -> Result<f64> {
    if y_true.len() != y_pred.len() {
        return Err(Error::DimensionMismatch(format!(
            "真の値と予測値の長さが一致しません: {} vs {}",
            y_true.len(),
            y_pred.len()
        )));
    }

    if y_true.is_empty() {
        return Err(Error::EmptyData(
            "空のデータで計算することはできません".to_string(),
        ));
    }

    let mean_abs_diff = y_true
        .iter()
        .zip(y_pred.iter())
        .map(|(&true_val, &pred_val)| (pred_val - true_val).abs())
        .sum::<f64>()
        / y_true.len() as f64;

    Ok(1.0 - mean_abs_diff)
}
