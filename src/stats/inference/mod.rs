// 区間推定モジュール

use statrs::distribution::{ContinuousCDF, Normal, StudentsT};

use crate::error::{Error, Result};
use crate::stats::descriptive::{mean_impl, pooled_var_impl, stderr_impl, var_impl};
use crate::stats::validate_min_len;

/// 標準正規分布の分位点（逆CDF）
fn normal_quantile(p: f64) -> Result<f64> {
    let normal = Normal::new(0.0, 1.0)
        .map_err(|e| Error::ComputationError(format!("正規分布の構築に失敗しました: {}", e)))?;
    Ok(normal.inverse_cdf(p))
}

/// t分布の分位点（逆CDF）
fn student_t_quantile(p: f64, df: usize) -> Result<f64> {
    let t_dist = StudentsT::new(0.0, 1.0, df as f64)
        .map_err(|e| Error::ComputationError(format!("t分布の構築に失敗しました: {}", e)))?;
    Ok(t_dist.inverse_cdf(p))
}

/// 両側区間で用いる上側確率 1 - α/2 を計算
fn upper_tail_probability(confidence_lvl: f64) -> f64 {
    let alpha = 1.0 - confidence_lvl;
    1.0 - alpha / 2.0
}

/// 1標本のz信頼区間を計算する内部実装
///
/// z区間は母標準誤差を使用する。
pub(crate) fn z_interval_impl(data: &[f64], confidence_lvl: f64) -> Result<(f64, f64)> {
    validate_min_len(data.len())?;

    let mean = mean_impl(data)?;
    let std_err = stderr_impl(data, false)?;
    let z = normal_quantile(upper_tail_probability(confidence_lvl))?;

    let margin = z * std_err;
    Ok((mean - margin, mean + margin))
}

/// 平均差の2標本z信頼区間を計算する内部実装（等分散を仮定）
///
/// 2標本は独立したグループなので長さの一致は要求しない。分散は母分散。
pub(crate) fn z_interval_equal_var_impl(
    x: &[f64],
    y: &[f64],
    confidence_lvl: f64,
) -> Result<(f64, f64)> {
    let nx = x.len();
    let ny = y.len();
    validate_min_len(nx)?;
    validate_min_len(ny)?;

    let mean_diff = mean_impl(x)? - mean_impl(y)?;
    let var_x = var_impl(x, false)?;
    let var_y = var_impl(y, false)?;
    let std_err = (var_x / nx as f64 + var_y / ny as f64).sqrt();
    let z = normal_quantile(upper_tail_probability(confidence_lvl))?;

    let margin = z * std_err;
    Ok((mean_diff - margin, mean_diff + margin))
}

/// 1標本のt信頼区間を計算する内部実装
///
/// t区間は標本標準誤差と自由度n-1のt分布を使用する。
pub(crate) fn t_interval_impl(data: &[f64], confidence_lvl: f64) -> Result<(f64, f64)> {
    let n = data.len();
    validate_min_len(n)?;

    let mean = mean_impl(data)?;
    let std_err = stderr_impl(data, true)?;
    let t = student_t_quantile(upper_tail_probability(confidence_lvl), n - 1)?;

    let margin = t * std_err;
    Ok((mean - margin, mean + margin))
}

/// 平均差の2標本t信頼区間を計算する内部実装（等分散を仮定）
///
/// プールされた分散と自由度nx+ny-2のt分布を使用する。
pub(crate) fn t_interval_equal_var_impl(
    x: &[f64],
    y: &[f64],
    confidence_lvl: f64,
) -> Result<(f64, f64)> {
    let nx = x.len();
    let ny = y.len();
    validate_min_len(nx)?;
    validate_min_len(ny)?;

    let mean_diff = mean_impl(x)? - mean_impl(y)?;
    let pooled = pooled_var_impl(x, y)?;
    let std_err = (pooled * (1.0 / nx as f64 + 1.0 / ny as f64)).sqrt();
    let t = student_t_quantile(upper_tail_probability(confidence_lvl), nx + ny - 2)?;

    let margin = t * std_err;
    Ok((mean_diff - margin, mean_diff + margin))
}
