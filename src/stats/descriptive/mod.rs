// 記述統計モジュール

use crate::error::{Error, Result};
use crate::stats::{validate_equal_len, validate_min_len, Median, MedianElement, Mode};

/// 平均値を計算する内部実装
pub(crate) fn mean_impl(data: &[f64]) -> Result<f64> {
    let n = data.len();
    validate_min_len(n)?;
    Ok(data.iter().sum::<f64>() / n as f64)
}

/// 平均からの偏差平方和
fn squared_difference(data: &[f64], mean: f64) -> f64 {
    data.iter().map(|&x| (x - mean).powi(2)).sum::<f64>()
}

/// 分散を計算する内部実装
///
/// `is_sample`がtrueの場合は分母にn-1（ベッセル補正）、falseの場合はnを使う。
pub(crate) fn var_impl(data: &[f64], is_sample: bool) -> Result<f64> {
    let n = data.len();
    validate_min_len(n)?;
    let mean = mean_impl(data)?;
    let denom = if is_sample { n - 1 } else { n };
    Ok(squared_difference(data, mean) / denom as f64)
}

/// プールされた分散を計算する内部実装
///
/// 2標本は独立したグループなので長さの一致は要求しない。
pub(crate) fn pooled_var_impl(x: &[f64], y: &[f64]) -> Result<f64> {
    let nx = x.len();
    let ny = y.len();
    validate_min_len(nx)?;
    validate_min_len(ny)?;

    let var_x = var_impl(x, true)?;
    let var_y = var_impl(y, true)?;

    Ok(((nx - 1) as f64 * var_x + (ny - 1) as f64 * var_y) / (nx + ny - 2) as f64)
}

/// 標準偏差を計算する内部実装
pub(crate) fn stdev_impl(data: &[f64], is_sample: bool) -> Result<f64> {
    validate_min_len(data.len())?;
    let variance = var_impl(data, is_sample)?;
    Ok(variance.sqrt())
}

/// 標準誤差を計算する内部実装
pub(crate) fn stderr_impl(data: &[f64], is_sample: bool) -> Result<f64> {
    let n = data.len();
    validate_min_len(n)?;
    let std_dev = stdev_impl(data, is_sample)?;
    Ok(std_dev / (n as f64).sqrt())
}

/// 変動係数を計算する内部実装
///
/// 平均が0の場合は算術どおり±無限大になる。
pub(crate) fn cv_impl(data: &[f64], is_sample: bool) -> Result<f64> {
    validate_min_len(data.len())?;
    let std_dev = stdev_impl(data, is_sample)?;
    let mean = mean_impl(data)?;
    Ok(std_dev / mean)
}

/// 共分散を計算する内部実装
pub(crate) fn cov_impl(x: &[f64], y: &[f64], is_sample: bool) -> Result<f64> {
    let n = x.len();
    validate_equal_len(n, y.len())?;

    let mean_x = mean_impl(x)?;
    let mean_y = mean_impl(y)?;

    let sum_products = x
        .iter()
        .zip(y.iter())
        .map(|(&xi, &yi)| (xi - mean_x) * (yi - mean_y))
        .sum::<f64>();

    let denom = if is_sample { n - 1 } else { n };
    Ok(sum_products / denom as f64)
}

/// ピアソン相関係数を計算する内部実装
///
/// `is_sample`は共分散と両標準偏差に同じ値を適用する。分母が一致して
/// いれば数学的には打ち消し合うが、計算順序は宣言どおりに保つ。
pub(crate) fn correlation_r_impl(x: &[f64], y: &[f64], is_sample: bool) -> Result<f64> {
    validate_equal_len(x.len(), y.len())?;

    let covariance = cov_impl(x, y, is_sample)?;
    let stdev_x = stdev_impl(x, is_sample)?;
    let stdev_y = stdev_impl(y, is_sample)?;

    let denominator = stdev_x * stdev_y;
    if denominator.abs() < f64::EPSILON {
        return Err(Error::ComputationError(
            "相関係数計算: 分散がゼロです".into(),
        ));
    }

    Ok(covariance / denominator)
}

/// 中央値を計算する内部実装
pub(crate) fn median_impl<T: MedianElement>(data: &[T]) -> Result<Median<T>> {
    let n = data.len();
    validate_min_len(n)?;

    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    if n % 2 == 0 {
        let middle_right = n / 2;
        let middle_left = middle_right - 1;
        match T::midpoint(&sorted[middle_left], &sorted[middle_right]) {
            Some(mid) => Ok(Median::Midpoint(mid)),
            None => Ok(Median::Pair(
                sorted[middle_left].clone(),
                sorted[middle_right].clone(),
            )),
        }
    } else {
        Ok(Median::Element(sorted[n / 2].clone()))
    }
}

/// 最頻値を計算する内部実装
///
/// 頻度の集計は入力での初出順を保ち、同数の場合はその順序で返す。
pub(crate) fn mode_impl<T: PartialEq + Clone>(data: &[T]) -> Result<Mode<T>> {
    validate_min_len(data.len())?;

    let mut counts: Vec<(T, usize)> = Vec::new();
    for value in data {
        match counts.iter_mut().find(|(v, _)| v == value) {
            Some((_, count)) => *count += 1,
            None => counts.push((value.clone(), 1)),
        }
    }

    let max_count = counts.iter().map(|(_, c)| *c).max().unwrap_or(0);
    let mut modes: Vec<T> = counts
        .into_iter()
        .filter(|(_, c)| *c == max_count)
        .map(|(v, _)| v)
        .collect();

    if modes.len() == 1 {
        Ok(Mode::Unique(modes.remove(0)))
    } else {
        Ok(Mode::Multiple(modes))
    }
}
