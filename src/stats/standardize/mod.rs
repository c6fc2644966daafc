// 標準化モジュール

use crate::error::Result;
use crate::stats::descriptive::{mean_impl, stdev_impl};
use crate::stats::validate_min_len;

/// z値を計算する内部実装
///
/// z値は分布の慣習に従い常に母標準偏差で標準化する。
pub(crate) fn zscore_impl(data: &[f64]) -> Result<Vec<f64>> {
    validate_min_len(data.len())?;
    let mean = mean_impl(data)?;
    let std_dev = stdev_impl(data, false)?;
    Ok(data.iter().map(|&x| (x - mean) / std_dev).collect())
}

/// t値を計算する内部実装
///
/// t値は常に標本標準偏差で標準化する。
pub(crate) fn tscore_impl(data: &[f64]) -> Result<Vec<f64>> {
    validate_min_len(data.len())?;
    let mean = mean_impl(data)?;
    let std_dev = stdev_impl(data, true)?;
    Ok(data.iter().map(|&x| (x - mean) / std_dev).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_zscore_reference_values() {
        let data = vec![1.0, 2.0, 3.0, 4.0];
        let z = zscore_impl(&data).unwrap();
        let expected = [
            -1.3416407864998738,
            -0.4472135954999579,
            0.4472135954999579,
            1.3416407864998738,
        ];

        assert_eq!(z.len(), expected.len());
        for (actual, want) in z.iter().zip(expected.iter()) {
            assert!((actual - want).abs() < 1e-10);
        }
    }

    #[test]
    fn test_zscore_is_standardized() {
        let data = vec![3.0, 7.0, 11.0, 19.0, 23.0];
        let z = zscore_impl(&data).unwrap();

        // 標準化後は平均0、母標準偏差1になる
        let mean = z.iter().sum::<f64>() / z.len() as f64;
        assert!(mean.abs() < 1e-10);

        let var = z.iter().map(|&v| (v - mean).powi(2)).sum::<f64>() / z.len() as f64;
        assert!((var.sqrt() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_tscore_reference_values() {
        let data = vec![1.0, 2.0, 3.0, 4.0];
        let t = tscore_impl(&data).unwrap();
        let expected = [
            -1.161895003862225,
            -0.3872983346207417,
            0.3872983346207417,
            1.161895003862225,
        ];

        for (actual, want) in t.iter().zip(expected.iter()) {
            assert!((actual - want).abs() < 1e-10);
        }
    }

    #[test]
    fn test_scores_preserve_order() {
        let data = vec![4.0, 1.0, 3.0, 2.0];
        let z = zscore_impl(&data).unwrap();
        // 入力順を保つので最大値のz値が先頭に来る
        assert!(z[0] > z[2] && z[2] > z[3] && z[3] > z[1]);
    }

    #[test]
    fn test_insufficient_data() {
        assert!(matches!(
            zscore_impl(&[1.0]),
            Err(Error::InsufficientData(_))
        ));
        assert!(matches!(
            tscore_impl(&[1.0]),
            Err(Error::InsufficientData(_))
        ));
    }
}
