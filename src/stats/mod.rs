// Staty 統計モジュール
//
// このモジュールは、1標本・2標本データに対する統計機能を提供します。
// 記述統計、標準化、区間推定など、基本的な統計手法が実装されています。

pub mod descriptive;
pub mod inference;
pub mod standardize;

use crate::error::{Error, Result};
use num_traits::ToPrimitive;

/// 平均値を計算
///
/// # 説明
/// この関数は、数値データの算術平均（総和をデータ数で割った値）を計算します。
///
/// # 例
/// ```rust
/// use staty::stats;
///
/// let data = vec![2.0, 4.0, 6.0, 8.0];
/// let m = stats::mean(&data).unwrap();
/// assert_eq!(m, 5.0);
/// ```
pub fn mean<T: AsRef<[f64]>>(data: T) -> Result<f64> {
    descriptive::mean_impl(data.as_ref())
}

/// 分散を計算
///
/// # 説明
/// 平均からの偏差平方和をデータ数で割った値を計算します。
/// `is_sample`がtrueの場合は不偏分散（分母 n-1）、falseの場合は
/// 母分散（分母 n）になります。慣習的な既定値はtrueです。
///
/// # 例
/// ```rust
/// use staty::stats;
///
/// let data = vec![2.0, 4.0, 6.0, 8.0];
/// let v = stats::var(&data, true).unwrap();
/// assert!((v - 6.666666666666667).abs() < 1e-10);
/// ```
pub fn var<T: AsRef<[f64]>>(data: T, is_sample: bool) -> Result<f64> {
    descriptive::var_impl(data.as_ref(), is_sample)
}

/// プールされた分散を計算
///
/// # 説明
/// 等分散を仮定した2標本の分散の重み付き結合
/// ((nx-1)·var_x + (ny-1)·var_y) / (nx+ny-2) を計算します。
/// 2標本は独立したグループであり、長さが一致する必要はありません。
///
/// # 例
/// ```rust
/// use staty::stats;
///
/// let x = vec![2.0, 4.0, 8.0, 16.0];
/// let y = vec![6.0, 8.0, 12.0, 24.0];
/// let pv = stats::pooled_var(&x, &y).unwrap();
/// assert!((pv - 51.666666666666664).abs() < 1e-10);
/// ```
pub fn pooled_var<T: AsRef<[f64]>, U: AsRef<[f64]>>(x: T, y: U) -> Result<f64> {
    descriptive::pooled_var_impl(x.as_ref(), y.as_ref())
}

/// 標準偏差を計算
///
/// # 説明
/// 分散の平方根を計算します。`is_sample`は分散と同じ意味を持ちます。
///
/// # 例
/// ```rust
/// use staty::stats;
///
/// let data = vec![2.0, 4.0, 6.0, 8.0];
/// let sd = stats::stdev(&data, true).unwrap();
/// assert!((sd - 2.581988897471611).abs() < 1e-10);
/// ```
pub fn stdev<T: AsRef<[f64]>>(data: T, is_sample: bool) -> Result<f64> {
    descriptive::stdev_impl(data.as_ref(), is_sample)
}

/// 標準誤差を計算
///
/// # 説明
/// 標準偏差をデータ数の平方根で割った値を計算します。
///
/// # 例
/// ```rust
/// use staty::stats;
///
/// let data = vec![1.0, 2.0, 3.0, 4.0];
/// let se = stats::stderr(&data, true).unwrap();
/// assert!((se - 0.6454972243679028).abs() < 1e-10);
/// ```
pub fn stderr<T: AsRef<[f64]>>(data: T, is_sample: bool) -> Result<f64> {
    descriptive::stderr_impl(data.as_ref(), is_sample)
}

/// 変動係数を計算
///
/// # 説明
/// 標準偏差を平均値で割った、尺度によらない散らばりの指標を計算します。
///
/// # 例
/// ```rust
/// use staty::stats;
///
/// let data = vec![2.0, 4.0, 6.0, 8.0];
/// let c = stats::cv(&data, true).unwrap();
/// assert!((c - 0.5163977794943222).abs() < 1e-10);
/// ```
pub fn cv<T: AsRef<[f64]>>(data: T, is_sample: bool) -> Result<f64> {
    descriptive::cv_impl(data.as_ref(), is_sample)
}

/// 共分散を計算
///
/// # 説明
/// 2つの数値配列間の共分散を計算します。
/// 共分散は2つの変数がどの程度一緒に変動するかを示す指標です。
/// 2つの配列は同じ長さでなければなりません。
///
/// # 例
/// ```rust
/// use staty::stats;
///
/// let x = vec![1.0, 2.0, 3.0, 4.0];
/// let y = vec![5.0, 6.0, 7.0, 8.0];
/// let c = stats::cov(&x, &y, true).unwrap();
/// assert!((c - 1.6666666666666667).abs() < 1e-10);
/// ```
pub fn cov<T: AsRef<[f64]>, U: AsRef<[f64]>>(x: T, y: U, is_sample: bool) -> Result<f64> {
    descriptive::cov_impl(x.as_ref(), y.as_ref(), is_sample)
}

/// ピアソン相関係数を計算
///
/// # 説明
/// 共分散を両標本の標準偏差の積で割った値を計算します。
/// 相関係数は-1から1の範囲で、1は完全な正の相関、-1は完全な負の相関、
/// 0は相関がないことを示します。`is_sample`は分子・分母の両方に
/// 同じ値が適用されます。
///
/// # 例
/// ```rust
/// use staty::stats;
///
/// let x = vec![1.0, 2.0, 3.0, 4.0];
/// let y = vec![5.0, 6.0, 7.0, 8.0];
/// let r = stats::correlation_r(&x, &y, true).unwrap();
/// assert!((r - 1.0).abs() < 1e-10);
/// ```
pub fn correlation_r<T: AsRef<[f64]>, U: AsRef<[f64]>>(
    x: T,
    y: U,
    is_sample: bool,
) -> Result<f64> {
    descriptive::correlation_r_impl(x.as_ref(), y.as_ref(), is_sample)
}

/// 中央値を計算
///
/// # 説明
/// データを昇順にソートし、中央の値を返します。奇数長の場合は中央の
/// 要素そのもの、偶数長の場合は数値型なら中央2要素の平均、文字列の
/// ような非数値型なら中央の2要素の組を返します。
///
/// # 例
/// ```rust
/// use staty::stats;
/// use staty::stats::Median;
///
/// let odd = vec![2.0, 4.0, 6.0, 8.0, 10.0];
/// assert_eq!(stats::median(&odd).unwrap(), Median::Element(6.0));
///
/// let words = vec!["a", "b", "c", "d"];
/// assert_eq!(stats::median(&words).unwrap(), Median::Pair("b", "c"));
/// ```
pub fn median<T: MedianElement>(data: &[T]) -> Result<Median<T>> {
    descriptive::median_impl(data)
}

/// 最頻値を計算
///
/// # 説明
/// 出現回数が最大の値を返します。最大値が複数ある場合は、頻度集計で
/// 最初に出現した順序を保った全ての候補を返します。
///
/// # 例
/// ```rust
/// use staty::stats;
/// use staty::stats::Mode;
///
/// let data = vec![2, 2, 3, 4, 5, 6];
/// assert_eq!(stats::mode(&data).unwrap(), Mode::Unique(2));
/// ```
pub fn mode<T: PartialEq + Clone>(data: &[T]) -> Result<Mode<T>> {
    descriptive::mode_impl(data)
}

/// z値（zスコア）を計算
///
/// # 説明
/// 各要素を (値 - 平均) / 母標準偏差 で標準化した列を入力順で返します。
/// z値は慣習的に母標準偏差を用いるため、標本・母集団の切り替えは
/// ありません。標本標準偏差による標準化には[`tscore`]を使用します。
///
/// # 例
/// ```rust
/// use staty::stats;
///
/// let data = vec![1.0, 2.0, 3.0, 4.0];
/// let z = stats::zscore(&data).unwrap();
/// assert!((z[0] + 1.3416407864998738).abs() < 1e-10);
/// ```
pub fn zscore<T: AsRef<[f64]>>(data: T) -> Result<Vec<f64>> {
    standardize::zscore_impl(data.as_ref())
}

/// t値（tスコア）を計算
///
/// # 説明
/// 各要素を (値 - 平均) / 標本標準偏差 で標準化した列を入力順で返します。
///
/// # 例
/// ```rust
/// use staty::stats;
///
/// let data = vec![1.0, 2.0, 3.0, 4.0];
/// let t = stats::tscore(&data).unwrap();
/// assert!((t[0] + 1.161895003862225).abs() < 1e-10);
/// ```
pub fn tscore<T: AsRef<[f64]>>(data: T) -> Result<Vec<f64>> {
    standardize::tscore_impl(data.as_ref())
}

/// 1標本のz信頼区間を計算
///
/// # 説明
/// 平均 ± 正規分布の分位点(1-α/2) × 母標準誤差 の区間 (下限, 上限) を
/// 返します。α = 1 - `confidence_lvl` で、慣習的な信頼水準は0.95です。
///
/// # 例
/// ```rust
/// use staty::stats;
///
/// let data = vec![2.0, 4.0, 6.0, 8.0];
/// let (lower, upper) = stats::z_interval(&data, 0.95).unwrap();
/// assert!((lower - 2.808693648558546).abs() < 1e-6);
/// assert!((upper - 7.191306351441455).abs() < 1e-6);
/// ```
pub fn z_interval<T: AsRef<[f64]>>(data: T, confidence_lvl: f64) -> Result<(f64, f64)> {
    inference::z_interval_impl(data.as_ref(), confidence_lvl)
}

/// 平均差の2標本z信頼区間を計算（等分散を仮定）
///
/// # 説明
/// (mean_x - mean_y) ± 正規分布の分位点(1-α/2) × sqrt(var_x/nx + var_y/ny)
/// の区間を返します。分散は母分散を使用します。2標本は独立した
/// グループであり、長さが一致する必要はありません。
///
/// # 例
/// ```rust
/// use staty::stats;
///
/// let x = vec![2.0, 4.0, 6.0, 8.0];
/// let y = vec![3.0, 5.0, 7.0, 9.0];
/// let (lower, upper) = stats::z_interval_equal_var(&x, &y, 0.95).unwrap();
/// assert!((lower + 4.098975161522808).abs() < 1e-6);
/// assert!((upper - 2.098975161522808).abs() < 1e-6);
/// ```
pub fn z_interval_equal_var<T: AsRef<[f64]>, U: AsRef<[f64]>>(
    x: T,
    y: U,
    confidence_lvl: f64,
) -> Result<(f64, f64)> {
    inference::z_interval_equal_var_impl(x.as_ref(), y.as_ref(), confidence_lvl)
}

/// 1標本のt信頼区間を計算
///
/// # 説明
/// 平均 ± t分布の分位点(1-α/2, 自由度 n-1) × 標本標準誤差 の区間を
/// 返します。
///
/// # 例
/// ```rust
/// use staty::stats;
///
/// let data = vec![2.0, 4.0, 6.0, 8.0];
/// let (lower, upper) = stats::t_interval(&data, 0.95).unwrap();
/// assert!((lower - 0.891479486478242).abs() < 1e-6);
/// assert!((upper - 9.108520513521757).abs() < 1e-6);
/// ```
pub fn t_interval<T: AsRef<[f64]>>(data: T, confidence_lvl: f64) -> Result<(f64, f64)> {
    inference::t_interval_impl(data.as_ref(), confidence_lvl)
}

/// 平均差の2標本t信頼区間を計算（等分散を仮定）
///
/// # 説明
/// (mean_x - mean_y) ± t分布の分位点(1-α/2, 自由度 nx+ny-2) ×
/// sqrt(プールされた分散 × (1/nx + 1/ny)) の区間を返します。
///
/// # 例
/// ```rust
/// use staty::stats;
///
/// let x = vec![2.0, 4.0, 6.0, 8.0];
/// let y = vec![3.0, 5.0, 7.0, 9.0];
/// let (lower, upper) = stats::t_interval_equal_var(&x, &y, 0.95).unwrap();
/// assert!((lower + 5.467429386032912).abs() < 1e-6);
/// assert!((upper - 3.4674293860329124).abs() < 1e-6);
/// ```
pub fn t_interval_equal_var<T: AsRef<[f64]>, U: AsRef<[f64]>>(
    x: T,
    y: U,
    confidence_lvl: f64,
) -> Result<(f64, f64)> {
    inference::t_interval_equal_var_impl(x.as_ref(), y.as_ref(), confidence_lvl)
}

/// 中央値の計算結果
#[derive(Debug, Clone, PartialEq)]
pub enum Median<T> {
    /// 奇数長データの中央の要素
    Element(T),
    /// 偶数長の数値データにおける中央2要素の平均
    Midpoint(f64),
    /// 偶数長の非数値データにおける中央の2要素
    Pair(T, T),
}

/// 最頻値の計算結果
#[derive(Debug, Clone, PartialEq)]
pub enum Mode<T> {
    /// 単一の最頻値
    Unique(T),
    /// 同数で並んだ複数の最頻値（頻度集計での出現順）
    Multiple(Vec<T>),
}

/// 中央値計算の対象となる要素型の能力を表すトレイト
///
/// 数値型は偶数長データで中央2要素の平均（中点）を計算でき、
/// 文字列のような順序のみを持つ型は中点を持ちません。
pub trait MedianElement: Clone + PartialOrd {
    /// 中央2要素の平均値。中点を持たない型はNoneを返す
    fn midpoint(lower: &Self, upper: &Self) -> Option<f64>;
}

macro_rules! impl_median_numeric {
    ($($t:ty),* $(,)?) => {
        $(
            impl MedianElement for $t {
                fn midpoint(lower: &Self, upper: &Self) -> Option<f64> {
                    Some((lower.to_f64()? + upper.to_f64()?) / 2.0)
                }
            }
        )*
    };
}

impl_median_numeric!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl MedianElement for String {
    fn midpoint(_lower: &Self, _upper: &Self) -> Option<f64> {
        None
    }
}

impl MedianElement for &str {
    fn midpoint(_lower: &Self, _upper: &Self) -> Option<f64> {
        None
    }
}

/// 最小データ数を検証する
///
/// 散らばりを伴う統計量はすべて2要素以上を要求する。計算より先に
/// 呼び出し、部分的な結果を返さない。
pub(crate) fn validate_min_len(n: usize) -> Result<()> {
    if n < 2 {
        return Err(Error::InsufficientData(
            "統計量の計算には少なくとも2つのデータポイントが必要です".into(),
        ));
    }
    Ok(())
}

/// 対になった2標本の長さの一致を検証する
///
/// 各標本の最小データ数を個別に検証した上で、長さの一致を確認する。
pub(crate) fn validate_equal_len(n1: usize, n2: usize) -> Result<()> {
    validate_min_len(n1)?;
    validate_min_len(n2)?;
    if n1 != n2 {
        return Err(Error::DimensionMismatch(format!(
            "データ長が一致しません: x={}, y={}",
            n1, n2
        )));
    }
    Ok(())
}
