//! 機械学習モデルモジュール
//!
//! バッチ勾配降下法で学習するロジスティック回帰モデルを提供します。

use ndarray::{Array1, Array2, Axis};

use crate::error::{Error, Result};

/// ロジスティック回帰の学習設定
#[derive(Debug, Clone)]
pub struct LogisticRegressionConfig {
    /// 勾配降下法の反復回数
    pub iterations: usize,
    /// 学習率
    pub learning_rate: f64,
    /// 100反復ごとのコストをログに出力するかどうか
    pub print_cost: bool,
}

impl Default for LogisticRegressionConfig {
    fn default() -> Self {
        LogisticRegressionConfig {
            iterations: 2000,
            learning_rate: 0.001,
            print_cost: false,
        }
    }
}

/// LogisticRegressionConfigのビルダー
pub struct LogisticRegressionConfigBuilder {
    config: LogisticRegressionConfig,
}

impl LogisticRegressionConfigBuilder {
    pub fn new() -> Self {
        LogisticRegressionConfigBuilder {
            config: LogisticRegressionConfig::default(),
        }
    }

    pub fn iterations(mut self, iterations: usize) -> Self {
        self.config.iterations = iterations;
        self
    }

    pub fn learning_rate(mut self, learning_rate: f64) -> Self {
        self.config.learning_rate = learning_rate;
        self
    }

    pub fn print_cost(mut self, print_cost: bool) -> Self {
        self.config.print_cost = print_cost;
        self
    }

    pub fn build(self) -> LogisticRegressionConfig {
        self.config
    }
}

impl Default for LogisticRegressionConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// シグモイド関数を要素ごとに適用
fn sigmoid(z: &Array2<f64>) -> Array2<f64> {
    z.mapv(|v| 1.0 / (1.0 + (-v).exp()))
}

/// 順伝播によりコストと勾配を計算
///
/// `w`は形状(n, 1)の重み、`x`は形状(n, m)の入力、`y`は形状(1, m)の
/// 0/1ラベル。形状が互換でない場合は線形代数層（ndarray）の`dot`が
/// パニックする。
fn propagate(w: &Array2<f64>, b: f64, x: &Array2<f64>, y: &Array2<f64>) -> (Array2<f64>, f64, f64) {
    let m_inv = 1.0 / x.ncols() as f64;
    let a = sigmoid(&(w.t().dot(x) + b));

    let log_a = a.mapv(f64::ln);
    let log_not_a = a.mapv(|v| (1.0 - v).ln());
    let not_y = y.mapv(|v| 1.0 - v);
    let cost = -m_inv * (y * &log_a + not_y * &log_not_a).sum();

    let diff = &a - y;
    let dw = x.dot(&diff.t()) * m_inv;
    let db = diff.sum() * m_inv;

    (dw, db, cost)
}

/// バッチ勾配降下法で重みとバイアスを最適化
///
/// 収束判定は行わず、常に設定された反復回数を最後まで実行する。
/// コストは100反復ごと（0回目を含む）に記録する。
fn optimize(
    mut w: Array2<f64>,
    mut b: f64,
    x: &Array2<f64>,
    y: &Array2<f64>,
    config: &LogisticRegressionConfig,
) -> (Array2<f64>, f64, Vec<f64>) {
    let mut costs = Vec::new();

    for i in 0..config.iterations {
        let (dw, db, cost) = propagate(&w, b, x, y);

        w.scaled_add(-config.learning_rate, &dw);
        b -= config.learning_rate * db;

        if i % 100 == 0 {
            costs.push(cost);

            if config.print_cost {
                log::info!("反復{}回目のコスト: {}", i, cost);
            }
        }
    }

    (w, b, costs)
}

/// ロジスティック回帰による二値分類モデル
///
/// 学習済みパラメータはインスタンスが所有し、`fit`のたびに上書きされる。
/// 内部でロックは行わないため、並行して学習する場合は呼び出し側で
/// インスタンスを分けること。
pub struct LogisticRegression {
    /// 重みベクトル（形状: 特徴量数 x 1）
    weights: Option<Array2<f64>>,
    /// バイアス
    bias: f64,
    /// 学習中に100反復ごとに記録したコストの履歴
    costs: Vec<f64>,
}

impl LogisticRegression {
    /// 新しいロジスティック回帰モデルを作成
    pub fn new() -> Self {
        LogisticRegression {
            weights: None,
            bias: 0.0,
            costs: Vec::new(),
        }
    }

    /// デフォルト設定（反復2000回、学習率0.001）でモデルを学習
    ///
    /// `x`は形状(特徴量数, サンプル数)、`y`は形状(1, サンプル数)の
    /// 0/1ラベル。重みはゼロベクトル、バイアスは0から開始する。
    pub fn fit(&mut self, x: &Array2<f64>, y: &Array2<f64>) {
        self.fit_with_config(x, y, &LogisticRegressionConfig::default())
    }

    /// 指定した設定でモデルを学習
    pub fn fit_with_config(
        &mut self,
        x: &Array2<f64>,
        y: &Array2<f64>,
        config: &LogisticRegressionConfig,
    ) {
        let w = Array2::zeros((x.nrows(), 1));
        let b = 0.0;

        let (w, b, costs) = optimize(w, b, x, y, config);

        self.weights = Some(w);
        self.bias = b;
        self.costs = costs;
    }

    /// 学習済みパラメータで入力の各サンプルを0/1に分類
    ///
    /// 活性化が0.5より大きいサンプルをクラス1、それ以外をクラス0とする。
    pub fn predict(&self, x: &Array2<f64>) -> Result<Array1<f64>> {
        let w = self.weights.as_ref().ok_or_else(|| {
            Error::NotFitted("予測の前にfitでモデルを学習させる必要があります".into())
        })?;

        let a = sigmoid(&(w.t().dot(x) + self.bias));
        Ok(a.index_axis(Axis(0), 0)
            .mapv(|p| if p > 0.5 { 1.0 } else { 0.0 }))
    }

    /// 学習中に記録したコストの履歴（100反復ごと）
    pub fn costs(&self) -> &[f64] {
        &self.costs
    }
}

impl Default for LogisticRegression {
    fn default() -> Self {
        Self::new()
    }
}
