//! 機械学習機能の基本的なテスト

#[cfg(test)]
mod tests {
    use ndarray::array;
    use staty::error::Error;
    use staty::ml::metrics::classification::accuracy_score;
    use staty::ml::models::{LogisticRegression, LogisticRegressionConfigBuilder};

    #[test]
    fn test_fit_and_predict_separable_data() {
        // 1特徴量の線形分離可能なデータ（符号でクラスが決まる）
        let x = array![[-2.0, -1.5, -1.0, -0.5, 0.5, 1.0, 1.5, 2.0]];
        let y = array![[0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0]];

        let mut model = LogisticRegression::new();
        model.fit(&x, &y);

        let predictions = model.predict(&x).unwrap();
        let y_true: Vec<f64> = y.row(0).to_vec();
        let y_pred: Vec<f64> = predictions.to_vec();

        let accuracy = accuracy_score(&y_true, &y_pred).unwrap();
        assert!((accuracy - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_fit_records_decreasing_costs() {
        let x = array![[-2.0, -1.0, 1.0, 2.0]];
        let y = array![[0.0, 0.0, 1.0, 1.0]];

        let mut model = LogisticRegression::new();
        model.fit(&x, &y);

        // デフォルトの2000反復では100反復ごとに20点記録される
        let costs = model.costs();
        assert_eq!(costs.len(), 20);
        assert!(costs[costs.len() - 1] < costs[0]);

        // 初期パラメータ（w=0, b=0）のコストはln(2)
        assert!((costs[0] - std::f64::consts::LN_2).abs() < 1e-10);
    }

    #[test]
    fn test_fit_with_two_features() {
        let x = array![
            [1.0, 2.0, -1.0, -2.0],
            [0.5, 1.0, -0.5, -1.0]
        ];
        let y = array![[1.0, 1.0, 0.0, 0.0]];

        let mut model = LogisticRegression::new();
        let config = LogisticRegressionConfigBuilder::new()
            .iterations(1000)
            .learning_rate(0.01)
            .build();
        model.fit_with_config(&x, &y, &config);

        let predictions = model.predict(&x).unwrap();
        let accuracy = accuracy_score(&y.row(0).to_vec(), &predictions.to_vec()).unwrap();
        assert!((accuracy - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_predict_before_fit_fails() {
        let model = LogisticRegression::new();
        let x = array![[1.0, -1.0]];

        let result = model.predict(&x);
        assert!(matches!(result, Err(Error::NotFitted(_))));
    }

    #[test]
    fn test_refit_overwrites_parameters() {
        let x = array![[-2.0, -1.0, 1.0, 2.0]];
        let y = array![[0.0, 0.0, 1.0, 1.0]];
        // ラベルを反転した学習で予測も反転する
        let y_flipped = array![[1.0, 1.0, 0.0, 0.0]];

        let config = LogisticRegressionConfigBuilder::new()
            .iterations(2000)
            .learning_rate(0.05)
            .build();

        let mut model = LogisticRegression::new();
        model.fit_with_config(&x, &y, &config);
        let first = model.predict(&x).unwrap();

        model.fit_with_config(&x, &y_flipped, &config);
        let second = model.predict(&x).unwrap();

        for (a, b) in first.iter().zip(second.iter()) {
            assert!((a + b - 1.0).abs() < 1e-10);
        }
    }

    #[test]
    fn test_accuracy_score_against_known_values() {
        let y_true = vec![1.0, 0.0, 1.0, 0.0];
        let y_pred = vec![1.0, 1.0, 1.0, 0.0];

        let accuracy = accuracy_score(&y_true, &y_pred).unwrap();
        assert!((accuracy - 0.75).abs() < 1e-10);

        let result = accuracy_score(&y_true, &[1.0, 0.0]);
        assert!(matches!(result, Err(Error::DimensionMismatch(_))));
    }
}
