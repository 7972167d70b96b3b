mod support {
    pub mod testkit;
}

use makuta_client::commands::stats::{self, StatsOptions};
use makuta_client::commands::wallet::{self, WalletOptions};
use serde_json::Value;
use support::testkit::{march_sample, snapshot_with_transactions, temp_workspace, write_snapshot};

#[test]
fn usd_breakdown_excludes_cdf_rows_and_labels_types() {
    let workspace = temp_workspace("makuta-stats");
    assert!(workspace.is_ok());
    if let Ok((_guard, root)) = workspace {
        let path = write_snapshot(&root, &snapshot_with_transactions(march_sample()));

        let result = stats::run_with_options(StatsOptions {
            snapshot: path.display().to_string(),
            currency: "USD".to_string(),
            ..StatsOptions::default()
        });
        assert!(result.is_ok());
        if let Ok(envelope) = result {
            let rows = envelope.data["rows"].as_array().cloned().unwrap_or_default();
            assert_eq!(rows.len(), 2);

            let purchase = &rows[0];
            assert_eq!(purchase["label"], "Achat");
            assert_eq!(purchase["total_amount"], 120.5);
            assert_eq!(purchase["count"], 3);

            // No CDF magnitude may leak into a USD view.
            for row in &rows {
                assert_ne!(row["total_amount"], 300000.0);
            }
        }
    }
}

#[test]
fn amount_and_count_series_agree_on_label_order() {
    let workspace = temp_workspace("makuta-stats");
    assert!(workspace.is_ok());
    if let Ok((_guard, root)) = workspace {
        let path = write_snapshot(&root, &snapshot_with_transactions(march_sample()));

        let result = stats::run_with_options(StatsOptions {
            snapshot: path.display().to_string(),
            currency: "USD".to_string(),
            ..StatsOptions::default()
        });
        assert!(result.is_ok());
        if let Ok(envelope) = result {
            let amounts = envelope.data["amounts"]["labels"].clone();
            let counts = envelope.data["counts"]["labels"].clone();
            assert_eq!(amounts, counts);
            assert_eq!(
                amounts,
                Value::Array(vec!["Achat".into(), "Retrait".into()])
            );
        }
    }
}

#[test]
fn date_window_gates_stats_rows_by_coverage() {
    let workspace = temp_workspace("makuta-stats");
    assert!(workspace.is_ok());
    if let Ok((_guard, root)) = workspace {
        let path = write_snapshot(&root, &snapshot_with_transactions(march_sample()));

        // Withdrawal coverage ends 10/03; a window opening on the 15th
        // keeps only the purchase row.
        let result = stats::run_with_options(StatsOptions {
            snapshot: path.display().to_string(),
            currency: "USD".to_string(),
            from: Some("2024-03-15".to_string()),
            ..StatsOptions::default()
        });
        assert!(result.is_ok());
        if let Ok(envelope) = result {
            let rows = envelope.data["rows"].as_array().cloned().unwrap_or_default();
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0]["label"], "Achat");
        }

        // A window that predates all activity must change the output, not
        // silently mirror the unbounded query.
        let result = stats::run_with_options(StatsOptions {
            snapshot: path.display().to_string(),
            currency: "USD".to_string(),
            from: Some("1990-01-01".to_string()),
            to: Some("1990-01-31".to_string()),
            ..StatsOptions::default()
        });
        assert!(result.is_ok());
        if let Ok(envelope) = result {
            let rows = envelope.data["rows"].as_array().cloned().unwrap_or_default();
            assert!(rows.is_empty());
        }
    }
}

#[test]
fn unsupported_currency_is_rejected_before_reading_the_snapshot() {
    let result = stats::run_with_options(StatsOptions {
        snapshot: "unused.json".to_string(),
        currency: "EUR".to_string(),
        ..StatsOptions::default()
    });
    assert!(result.is_err());
    if let Err(error) = result {
        assert_eq!(error.code, "invalid_argument");
    }
}

#[test]
fn wallet_summary_renders_currency_displays() {
    let workspace = temp_workspace("makuta-wallet");
    assert!(workspace.is_ok());
    if let Ok((_guard, root)) = workspace {
        let path = write_snapshot(&root, &snapshot_with_transactions(march_sample()));

        let usd = wallet::run_with_options(WalletOptions {
            snapshot: path.display().to_string(),
            currency: "USD".to_string(),
        });
        assert!(usd.is_ok());
        if let Ok(envelope) = usd {
            assert_eq!(envelope.data["balance_display"], "$125.40");
            assert_eq!(envelope.data["total_earned_display"], "$500.00");
        }

        let cdf = wallet::run_with_options(WalletOptions {
            snapshot: path.display().to_string(),
            currency: "CDF".to_string(),
        });
        assert!(cdf.is_ok());
        if let Ok(envelope) = cdf {
            assert_eq!(envelope.data["balance_display"], "250,000 FC");
            assert_eq!(envelope.data["total_earned_display"], "1,000,000 FC");
        }
    }
}
