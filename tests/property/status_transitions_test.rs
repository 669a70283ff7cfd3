//! Property-based tests for the import status model.
//!
//! For any driver-shaped sequence of operations, the status record keeps
//! its bookkeeping invariants at every step: succeeded never outruns the
//! cursor, terminal phases carry the right counts, and reset always lands
//! back on the Idle zero-state.

use pocketbin::importer::status_model::ImportStatusModel;
use pocketbin::types::bookmark::PocketRecord;
use pocketbin::types::status::ImportPhase;
use proptest::prelude::*;

/// Operations the driver can perform against the model.
#[derive(Debug, Clone)]
enum StatusOp {
    BeginBatch(usize),
    Succeed,
    SucceedWithWarning,
    Fail,
    Complete,
    Reset,
}

/// Strategy biased toward successes so runs actually make progress.
fn arb_status_ops() -> impl Strategy<Value = Vec<StatusOp>> {
    prop::collection::vec(
        prop_oneof![
            2 => (0..6usize).prop_map(StatusOp::BeginBatch),
            5 => Just(StatusOp::Succeed),
            1 => Just(StatusOp::SucceedWithWarning),
            1 => Just(StatusOp::Fail),
            2 => Just(StatusOp::Complete),
            1 => Just(StatusOp::Reset),
        ],
        1..50,
    )
}

fn record(index: usize) -> PocketRecord {
    PocketRecord {
        title: format!("Record {}", index),
        url: format!("http://r{}.example.com", index),
        time_added: "1700000000".to_string(),
        tags: String::new(),
        status: "unread".to_string(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn status_invariants_hold_under_any_driver_sequence(ops in arb_status_ops()) {
        let mut model = ImportStatusModel::new();
        // Shadow model of the driver's discipline: next item to process and
        // whether a run is open.
        let mut importing = false;
        let mut next: usize = 0;
        let mut total: usize = 0;

        for op in &ops {
            match op {
                StatusOp::BeginBatch(n) => {
                    model.begin_batch(*n);
                    importing = true;
                    next = 0;
                    total = *n;
                }
                StatusOp::Succeed | StatusOp::SucceedWithWarning => {
                    if importing && next < total {
                        model.begin_item(next);
                        let warning = matches!(op, StatusOp::SucceedWithWarning)
                            .then(|| "mark-read call failed: 500".to_string());
                        model.record_success(record(next), warning);
                        next += 1;
                    }
                }
                StatusOp::Fail => {
                    if importing && next < total {
                        model.begin_item(next);
                        model.fail(next, "create call failed: 502 Bad Gateway");
                        importing = false;
                    }
                }
                StatusOp::Complete => {
                    if importing && next == total {
                        model.complete();
                        importing = false;
                    }
                }
                StatusOp::Reset => {
                    model.reset();
                    importing = false;
                }
            }

            let status = model.status();
            match status.phase {
                ImportPhase::Idle => {
                    prop_assert_eq!(status.cursor, 0);
                    prop_assert_eq!(status.total, 0);
                    prop_assert!(status.succeeded.is_empty());
                    prop_assert!(status.last_error.is_none());
                    prop_assert!(status.warnings.is_empty());
                }
                ImportPhase::Importing => {
                    prop_assert!(status.succeeded.len() <= status.cursor + 1);
                    prop_assert!(status.succeeded.len() <= status.total);
                    if status.total > 0 {
                        prop_assert!(status.cursor < status.total);
                    }
                    prop_assert!(status.last_error.is_none());
                }
                ImportPhase::Completed => {
                    prop_assert_eq!(status.succeeded.len(), status.total);
                    prop_assert_eq!(status.cursor, status.total);
                    prop_assert!(status.last_error.is_none());
                }
                ImportPhase::Failed => {
                    // The cursor names the first failing item; everything
                    // before it succeeded, in order.
                    prop_assert!(status.cursor < status.total);
                    prop_assert_eq!(status.succeeded.len(), status.cursor);
                    prop_assert!(status.last_error.is_some());
                }
            }

            // Warnings always point at items within the batch.
            for warning in &status.warnings {
                prop_assert!(warning.index < status.total.max(1));
            }
        }
    }

    #[test]
    fn reset_always_lands_on_the_idle_zero_state(ops in arb_status_ops()) {
        let mut model = ImportStatusModel::new();
        let mut importing = false;
        let mut next: usize = 0;
        let mut total: usize = 0;

        for op in &ops {
            match op {
                StatusOp::BeginBatch(n) => {
                    model.begin_batch(*n);
                    importing = true;
                    next = 0;
                    total = *n;
                }
                StatusOp::Succeed | StatusOp::SucceedWithWarning => {
                    if importing && next < total {
                        model.begin_item(next);
                        model.record_success(record(next), None);
                        next += 1;
                    }
                }
                StatusOp::Fail => {
                    if importing && next < total {
                        model.begin_item(next);
                        model.fail(next, "boom");
                        importing = false;
                    }
                }
                StatusOp::Complete => {
                    if importing && next == total {
                        model.complete();
                        importing = false;
                    }
                }
                StatusOp::Reset => {
                    model.reset();
                    importing = false;
                }
            }
        }

        // Whatever state the sequence reached, reset discards it entirely.
        model.reset();
        let status = model.status();
        prop_assert_eq!(status.phase, ImportPhase::Idle);
        prop_assert_eq!(status.cursor, 0);
        prop_assert_eq!(status.total, 0);
        prop_assert!(status.succeeded.is_empty());
        prop_assert!(status.last_error.is_none());
        prop_assert!(status.warnings.is_empty());
    }
}
