use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::settings::Budget;
use crate::store::records::RecordStore;
use crate::store::StorageBackend;
use crate::summary::SpendSummary;
use chrono::NaiveDate;

pub fn run<B: StorageBackend>(
    store: &RecordStore<B>,
    window_days: u32,
    reference: NaiveDate,
) -> Result<CmdResult> {
    let summary = SpendSummary::compute(store.get_all(), window_days, reference);

    let mut result = CmdResult::default();
    if let Some(Budget(threshold)) = Budget::load(store.backend())? {
        result.budget = Some(threshold);
        if summary.total_spent > threshold {
            result.add_message(CmdMessage::warning(format!(
                "Total spent {:.2} is over your budget of {:.2}",
                summary.total_spent, threshold
            )));
        }
    }
    Ok(result.with_summary(summary))
}
