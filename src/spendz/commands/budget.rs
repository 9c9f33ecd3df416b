use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, SpendzError};
use crate::settings::Budget;
use crate::store::StorageBackend;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BudgetAction {
    Show,
    Set(f64),
    Clear,
}

pub fn run<B: StorageBackend>(backend: &B, action: BudgetAction) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match action {
        BudgetAction::Show => match Budget::load(backend)? {
            Some(Budget(threshold)) => {
                result.budget = Some(threshold);
            }
            None => {
                result.add_message(CmdMessage::info("No budget set."));
            }
        },
        BudgetAction::Set(threshold) => {
            if !threshold.is_finite() || threshold < 0.0 {
                return Err(SpendzError::Api(
                    "Budget must be a non-negative number".to_string(),
                ));
            }
            Budget(threshold).save(backend)?;
            result.budget = Some(threshold);
            result.add_message(CmdMessage::success(format!("Budget set to {:.2}", threshold)));
        }
        BudgetAction::Clear => {
            Budget::clear(backend)?;
            result.add_message(CmdMessage::success("Budget cleared."));
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn show_without_a_budget_reports_none() {
        let backend = MemBackend::new();
        let result = run(&backend, BudgetAction::Show).unwrap();
        assert_eq!(result.budget, None);
        assert!(result.messages[0].content.contains("No budget"));
    }

    #[test]
    fn set_then_show_round_trips() {
        let backend = MemBackend::new();
        run(&backend, BudgetAction::Set(150.0)).unwrap();
        let result = run(&backend, BudgetAction::Show).unwrap();
        assert_eq!(result.budget, Some(150.0));
    }

    #[test]
    fn rejects_negative_budgets() {
        let backend = MemBackend::new();
        let result = run(&backend, BudgetAction::Set(-5.0));
        assert!(matches!(result, Err(SpendzError::Api(_))));
        assert_eq!(Budget::load(&backend).unwrap(), None);
    }

    #[test]
    fn clear_removes_the_budget() {
        let backend = MemBackend::new();
        run(&backend, BudgetAction::Set(150.0)).unwrap();
        run(&backend, BudgetAction::Clear).unwrap();
        let result = run(&backend, BudgetAction::Show).unwrap();
        assert_eq!(result.budget, None);
    }
}
