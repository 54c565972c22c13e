use rust_decimal::Decimal;

use crate::statement::{Operation, OperationKind};

/// Fold a statement into its signed total: credits add, debits subtract.
///
/// Pure; an empty statement has a balance of zero.
pub fn balance<'a>(operations: impl IntoIterator<Item = &'a Operation>) -> Decimal {
    operations
        .into_iter()
        .fold(Decimal::ZERO, |acc, op| match op.kind {
            OperationKind::Credit => acc + op.amount.value(),
            OperationKind::Debit => acc - op.amount.value(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Amount;
    use chrono::Utc;

    fn op(kind: OperationKind, amount: i64) -> Operation {
        Operation {
            amount: Amount::new(Decimal::new(amount, 0)).unwrap(),
            description: None,
            created_at: Utc::now(),
            kind,
        }
    }

    #[test]
    fn empty_statement_has_zero_balance() {
        let empty: Vec<Operation> = Vec::new();
        assert_eq!(balance(&empty), Decimal::ZERO);
    }

    #[test]
    fn credits_add_and_debits_subtract() {
        let ops = vec![
            op(OperationKind::Credit, 100),
            op(OperationKind::Debit, 30),
            op(OperationKind::Credit, 5),
        ];
        assert_eq!(balance(&ops), Decimal::new(75, 0));
    }

    #[test]
    fn fold_does_not_clamp_at_zero() {
        // Raw folds over arbitrary operations may go negative; only the
        // ledger refuses to append such a debit.
        let ops = vec![op(OperationKind::Debit, 10)];
        assert_eq!(balance(&ops), Decimal::new(-10, 0));
    }
}
