//! Periodic `~` rule declarations, emitted once ahead of dated entries.

use crate::types::{Amount, Header, Posting, Transaction};

/// The fixed recurring rules, in emission order.
pub fn templates() -> Vec<Transaction> {
    vec![
        periodic(
            "Monthly",
            vec![
                Posting::new("income", Amount::whole(-100)),
                Posting::new("expenses:fun", Amount::whole(200)),
                Posting::new("expenses:gas", Amount::whole(200)),
                Posting::elided("assets:checking"),
            ],
        ),
        periodic(
            "Monthly from 2000/1/1 to 2010/1/1",
            vec![
                Posting::new("expenses:rent", Amount::whole(1000)),
                Posting::elided("assets:checking"),
            ],
        ),
        periodic(
            "Monthly from 2010/1/2 to 2020/1/1",
            vec![
                Posting::new("expenses:rent", Amount::whole(1500)),
                Posting::elided("assets:checking"),
            ],
        ),
        periodic(
            "Weekly",
            vec![
                Posting::new("expenses:groceries", Amount::whole(100)),
                Posting::elided("assets:checking"),
            ],
        ),
    ]
}

fn periodic(rule: &'static str, postings: Vec<Posting>) -> Transaction {
    Transaction {
        header: Header::Periodic(rule),
        payee: None,
        postings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn templates_render_in_ledger_syntax() {
        let text: String = templates().iter().map(ToString::to_string).collect();
        assert!(text.starts_with("~Monthly\n  income   -$100\n  expenses:fun   $200\n"));
        assert!(text.contains("~Monthly from 2010/1/2 to 2020/1/1\n  expenses:rent   $1500\n  assets:checking\n\n"));
        assert!(text.ends_with("~Weekly\n  expenses:groceries   $100\n  assets:checking\n\n"));
    }

    #[test]
    fn every_template_ends_with_elided_balance() {
        for txn in templates() {
            let last = txn.postings.last().unwrap();
            assert_eq!(last.account, "assets:checking");
            assert_eq!(last.amount, None);
        }
    }
}
