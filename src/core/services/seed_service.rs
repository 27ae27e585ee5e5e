use chrono::{Duration, NaiveDate};

use crate::domain::{Budget, Category, MonthKey, TransactionDraft, TransactionKind};
use crate::store::{BudgetStore, TransactionStore};

use super::{ServiceError, ServiceResult};

/// Counts of what a seeding run wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub transactions: usize,
    pub budgets: usize,
}

/// Populates empty stores with a realistic demo data set: two months of
/// transactions plus budgets for the current month.
pub struct SeedService;

impl SeedService {
    /// Seeds both stores. Refuses to run when transactions already exist so
    /// a demo run never mixes into real records.
    pub fn seed(
        transactions: &dyn TransactionStore,
        budgets: &dyn BudgetStore,
        today: NaiveDate,
    ) -> ServiceResult<SeedReport> {
        let existing = transactions.list()?.len();
        if existing > 0 {
            return Err(ServiceError::Invalid(format!(
                "store already has {existing} transactions; reset before reseeding"
            )));
        }

        let drafts = sample_transactions(today);
        let month_budgets = sample_budgets(MonthKey::from_date(today));
        let report = SeedReport {
            transactions: drafts.len(),
            budgets: month_budgets.len(),
        };

        for draft in drafts {
            draft.validate()?;
            transactions.insert(draft)?;
        }
        for budget in month_budgets {
            budgets.upsert(budget)?;
        }
        tracing::info!(
            transactions = report.transactions,
            budgets = report.budgets,
            "demo data seeded"
        );
        Ok(report)
    }

    /// Deletes every stored record from both collections.
    pub fn reset(
        transactions: &dyn TransactionStore,
        budgets: &dyn BudgetStore,
    ) -> ServiceResult<()> {
        for txn in transactions.list()? {
            transactions.delete(txn.id)?;
        }
        for budget in budgets.list()? {
            let (category, month) = budget.key();
            budgets.delete(category, month)?;
        }
        tracing::info!("all records cleared");
        Ok(())
    }
}

fn sample_transactions(today: NaiveDate) -> Vec<TransactionDraft> {
    let days_ago = |days: i64| today - Duration::days(days);
    let expense = |amount: f64, description: &str, category: Category, date: NaiveDate| {
        TransactionDraft::new(amount, date, description, TransactionKind::Expense, category)
    };
    let income = |amount: f64, description: &str, date: NaiveDate| {
        TransactionDraft::new(
            amount,
            date,
            description,
            TransactionKind::Income,
            Category::Income,
        )
    };

    let last_month = MonthKey::from_date(today).prev();
    let mut drafts = vec![
        income(2500.0, "Salary", today),
        expense(120.0, "Groceries", Category::Food, days_ago(2)),
        expense(45.0, "Dinner", Category::Food, days_ago(3)),
        income(200.0, "Freelance work", days_ago(5)),
        expense(80.0, "Utilities", Category::Utilities, days_ago(7)),
        expense(950.0, "Rent payment", Category::Housing, days_ago(10)),
        expense(35.0, "Gas", Category::Transportation, days_ago(4)),
        expense(65.0, "Cinema and dinner", Category::Entertainment, days_ago(6)),
        expense(120.0, "New shoes", Category::Shopping, days_ago(8)),
        expense(85.0, "Doctor visit", Category::Healthcare, days_ago(12)),
        expense(200.0, "Online course", Category::Education, days_ago(15)),
        expense(300.0, "Stock investment", Category::Investments, days_ago(20)),
    ];
    drafts.push(income(2500.0, "Last month salary", last_month.first_day()));
    drafts.push(expense(
        900.0,
        "Last month rent",
        Category::Housing,
        last_month.first_day() + Duration::days(2),
    ));
    drafts.push(expense(
        450.0,
        "Last month groceries",
        Category::Food,
        last_month.first_day() + Duration::days(5),
    ));
    drafts
}

fn sample_budgets(month: MonthKey) -> Vec<Budget> {
    [
        (Category::Housing, 1000.0),
        (Category::Food, 500.0),
        (Category::Transportation, 200.0),
        (Category::Entertainment, 150.0),
        (Category::Shopping, 300.0),
        (Category::Utilities, 250.0),
        (Category::Healthcare, 100.0),
    ]
    .into_iter()
    .map(|(category, amount)| Budget::new(category, amount, month))
    .collect()
}
