use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::{
    errors::Error,
    types::{parse_currency, Record, RecordStore},
};

/// Advice returned when total expenses exceed total income
pub const OVERSPENDING_ADVICE: &str = "Consider reducing your expenses.";
/// Advice returned when spending stays within income
pub const WITHIN_INCOME_ADVICE: &str = "Your spending is within your income. Good job!";

impl RecordStore {
    /// Sums spending across all records, grouped by category.
    ///
    /// Categories are discovered from the data; a category with no records
    /// simply never appears, and records with an empty `category` cell are
    /// skipped. Each result is built fresh from the loaded records.
    ///
    /// # Errors
    /// [`Error::MissingColumn`] if `category` or `spending` is absent from
    /// the loaded schema; [`Error::Parse`] for an unparseable spending value.
    pub fn total_expenses(&self) -> Result<BTreeMap<String, Decimal>, Error> {
        self.grouped_expenses(|_| true)
    }

    /// Sums spending over records whose `category` exactly equals `category`.
    ///
    /// Matching is case-sensitive with no fuzzy fallback. A category absent
    /// from the data is an empty result, not a fault: the sum is zero.
    ///
    /// # Errors
    /// [`Error::MissingColumn`] if `category` or `spending` is absent from
    /// the loaded schema; [`Error::Parse`] for an unparseable spending value.
    pub fn spending_by_category(&self, category: &str) -> Result<Decimal, Error> {
        self.require_column("category")?;
        self.require_column("spending")?;
        let mut total = Decimal::ZERO;
        for record in &self.records {
            if record.cell("category") == Some(category) {
                total += spending_of(record)?;
            }
        }
        Ok(total)
    }

    /// Sums spending by category over records matching `month` exactly.
    ///
    /// Records with an empty `month` cell never match. Returns an empty
    /// mapping when no record matches the month.
    ///
    /// # Errors
    /// [`Error::MissingColumn`] if `month`, `category`, or `spending` is
    /// absent from the loaded schema; [`Error::Parse`] for an unparseable
    /// spending value among the matching records.
    pub fn analytics_by_month(&self, month: &str) -> Result<BTreeMap<String, Decimal>, Error> {
        self.require_column("month")?;
        self.grouped_expenses(|record| record.cell("month") == Some(month))
    }

    /// Sums spending by category over records matching `location` exactly.
    ///
    /// Same algorithm as [`analytics_by_month`](RecordStore::analytics_by_month),
    /// filtering on `location` instead.
    ///
    /// # Errors
    /// [`Error::MissingColumn`] if `location`, `category`, or `spending` is
    /// absent from the loaded schema; [`Error::Parse`] for an unparseable
    /// spending value among the matching records.
    pub fn analytics_by_location(
        &self,
        location: &str,
    ) -> Result<BTreeMap<String, Decimal>, Error> {
        self.require_column("location")?;
        self.grouped_expenses(|record| record.cell("location") == Some(location))
    }

    /// Compares total income against total spending and returns advice.
    ///
    /// Both totals are flat sums over every record, normalized through
    /// [`parse_currency`]. Note the `income` cell is summed per record, so a
    /// recurring monthly figure repeated on each row counts once per row.
    /// An empty store yields the within-income message.
    ///
    /// # Errors
    /// [`Error::MissingColumn`] if `spending` or `income` is absent from the
    /// loaded schema; [`Error::Parse`] for an unparseable money value.
    pub fn recommendations(&self) -> Result<&'static str, Error> {
        self.require_column("spending")?;
        self.require_column("income")?;
        let mut total_income = Decimal::ZERO;
        let mut total_expenses = Decimal::ZERO;
        for record in &self.records {
            total_expenses += spending_of(record)?;
            total_income += parse_currency(record.cell("income").unwrap_or(""))?;
        }
        if total_expenses > total_income {
            Ok(OVERSPENDING_ADVICE)
        } else {
            Ok(WITHIN_INCOME_ADVICE)
        }
    }

    /// Groups spending by category over records accepted by `filter`,
    /// accumulating each normalized amount into a running sum per category.
    fn grouped_expenses<F>(&self, filter: F) -> Result<BTreeMap<String, Decimal>, Error>
    where
        F: Fn(&Record) -> bool,
    {
        self.require_column("category")?;
        self.require_column("spending")?;
        let mut totals = BTreeMap::new();
        for record in &self.records {
            if !filter(record) {
                continue;
            }
            // Records without a category cannot be grouped; they still count
            // toward the flat totals in recommendations()
            let Some(category) = record.cell("category") else {
                continue;
            };
            let amount = spending_of(record)?;
            *totals.entry(category.to_string()).or_insert(Decimal::ZERO) += amount;
        }
        Ok(totals)
    }
}

/// Normalizes one record's spending cell. Every record must carry a
/// parseable spending value; an empty cell is a [`Error::Parse`].
fn spending_of(record: &Record) -> Result<Decimal, Error> {
    parse_currency(record.cell("spending").unwrap_or(""))
}
