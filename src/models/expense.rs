use chrono::{DateTime, Utc};

lounge_record! {
    /// An operating expense of the lounge.
    pub struct Expense {
        pub category: String => "category",
        pub description: String => "description",
        /// Decimal amount as a string.
        pub amount: String => "amount",
        pub date: DateTime<Utc> => "date",
    },
    "expense",
    created_at => "createdAt"
}
