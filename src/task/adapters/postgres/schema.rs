//! Diesel schema for task persistence.

diesel::table! {
    /// Persisted to-do task records.
    tasks (id) {
        /// Storage-assigned task identifier.
        id -> Int8,
        /// Task title.
        #[max_length = 255]
        title -> Varchar,
        /// Optional free-form description.
        #[max_length = 1000]
        description -> Nullable<Varchar>,
        /// Task status in storage form.
        #[max_length = 20]
        status -> Varchar,
    }
}
