//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Registered accounts. `email` carries a unique index.
    users (id) {
        /// Serial primary key.
        id -> Int4,
        /// Display name chosen at registration (5 to 10 characters).
        name -> Varchar,
        /// Login identifier, unique across users.
        email -> Varchar,
        /// bcrypt digest of the password.
        password_hash -> Varchar,
    }
}

diesel::table! {
    /// To-do items, each owned by one user.
    todos (id) {
        /// Serial primary key.
        id -> Int4,
        /// Title (3 to 100 characters).
        title -> Varchar,
        /// Completion flag, false on creation unless supplied.
        completed -> Bool,
        /// Owning user; foreign key to `users.id`.
        user_id -> Int4,
    }
}

diesel::joinable!(todos -> users (user_id));

diesel::allow_tables_to_appear_in_same_query!(todos, users);
