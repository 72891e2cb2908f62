//! To-do items and the values used to create and modify them.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::user::UserId;

/// Minimum title length.
pub const TODO_TITLE_MIN: usize = 3;
/// Maximum title length.
pub const TODO_TITLE_MAX: usize = 100;

/// Validation errors for to-do values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoValidationError {
    TitleTooShort { min: usize },
    TitleTooLong { max: usize },
}

impl TodoValidationError {
    /// Request field the error relates to.
    pub fn field(&self) -> &'static str {
        "title"
    }

    /// Machine-readable validation code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::TitleTooShort { .. } => "too_short",
            Self::TitleTooLong { .. } => "too_long",
        }
    }
}

impl fmt::Display for TodoValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TitleTooShort { min } => write!(f, "title must be at least {min} characters"),
            Self::TitleTooLong { max } => write!(f, "title must be at most {max} characters"),
        }
    }
}

impl std::error::Error for TodoValidationError {}

/// Database-assigned to-do identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(i32);

impl TodoId {
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Title of a to-do, 3 to 100 characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TodoTitle(String);

impl TodoTitle {
    /// Validate and construct a [`TodoTitle`].
    ///
    /// # Examples
    /// ```
    /// use backend::domain::TodoTitle;
    ///
    /// assert!(TodoTitle::new("buy milk").is_ok());
    /// assert!(TodoTitle::new("no").is_err());
    /// ```
    pub fn new(title: impl Into<String>) -> Result<Self, TodoValidationError> {
        let title = title.into();
        let length = title.chars().count();
        if length < TODO_TITLE_MIN {
            return Err(TodoValidationError::TitleTooShort { min: TODO_TITLE_MIN });
        }
        if length > TODO_TITLE_MAX {
            return Err(TodoValidationError::TitleTooLong { max: TODO_TITLE_MAX });
        }
        Ok(Self(title))
    }
}

impl AsRef<str> for TodoTitle {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<TodoTitle> for String {
    fn from(value: TodoTitle) -> Self {
        value.0
    }
}

impl TryFrom<String> for TodoTitle {
    type Error = TodoValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Stored to-do item.
///
/// ## Invariants
/// - `user_id` references an existing user.
/// - `id` and `user_id` never change after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    id: TodoId,
    title: TodoTitle,
    completed: bool,
    user_id: UserId,
}

impl Todo {
    pub fn new(id: TodoId, title: TodoTitle, completed: bool, user_id: UserId) -> Self {
        Self {
            id,
            title,
            completed,
            user_id,
        }
    }

    pub fn id(&self) -> TodoId {
        self.id
    }

    pub fn title(&self) -> &TodoTitle {
        &self.title
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Apply mutable fields, leaving identity untouched.
    pub fn apply(&mut self, changes: &TodoChanges) {
        self.title = changes.title.clone();
        self.completed = changes.completed;
    }
}

/// Values for inserting a new to-do owned by `user_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub title: TodoTitle,
    pub completed: bool,
    pub user_id: UserId,
}

/// Replacement values for the mutable fields of a to-do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoChanges {
    pub title: TodoTitle,
    pub completed: bool,
}

/// Whether updates must be restricted to the caller's own to-dos.
///
/// `Unchecked` authorises an update by id alone. `Enforced` scopes the update
/// to rows owned by the caller so a foreign id behaves like a missing one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TodoOwnershipPolicy {
    #[default]
    Unchecked,
    Enforced,
}

impl TodoOwnershipPolicy {
    /// Build the policy from a boolean flag.
    pub fn from_enforced(enforced: bool) -> Self {
        if enforced { Self::Enforced } else { Self::Unchecked }
    }

    /// Owner to restrict updates to, if any.
    pub fn owner_filter(self, caller: UserId) -> Option<UserId> {
        match self {
            Self::Unchecked => None,
            Self::Enforced => Some(caller),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("abc", true)]
    #[case("buy milk", true)]
    #[case("ab", false)]
    #[case("", false)]
    fn title_lower_bound(#[case] raw: &str, #[case] valid: bool) {
        assert_eq!(TodoTitle::new(raw).is_ok(), valid);
    }

    #[rstest]
    fn title_upper_bound() {
        assert!(TodoTitle::new("x".repeat(100)).is_ok());
        assert_eq!(
            TodoTitle::new("x".repeat(101)),
            Err(TodoValidationError::TitleTooLong { max: TODO_TITLE_MAX })
        );
    }

    #[rstest]
    fn apply_changes_only_title_and_completion() {
        let mut todo = Todo::new(
            TodoId::new(3),
            TodoTitle::new("buy milk").expect("title"),
            false,
            UserId::new(9),
        );
        todo.apply(&TodoChanges {
            title: TodoTitle::new("buy milk v2").expect("title"),
            completed: true,
        });
        assert_eq!(todo.id(), TodoId::new(3));
        assert_eq!(todo.user_id(), UserId::new(9));
        assert_eq!(todo.title().as_ref(), "buy milk v2");
        assert!(todo.completed());
    }

    #[rstest]
    #[case(TodoOwnershipPolicy::Unchecked, None)]
    #[case(TodoOwnershipPolicy::Enforced, Some(UserId::new(4)))]
    fn owner_filter_follows_policy(
        #[case] policy: TodoOwnershipPolicy,
        #[case] expected: Option<UserId>,
    ) {
        assert_eq!(policy.owner_filter(UserId::new(4)), expected);
    }

    #[rstest]
    fn serialises_user_id_in_camel_case() {
        let todo = Todo::new(
            TodoId::new(1),
            TodoTitle::new("buy milk").expect("title"),
            false,
            UserId::new(2),
        );
        let value = serde_json::to_value(&todo).expect("serialise");
        assert_eq!(
            value,
            serde_json::json!({ "id": 1, "title": "buy milk", "completed": false, "userId": 2 })
        );
    }
}
