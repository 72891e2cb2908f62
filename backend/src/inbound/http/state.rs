//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{AuthCommand, IdentityResolver, TodosCommand, TodosQuery, UsersQuery};

/// Dependency bundle for HTTP handlers and the bearer guard.
#[derive(Clone)]
pub struct HttpState {
    pub auth: Arc<dyn AuthCommand>,
    pub identity: Arc<dyn IdentityResolver>,
    pub todos: Arc<dyn TodosCommand>,
    pub todos_query: Arc<dyn TodosQuery>,
    pub users: Arc<dyn UsersQuery>,
}

/// Parameter object naming every port the HTTP layer needs.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub auth: Arc<dyn AuthCommand>,
    pub identity: Arc<dyn IdentityResolver>,
    pub todos: Arc<dyn TodosCommand>,
    pub todos_query: Arc<dyn TodosQuery>,
    pub users: Arc<dyn UsersQuery>,
}

impl HttpState {
    /// Construct state from a ports bundle.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use backend::domain::{
    ///     AuthenticationService, TodoOwnershipPolicy, TodoService, UserDirectory,
    /// };
    /// use backend::inbound::http::state::{HttpState, HttpStatePorts};
    /// use backend::outbound::memory::InMemoryStore;
    /// use backend::outbound::security::{BcryptPasswordHasher, JwtTokenService};
    /// use zeroize::Zeroizing;
    ///
    /// let store = Arc::new(InMemoryStore::new());
    /// let tokens = JwtTokenService::new(&Zeroizing::new("secret".to_owned()), None);
    /// let auth = Arc::new(AuthenticationService::new(
    ///     store.clone(),
    ///     Arc::new(BcryptPasswordHasher::default()),
    ///     Arc::new(tokens),
    /// ));
    /// let todos = Arc::new(TodoService::new(store.clone(), TodoOwnershipPolicy::default()));
    /// let state = HttpState::new(HttpStatePorts {
    ///     auth: auth.clone(),
    ///     identity: auth,
    ///     todos: todos.clone(),
    ///     todos_query: todos,
    ///     users: Arc::new(UserDirectory::new(store)),
    /// });
    /// let _users = state.users.clone();
    /// ```
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            auth,
            identity,
            todos,
            todos_query,
            users,
        } = ports;
        Self {
            auth,
            identity,
            todos,
            todos_query,
            users,
        }
    }
}
