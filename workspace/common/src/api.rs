use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::error::Result;
use crate::model::UsersPage;
use crate::view::UsersAction;

/// Path of the endpoint listing every user with their accounts.
pub const ALL_USERS_PATH: &str = "/api/allusers";

/// Source of the user collection.
///
/// Futures are not `Send`: the browser implementation runs on the
/// single-threaded wasm event loop.
#[async_trait(?Send)]
pub trait UsersApi {
    /// One attempt, no retries.
    async fn fetch_users(&self) -> Result<UsersPage>;
}

/// Runs the page load: `StartLoading`, then exactly one of `Loaded` or
/// `Failed`. Errors are turned into actions and never returned.
#[instrument(skip_all)]
pub async fn load_users<A, F>(api: &A, dispatch: F)
where
    A: UsersApi + ?Sized,
    F: Fn(UsersAction),
{
    dispatch(UsersAction::StartLoading);

    let outcome = api.fetch_users().await;
    debug!(ok = outcome.is_ok(), "Users fetch finished");

    dispatch(match outcome {
        Ok(page) => UsersAction::Loaded(page),
        Err(err) => UsersAction::Failed(err.message().to_string()),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::fetch_state::FetchState;
    use crate::model::User;
    use crate::view::UsersView;
    use std::cell::{Cell, RefCell};

    struct StubApi {
        outcome: Result<UsersPage>,
        calls: Cell<usize>,
    }

    impl StubApi {
        fn new(outcome: Result<UsersPage>) -> Self {
            Self { outcome, calls: Cell::new(0) }
        }
    }

    #[async_trait(?Send)]
    impl UsersApi for StubApi {
        async fn fetch_users(&self) -> Result<UsersPage> {
            self.calls.set(self.calls.get() + 1);
            self.outcome.clone()
        }
    }

    fn user(id: &str) -> User {
        User { id: id.into(), username: format!("name-{id}"), ..Default::default() }
    }

    async fn run(api: &StubApi) -> (UsersView, Vec<UsersAction>) {
        let view = RefCell::new(UsersView::default());
        let seen = RefCell::new(Vec::new());
        load_users(api, |action| {
            seen.borrow_mut().push(action.clone());
            view.borrow_mut().apply(action);
        })
        .await;
        (view.into_inner(), seen.into_inner())
    }

    #[tokio::test]
    async fn test_success_ends_loaded() {
        let page = UsersPage { count: 2, users: vec![user("1"), user("2")] };
        let api = StubApi::new(Ok(page.clone()));

        let (view, actions) = run(&api).await;

        assert_eq!(api.calls.get(), 1);
        assert_eq!(actions, vec![UsersAction::StartLoading, UsersAction::Loaded(page.clone())]);
        assert_eq!(view.load_state(), &FetchState::Success(page));
        assert_eq!(view.users().len(), 2);
        assert_eq!(view.error_banner(), None);
    }

    #[tokio::test]
    async fn test_failure_ends_errored() {
        let api = StubApi::new(Err(ApiError::RequestFailed("Network down".into())));

        let (view, actions) = run(&api).await;

        assert_eq!(api.calls.get(), 1);
        assert_eq!(actions.len(), 2);
        assert!(!view.is_loading());
        assert_eq!(view.error_banner().as_deref(), Some("Error: Network down"));
        assert!(view.visible_users().is_empty());
    }
}
