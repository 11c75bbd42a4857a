/// Lifecycle of a one-shot API fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    NotStarted,
    Loading,
    Success(T),
    Error(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::NotStarted
    }
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_follow_state() {
        let loading: FetchState<u8> = FetchState::Loading;
        assert!(loading.is_loading());
        assert_eq!(loading.data(), None);

        let done = FetchState::Success(7u8);
        assert!(!done.is_loading());
        assert_eq!(done.data(), Some(&7));
        assert_eq!(done.error(), None);

        let failed: FetchState<u8> = FetchState::Error("Network down".into());
        assert_eq!(failed.error(), Some("Network down"));
        assert_eq!(FetchState::<u8>::default(), FetchState::NotStarted);
    }
}
