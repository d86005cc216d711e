use crate::client::model::error::ApiError;

/// State of a panel whose data is fetched on demand.
#[derive(Clone, Default, PartialEq)]
pub enum Cache<T> {
    #[default]
    NotFetched,
    Loading,
    Fetched(T),
    Error(ApiError),
}

impl<T> Cache<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Cache::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Cache::Fetched(data) => Some(data),
            _ => None,
        }
    }
}

impl<T> From<Result<T, ApiError>> for Cache<T> {
    fn from(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(data) => Cache::Fetched(data),
            Err(error) => Cache::Error(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_fetch_lifecycle() {
        let cache: Cache<u32> = Cache::default();
        assert!(!cache.is_loading());

        let cache: Cache<u32> = Cache::Loading;
        assert!(cache.is_loading());
        assert_eq!(cache.data(), None);

        let cache = Cache::from(Ok::<u32, ApiError>(3));
        assert_eq!(cache.data(), Some(&3));

        let cache = Cache::<u32>::from(Err(ApiError::new(500, "boom")));
        assert!(matches!(&cache, Cache::Error(e) if e.status == 500));
        assert_eq!(cache.data(), None);
    }
}
