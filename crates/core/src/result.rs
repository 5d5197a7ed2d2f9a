//! Generic success/failure envelope shared by API-facing code.
//!
//! On the wire this is `{"success": true, "data": ...}` or
//! `{"success": false, "error": "..."}`, which is what the catalog backend
//! returns and what rendering code expects back from fetch helpers.

use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer, ser::SerializeStruct};

/// Either a payload or a human-readable error message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiResult<T> {
    Success(T),
    Failure(String),
}

impl<T> ApiResult<T> {
    pub fn success(data: T) -> Self {
        Self::Success(data)
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self::Failure(error.into())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            Self::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Transform the payload of a success; failures pass through untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResult<U> {
        match self {
            Self::Success(data) => ApiResult::Success(f(data)),
            Self::Failure(error) => ApiResult::Failure(error),
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Success(data) => data,
            Self::Failure(_) => default,
        }
    }

    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Self::Success(data) => data,
            Self::Failure(_) => T::default(),
        }
    }

    pub fn into_result(self) -> Result<T, String> {
        match self {
            Self::Success(data) => Ok(data),
            Self::Failure(error) => Err(error),
        }
    }
}

impl<T, E: core::fmt::Display> From<Result<T, E>> for ApiResult<T> {
    fn from(value: Result<T, E>) -> Self {
        match value {
            Ok(data) => Self::Success(data),
            Err(e) => Self::Failure(e.to_string()),
        }
    }
}

impl<T: Serialize> Serialize for ApiResult<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut st = serializer.serialize_struct("ApiResult", 2)?;
        match self {
            Self::Success(data) => {
                st.serialize_field("success", &true)?;
                st.serialize_field("data", data)?;
            }
            Self::Failure(error) => {
                st.serialize_field("success", &false)?;
                st.serialize_field("error", error)?;
            }
        }
        st.end()
    }
}

#[derive(Deserialize)]
struct Wire<T> {
    success: bool,
    data: Option<T>,
    error: Option<String>,
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ApiResult<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = Wire::<T>::deserialize(deserializer)?;
        match (wire.success, wire.data, wire.error) {
            (true, Some(data), _) => Ok(Self::Success(data)),
            (false, _, Some(error)) => Ok(Self::Failure(error)),
            (true, None, _) => Err(D::Error::missing_field("data")),
            (false, _, None) => Err(D::Error::missing_field("error")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_wire_shape() {
        let r = ApiResult::success(vec![1, 2]);
        assert_eq!(
            serde_json::to_value(&r).unwrap(),
            json!({"success": true, "data": [1, 2]})
        );
    }

    #[test]
    fn failure_wire_shape() {
        let r: ApiResult<u32> = ApiResult::failure("boom");
        assert_eq!(
            serde_json::to_value(&r).unwrap(),
            json!({"success": false, "error": "boom"})
        );
    }

    #[test]
    fn deserializes_both_variants() {
        let ok: ApiResult<String> =
            serde_json::from_value(json!({"success": true, "data": "x"})).unwrap();
        assert_eq!(ok, ApiResult::success("x".to_string()));

        let err: ApiResult<String> =
            serde_json::from_value(json!({"success": false, "error": "nope"})).unwrap();
        assert_eq!(err.error(), Some("nope"));
    }

    #[test]
    fn rejects_mismatched_flag() {
        let bad = serde_json::from_value::<ApiResult<String>>(
            json!({"success": false, "data": "x"}),
        );
        assert!(bad.is_err());
    }

    #[test]
    fn helpers() {
        let ok = ApiResult::success(2);
        assert!(ok.is_success());
        assert_eq!(ok.data(), Some(&2));
        assert_eq!(ok.clone().map(|n| n * 10).into_result(), Ok(20));

        let err: ApiResult<i32> = ApiResult::failure("down");
        assert!(err.is_failure());
        assert_eq!(err.data(), None);
        assert_eq!(err.clone().map(|n| n * 10).error(), Some("down"));
        assert_eq!(err.clone().unwrap_or(7), 7);
        assert_eq!(err.clone().unwrap_or_default(), 0);
        assert_eq!(err.into_result(), Err("down".to_string()));
    }

    #[test]
    fn from_result_formats_error() {
        let r: ApiResult<i32> = Err::<i32, _>(crate::DomainError::not_found()).into();
        assert_eq!(r.error(), Some("not found"));
    }
}
