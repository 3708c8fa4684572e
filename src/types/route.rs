use url::form_urlencoded;
use url::Url;

use super::errors::RouteError;

/// Path of the browse page.
pub const BROWSE_PATH: &str = "/browse";

const ROUTE_ORIGIN: &str = "http://localhost/browse";

/// Location of the browse page: bare, or with an active `q` search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Browse,
    Search(String),
}

impl Route {
    /// Parses an absolute (`/browse?q=bali`) or relative (`?q=bali`) location.
    ///
    /// An empty or missing `q` parameter yields [`Route::Browse`].
    pub fn parse(input: &str) -> Result<Self, RouteError> {
        let origin = Url::parse(ROUTE_ORIGIN).map_err(|e| RouteError::Malformed(e.to_string()))?;
        let url = origin
            .join(input.trim())
            .map_err(|e| RouteError::Malformed(e.to_string()))?;

        let path = url.path().trim_end_matches('/');
        if path != BROWSE_PATH {
            return Err(RouteError::UnknownPath(url.path().to_string()));
        }

        let query = url
            .query_pairs()
            .find(|(key, _)| key == "q")
            .map(|(_, value)| value.into_owned())
            .unwrap_or_default();

        Ok(Self::for_query(&query))
    }

    /// Route for a submitted query; empty text means the bare browse page.
    pub fn for_query(query: &str) -> Self {
        if query.is_empty() {
            Route::Browse
        } else {
            Route::Search(query.to_string())
        }
    }

    /// The active search text, empty for [`Route::Browse`].
    pub fn query(&self) -> &str {
        match self {
            Route::Browse => "",
            Route::Search(q) => q,
        }
    }

    pub fn to_path(&self) -> String {
        match self {
            Route::Browse => BROWSE_PATH.to_string(),
            Route::Search(q) => {
                let encoded = form_urlencoded::Serializer::new(String::new())
                    .append_pair("q", q)
                    .finish();
                format!("{}?{}", BROWSE_PATH, encoded)
            }
        }
    }
}
