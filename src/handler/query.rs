//! Query string access
//!
//! Decodes `application/x-www-form-urlencoded` pairs and looks up
//! operands by name.

use std::borrow::Cow;

/// Decoded query parameters in order of appearance
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Decode a raw query string; an undecodable string yields no parameters
    pub fn parse(query: Option<&str>) -> Self {
        let pairs = query
            .and_then(|q| serde_urlencoded::from_str::<Vec<(String, String)>>(q).ok())
            .unwrap_or_default();
        Self { pairs }
    }

    /// Value of `name`; repeated occurrences are joined with `,`
    pub fn get(&self, name: &str) -> Option<Cow<'_, str>> {
        let mut values = self
            .pairs
            .iter()
            .filter(|(k, _)| k == name)
            .map(|(_, v)| v.as_str());

        let first = values.next()?;
        match values.next() {
            None => Some(Cow::Borrowed(first)),
            Some(second) => {
                let mut joined = format!("{first},{second}");
                for v in values {
                    joined.push(',');
                    joined.push_str(v);
                }
                Some(Cow::Owned(joined))
            }
        }
    }
}
