use crate::har::QueryParam;
use url::Url;

/// Decoded query parameters in URL order, one per value.
pub fn query_params(url: &Url) -> Vec<QueryParam> {
    url.query_pairs()
        .map(|(name, value)| QueryParam {
            name: name.into_owned(),
            value: value.into_owned(),
        })
        .collect()
}
