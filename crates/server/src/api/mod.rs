mod location;
mod search;
mod view;

pub use location::*;
pub use search::*;
pub use view::*;

#[cfg(test)]
fn query(
    pairs: &[(&str, &str)],
) -> axum::extract::Query<std::collections::HashMap<String, String>> {
    axum::extract::Query(
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect(),
    )
}

#[cfg(test)]
async fn body_text(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
