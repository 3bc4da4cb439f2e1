use serde::Deserialize;

use crate::error::AppResult;

pub struct TmdbClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl TmdbClient {
    pub fn new(client: reqwest::Client, api_key: String, base_url: String) -> Self {
        // Warn once on app load if using mock data
        if api_key.trim().is_empty() {
            tracing::warn!("Using mock TMDB data - no TMDB_API_KEY provided");
        }
        Self { client, api_key, base_url }
    }

    fn mock_mode(&self) -> bool {
        self.api_key.trim().is_empty()
    }

    pub async fn search_movies(&self, title: &str) -> AppResult<Vec<MovieSummary>> {
        // Use mock data if the API key is not provided
        if self.mock_mode() {
            return Ok(vec![mock_summary()]);
        }

        let url = format!("{}/search/movie", self.base_url.trim_end_matches('/'));
        let resp: SearchResponse = self
            .client
            .get(url)
            .query(&[("api_key", self.api_key.as_str()), ("query", title)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(resp.results)
    }

    pub async fn movie_detail(&self, id: i32) -> AppResult<MovieDetail> {
        // Use mock data if the API key is not provided
        if self.mock_mode() {
            return Ok(mock_detail());
        }

        let url = format!("{}/movie/{}", self.base_url.trim_end_matches('/'), id);
        let detail: MovieDetail = self
            .client
            .get(url)
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(detail)
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<MovieSummary>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct MovieSummary {
    pub id: i32,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct MovieDetail {
    pub original_title: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub poster_path: Option<String>,
}

fn mock_summary() -> MovieSummary {
    MovieSummary {
        id: 550,
        title: "Fight Club".to_string(),
        overview: "An insomniac office worker and a soap maker form an underground fight club."
            .to_string(),
        release_date: Some("1999-10-15".to_string()),
        poster_path: Some("/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg".to_string()),
    }
}

fn mock_detail() -> MovieDetail {
    let summary = mock_summary();
    MovieDetail {
        original_title: summary.title,
        release_date: "1999-10-15".to_string(),
        overview: summary.overview,
        poster_path: summary.poster_path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_payload_decodes_expected_fields() {
        let payload = r#"{
            "page": 1,
            "results": [
                {
                    "id": 550,
                    "title": "Fight Club",
                    "overview": "An insomniac office worker...",
                    "poster_path": "/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg",
                    "release_date": "1999-10-15",
                    "vote_average": 8.4
                },
                {
                    "id": 551,
                    "title": "Obscure Film"
                }
            ]
        }"#;

        let resp: SearchResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(resp.results.len(), 2);
        assert_eq!(resp.results[0].id, 550);
        assert_eq!(resp.results[0].release_date.as_deref(), Some("1999-10-15"));
        assert_eq!(resp.results[1].overview, "");
        assert_eq!(resp.results[1].poster_path, None);
    }

    #[test]
    fn detail_payload_tolerates_missing_poster() {
        let payload = r#"{
            "original_title": "Fight Club",
            "release_date": "1999-10-15",
            "overview": "An insomniac office worker...",
            "poster_path": null
        }"#;

        let detail: MovieDetail = serde_json::from_str(payload).unwrap();
        assert_eq!(detail.original_title, "Fight Club");
        assert_eq!(detail.poster_path, None);
    }

    #[tokio::test]
    async fn mock_mode_serves_canned_catalog_data() {
        let client = TmdbClient::new(
            reqwest::Client::new(),
            String::new(),
            "http://localhost:9".to_string(),
        );

        let results = client.search_movies("fight club").await.unwrap();
        assert_eq!(results[0].id, 550);

        let detail = client.movie_detail(550).await.unwrap();
        assert_eq!(detail.original_title, "Fight Club");
        assert_eq!(detail.release_date, "1999-10-15");
    }
}
