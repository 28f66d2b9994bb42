use std::time::Duration;

use backoff::{ExponentialBackoff, ExponentialBackoffBuilder};
use serde::de::DeserializeOwned;
use url::Url;

use super::{
    chapters::ChapterFeed,
    cover::{self, CoverSize},
    model::{Chapter, Collection, Entity, Manga},
    query::{FeedQuery, MangaQuery, Pairs, FEED_PAGE_LIMIT, MANGA_INCLUDES},
    ApiError, AtHome, Error,
};

type Result<T, E = Error> = std::result::Result<T, E>;

pub const API_URL: &str = "https://api.mangadex.org";
pub const UPLOADS_URL: &str = "https://uploads.mangadex.org";

const USER_AGENT: &str = concat!("mangashelf/", env!("CARGO_PKG_VERSION"));

/// Feed pages fetched back to back before pausing, to stay under the rate limit.
const FEED_BURST: u32 = 4;

#[derive(Debug, Clone)]
pub struct MangaDex {
    client: reqwest::Client,
    api: Url,
    uploads: Url,
}

impl Default for MangaDex {
    fn default() -> Self {
        Self::new()
    }
}

impl MangaDex {
    pub fn new() -> Self {
        Self::with_urls(
            Url::parse(API_URL).expect("hard-coded url should be valid"),
            Url::parse(UPLOADS_URL).expect("hard-coded url should be valid"),
        )
    }

    pub fn with_urls(api: Url, uploads: Url) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_default();

        Self {
            client,
            api,
            uploads,
        }
    }

    pub fn api_url(&self) -> &Url {
        &self.api
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.api.clone();
        url.path_segments_mut()
            .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    fn backoff() -> ExponentialBackoff {
        ExponentialBackoffBuilder::new()
            .with_initial_interval(Duration::from_millis(500))
            .with_max_elapsed_time(Some(Duration::from_secs(30)))
            .build()
    }

    async fn get<T: DeserializeOwned>(&self, url: Url, query: &[(String, String)]) -> Result<T> {
        let url = &url;

        backoff::future::retry(Self::backoff(), move || async move {
            let response = self
                .client
                .get(url.clone())
                .query(query)
                .send()
                .await
                .map_err(|err| Error::from(err).backoff())?;

            let status = response.status();
            if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                tracing::warn!(%url, "rate limited by mangadex, backing off");
            }

            decode(response).await.map_err(Error::backoff)
        })
        .await
    }

    #[tracing::instrument(skip_all, fields(title = ?query.title, offset = query.offset))]
    pub async fn manga_list(&self, query: &MangaQuery) -> Result<Collection<Manga>> {
        let url = self.endpoint(&["manga"])?;
        let page: Collection<Manga> = self.get(url, &query.pairs()).await?;

        tracing::debug!(count = page.data.len(), total = page.total, "fetched manga list");

        Ok(page)
    }

    #[tracing::instrument(skip(self))]
    pub async fn manga(&self, id: &str) -> Result<Manga> {
        let url = self.endpoint(&["manga", id])?;
        let pairs: Pairs = MANGA_INCLUDES
            .iter()
            .map(|include| ("includes[]".to_owned(), (*include).to_owned()))
            .collect();

        let entity: Entity<Manga> = self.get(url, &pairs).await?;
        Ok(entity.data)
    }

    /// One page of a manga's chapter feed, with chapters left as raw JSON.
    #[tracing::instrument(skip(self, query), fields(offset = query.offset))]
    pub async fn manga_feed(
        &self,
        id: &str,
        query: &FeedQuery,
    ) -> Result<Collection<serde_json::Value>> {
        let url = self.endpoint(&["manga", id, "feed"])?;
        self.get(url, &query.pairs()).await
    }

    /// Walks the whole feed, [`FEED_PAGE_LIMIT`] chapters at a time.
    #[tracing::instrument(skip(self, query))]
    pub async fn all_chapters(&self, id: &str, query: &FeedQuery) -> Result<ChapterFeed> {
        let mut query = FeedQuery {
            limit: FEED_PAGE_LIMIT,
            offset: 0,
            ..query.clone()
        };
        let mut feed = ChapterFeed::default();
        let mut requests = 0;

        loop {
            if pause_before(requests) {
                tokio::time::sleep(Duration::from_secs(1)).await;
            }

            let page = self.manga_feed(id, &query).await?;
            requests += 1;

            let next = next_offset(&page);
            feed.extend(page.data);

            match next {
                Some(offset) => query.offset = offset,
                None => break,
            }
        }

        tracing::info!(chapters = feed.len(), requests, "fetched chapter feed");

        Ok(feed)
    }

    #[tracing::instrument(skip(self))]
    pub async fn chapter(&self, id: &str) -> Result<Chapter> {
        let url = self.endpoint(&["chapter", id])?;
        let pairs: Pairs = vec![
            ("includes[]".to_owned(), "scanlation_group".to_owned()),
            ("includes[]".to_owned(), "manga".to_owned()),
        ];

        let entity: Entity<Chapter> = self.get(url, &pairs).await?;
        Ok(entity.data)
    }

    #[tracing::instrument(skip(self))]
    pub async fn at_home(&self, chapter_id: &str) -> Result<AtHome> {
        let url = self.endpoint(&["at-home", "server", chapter_id])?;
        self.get(url, &[]).await
    }

    pub fn cover_url(&self, manga: &Manga, size: CoverSize) -> Option<Url> {
        let file_name = manga.cover_file()?;

        cover::cover_url(&self.uploads, &manga.id, file_name, size)
            .inspect_err(|err| tracing::warn!(%err, manga = %manga.id, "couldn't build cover url"))
            .ok()
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();

    if status.is_success() {
        return Ok(response.json().await?);
    }

    let body = response.text().await.unwrap_or_default();
    Err(ApiError::from_body(status, &body).into())
}

/// Every `FEED_BURST` requests, the next one waits a second.
fn pause_before(requests: u32) -> bool {
    requests > 0 && requests % FEED_BURST == 0
}

/// Where the next feed page starts, or `None` after the last page.
fn next_offset<T>(page: &Collection<T>) -> Option<u32> {
    page.has_more()
        .then(|| page.offset.saturating_add(page.data.len() as u32))
}

#[cfg(test)]
mod tests {
    use super::{next_offset, pause_before, MangaDex};
    use crate::model::{Collection, Manga};
    use pretty_assertions::{assert_eq, assert_str_eq};
    use url::Url;

    #[test]
    fn endpoints() {
        let client = MangaDex::new();

        assert_str_eq!(
            client
                .endpoint(&["manga", "abc", "feed"])
                .expect("url should build")
                .as_str(),
            "https://api.mangadex.org/manga/abc/feed"
        );
    }

    #[test]
    fn feed_walk() {
        let first = Collection {
            data: vec![(); 500],
            limit: 500,
            offset: 0,
            total: 1203,
        };
        assert_eq!(next_offset(&first), Some(500));

        // the server may return fewer than `limit`
        let short = Collection {
            data: vec![(); 480],
            limit: 500,
            offset: 500,
            total: 1203,
        };
        assert_eq!(next_offset(&short), Some(980));

        let last = Collection {
            data: vec![(); 223],
            limit: 500,
            offset: 980,
            total: 1203,
        };
        assert_eq!(next_offset(&last), None);

        let empty: Collection<()> = Collection {
            data: vec![],
            limit: 500,
            offset: 500,
            total: 1203,
        };
        assert_eq!(next_offset(&empty), None);
    }

    #[test]
    fn feed_pauses() {
        let paused: Vec<u32> = (0..13).filter(|&requests| pause_before(requests)).collect();
        assert_eq!(paused, [4, 8, 12]);
    }

    #[test]
    fn endpoints_under_a_path() {
        let client = MangaDex::with_urls(
            Url::parse("http://localhost:8080/proxy/").expect("valid url"),
            Url::parse("http://localhost:8080/uploads").expect("valid url"),
        );

        assert_str_eq!(
            client
                .endpoint(&["at-home", "server", "xyz"])
                .expect("url should build")
                .as_str(),
            "http://localhost:8080/proxy/at-home/server/xyz"
        );
    }

    #[test]
    fn cover_url() {
        let client = MangaDex::new();
        let manga: Manga = serde_json::from_value(serde_json::json!({
            "id": "m1",
            "attributes": {"title": {"en": "Test"}},
            "relationships": [
                {"id": "c", "type": "cover_art", "attributes": {"fileName": "f.jpg"}}
            ]
        }))
        .expect("fixture should deserialize");

        assert_str_eq!(
            client
                .cover_url(&manga, crate::cover::CoverSize::Small)
                .expect("cover should exist")
                .as_str(),
            "https://uploads.mangadex.org/covers/m1/f.jpg.256.jpg"
        );
    }
}
