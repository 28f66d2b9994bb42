//! Cover art urls: `https://uploads.mangadex.org/covers/{mangaId}/{fileName}`.

use url::Url;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CoverSize {
    #[default]
    Original,
    /// 512px wide thumbnail.
    Medium,
    /// 256px wide thumbnail.
    Small,
}

impl CoverSize {
    const fn suffix(self) -> &'static str {
        match self {
            Self::Original => "",
            Self::Medium => ".512.jpg",
            Self::Small => ".256.jpg",
        }
    }
}

pub fn cover_url(
    uploads: &Url,
    manga_id: &str,
    file_name: &str,
    size: CoverSize,
) -> Result<Url, url::ParseError> {
    let file = format!("{file_name}{suffix}", suffix = size.suffix());

    let mut url = uploads.clone();
    url.path_segments_mut()
        .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
        .pop_if_empty()
        .extend(["covers", manga_id, file.as_str()]);

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::{cover_url, CoverSize};
    use pretty_assertions::assert_str_eq;
    use url::Url;

    fn uploads() -> Url {
        Url::parse(crate::UPLOADS_URL).expect("hard-coded url should be valid")
    }

    #[test]
    fn original() {
        let url = cover_url(
            &uploads(),
            "a1c7c817-4e59-43b7-9365-09675a149a6f",
            "e8c1d8a3.jpg",
            CoverSize::Original,
        )
        .expect("url should build");

        assert_str_eq!(
            url.as_str(),
            "https://uploads.mangadex.org/covers/a1c7c817-4e59-43b7-9365-09675a149a6f/e8c1d8a3.jpg"
        )
    }

    #[test]
    fn thumbnail() {
        let url = cover_url(&uploads(), "abc", "cover.png", CoverSize::Small)
            .expect("url should build");

        assert_str_eq!(
            url.as_str(),
            "https://uploads.mangadex.org/covers/abc/cover.png.256.jpg"
        )
    }

    #[test]
    fn proxied_base() {
        let base = Url::parse("https://proxy.example/mangadex/").expect("valid url");
        let url = cover_url(&base, "abc", "cover.png", CoverSize::Medium).expect("url should build");

        assert_str_eq!(
            url.as_str(),
            "https://proxy.example/mangadex/covers/abc/cover.png.512.jpg"
        )
    }
}
