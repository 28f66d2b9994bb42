use url::Url;

/// Response of `GET /at-home/server/{chapterId}`: where a chapter's page
/// images can be fetched from.
#[derive(serde::Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AtHome {
    pub base_url: Url,
    pub chapter: AtHomeChapter,
}

#[derive(serde::Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AtHomeChapter {
    pub hash: String,

    #[serde(default)]
    pub data: Vec<String>,

    #[serde(default)]
    pub data_saver: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Quality {
    #[default]
    Data,
    DataSaver,
}

impl Quality {
    const fn path(self) -> &'static str {
        match self {
            Self::Data => "data",
            Self::DataSaver => "data-saver",
        }
    }
}

impl AtHome {
    /// Page image urls in reading order: `{baseUrl}/{quality}/{hash}/{file}`.
    pub fn page_urls(&self, quality: Quality) -> Result<Vec<Url>, url::ParseError> {
        let files = match quality {
            Quality::Data => &self.chapter.data,
            Quality::DataSaver => &self.chapter.data_saver,
        };

        files
            .iter()
            .map(|file| -> Result<Url, url::ParseError> {
                let mut url = self.base_url.clone();
                url.path_segments_mut()
                    .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
                    .pop_if_empty()
                    .extend([quality.path(), self.chapter.hash.as_str(), file.as_str()]);
                Ok(url)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{AtHome, Quality};
    use pretty_assertions::assert_eq;

    #[test]
    fn page_urls() {
        let at_home: AtHome = serde_json::from_str(
            r#"{
                "result": "ok",
                "baseUrl": "https://cmdxd98sb0x3yprd.mangadex.network",
                "chapter": {
                    "hash": "3303dd03ac8d27452cce3f2a882e94b2",
                    "data": ["1-f7a76de1.png", "2-2cbd6d3c.png"],
                    "dataSaver": ["1-27f4ad88.jpg"]
                }
            }"#,
        )
        .expect("fixture should deserialize");

        let urls: Vec<String> = at_home
            .page_urls(Quality::Data)
            .expect("urls should build")
            .into_iter()
            .map(String::from)
            .collect();

        assert_eq!(
            urls,
            vec![
                "https://cmdxd98sb0x3yprd.mangadex.network/data/3303dd03ac8d27452cce3f2a882e94b2/1-f7a76de1.png",
                "https://cmdxd98sb0x3yprd.mangadex.network/data/3303dd03ac8d27452cce3f2a882e94b2/2-2cbd6d3c.png",
            ]
        );

        let saver = at_home
            .page_urls(Quality::DataSaver)
            .expect("urls should build");

        assert_eq!(
            saver[0].as_str(),
            "https://cmdxd98sb0x3yprd.mangadex.network/data-saver/3303dd03ac8d27452cce3f2a882e94b2/1-27f4ad88.jpg"
        );
    }
}
