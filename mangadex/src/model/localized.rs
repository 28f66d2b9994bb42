use std::collections::BTreeMap;

/// A string keyed by language code, e.g. `{"en": "Berserk", "ja-ro": "Beruseruku"}`.
///
/// MangaDex serializes an empty map as `[]`, so both shapes are accepted.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(from = "Partial")]
pub struct LocalizedString(BTreeMap<String, String>);

impl LocalizedString {
    pub fn get(&self, language: &str) -> Option<&str> {
        self.0
            .get(language)
            .map(String::as_str)
            .filter(|value| !value.trim().is_empty())
    }

    /// The first non-empty value among `preferred`, then English, then
    /// whichever language sorts first.
    pub fn preferred<'a, I>(&self, preferred: I) -> Option<&str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        preferred
            .into_iter()
            .chain(std::iter::once("en"))
            .find_map(|language| self.get(language))
            .or_else(|| {
                self.0
                    .values()
                    .map(String::as_str)
                    .find(|value| !value.trim().is_empty())
            })
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(|value| value.trim().is_empty())
    }
}

impl<K, V> FromIterator<(K, V)> for LocalizedString
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum Partial {
    Map(BTreeMap<String, String>),
    List(serde::de::IgnoredAny),
}

impl From<Partial> for LocalizedString {
    fn from(partial: Partial) -> Self {
        match partial {
            Partial::Map(map) => Self(map),
            Partial::List(_) => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::LocalizedString;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_list_is_empty_map() {
        let localized: LocalizedString = serde_json::from_str("[]").expect("should parse");

        assert!(localized.is_empty());
        assert_eq!(localized.preferred(["vi"]), None);
    }

    #[test]
    fn preferred_order() {
        let localized: LocalizedString =
            serde_json::from_str(r#"{"ja-ro": "Shingeki no Kyojin", "en": "Attack on Titan", "vi": ""}"#)
                .expect("should parse");

        assert_eq!(localized.preferred(["vi", "ja-ro"]), Some("Shingeki no Kyojin"));
        assert_eq!(localized.preferred(["vi"]), Some("Attack on Titan"));
        assert_eq!(localized.get("vi"), None);
    }

    #[test]
    fn falls_back_to_any_language() {
        let localized = LocalizedString::from_iter([("ko", "나 혼자만 레벨업")]);

        assert_eq!(localized.preferred(["vi"]), Some("나 혼자만 레벨업"));
    }
}
