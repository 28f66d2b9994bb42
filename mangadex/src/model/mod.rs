//! Typed MangaDex entities. Only the attributes this client reads are
//! modelled; everything else in a response is ignored.

mod localized;
pub use localized::LocalizedString;

mod relationship;
pub use relationship::{RelatedAttributes, Relationship, RelationshipType};

mod manga;
pub use manga::{ContentRating, Manga, MangaAttributes, MangaStatus, Tag, TagAttributes};

mod chapter;
pub use chapter::{Chapter, ChapterAttributes};

mod response;
pub use response::{Collection, Entity, ErrorDetail, ErrorResponse};
