pub mod diary_parser;
pub mod diary_serializer;

pub use diary_parser::parse_diary;
pub use diary_serializer::serialize_diary;
