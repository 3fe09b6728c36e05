// Typed records and closed enums shared across the API. Closed enums fail
// deserialization on unknown values instead of defaulting.

pub mod career;
pub mod chat;
pub mod language;
pub mod profile;
