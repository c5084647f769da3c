// Browser surface: the upload page and its result rendering.

pub mod handlers;
pub mod markdown;
pub mod template;
