mod text;
mod time;

pub(crate) use text::{format_idea_detail, format_idea_line};
